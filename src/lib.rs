//! gradboard - graduate records analytics
//!
//! Reads a spreadsheet of graduate records (`.xlsx` or `.csv`), splits the
//! composite `University/Country` and `Address` fields, canonicalizes country
//! codes and university names, and aggregates the cleaned table into the
//! metrics and chart data of a dashboard.
//!
//! The pipeline is a chain of pure stages:
//!
//! ```text
//! load_table -> CleaningPipeline::run -> summarize -> display / dashboard
//! ```

pub mod analysis;
pub mod cleaning;
pub mod config;
pub mod core;
pub mod ingest;
pub mod reporting;
pub mod ui;

// Re-export commonly used items
pub use analysis::{AnalysisOptions, DashboardSummary, summarize};
pub use cleaning::{CleaningPipeline, NameNormalizer};
pub use config::{CliConfig, Config};
pub use crate::core::{GradboardError, GraduateRecord, Result, Table};
pub use ingest::{export_csv, load_table};
