//! Aggregation of the cleaned table
//!
//! This module computes the scalar metrics, value counts and
//! cross-tabulations behind every dashboard chart. All functions are
//! pure: they read the cleaned table and never modify it.

pub mod crosstab;
pub mod frequency;
pub mod metrics;

// Re-export commonly used items
pub use crosstab::CrossTab;
pub use frequency::{Count, FrequencyTable};
pub use metrics::{ScalarMetrics, YearRange};

use serde::Serialize;

use crate::core::constants::{columns, defaults};
use crate::core::error::Result;
use crate::core::types::Table;

/// How many categories the ranking charts keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub top_universities: usize,
    pub top_university_trends: usize,
    pub top_districts: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            top_universities: defaults::TOP_UNIVERSITIES,
            top_university_trends: defaults::TOP_UNIVERSITY_TRENDS,
            top_districts: defaults::TOP_DISTRICTS,
        }
    }
}

/// Chart data of the dashboard, grouped by dashboard tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    /// Graduates per passout year, chronological
    pub graduation_trend: FrequencyTable,
    pub gender_distribution: FrequencyTable,
    pub gender_by_year: CrossTab,
    pub gender_by_zone: CrossTab,
    pub country_distribution: FrequencyTable,
    pub top_universities: FrequencyTable,
    /// Graduates per year for the most frequent universities
    pub university_trends: CrossTab,
    pub top_districts: FrequencyTable,
    pub zone_by_year: CrossTab,
}

/// Everything the presentation layer needs from one cleaned table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub metrics: ScalarMetrics,
    pub charts: ChartData,
}

/// Compute metrics and chart data for a cleaned table
pub fn summarize(table: &Table, options: &AnalysisOptions) -> Result<DashboardSummary> {
    let metrics = ScalarMetrics::from_records(&table.graduates()?);

    let top_trend_universities = FrequencyTable::of_column(table, columns::UNIVERSITY)?
        .top(options.top_university_trends);
    let trend_table = table.retain_values(columns::UNIVERSITY, &top_trend_universities.values())?;

    let charts = ChartData {
        graduation_trend: FrequencyTable::of_column(table, columns::PASSOUT_YEAR)?
            .sorted_by_value(),
        gender_distribution: FrequencyTable::of_column(table, columns::GENDER)?,
        gender_by_year: CrossTab::of_columns(table, columns::PASSOUT_YEAR, columns::GENDER)?,
        gender_by_zone: CrossTab::of_columns(table, columns::ZONE, columns::GENDER)?,
        country_distribution: FrequencyTable::of_column(table, columns::COUNTRY)?,
        top_universities: FrequencyTable::of_column(table, columns::UNIVERSITY)?
            .top(options.top_universities),
        university_trends: CrossTab::of_columns(
            &trend_table,
            columns::PASSOUT_YEAR,
            columns::UNIVERSITY,
        )?,
        top_districts: FrequencyTable::of_column(table, columns::DISTRICT)?
            .top(options.top_districts),
        zone_by_year: CrossTab::of_columns(table, columns::PASSOUT_YEAR, columns::ZONE)?,
    };

    Ok(DashboardSummary { metrics, charts })
}
