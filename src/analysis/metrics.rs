use rustc_hash::FxHashSet;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::core::constants::metrics;
use crate::core::types::GraduateRecord;

/// Inclusive range of passout years
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearRange {
    Span { min: i32, max: i32 },
    NotApplicable,
}

impl YearRange {
    pub fn from_years(years: impl IntoIterator<Item = i32>) -> Self {
        years.into_iter().fold(Self::NotApplicable, |range, year| match range {
            Self::NotApplicable => Self::Span {
                min: year,
                max: year,
            },
            Self::Span { min, max } => Self::Span {
                min: min.min(year),
                max: max.max(year),
            },
        })
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Span { min, max } => write!(f, "{min}-{max}"),
            Self::NotApplicable => write!(f, "{}", metrics::NOT_APPLICABLE),
        }
    }
}

impl Serialize for YearRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Headline numbers of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalarMetrics {
    pub total_graduates: usize,
    pub universities: usize,
    pub countries: usize,
    /// Share of records whose gender is exactly `Male`, 0 for no records
    pub male_percentage: f64,
    pub year_range: YearRange,
}

impl ScalarMetrics {
    pub fn from_records(records: &[GraduateRecord]) -> Self {
        let total_graduates = records.len();

        let male_count = records
            .iter()
            .filter(|record| record.gender == metrics::MALE)
            .count();
        let male_percentage = if total_graduates > 0 {
            male_count as f64 / total_graduates as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_graduates,
            universities: distinct(records.iter().map(|record| record.university.as_str())),
            countries: distinct(records.iter().map(|record| record.country.as_str())),
            male_percentage,
            year_range: YearRange::from_years(records.iter().filter_map(|record| record.passout_year)),
        }
    }
}

/// Number of distinct non-missing values
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values
        .filter(|value| !value.is_empty())
        .collect::<FxHashSet<_>>()
        .len()
}
