use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tunable bounds for record synthesis. Every field has a default that
/// matches the canonical run: 1000 records, start dates in
/// [2010-01-01, 2022-01-01), terms up to 30 years.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub record_count: i64,
    pub start_date_min: NaiveDate, // inclusive
    pub start_date_max: NaiveDate, // exclusive
    pub max_term_years: u32,       // end_date offset drawn from [0, max_term_years)
    pub coverage_min: f64,
    pub coverage_max: f64,
    pub premium_min: f64,
    pub premium_max: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            record_count: 1000,
            start_date_min: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
            start_date_max: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            max_term_years: 30,
            coverage_min: 10_000.0,
            coverage_max: 1_000_000.0,
            premium_min: 50.0,
            premium_max: 5_000.0,
        }
    }
}
