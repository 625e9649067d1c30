//! Synthetic policy record generation.
//!
//! Each record is an independent draw from the domains in
//! [`GeneratorConfig`]; the only cross-record state is the sequential
//! policy id. All randomness comes from the caller's [`PolicyRng`].

use crate::{
    config::GeneratorConfig,
    error::{PolicyError, PolicyResult},
    record::{PaymentFrequency, PolicyRecord, PolicyStatus, PolicyType},
    rng::PolicyRng,
};
use chrono::{Months, NaiveDate};

pub struct RecordGenerator {
    config: GeneratorConfig,
}

impl RecordGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Produce exactly `count` records. `count == 0` yields an empty
    /// batch; a negative `count` is rejected before any draw happens.
    pub fn generate(&self, count: i64, rng: &mut PolicyRng) -> PolicyResult<Vec<PolicyRecord>> {
        if count < 0 {
            return Err(PolicyError::InvalidCount { count });
        }

        let mut records = Vec::with_capacity(count as usize);
        for i in 0..count {
            records.push(self.generate_one(i, rng)?);
        }
        log::info!("generated {} policy records", records.len());
        Ok(records)
    }

    fn generate_one(&self, index: i64, rng: &mut PolicyRng) -> PolicyResult<PolicyRecord> {
        let start_date =
            random_date(self.config.start_date_min, self.config.start_date_max, rng);
        let term_years = rng.next_u64_below(self.config.max_term_years.max(1) as u64) as u32;
        let end_date = start_date
            .checked_add_months(Months::new(term_years * 12))
            .ok_or_else(|| anyhow::anyhow!("end date out of range: {start_date} + {term_years}y"))?;

        Ok(PolicyRecord {
            policy_id: format!("POL{index}"),
            policy_type: *rng.pick(&PolicyType::ALL),
            start_date,
            end_date,
            coverage_amount: round_cents(
                rng.uniform_range(self.config.coverage_min, self.config.coverage_max),
            ),
            premium_amount: round_cents(
                rng.uniform_range(self.config.premium_min, self.config.premium_max),
            ),
            payment_frequency: *rng.pick(&PaymentFrequency::ALL),
            policy_status: *rng.pick(&PolicyStatus::ALL),
        })
    }
}

/// Uniform calendar date in [lo, hi), drawn on the epoch-day axis.
/// A degenerate range (hi <= lo) collapses to lo.
fn random_date(lo: NaiveDate, hi: NaiveDate, rng: &mut PolicyRng) -> NaiveDate {
    let span_days = (hi - lo).num_days();
    if span_days <= 0 {
        return lo;
    }
    lo + chrono::Duration::days(rng.next_u64_below(span_days as u64) as i64)
}

/// Round a monetary amount to 2 decimal digits.
/// `f64::round` rounds half away from zero, which for these strictly
/// positive amounts is round-half-up.
pub fn round_cents(raw: f64) -> f64 {
    (raw * 100.0).round() / 100.0
}
