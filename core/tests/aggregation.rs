//! Grouped-average tests against the in-memory policy table.

use chrono::NaiveDate;
use policydata_core::config::GeneratorConfig;
use policydata_core::generator::RecordGenerator;
use policydata_core::record::{PaymentFrequency, PolicyRecord, PolicyStatus, PolicyType};
use policydata_core::rng::PolicyRng;
use policydata_core::store::PolicyStore;

fn record(id: &str, policy_type: PolicyType, coverage: f64) -> PolicyRecord {
    let start = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
    PolicyRecord {
        policy_id: id.to_string(),
        policy_type,
        start_date: start,
        end_date: start,
        coverage_amount: coverage,
        premium_amount: 100.0,
        payment_frequency: PaymentFrequency::Monthly,
        policy_status: PolicyStatus::Active,
    }
}

fn fresh_store() -> PolicyStore {
    let store = PolicyStore::in_memory().unwrap();
    store.migrate().unwrap();
    store
}

#[test]
fn three_row_scenario_groups_and_sorts_ascending() {
    let mut store = fresh_store();
    store
        .insert_policies(&[
            record("POL0", PolicyType::Term, 100_000.0),
            record("POL1", PolicyType::Term, 200_000.0),
            record("POL2", PolicyType::WholeLife, 300_000.0),
        ])
        .unwrap();

    let averages = store.avg_coverage_by_type().unwrap();
    assert_eq!(averages.len(), 2, "Expected 2 groups, got {}", averages.len());
    assert_eq!(averages[0].policy_type, "term");
    assert_eq!(averages[0].avg_coverage, 150_000.0);
    assert_eq!(averages[1].policy_type, "whole life");
    assert_eq!(averages[1].avg_coverage, 300_000.0);
}

#[test]
fn single_type_yields_one_row_with_arithmetic_mean() {
    let coverages = [12_345.67, 98_765.43, 55_555.55, 10_000.00];
    let mut store = fresh_store();
    let records: Vec<_> = coverages
        .iter()
        .enumerate()
        .map(|(i, &c)| record(&format!("POL{i}"), PolicyType::UniversalLife, c))
        .collect();
    store.insert_policies(&records).unwrap();

    let averages = store.avg_coverage_by_type().unwrap();
    assert_eq!(averages.len(), 1);
    assert_eq!(averages[0].policy_type, "universal life");

    let mean: f64 = coverages.iter().sum::<f64>() / coverages.len() as f64;
    assert!((averages[0].avg_coverage - mean).abs() < 1e-9,
        "Average {} differs from mean {mean}", averages[0].avg_coverage);
}

#[test]
fn empty_table_yields_empty_result() {
    let store = fresh_store();
    assert_eq!(store.policy_count().unwrap(), 0);
    let averages = store.avg_coverage_by_type().unwrap();
    assert!(averages.is_empty(), "Expected no groups, got {}", averages.len());
}

#[test]
fn repeated_aggregation_is_identical() {
    let mut store = fresh_store();
    store
        .insert_policies(&[
            record("POL0", PolicyType::Term, 40_000.0),
            record("POL1", PolicyType::WholeLife, 40_000.0),
            record("POL2", PolicyType::UniversalLife, 75_000.0),
        ])
        .unwrap();

    let first = store.avg_coverage_by_type().unwrap();
    let second = store.avg_coverage_by_type().unwrap();
    assert_eq!(first, second, "Aggregation output changed between calls");
}

#[test]
fn generated_batch_aggregates_within_bounds() {
    let generator = RecordGenerator::new(GeneratorConfig::default());
    let mut rng = PolicyRng::seeded(123);
    let records = generator.generate(1000, &mut rng).unwrap();

    let mut store = fresh_store();
    store.insert_policies(&records).unwrap();
    assert_eq!(store.policy_count().unwrap(), 1000);
    assert!(store.distinct_type_count().unwrap() <= 3);

    let averages = store.avg_coverage_by_type().unwrap();
    assert!(!averages.is_empty());
    for row in &averages {
        assert!((10_000.0..=1_000_000.0).contains(&row.avg_coverage),
            "{}: average {} outside coverage bounds", row.policy_type, row.avg_coverage);
    }
    for pair in averages.windows(2) {
        assert!(pair[0].avg_coverage <= pair[1].avg_coverage,
            "Averages not ascending: {} > {}", pair[0].avg_coverage, pair[1].avg_coverage);
    }
}

#[test]
fn empty_generation_run_ends_with_empty_report() {
    let generator = RecordGenerator::new(GeneratorConfig::default());
    let mut rng = PolicyRng::seeded(9);
    let records = generator.generate(0, &mut rng).unwrap();

    let mut store = fresh_store();
    store.insert_policies(&records).unwrap();
    assert!(store.avg_coverage_by_type().unwrap().is_empty());
}
