//! policydata-core: synthetic insurance policy records and the
//! SQLite-backed table they are aggregated through.
//!
//! The pipeline is deliberately small: a seeded [`generator::RecordGenerator`]
//! produces a batch of [`record::PolicyRecord`]s, a [`store::PolicyStore`]
//! holds them for the duration of one run, and the store answers the single
//! grouped query (average coverage per policy type, ascending by average).

pub mod config;
pub mod error;
pub mod generator;
pub mod record;
pub mod rng;
pub mod store;
