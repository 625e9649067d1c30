//! The policy record schema.
//!
//! The schema is fixed at compile time: one struct, three closed
//! categorical domains. The store maps this 1:1 onto the `policy` table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One synthesized insurance policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub policy_id: String, // "POL0", "POL1", ... unique per run
    pub policy_type: PolicyType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate, // always >= start_date
    pub coverage_amount: f64,
    pub premium_amount: f64,
    pub payment_frequency: PaymentFrequency,
    pub policy_status: PolicyStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyType {
    #[serde(rename = "term")]
    Term,
    #[serde(rename = "whole life")]
    WholeLife,
    #[serde(rename = "universal life")]
    UniversalLife,
}

impl PolicyType {
    pub const ALL: [Self; 3] = [Self::Term, Self::WholeLife, Self::UniversalLife];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Term => "term",
            Self::WholeLife => "whole life",
            Self::UniversalLife => "universal life",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentFrequency {
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "quarterly")]
    Quarterly,
    #[serde(rename = "semi-annually")]
    SemiAnnually,
    #[serde(rename = "annually")]
    Annually,
}

impl PaymentFrequency {
    pub const ALL: [Self; 4] = [
        Self::Monthly,
        Self::Quarterly,
        Self::SemiAnnually,
        Self::Annually,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::SemiAnnually => "semi-annually",
            Self::Annually => "annually",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyStatus {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "lapsed")]
    Lapsed,
    #[serde(rename = "canceled")]
    Canceled,
}

impl PolicyStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Lapsed, Self::Canceled];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Lapsed => "lapsed",
            Self::Canceled => "canceled",
        }
    }
}
