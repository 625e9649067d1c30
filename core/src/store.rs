//! SQLite-backed policy table.
//!
//! RULE: Only store.rs talks to the database. The generator and the
//! runner call store methods — they never execute SQL directly.
//!
//! The store is an explicit handle: constructed by the caller, dropped
//! at scope exit. There is no ambient global session.

use crate::{error::PolicyResult, record::PolicyRecord};
use rusqlite::{params, Connection};
use serde::Serialize;

/// One grouped result row: a policy type and its mean coverage amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageAverage {
    pub policy_type: String,
    pub avg_coverage: f64,
}

pub struct PolicyStore {
    conn: Connection,
}

impl PolicyStore {
    pub fn open(path: &str) -> PolicyResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI,
        )?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (the default for a one-shot run).
    pub fn in_memory() -> PolicyResult<Self> {
        let conn = Connection::open(":memory:")?;
        Ok(Self { conn })
    }

    /// Apply the schema.
    pub fn migrate(&self) -> PolicyResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_policies.sql"))?;
        Ok(())
    }

    /// Insert a batch of generated records in one transaction.
    pub fn insert_policies(&mut self, records: &[PolicyRecord]) -> PolicyResult<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO policy (
                    policy_id, policy_type, start_date, end_date,
                    coverage_amount, premium_amount, payment_frequency, policy_status
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for r in records {
                stmt.execute(params![
                    &r.policy_id,
                    r.policy_type.as_str(),
                    r.start_date.to_string(),
                    r.end_date.to_string(),
                    r.coverage_amount,
                    r.premium_amount,
                    r.payment_frequency.as_str(),
                    r.policy_status.as_str(),
                ])?;
            }
        }
        tx.commit()?;
        log::debug!("inserted {} policy rows", records.len());
        Ok(())
    }

    /// Mean coverage amount per policy type, ascending by the average.
    ///
    /// Only types actually present in the table appear; an empty table
    /// yields an empty result. The secondary sort key keeps the order
    /// of tied averages stable across calls.
    pub fn avg_coverage_by_type(&self) -> PolicyResult<Vec<CoverageAverage>> {
        let mut stmt = self.conn.prepare(
            "SELECT policy_type, AVG(coverage_amount) AS avg_coverage
             FROM policy
             GROUP BY policy_type
             ORDER BY avg_coverage ASC, policy_type ASC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(CoverageAverage {
                    policy_type: row.get(0)?,
                    avg_coverage: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    // ── Test / summary helpers ─────────────────────────────────────

    pub fn policy_count(&self) -> PolicyResult<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM policy", [], |row| row.get(0))
            .map_err(Into::into)
    }

    pub fn distinct_type_count(&self) -> PolicyResult<i64> {
        self.conn
            .query_row(
                "SELECT COUNT(DISTINCT policy_type) FROM policy",
                [],
                |row| row.get(0),
            )
            .map_err(Into::into)
    }
}
