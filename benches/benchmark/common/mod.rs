use criterion::Criterion;
use outcome_rail::{Context, Outcome};
use std::time::Duration;

// ============================================================================
// Test Data & Domain Types
// ============================================================================

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Record {
    pub id: u64,
    pub owner: String,
    pub balance_cents: i64,
}

impl Record {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            owner: format!("account_{id}"),
            balance_cents: (id as i64) * 137,
        }
    }
}

#[derive(Debug, Clone)]
pub enum StepError {
    Parse(String),
    Quota(String),
    Storage(String),
}

impl std::fmt::Display for StepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepError::Parse(msg) => write!(f, "Parse error: {msg}"),
            StepError::Quota(msg) => write!(f, "Quota error: {msg}"),
            StepError::Storage(msg) => write!(f, "Storage error: {msg}"),
        }
    }
}

// ============================================================================
// Simulation Functions
// ============================================================================

pub fn load_record(id: u64) -> Outcome<Record> {
    if id % 100 == 0 {
        Outcome::failure(Context::new("storage timeout").with_param("id", id as i64))
    } else {
        Outcome::success(Record::new(id))
    }
}

pub fn validate_record(record: Record) -> Outcome<Record> {
    if record.id % 50 == 0 {
        Outcome::failure(Context::new("owner field malformed").with_param("id", record.id as i64))
    } else {
        Outcome::success(record)
    }
}

pub fn settle_record(record: Record) -> Outcome<i64> {
    if record.id % 25 == 0 {
        Outcome::failure_with(
            Context::new("quota exceeded").with_param("id", record.id as i64),
            record.balance_cents,
        )
    } else {
        Outcome::success(record.balance_cents)
    }
}

pub fn parse_amount(raw: &str) -> Result<i64, StepError> {
    raw.parse::<i64>()
        .map_err(|e| StepError::Parse(e.to_string()))
}

pub fn check_quota(record: &Record) -> Result<i64, StepError> {
    if record.balance_cents > 1_000_000 {
        Err(StepError::Quota(format!(
            "balance {} over limit",
            record.balance_cents
        )))
    } else {
        Ok(record.balance_cents)
    }
}

pub fn store_record(record: &Record) -> Result<u64, StepError> {
    if record.id % 100 == 0 {
        Err(StepError::Storage("shard unavailable".to_string()))
    } else {
        Ok(record.id)
    }
}

// ============================================================================
// Criterion Configuration
// ============================================================================

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
