//! Participant loading and deduplication.
//!
//! Records are normalized (trimmed name, trimmed upper-case identity code) and
//! deduplicated on the case-insensitive identity key. The first occurrence of
//! each key wins and input order is preserved.

use crate::error::{DrawError, Result};
use crate::types::Participant;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Participant row as it appears in the source, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    pub name: Option<String>,
    pub urc: Option<String>,
}

impl RawRecord {
    pub fn new(name: &str, urc: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            urc: Some(urc.to_string()),
        }
    }
}

/// Normalize and deduplicate raw records into the draw pool
pub fn load<I>(raw_records: I) -> Result<Vec<Participant>>
where
    I: IntoIterator<Item = RawRecord>,
{
    let mut seen = HashSet::new();
    let mut pool = Vec::new();

    for (i, raw) in raw_records.into_iter().enumerate() {
        let record = i + 1;
        let name = required(raw.name.as_deref(), record, "name")?;
        let urc = required(raw.urc.as_deref(), record, "urc")?;

        let participant = Participant::new(name, urc);
        if seen.insert(participant.identity_key()) {
            pool.push(participant);
        } else {
            tracing::debug!(
                "Dropping duplicate participant #{}: {} ({})",
                record,
                participant.name,
                participant.identity_code
            );
        }
    }

    Ok(pool)
}

/// Read a CSV file with `name` and `urc` columns and load it
pub fn load_csv(path: &Path) -> Result<Vec<Participant>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_path(path)?;

    let headers = reader.headers()?.clone();
    for field in ["name", "urc"] {
        if !headers.iter().any(|h| h == field) {
            return Err(DrawError::malformed(1, field));
        }
    }

    let mut raw_records = Vec::new();
    for row in reader.deserialize::<RawRecord>() {
        raw_records.push(row?);
    }

    let total = raw_records.len();
    let pool = load(raw_records)?;
    tracing::info!(
        "Loaded {} participants from {} ({} duplicates dropped)",
        pool.len(),
        path.display(),
        total - pool.len()
    );
    Ok(pool)
}

fn required<'a>(value: Option<&'a str>, record: usize, field: &'static str) -> Result<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DrawError::malformed(record, field)),
    }
}
