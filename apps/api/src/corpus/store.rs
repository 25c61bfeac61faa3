//! Corpus Store — the frozen catalog of career profiles.
//!
//! Loaded once at startup from a CSV file with an `interest,skills,career`
//! header and never mutated afterwards. Records are identified by their
//! 0-based row index, insertion order preserved.

use std::path::Path;

use serde::Deserialize;

use crate::errors::CorpusError;

/// One catalog row. Validated non-blank at load, immutable afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct CareerRecord {
    pub interest: String,
    pub skills: String,
    pub career: String,
}

impl CareerRecord {
    /// The text the similarity engine indexes for this record: interest and
    /// skills joined by a single space. Pure function of the record — the
    /// engine's `transform` builds query text the same way.
    pub fn document(&self) -> String {
        format!("{} {}", self.interest, self.skills)
    }
}

/// Frozen table of `CareerRecord`s for the process lifetime.
#[derive(Debug)]
pub struct CorpusStore {
    records: Vec<CareerRecord>,
}

impl CorpusStore {
    /// Reads the catalog from `path`. Fails if the file is missing, any row
    /// is malformed, or any required field is blank — malformed rows are
    /// rejected here, not at first use.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let file = std::fs::File::open(path).map_err(|source| CorpusError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut reader = csv::Reader::from_reader(file);

        let mut records = Vec::new();
        for (row, result) in reader.deserialize::<CareerRecord>().enumerate() {
            let record = result?;
            if let Some(field) = blank_field(&record) {
                return Err(CorpusError::MissingField { row, field });
            }
            records.push(record);
        }

        Ok(Self { records })
    }

    /// Builds a store from already-validated records. Used by tests and any
    /// caller that assembles a catalog in memory.
    pub fn from_records(records: Vec<CareerRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CareerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CareerRecord> {
        self.records.get(index)
    }

    /// Documents in corpus order, one per record.
    pub fn documents(&self) -> Vec<String> {
        self.records.iter().map(CareerRecord::document).collect()
    }
}

fn blank_field(record: &CareerRecord) -> Option<&'static str> {
    if record.interest.trim().is_empty() {
        Some("interest")
    } else if record.skills.trim().is_empty() {
        Some("skills")
    } else if record.career.trim().is_empty() {
        Some("career")
    } else {
        None
    }
}
