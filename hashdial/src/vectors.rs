//! Reference vectors — pinned (inputs, expected output) records.
//!
//! A vector file fixes exact outputs of the derivation so that any build,
//! or any other implementation of the same algorithm, can be checked
//! against it. Seeds and keys are UTF-8 strings hashed as their bytes.
//!
//! ```json
//! { "algorithm_version": 1,
//!   "vectors": [ { "op": "accept", "seed": "", "key": "t",
//!                  "probability": 0.5, "expected": false } ] }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dial::Dial;
use crate::ALGORITHM_VERSION;

// ---------------------------------------------------------------------------
// Format
// ---------------------------------------------------------------------------

/// A full vector document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VectorSet {
    pub algorithm_version: u32,
    pub vectors: Vec<Vector>,
}

/// One pinned operation, tagged by `"op"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case", deny_unknown_fields)]
pub enum Vector {
    /// `bits` is `f64::to_bits` of the unit float.
    UnitFloat { seed: String, key: String, bits: u64 },
    Accept {
        seed: String,
        key: String,
        probability: f64,
        expected: bool,
    },
    SelectInRange {
        seed: String,
        key: String,
        start: i64,
        stop: i64,
        expected: i64,
    },
    Choose {
        seed: String,
        key: String,
        items: Vec<String>,
        expected: String,
    },
}

/// Failures loading or checking a vector document.
#[derive(Error, Debug)]
pub enum VectorError {
    #[error("malformed vector document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("vector document targets algorithm v{found}, this build implements v{expected}")]
    VersionMismatch { expected: u32, found: u32 },
}

// ---------------------------------------------------------------------------
// Checking
// ---------------------------------------------------------------------------

/// Outcome of one vector that did not reproduce.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    /// Position in the document.
    pub index: usize,
    pub vector: Vector,
    /// What this build produced, rendered for display.
    pub actual: String,
}

/// Summary of a checked document.
#[derive(Debug, Clone, Default)]
pub struct VectorReport {
    pub total: usize,
    pub mismatches: Vec<Mismatch>,
}

impl VectorReport {
    pub fn passed(&self) -> usize {
        self.total - self.mismatches.len()
    }

    pub fn is_ok(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl VectorSet {
    /// Parse a document. Unknown fields and unknown ops are rejected.
    pub fn from_json(json: &str) -> Result<Self, VectorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, VectorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Run every vector. A document for another algorithm version is
    /// refused before any vector runs.
    pub fn check_all(&self) -> Result<VectorReport, VectorError> {
        if self.algorithm_version != ALGORITHM_VERSION {
            return Err(VectorError::VersionMismatch {
                expected: ALGORITHM_VERSION,
                found: self.algorithm_version,
            });
        }

        let mismatches = self
            .vectors
            .iter()
            .enumerate()
            .filter_map(|(index, vector)| {
                vector.check().err().map(|actual| Mismatch {
                    index,
                    vector: vector.clone(),
                    actual,
                })
            })
            .collect();

        Ok(VectorReport {
            total: self.vectors.len(),
            mismatches,
        })
    }
}

impl Vector {
    pub fn seed(&self) -> &str {
        match self {
            Vector::UnitFloat { seed, .. }
            | Vector::Accept { seed, .. }
            | Vector::SelectInRange { seed, .. }
            | Vector::Choose { seed, .. } => seed,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Vector::UnitFloat { key, .. }
            | Vector::Accept { key, .. }
            | Vector::SelectInRange { key, .. }
            | Vector::Choose { key, .. } => key,
        }
    }

    /// Re-run this vector. `Err` carries the actual output (or the error
    /// the operation returned) when it differs from the expected one.
    pub fn check(&self) -> Result<(), String> {
        let dial = Dial::with_seed(self.seed().as_bytes());
        let key = self.key().as_bytes();

        let actual = match self {
            Vector::UnitFloat { bits, .. } => {
                let got = dial.unit_float(key).to_bits();
                (got != *bits).then(|| got.to_string())
            }
            Vector::Accept {
                probability,
                expected,
                ..
            } => match dial.accept(key, *probability) {
                Ok(got) => (got != *expected).then(|| got.to_string()),
                Err(e) => Some(format!("error: {}", e)),
            },
            Vector::SelectInRange {
                start,
                stop,
                expected,
                ..
            } => match dial.select_in_range(key, *start..*stop) {
                Ok(got) => (got != *expected).then(|| got.to_string()),
                Err(e) => Some(format!("error: {}", e)),
            },
            Vector::Choose {
                items, expected, ..
            } => match dial.choose(key, items) {
                Ok(got) => (got != expected).then(|| got.clone()),
                Err(e) => Some(format!("error: {}", e)),
            },
        };

        match actual {
            Some(actual) => Err(actual),
            None => Ok(()),
        }
    }
}
