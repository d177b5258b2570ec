//! Reference-vector verification — replays a vector file through this
//! build and reports every output that diverged.

use std::fs;
use std::io::Write;
use std::path::Path;

use hashdial::hashing::digest_hex;
use hashdial::vectors::{VectorReport, VectorSet};

use crate::error::Result;

/// Load and check the vector file at `path`.
pub fn verify_file(path: &Path) -> Result<VectorReport> {
    let json = fs::read_to_string(path)?;
    let set = VectorSet::from_json(&json)?;
    log::debug!("loaded {} vectors from {}", set.vectors.len(), path.display());
    Ok(set.check_all()?)
}

/// Print one `[FAIL]` line per mismatch followed by a summary line. Each
/// failure carries the full seeded digest so other implementations can
/// compare hash input before comparing derived values.
pub fn write_report<W: Write>(report: &VectorReport, mut out: W) -> Result<()> {
    for m in &report.mismatches {
        log::warn!("vector #{} diverged", m.index);
        let digest = digest_hex(m.vector.seed().as_bytes(), m.vector.key().as_bytes());
        writeln!(
            out,
            "[FAIL] #{} {:?}: got {} (sha256 {})",
            m.index, m.vector, m.actual, digest
        )?;
    }
    writeln!(out, "Results: {}/{} passed", report.passed(), report.total)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashdial::vectors::{Mismatch, Vector};

    #[test]
    fn test_write_report() {
        let report = VectorReport {
            total: 2,
            mismatches: vec![Mismatch {
                index: 1,
                vector: Vector::UnitFloat {
                    seed: String::new(),
                    key: "k".into(),
                    bits: 0,
                },
                actual: "42".into(),
            }],
        };
        let mut out = Vec::new();
        write_report(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("[FAIL] #1 UnitFloat"));
        assert!(text.contains(&format!("got 42 (sha256 {})", digest_hex(b"", b"k"))));
        assert!(text.ends_with("Results: 1/2 passed\n"));
    }
}
