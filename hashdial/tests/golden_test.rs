/// Golden compatibility test — replays the frozen reference vectors
/// and asserts every output matches the permanent v1 values.
///
/// The vector file must NEVER be modified to match new behavior.
/// If it fails, the derivation has been broken.

use std::fs;
use std::path::PathBuf;

use hashdial::hashing::unit_float;
use hashdial::vectors::{Vector, VectorSet};
use hashdial::{accept, choose, select_in_range, Dial, ALGORITHM_VERSION};

fn load_golden() -> VectorSet {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
        .join("vectors.json");
    let data = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    VectorSet::from_json(&data).expect("Failed to parse golden vectors")
}

#[test]
fn golden_vectors_match() {
    let golden = load_golden();
    assert_eq!(golden.algorithm_version, ALGORITHM_VERSION);

    let report = golden.check_all().expect("golden version must match");
    for m in &report.mismatches {
        eprintln!("vector #{}: {:?} produced {}", m.index, m.vector, m.actual);
    }
    assert!(
        report.is_ok(),
        "GOLDEN TEST FAILED: {}/{} vectors diverged.\n\
         The derivation output changed; this requires a new algorithm version.",
        report.mismatches.len(),
        report.total
    );
}

#[test]
fn golden_vectors_cover_every_op() {
    let golden = load_golden();
    let has = |pred: fn(&Vector) -> bool| golden.vectors.iter().any(pred);

    assert!(has(|v| matches!(v, Vector::UnitFloat { .. })));
    assert!(has(|v| matches!(v, Vector::Accept { .. })));
    assert!(has(|v| matches!(v, Vector::SelectInRange { .. })));
    assert!(has(|v| matches!(v, Vector::Choose { .. })));
    assert!(has(|v| !v.seed().is_empty()));
}

#[test]
fn golden_known_values() {
    // Values pinned from the reference implementation.
    assert_eq!(unit_float(b"", b"t"), 0.8895498694938413);
    assert_eq!(unit_float(b"something", b"t"), 0.8758435183143201);

    assert!(!accept(b"t", 0.5).unwrap());
    assert!(Dial::with_seed(b"test2").accept(b"t", 0.5).unwrap());

    assert_eq!(select_in_range(b"t", 0..2).unwrap(), 1);
    assert_eq!(Dial::with_seed(b"test2").select_in_range(b"t", 0..2).unwrap(), 0);

    assert_eq!(*choose(b"t", &[0, 1]).unwrap(), 1);
    assert_eq!(*Dial::with_seed(b"test2").choose(b"t", &[0, 1]).unwrap(), 0);
}

#[test]
fn golden_accept_count() {
    // 271 of the keys "0".."999" fall under 0.25 with the default seed.
    let accepted = (0..1000)
        .filter(|n| accept(n.to_string(), 0.25).unwrap())
        .count();
    assert_eq!(accepted, 271);
}
