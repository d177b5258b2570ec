/// hashdial v1 — Hash-to-Unit-Float Transform
///
/// SHA-256 over `seed || key`, first 8 digest bytes read as a big-endian
/// u64, divided by 2^64. Reproduces byte-identical results across
/// platforms and across implementations of the same derivation.

use sha2::digest::Output;
use sha2::{Digest, Sha256};

/// Number of leading digest bytes that feed the unit float.
pub const PREFIX_LEN: usize = 8;

/// 2^64 as an exact f64.
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Largest f64 strictly below 1.0.
pub const MAX_UNIT_FLOAT: f64 = 1.0 - f64::EPSILON / 2.0;

fn seeded_digest(seed: &[u8], key: &[u8]) -> Output<Sha256> {
    Sha256::new().chain_update(seed).chain_update(key).finalize()
}

/// First [`PREFIX_LEN`] bytes of `SHA-256(seed || key)` as a big-endian u64.
pub fn digest_prefix(seed: &[u8], key: &[u8]) -> u64 {
    let digest = seeded_digest(seed, key);
    let mut prefix = [0u8; PREFIX_LEN];
    prefix.copy_from_slice(&digest[..PREFIX_LEN]);
    u64::from_be_bytes(prefix)
}

/// Map `(seed, key)` to a reproducible f64 in `[0.0, 1.0)`.
///
/// The u64 -> f64 conversion rounds to nearest, so a prefix within 2^10 of
/// 2^64 lands on exactly 1.0. Those are clamped to [`MAX_UNIT_FLOAT`];
/// every other prefix yields the unclamped quotient.
pub fn unit_float(seed: &[u8], key: &[u8]) -> f64 {
    prefix_to_unit_float(digest_prefix(seed, key))
}

fn prefix_to_unit_float(prefix: u64) -> f64 {
    (prefix as f64 / TWO_POW_64).min(MAX_UNIT_FLOAT)
}

/// Lowercase hex of the full `SHA-256(seed || key)` digest.
pub fn digest_hex(seed: &[u8], key: &[u8]) -> String {
    seeded_digest(seed, key)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<String>()
}
