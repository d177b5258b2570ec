#![forbid(unsafe_code)]

//! hashdial — hash based decision making.
//!
//! Decisions are deterministic on their input but probabilistic across a
//! set of inputs. Components that each want to log 1% of requests, and all
//! log the *same* 1%, can do so with:
//!
//! ```
//! # fn log_request(_: &[u8]) {}
//! let request_id = b"request-42";
//! if hashdial::accept(request_id, 0.01)? {
//!     log_request(request_id);
//! }
//! # Ok::<(), hashdial::DialError>(())
//! ```
//!
//! Every operation takes a seed, either implicitly ([`DEFAULT_SEED`]) or
//! through a [`Dial`]. Use a seed not known to untrusted input sources, and
//! a different seed for each stage when filtering already-filtered data.

/// Derivation v1 — any change to hash, truncation, byte order, divisor or
/// default seed alters outputs and requires v2.
pub const ALGORITHM_VERSION: u32 = 1;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: &[u8] = b"";

pub mod bounds;
pub mod dial;
pub mod error;
pub mod hashing;
pub mod vectors;

pub use dial::{accept, choose, select_in_range, Dial};
pub use error::{DialError, Result};
