#![forbid(unsafe_code)]

//! hashdial CLI support — line filters over byte streams.
//!
//! Every line (without its terminator) is a key; the decision logic is
//! delegated to the `hashdial` crate. Nothing here keeps state between
//! lines beyond counters.

pub mod config;
pub mod error;
pub mod filter;
pub mod verify;

pub use error::CliError;
