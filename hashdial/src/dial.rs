/// hashdial v1 — Decision Operations
///
/// Each operation validates its arguments, hashes `seed || key` exactly
/// once, and applies a pure rule to the resulting unit float.

use std::ops::Range;

use crate::bounds::{range_span, validate_len, validate_probability};
use crate::error::{DialError, Result};
use crate::hashing::unit_float;
use crate::DEFAULT_SEED;

/// A seeded handle on the decision operations.
///
/// Dials with different seeds make independent decisions about the same
/// key. `Dial` borrows its seed and carries no other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dial<'s> {
    seed: &'s [u8],
}

impl Default for Dial<'_> {
    fn default() -> Self {
        Dial::DEFAULT
    }
}

impl<'s> Dial<'s> {
    /// Dial using [`DEFAULT_SEED`].
    pub const DEFAULT: Dial<'static> = Dial { seed: DEFAULT_SEED };

    pub const fn with_seed(seed: &'s [u8]) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> &'s [u8] {
        self.seed
    }

    /// Unit float for `key` under this dial's seed.
    pub fn unit_float(&self, key: impl AsRef<[u8]>) -> f64 {
        unit_float(self.seed, key.as_ref())
    }

    /// Decide whether to take an action for `key`, such that over a large
    /// set of distinct keys the fraction accepted is `probability`.
    ///
    /// `0.0` never accepts and `1.0` always accepts.
    pub fn accept(&self, key: impl AsRef<[u8]>, probability: f64) -> Result<bool> {
        validate_probability(probability)?;
        Ok(self.unit_float(key) < probability)
    }

    /// Select an integer in `range` (start inclusive, stop exclusive).
    ///
    /// The range must be non-empty and at most `2^53 - 1` wide so that its
    /// width scales the unit float without precision loss.
    pub fn select_in_range(&self, key: impl AsRef<[u8]>, range: Range<i64>) -> Result<i64> {
        let span = range_span(&range)?;
        let scaled = (span as f64 * self.unit_float(key)).floor() as i64;
        // The product can round up to `span` for the widest ranges.
        Ok(range.start + scaled.min(span - 1))
    }

    /// Select an index in `0..len`.
    pub fn select_index(&self, key: impl AsRef<[u8]>, len: usize) -> Result<usize> {
        validate_len(len)?;
        // `stop` saturates; `span` carries the real length.
        let stop = i64::try_from(len).map_err(|_| DialError::RangeTooWide {
            start: 0,
            stop: i64::MAX,
            span: len as i128,
        })?;
        let index = self.select_in_range(key, 0..stop)?;
        Ok(index as usize)
    }

    /// Select one element of `items`.
    pub fn choose<'a, T>(&self, key: impl AsRef<[u8]>, items: &'a [T]) -> Result<&'a T> {
        let index = self.select_index(key, items.len())?;
        Ok(&items[index])
    }
}

/// [`Dial::accept`] under [`DEFAULT_SEED`].
///
/// To retain 25% of lines read from stdin:
///
/// ```no_run
/// use std::io::{self, BufRead, Write};
///
/// let mut out = io::stdout().lock();
/// for line in io::stdin().lock().lines() {
///     let line = line?;
///     if hashdial::accept(&line, 0.25)? {
///         writeln!(out, "{}", line)?;
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn accept(key: impl AsRef<[u8]>, probability: f64) -> Result<bool> {
    Dial::DEFAULT.accept(key, probability)
}

/// [`Dial::select_in_range`] under [`DEFAULT_SEED`].
///
/// Partitioned filtering, assuming this worker owns partition 3 of 10:
///
/// ```
/// let keep = hashdial::select_in_range(b"line contents", 0..10)? == 3;
/// # let _ = keep;
/// # Ok::<(), hashdial::DialError>(())
/// ```
pub fn select_in_range(key: impl AsRef<[u8]>, range: Range<i64>) -> Result<i64> {
    Dial::DEFAULT.select_in_range(key, range)
}

/// [`Dial::choose`] under [`DEFAULT_SEED`].
pub fn choose<T>(key: impl AsRef<[u8]>, items: &[T]) -> Result<&T> {
    Dial::DEFAULT.choose(key, items)
}
