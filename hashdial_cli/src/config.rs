//! Configuration — optional JSON file plus command-line overrides.
//!
//! Precedence: `--seed` flag, then config file, then `DEFAULT_SEED`.
//!
//! ```json
//! { "seed": "access-log-sampling" }
//! ```

use std::fs;
use std::path::Path;

use hashdial::{Dial, DEFAULT_SEED};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DialConfig {
    /// UTF-8 seed; `None` means [`DEFAULT_SEED`].
    #[serde(default)]
    pub seed: Option<String>,
}

impl DialConfig {
    /// Parse a config document. Unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load `path` if given, otherwise start from defaults, then apply the
    /// command-line seed.
    pub fn resolve(path: Option<&Path>, seed_flag: Option<String>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        if seed_flag.is_some() {
            config.seed = seed_flag;
        }
        log::debug!(
            "resolved config: file={:?}, seed set={}",
            path,
            config.seed.is_some()
        );
        Ok(config)
    }

    pub fn seed_bytes(&self) -> &[u8] {
        self.seed
            .as_deref()
            .map(str::as_bytes)
            .unwrap_or(DEFAULT_SEED)
    }

    pub fn dial(&self) -> Dial<'_> {
        Dial::with_seed(self.seed_bytes())
    }
}
