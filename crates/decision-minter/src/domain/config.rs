//! Minter configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use decision_minter::domain::MinterConfig;
//!
//! let config = MinterConfig::default()
//!     .with_initial_archiver("ST1GOVERNANCE")
//!     .with_seconds_per_block(600);
//! config.validate()?;
//! ```

use crate::domain::value_objects::Principal;
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Default archiver role installed on construction and reset.
pub const DEFAULT_ARCHIVER: &str = "ST1ARCHIVER";

/// Default approver recognized by the parity approval authority.
pub const DEFAULT_APPROVER: &str = "ST2APPROVAL";

/// Default metadata URI limit in characters.
pub const DEFAULT_MAX_METADATA_URI_LEN: usize = 256;

/// Default seconds per block for height-derived timestamps.
pub const DEFAULT_SECONDS_PER_BLOCK: u64 = 60;

/// Minter configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinterConfig {
    /// Archiver role installed on construction and on `reset()`.
    pub initial_archiver: Principal,
    /// Maximum metadata URI length in UTF-16 code units.
    pub max_metadata_uri_len: usize,
    /// Seconds per block used by the block-height clock.
    pub seconds_per_block: u64,
    /// Approver address honored by the parity approval authority.
    pub known_approver: Principal,
}

impl Default for MinterConfig {
    fn default() -> Self {
        Self {
            initial_archiver: Principal::from(DEFAULT_ARCHIVER),
            max_metadata_uri_len: DEFAULT_MAX_METADATA_URI_LEN,
            seconds_per_block: DEFAULT_SECONDS_PER_BLOCK,
            known_approver: Principal::from(DEFAULT_APPROVER),
        }
    }
}

impl MinterConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_archiver.as_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "initial_archiver",
                reason: "must not be empty".to_string(),
            });
        }

        if self.max_metadata_uri_len == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_metadata_uri_len",
                reason: "must be at least 1".to_string(),
            });
        }

        if self.seconds_per_block == 0 {
            return Err(ConfigError::InvalidValue {
                field: "seconds_per_block",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Builder-style method to set the initial archiver
    #[must_use]
    pub fn with_initial_archiver(mut self, archiver: impl Into<Principal>) -> Self {
        self.initial_archiver = archiver.into();
        self
    }

    /// Builder-style method to set the metadata URI limit
    #[must_use]
    pub fn with_max_metadata_uri_len(mut self, len: usize) -> Self {
        self.max_metadata_uri_len = len;
        self
    }

    /// Builder-style method to set seconds per block
    #[must_use]
    pub fn with_seconds_per_block(mut self, seconds: u64) -> Self {
        self.seconds_per_block = seconds;
        self
    }

    /// Builder-style method to set the known approver
    #[must_use]
    pub fn with_known_approver(mut self, approver: impl Into<Principal>) -> Self {
        self.known_approver = approver.into();
        self
    }
}
