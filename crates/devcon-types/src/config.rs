//! Init-time console configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, Result};

/// Largest accepted `history_capacity`. Every slot is allocated up front.
pub const MAX_HISTORY_CAPACITY: usize = 4096;

/// Console configuration, fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// How many submitted lines the history can hold. 0 disables history.
    pub history_capacity: usize,
    /// Minimum input length before the completion key does anything.
    pub autocomplete_min_chars: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            history_capacity: 5,
            autocomplete_min_chars: 3,
        }
    }
}

impl ConsoleConfig {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        log::debug!("Loaded console config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.autocomplete_min_chars == 0 {
            return Err(ConsoleError::Config(
                "autocomplete_min_chars must be at least 1".to_string(),
            ));
        }
        if self.history_capacity > MAX_HISTORY_CAPACITY {
            return Err(ConsoleError::Config(format!(
                "history_capacity must be at most {MAX_HISTORY_CAPACITY}, got {}",
                self.history_capacity
            )));
        }
        Ok(())
    }

    pub fn history_enabled(&self) -> bool {
        self.history_capacity != 0
    }
}
