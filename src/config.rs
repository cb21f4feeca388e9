//! Renderer configuration.
//!
//! Loaded from JSON; every field is optional and falls back to its default.
//!
//! ```json
//! { "quoting": "when_needed" }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::PgViewError;
use crate::quoting::{AlwaysQuote, QuoteWhenNeeded, Quoter};

/// Identifier quoting convention for rendered DDL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotingMode {
    /// Quote every identifier.
    #[default]
    Always,
    /// Quote only identifiers that would not survive unquoted.
    WhenNeeded,
}

impl QuotingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuotingMode::Always => "always",
            QuotingMode::WhenNeeded => "when_needed",
        }
    }
}

impl std::fmt::Display for QuotingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Settings that shape rendered DDL text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DdlConfig {
    pub quoting: QuotingMode,
}

impl DdlConfig {
    /// Parse a configuration document.
    pub fn from_json(json: &str) -> Result<Self, PgViewError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| PgViewError::InvalidConfig(e.to_string()))?;
        tracing::debug!(quoting = %config.quoting, "loaded DDL config");
        Ok(config)
    }

    /// The quoter selected by [`DdlConfig::quoting`].
    pub fn quoter(&self) -> Box<dyn Quoter + Send + Sync> {
        match self.quoting {
            QuotingMode::Always => Box::new(AlwaysQuote),
            QuotingMode::WhenNeeded => Box::new(QuoteWhenNeeded),
        }
    }
}
