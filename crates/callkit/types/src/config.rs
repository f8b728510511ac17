//! Engine behaviour switches.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// When validation and business logic run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvokeMode {
    /// Building the instance also validates and executes it.
    #[default]
    OnConstruct,
    /// Building only binds attributes; the caller triggers `run`.
    Explicit,
}

/// What happens to a supplied attribute the call type never declared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndeclaredPolicy {
    /// Fail construction with a configuration error.
    #[default]
    Reject,
    /// Log a warning and drop the value.
    Warn,
}

/// Whether errors recorded during business logic suppress the result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultPolicy {
    /// The result is kept whenever the gate passed and business logic
    /// returned normally, even if it recorded non-aborting errors.
    #[default]
    GateOnly,
    /// The result is discarded if any error exists once business logic
    /// returns.
    RequireClean,
}

/// Configuration for a call invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallConfig {
    pub invoke: InvokeMode,
    pub undeclared: UndeclaredPolicy,
    pub result: ResultPolicy,
}

impl CallConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose when business logic runs.
    pub fn with_invoke(mut self, invoke: InvokeMode) -> Self {
        self.invoke = invoke;
        self
    }

    /// Choose how undeclared attribute names are treated.
    pub fn with_undeclared(mut self, undeclared: UndeclaredPolicy) -> Self {
        self.undeclared = undeclared;
        self
    }

    /// Choose whether soft errors discard the result.
    pub fn with_result(mut self, result: ResultPolicy) -> Self {
        self.result = result;
        self
    }

    /// Parse from TOML. Missing keys fall back to defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from a TOML file. A missing file yields the default config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
