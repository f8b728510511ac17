use thiserror::Error;

/// Misuse of the declaration or binding API.
///
/// Always raised before any business logic runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("attribute `{name}` is a reserved word")]
    ReservedAttribute { name: String },

    #[error("attribute `{name}` is not declared; add `.attribute(\"{name}\")` to the {call} schema")]
    UndeclaredAttribute { name: String, call: String },

    #[error("attribute `{name}` is declared twice on {call}")]
    DuplicateAttribute { name: String, call: String },

    #[error("{call} declares a rule for undeclared attribute `{name}`")]
    UnknownRuleTarget { name: String, call: String },

    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// A supplied attribute value that does not fit the call object's field.
///
/// Recorded in the error ledger under `name`; never raised to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("attribute `{name}` {message}: {detail}")]
pub struct AttributeError {
    pub name: String,
    /// Ledger message, e.g. `"is invalid"`.
    pub message: String,
    /// Why the value was refused.
    pub detail: String,
}

impl AttributeError {
    pub const INVALID: &'static str = "is invalid";

    /// A value of the wrong shape for its field.
    pub fn invalid(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: Self::INVALID.to_string(),
            detail: detail.into(),
        }
    }

    /// A required value that was not supplied.
    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: "can't be blank".to_string(),
            detail: "no value supplied".to_string(),
        }
    }
}

/// Errors from loading a [`CallConfig`](crate::CallConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(String),
}
