use callkit_types::ConfigurationError;
use thiserror::Error;

/// Errors surfaced to the caller of a call.
///
/// Business aborts never appear here; they are recorded in the ledger.
#[derive(Error, Debug)]
pub enum CallError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("unhandled failure in {call}: {source}")]
    Unhandled {
        call: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

pub type CallResult<T> = Result<T, CallError>;
