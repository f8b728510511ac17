//! Execution envelope.
//!
//! Business logic reports early exits through [`Interrupt`]. The envelope is
//! the only place that interprets them: aborts end here, declared failures go
//! to their handler, anything else goes back to the caller.

use tracing::{debug, warn};

use crate::call::Call;
use crate::error::CallError;
use crate::ledger::{Interrupt, Ledger};
use crate::schema::CallSchema;

/// Base error recorded for an abort that reached the envelope with an empty
/// error ledger.
pub const ABORTED: &str = "call aborted";

/// How a business-logic run ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Execution<T> {
    /// Returned normally with a value.
    Completed(T),
    /// Stopped by [`Ledger::halt`].
    Aborted,
    /// Raised a failure a declared handler recovered.
    Rescued { kind: &'static str },
}

impl<T> Execution<T> {
    pub fn into_output(self) -> Option<T> {
        match self {
            Execution::Completed(output) => Some(output),
            _ => None,
        }
    }
}

pub struct ExecutionEnvelope;

impl ExecutionEnvelope {
    /// Run `call` once. Only unhandled failures are returned as errors.
    pub fn execute<C: Call>(
        call: &mut C,
        schema: &CallSchema<C>,
        ledger: &mut Ledger,
    ) -> Result<Execution<C::Output>, CallError> {
        match call.call(ledger) {
            Ok(output) => {
                debug!(call = schema.name(), "Call completed");
                Ok(Execution::Completed(output))
            }
            Err(Interrupt::Abort(_)) => {
                if ledger.is_valid() {
                    warn!(call = schema.name(), "Call aborted without recording an error");
                    ledger.error(ABORTED);
                }
                debug!(
                    call = schema.name(),
                    error_count = ledger.errors().len(),
                    "Call aborted"
                );
                Ok(Execution::Aborted)
            }
            Err(Interrupt::Failure(source)) => {
                match schema.rescue(call, source.as_ref(), ledger) {
                    Some(kind) => {
                        warn!(call = schema.name(), kind, error = %source, "Call failure rescued");
                        Ok(Execution::Rescued { kind })
                    }
                    None => Err(CallError::Unhandled {
                        call: schema.name().to_string(),
                        source,
                    }),
                }
            }
        }
    }
}
