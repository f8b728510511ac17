//! # callkit-engine
//!
//! The call lifecycle engine. A concrete call type implements [`Call`]; the
//! engine turns caller attributes into a [`CallInstance`] by running four
//! cooperating parts in order:
//!
//! 1. **Binder** ([`binder`]): checks every supplied key against the reserved
//!    names and the type's declared attributes, all before anything is applied.
//! 2. **Validation gate** ([`gate`]): runs every declared validator and derives
//!    validity from the error ledger.
//! 3. **Execution envelope** ([`envelope`]): runs business logic only when the
//!    gate passed, absorbs aborts, routes declared failures to their handlers.
//! 4. **Ledger** ([`ledger`]): the error and message logs business logic writes
//!    to and the caller reads.
//!
//! Declarations are built once per type and cached in the [`SchemaRegistry`].

pub mod binder;
pub mod call;
pub mod caller;
pub mod envelope;
pub mod error;
pub mod gate;
pub mod instance;
pub mod ledger;
pub mod registry;
pub mod schema;

pub use call::Call;
pub use caller::Caller;
pub use envelope::{Execution, ExecutionEnvelope, ABORTED};
pub use error::{CallError, CallResult};
pub use gate::ValidationGate;
pub use instance::CallInstance;
pub use ledger::{AbortToken, Interrupt, Ledger};
pub use registry::SchemaRegistry;
pub use schema::{CallSchema, SchemaBuilder};
