//! # callkit-types
//!
//! Shared vocabulary for the call lifecycle engine.
//!
//! A call instance moves caller-supplied [`Attributes`] through a validation
//! pass and into business logic. Everything it reports back lives in two
//! independent append-only logs:
//!
//! - **[`Errors`]**: keyed, multi-valued error ledger. A call is valid exactly
//!   when this ledger is empty.
//! - **[`MessageLog`]**: free-form `(text, tag)` notifications, unrelated to
//!   validity.
//!
//! Behaviour switches for the engine are carried by [`CallConfig`].

pub mod attributes;
pub mod config;
pub mod error;
pub mod errors;
pub mod message;
pub mod validity;

pub use attributes::{is_blank, is_reserved, Attributes, RESERVED_NAMES};
pub use config::{CallConfig, InvokeMode, ResultPolicy, UndeclaredPolicy};
pub use error::{AttributeError, ConfigError, ConfigurationError};
pub use errors::{ErrorKey, ErrorOrigin, Errors};
pub use message::{Message, MessageLog, Tag};
pub use validity::Validity;
