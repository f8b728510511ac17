//! # callkit
//!
//! Command objects for Rust. A call type declares the attributes it accepts
//! and the rules they must satisfy; callers get back one [`CallInstance`]
//! exposing `valid()`, `result()`, `errors()` and `messages()`.
//!
//! ```ignore
//! use callkit::prelude::*;
//!
//! let login = CallInstance::<LoginService>::call(attributes! {
//!     "login" => "123",
//!     "pass" => "123",
//! })?;
//! assert!(login.valid());
//! assert_eq!(login.result().map(String::as_str), Some("ok"));
//! ```
//!
//! The crates behind the facade:
//!
//! - `callkit-types`: attributes, error ledger, message log, configuration
//! - `callkit-validation`: the validator collaborator and built-in rules
//! - `callkit-engine`: binder, validation gate, execution envelope

pub use callkit_engine::{
    binder, AbortToken, Call, CallError, CallInstance, CallResult, CallSchema, Caller, Execution,
    ExecutionEnvelope, Interrupt, Ledger, SchemaBuilder, SchemaRegistry, ValidationGate, ABORTED,
};
pub use callkit_types::{
    is_blank, is_reserved, AttributeError, Attributes, CallConfig, ConfigError,
    ConfigurationError, ErrorKey, Errors, InvokeMode, Message, MessageLog, ResultPolicy, Tag,
    UndeclaredPolicy, Validity, RESERVED_NAMES,
};
pub use callkit_validation::{
    AttributeRules, Custom, Format, Inclusion, Length, Presence, Rule, Validator,
};

#[doc(hidden)]
pub use serde_json as __json;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build [`Attributes`] from `name => value` pairs. Values are anything
/// `serde_json::json!` accepts, including negative numbers and arithmetic;
/// a value runs up to the next top-level comma.
#[macro_export]
macro_rules! attributes {
    (@entry $attrs:expr;) => {
        $attrs
    };
    (@entry $attrs:expr; $name:expr => $($rest:tt)+) => {
        $crate::attributes!(@value $attrs; $name; () $($rest)+)
    };
    (@value $attrs:expr; $name:expr; ($($value:tt)+) , $($rest:tt)*) => {
        $crate::attributes!(
            @entry ($attrs).with($name, $crate::__json::json!($($value)+)); $($rest)*
        )
    };
    (@value $attrs:expr; $name:expr; ($($value:tt)+)) => {
        ($attrs).with($name, $crate::__json::json!($($value)+))
    };
    (@value $attrs:expr; $name:expr; ($($value:tt)*) $next:tt $($rest:tt)*) => {
        $crate::attributes!(@value $attrs; $name; ($($value)* $next) $($rest)*)
    };
    () => {
        $crate::Attributes::new()
    };
    ($($body:tt)+) => {
        $crate::attributes!(@entry $crate::Attributes::new(); $($body)+)
    };
}

pub mod prelude {
    pub use crate::attributes;
    pub use crate::{
        AttributeError, Attributes, Call, CallConfig, CallError, CallInstance, Caller, Interrupt,
        Ledger, SchemaBuilder, Tag,
    };
    pub use crate::{Format, Inclusion, Length, Presence};
}
