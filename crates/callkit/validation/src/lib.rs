//! Validation collaborator for the call lifecycle engine.
//!
//! The engine never evaluates rules itself. It hands the bound attributes to
//! each declared [`Validator`] and reads back whatever they filed in the
//! error ledger. Validators must be deterministic and must not touch anything
//! but the ledger they are given, so the gate can run them again on the same
//! state and get the same answer.

pub mod rules;
pub mod traits;

pub use rules::{AttributeRules, Custom, Format, Inclusion, Length, Presence};
pub use traits::{Rule, Validator};
