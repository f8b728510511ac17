use callkit_types::{Attributes, Errors};
use serde_json::Value;

/// One unit of the validation pass.
///
/// Validators run in declaration order and all of them run; a failure in one
/// never prevents the next from reporting.
pub trait Validator: Send + Sync {
    /// Human-readable name, used in logs.
    fn validator_name(&self) -> &str;

    /// Attribute names this validator inspects. The schema checks that each
    /// is declared.
    fn attributes(&self) -> &[String] {
        &[]
    }

    /// Inspect `attributes` and file any failure in `errors`.
    fn validate(&self, attributes: &Attributes, errors: &mut Errors);
}

/// A check applied to a single attribute value.
pub trait Rule: Send + Sync {
    fn rule_name(&self) -> &'static str;

    /// `None` when `value` passes, otherwise the failure message.
    ///
    /// `value` is `None` when the attribute was not supplied.
    fn check(&self, value: Option<&Value>) -> Option<String>;
}
