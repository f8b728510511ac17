//! Validation gate.

use callkit_types::{Attributes, ErrorOrigin, Errors, Validity};
use tracing::debug;

use crate::schema::CallSchema;

/// Runs a schema's validators and derives validity from the error ledger.
pub struct ValidationGate;

impl ValidationGate {
    /// Run every validator against `attributes`, then file their failures in
    /// `errors` in place of any left by an earlier pass.
    ///
    /// All validators run; the result reflects every error in the ledger,
    /// not only the ones this pass produced.
    pub fn evaluate<C>(
        schema: &CallSchema<C>,
        attributes: &Attributes,
        errors: &mut Errors,
    ) -> Validity {
        let mut fresh = Errors::new();
        for validator in schema.validators() {
            validator.validate(attributes, &mut fresh);
        }
        let failures = fresh.len();
        errors.replace_origin(ErrorOrigin::Validation, fresh);

        let validity = Validity::from_error_count(errors.len());
        debug!(
            call = schema.name(),
            validators = schema.validators().len(),
            failures,
            ?validity,
            "Validation gate evaluated"
        );
        validity
    }
}
