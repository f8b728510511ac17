//! Attribute binder.
//!
//! Every supplied key is checked before any value is applied: a rejected map
//! leaves nothing half-bound.

use callkit_types::{is_reserved, Attributes, ConfigurationError, UndeclaredPolicy};
use tracing::warn;

use crate::schema::CallSchema;

/// Restrict `supplied` to the attributes `schema` declares.
///
/// Reserved names always fail. Undeclared names fail under
/// [`UndeclaredPolicy::Reject`] and are dropped with a warning under
/// [`UndeclaredPolicy::Warn`].
pub fn bind<C>(
    schema: &CallSchema<C>,
    supplied: Attributes,
    policy: UndeclaredPolicy,
) -> Result<Attributes, ConfigurationError> {
    for name in supplied.names() {
        if is_reserved(name) {
            return Err(ConfigurationError::ReservedAttribute {
                name: name.to_string(),
            });
        }
    }

    if policy == UndeclaredPolicy::Reject {
        if let Some(name) = supplied.names().find(|n| !schema.declares(n)) {
            return Err(ConfigurationError::UndeclaredAttribute {
                name: name.to_string(),
                call: schema.name().to_string(),
            });
        }
    }

    let mut bound = Attributes::new();
    for (name, value) in supplied {
        if schema.declares(&name) {
            bound.insert(name, value);
        } else {
            warn!(
                call = schema.name(),
                attribute = %name,
                "Undeclared attribute ignored; add `.attribute(\"{}\")` to the schema",
                name
            );
        }
    }
    Ok(bound)
}
