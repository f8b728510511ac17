use callkit_types::{AttributeError, Attributes};

use crate::ledger::{Interrupt, Ledger};
use crate::schema::SchemaBuilder;

/// A concrete call type.
///
/// ```ignore
/// struct LoginService {
///     login: String,
///     pass: String,
/// }
///
/// impl Call for LoginService {
///     type Output = String;
///
///     fn declare(schema: SchemaBuilder<Self>) -> SchemaBuilder<Self> {
///         schema
///             .attributes(["login", "pass"])
///             .validates(["login", "pass"], Presence)
///     }
///
///     fn from_attributes(attributes: &Attributes) -> Result<Self, AttributeError> {
///         Ok(Self {
///             login: attributes.require("login")?,
///             pass: attributes.require("pass")?,
///         })
///     }
///
///     fn call(&mut self, ledger: &mut Ledger) -> Result<String, Interrupt> {
///         ledger.ensure(self.login == self.pass, "Login/pass invalid")?;
///         Ok("ok".into())
///     }
/// }
/// ```
pub trait Call: Sized + 'static {
    /// Value captured as the instance's result.
    type Output;

    /// Name used in logs and configuration errors.
    fn name() -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    /// Declare attributes, validators and failure handlers.
    ///
    /// Evaluated once per type; the result is cached by the
    /// [`SchemaRegistry`](crate::SchemaRegistry).
    fn declare(schema: SchemaBuilder<Self>) -> SchemaBuilder<Self>;

    /// Build the call object from bound attributes once the validation gate
    /// has passed. Declared attributes the caller did not supply are absent
    /// from `attributes`.
    ///
    /// A refused value is filed under its attribute and the instance stays
    /// invalid; business logic does not run.
    fn from_attributes(attributes: &Attributes) -> Result<Self, AttributeError>;

    /// Business logic. Runs at most once, and only on a valid instance.
    fn call(&mut self, ledger: &mut Ledger) -> Result<Self::Output, Interrupt>;
}
