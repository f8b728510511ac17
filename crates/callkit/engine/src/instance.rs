use std::sync::Arc;

use callkit_types::{
    Attributes, CallConfig, Errors, InvokeMode, MessageLog, ResultPolicy, Validity,
};
use tracing::debug;

use crate::binder;
use crate::call::Call;
use crate::envelope::{Execution, ExecutionEnvelope};
use crate::error::CallResult;
use crate::gate::ValidationGate;
use crate::ledger::Ledger;
use crate::registry::SchemaRegistry;
use crate::schema::CallSchema;

/// One invocation of a call type.
///
/// Built from caller attributes, run at most once, then read through
/// [`valid`](Self::valid), [`result`](Self::result), [`errors`](Self::errors)
/// and [`messages`](Self::messages).
pub struct CallInstance<C: Call> {
    schema: Arc<CallSchema<C>>,
    config: CallConfig,
    attributes: Attributes,
    call: Option<C>,
    ledger: Ledger,
    gated: bool,
    executed: bool,
    result: Option<C::Output>,
}

impl<C: Call> CallInstance<C> {
    /// Bind, validate and execute with the default configuration.
    pub fn call(attributes: Attributes) -> CallResult<Self> {
        Self::build(attributes, CallConfig::default())
    }

    /// Bind `attributes`; under [`InvokeMode::OnConstruct`] also run.
    pub fn build(attributes: Attributes, config: CallConfig) -> CallResult<Self> {
        let mut instance = Self::bind(attributes, config)?;
        if instance.config.invoke == InvokeMode::OnConstruct {
            instance.run()?;
        }
        Ok(instance)
    }

    fn bind(attributes: Attributes, config: CallConfig) -> CallResult<Self> {
        let schema = SchemaRegistry::schema_for::<C>()?;
        let attributes = binder::bind(&schema, attributes, config.undeclared)?;

        debug!(
            call = schema.name(),
            attributes = attributes.len(),
            "Call attributes bound"
        );

        Ok(Self {
            schema,
            config,
            attributes,
            call: None,
            ledger: Ledger::new(),
            gated: false,
            executed: false,
            result: None,
        })
    }

    /// Validate and, if valid, execute. A second run does nothing.
    pub fn run(&mut self) -> CallResult<&mut Self> {
        if self.executed {
            debug!(call = self.schema.name(), "Call already ran");
            return Ok(self);
        }
        self.executed = true;

        if !self.validate() {
            debug!(
                call = self.schema.name(),
                error_count = self.ledger.errors().len(),
                "Call invalid; business logic skipped"
            );
            return Ok(self);
        }

        let Some(call) = self.call.as_mut() else {
            return Ok(self);
        };
        let execution = ExecutionEnvelope::execute(call, &self.schema, &mut self.ledger)?;
        if let Execution::Completed(output) = execution {
            match self.config.result {
                ResultPolicy::GateOnly => self.result = Some(output),
                ResultPolicy::RequireClean if self.ledger.is_valid() => self.result = Some(output),
                ResultPolicy::RequireClean => {
                    debug!(
                        call = self.schema.name(),
                        error_count = self.ledger.errors().len(),
                        "Result discarded; call recorded errors"
                    );
                }
            }
        }
        Ok(self)
    }

    /// Run the validation gate again over the bound attributes, then build the
    /// typed call object if the gate passed and it does not exist yet.
    ///
    /// Rule failures from earlier passes are replaced, never duplicated. A
    /// value the call object refuses is filed under its attribute once.
    pub fn validate(&mut self) -> bool {
        self.gated = true;
        let validity =
            ValidationGate::evaluate(&self.schema, &self.attributes, self.ledger.errors_mut());
        if !validity.is_valid() {
            return false;
        }
        if self.call.is_some() {
            return true;
        }

        match C::from_attributes(&self.attributes) {
            Ok(call) => {
                self.call = Some(call);
                true
            }
            Err(err) => {
                debug!(
                    call = self.schema.name(),
                    attribute = %err.name,
                    detail = %err.detail,
                    "Attribute refused by call object"
                );
                self.ledger.add_error(err.name, err.message);
                false
            }
        }
    }

    /// No errors recorded.
    pub fn valid(&self) -> bool {
        self.ledger.is_valid()
    }

    /// [`Validity::Unknown`] until the gate has run.
    pub fn validity(&self) -> Validity {
        if self.gated {
            Validity::from_error_count(self.ledger.errors().len())
        } else {
            Validity::Unknown
        }
    }

    /// The business-logic return value. `None` when the call was invalid,
    /// aborted, rescued, or had its result discarded by
    /// [`ResultPolicy::RequireClean`].
    pub fn result(&self) -> Option<&C::Output> {
        self.result.as_ref()
    }

    /// Consume the instance, keeping only the result.
    pub fn into_result(self) -> Option<C::Output> {
        self.result
    }

    /// Rule failures and business errors, in the order they were recorded.
    pub fn errors(&self) -> &Errors {
        self.ledger.errors()
    }

    /// Message texts in append order.
    pub fn messages(&self) -> Vec<&str> {
        self.ledger.messages()
    }

    /// Message texts carrying `tag`, in append order.
    pub fn messages_of(&self, tag: impl AsRef<str>) -> Vec<&str> {
        self.ledger.messages_of(tag)
    }

    pub fn message_log(&self) -> &MessageLog {
        self.ledger.message_log()
    }

    /// The bound attributes, undeclared names already removed.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// The typed call object. `None` until the gate has passed and the
    /// object accepted every bound value.
    pub fn call_object(&self) -> Option<&C> {
        self.call.as_ref()
    }

    pub fn schema(&self) -> &CallSchema<C> {
        &self.schema
    }

    pub fn config(&self) -> &CallConfig {
        &self.config
    }

    /// Whether [`run`](Self::run) has been called, explicitly or on construct.
    pub fn has_run(&self) -> bool {
        self.executed
    }
}
