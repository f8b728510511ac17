use std::error::Error as StdError;

use callkit_types::{is_reserved, ConfigurationError};
use callkit_validation::{AttributeRules, Format, Rule, Validator};

use crate::ledger::Ledger;

type RescueFn<C> =
    dyn Fn(&mut C, &(dyn StdError + Send + Sync + 'static), &mut Ledger) -> bool + Send + Sync;

/// A declared failure handler.
struct Rescuer<C> {
    kind: &'static str,
    handler: Box<RescueFn<C>>,
}

/// Static description of a call type: what it accepts, how it is validated,
/// which failures it recovers from.
pub struct CallSchema<C> {
    name: String,
    attributes: Vec<String>,
    validators: Vec<Box<dyn Validator>>,
    rescuers: Vec<Rescuer<C>>,
}

impl<C> CallSchema<C> {
    /// Call type name, as used in logs and configuration errors.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared attribute names, in declaration order.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Whether `name` may be bound.
    pub fn declares(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a == name)
    }

    /// Validators in declaration order.
    pub fn validators(&self) -> &[Box<dyn Validator>] {
        &self.validators
    }

    /// Type names of the failures this schema recovers from, in declaration
    /// order.
    pub fn rescued_kinds(&self) -> Vec<&'static str> {
        self.rescuers.iter().map(|r| r.kind).collect()
    }

    /// Hand `failure` to the first handler declared for its type. Returns the
    /// matched type name, or `None` when nothing handles it.
    pub(crate) fn rescue(
        &self,
        call: &mut C,
        failure: &(dyn StdError + Send + Sync + 'static),
        ledger: &mut Ledger,
    ) -> Option<&'static str> {
        self.rescuers
            .iter()
            .find(|r| (r.handler)(call, failure, ledger))
            .map(|r| r.kind)
    }
}

/// Builder handed to [`Call::declare`](crate::Call::declare).
///
/// Problems are collected and reported by [`SchemaBuilder::build`], so
/// declarations read as a single chain.
pub struct SchemaBuilder<C> {
    name: String,
    attributes: Vec<String>,
    validators: Vec<Box<dyn Validator>>,
    rescuers: Vec<Rescuer<C>>,
    problems: Vec<ConfigurationError>,
}

impl<C: 'static> SchemaBuilder<C> {
    /// An empty declaration for the call type `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            validators: Vec::new(),
            rescuers: Vec::new(),
            problems: Vec::new(),
        }
    }

    /// Declare one bindable attribute.
    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(name.into());
        self
    }

    /// Declare several bindable attributes.
    pub fn attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes.extend(names.into_iter().map(Into::into));
        self
    }

    /// Apply `rule` to each named attribute.
    pub fn validates<I, S>(self, names: I, rule: impl Rule + 'static) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.validate_with(AttributeRules::new(names, rule))
    }

    /// Require each named attribute's text to match `pattern`.
    pub fn validates_format<I, S>(mut self, names: I, pattern: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match Format::new(pattern) {
            Ok(format) => self.validates(names, format),
            Err(problem) => {
                self.problems.push(problem);
                self
            }
        }
    }

    /// Add an arbitrary validator.
    pub fn validate_with(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Route failures of type `E` raised by business logic to `handler`
    /// instead of returning them to the caller.
    pub fn rescue_from<E, F>(mut self, handler: F) -> Self
    where
        E: StdError + 'static,
        F: Fn(&mut C, &E, &mut Ledger) + Send + Sync + 'static,
    {
        let wrapped = move |call: &mut C,
                            failure: &(dyn StdError + Send + Sync + 'static),
                            ledger: &mut Ledger| {
            match failure.downcast_ref::<E>() {
                Some(error) => {
                    handler(call, error, ledger);
                    true
                }
                None => false,
            }
        };
        self.rescuers.push(Rescuer {
            kind: std::any::type_name::<E>(),
            handler: Box::new(wrapped),
        });
        self
    }

    /// Check the declaration and freeze it.
    ///
    /// Fails on reserved or duplicate attribute names, rules targeting
    /// undeclared attributes, and invalid patterns.
    pub fn build(mut self) -> Result<CallSchema<C>, ConfigurationError> {
        if !self.problems.is_empty() {
            return Err(self.problems.remove(0));
        }

        for (index, name) in self.attributes.iter().enumerate() {
            if is_reserved(name) {
                return Err(ConfigurationError::ReservedAttribute { name: name.clone() });
            }
            if self.attributes[..index].contains(name) {
                return Err(ConfigurationError::DuplicateAttribute {
                    name: name.clone(),
                    call: self.name.clone(),
                });
            }
        }

        for validator in &self.validators {
            if let Some(target) = validator
                .attributes()
                .iter()
                .find(|t| !self.attributes.contains(*t))
            {
                return Err(ConfigurationError::UnknownRuleTarget {
                    name: target.clone(),
                    call: self.name.clone(),
                });
            }
        }

        Ok(CallSchema {
            name: self.name,
            attributes: self.attributes,
            validators: self.validators,
            rescuers: self.rescuers,
        })
    }
}
