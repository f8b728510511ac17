use callkit_types::{is_blank, Attributes, ConfigurationError, Errors};
use regex::Regex;
use serde_json::Value;
use tracing::trace;

use crate::traits::{Rule, Validator};

/// Applies one [`Rule`] to each of a list of attributes, filing failures
/// under the attribute's name.
pub struct AttributeRules {
    name: String,
    attributes: Vec<String>,
    rule: Box<dyn Rule>,
}

impl AttributeRules {
    pub fn new<I, S>(attributes: I, rule: impl Rule + 'static) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let attributes: Vec<String> = attributes.into_iter().map(Into::into).collect();
        let name = format!("{}({})", rule.rule_name(), attributes.join(", "));
        Self {
            name,
            attributes,
            rule: Box::new(rule),
        }
    }
}

impl Validator for AttributeRules {
    fn validator_name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> &[String] {
        &self.attributes
    }

    fn validate(&self, attributes: &Attributes, errors: &mut Errors) {
        for name in &self.attributes {
            if let Some(message) = self.rule.check(attributes.get(name)) {
                trace!(rule = self.rule.rule_name(), attribute = %name, "rule failed");
                errors.add(name.as_str(), message);
            }
        }
    }
}

/// The value must not be blank.
#[derive(Clone, Debug, Default)]
pub struct Presence;

impl Rule for Presence {
    fn rule_name(&self) -> &'static str {
        "presence"
    }

    fn check(&self, value: Option<&Value>) -> Option<String> {
        if is_blank(value) {
            Some("can't be blank".into())
        } else {
            None
        }
    }
}

/// Bounds on the character count of a string (or element count of an array).
///
/// Absent and `null` values pass; pair with [`Presence`] to require them.
#[derive(Clone, Debug, Default)]
pub struct Length {
    pub minimum: Option<usize>,
    pub maximum: Option<usize>,
    pub is: Option<usize>,
}

impl Length {
    pub fn minimum(minimum: usize) -> Self {
        Self {
            minimum: Some(minimum),
            ..Self::default()
        }
    }

    pub fn maximum(maximum: usize) -> Self {
        Self {
            maximum: Some(maximum),
            ..Self::default()
        }
    }

    pub fn between(minimum: usize, maximum: usize) -> Self {
        Self {
            minimum: Some(minimum),
            maximum: Some(maximum),
            is: None,
        }
    }

    pub fn exactly(is: usize) -> Self {
        Self {
            is: Some(is),
            ..Self::default()
        }
    }
}

fn characters(count: usize) -> String {
    if count == 1 {
        "1 character".into()
    } else {
        format!("{count} characters")
    }
}

fn measure(value: &Value) -> usize {
    match value {
        Value::String(s) => s.chars().count(),
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        other => other.to_string().chars().count(),
    }
}

impl Rule for Length {
    fn rule_name(&self) -> &'static str {
        "length"
    }

    fn check(&self, value: Option<&Value>) -> Option<String> {
        let value = match value {
            None | Some(Value::Null) => return None,
            Some(v) => v,
        };
        let len = measure(value);

        if let Some(is) = self.is {
            if len != is {
                return Some(format!(
                    "is the wrong length (should be {})",
                    characters(is)
                ));
            }
        }
        if let Some(min) = self.minimum {
            if len < min {
                return Some(format!("is too short (minimum is {})", characters(min)));
            }
        }
        if let Some(max) = self.maximum {
            if len > max {
                return Some(format!("is too long (maximum is {})", characters(max)));
            }
        }
        None
    }
}

/// The value must be one of an allowed set.
#[derive(Clone, Debug)]
pub struct Inclusion {
    allowed: Vec<Value>,
}

impl Inclusion {
    pub fn new<I, V>(allowed: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }
}

impl Rule for Inclusion {
    fn rule_name(&self) -> &'static str {
        "inclusion"
    }

    fn check(&self, value: Option<&Value>) -> Option<String> {
        match value {
            None | Some(Value::Null) => None,
            Some(v) if self.allowed.contains(v) => None,
            Some(_) => Some("is not included in the list".into()),
        }
    }
}

/// The value's text must match a regular expression.
#[derive(Clone, Debug)]
pub struct Format {
    pattern: Regex,
}

impl Format {
    pub fn new(pattern: &str) -> Result<Self, ConfigurationError> {
        let pattern = Regex::new(pattern).map_err(|e| ConfigurationError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { pattern })
    }
}

impl Rule for Format {
    fn rule_name(&self) -> &'static str {
        "format"
    }

    fn check(&self, value: Option<&Value>) -> Option<String> {
        let matched = match value {
            None | Some(Value::Null) => return None,
            Some(Value::String(s)) => self.pattern.is_match(s),
            Some(other) => self.pattern.is_match(&other.to_string()),
        };
        if matched {
            None
        } else {
            Some("is invalid".into())
        }
    }
}

type CustomFn = dyn Fn(&Attributes, &mut Errors) + Send + Sync;

/// A validator backed by a closure, for cross-attribute checks.
pub struct Custom {
    name: String,
    attributes: Vec<String>,
    check: Box<CustomFn>,
}

impl Custom {
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Attributes, &mut Errors) + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            check: Box::new(check),
        }
    }

    /// Attributes the closure reads, checked against the schema.
    pub fn reads<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = attributes.into_iter().map(Into::into).collect();
        self
    }
}

impl Validator for Custom {
    fn validator_name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> &[String] {
        &self.attributes
    }

    fn validate(&self, attributes: &Attributes, errors: &mut Errors) {
        (self.check)(attributes, errors);
    }
}
