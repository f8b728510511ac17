use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Key an error is filed under.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKey {
    /// The general key, for errors not tied to an attribute.
    Base,
    /// A named attribute.
    Field(String),
}

impl ErrorKey {
    /// Name the base key is addressed by.
    pub const BASE_NAME: &'static str = "base";

    /// Key for the attribute `name`.
    pub fn field(name: impl Into<String>) -> Self {
        ErrorKey::Field(name.into())
    }

    /// `"base"` or the attribute name.
    pub fn as_str(&self) -> &str {
        match self {
            ErrorKey::Base => Self::BASE_NAME,
            ErrorKey::Field(name) => name,
        }
    }

    pub fn is_base(&self) -> bool {
        matches!(self, ErrorKey::Base)
    }
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ErrorKey {
    fn from(name: &str) -> Self {
        if name == Self::BASE_NAME {
            ErrorKey::Base
        } else {
            ErrorKey::Field(name.to_string())
        }
    }
}

impl From<String> for ErrorKey {
    fn from(name: String) -> Self {
        ErrorKey::from(name.as_str())
    }
}

impl Serialize for ErrorKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(ErrorKey::from(String::deserialize(deserializer)?))
    }
}

/// Which lifecycle phase produced an error entry.
///
/// Validation entries are replaced wholesale each time the gate runs, so
/// re-validating the same bound state never duplicates them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorOrigin {
    /// Filed by the validation gate.
    Validation,
    /// Filed by business logic, a failure handler or the call object.
    Call,
}

#[derive(Clone, Debug, PartialEq)]
struct ErrorEntry {
    key: ErrorKey,
    message: String,
    origin: ErrorOrigin,
}

/// Ordered multimap of error key to messages.
///
/// Entries keep global insertion order. Nothing is ever deduplicated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Errors {
    entries: Vec<ErrorEntry>,
}

impl Errors {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` under `key`.
    pub fn add(&mut self, key: impl Into<ErrorKey>, message: impl Into<String>) {
        self.push(key.into(), message.into(), ErrorOrigin::Call);
    }

    /// Append `message` under the base key.
    pub fn add_base(&mut self, message: impl Into<String>) {
        self.push(ErrorKey::Base, message.into(), ErrorOrigin::Call);
    }

    fn push(&mut self, key: ErrorKey, message: String, origin: ErrorOrigin) {
        self.entries.push(ErrorEntry {
            key,
            message,
            origin,
        });
    }

    /// Drop every entry from `origin` and append `fresh` in its place, tagged
    /// with that origin.
    pub fn replace_origin(&mut self, origin: ErrorOrigin, fresh: Errors) {
        self.entries.retain(|e| e.origin != origin);
        for entry in fresh.entries {
            self.push(entry.key, entry.message, origin);
        }
    }

    /// Messages filed under `key`, in insertion order. `"base"` addresses the
    /// base key.
    pub fn get(&self, key: &str) -> Vec<&str> {
        self.on(&ErrorKey::from(key))
    }

    /// Messages filed under `key`, in insertion order.
    pub fn on(&self, key: &ErrorKey) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.key == *key)
            .map(|e| e.message.as_str())
            .collect()
    }

    /// Messages filed under the base key.
    pub fn base(&self) -> Vec<&str> {
        self.on(&ErrorKey::Base)
    }

    /// Whether anything is filed under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        let key = ErrorKey::from(key);
        self.entries.iter().any(|e| e.key == key)
    }

    /// Distinct keys, ordered by their first entry.
    pub fn keys(&self) -> Vec<&ErrorKey> {
        let mut keys: Vec<&ErrorKey> = Vec::new();
        for entry in &self.entries {
            if !keys.contains(&&entry.key) {
                keys.push(&entry.key);
            }
        }
        keys
    }

    /// Every `(key, message)` pair in global insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ErrorKey, &str)> {
        self.entries.iter().map(|e| (&e.key, e.message.as_str()))
    }

    /// Messages grouped by key, keys ordered by first entry.
    pub fn grouped(&self) -> Vec<(&ErrorKey, Vec<&str>)> {
        self.keys()
            .into_iter()
            .map(|key| (key, self.on(key)))
            .collect()
    }

    /// Human-readable sentences: `"Pass can't be blank"`. Base entries are
    /// returned as-is.
    pub fn full_messages(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| match &e.key {
                ErrorKey::Base => e.message.clone(),
                ErrorKey::Field(name) => format!("{} {}", humanize(name), e.message),
            })
            .collect()
    }

    /// Total number of messages across all keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No errors recorded; the call is valid.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry, whatever its origin.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Serialize for Errors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let grouped = self.grouped();
        let mut map = serializer.serialize_map(Some(grouped.len()))?;
        for (key, messages) in grouped {
            map.serialize_entry(key.as_str(), &messages)?;
        }
        map.end()
    }
}

/// `first_name` -> `First name`.
fn humanize(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
