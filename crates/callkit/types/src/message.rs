use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Free-form label attached to a message.
///
/// Any value is accepted. Querying a tag nobody used yields nothing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(Cow<'static, str>);

impl Tag {
    pub const DEFAULT: Tag = Tag(Cow::Borrowed("default"));
    pub const INFO: Tag = Tag(Cow::Borrowed("info"));
    pub const WARNING: Tag = Tag(Cow::Borrowed("warning"));
    pub const SUCCESS: Tag = Tag(Cow::Borrowed("success"));

    pub fn new(name: impl Into<String>) -> Self {
        Tag(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Tag {
    fn default() -> Self {
        Tag::DEFAULT
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Tag::new(name)
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Tag::new(name)
    }
}

/// One notification emitted by a call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
    /// Defaults to [`Tag::DEFAULT`] when absent from serialized input.
    #[serde(default)]
    pub tag: Tag,
}

/// Append-only log of tagged messages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageLog {
    entries: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` under `tag`.
    pub fn push(&mut self, message: impl Into<String>, tag: impl Into<Tag>) {
        self.entries.push(Message {
            message: message.into(),
            tag: tag.into(),
        });
    }

    /// Every message text, in append order, across all tags.
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|m| m.message.as_str()).collect()
    }

    /// Texts carrying `tag`, in append order.
    pub fn of(&self, tag: impl AsRef<str>) -> Vec<&str> {
        let tag = tag.as_ref();
        self.entries
            .iter()
            .filter(|m| m.tag.as_str() == tag)
            .map(|m| m.message.as_str())
            .collect()
    }

    /// Messages with their tags, in append order.
    pub fn entries(&self) -> &[Message] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
