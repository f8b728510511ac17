use std::error::Error as StdError;
use std::fmt;

use callkit_types::{ErrorKey, Errors, MessageLog, Tag};

/// Proof that an error was recorded before aborting. Only
/// [`Ledger::halt`] mints one.
#[derive(Debug)]
pub struct AbortToken(());

/// Why business logic stopped early.
///
/// Returned as the `Err` side of [`Call::call`](crate::Call::call). Any
/// `std::error::Error` converts into [`Interrupt::Failure`], so `?` works on
/// fallible helpers inside business logic.
#[derive(Debug)]
pub enum Interrupt {
    /// Raised by [`Ledger::halt`]. The error is already recorded; the envelope
    /// absorbs the interrupt.
    Abort(AbortToken),
    /// Anything else. Fatal unless the schema declares a handler for it.
    Failure(Box<dyn StdError + Send + Sync + 'static>),
}

impl Interrupt {
    /// Box `error` as a failure.
    pub fn failure(error: impl StdError + Send + Sync + 'static) -> Self {
        Interrupt::Failure(Box::new(error))
    }

    pub fn is_abort(&self) -> bool {
        matches!(self, Interrupt::Abort(_))
    }
}

impl fmt::Display for Interrupt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interrupt::Abort(_) => f.write_str("call aborted"),
            Interrupt::Failure(source) => write!(f, "call failed: {source}"),
        }
    }
}

impl<E> From<E> for Interrupt
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Interrupt::Failure(Box::new(error))
    }
}

/// Error and message store for one invocation.
///
/// The two logs are independent: messages never affect validity.
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    errors: Errors,
    messages: MessageLog,
}

impl Ledger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `text` under the base key and keep going.
    pub fn error(&mut self, text: impl Into<String>) {
        self.errors.add_base(text);
    }

    /// Record `text` under the base key and stop business logic.
    ///
    /// ```ignore
    /// if self.login != self.pass {
    ///     return Err(ledger.halt("Login/pass invalid"));
    /// }
    /// ```
    #[must_use = "return the interrupt to stop the call"]
    pub fn halt(&mut self, text: impl Into<String>) -> Interrupt {
        self.error(text);
        Interrupt::Abort(AbortToken(()))
    }

    /// Halt with `text` unless `condition` holds.
    pub fn ensure(&mut self, condition: bool, text: impl Into<String>) -> Result<(), Interrupt> {
        if condition {
            Ok(())
        } else {
            Err(self.halt(text))
        }
    }

    /// Record `text` under an attribute key.
    pub fn add_error(&mut self, key: impl Into<ErrorKey>, text: impl Into<String>) {
        self.errors.add(key, text);
    }

    /// Append a message with the default tag.
    pub fn message(&mut self, text: impl Into<String>) {
        self.messages.push(text, Tag::DEFAULT);
    }

    /// Append a message under `tag`. Tags are open; any string works.
    pub fn message_tagged(&mut self, text: impl Into<String>, tag: impl Into<Tag>) {
        self.messages.push(text, tag);
    }

    /// Every error recorded so far, rule failures included.
    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    pub(crate) fn errors_mut(&mut self) -> &mut Errors {
        &mut self.errors
    }

    /// Messages with their tags, in append order.
    pub fn message_log(&self) -> &MessageLog {
        &self.messages
    }

    /// Message texts in append order, whatever their tag.
    pub fn messages(&self) -> Vec<&str> {
        self.messages.texts()
    }

    /// Texts carrying `tag`, in append order. Unknown tags yield nothing.
    pub fn messages_of(&self, tag: impl AsRef<str>) -> Vec<&str> {
        self.messages.of(tag)
    }

    /// No errors recorded. Messages never count.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
