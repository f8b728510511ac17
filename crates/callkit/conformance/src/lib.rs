//! Reference call types exercised by the conformance suite.
//!
//! Each type pins down one lifecycle behaviour: validation gating, aborting,
//! soft errors, tagged messages, and declared versus unhandled failures.

use callkit::prelude::*;
use thiserror::Error;

/// Logs in when `login` equals `pass`. Both must be strings.
pub struct LoginService {
    pub login: String,
    pub pass: String,
}

impl Call for LoginService {
    type Output = String;

    fn declare(schema: SchemaBuilder<Self>) -> SchemaBuilder<Self> {
        schema
            .attributes(["login", "pass"])
            .validates(["login", "pass"], Presence)
    }

    fn from_attributes(attributes: &Attributes) -> Result<Self, AttributeError> {
        Ok(Self {
            login: attributes.require("login")?,
            pass: attributes.require("pass")?,
        })
    }

    fn call(&mut self, ledger: &mut Ledger) -> Result<String, Interrupt> {
        ledger.ensure(self.login == self.pass, "Login/pass invalid")?;
        ledger.message_tagged("signed in", Tag::SUCCESS);
        Ok("ok".into())
    }
}

/// Records two soft errors and still returns.
pub struct SoftFailService;

impl Call for SoftFailService {
    type Output = String;

    fn declare(schema: SchemaBuilder<Self>) -> SchemaBuilder<Self> {
        schema
    }

    fn from_attributes(_: &Attributes) -> Result<Self, AttributeError> {
        Ok(SoftFailService)
    }

    fn call(&mut self, ledger: &mut Ledger) -> Result<String, Interrupt> {
        ledger.error("fail 1");
        ledger.error("fail 2");
        Ok("ok".into())
    }
}

/// Emits each `(text, tag)` pair from its `notes` attribute, then returns how
/// many it emitted. A `null` tag uses the default tag.
pub struct Announcer {
    pub notes: Vec<(String, Option<String>)>,
}

impl Call for Announcer {
    type Output = usize;

    fn declare(schema: SchemaBuilder<Self>) -> SchemaBuilder<Self> {
        schema.attribute("notes")
    }

    fn from_attributes(attributes: &Attributes) -> Result<Self, AttributeError> {
        Ok(Self {
            notes: attributes.read("notes")?.unwrap_or_default(),
        })
    }

    fn call(&mut self, ledger: &mut Ledger) -> Result<usize, Interrupt> {
        for (text, tag) in &self.notes {
            match tag {
                Some(tag) => ledger.message_tagged(text.as_str(), tag.as_str()),
                None => ledger.message(text.as_str()),
            }
        }
        Ok(self.notes.len())
    }
}

#[derive(Debug, Error)]
#[error("insufficient funds: balance {balance}, requested {requested}")]
pub struct InsufficientFunds {
    pub balance: u64,
    pub requested: u64,
}

#[derive(Debug, Error)]
#[error("ledger offline")]
pub struct LedgerOffline;

/// Withdraws `amount` from `balance`, both whole numbers. Overdrafts are
/// recovered by a declared handler; an `offline` flag raises a failure
/// nothing handles.
pub struct Withdraw {
    pub balance: u64,
    pub amount: u64,
    pub offline: bool,
    pub overdraft_notices: u32,
}

impl Withdraw {
    fn on_insufficient_funds(&mut self, err: &InsufficientFunds, ledger: &mut Ledger) {
        self.overdraft_notices += 1;
        ledger.add_error("amount", format!("exceeds balance of {}", err.balance));
        ledger.message_tagged("overdraft blocked", Tag::WARNING);
    }
}

impl Call for Withdraw {
    type Output = u64;

    fn declare(schema: SchemaBuilder<Self>) -> SchemaBuilder<Self> {
        schema
            .attributes(["balance", "amount", "offline"])
            .validates(["balance", "amount"], Presence)
            .rescue_from::<InsufficientFunds, _>(Withdraw::on_insufficient_funds)
    }

    fn from_attributes(attributes: &Attributes) -> Result<Self, AttributeError> {
        Ok(Self {
            balance: attributes.require("balance")?,
            amount: attributes.require("amount")?,
            offline: attributes.read("offline")?.unwrap_or(false),
            overdraft_notices: 0,
        })
    }

    fn call(&mut self, ledger: &mut Ledger) -> Result<u64, Interrupt> {
        if self.offline {
            return Err(LedgerOffline.into());
        }
        let remaining = self
            .balance
            .checked_sub(self.amount)
            .ok_or(InsufficientFunds {
                balance: self.balance,
                requested: self.amount,
            })?;
        ledger.message(format!("withdrew {}", self.amount));
        Ok(remaining)
    }
}
