//! Declared failure handlers and unhandled failures.

use callkit::prelude::*;
use callkit_conformance::Withdraw;

#[test]
fn successful_withdrawal() {
    let call = CallInstance::<Withdraw>::call(attributes! {
        "balance" => 100,
        "amount" => 30,
    })
    .unwrap();

    assert!(call.valid());
    assert_eq!(call.result(), Some(&70));
    assert_eq!(call.messages(), vec!["withdrew 30"]);
}

#[test]
fn declared_failure_goes_to_its_handler() {
    let call = CallInstance::<Withdraw>::call(attributes! {
        "balance" => 10,
        "amount" => 30,
    })
    .unwrap();

    assert!(!call.valid());
    assert!(call.result().is_none());
    assert_eq!(call.errors().get("amount"), vec!["exceeds balance of 10"]);
    assert_eq!(call.messages_of(Tag::WARNING), vec!["overdraft blocked"]);
    assert_eq!(call.call_object().map(|w| w.overdraft_notices), Some(1));
}

#[test]
fn unhandled_failure_reaches_the_caller() {
    let outcome = CallInstance::<Withdraw>::call(attributes! {
        "balance" => 10,
        "amount" => 5,
        "offline" => true,
    });

    match outcome {
        Err(CallError::Unhandled { call, source }) => {
            assert_eq!(call, "Withdraw");
            assert_eq!(source.to_string(), "ledger offline");
        }
        Err(other) => panic!("expected unhandled failure, got {other}"),
        Ok(_) => panic!("expected unhandled failure, got an instance"),
    }
}

#[test]
fn unhandled_failure_in_explicit_mode_surfaces_from_run() {
    let caller = Caller::new(CallConfig::default().with_invoke(callkit::InvokeMode::Explicit));
    let mut call = caller
        .call::<Withdraw>(attributes! { "balance" => 1, "amount" => 1, "offline" => true })
        .unwrap();

    assert!(matches!(call.run(), Err(CallError::Unhandled { .. })));
    assert!(call.result().is_none());
    assert!(call.has_run());
}

#[test]
fn validation_failure_never_reaches_handlers() {
    let call = CallInstance::<Withdraw>::call(attributes! { "amount" => 30 }).unwrap();

    assert_eq!(call.errors().get("balance"), vec!["can't be blank"]);
    assert!(call.call_object().is_none());
}

#[test]
fn non_numeric_amount_is_refused() {
    let call = CallInstance::<Withdraw>::call(attributes! {
        "balance" => 10,
        "amount" => "lots",
    })
    .unwrap();

    assert!(!call.valid());
    assert_eq!(call.errors().get("amount"), vec![AttributeError::INVALID]);
    assert!(call.result().is_none());
    assert!(call.messages().is_empty());
}

#[test]
fn negative_amount_is_refused() {
    let call = CallInstance::<Withdraw>::call(attributes! {
        "balance" => 10,
        "amount" => -5,
    })
    .unwrap();

    assert_eq!(call.errors().get("amount"), vec![AttributeError::INVALID]);
    assert!(call.result().is_none());
}

#[test]
fn wrong_type_on_an_optional_flag_is_refused() {
    let call = CallInstance::<Withdraw>::call(attributes! {
        "balance" => 10,
        "amount" => 5,
        "offline" => "maybe",
    })
    .unwrap();

    assert_eq!(call.errors().get("offline"), vec![AttributeError::INVALID]);
    assert!(call.result().is_none());
}
