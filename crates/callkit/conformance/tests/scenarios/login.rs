//! The login service end to end: the four canonical outcomes of a call.

use callkit::prelude::*;
use callkit::{ResultPolicy, Validity};
use callkit_conformance::{LoginService, SoftFailService};

#[test]
fn matching_credentials_are_valid() {
    let login = CallInstance::<LoginService>::call(attributes! {
        "login" => "123",
        "pass" => "123",
    })
    .unwrap();

    assert!(login.valid());
    assert_eq!(login.validity(), Validity::Valid);
    assert_eq!(login.result().map(String::as_str), Some("ok"));
    assert!(login.errors().is_empty());
}

#[test]
fn missing_pass_fails_validation() {
    let login = CallInstance::<LoginService>::call(attributes! { "login" => "123" }).unwrap();

    assert!(!login.valid());
    assert_eq!(login.errors().get("pass"), vec!["can't be blank"]);
    assert!(login.errors().get("login").is_empty());
    assert!(login.result().is_none());
    assert!(login.messages().is_empty());
}

#[test]
fn missing_both_reports_both() {
    let login = CallInstance::<LoginService>::call(Attributes::new()).unwrap();

    assert_eq!(login.errors().get("login"), vec!["can't be blank"]);
    assert_eq!(login.errors().get("pass"), vec!["can't be blank"]);
    assert_eq!(
        login.errors().full_messages(),
        vec!["Login can't be blank", "Pass can't be blank"]
    );
}

#[test]
fn mismatched_credentials_halt_at_base() {
    let login = CallInstance::<LoginService>::call(attributes! {
        "login" => "123",
        "pass" => "12",
    })
    .unwrap();

    assert!(!login.valid());
    assert_eq!(login.errors().get("base"), vec!["Login/pass invalid"]);
    assert!(login.result().is_none());
    assert!(login.messages_of(&Tag::SUCCESS).is_empty());
}

#[test]
fn soft_errors_keep_order_and_result() {
    let call = CallInstance::<SoftFailService>::call(Attributes::new()).unwrap();

    assert!(!call.valid());
    assert_eq!(call.errors().base(), vec!["fail 1", "fail 2"]);
    assert_eq!(call.result().map(String::as_str), Some("ok"));
}

#[test]
fn soft_errors_drop_result_when_clean_required() {
    let config = CallConfig::default().with_result(ResultPolicy::RequireClean);
    let call = CallInstance::<SoftFailService>::build(Attributes::new(), config).unwrap();

    assert!(!call.valid());
    assert_eq!(call.errors().base(), vec!["fail 1", "fail 2"]);
    assert!(call.result().is_none());
}
