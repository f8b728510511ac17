//! Property tests: validity, errors and result stay consistent for any input.

use callkit::prelude::*;
use callkit_conformance::LoginService;
use proptest::prelude::*;

fn arb_credential() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[a-z0-9]{1,6}",
    ])
}

fn attributes_for(login: &Option<String>, pass: &Option<String>) -> Attributes {
    let mut attributes = Attributes::new();
    if let Some(login) = login {
        attributes.insert("login", login.as_str());
    }
    if let Some(pass) = pass {
        attributes.insert("pass", pass.as_str());
    }
    attributes
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

proptest! {
    /// `valid()` is exactly "no errors", and a result exists only for valid logins.
    #[test]
    fn valid_iff_no_errors(login in arb_credential(), pass in arb_credential()) {
        let call = CallInstance::<LoginService>::call(attributes_for(&login, &pass)).unwrap();

        prop_assert_eq!(call.valid(), call.errors().is_empty());
        prop_assert_eq!(call.result().is_some(), call.valid());
    }

    /// Every blank credential is reported, independently of the other.
    #[test]
    fn every_blank_field_is_reported(login in arb_credential(), pass in arb_credential()) {
        let call = CallInstance::<LoginService>::call(attributes_for(&login, &pass)).unwrap();

        prop_assert_eq!(call.errors().contains_key("login"), blank(&login));
        prop_assert_eq!(call.errors().contains_key("pass"), blank(&pass));
    }

    /// Business logic only runs when the gate passed, so the base error only
    /// appears for filled-in, mismatched credentials.
    #[test]
    fn base_error_only_after_gate(login in arb_credential(), pass in arb_credential()) {
        let call = CallInstance::<LoginService>::call(attributes_for(&login, &pass)).unwrap();

        let gate_passed = !blank(&login) && !blank(&pass);
        let expect_base = gate_passed && login != pass;
        prop_assert_eq!(call.errors().contains_key("base"), expect_base);
    }
}
