//! Invoke-on-construct versus explicit invocation.

use callkit::prelude::*;
use callkit::{InvokeMode, Validity};
use callkit_conformance::LoginService;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn explicit() -> Caller {
    Caller::new(CallConfig::default().with_invoke(InvokeMode::Explicit))
}

#[test]
fn explicit_construction_only_binds() {
    init_tracing();
    let login = explicit()
        .call::<LoginService>(attributes! { "login" => "123" })
        .unwrap();

    assert!(!login.has_run());
    assert_eq!(login.validity(), Validity::Unknown);
    assert!(login.errors().is_empty());
    assert!(login.result().is_none());
}

#[test]
fn explicit_run_validates_then_executes() {
    init_tracing();
    let mut login = explicit()
        .call::<LoginService>(attributes! { "login" => "123", "pass" => "123" })
        .unwrap();

    let ran = login.run().unwrap();
    assert!(ran.valid());
    assert_eq!(ran.result().map(String::as_str), Some("ok"));
    assert_eq!(ran.messages_of("success"), vec!["signed in"]);
}

#[test]
fn explicit_run_on_invalid_input() {
    init_tracing();
    let mut login = explicit()
        .call::<LoginService>(attributes! { "login" => "123" })
        .unwrap();

    login.run().unwrap();
    assert_eq!(login.validity(), Validity::Invalid);
    assert_eq!(login.errors().get("pass"), vec!["can't be blank"]);
    assert!(login.result().is_none());
}

#[test]
fn running_twice_executes_once() {
    init_tracing();
    let mut login = explicit()
        .call::<LoginService>(attributes! { "login" => "123", "pass" => "123" })
        .unwrap();

    login.run().unwrap().run().unwrap();
    assert_eq!(login.messages(), vec!["signed in"]);
}

#[test]
fn validity_is_a_pure_projection() {
    init_tracing();
    let login = CallInstance::<LoginService>::call(attributes! { "login" => "123" }).unwrap();

    for _ in 0..3 {
        assert!(!login.valid());
        assert_eq!(login.validity(), Validity::Invalid);
    }
    assert_eq!(login.errors().len(), 1);
}

#[test]
fn independent_instances_in_parallel() {
    init_tracing();
    let handles: Vec<_> = (0..16)
        .map(|i| {
            std::thread::spawn(move || {
                let pass = if i % 2 == 0 { "same" } else { "other" };
                let login = CallInstance::<LoginService>::call(attributes! {
                    "login" => "same",
                    "pass" => pass,
                })
                .unwrap();
                (i, login.valid())
            })
        })
        .collect();

    for handle in handles {
        let (i, valid) = handle.join().unwrap();
        assert_eq!(valid, i % 2 == 0);
    }
}
