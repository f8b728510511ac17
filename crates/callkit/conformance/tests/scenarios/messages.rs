//! The message channel and its independence from errors.

use callkit::prelude::*;
use callkit_conformance::Announcer;
use serde_json::json;

fn announce(notes: serde_json::Value) -> CallInstance<Announcer> {
    CallInstance::<Announcer>::call(Attributes::new().with("notes", notes)).unwrap()
}

#[test]
fn messages_are_filtered_by_tag() {
    let call = announce(json!([
        ["plain", null],
        ["heads up", "info"],
        ["careful", "warning"],
        ["more info", "info"]
    ]));

    assert_eq!(
        call.messages(),
        vec!["plain", "heads up", "careful", "more info"]
    );
    assert_eq!(call.messages_of("info"), vec!["heads up", "more info"]);
    assert_eq!(call.messages_of(Tag::DEFAULT), vec!["plain"]);
    assert_eq!(call.messages_of("warning"), vec!["careful"]);
}

#[test]
fn unknown_tags_yield_nothing() {
    let call = announce(json!([["plain", null]]));
    assert!(call.messages_of("never-declared").is_empty());
    assert!(call.messages_of("").is_empty());
}

#[test]
fn messages_leave_validity_alone() {
    let call = announce(json!([["a", "error"], ["b", "warning"]]));
    assert!(call.valid());
    assert!(call.errors().is_empty());
    assert_eq!(call.result(), Some(&2));
}

#[test]
fn message_log_serializes_with_tags() {
    let call = announce(json!([["saved", "success"], ["plain", null]]));
    let value = serde_json::to_value(call.message_log()).unwrap();
    assert_eq!(
        value,
        json!([
            {"message": "saved", "tag": "success"},
            {"message": "plain", "tag": "default"}
        ])
    );
}
