//! Property tests: the ledger keeps global append order and its two logs
//! never influence each other.

use callkit::prelude::*;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Error(String),
    Message(String, Option<String>),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z ]{1,12}".prop_map(Op::Error),
        (
            "[a-z ]{1,12}",
            prop::option::of(prop_oneof![
                Just("info".to_string()),
                Just("warning".to_string()),
                Just("success".to_string()),
                "[a-z]{1,6}",
            ])
        )
            .prop_map(|(text, tag)| Op::Message(text, tag)),
    ]
}

fn apply(ops: &[Op]) -> Ledger {
    let mut ledger = Ledger::new();
    for op in ops {
        match op {
            Op::Error(text) => ledger.error(text.as_str()),
            Op::Message(text, Some(tag)) => ledger.message_tagged(text.as_str(), tag.as_str()),
            Op::Message(text, None) => ledger.message(text.as_str()),
        }
    }
    ledger
}

proptest! {
    /// `messages()` is every appended text in append order.
    #[test]
    fn messages_follow_append_order(ops in prop::collection::vec(arb_op(), 0..40)) {
        let ledger = apply(&ops);
        let expected: Vec<&str> = ops
            .iter()
            .filter_map(|op| match op {
                Op::Message(text, _) => Some(text.as_str()),
                Op::Error(_) => None,
            })
            .collect();
        prop_assert_eq!(ledger.messages(), expected);
    }

    /// `messages_of(tag)` is the append-ordered subsequence carrying that tag.
    #[test]
    fn messages_of_is_an_ordered_filter(
        ops in prop::collection::vec(arb_op(), 0..40),
        probe in prop_oneof![Just("default".to_string()), Just("info".to_string()), "[a-z]{1,6}"],
    ) {
        let ledger = apply(&ops);
        let expected: Vec<&str> = ops
            .iter()
            .filter_map(|op| match op {
                Op::Message(text, tag) if tag.as_deref().unwrap_or("default") == probe => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect();
        prop_assert_eq!(ledger.messages_of(&probe), expected);
    }

    /// Base errors keep order, are never deduplicated, and alone decide validity.
    #[test]
    fn errors_alone_decide_validity(ops in prop::collection::vec(arb_op(), 0..40)) {
        let ledger = apply(&ops);
        let expected: Vec<&str> = ops
            .iter()
            .filter_map(|op| match op {
                Op::Error(text) => Some(text.as_str()),
                Op::Message(..) => None,
            })
            .collect();
        prop_assert_eq!(ledger.errors().base(), expected.clone());
        prop_assert_eq!(ledger.is_valid(), expected.is_empty());
    }
}
