// Rust guideline compliant 2026-02-06

//! Property-based tests for Verdict.
//!
//! These tests validate invariants that must hold after arbitrary mutation
//! sequences, not just the hand-picked scenarios in the unit suites.

use proptest::prelude::*;
use serde_json::Value;
use verdict_core::Verdict;

/// A single mutation applied to a verdict.
#[derive(Debug, Clone)]
enum Op {
    AddError(Vec<String>, Vec<i64>),
    AddSuccess(Option<u32>, Vec<String>, Vec<i64>),
    AddMessage(Vec<String>, Vec<i64>),
    AddData(u32),
    ClearMessages,
    ClearData,
    SetStatusCode(u16),
    SetExtra(String, String),
}

fn arb_messages() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[a-z ]{1,12}").unwrap(), 0..3)
}

fn arb_codes() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(1i64..1000, 0..3)
}

fn arb_extra_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,6}").unwrap()
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (arb_messages(), arb_codes()).prop_map(|(m, c)| Op::AddError(m, c)),
        (prop::option::of(any::<u32>()), arb_messages(), arb_codes())
            .prop_map(|(d, m, c)| Op::AddSuccess(d, m, c)),
        (arb_messages(), arb_codes()).prop_map(|(m, c)| Op::AddMessage(m, c)),
        any::<u32>().prop_map(Op::AddData),
        Just(Op::ClearMessages),
        Just(Op::ClearData),
        (100u16..600).prop_map(Op::SetStatusCode),
        (arb_extra_key(), arb_extra_key()).prop_map(|(k, v)| Op::SetExtra(k, v)),
    ]
}

fn apply(verdict: &mut Verdict, op: &Op) {
    match op {
        Op::AddError(messages, codes) => {
            verdict.add_error(messages.clone(), codes.clone());
        }
        Op::AddSuccess(data, messages, codes) => {
            match data {
                Some(value) => verdict.add_success(*value, messages.clone(), codes.clone()),
                None => verdict.add_success((), messages.clone(), codes.clone()),
            };
        }
        Op::AddMessage(messages, codes) => {
            verdict.add_message(messages.clone(), codes.clone());
        }
        Op::AddData(value) => {
            verdict.add_data(*value);
        }
        Op::ClearMessages => {
            verdict.clear_messages();
        }
        Op::ClearData => {
            verdict.clear_data();
        }
        Op::SetStatusCode(code) => {
            verdict.set_status_code(*code);
        }
        Op::SetExtra(key, value) => {
            verdict.set_extra(key.clone(), value.clone());
        }
    }
}

proptest! {
    /// Only one side is ever populated: error state implies an empty
    /// success side, success state implies an empty error side.
    #[test]
    fn prop_sides_are_mutually_exclusive(ops in prop::collection::vec(arb_op(), 0..20)) {
        let mut verdict = Verdict::new();
        for op in &ops {
            apply(&mut verdict, op);
            if verdict.is_error() {
                prop_assert!(verdict.success_messages().is_empty());
                prop_assert!(verdict.success_codes().is_empty());
            } else {
                prop_assert!(verdict.error_messages().is_empty());
                prop_assert!(verdict.error_codes().is_empty());
            }
        }
    }

    /// Entering error state always drops the payload, even re-entrantly.
    #[test]
    fn prop_add_error_always_clears_data(ops in prop::collection::vec(arb_op(), 0..20)) {
        let mut verdict = Verdict::new();
        for op in &ops {
            apply(&mut verdict, op);
            if matches!(op, Op::AddError(_, _)) {
                prop_assert!(verdict.data().is_none());
            }
        }
    }

    /// Extra entries survive every transition; only set_extra touches them.
    #[test]
    fn prop_extra_survives_mutations(ops in prop::collection::vec(arb_op(), 0..20)) {
        let mut verdict = Verdict::new();
        // Underscore key cannot collide with generated [a-z]+ keys.
        verdict.set_extra("_seed", "kept");
        for op in &ops {
            apply(&mut verdict, op);
            prop_assert_eq!(
                verdict.extra_value("_seed"),
                Some(&Value::String("kept".to_string()))
            );
        }
    }

    /// Every envelope carries all reserved keys, a status string matching
    /// the error flag, a non-null data entry, and never reports 200 for an
    /// error verdict.
    #[test]
    fn prop_envelope_contract(ops in prop::collection::vec(arb_op(), 0..20)) {
        let mut verdict = Verdict::new();
        for op in &ops {
            apply(&mut verdict, op);
        }
        let object = verdict.to_object();

        for key in ["status_code", "status", "error", "error_code", "success", "success_code", "data"] {
            prop_assert!(object.contains_key(key), "missing reserved key {}", key);
        }

        let expected = if verdict.is_error() { "error" } else { "success" };
        prop_assert_eq!(&object["status"], &Value::String(expected.to_string()));
        prop_assert!(!object["data"].is_null(), "data must never serialize as null");
        prop_assert!(object["error"].is_array());
        prop_assert!(object["success"].is_array());

        if verdict.is_error() {
            prop_assert_ne!(
                &object["status_code"],
                &Value::from(200u16),
                "error envelopes must not carry the success default"
            );
        }
    }

    /// Consecutive add_error calls accumulate messages and codes in call
    /// order.
    #[test]
    fn prop_error_accumulation_preserves_order(
        batches in prop::collection::vec((arb_messages(), arb_codes()), 1..6)
    ) {
        let mut verdict = Verdict::new();
        let mut expected_messages = Vec::new();
        let mut expected_codes = Vec::new();
        for (messages, codes) in &batches {
            verdict.add_error(messages.clone(), codes.clone());
            expected_messages.extend(messages.iter().cloned());
            expected_codes.extend(codes.iter().copied());
        }
        prop_assert_eq!(verdict.error_messages(), expected_messages.as_slice());
        prop_assert_eq!(verdict.error_codes(), expected_codes.as_slice());
    }

    /// The status-code getter and the serialized status code agree, and the
    /// getter is stable across repeated calls.
    #[test]
    fn prop_status_code_getter_matches_envelope(ops in prop::collection::vec(arb_op(), 0..20)) {
        let mut verdict = Verdict::new();
        for op in &ops {
            apply(&mut verdict, op);
        }
        let serialized = verdict.to_object()["status_code"].clone();
        let first = verdict.status_code();
        let second = verdict.status_code();
        prop_assert_eq!(Value::from(first), serialized);
        prop_assert_eq!(first, second);
    }

    /// to_json is exactly the JSON encoding of to_object.
    #[test]
    fn prop_to_json_matches_to_object(ops in prop::collection::vec(arb_op(), 0..20)) {
        let mut verdict = Verdict::new();
        for op in &ops {
            apply(&mut verdict, op);
        }
        let json = verdict.to_json().expect("Encoding failed");
        let parsed: Value = serde_json::from_str(&json).expect("Invalid JSON produced");
        prop_assert_eq!(parsed, Value::Object(verdict.to_object()));
    }
}
