use pretty_assertions::assert_eq;

use recog_ir::{AtnConfig, ConfigSet, Dfa};

use super::*;
use crate::listener::test_support::{FakeRecognizer, Fixture};

#[test]
fn records_every_kind_in_order() {
    let listener = CollectingListener::new();
    let recognizer = FakeRecognizer::new();
    let fx = Fixture::new();

    listener
        .syntax_error(&recognizer, &fx.syntax_error())
        .unwrap();
    listener
        .report_ambiguity(&recognizer, &fx.ambiguity(true))
        .unwrap();
    listener
        .report_attempting_full_context(&recognizer, &fx.full_context())
        .unwrap();
    listener
        .report_context_sensitivity(&recognizer, &fx.context_sensitivity())
        .unwrap();

    assert_eq!(
        listener.events(),
        vec![
            RecordedEvent::SyntaxError {
                offending_text: Some("+".to_string()),
                line: 3,
                column: 7,
                message: "mismatched input".to_string(),
                cause: Some("input mismatch: expected ID".to_string()),
            },
            RecordedEvent::Ambiguity {
                decision: 4,
                start_index: 0,
                stop_index: 2,
                exact: true,
                alts: [1, 2].into_iter().collect(),
            },
            RecordedEvent::AttemptingFullContext {
                decision: 4,
                start_index: 1,
                stop_index: 3,
                alts: [1, 2].into_iter().collect(),
            },
            RecordedEvent::ContextSensitivity {
                decision: 4,
                start_index: 2,
                stop_index: 4,
                prediction: 2,
                full_context: false,
            },
        ]
    );
    assert_eq!(listener.syntax_error_count(), 1);
}

#[test]
fn take_drains() {
    let listener = CollectingListener::new();
    let fx = Fixture::new();
    listener
        .syntax_error(&FakeRecognizer::new(), &fx.syntax_error())
        .unwrap();

    assert_eq!(listener.len(), 1);
    assert_eq!(listener.take().len(), 1);
    assert!(listener.is_empty());
}

#[test]
fn missing_symbol_and_cause_are_recorded_as_none() {
    let listener = CollectingListener::new();
    let event = SyntaxErrorEvent {
        offending_symbol: None,
        line: 0,
        column: 0,
        message: "token recognition error at: '#'",
        cause: None,
    };

    listener
        .syntax_error(&FakeRecognizer::new(), &event)
        .unwrap();

    assert_eq!(
        listener.events(),
        vec![RecordedEvent::SyntaxError {
            offending_text: None,
            line: 0,
            column: 0,
            message: "token recognition error at: '#'".to_string(),
            cause: None,
        }]
    );
}

#[test]
fn context_sensitivity_records_full_context_configs() {
    let listener = CollectingListener::new();
    let dfa = Dfa::new(9, 0);
    let mut configs = ConfigSet::new(true);
    configs.push(AtnConfig::new(30, 1));
    let event = ContextSensitivityEvent {
        dfa: &dfa,
        start_index: 0,
        stop_index: 1,
        prediction: 1,
        configs: &configs,
    };

    listener
        .report_context_sensitivity(&FakeRecognizer::new(), &event)
        .unwrap();

    assert_eq!(
        listener.events(),
        vec![RecordedEvent::ContextSensitivity {
            decision: 9,
            start_index: 0,
            stop_index: 1,
            prediction: 1,
            full_context: true,
        }]
    );
}
