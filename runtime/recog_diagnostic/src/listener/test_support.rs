//! Shared fixtures for listener tests.

use std::cell::RefCell;
use std::rc::Rc;

use recog_ir::{
    AltSet, AtnConfig, ConfigSet, Dfa, RecognitionError, RecognitionErrorKind, Recognizer, Token,
};

use super::{
    AmbiguityEvent, ContextSensitivityEvent, ErrorListener, FullContextEvent, SyntaxErrorEvent,
};
use crate::{ListenerError, ListenerResult};

/// Recognizer over a fixed token text list that records notifications.
pub(crate) struct FakeRecognizer {
    rule_names: Vec<String>,
    tokens: Vec<String>,
    pub(crate) notified: RefCell<Vec<String>>,
    pub(crate) refuse_notify: bool,
}

impl FakeRecognizer {
    pub(crate) fn new() -> Self {
        FakeRecognizer {
            rule_names: vec!["prog".to_string(), "expr".to_string(), String::new()],
            tokens: ["a", "+", "b", "*", "c"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            notified: RefCell::new(Vec::new()),
            refuse_notify: false,
        }
    }
}

impl Recognizer for FakeRecognizer {
    fn grammar_file_name(&self) -> &str {
        "Calc.g4"
    }

    fn rule_names(&self) -> &[String] {
        &self.rule_names
    }

    fn input_text(&self, start: usize, stop: usize) -> String {
        let stop = stop.min(self.tokens.len().saturating_sub(1));
        self.tokens
            .get(start..=stop)
            .map(|toks| toks.concat())
            .unwrap_or_default()
    }

    fn notify_error_listeners(
        &self,
        message: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.refuse_notify {
            return Err("listener chain closed".into());
        }
        self.notified.borrow_mut().push(message.to_string());
        Ok(())
    }
}

/// Owned payloads events borrow from.
pub(crate) struct Fixture {
    pub(crate) token: Token,
    pub(crate) cause: RecognitionError,
    pub(crate) dfa: Dfa,
    pub(crate) alts: AltSet,
    pub(crate) configs: ConfigSet,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        let token = Token::new(5, "+", 3, 7, 1);
        Fixture {
            cause: RecognitionError::new(RecognitionErrorKind::InputMismatch, "expected ID")
                .with_offending_token(token.clone()),
            token,
            dfa: Dfa::new(4, 1),
            alts: [1, 2].into_iter().collect(),
            configs: [AtnConfig::new(20, 1), AtnConfig::new(21, 2), AtnConfig::new(22, 3)]
                .into_iter()
                .collect(),
        }
    }

    pub(crate) fn syntax_error(&self) -> SyntaxErrorEvent<'_> {
        SyntaxErrorEvent {
            offending_symbol: Some(&self.token),
            line: 3,
            column: 7,
            message: "mismatched input",
            cause: Some(&self.cause),
        }
    }

    pub(crate) fn ambiguity(&self, exact: bool) -> AmbiguityEvent<'_> {
        AmbiguityEvent {
            dfa: &self.dfa,
            start_index: 0,
            stop_index: 2,
            exact,
            ambiguous_alts: &self.alts,
            configs: &self.configs,
        }
    }

    pub(crate) fn full_context(&self) -> FullContextEvent<'_> {
        FullContextEvent {
            dfa: &self.dfa,
            start_index: 1,
            stop_index: 3,
            conflicting_alts: &self.alts,
            configs: &self.configs,
        }
    }

    pub(crate) fn context_sensitivity(&self) -> ContextSensitivityEvent<'_> {
        ContextSensitivityEvent {
            dfa: &self.dfa,
            start_index: 2,
            stop_index: 4,
            prediction: 2,
            configs: &self.configs,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Kind {
    Syntax,
    Ambiguity,
    FullContext,
    ContextSensitivity,
}

/// One observed call: which recorder, which operation, and the addresses of
/// the recognizer and event it was handed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Call {
    pub(crate) recorder: &'static str,
    pub(crate) kind: Kind,
    pub(crate) recognizer: usize,
    pub(crate) event: usize,
}

pub(crate) type CallLog = Rc<RefCell<Vec<Call>>>;

pub(crate) fn addr_of_recognizer(recognizer: &dyn Recognizer) -> usize {
    std::ptr::from_ref(recognizer).cast::<()>() as usize
}

pub(crate) fn event_addr<T>(value: &T) -> usize {
    std::ptr::from_ref(value) as usize
}

/// Listener that appends every call to a shared log and can be told to
/// fail on one kind of event.
pub(crate) struct Recorder {
    name: &'static str,
    log: CallLog,
    fail_on: Option<Kind>,
}

impl Recorder {
    pub(crate) fn new(name: &'static str, log: &CallLog) -> Self {
        Recorder {
            name,
            log: Rc::clone(log),
            fail_on: None,
        }
    }

    pub(crate) fn failing_on(name: &'static str, log: &CallLog, kind: Kind) -> Self {
        Recorder {
            fail_on: Some(kind),
            ..Recorder::new(name, log)
        }
    }

    fn record(&self, kind: Kind, recognizer: &dyn Recognizer, event: usize) -> ListenerResult {
        self.log.borrow_mut().push(Call {
            recorder: self.name,
            kind,
            recognizer: addr_of_recognizer(recognizer),
            event,
        });
        if self.fail_on == Some(kind) {
            return Err(ListenerError::rejected(self.name, format!("{kind:?}")));
        }
        Ok(())
    }
}

impl ErrorListener for Recorder {
    fn syntax_error(
        &self,
        recognizer: &dyn Recognizer,
        event: &SyntaxErrorEvent<'_>,
    ) -> ListenerResult {
        self.record(Kind::Syntax, recognizer, event_addr(event))
    }

    fn report_ambiguity(
        &self,
        recognizer: &dyn Recognizer,
        event: &AmbiguityEvent<'_>,
    ) -> ListenerResult {
        self.record(Kind::Ambiguity, recognizer, event_addr(event))
    }

    fn report_attempting_full_context(
        &self,
        recognizer: &dyn Recognizer,
        event: &FullContextEvent<'_>,
    ) -> ListenerResult {
        self.record(Kind::FullContext, recognizer, event_addr(event))
    }

    fn report_context_sensitivity(
        &self,
        recognizer: &dyn Recognizer,
        event: &ContextSensitivityEvent<'_>,
    ) -> ListenerResult {
        self.record(Kind::ContextSensitivity, recognizer, event_addr(event))
    }
}
