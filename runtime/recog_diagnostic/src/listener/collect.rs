//! Collecting Listener
//!
//! Keeps an owned record of every event, for hosts that aggregate
//! diagnostics after the parse (editors, test harnesses).

use parking_lot::Mutex;
use recog_ir::{AltSet, Recognizer};

use super::{
    AmbiguityEvent, ContextSensitivityEvent, ErrorListener, FullContextEvent, SyntaxErrorEvent,
};
use crate::ListenerResult;

/// Owned copy of one diagnostic event.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RecordedEvent {
    SyntaxError {
        /// Text of the offending token, if there was one.
        offending_text: Option<String>,
        line: u32,
        column: u32,
        message: String,
        /// Rendered cause, if there was one.
        cause: Option<String>,
    },
    Ambiguity {
        decision: usize,
        start_index: usize,
        stop_index: usize,
        exact: bool,
        alts: AltSet,
    },
    AttemptingFullContext {
        decision: usize,
        start_index: usize,
        stop_index: usize,
        alts: AltSet,
    },
    ContextSensitivity {
        decision: usize,
        start_index: usize,
        stop_index: usize,
        prediction: usize,
        /// Whether `configs` came from full-context prediction.
        full_context: bool,
    },
}

impl RecordedEvent {
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, RecordedEvent::SyntaxError { .. })
    }
}

/// Listener that records every event it receives. Never fails.
#[derive(Debug, Default)]
pub struct CollectingListener {
    events: Mutex<Vec<RecordedEvent>>,
}

impl CollectingListener {
    pub fn new() -> Self {
        CollectingListener::default()
    }

    /// Snapshot of the events recorded so far, in arrival order.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<RecordedEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Number of recorded syntax errors.
    pub fn syntax_error_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| e.is_syntax_error())
            .count()
    }

    fn record(&self, event: RecordedEvent) -> ListenerResult {
        self.events.lock().push(event);
        Ok(())
    }
}

impl ErrorListener for CollectingListener {
    fn syntax_error(
        &self,
        _recognizer: &dyn Recognizer,
        event: &SyntaxErrorEvent<'_>,
    ) -> ListenerResult {
        self.record(RecordedEvent::SyntaxError {
            offending_text: event.offending_symbol.map(|t| t.text.clone()),
            line: event.line,
            column: event.column,
            message: event.message.to_string(),
            cause: event.cause.map(ToString::to_string),
        })
    }

    fn report_ambiguity(
        &self,
        _recognizer: &dyn Recognizer,
        event: &AmbiguityEvent<'_>,
    ) -> ListenerResult {
        self.record(RecordedEvent::Ambiguity {
            decision: event.dfa.decision,
            start_index: event.start_index,
            stop_index: event.stop_index,
            exact: event.exact,
            alts: event.ambiguous_alts.clone(),
        })
    }

    fn report_attempting_full_context(
        &self,
        _recognizer: &dyn Recognizer,
        event: &FullContextEvent<'_>,
    ) -> ListenerResult {
        self.record(RecordedEvent::AttemptingFullContext {
            decision: event.dfa.decision,
            start_index: event.start_index,
            stop_index: event.stop_index,
            alts: event.conflicting_alts.clone(),
        })
    }

    fn report_context_sensitivity(
        &self,
        _recognizer: &dyn Recognizer,
        event: &ContextSensitivityEvent<'_>,
    ) -> ListenerResult {
        self.record(RecordedEvent::ContextSensitivity {
            decision: event.dfa.decision,
            start_index: event.start_index,
            stop_index: event.stop_index,
            prediction: event.prediction,
            full_context: event.configs.is_full_context(),
        })
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
