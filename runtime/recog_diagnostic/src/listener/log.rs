//! Listener forwarding events to `tracing`.

use recog_ir::Recognizer;
use tracing::{debug, trace, warn};

use super::{
    AmbiguityEvent, ContextSensitivityEvent, ErrorListener, FullContextEvent, SyntaxErrorEvent,
};
use crate::ListenerResult;

/// Logs every event: syntax errors at `warn`, ambiguities at `debug`,
/// prediction fallbacks at `trace`. Never fails.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TracingListener;

impl ErrorListener for TracingListener {
    fn syntax_error(
        &self,
        recognizer: &dyn Recognizer,
        event: &SyntaxErrorEvent<'_>,
    ) -> ListenerResult {
        warn!(
            grammar = recognizer.grammar_file_name(),
            line = event.line,
            column = event.column,
            cause = event.cause.map(tracing::field::display),
            "{}",
            event.message
        );
        Ok(())
    }

    fn report_ambiguity(
        &self,
        recognizer: &dyn Recognizer,
        event: &AmbiguityEvent<'_>,
    ) -> ListenerResult {
        debug!(
            grammar = recognizer.grammar_file_name(),
            decision = event.dfa.decision,
            start = event.start_index,
            stop = event.stop_index,
            exact = event.exact,
            alts = %event.ambiguous_alts,
            "ambiguity"
        );
        Ok(())
    }

    fn report_attempting_full_context(
        &self,
        recognizer: &dyn Recognizer,
        event: &FullContextEvent<'_>,
    ) -> ListenerResult {
        trace!(
            grammar = recognizer.grammar_file_name(),
            decision = event.dfa.decision,
            start = event.start_index,
            stop = event.stop_index,
            alts = %event.conflicting_alts,
            "attempting full context"
        );
        Ok(())
    }

    fn report_context_sensitivity(
        &self,
        recognizer: &dyn Recognizer,
        event: &ContextSensitivityEvent<'_>,
    ) -> ListenerResult {
        trace!(
            grammar = recognizer.grammar_file_name(),
            decision = event.dfa.decision,
            start = event.start_index,
            stop = event.stop_index,
            prediction = event.prediction,
            full_context = event.configs.is_full_context(),
            "context sensitivity"
        );
        Ok(())
    }
}
