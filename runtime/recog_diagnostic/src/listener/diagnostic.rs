//! Diagnostic Listener
//!
//! Turns prediction reports into human-readable messages and hands them back
//! to the recognizer, which delivers them to its listeners as syntax errors.
//! Useful while developing a grammar to spot ambiguous decisions.

use recog_ir::{AltSet, ConfigSet, Dfa, Recognizer};

use super::{AmbiguityEvent, ContextSensitivityEvent, ErrorListener, FullContextEvent};
use crate::{ListenerError, ListenerResult};

/// Listener reporting ambiguities, full-context attempts and context
/// sensitivities through [`Recognizer::notify_error_listeners`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticListener {
    exact_only: bool,
}

impl Default for DiagnosticListener {
    fn default() -> Self {
        DiagnosticListener { exact_only: true }
    }
}

impl DiagnosticListener {
    /// `exact_only` limits ambiguity reports to those confirmed by exact
    /// prediction.
    pub fn new(exact_only: bool) -> Self {
        DiagnosticListener { exact_only }
    }

    pub fn exact_only(&self) -> bool {
        self.exact_only
    }
}

/// `"{decision} ({rule})"`, or just the decision number when the rule has
/// no name.
fn decision_description(recognizer: &dyn Recognizer, dfa: &Dfa) -> String {
    match recognizer.rule_names().get(dfa.rule_index) {
        Some(rule) if !rule.is_empty() => format!("{} ({rule})", dfa.decision),
        _ => dfa.decision.to_string(),
    }
}

/// The reported alternatives, or every alternative in `configs` when none
/// were reported.
fn conflicting_alts(reported: &AltSet, configs: &ConfigSet) -> AltSet {
    if reported.is_empty() {
        configs.alts()
    } else {
        reported.clone()
    }
}

fn notify(recognizer: &dyn Recognizer, message: &str) -> ListenerResult {
    recognizer
        .notify_error_listeners(message)
        .map_err(ListenerError::Notify)
}

impl ErrorListener for DiagnosticListener {
    fn report_ambiguity(
        &self,
        recognizer: &dyn Recognizer,
        event: &AmbiguityEvent<'_>,
    ) -> ListenerResult {
        if self.exact_only && !event.exact {
            return Ok(());
        }
        let message = format!(
            "reportAmbiguity d={}: ambigAlts={}, input='{}'",
            decision_description(recognizer, event.dfa),
            conflicting_alts(event.ambiguous_alts, event.configs),
            recognizer.input_text(event.start_index, event.stop_index),
        );
        notify(recognizer, &message)
    }

    fn report_attempting_full_context(
        &self,
        recognizer: &dyn Recognizer,
        event: &FullContextEvent<'_>,
    ) -> ListenerResult {
        let message = format!(
            "reportAttemptingFullContext d={}, input='{}'",
            decision_description(recognizer, event.dfa),
            recognizer.input_text(event.start_index, event.stop_index),
        );
        notify(recognizer, &message)
    }

    fn report_context_sensitivity(
        &self,
        recognizer: &dyn Recognizer,
        event: &ContextSensitivityEvent<'_>,
    ) -> ListenerResult {
        let message = format!(
            "reportContextSensitivity d={}, input='{}'",
            decision_description(recognizer, event.dfa),
            recognizer.input_text(event.start_index, event.stop_index),
        );
        notify(recognizer, &message)
    }
}
