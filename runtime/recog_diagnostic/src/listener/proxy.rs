//! Fan-out listener.
//!
//! [`ProxyListener`] forwards every event to an ordered, fixed sequence of
//! borrowed delegates.
//!
//! ## Rules
//! - **Order**: delegates see each event in registration order.
//! - **No dedup**: a delegate registered twice sees each event twice.
//! - **Pass-through**: delegates receive the same recognizer and event
//!   references the proxy received.
//! - **Failures**: governed by [`FailurePolicy`]; never swallowed.

use std::fmt;

use recog_ir::Recognizer;
use tracing::trace;

use super::{
    AmbiguityEvent, ContextSensitivityEvent, ErrorListener, FullContextEvent, SyntaxErrorEvent,
};
use crate::{ConfigurationError, ListenerError, ListenerResult};

/// What the proxy does when a delegate fails on an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FailurePolicy {
    /// Stop at the first failing delegate and return its error unchanged.
    /// Later delegates do not see the event.
    #[default]
    FailFast,
    /// Deliver the event to every delegate, then report the failures.
    ///
    /// One failure is returned unchanged; several are returned as
    /// [`ListenerError::Aggregate`] in delegate order.
    CollectAll,
}

/// Configuration for a [`ProxyListener`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ProxyConfig {
    pub failure_policy: FailurePolicy,
}

/// Listener that forwards every event to each of its delegates in order.
///
/// # Example
///
/// ```text
/// let console = ConsoleListener::stderr();
/// let collected = CollectingListener::new();
/// let proxy = ProxyListener::new(vec![&console, &collected])?;
/// parser.set_error_listener(&proxy);
/// ```
pub struct ProxyListener<'a> {
    delegates: Box<[&'a dyn ErrorListener]>,
    config: ProxyConfig,
}

impl<'a> ProxyListener<'a> {
    /// Build a proxy over `delegates` with the default configuration.
    ///
    /// Fails if `delegates` is empty.
    pub fn new(delegates: Vec<&'a dyn ErrorListener>) -> Result<Self, ConfigurationError> {
        Self::with_config(delegates, ProxyConfig::default())
    }

    /// Build a proxy from a delegate sequence the host may not have set.
    ///
    /// Fails if `delegates` is `None` or empty.
    pub fn from_optional(
        delegates: Option<Vec<&'a dyn ErrorListener>>,
    ) -> Result<Self, ConfigurationError> {
        Self::new(delegates.ok_or(ConfigurationError::MissingDelegates)?)
    }

    /// Build a proxy over `delegates` with an explicit failure policy.
    ///
    /// Fails if `delegates` is empty.
    pub fn with_config(
        delegates: Vec<&'a dyn ErrorListener>,
        config: ProxyConfig,
    ) -> Result<Self, ConfigurationError> {
        if delegates.is_empty() {
            return Err(ConfigurationError::EmptyDelegates);
        }
        Ok(ProxyListener {
            delegates: delegates.into_boxed_slice(),
            config,
        })
    }

    /// Invoke `forward` on each delegate according to the failure policy.
    fn forward<F>(&self, mut forward: F) -> ListenerResult
    where
        F: FnMut(&dyn ErrorListener) -> ListenerResult,
    {
        match self.config.failure_policy {
            FailurePolicy::FailFast => self.delegates.iter().try_for_each(|d| forward(*d)),
            FailurePolicy::CollectAll => {
                let mut failures: Vec<ListenerError> = self
                    .delegates
                    .iter()
                    .filter_map(|d| forward(*d).err())
                    .collect();
                match failures.len() {
                    0 => Ok(()),
                    1 => Err(failures.remove(0)),
                    _ => Err(ListenerError::Aggregate(failures)),
                }
            }
        }
    }
}

impl fmt::Debug for ProxyListener<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyListener")
            .field("delegates", &self.delegates.len())
            .field("config", &self.config)
            .finish()
    }
}

impl ErrorListener for ProxyListener<'_> {
    fn syntax_error(
        &self,
        recognizer: &dyn Recognizer,
        event: &SyntaxErrorEvent<'_>,
    ) -> ListenerResult {
        trace!(
            delegates = self.delegates.len(),
            line = event.line,
            column = event.column,
            "forwarding syntax error"
        );
        self.forward(|d| d.syntax_error(recognizer, event))
    }

    fn report_ambiguity(
        &self,
        recognizer: &dyn Recognizer,
        event: &AmbiguityEvent<'_>,
    ) -> ListenerResult {
        trace!(
            delegates = self.delegates.len(),
            decision = event.dfa.decision,
            exact = event.exact,
            "forwarding ambiguity"
        );
        self.forward(|d| d.report_ambiguity(recognizer, event))
    }

    fn report_attempting_full_context(
        &self,
        recognizer: &dyn Recognizer,
        event: &FullContextEvent<'_>,
    ) -> ListenerResult {
        trace!(
            delegates = self.delegates.len(),
            decision = event.dfa.decision,
            "forwarding full-context attempt"
        );
        self.forward(|d| d.report_attempting_full_context(recognizer, event))
    }

    fn report_context_sensitivity(
        &self,
        recognizer: &dyn Recognizer,
        event: &ContextSensitivityEvent<'_>,
    ) -> ListenerResult {
        trace!(
            delegates = self.delegates.len(),
            decision = event.dfa.decision,
            prediction = event.prediction,
            "forwarding context sensitivity"
        );
        self.forward(|d| d.report_context_sensitivity(recognizer, event))
    }
}
