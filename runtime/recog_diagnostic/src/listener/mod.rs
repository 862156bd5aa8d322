//! Error Listeners
//!
//! The recognizer reports four kinds of diagnostic event to a single
//! [`ErrorListener`]:
//! - Syntax errors
//! - Exact or inexact ambiguities at a decision
//! - Fallback from SLL to full-context prediction
//! - Decisions whose outcome depends on full context
//!
//! Every operation has a no-op default, so a listener overrides only the
//! events it cares about. [`ProxyListener`] fans one event out to many
//! listeners.
//!
//! ```text
//! recognizer ── syntax_error(..) ──► ProxyListener ──► d1.syntax_error(..)
//!                                                 ├──► d2.syntax_error(..)
//!                                                 └──► dn.syntax_error(..)
//! ```

mod collect;
mod console;
mod diagnostic;
mod log;
mod proxy;

pub use collect::{CollectingListener, RecordedEvent};
pub use console::{format_syntax_error, ConsoleListener};
pub use diagnostic::DiagnosticListener;
pub use log::TracingListener;
pub use proxy::{FailurePolicy, ProxyConfig, ProxyListener};

use recog_ir::{AltSet, ConfigSet, Dfa, RecognitionError, Recognizer, Token};

use crate::ListenerResult;

/// A syntax error detected by the recognizer.
#[derive(Copy, Clone, Debug)]
pub struct SyntaxErrorEvent<'a> {
    /// Token the error was detected at, if the recognizer has one.
    pub offending_symbol: Option<&'a Token>,
    pub line: u32,
    pub column: u32,
    pub message: &'a str,
    /// Recognition failure behind the error. `None` when the recognizer
    /// recovered inline (e.g. single-token insertion).
    pub cause: Option<&'a RecognitionError>,
}

/// More than one alternative matched `[start_index, stop_index]`.
#[derive(Copy, Clone, Debug)]
pub struct AmbiguityEvent<'a> {
    pub dfa: &'a Dfa,
    pub start_index: usize,
    pub stop_index: usize,
    /// `true` when the ambiguity was confirmed by exact full-context
    /// prediction rather than merely not ruled out.
    pub exact: bool,
    pub ambiguous_alts: &'a AltSet,
    pub configs: &'a ConfigSet,
}

/// SLL prediction conflicted and the engine is retrying with full context.
#[derive(Copy, Clone, Debug)]
pub struct FullContextEvent<'a> {
    pub dfa: &'a Dfa,
    pub start_index: usize,
    pub stop_index: usize,
    pub conflicting_alts: &'a AltSet,
    pub configs: &'a ConfigSet,
}

/// Full-context prediction resolved an SLL conflict to a single alternative.
#[derive(Copy, Clone, Debug)]
pub struct ContextSensitivityEvent<'a> {
    pub dfa: &'a Dfa,
    pub start_index: usize,
    pub stop_index: usize,
    pub prediction: usize,
    pub configs: &'a ConfigSet,
}

/// Receiver of diagnostic events from a recognizer.
///
/// Calls are synchronous on the recognizer's thread and independent of each
/// other. No `Send`/`Sync` bound is imposed: a listener shared between
/// threads is responsible for its own synchronization.
pub trait ErrorListener {
    fn syntax_error(
        &self,
        _recognizer: &dyn Recognizer,
        _event: &SyntaxErrorEvent<'_>,
    ) -> ListenerResult {
        Ok(())
    }

    fn report_ambiguity(
        &self,
        _recognizer: &dyn Recognizer,
        _event: &AmbiguityEvent<'_>,
    ) -> ListenerResult {
        Ok(())
    }

    fn report_attempting_full_context(
        &self,
        _recognizer: &dyn Recognizer,
        _event: &FullContextEvent<'_>,
    ) -> ListenerResult {
        Ok(())
    }

    fn report_context_sensitivity(
        &self,
        _recognizer: &dyn Recognizer,
        _event: &ContextSensitivityEvent<'_>,
    ) -> ListenerResult {
        Ok(())
    }
}

/// Listener that ignores every event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NullListener;

impl ErrorListener for NullListener {}

#[cfg(test)]
pub(crate) mod test_support;
