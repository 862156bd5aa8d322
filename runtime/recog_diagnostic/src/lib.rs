//! Diagnostic listeners for the recognizer runtime.
//!
//! The recognizer reports syntax errors and prediction diagnostics to one
//! [`ErrorListener`] without knowing how they are displayed, logged, or
//! aggregated. This crate provides:
//! - The [`ErrorListener`] capability with no-op defaults
//! - [`NullListener`] for when nothing should observe diagnostics
//! - [`ConsoleListener`] printing `line L:C message` to stderr
//! - [`DiagnosticListener`] describing ambiguous decisions
//! - [`TracingListener`] and [`CollectingListener`] for logging and
//!   aggregation
//! - [`ProxyListener`] fanning every event out to several listeners
//!
//! # Building a listener chain
//!
//! ```text
//! let console = ConsoleListener::stderr();
//! let collected = CollectingListener::new();
//! let listeners = ProxyListener::new(vec![&console, &collected])?;
//! // the recognizer now reports through `listeners`
//! ```
//!
//! Construction is the only place a [`ConfigurationError`] can occur;
//! listener failures during a parse are [`ListenerError`]s returned to the
//! recognizer.

mod error;
pub mod listener;

use std::sync::Once;

pub use error::{ConfigurationError, ListenerError, ListenerResult};
pub use listener::{
    format_syntax_error, AmbiguityEvent, CollectingListener, ConsoleListener,
    ContextSensitivityEvent, DiagnosticListener, ErrorListener, FailurePolicy, FullContextEvent,
    NullListener, ProxyConfig, ProxyListener, RecordedEvent, SyntaxErrorEvent, TracingListener,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for listener debug output.
///
/// Safe to call multiple times. Enable with
/// `RUST_LOG=recog_diagnostic=debug` or `RUST_LOG=recog_diagnostic=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A host may already have installed a global subscriber.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
