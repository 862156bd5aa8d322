//! Errors raised while building or driving listeners.

use std::io;

/// A listener registry could not be built.
///
/// Only raised at construction, before any parse begins.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ConfigurationError {
    /// No delegate sequence was supplied at all.
    #[error("delegates is not provided")]
    MissingDelegates,
    /// The delegate sequence was supplied but empty.
    #[error("delegates must contain at least one listener")]
    EmptyDelegates,
}

/// A listener failed while handling an event.
///
/// Returned by listener operations and passed back to the recognizer
/// unchanged by [`ProxyListener`](crate::ProxyListener).
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    /// Writing to the listener's output failed.
    #[error("failed to write diagnostic: {0}")]
    Io(#[from] io::Error),
    /// The listener refused the event.
    #[error("{listener} rejected event: {reason}")]
    Rejected {
        listener: &'static str,
        reason: String,
    },
    /// The recognizer failed to deliver a message a listener handed back
    /// to it.
    #[error("recognizer failed to notify listeners: {0}")]
    Notify(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// Several delegates failed on the same event, in delegate order.
    #[error("{} listeners failed", .0.len())]
    Aggregate(Vec<ListenerError>),
}

impl ListenerError {
    pub fn rejected(listener: &'static str, reason: impl Into<String>) -> Self {
        ListenerError::Rejected {
            listener,
            reason: reason.into(),
        }
    }
}

/// Outcome of a single listener operation.
pub type ListenerResult = Result<(), ListenerError>;
