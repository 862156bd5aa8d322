//! Recognition failures attached to syntax errors.

use std::fmt;

use crate::Token;

/// Why the recognizer could not match its input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RecognitionErrorKind {
    /// The current token does not match what the rule expects.
    InputMismatch,
    /// No alternative of a decision can match the remaining input.
    NoViableAlt,
    /// A semantic predicate evaluated to false.
    FailedPredicate,
    /// The lexer could not match any token at the current position.
    LexerNoViableAlt,
}

impl RecognitionErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RecognitionErrorKind::InputMismatch => "input mismatch",
            RecognitionErrorKind::NoViableAlt => "no viable alternative",
            RecognitionErrorKind::FailedPredicate => "failed predicate",
            RecognitionErrorKind::LexerNoViableAlt => "lexer no viable alternative",
        }
    }
}

/// The condition that caused a syntax error report.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecognitionError {
    pub kind: RecognitionErrorKind,
    pub message: String,
    pub offending_token: Option<Token>,
}

impl RecognitionError {
    pub fn new(kind: RecognitionErrorKind, message: impl Into<String>) -> Self {
        RecognitionError {
            kind,
            message: message.into(),
            offending_token: None,
        }
    }

    #[must_use]
    pub fn with_offending_token(mut self, token: Token) -> Self {
        self.offending_token = Some(token);
        self
    }
}

impl fmt::Display for RecognitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(self.kind.as_str())
        } else {
            write!(f, "{}: {}", self.kind.as_str(), self.message)
        }
    }
}

impl std::error::Error for RecognitionError {}
