//! Recog IR - Recognizer Payload Types
//!
//! This crate contains the data a recognizer hands to its error listeners:
//! - Tokens for offending symbols
//! - Decision tables (`Dfa`) identifying a prediction point
//! - Alternative bitsets (`AltSet`) for ambiguity and conflict reports
//! - Prediction configuration sets (`ConfigSet`)
//! - `RecognitionError` describing why a match failed
//! - The `Recognizer` trait listeners use to query the producer
//!
//! Listeners treat all of these as opaque: they are passed through by
//! reference and never mutated.

mod alt_set;
mod config_set;
mod dfa;
mod error;
mod recognizer;
mod token;

pub use alt_set::AltSet;
pub use config_set::{AtnConfig, ConfigSet};
pub use dfa::Dfa;
pub use error::{RecognitionError, RecognitionErrorKind};
pub use recognizer::Recognizer;
pub use token::Token;
