//! The producer side of diagnostic reporting.

/// A parser or lexer that raises diagnostic events.
///
/// Listeners receive a `&dyn Recognizer` with every event. Most ignore it;
/// the ones that describe decisions use it to look up rule names and the
/// input text covered by an index range.
pub trait Recognizer {
    /// Name of the grammar file the recognizer was generated from.
    fn grammar_file_name(&self) -> &str;

    /// Rule names indexed by rule index.
    fn rule_names(&self) -> &[String];

    /// Source text of the tokens in `[start, stop]`.
    fn input_text(&self, start: usize, stop: usize) -> String;

    /// Report `message` as a syntax error at the current token through the
    /// recognizer's own listeners.
    ///
    /// Errors are those of the listener chain and use its error type, so
    /// they are boxed here to keep this crate free of listener types.
    fn notify_error_listeners(
        &self,
        message: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
