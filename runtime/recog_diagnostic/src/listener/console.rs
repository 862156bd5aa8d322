//! Console Listener
//!
//! Writes syntax errors as `line {line}:{column} {message}`, one per line.
//! Ambiguity reports are ignored.

use std::fmt;
use std::io::{self, Stderr, Write};
use std::sync::OnceLock;

use parking_lot::Mutex;
use recog_ir::Recognizer;

use super::{ErrorListener, SyntaxErrorEvent};
use crate::ListenerResult;

/// Render a syntax error the way [`ConsoleListener`] prints it.
///
/// No trailing punctuation or newline is added to `message`.
pub fn format_syntax_error(line: u32, column: u32, message: &str) -> String {
    format!("line {line}:{column} {message}")
}

/// Listener printing syntax errors to a writer (stderr by default).
pub struct ConsoleListener<W: Write = Stderr> {
    writer: Mutex<W>,
}

impl ConsoleListener<Stderr> {
    /// Create a listener writing to the process's stderr.
    pub fn stderr() -> Self {
        ConsoleListener::new(io::stderr())
    }

    /// Process-wide stderr listener, for recognizers that install a console
    /// listener by default.
    pub fn shared() -> &'static ConsoleListener<Stderr> {
        static SHARED: OnceLock<ConsoleListener<Stderr>> = OnceLock::new();
        SHARED.get_or_init(ConsoleListener::stderr)
    }
}

impl<W: Write> ConsoleListener<W> {
    /// Create a listener writing to `writer`.
    pub fn new(writer: W) -> Self {
        ConsoleListener {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the writer, e.g. to inspect captured output.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write> fmt::Debug for ConsoleListener<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleListener").finish_non_exhaustive()
    }
}

impl<W: Write> ErrorListener for ConsoleListener<W> {
    fn syntax_error(
        &self,
        _recognizer: &dyn Recognizer,
        event: &SyntaxErrorEvent<'_>,
    ) -> ListenerResult {
        let mut writer = self.writer.lock();
        writeln!(
            writer,
            "{}",
            format_syntax_error(event.line, event.column, event.message)
        )?;
        writer.flush()?;
        Ok(())
    }
}
