//! Tokens as seen by error listeners.

use std::fmt;

/// A token produced by the lexer.
///
/// `line` is 1-based; `column` is the 0-based character position in line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub token_type: i32,
    pub text: String,
    pub line: u32,
    pub column: u32,
    pub token_index: usize,
}

impl Token {
    pub fn new(
        token_type: i32,
        text: impl Into<String>,
        line: u32,
        column: u32,
        token_index: usize,
    ) -> Self {
        Token {
            token_type,
            text: text.into(),
            line,
            column,
            token_index,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[@{},'", self.token_index)?;
        for c in self.text.chars() {
            match c {
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c => write!(f, "{c}")?,
            }
        }
        write!(f, "',<{}>,{}:{}]", self.token_type, self.line, self.column)
    }
}

#[cfg(test)]
mod tests;
