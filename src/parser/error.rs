//! Syntax diagnostics.
//!
//! A [`ParseError`] carries enough context to render the offending source line
//! with a caret under the failing column:
//!
//! ```text
//! ParseError (line 3, column 12): Expected ':', got token '"cmd"' (type: STRING)
//!       command "cmd"
//!               ^
//! ```

use std::fmt;

use unicode_width::UnicodeWidthChar;

use super::token::Token;

/// Kind name reported for characters the lexer could not turn into a token.
pub const ERROR_TOKEN: &str = "ERRORTOKEN";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Malformed token (unterminated string, stray character, bad indentation)
    Lexical,
    /// The parser expected a different token
    UnexpectedToken,
    /// A completed entry body never supplied its text
    MissingText,
    /// A retry count that is not a non-negative integer
    InvalidRetry,
}

/// Where an error happened, plus the echoed source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLocation {
    /// 1-based line number
    pub line: usize,
    /// 0-based character column
    pub column: usize,
    pub token_text: String,
    pub token_kind: &'static str,
    pub source_line: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub location: Option<ErrorLocation>,
}

impl ParseError {
    /// Error positioned at `token`, echoing the matching line of `source`.
    pub fn at_token(
        kind: ParseErrorKind,
        message: impl Into<String>,
        token: &Token,
        source: &str,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            location: Some(ErrorLocation {
                line: token.line,
                column: token.column,
                token_text: token.text.clone(),
                token_kind: token.kind.as_str(),
                source_line: source_line(source, token.line),
            }),
        }
    }

    /// Lexical error at a raw position.
    pub fn lexical(
        message: impl Into<String>,
        line: usize,
        column: usize,
        text: impl Into<String>,
        source: &str,
    ) -> Self {
        Self {
            kind: ParseErrorKind::Lexical,
            message: message.into(),
            location: Some(ErrorLocation {
                line,
                column,
                token_text: text.into(),
                token_kind: ERROR_TOKEN,
                source_line: source_line(source, line),
            }),
        }
    }

    pub fn line(&self) -> Option<usize> {
        self.location.as_ref().map(|l| l.line)
    }

    pub fn column(&self) -> Option<usize> {
        self.location.as_ref().map(|l| l.column)
    }

    pub fn token_kind(&self) -> Option<&'static str> {
        self.location.as_ref().map(|l| l.token_kind)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(loc) = &self.location else {
            return write!(f, "ParseError: {}", self.message);
        };

        let line_len = loc.source_line.chars().count();
        let column = loc.column.min(line_len);

        writeln!(
            f,
            "ParseError (line {}, column {}): {}, got token {} (type: {})",
            loc.line,
            column,
            self.message,
            quote_token(&loc.token_text),
            loc.token_kind
        )?;
        writeln!(f, "  {}", loc.source_line)?;
        write!(f, "  {}^", caret_padding(&loc.source_line, column))
    }
}

impl std::error::Error for ParseError {}

fn source_line(source: &str, line: usize) -> String {
    line.checked_sub(1)
        .and_then(|idx| source.lines().nth(idx))
        .unwrap_or("")
        .to_string()
}

/// Quote a token's text the way a terminal user expects to read it back.
fn quote_token(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Whitespace that lines the caret up under `column`, keeping tabs as tabs
/// and padding wide characters by their display width.
fn caret_padding(line: &str, column: usize) -> String {
    line.chars()
        .take(column)
        .map(|c| match c {
            '\t' => "\t".to_string(),
            c => " ".repeat(c.width().unwrap_or(0)),
        })
        .collect()
}
