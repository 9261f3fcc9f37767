//! Token model shared by the lexer and the parser.

use std::fmt;

/// Kinds of tokens produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Name,
    Colon,
    Comma,
    Period,
    String,
    Number,
    Newline,
    Indent,
    Dedent,
    End,
}

impl TokenKind {
    /// Upper-case name used in diagnostics (`(type: STRING)`).
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Name => "NAME",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Period => "PERIOD",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::End => "END",
        }
    }

    /// Friendly description used in "Expected ..." messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Name => "a NAME (e.g., variable or keyword)",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::Period => "'.'",
            TokenKind::String => "a \"string\" (e.g., \"text here\")",
            TokenKind::Number => "a NUMBER (e.g., 3)",
            TokenKind::Newline => "NEWLINE (expected end of line)",
            TokenKind::Indent => "INDENT (expected indentation)",
            TokenKind::Dedent => "DEDENT (expected dedentation)",
            TokenKind::End => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A positioned token.
///
/// `line` is 1-based and `column` is a 0-based character offset into the line.
/// `text` is the raw lexeme; string tokens keep their delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
