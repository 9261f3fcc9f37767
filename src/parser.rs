//! Parser for llmake source documents
//!
//! A document is a sequence of entries. Each entry names its dependencies on
//! the header line and carries an indented body:
//!
//! ```text
//! city: landscape, notes.md
//!     "Describe a city in the landscape"
//!     command: "ollama run llama3 < {name}.prompt > {name}.txt"
//!     validator: "grep -q city {name}.txt" retry 3
//! ```
//!
//! The body either starts with the prompt text (ordered form) or lists every
//! field as `key: "value"`, in which case `text` is mandatory (keyed form).

mod error;
mod lexer;
mod token;

pub use error::{ErrorLocation, ParseError, ParseErrorKind, ERROR_TOKEN};
pub use lexer::tokenize;
pub use token::{Token, TokenKind};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::domain::entities::{Dependency, Entry, Properties, SourcePosition};

/// Parse `source` into entries, in declaration order.
///
/// Purely syntactic: duplicate names and dangling dependencies are left to
/// [`PromptSet::from_entries`](crate::domain::entities::PromptSet::from_entries)
/// and the dependency validator.
pub fn parse_entries(source: &str) -> Result<Vec<Entry>, ParseError> {
    let tokens = tokenize(source)?;
    let entries = Parser::new(source, tokens).parse_document()?;
    debug!(count = entries.len(), "parsed entries");
    Ok(entries)
}

/// Typed accumulator for the fields of one entry body.
#[derive(Debug, Default)]
struct Fields {
    text: Option<String>,
    properties: Properties,
    extras: IndexMap<String, Vec<String>>,
}

struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    cursor: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            cursor: 0,
        }
    }

    /// Current token. The stream ends with END, which is never consumed.
    fn peek(&self) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.cursor.min(last)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !token.is(TokenKind::End) {
            self.cursor += 1;
        }
        token
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.peek().is(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_here(format!("Expected {}", kind.describe())))
        }
    }

    fn error_here(&self, message: impl Into<String>) -> ParseError {
        ParseError::at_token(
            ParseErrorKind::UnexpectedToken,
            message,
            self.peek(),
            self.source,
        )
    }

    fn skip_newlines(&mut self) {
        while self.peek().is(TokenKind::Newline) {
            self.advance();
        }
    }

    fn parse_document(&mut self) -> Result<Vec<Entry>, ParseError> {
        let mut entries = Vec::new();
        loop {
            self.skip_newlines();
            if self.peek().is(TokenKind::End) {
                return Ok(entries);
            }
            entries.push(self.parse_entry()?);
        }
    }

    fn parse_entry(&mut self) -> Result<Entry, ParseError> {
        let name_token = self.expect(TokenKind::Name)?;
        self.expect(TokenKind::Colon)?;

        let dependencies = if self.peek().is(TokenKind::Name) {
            self.parse_dependencies()?
        } else {
            Vec::new()
        };

        self.expect(TokenKind::Newline)?;
        self.expect(TokenKind::Indent)?;
        self.skip_newlines();

        let mut fields = Fields::default();
        if self.peek().is(TokenKind::String) {
            let text = self.advance();
            fields.text = Some(unquote(&text.text));
            self.expect(TokenKind::Newline)?;
        }

        while !matches!(self.peek().kind, TokenKind::Dedent | TokenKind::End) {
            self.parse_field(&name_token.text, &mut fields)?;
            self.skip_newlines();
        }
        self.expect(TokenKind::Dedent)?;

        let Some(text) = fields.text else {
            return Err(ParseError::at_token(
                ParseErrorKind::MissingText,
                format!("Missing 'text' field in prompt '{}'", name_token.text),
                &name_token,
                self.source,
            ));
        };

        let mut entry = Entry::new(name_token.text.clone(), text)
            .with_position(SourcePosition::new(name_token.line, name_token.column));
        entry.dependencies = dependencies;
        entry.declared = fields.properties;
        entry.extras = fields.extras;
        Ok(entry)
    }

    fn parse_dependencies(&mut self) -> Result<Vec<Dependency>, ParseError> {
        let mut dependencies = vec![self.parse_reference()?];
        while self.peek().is(TokenKind::Comma) {
            self.advance();
            dependencies.push(self.parse_reference()?);
        }
        Ok(dependencies)
    }

    /// `NAME ('.' NAME)*`
    fn parse_reference(&mut self) -> Result<Dependency, ParseError> {
        let mut reference = self.expect(TokenKind::Name)?.text;
        while self.peek().is(TokenKind::Period) {
            self.advance();
            reference.push('.');
            reference.push_str(&self.expect(TokenKind::Name)?.text);
        }
        Ok(Dependency::parse(reference))
    }

    /// `NAME ':' STRING ('retry' NUMBER)? NEWLINE`
    fn parse_field(&mut self, entry: &str, fields: &mut Fields) -> Result<(), ParseError> {
        let key = self.expect(TokenKind::Name)?;
        self.expect(TokenKind::Colon)?;
        let value_token = self.expect(TokenKind::String)?;
        let value = unquote(&value_token.text);

        match key.text.as_str() {
            "text" => fields.text = Some(value),
            "command" => fields.properties.commands.push(value),
            "validator" => {
                fields.properties.validators.push(value);
                if self.peek().is(TokenKind::Name) {
                    let retry = self.parse_retry_suffix()?;
                    fields.properties.retry = fields.properties.retry.max(retry);
                }
            }
            "auto_retry" => {
                let retry = value.trim().parse::<u32>().map_err(|_| {
                    ParseError::at_token(
                        ParseErrorKind::InvalidRetry,
                        format!("auto_retry must be a non-negative integer, not {:?}", value),
                        &value_token,
                        self.source,
                    )
                })?;
                fields.properties.retry = fields.properties.retry.max(retry);
            }
            other => {
                warn!(prompt = entry, field = other, line = key.line, "unknown field");
                fields.extras.entry(other.to_string()).or_default().push(value);
            }
        }

        self.expect(TokenKind::Newline)?;
        Ok(())
    }

    fn parse_retry_suffix(&mut self) -> Result<u32, ParseError> {
        if self.peek().text != "retry" {
            return Err(self.error_here("Expected 'retry'"));
        }
        self.advance();

        let number = self.expect(TokenKind::Number)?;
        number.text.parse::<u32>().map_err(|_| {
            ParseError::at_token(
                ParseErrorKind::InvalidRetry,
                "retry count is out of range",
                &number,
                self.source,
            )
        })
    }
}

/// Strip exactly one delimiter from each side of a string token.
fn unquote(text: &str) -> String {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    chars.as_str().to_string()
}
