//! Indentation-aware lexer.
//!
//! Turns source text into a flat token stream. Block structure is encoded with
//! synthetic INDENT/DEDENT tokens computed from leading whitespace, against a
//! stack of open indentation levels. Blank and comment-only lines are skipped
//! without touching the stack.

use super::error::ParseError;
use super::token::{Token, TokenKind};

const TAB_SIZE: usize = 8;

/// Tokenize `source`. The stream always ends with a single END token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    Lexer::new(source).run()
}

struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    indents: Vec<usize>,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            indents: vec![0],
        }
    }

    fn run(mut self) -> Result<Vec<Token>, ParseError> {
        let pieces: Vec<&str> = self.source.split('\n').collect();
        let last = pieces.len() - 1;

        for (idx, raw) in pieces.iter().enumerate() {
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            let terminated = idx < last;
            self.lex_line(idx + 1, line, terminated)?;
        }

        let eof_line = if pieces[last].is_empty() {
            pieces.len()
        } else {
            pieces.len() + 1
        };
        while self.indents.len() > 1 {
            self.indents.pop();
            self.push(TokenKind::Dedent, "", eof_line, 0);
        }
        self.push(TokenKind::End, "", eof_line, 0);

        Ok(self.tokens)
    }

    fn push(&mut self, kind: TokenKind, text: impl Into<String>, line: usize, column: usize) {
        self.tokens.push(Token::new(kind, text, line, column));
    }

    fn lex_line(&mut self, line_no: usize, line: &str, terminated: bool) -> Result<(), ParseError> {
        let chars: Vec<char> = line.chars().collect();

        let mut width = 0;
        let mut pos = 0;
        while let Some(&c) = chars.get(pos) {
            match c {
                ' ' => width += 1,
                '\t' => width = (width / TAB_SIZE + 1) * TAB_SIZE,
                '\x0c' => width = 0,
                _ => break,
            }
            pos += 1;
        }

        if matches!(chars.get(pos), None | Some(&'#')) {
            return Ok(());
        }

        self.track_indentation(line_no, &chars, pos, width)?;
        self.lex_tokens(line_no, &chars, pos)?;

        let newline = if terminated { "\n" } else { "" };
        self.push(TokenKind::Newline, newline, line_no, chars.len());
        Ok(())
    }

    fn track_indentation(
        &mut self,
        line_no: usize,
        chars: &[char],
        pos: usize,
        width: usize,
    ) -> Result<(), ParseError> {
        let current = *self.indents.last().unwrap_or(&0);

        if width > current {
            self.indents.push(width);
            let text: String = chars[..pos].iter().collect();
            self.push(TokenKind::Indent, text, line_no, 0);
            return Ok(());
        }

        while width < *self.indents.last().unwrap_or(&0) {
            self.indents.pop();
            self.push(TokenKind::Dedent, "", line_no, pos);
        }

        if width != *self.indents.last().unwrap_or(&0) {
            return Err(ParseError::lexical(
                "unindent does not match any outer indentation level",
                line_no,
                pos,
                "",
                self.source,
            ));
        }
        Ok(())
    }

    fn lex_tokens(&mut self, line_no: usize, chars: &[char], start: usize) -> Result<(), ParseError> {
        let mut pos = start;

        while let Some(&c) = chars.get(pos) {
            match c {
                ' ' | '\t' | '\x0c' => pos += 1,
                '#' => break,
                ':' => {
                    self.push(TokenKind::Colon, ":", line_no, pos);
                    pos += 1;
                }
                ',' => {
                    self.push(TokenKind::Comma, ",", line_no, pos);
                    pos += 1;
                }
                '.' => {
                    self.push(TokenKind::Period, ".", line_no, pos);
                    pos += 1;
                }
                '"' | '\'' => pos = self.lex_string(line_no, chars, pos)?,
                c if c.is_ascii_digit() => {
                    let end = scan_while(chars, pos, |c| c.is_ascii_digit());
                    let text: String = chars[pos..end].iter().collect();
                    self.push(TokenKind::Number, text, line_no, pos);
                    pos = end;
                }
                c if c.is_alphabetic() || c == '_' => {
                    let end = scan_while(chars, pos, |c| c.is_alphanumeric() || c == '_');
                    let text: String = chars[pos..end].iter().collect();
                    self.push(TokenKind::Name, text, line_no, pos);
                    pos = end;
                }
                other => {
                    return Err(ParseError::lexical(
                        format!("unexpected character {:?}", other),
                        line_no,
                        pos,
                        other.to_string(),
                        self.source,
                    ));
                }
            }
        }
        Ok(())
    }

    /// Lex a single-line string starting at `start`; returns the position after
    /// the closing delimiter.
    fn lex_string(&mut self, line_no: usize, chars: &[char], start: usize) -> Result<usize, ParseError> {
        let quote = chars[start];
        let mut pos = start + 1;

        while let Some(&c) = chars.get(pos) {
            if c == '\\' {
                pos += 2;
                continue;
            }
            if c == quote {
                let text: String = chars[start..=pos].iter().collect();
                self.push(TokenKind::String, text, line_no, start);
                return Ok(pos + 1);
            }
            pos += 1;
        }

        let text: String = chars[start..].iter().collect();
        Err(ParseError::lexical(
            "unterminated string literal",
            line_no,
            start,
            text,
            self.source,
        ))
    }
}

fn scan_while(chars: &[char], start: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut end = start;
    while chars.get(end).is_some_and(|&c| pred(c)) {
        end += 1;
    }
    end
}
