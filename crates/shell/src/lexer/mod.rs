// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tokenizer for a single `curl` invocation.
//!
//! Splits the command text into one [`Word`] per argument, honoring the
//! quoting rules of a POSIX shell. Only the first command is used; anything
//! after a separator is reported and ignored. Nothing is ever executed.

mod expansion;
mod redirect;
mod words;

use crate::error::{clip, ShellParsingError};
use crate::span::{underline, Span};
use crate::warning::{WarningCode, Warnings};
use crate::word::{Known, Token, Word};
use redirect::PendingHeredoc;
use serde::Serialize;

/// Where the command's standard input comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stdin {
    /// `< file`
    File(Word),
    /// Heredoc or here-string content.
    Text(Word),
}

/// The arguments of the curl command and what the shell feeds its stdin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    /// `argv[0]` is the command name itself.
    pub argv: Vec<Word>,
    pub stdin: Option<Stdin>,
    pub warnings: Warnings,
}

/// Tokenize a `curl ...` command line.
///
/// # Example
///
/// ```ignore
/// use curlconv_shell::tokenize;
///
/// let out = tokenize("curl -H 'Accept: */*' \"$URL\"")?;
/// assert_eq!(out.argv.len(), 4);
/// assert!(!out.argv[3].is_literal());
/// # Ok::<(), curlconv_shell::ShellParsingError>(())
/// ```
pub fn tokenize(input: &str) -> Result<Tokenized, ShellParsingError> {
    Lexer::new(input).tokenize()
}

/// Single-pass shell lexer over the raw command text.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    warnings: Warnings,
    stdin: Option<Stdin>,
    pending_heredoc: Option<PendingHeredoc>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            warnings: Warnings::new(),
            stdin: None,
            pending_heredoc: None,
        }
    }

    pub fn tokenize(mut self) -> Result<Tokenized, ShellParsingError> {
        let mut argv: Vec<Word> = Vec::new();
        let mut first_span = Span::empty(0);

        loop {
            self.skip_blanks();
            let Some(c) = self.peek() else { break };

            if self.at_redirect() {
                self.redirect()?;
                continue;
            }
            match c {
                '#' => self.skip_comment(),
                '\n' | ';' | '&' | '|' if argv.is_empty() && self.pending_heredoc.is_none() => {
                    self.bump();
                }
                '\n' => break,
                ';' | '&' | '|' => {
                    self.skip_operator();
                    break;
                }
                _ => {
                    let start = self.pos;
                    let word = self.read_word()?;
                    let span = Span::new(start, self.pos);
                    if argv.is_empty() && is_assignment(&word) {
                        self.warn_at(
                            WarningCode::CommandPreamble,
                            "ignoring variable assignment before the curl command",
                            span,
                        );
                        continue;
                    }
                    if argv.is_empty() {
                        first_span = span;
                    }
                    argv.push(word);
                }
            }
        }
        self.finish_command()?;

        let Some(name) = argv.first() else {
            return Err(ShellParsingError::NoArguments);
        };
        if !is_curl(name) {
            return Err(ShellParsingError::NotCurl {
                found: clip(&name.to_string(), 30),
                span: first_span,
            });
        }

        tracing::debug!(
            args = argv.len(),
            stdin = self.stdin.is_some(),
            warnings = self.warnings.len(),
            "tokenized curl command"
        );
        Ok(Tokenized {
            argv,
            stdin: self.stdin,
            warnings: self.warnings,
        })
    }

    // -----------------------------------------------------------------------
    // Cursor
    // -----------------------------------------------------------------------

    #[inline]
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    #[inline]
    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Byte offset of the end of the line containing `pos`.
    fn line_end(&self, pos: usize) -> usize {
        self.input[pos..]
            .find('\n')
            .map(|i| pos + i)
            .unwrap_or(self.input.len())
    }

    fn warn_at(&mut self, code: WarningCode, message: &str, span: Span) {
        let excerpt = underline(self.input, span);
        self.warnings.push(code, format!("{message}:\n{excerpt}"));
    }

    // -----------------------------------------------------------------------
    // Blanks, comments, separators
    // -----------------------------------------------------------------------

    /// Skip spaces, tabs and line continuations between words.
    fn skip_blanks(&mut self) {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\r') => self.bump(),
                Some('\\') => {
                    let after = &self.input[self.pos + 1..];
                    if after.starts_with('\n') {
                        self.pos += 2;
                    } else if after.starts_with("\r\n") {
                        self.pos += 3;
                    } else if after.is_empty() {
                        self.pos += 1;
                    } else if let Some(len) = blank_to_newline(after) {
                        // `\ ` at the end of a line was meant as a continuation
                        let span = Span::new(self.pos, self.pos + 1);
                        self.warn_at(
                            WarningCode::UnescapedNewline,
                            "backslash is followed by whitespace instead of a newline",
                            span,
                        );
                        self.pos += 1 + len;
                    } else {
                        return;
                    }
                }
                _ => return,
            }
        }
    }

    fn skip_comment(&mut self) {
        self.pos = self.line_end(self.pos);
    }

    fn skip_operator(&mut self) {
        let op_len = ["&&", "||", "|&", ";;"]
            .iter()
            .find(|op| self.rest().starts_with(*op))
            .map(|op| op.len())
            .unwrap_or(1);
        self.pos += op_len;
    }

    /// Collect a pending heredoc body and report any commands left over.
    fn finish_command(&mut self) -> Result<(), ShellParsingError> {
        let mut leftovers = Vec::new();
        if let Some(heredoc) = self.pending_heredoc.take() {
            let line_end = self.line_end(self.pos);
            leftovers.push(Span::new(self.pos, line_end));
            if line_end == self.input.len() {
                return Err(ShellParsingError::UnterminatedHeredoc {
                    delimiter: heredoc.delimiter,
                    span: heredoc.span,
                });
            }
            self.pos = line_end + 1;
            let body = self.heredoc_body(&heredoc)?;
            self.set_stdin(Stdin::Text(body), heredoc.span);
        }
        leftovers.push(Span::new(self.pos, self.input.len()));

        let extra = leftovers
            .into_iter()
            .find_map(|span| first_code_line(self.input, span));
        if let Some(span) = extra {
            self.warn_at(
                WarningCode::ExtraCommands,
                "only the first command is converted, ignoring",
                span,
            );
        }
        Ok(())
    }
}

/// `NAME=value` as the first word of a command.
fn is_assignment(word: &Word) -> bool {
    let Some(Token::Literal(first)) = word.tokens().first() else {
        return false;
    };
    let Some((name, _)) = first.split_once('=') else {
        return false;
    };
    is_valid_variable_name(name)
}

/// Variable names start with `[a-zA-Z_]` and contain only `[a-zA-Z0-9_]`.
pub(crate) fn is_valid_variable_name(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

fn is_curl(name: &Word) -> bool {
    match name.known() {
        Known::Literal(s) => s.trim() == "curl",
        Known::Dynamic(Token::EnvVar { name: var, .. }) => {
            name.tokens().len() == 1 && var == "curl"
        }
        Known::Dynamic(_) => false,
    }
}

/// Length of `s` up to and including its first newline, if everything
/// before that newline is whitespace (and there is at least one space).
fn blank_to_newline(s: &str) -> Option<usize> {
    let newline = s.find('\n')?;
    let line = &s[..newline];
    let blank = !line.is_empty() && line.chars().all(|c| c == ' ' || c == '\t' || c == '\r');
    blank.then_some(newline + 1)
}

/// Span of the first line inside `span` holding something other than
/// whitespace, separators or a comment.
fn first_code_line(input: &str, span: Span) -> Option<Span> {
    let mut offset = span.start;
    for line in span.slice(input).split_inclusive('\n') {
        let content = line.trim_end();
        let trimmed = content.trim_start_matches(|c: char| c.is_whitespace() || c == ';');
        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            let start = offset + (content.len() - trimmed.len());
            return Some(Span::new(start, offset + content.len()));
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
#[path = "../lexer_tests/mod.rs"]
mod tests;
