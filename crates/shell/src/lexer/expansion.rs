// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `$` forms and backticks.
//!
//! Expansions are never evaluated. Each becomes an opaque [`Token`] in the
//! word, and a warning points at its source text.

use super::{is_valid_variable_name, Lexer};
use crate::error::ShellParsingError;
use crate::span::Span;
use crate::warning::WarningCode;
use crate::word::{Token, Word};

/// Quoting context a `$` appears in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Quoting {
    Unquoted,
    Double,
}

impl Lexer<'_> {
    /// Handle a `$` at the cursor, pushing onto `word`.
    pub(super) fn dollar(
        &mut self,
        word: &mut Word,
        quoting: Quoting,
    ) -> Result<(), ShellParsingError> {
        match self.peek_second() {
            Some('\'') if quoting == Quoting::Unquoted => self.ansi_c_quoted(word),
            Some('"') if quoting == Quoting::Unquoted => {
                // $"..." is a locale-translated string; translation is a no-op
                self.bump();
                self.double_quoted(word)
            }
            Some('(') => {
                let token = self.command_substitution()?;
                word.push_token(token);
                Ok(())
            }
            Some('{') => {
                let token = self.braced_variable()?;
                word.push_token(token);
                Ok(())
            }
            Some(c) if c == '_' || c.is_ascii_alphabetic() => {
                let token = self.variable();
                word.push_token(token);
                Ok(())
            }
            Some(c) if is_special_parameter(c) => {
                let token = self.special_variable(c);
                word.push_token(token);
                Ok(())
            }
            _ => {
                self.bump();
                word.push_char('$');
                Ok(())
            }
        }
    }

    /// `$NAME`
    fn variable(&mut self) -> Token {
        let start = self.pos;
        self.bump();
        let len = self
            .rest()
            .find(|c: char| c != '_' && !c.is_ascii_alphanumeric())
            .unwrap_or(self.rest().len());
        self.pos += len;
        let span = Span::new(start, self.pos);
        self.warn_at(WarningCode::Expansion, "found shell environment variable", span);
        Token::EnvVar {
            name: self.input[start + 1..self.pos].to_string(),
            text: span.slice(self.input).to_string(),
        }
    }

    /// `$?`, `$1`, `$@` and friends.
    fn special_variable(&mut self, c: char) -> Token {
        let start = self.pos;
        self.pos += 1 + c.len_utf8();
        let span = Span::new(start, self.pos);
        self.warn_at(
            WarningCode::SpecialVariableName,
            &format!("found special shell variable ${c}"),
            span,
        );
        Token::EnvVar {
            name: c.to_string(),
            text: span.slice(self.input).to_string(),
        }
    }

    /// `${...}`, with nesting.
    fn braced_variable(&mut self) -> Result<Token, ShellParsingError> {
        let start = self.pos;
        let body_start = start + 2;
        let Some(close) = self.scan_to_close(body_start, '{', '}') else {
            return Err(ShellParsingError::UnterminatedExpansion {
                kind: "${...} expansion",
                span: Span::new(start, self.input.len()),
            });
        };
        self.pos = close + 1;
        let span = Span::new(start, self.pos);
        let input = self.input;
        let body = &input[body_start..close];

        let mut chars = body.chars();
        let single_special = matches!(
            (chars.next(), chars.next()),
            (Some(c), None) if is_special_parameter(c)
        );
        if is_valid_variable_name(body) {
            self.warn_at(WarningCode::Expansion, "found shell environment variable", span);
        } else if single_special {
            self.warn_at(
                WarningCode::SpecialVariableName,
                &format!("found special shell variable ${{{body}}}"),
                span,
            );
        } else {
            self.warn_at(WarningCode::Expansion, "found expansion expression", span);
        }
        Ok(Token::EnvVar {
            name: body.to_string(),
            text: span.slice(input).to_string(),
        })
    }

    /// `$(...)` or `$((...))`.
    fn command_substitution(&mut self) -> Result<Token, ShellParsingError> {
        let start = self.pos;
        let body_start = start + 2;
        let Some(close) = self.scan_to_close(body_start, '(', ')') else {
            return Err(ShellParsingError::UnterminatedExpansion {
                kind: "$(...) substitution",
                span: Span::new(start, self.input.len()),
            });
        };
        self.pos = close + 1;
        let span = Span::new(start, self.pos);
        self.warn_at(WarningCode::Expansion, "found command substitution expression", span);
        Ok(Token::CommandSubstitution {
            command: self.input[body_start..close].to_string(),
            text: span.slice(self.input).to_string(),
        })
    }

    /// `` `...` ``
    pub(super) fn backtick(&mut self) -> Result<Token, ShellParsingError> {
        let start = self.pos;
        let body_start = start + 1;
        let mut escaped = false;
        let close = self.input[body_start..].char_indices().find_map(|(i, c)| {
            let hit = c == '`' && !escaped;
            escaped = c == '\\' && !escaped;
            hit.then_some(body_start + i)
        });
        let Some(close) = close else {
            return Err(ShellParsingError::UnterminatedExpansion {
                kind: "backtick substitution",
                span: Span::new(start, self.input.len()),
            });
        };
        self.pos = close + 1;
        let span = Span::new(start, self.pos);
        self.warn_at(WarningCode::Expansion, "found command substitution expression", span);
        Ok(Token::CommandSubstitution {
            command: self.input[body_start..close].to_string(),
            text: span.slice(self.input).to_string(),
        })
    }

    /// Byte offset of the `close` balancing an already-consumed `open`,
    /// skipping quoted text and escapes.
    fn scan_to_close(&self, from: usize, open: char, close: char) -> Option<usize> {
        let mut depth = 1usize;
        let mut chars = self.input[from..].char_indices();
        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => {
                    chars.next();
                }
                '\'' => {
                    chars.find(|&(_, q)| q == '\'')?;
                }
                '"' => {
                    let mut escaped = false;
                    chars.find(|&(_, q)| {
                        let end = q == '"' && !escaped;
                        escaped = q == '\\' && !escaped;
                        end
                    })?;
                }
                c if c == open => depth += 1,
                c if c == close => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(from + i);
                    }
                }
                _ => {}
            }
        }
        None
    }
}

fn is_special_parameter(c: char) -> bool {
    matches!(c, '@' | '*' | '#' | '?' | '-' | '$' | '!') || c.is_ascii_digit()
}
