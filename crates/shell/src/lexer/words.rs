// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word reading: bare text, escapes and the three quoting styles.

use super::expansion::Quoting;
use super::Lexer;
use crate::error::ShellParsingError;
use crate::span::Span;
use crate::word::Word;

impl Lexer<'_> {
    /// Read one shell word, stopping at blanks, separators and redirects.
    pub(super) fn read_word(&mut self) -> Result<Word, ShellParsingError> {
        let mut word = Word::new();
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\r' | '\n' | ';' | '&' | '|' | '<' | '>' => break,
                '\\' => {
                    self.bump();
                    match self.peek() {
                        // A lone backslash at end of input is dropped
                        None => {}
                        Some('\n') => self.bump(),
                        Some(escaped) => {
                            word.push_char(escaped);
                            self.bump();
                        }
                    }
                }
                '\'' => self.single_quoted(&mut word)?,
                '"' => self.double_quoted(&mut word)?,
                '$' => self.dollar(&mut word, Quoting::Unquoted)?,
                '`' => {
                    let token = self.backtick()?;
                    word.push_token(token);
                }
                _ => {
                    word.push_char(c);
                    self.bump();
                }
            }
        }
        Ok(word)
    }

    /// `'...'`: everything up to the next single quote, verbatim.
    fn single_quoted(&mut self, word: &mut Word) -> Result<(), ShellParsingError> {
        let start = self.pos;
        self.bump();
        match self.rest().find('\'') {
            Some(len) => {
                word.push_str(&self.input[self.pos..self.pos + len]);
                self.pos += len + 1;
                Ok(())
            }
            None => Err(ShellParsingError::UnterminatedQuote {
                kind: "single-quoted string",
                span: Span::new(start, self.input.len()),
            }),
        }
    }

    /// `"..."`: backslash only escapes `\ $ ` "` and newline; expansions
    /// stay live.
    pub(super) fn double_quoted(&mut self, word: &mut Word) -> Result<(), ShellParsingError> {
        let start = self.pos;
        let end = self.input.len();
        let unterminated = move || ShellParsingError::UnterminatedQuote {
            kind: "double-quoted string",
            span: Span::new(start, end),
        };
        self.bump();
        loop {
            match self.peek().ok_or_else(unterminated)? {
                '"' => {
                    self.bump();
                    return Ok(());
                }
                '\\' => {
                    self.bump();
                    match self.peek().ok_or_else(unterminated)? {
                        '\n' => self.bump(),
                        c @ ('\\' | '$' | '`' | '"') => {
                            word.push_char(c);
                            self.bump();
                        }
                        _ => word.push_char('\\'),
                    }
                }
                '$' => self.dollar(word, Quoting::Double)?,
                '`' => {
                    let token = self.backtick()?;
                    word.push_token(token);
                }
                c => {
                    word.push_char(c);
                    self.bump();
                }
            }
        }
    }

    /// `$'...'`: ANSI-C quoting with backslash escapes.
    pub(super) fn ansi_c_quoted(&mut self, word: &mut Word) -> Result<(), ShellParsingError> {
        let start = self.pos;
        let end = self.input.len();
        let unterminated = move || ShellParsingError::UnterminatedQuote {
            kind: "ANSI-C string",
            span: Span::new(start, end),
        };
        self.pos += 2;
        loop {
            match self.peek().ok_or_else(unterminated)? {
                '\'' => {
                    self.bump();
                    return Ok(());
                }
                '\\' => {
                    self.bump();
                    let escaped = self.peek().ok_or_else(unterminated)?;
                    self.bump();
                    self.ansi_c_escape(escaped, word)?;
                }
                c => {
                    word.push_char(c);
                    self.bump();
                }
            }
        }
    }

    /// Decode the escape whose letter (`escaped`) was just consumed.
    fn ansi_c_escape(&mut self, escaped: char, word: &mut Word) -> Result<(), ShellParsingError> {
        let decoded = match escaped {
            'a' => '\x07',
            'b' => '\x08',
            'e' | 'E' => '\x1b',
            'f' => '\x0c',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\x0b',
            '\\' | '\'' | '"' | '?' => escaped,
            '0'..='7' => {
                let mut value = escaped.to_digit(8).unwrap_or(0);
                if let Some(more) = self.take_digits(8, 2) {
                    value = value * 8u32.pow(more.1) + more.0;
                }
                byte_char(value)
            }
            'x' => match self.take_digits(16, 2) {
                Some((value, _)) => byte_char(value),
                None => {
                    word.push_str("\\x");
                    return Ok(());
                }
            },
            'u' | 'U' => {
                let max = if escaped == 'u' { 4 } else { 8 };
                match self.take_digits(16, max) {
                    Some((value, _)) => {
                        char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
                    }
                    None => {
                        word.push_char('\\');
                        word.push_char(escaped);
                        return Ok(());
                    }
                }
            }
            'c' => {
                let escape_start = self.pos.saturating_sub(2);
                let Some(control) = self.peek() else {
                    return Err(ShellParsingError::UnterminatedQuote {
                        kind: "ANSI-C string",
                        span: Span::new(escape_start, self.input.len()),
                    });
                };
                self.bump();
                if !control.is_ascii() {
                    return Err(ShellParsingError::InvalidEscape {
                        escape: format!("\\c{control}"),
                        span: Span::new(escape_start, self.pos),
                    });
                }
                if control == '?' {
                    '\x7f'
                } else {
                    char::from((control as u8) & 0x1f)
                }
            }
            other => {
                word.push_char('\\');
                other
            }
        };
        word.push_char(decoded);
        Ok(())
    }

    /// Consume up to `max` digits in `radix`, returning `(value, count)`.
    fn take_digits(&mut self, radix: u32, max: usize) -> Option<(u32, u32)> {
        let mut value = 0u32;
        let mut count = 0u32;
        while (count as usize) < max {
            let Some(digit) = self.peek().and_then(|c| c.to_digit(radix)) else {
                break;
            };
            value = value.wrapping_mul(radix).wrapping_add(digit);
            count += 1;
            self.bump();
        }
        (count > 0).then_some((value, count))
    }
}

/// Bytes above 0x7f are reinterpreted as Latin-1.
fn byte_char(value: u32) -> char {
    char::from((value & 0xff) as u8)
}
