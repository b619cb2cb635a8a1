// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirections, heredocs and here-strings.

use super::{Lexer, Stdin};
use crate::error::ShellParsingError;
use crate::span::Span;
use crate::warning::WarningCode;
use crate::word::Word;

/// A `<<DELIM` whose body starts on the line after the command.
#[derive(Debug, Clone)]
pub(super) struct PendingHeredoc {
    pub(super) delimiter: String,
    /// `<<-` strips leading tabs from body lines.
    pub(super) strip_tabs: bool,
    pub(super) span: Span,
}

impl Lexer<'_> {
    /// Optional fd digits followed by `<` or `>`, or `&>`.
    pub(super) fn at_redirect(&self) -> bool {
        let rest = self.rest();
        let after_fd = rest.trim_start_matches(|c: char| c.is_ascii_digit());
        after_fd.starts_with('<') || after_fd.starts_with('>') || rest.starts_with("&>")
    }

    pub(super) fn redirect(&mut self) -> Result<(), ShellParsingError> {
        let start = self.pos;
        let fd_len = self.rest().len()
            - self.rest().trim_start_matches(|c: char| c.is_ascii_digit()).len();
        self.pos += fd_len;
        let rest = self.rest();

        if rest.starts_with("<<<") {
            self.pos += 3;
            let target = self.redirect_target()?;
            let mut text = target;
            // a here-string always ends with a newline
            text.push_char('\n');
            self.set_stdin(Stdin::Text(text), Span::new(start, self.pos));
        } else if rest.starts_with("<<") {
            let strip_tabs = rest.starts_with("<<-");
            self.pos += if strip_tabs { 3 } else { 2 };
            let delimiter = self.redirect_target()?.to_string();
            let span = Span::new(start, self.pos);
            if self.pending_heredoc.is_some() || self.stdin.is_some() {
                self.warn_at(
                    WarningCode::MultipleRedirects,
                    "found multiple stdin redirects, only the first one is used",
                    span,
                );
            } else {
                self.pending_heredoc = Some(PendingHeredoc {
                    delimiter,
                    strip_tabs,
                    span,
                });
            }
        } else if rest.starts_with("<&") {
            self.pos += 2;
            self.redirect_target()?;
            self.ignore_redirect(start);
        } else if rest.starts_with('<') {
            // `<>` opens read-write, which still feeds stdin
            self.pos += if rest.starts_with("<>") { 2 } else { 1 };
            let target = self.redirect_target()?;
            self.set_stdin(Stdin::File(target), Span::new(start, self.pos));
        } else {
            self.output_redirect()?;
            self.ignore_redirect(start);
        }
        Ok(())
    }

    /// `>`, `>>`, `>|`, `>&2`, `&>`, `&>>`.
    fn output_redirect(&mut self) -> Result<(), ShellParsingError> {
        let op_len = ["&>>", "&>", ">>", ">|", ">&", ">"]
            .iter()
            .find(|op| self.rest().starts_with(*op))
            .map(|op| op.len())
            .unwrap_or(1);
        let duplicates_fd = self.rest()[..op_len].ends_with('&') && op_len == 2;
        self.pos += op_len;
        if duplicates_fd {
            let fd_len = self
                .rest()
                .find(|c: char| !c.is_ascii_digit() && c != '-')
                .unwrap_or(self.rest().len());
            if fd_len > 0 {
                self.pos += fd_len;
                return Ok(());
            }
        }
        self.redirect_target()?;
        Ok(())
    }

    fn redirect_target(&mut self) -> Result<Word, ShellParsingError> {
        while matches!(self.peek(), Some(' ' | '\t')) {
            self.bump();
        }
        self.read_word()
    }

    fn ignore_redirect(&mut self, start: usize) {
        let span = Span::new(start, self.pos);
        self.warn_at(WarningCode::OutputRedirect, "ignoring redirect", span);
    }

    pub(super) fn set_stdin(&mut self, stdin: Stdin, span: Span) {
        if self.stdin.is_some() {
            self.warn_at(
                WarningCode::MultipleRedirects,
                "found multiple stdin redirects, only the first one is used",
                span,
            );
            return;
        }
        self.stdin = Some(stdin);
    }

    /// Read body lines up to the delimiter line, leaving the cursor after it.
    pub(super) fn heredoc_body(
        &mut self,
        heredoc: &PendingHeredoc,
    ) -> Result<Word, ShellParsingError> {
        let mut body = String::new();
        while self.pos < self.input.len() {
            let line_end = self.line_end(self.pos);
            let line = &self.input[self.pos..line_end];
            let line = line.strip_suffix('\r').unwrap_or(line);
            let line = if heredoc.strip_tabs {
                line.trim_start_matches('\t')
            } else {
                line
            };
            self.pos = (line_end + 1).min(self.input.len());
            if line == heredoc.delimiter {
                return Ok(Word::literal(body));
            }
            body.push_str(line);
            body.push('\n');
        }
        Err(ShellParsingError::UnterminatedHeredoc {
            delimiter: heredoc.delimiter.clone(),
            span: heredoc.span,
        })
    }
}
