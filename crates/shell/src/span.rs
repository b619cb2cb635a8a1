// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Byte ranges into the command text and the excerpts built from them.

use serde::{Deserialize, Serialize};

/// A byte range into the original command text.
///
/// # Examples
///
/// ```ignore
/// use curlconv_shell::Span;
///
/// let source = "curl -X POST";
/// let span = Span::new(5, 7);
/// assert_eq!(span.slice(source), "-X");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// An empty span at a position, used for errors at end of input.
    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Extract the spanned text, or `""` when the span does not fit `source`.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Underline a span on the line of `input` where it starts.
///
/// This is the excerpt embedded in warning messages: the whole source line
/// followed by a line of carets under the offending text. Spans running past
/// the end of the line are cut at the newline.
///
/// ```text
/// curl $URL -H 'Accept: */*'
///      ^^^^
/// ```
pub fn underline(input: &str, span: Span) -> String {
    let start = span.start.min(input.len());
    let line_start = input[..start].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = input[start..]
        .find('\n')
        .map(|i| start + i)
        .unwrap_or(input.len());

    let line = &input[line_start..line_end];
    let end = span.end.clamp(start, line_end);
    let col = input[line_start..start].chars().count();
    let width = input[start..end].chars().count().max(1);

    format!("{}\n{}{}", line, " ".repeat(col), "^".repeat(width))
}

/// Generate a context snippet showing the error location in source text.
///
/// Shows up to `context_chars` characters on either side of the span start,
/// with carets under the span.
///
/// ```text
/// curl 'https://example.com
///      ^
/// ```
pub fn context_snippet(input: &str, span: Span, context_chars: usize) -> String {
    let pos = span.start.min(input.len());
    let start = input[..pos]
        .char_indices()
        .rev()
        .take(context_chars)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(pos);

    let end = input[pos..]
        .char_indices()
        .take(context_chars + 1)
        .last()
        .map(|(i, c)| pos + i + c.len_utf8())
        .unwrap_or(input.len());

    let snippet = &input[start..end];
    let caret_pos = input[start..pos].chars().count();
    let caret_len = span.slice(input).chars().count().max(1);

    format!(
        "{}\n{}{}",
        snippet,
        " ".repeat(caret_pos),
        "^".repeat(caret_len)
    )
}

/// Locate a span in source, returning (line_number, column, line_content).
///
/// Line numbers are 1-indexed, columns are 0-indexed character counts.
pub fn locate_span(source: &str, span: Span) -> (usize, usize, &str) {
    let start = span.start.min(source.len());
    let line_start = source[..start].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_num = source[..line_start].matches('\n').count() + 1;
    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());
    let col = source[line_start..start].chars().count();

    (line_num, col, &source[line_start..line_end])
}

/// Render a rustc-style diagnostic with line/column info.
///
/// ```text
/// error: unterminated single-quoted string
///   --> line 2, column 4
///    |
///  2 |  -d 'foo
///    |    ^
/// ```
pub fn diagnostic_context(source: &str, span: Span, message: &str) -> String {
    let (line_num, col, line_content) = locate_span(source, span);
    let width = span.slice(source).chars().count().max(1);

    format!(
        "error: {}\n  --> line {}, column {}\n   |\n{:>3} | {}\n   | {}{}",
        message,
        line_num,
        col + 1,
        line_num,
        line_content,
        " ".repeat(col),
        "^".repeat(width)
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
