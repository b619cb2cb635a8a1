// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A string that may be partly unknown until the shell runs it.
//!
//! A [`Word`] is the value of one shell argument. Literal text is stored as
//! is; `$VAR` and `$(cmd)` stay opaque [`Token`]s because their value only
//! exists at runtime. Every text operation here works on literal tokens
//! alone and never matches across a token boundary.
//!
//! Offsets are byte offsets into the rendered text, where an expansion
//! renders as its original source (`${HOME}`, `` `date` ``).

use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Bound, RangeBounds};
use thiserror::Error;

/// One fragment of a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    /// Text known at translation time.
    Literal(String),
    /// `$NAME` or `${...}`.
    EnvVar {
        /// Variable name, or the whole body of a `${...}` expression.
        name: String,
        /// Source text as written.
        text: String,
    },
    /// `$(...)`, `$((...))` or a backtick substitution.
    CommandSubstitution {
        /// The text between the delimiters.
        command: String,
        /// Source text as written.
        text: String,
    },
}

impl Token {
    pub fn env_var(name: impl Into<String>) -> Self {
        let name = name.into();
        let text = format!("${name}");
        Token::EnvVar { name, text }
    }

    pub fn command(command: impl Into<String>) -> Self {
        let command = command.into();
        let text = format!("$({command})");
        Token::CommandSubstitution { command, text }
    }

    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self, Token::Literal(_))
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Token::Literal(s) => Some(s),
            _ => None,
        }
    }

    /// The token as it appears in the rendered word.
    pub fn text(&self) -> &str {
        match self {
            Token::Literal(s) => s,
            Token::EnvVar { text, .. } | Token::CommandSubstitution { text, .. } => text,
        }
    }

    /// Short noun used in messages: "variable" or "command".
    pub fn describe(&self) -> &'static str {
        match self {
            Token::Literal(_) => "literal",
            Token::EnvVar { .. } => "variable",
            Token::CommandSubstitution { .. } => "command",
        }
    }
}

/// Errors from [`Word::slice`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WordError {
    /// A slice boundary falls inside an expansion.
    #[error("cannot cut inside {text}: its value is only known at runtime")]
    SliceInsideExpansion {
        /// Source text of the expansion.
        text: String,
    },

    /// A slice boundary splits a UTF-8 character.
    #[error("offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },

    /// The range does not fit the word.
    #[error("range {start}..{end} is out of bounds for a word of length {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },
}

/// Result of the certainty check done wherever a literal value is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Known<'a> {
    /// The whole word is literal text.
    Literal(&'a str),
    /// The word contains this expansion (the first one found).
    Dynamic(&'a Token),
}

/// An immutable sequence of tokens forming one shell argument.
///
/// Adjacent literals are always merged and empty literals dropped, so the
/// empty word has no tokens and two equal strings compare equal no matter
/// how they were built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Word {
    tokens: Vec<Token>,
}

impl Word {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn literal(s: impl Into<String>) -> Self {
        Self::from_tokens([Token::Literal(s.into())])
    }

    /// Build a word, merging adjacent literals and dropping empty ones.
    pub fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Self {
        let mut word = Self::new();
        for token in tokens {
            word.push_token(token);
        }
        word
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// True for the word with no tokens (`''`).
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Rendered length in bytes.
    pub fn len(&self) -> usize {
        self.tokens.iter().map(|t| t.text().len()).sum()
    }

    /// True when no token is an expansion.
    pub fn is_literal(&self) -> bool {
        self.tokens.iter().all(Token::is_literal)
    }

    /// The plain string, if the word is pure.
    pub fn as_literal(&self) -> Option<&str> {
        match self.known() {
            Known::Literal(s) => Some(s),
            Known::Dynamic(_) => None,
        }
    }

    /// Decide whether the value of this word is certain.
    pub fn known(&self) -> Known<'_> {
        match self.first_expansion() {
            Some(token) => Known::Dynamic(token),
            None => {
                let text = self.tokens.first().and_then(Token::as_literal);
                Known::Literal(text.unwrap_or(""))
            }
        }
    }

    pub fn first_expansion(&self) -> Option<&Token> {
        self.tokens.iter().find(|t| !t.is_literal())
    }

    pub fn first_char(&self) -> Option<char> {
        self.tokens.first()?.as_literal()?.chars().next()
    }

    // -----------------------------------------------------------------------
    // Building
    // -----------------------------------------------------------------------

    pub fn push_token(&mut self, token: Token) {
        match token {
            Token::Literal(s) if s.is_empty() => {}
            Token::Literal(s) => match self.tokens.last_mut() {
                Some(Token::Literal(last)) => last.push_str(&s),
                _ => self.tokens.push(Token::Literal(s)),
            },
            other => self.tokens.push(other),
        }
    }

    pub fn push_str(&mut self, s: &str) {
        self.push_token(Token::Literal(s.to_string()));
    }

    pub fn push_char(&mut self, c: char) {
        match self.tokens.last_mut() {
            Some(Token::Literal(last)) => last.push(c),
            _ => self.tokens.push(Token::Literal(c.to_string())),
        }
    }

    pub fn push_word(&mut self, other: &Word) {
        for token in &other.tokens {
            self.push_token(token.clone());
        }
    }

    /// A new word with `s` in front.
    pub fn prepend(&self, s: &str) -> Word {
        let mut word = Word::literal(s);
        word.push_word(self);
        word
    }

    /// Concatenate words with a literal separator between them.
    pub fn join<'a>(words: impl IntoIterator<Item = &'a Word>, sep: &str) -> Word {
        let mut joined = Word::new();
        for (i, word) in words.into_iter().enumerate() {
            if i > 0 {
                joined.push_str(sep);
            }
            joined.push_word(word);
        }
        joined
    }

    /// Apply `f` to every literal token, keeping expansions untouched.
    pub fn map_literals(&self, mut f: impl FnMut(&str) -> String) -> Word {
        Word::from_tokens(self.tokens.iter().map(|t| match t {
            Token::Literal(s) => Token::Literal(f(s)),
            other => other.clone(),
        }))
    }

    // -----------------------------------------------------------------------
    // Slicing
    // -----------------------------------------------------------------------

    /// Cut out a byte range of the rendered word.
    ///
    /// Expansions that lie wholly inside the range are kept; a boundary that
    /// cuts through one is an error.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Result<Word, WordError> {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&n) => n.saturating_add(1),
            Bound::Excluded(&n) => n,
            Bound::Unbounded => len,
        };
        if start > end || end > len {
            return Err(WordError::OutOfBounds { start, end, len });
        }

        let mut out = Word::new();
        let mut offset = 0;
        for token in &self.tokens {
            let token_start = offset;
            let token_end = offset + token.text().len();
            offset = token_end;

            let from = start.max(token_start);
            let to = end.min(token_end);
            if from >= to {
                continue;
            }
            match token {
                Token::Literal(s) => {
                    let (lo, hi) = (from - token_start, to - token_start);
                    let offset = if s.is_char_boundary(lo) { to } else { from };
                    let piece = s
                        .get(lo..hi)
                        .ok_or(WordError::NotCharBoundary { offset })?;
                    out.push_str(piece);
                }
                other if from == token_start && to == token_end => out.push_token(other.clone()),
                other => {
                    return Err(WordError::SliceInsideExpansion {
                        text: other.text().to_string(),
                    })
                }
            }
        }
        Ok(out)
    }

    // -----------------------------------------------------------------------
    // Searching
    // -----------------------------------------------------------------------

    /// True when the first token is a literal starting with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        match self.tokens.first() {
            Some(Token::Literal(s)) => s.starts_with(pat),
            Some(_) => pat.is_empty(),
            None => pat.is_empty(),
        }
    }

    /// True when the last token is a literal ending with `pat`.
    pub fn ends_with(&self, pat: &str) -> bool {
        match self.tokens.last() {
            Some(Token::Literal(s)) => s.ends_with(pat),
            Some(_) => pat.is_empty(),
            None => pat.is_empty(),
        }
    }

    /// Byte offset of the first match of `pat` inside a single literal.
    pub fn find(&self, pat: &str) -> Option<usize> {
        let mut offset = 0;
        for token in &self.tokens {
            if let Token::Literal(s) = token {
                if let Some(i) = s.find(pat) {
                    return Some(offset + i);
                }
            }
            offset += token.text().len();
        }
        None
    }

    /// Byte offset of the last match of `pat` inside a single literal.
    pub fn rfind(&self, pat: &str) -> Option<usize> {
        let mut offset = self.len();
        for token in self.tokens.iter().rev() {
            offset -= token.text().len();
            if let Token::Literal(s) = token {
                if let Some(i) = s.rfind(pat) {
                    return Some(offset + i);
                }
            }
        }
        None
    }

    pub fn contains(&self, pat: &str) -> bool {
        self.find(pat).is_some()
    }

    // -----------------------------------------------------------------------
    // Splitting and trimming
    // -----------------------------------------------------------------------

    fn split_at_match(&self, at: usize, pat_len: usize) -> (Word, Word) {
        // Matches always lie inside a literal, so both cuts are valid.
        let head = self.slice(..at).unwrap_or_default();
        let tail = self.slice(at + pat_len..).unwrap_or_default();
        (head, tail)
    }

    pub fn split_once(&self, pat: &str) -> Option<(Word, Word)> {
        let at = self.find(pat)?;
        Some(self.split_at_match(at, pat.len()))
    }

    pub fn rsplit_once(&self, pat: &str) -> Option<(Word, Word)> {
        let at = self.rfind(pat)?;
        Some(self.split_at_match(at, pat.len()))
    }

    /// Split into at most `n` pieces; the last piece keeps the remainder.
    pub fn splitn(&self, n: usize, pat: &str) -> Vec<Word> {
        let mut pieces = Vec::new();
        let mut rest = self.clone();
        while pieces.len() + 1 < n {
            match rest.split_once(pat) {
                Some((head, tail)) if !pat.is_empty() => {
                    pieces.push(head);
                    rest = tail;
                }
                _ => break,
            }
        }
        if n > 0 {
            pieces.push(rest);
        }
        pieces
    }

    pub fn split(&self, pat: &str) -> Vec<Word> {
        self.splitn(usize::MAX, pat)
    }

    pub fn strip_prefix(&self, prefix: &str) -> Option<Word> {
        if !self.starts_with(prefix) {
            return None;
        }
        self.slice(prefix.len()..).ok()
    }

    pub fn strip_suffix(&self, suffix: &str) -> Option<Word> {
        if !self.ends_with(suffix) {
            return None;
        }
        self.slice(..self.len() - suffix.len()).ok()
    }

    /// Trim whitespace from the literal edges of the word.
    pub fn trim(&self) -> Word {
        self.trim_start().trim_end()
    }

    pub fn trim_start(&self) -> Word {
        let mut tokens = self.tokens.clone();
        if let Some(Token::Literal(s)) = tokens.first_mut() {
            *s = s.trim_start().to_string();
        }
        Word::from_tokens(tokens)
    }

    pub fn trim_end(&self) -> Word {
        let mut tokens = self.tokens.clone();
        if let Some(Token::Literal(s)) = tokens.last_mut() {
            *s = s.trim_end().to_string();
        }
        Word::from_tokens(tokens)
    }

    /// Replace every occurrence of `from` within each literal.
    pub fn replace(&self, from: &str, to: &str) -> Word {
        self.map_literals(|s| s.replace(from, to))
    }

    pub fn to_lowercase(&self) -> Word {
        self.map_literals(str::to_lowercase)
    }

    pub fn to_uppercase(&self) -> Word {
        self.map_literals(str::to_uppercase)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str(token.text())?;
        }
        Ok(())
    }
}

impl From<&str> for Word {
    fn from(s: &str) -> Self {
        Word::literal(s)
    }
}

impl From<String> for Word {
    fn from(s: String) -> Self {
        Word::literal(s)
    }
}

impl FromIterator<Token> for Word {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Word::from_tokens(iter)
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.as_literal() == Some(other)
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.as_literal() == Some(*other)
    }
}

impl Add<&Word> for Word {
    type Output = Word;

    fn add(mut self, rhs: &Word) -> Word {
        self.push_word(rhs);
        self
    }
}

impl Add<&str> for Word {
    type Output = Word;

    fn add(mut self, rhs: &str) -> Word {
        self.push_str(rhs);
        self
    }
}

/// Pure words serialize as plain strings, others as their token list.
impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.known() {
            Known::Literal(s) => serializer.serialize_str(s),
            Known::Dynamic(_) => self.tokens.serialize(serializer),
        }
    }
}

#[cfg(test)]
#[path = "word_tests.rs"]
mod tests;
