// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spelling lookup and the long-option ambiguity index.
//!
//! curl accepts any unambiguous prefix of a long option (`--verb` for
//! `--verbose`). The index maps every proper prefix of every live spelling
//! to the option it abbreviates, or to [`Prefix::Ambiguous`] when two
//! different options share it.

use crate::options::{Arity, Opt, ALIASES, CHANGED_SHORT, REMOVED, SHORT};
use crate::version::CurlVersion;
use std::borrow::Cow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::LazyLock;

/// What a spelling resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub opt: Opt,
    /// Set for spellings dropped from curl.
    pub removed_in: Option<CurlVersion>,
}

impl OptionSpec {
    const fn live(opt: Opt) -> Self {
        Self {
            opt,
            removed_in: None,
        }
    }

    #[inline]
    pub fn arity(&self) -> Arity {
        self.opt.arity()
    }

    #[inline]
    pub fn negatable(&self) -> bool {
        self.opt.negatable()
    }
}

/// An ambiguity index slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    Unique(OptionSpec),
    Ambiguous,
}

/// Result of looking up the text after `--`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Exact(OptionSpec),
    Abbreviated(OptionSpec),
    Ambiguous,
    Unknown,
}

/// Immutable lookup tables, built once per process.
#[derive(Debug)]
pub struct OptionTable {
    spellings: HashMap<Cow<'static, str>, OptionSpec>,
    prefixes: HashMap<&'static str, Prefix>,
    short: HashMap<char, &'static str>,
    changed_short: HashMap<char, &'static str>,
}

static TABLE: LazyLock<OptionTable> = LazyLock::new(OptionTable::build);

/// The process-wide option table.
pub fn table() -> &'static OptionTable {
    &TABLE
}

impl OptionTable {
    fn build() -> Self {
        let mut spellings: HashMap<Cow<'static, str>, OptionSpec> = HashMap::new();
        // Live spellings in registration order; negated forms are excluded
        // from the prefix index.
        let expandable: Vec<(&'static str, OptionSpec)> = Opt::LIVE
            .iter()
            .map(|&opt| (opt.name(), opt))
            .chain(ALIASES.iter().copied())
            .map(|(spelling, opt)| (spelling, OptionSpec::live(opt)))
            .collect();

        for &(spelling, spec) in &expandable {
            spellings.insert(Cow::Borrowed(spelling), spec);
        }
        for &(spelling, spec) in &expandable {
            if spec.negatable() {
                spellings.insert(Cow::Owned(format!("no-{spelling}")), spec);
            }
        }

        let mut dropped = 0usize;
        for &(spelling, opt, version) in REMOVED {
            match spellings.entry(Cow::Borrowed(spelling)) {
                Entry::Occupied(_) => dropped += 1,
                Entry::Vacant(slot) => {
                    slot.insert(OptionSpec {
                        opt,
                        removed_in: Some(version),
                    });
                }
            }
        }

        let mut prefixes: HashMap<&'static str, Prefix> = HashMap::new();
        for &(spelling, spec) in &expandable {
            for (end, _) in spelling.char_indices().skip(1) {
                let prefix = &spelling[..end];
                if spellings.contains_key(prefix) {
                    continue;
                }
                prefixes
                    .entry(prefix)
                    .and_modify(|slot| {
                        if matches!(slot, Prefix::Unique(existing) if existing.opt != spec.opt) {
                            *slot = Prefix::Ambiguous;
                        }
                    })
                    .or_insert(Prefix::Unique(spec));
            }
        }

        tracing::debug!(
            spellings = spellings.len(),
            prefixes = prefixes.len(),
            dropped_removed = dropped,
            "built option table"
        );
        Self {
            spellings,
            prefixes,
            short: SHORT.iter().copied().collect(),
            changed_short: CHANGED_SHORT.iter().copied().collect(),
        }
    }

    /// Exact spelling, including `no-` forms and removed spellings.
    pub fn exact(&self, spelling: &str) -> Option<OptionSpec> {
        self.spellings.get(spelling).copied()
    }

    /// Ambiguity index slot for an abbreviation.
    pub fn prefix(&self, abbreviation: &str) -> Option<Prefix> {
        self.prefixes.get(abbreviation).copied()
    }

    /// Exact spelling first, then the ambiguity index.
    pub fn lookup(&self, spelling: &str) -> Lookup {
        if let Some(spec) = self.exact(spelling) {
            return Lookup::Exact(spec);
        }
        match self.prefix(spelling) {
            Some(Prefix::Unique(spec)) => Lookup::Abbreviated(spec),
            Some(Prefix::Ambiguous) => Lookup::Ambiguous,
            None => Lookup::Unknown,
        }
    }

    /// The long spelling a short option letter stands for.
    pub fn short(&self, letter: char) -> Option<&'static str> {
        self.short.get(&letter).copied()
    }

    /// What a retired short letter used to mean.
    pub fn changed_short(&self, letter: char) -> Option<&'static str> {
        self.changed_short.get(&letter).copied()
    }

    pub fn len(&self) -> usize {
        self.spellings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spellings.is_empty()
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
