// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Option resolution: an argument vector in, a [`GlobalConfig`] out.
//!
//! Arguments are consumed left to right. Long options go through the exact
//! spelling table, then the ambiguity index, then the `no-` fallback; short
//! options are read as clusters (`-sSLX POST`). Everything else is a URL.
//! A bare `--` switches to positional-only mode for the rest of the line.

use crate::config::{GlobalConfig, GlobalFlags, OperationConfig, SeenOption};
use crate::error::ArgumentError;
use crate::handlers::{handler, Handler};
use crate::index::{table, Lookup, OptionSpec, OptionTable};
use crate::options::{to_boolean, Arity, Opt};
use crate::settings::Settings;
use curlconv_shell::{underline, Span, WarningCode, Warnings, Word};
use std::slice;

/// Resolve `argv` (including the leading `curl`) into configs.
pub fn resolve(argv: &[Word], settings: &Settings) -> Result<GlobalConfig, ArgumentError> {
    let mut resolver = Resolver::new(settings);
    let mut args = argv.get(1..).unwrap_or_default().iter();
    while let Some(arg) = args.next() {
        resolver.argument(arg, &mut args)?;
    }
    Ok(resolver.finish())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectingArg,
    /// After `--`: every argument is a URL.
    PositionalOnly,
}

struct Resolver<'a> {
    settings: &'a Settings,
    table: &'static OptionTable,
    state: State,
    flags: GlobalFlags,
    /// Operations closed by `--next`.
    done: Vec<OperationConfig>,
    current: OperationConfig,
    seen: Vec<SeenOption>,
    warnings: Warnings,
}

impl<'a> Resolver<'a> {
    fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            table: table(),
            state: State::ExpectingArg,
            flags: GlobalFlags::default(),
            done: Vec::new(),
            current: OperationConfig::new(),
            seen: Vec::new(),
            warnings: Warnings::new(),
        }
    }

    fn argument(
        &mut self,
        arg: &Word,
        rest: &mut slice::Iter<'_, Word>,
    ) -> Result<(), ArgumentError> {
        if self.state == State::PositionalOnly || !arg.starts_with("-") {
            self.positional(arg);
            return Ok(());
        }
        if *arg == "--" {
            self.state = State::PositionalOnly;
            return Ok(());
        }
        if arg.starts_with("--") {
            self.long_option(arg, rest)
        } else {
            self.short_options(arg, rest)
        }
    }

    // -----------------------------------------------------------------------
    // Long options
    // -----------------------------------------------------------------------

    fn long_option(
        &mut self,
        arg: &Word,
        rest: &mut slice::Iter<'_, Word>,
    ) -> Result<(), ArgumentError> {
        if let Some(index) = arg.tokens().iter().position(|t| !t.is_literal()) {
            return Err(ArgumentError::expansion(arg, index));
        }
        let display = arg.to_string();
        let spelling = &display[2..];
        let negated = spelling.starts_with("no-");

        let spec = match self.table.lookup(spelling) {
            Lookup::Exact(spec) | Lookup::Abbreviated(spec) => spec,
            Lookup::Ambiguous => return Err(ArgumentError::AmbiguousOption { arg: display }),
            Lookup::Unknown => self.negated(spelling, &display)?,
        };
        self.check_removed(spec, &display)?;

        match spec.arity() {
            Arity::String => {
                let value = rest.next().ok_or_else(|| ArgumentError::MissingParameter {
                    arg: display.clone(),
                })?;
                self.apply_value(spec.opt, value);
            }
            Arity::Flag => self.apply_flag(spec.opt, to_boolean(spelling)),
        }
        self.record(spec, display, negated);
        Ok(())
    }

    /// `--no-x` where `x` is only reachable through an abbreviation.
    fn negated(&self, spelling: &str, display: &str) -> Result<OptionSpec, ArgumentError> {
        let unknown = || ArgumentError::UnknownOption {
            arg: display.to_string(),
        };
        let Some(positive) = spelling.strip_prefix("no-") else {
            return Err(unknown());
        };
        match self.table.lookup(positive) {
            Lookup::Exact(spec) | Lookup::Abbreviated(spec) => {
                if spec.arity() == Arity::Flag && spec.negatable() && spec.removed_in.is_none() {
                    Ok(spec)
                } else {
                    Err(ArgumentError::NotNegatable {
                        arg: display.to_string(),
                    })
                }
            }
            Lookup::Ambiguous => Err(ArgumentError::AmbiguousOption {
                arg: display.to_string(),
            }),
            Lookup::Unknown => Err(unknown()),
        }
    }

    fn check_removed(&mut self, spec: OptionSpec, display: &str) -> Result<(), ArgumentError> {
        let Some(version) = spec.removed_in else {
            return Ok(());
        };
        if self.settings.rejects(version) {
            return Err(ArgumentError::RemovedOption {
                arg: display.to_string(),
                version,
            });
        }
        if self.settings.warn_removed_options {
            self.warnings.push(
                WarningCode::RemovedOption,
                format!("{display} was removed in curl {version}"),
            );
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Short option clusters
    // -----------------------------------------------------------------------

    fn short_options(
        &mut self,
        arg: &Word,
        rest: &mut slice::Iter<'_, Word>,
    ) -> Result<(), ArgumentError> {
        if *arg == "-" {
            return Err(ArgumentError::UnknownOption { arg: "-".into() });
        }

        let mut offset = 0;
        for (index, token) in arg.tokens().iter().enumerate() {
            let Some(text) = token.as_literal() else {
                return Err(ArgumentError::expansion(arg, index));
            };
            for (i, letter) in text.char_indices() {
                let at = offset + i;
                if at == 0 {
                    continue;
                }
                let spec = self.short_letter(letter, arg)?;
                let display = format!("-{letter}");
                match spec.arity() {
                    Arity::String => {
                        let inline = arg.slice(at + letter.len_utf8()..).unwrap_or_default();
                        let value = if inline.is_empty() {
                            rest.next()
                                .cloned()
                                .ok_or_else(|| ArgumentError::MissingParameter {
                                    arg: arg.to_string(),
                                })?
                        } else {
                            inline
                        };
                        self.apply_value(spec.opt, &value);
                        self.record(spec, display, false);
                        return Ok(());
                    }
                    Arity::Flag => {
                        let long = self.table.short(letter).unwrap_or_default();
                        self.apply_flag(spec.opt, to_boolean(long));
                        self.record(spec, display, long.starts_with("no-"));
                    }
                }
            }
            offset += text.len();
        }
        Ok(())
    }

    fn short_letter(&self, letter: char, arg: &Word) -> Result<OptionSpec, ArgumentError> {
        let spec = self.table.short(letter).and_then(|long| self.table.exact(long));
        match spec {
            Some(spec) => Ok(spec),
            None => match self.table.changed_short(letter) {
                Some(history) => Err(ArgumentError::ChangedShortOption {
                    arg: arg.to_string(),
                    history,
                }),
                None => Err(ArgumentError::UnknownOption {
                    arg: arg.to_string(),
                }),
            },
        }
    }

    // -----------------------------------------------------------------------
    // URLs
    // -----------------------------------------------------------------------

    fn positional(&mut self, arg: &Word) {
        if let Some(first) = arg.tokens().first().filter(|t| !t.is_literal()) {
            let is_or_begins = if arg.tokens().len() == 1 {
                "is"
            } else {
                "begins with"
            };
            let excerpt = underline(&arg.to_string(), Span::new(0, first.text().len()));
            self.warnings.push(
                WarningCode::AmbiguousArgument,
                format!(
                    "argument {is_or_begins} a {}, assuming it's a URL\n{excerpt}",
                    first.describe()
                ),
            );
        }
        self.apply_value(Opt::Url, arg);
        self.seen.push(SeenOption {
            opt: Opt::Url,
            spelling: "--url".into(),
        });
    }

    // -----------------------------------------------------------------------
    // Applying
    // -----------------------------------------------------------------------

    fn apply_flag(&mut self, opt: Opt, on: bool) {
        tracing::trace!(option = %opt, on, "resolved flag");
        match handler(opt) {
            Handler::Flag(f) => {
                let config = std::mem::take(&mut self.current);
                self.current = f(config, opt, on, &mut self.warnings);
            }
            Handler::GlobalFlag(f) => f(&mut self.flags, opt, on, &mut self.warnings),
            Handler::Next => self.next(on),
            // Handler arity always matches the option's.
            Handler::Value(_) | Handler::GlobalValue(_) => {}
        }
    }

    fn apply_value(&mut self, opt: Opt, value: &Word) {
        tracing::trace!(option = %opt, %value, "resolved value");
        match handler(opt) {
            Handler::Value(f) => {
                let config = std::mem::take(&mut self.current);
                self.current = f(config, opt, value, &mut self.warnings);
            }
            Handler::GlobalValue(f) => f(&mut self.flags, opt, value, &mut self.warnings),
            Handler::Flag(_) | Handler::GlobalFlag(_) | Handler::Next => {}
        }
    }

    /// `--next` only splits once the current operation has a URL for
    /// every output and upload.
    fn next(&mut self, on: bool) {
        if on && self.current.can_close() {
            let closed = std::mem::take(&mut self.current);
            tracing::debug!(urls = closed.url_count(), "closed operation");
            self.done.push(closed);
        }
    }

    fn record(&mut self, spec: OptionSpec, display: String, negated: bool) {
        if !self.settings.supports(spec.opt, negated) {
            let mut message = format!("{display} is not a supported option");
            if let Some(version) = spec.removed_in {
                message.push_str(&format!(", it was removed in curl {version}"));
            }
            self.warnings.push(WarningCode::UnsupportedOption, message);
        }
        self.seen.push(SeenOption {
            opt: spec.opt,
            spelling: display,
        });
    }

    fn finish(mut self) -> GlobalConfig {
        self.done.push(self.current);
        for config in &mut self.done {
            config.collapse();
        }
        tracing::debug!(
            operations = self.done.len(),
            options = self.seen.len(),
            warnings = self.warnings.len(),
            "resolved arguments"
        );
        GlobalConfig {
            flags: self.flags,
            configs: self.done,
            seen: self.seen,
            warnings: self.warnings,
        }
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
