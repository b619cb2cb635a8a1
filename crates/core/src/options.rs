// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The closed set of curl options.

use serde::{Serialize, Serializer};
use std::fmt;

/// Whether an option takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Arity {
    /// Boolean switch, possibly with a `--no-` form.
    Flag,
    /// Consumes the next argument.
    String,
}

/// Define the [`Opt`] enum from `Variant => "name", Arity[, negatable];` rows.
///
/// Generates `name()`, `arity()`, `negatable()`, `from_name()` and the
/// `LIVE` / `RETIRED` lists. Retired options are only reachable through the
/// removed-spelling table.
macro_rules! long_options {
    (
        live {
            $( $variant:ident => $name:literal, $arity:ident $(, $neg:ident)? ; )*
        }
        retired {
            $( $rvariant:ident => $rname:literal, $rarity:ident ; )*
        }
    ) => {
        /// A canonical curl option.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Opt {
            $( $variant, )*
            $( $rvariant, )*
        }

        impl Opt {
            /// Options of the current curl release, in table order.
            pub const LIVE: &'static [Opt] = &[ $( Opt::$variant, )* ];

            /// Options that only exist as spellings of older releases.
            pub const RETIRED: &'static [Opt] = &[ $( Opt::$rvariant, )* ];

            /// Canonical long name, without dashes.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Opt::$variant => $name, )*
                    $( Opt::$rvariant => $rname, )*
                }
            }

            pub const fn arity(self) -> Arity {
                match self {
                    $( Opt::$variant => Arity::$arity, )*
                    $( Opt::$rvariant => Arity::$rarity, )*
                }
            }

            /// Whether curl accepts `--no-<name>`.
            pub const fn negatable(self) -> bool {
                match self {
                    $( Opt::$variant => long_options!(@negatable $($neg)?), )*
                    $( Opt::$rvariant => false, )*
                }
            }

            /// Look up an option by its canonical name.
            pub fn from_name(name: &str) -> Option<Opt> {
                match name {
                    $( $name => Some(Opt::$variant), )*
                    $( $rname => Some(Opt::$rvariant), )*
                    _ => None,
                }
            }
        }
    };
    (@negatable negatable) => { true };
    (@negatable) => { false };
}

mod table;

pub use table::Opt;
pub(crate) use table::{ALIASES, CHANGED_SHORT, REMOVED, SHORT};

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Opt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// The value curl would derive from a spelling: `--no-x` and `--disable-x`
/// mean off, except `--no-disable-x` which means on.
pub fn to_boolean(spelling: &str) -> bool {
    if spelling.starts_with("no-disable-") {
        return true;
    }
    !(spelling.starts_with("disable-") || spelling.starts_with("no-"))
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
