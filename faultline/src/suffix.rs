//! Behavior tags appended to a fault identifier.
//!
//! A single fault site can expose several injectable behaviors, for example
//! `fault_return_bool!` can return either `true` or `false`. Each behavior is
//! armed through its own environment variable, distinguished by a suffix:
//!
//! ```text
//! INJECTED_FAULT_WAL_RS_42_9_TRUE
//! INJECTED_FAULT_WAL_RS_42_9_FALSE
//! ```

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A behavior tag selecting one of the injectable behaviors at a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suffix {
    /// Return `true` (or `0` for `fault_return_int!`).
    True,
    /// Return `false`.
    False,
    /// Return the first caller-supplied value.
    Opt1,
    /// Return the second caller-supplied value.
    Opt2,
    /// Decrement an integer by one.
    Less,
    /// Increment an integer by one.
    More,
    /// Bitwise-invert an integer.
    Inverse,
    /// Negate a boolean.
    Flip,
    /// Skip a guarded block.
    Skip,
    /// Force a condition to `true`.
    ForceOn,
    /// Force a condition to `false`.
    ForceOff,
}

impl Suffix {
    /// Every suffix, in declaration order.
    pub const ALL: [Suffix; 11] = [
        Suffix::True,
        Suffix::False,
        Suffix::Opt1,
        Suffix::Opt2,
        Suffix::Less,
        Suffix::More,
        Suffix::Inverse,
        Suffix::Flip,
        Suffix::Skip,
        Suffix::ForceOn,
        Suffix::ForceOff,
    ];

    /// The tag as it appears in the environment variable name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Suffix::True => "TRUE",
            Suffix::False => "FALSE",
            Suffix::Opt1 => "OPT1",
            Suffix::Opt2 => "OPT2",
            Suffix::Less => "LESS",
            Suffix::More => "MORE",
            Suffix::Inverse => "INVERSE",
            Suffix::Flip => "FLIP",
            Suffix::Skip => "SKIP",
            Suffix::ForceOn => "FORCE_ON",
            Suffix::ForceOff => "FORCE_OFF",
        }
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown suffix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fault suffix: {0}")]
pub struct UnknownSuffix(pub String);

impl FromStr for Suffix {
    type Err = UnknownSuffix;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suffix::ALL
            .into_iter()
            .find(|suffix| suffix.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSuffix(s.to_string()))
    }
}
