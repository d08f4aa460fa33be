//! Fault sites and their activation check.
//!
//! A [`FaultSite`] names one injection point. Location sites are built by the
//! `fault_site!()` macro from `file!()`, `line!()` and `column!()`; named sites
//! carry an explicit, location-independent name.
//!
//! Activation is the presence of an environment variable:
//!
//! ```text
//! INJECTED_FAULT_<FILE>_<LINE>_<COLUMN>[_<SUFFIX>]
//! INJECTED_FAULT_<NAME>[_<SUFFIX>]
//! ```
//!
//! The environment is read on every check. Nothing here writes to it.

use std::fmt;

use crate::perturb::FaultInt;
use crate::suffix::Suffix;

/// Prefix shared by every fault variable.
pub const FAULT_PREFIX: &str = "INJECTED_FAULT_";

/// One fault injection point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultSite {
    /// A site identified by where its macro was invoked.
    Location {
        /// Path reported by `file!()`. Only the base name is used.
        file: &'static str,
        /// Line of the invocation, 1-based.
        line: u32,
        /// Column of the invocation, 1-based. Tells apart sites on one line.
        column: u32,
    },
    /// A site with an explicit name, stable across edits of the source.
    Named(&'static str),
}

impl FaultSite {
    /// Site at a source location.
    pub const fn at(file: &'static str, line: u32, column: u32) -> Self {
        FaultSite::Location { file, line, column }
    }

    /// Site with an explicit name.
    pub const fn named(name: &'static str) -> Self {
        FaultSite::Named(name)
    }

    /// The fault identifier, without any suffix.
    pub fn id(&self) -> String {
        match *self {
            FaultSite::Location { file, line, column } => location_id(file, line, column),
            FaultSite::Named(name) => named_id(name),
        }
    }

    /// The environment variable consulted for `suffix`.
    pub fn var_name(&self, suffix: Option<Suffix>) -> String {
        with_suffix(self.id(), suffix)
    }

    /// Whether the variable for `suffix` is present in the environment.
    ///
    /// Only presence matters: an empty or non-UTF-8 value still activates.
    pub fn is_active(&self, suffix: Option<Suffix>) -> bool {
        let name = self.var_name(suffix);
        let active = std::env::var_os(&name).is_some();
        if active {
            tracing::debug!(fault = %name, "fault site activated");
        }
        active
    }

    /// `value` moved by one or inverted if a perturbation is armed.
    ///
    /// Checked in order: `LESS`, `MORE`, `INVERSE`. The first armed one wins.
    pub fn perturb_int<T: FaultInt>(&self, value: T) -> T {
        if self.is_active(Some(Suffix::Less)) {
            value.decremented()
        } else if self.is_active(Some(Suffix::More)) {
            value.incremented()
        } else if self.is_active(Some(Suffix::Inverse)) {
            value.inverted()
        } else {
            value
        }
    }

    /// `!value` if `FLIP` is armed, otherwise `value`.
    pub fn flip(&self, value: bool) -> bool {
        if self.is_active(Some(Suffix::Flip)) {
            !value
        } else {
            value
        }
    }
}

impl fmt::Display for FaultSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

/// Identifier of the location site at `file:line:column`.
///
/// Same naming as [`FaultSite::id`], for tooling that reads locations out of
/// source text instead of expanding the macros.
pub fn location_id(file: &str, line: u32, column: u32) -> String {
    let mut id = String::from(FAULT_PREFIX);
    push_normalized(&mut id, file_base_name(file));
    id.push_str(&format!("_{line}_{column}"));
    id
}

/// Identifier of the site named `name`.
pub fn named_id(name: &str) -> String {
    let mut id = String::from(FAULT_PREFIX);
    push_normalized(&mut id, name);
    id
}

/// `id` with `suffix` appended, the full variable name.
pub fn with_suffix(mut id: String, suffix: Option<Suffix>) -> String {
    if let Some(suffix) = suffix {
        id.push('_');
        id.push_str(suffix.as_str());
    }
    id
}

fn file_base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

// Uppercase ASCII, everything else non-alphanumeric becomes `_`, so that the
// variable can be exported from any POSIX shell.
fn push_normalized(out: &mut String, raw: &str) {
    out.extend(raw.chars().map(|c| {
        if c.is_ascii_alphanumeric() {
            c.to_ascii_uppercase()
        } else {
            '_'
        }
    }));
}
