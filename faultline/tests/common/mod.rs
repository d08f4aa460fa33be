//! Shared helpers for arming fault sites from tests.

use faultline::{FaultSite, Suffix};

/// Sets a fault variable for the lifetime of the guard.
///
/// Every test arms its own sites, so guards from parallel tests never touch
/// the same variable.
pub struct EnvGuard {
    name: String,
}

impl EnvGuard {
    pub fn arm(site: FaultSite, suffix: Option<Suffix>) -> Self {
        Self::arm_with(site, suffix, "1")
    }

    pub fn arm_with(site: FaultSite, suffix: Option<Suffix>, value: &str) -> Self {
        let name = site.var_name(suffix);
        std::env::set_var(&name, value);
        Self { name }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        std::env::remove_var(&self.name);
    }
}

/// The site `by` columns to the right of `site` on the same line.
pub fn shifted(site: FaultSite, by: u32) -> FaultSite {
    match site {
        FaultSite::Location { file, line, column } => FaultSite::at(file, line, column + by),
        named => named,
    }
}
