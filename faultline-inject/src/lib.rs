//! # faultline-inject
//!
//! Source tooling for [`faultline`] fault sites.
//!
//! - [`instrument`]: wraps the integer literals of a file in `fault_int!`, so
//!   every constant in a code path becomes an off-by-one or inversion site.
//! - [`sites`]: lists the environment variables a file's sites respond to.
//!
//! Both are exposed through the `faultline-inject` binary:
//!
//! ```text
//! faultline-inject instrument src/codec.rs
//! faultline-inject list src/codec.rs
//! ```

pub mod error;
pub mod instrument;
pub mod line_index;
pub mod sites;

pub use error::InjectError;
pub use instrument::{
    DEFAULT_MACRO_PATH, InstrumentOptions, Instrumented, instrument_in_place, instrument_path,
    instrument_source,
};
pub use sites::{SiteListing, list_path, list_sites};
