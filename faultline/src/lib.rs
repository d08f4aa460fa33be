//! # Faultline
//!
//! Environment-driven fault injection for exercising error paths.
//!
//! A fault site is an inline check placed in otherwise normal code. When the
//! environment variable named after the site is present, the site simulates a
//! failure instead of running normally: an early return, a flipped boolean, an
//! integer off by one, a forced condition. When it is absent, which is the
//! normal case, the code behaves exactly as if it were not instrumented.
//!
//! ## Quick Start
//!
//! ```rust
//! use faultline::{fault_int, fault_return_val};
//!
//! fn read_header(buf: &[u8]) -> Result<usize, &'static str> {
//!     fault_return_val!(Err("short read"));
//!     Ok(fault_int!(buf.len()))
//! }
//!
//! assert_eq!(read_header(b"abcd"), Ok(4));
//! ```
//!
//! Arming a site happens outside the process, before it starts:
//!
//! ```text
//! INJECTED_FAULT_HEADER_RS_4_5=1 ./server          # read_header returns Err
//! INJECTED_FAULT_HEADER_RS_5_8_MORE=1 ./server     # length reported one too long
//! ```
//!
//! `faultline-inject list` prints the variables for every site in a file.
//!
//! ## Sites
//!
//! | Macro | Variables, in check order | Armed behavior |
//! |-------|---------------------------|----------------|
//! | [`fault_active!`] | bare | evaluates to `true` |
//! | [`fault_return!`] | bare | `return;` |
//! | [`fault_return_int!`] | `_TRUE` | `return 0;` |
//! | [`fault_conditional!`] | `_SKIP` | skips the block |
//! | [`fault_return_bool!`] | `_TRUE`, `_FALSE` | `return true;` / `return false;` |
//! | [`fault_return_val!`] | bare | `return value;` |
//! | [`fault_return_val2!`] | `_OPT1`, `_OPT2` | `return first;` / `return second;` |
//! | [`fault_break!`] | bare | `break;` |
//! | [`fault_int!`] | `_LESS`, `_MORE`, `_INVERSE` | `n - 1` / `n + 1` / `!n` |
//! | [`fault_flip!`] | `_FLIP` | `!b` |
//! | [`fault_if_cond!`] | `_FORCE_ON`, `_FORCE_OFF` | `true` / `false` |
//!
//! ## Identity
//!
//! A site is named after the base name of its file, its line and its column,
//! so two sites on the same line stay distinct. Sites expanded from inside
//! another macro share the location of the outer invocation; give those an
//! explicit site with `site: FaultSite::named("...")`. Two files with the same
//! base name in different directories can collide in the same way.
//!
//! File and site names are uppercased and every character other than an ASCII
//! letter or digit becomes `_`, so that each variable can be exported from a
//! shell. Names that differ only in case or punctuation therefore collide too:
//! `Foo.rs` and `foo.rs`, or `a-b.rs` and `a_b.rs`, give the same identifier
//! for the same line and column.

#![deny(missing_docs)]

pub mod kind;
mod macros;
pub mod perturb;
pub mod site;
pub mod suffix;

pub use kind::FaultKind;
pub use perturb::FaultInt;
pub use site::{FAULT_PREFIX, FaultSite, location_id, named_id, with_suffix};
pub use suffix::{Suffix, UnknownSuffix};
