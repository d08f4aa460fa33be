//! Error types for source instrumentation and listing.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, rewriting or scanning a source file.
#[derive(Debug, Error)]
pub enum InjectError {
    /// The file could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The instrumented file could not be written back.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not valid Rust. Nothing was written.
    #[error("{} does not parse as Rust", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },

    /// The rewritten source no longer parses. Nothing was written.
    #[error("instrumented {} no longer parses", path.display())]
    Unparseable {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },

    /// A token reported a position outside the source text.
    #[error("{}:{line}:{column} is outside the source text", path.display())]
    Span {
        path: PathBuf,
        line: usize,
        column: usize,
    },
}
