//! Errors that can abort building or saving a tree.
//!
//! A directory that cannot be listed because of missing permissions is not an error, it is
//! simply rendered without children. Everything else ends up in a `TreeError`.

use snafu::Snafu;
use std::{io, path::PathBuf};

/// Provide an enum for all errors that might arise in this program.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum TreeError {
    /// Listing a directory failed, e.g. because it does not exist or is a file.
    #[snafu(display("Cannot read directory {}", path.display()))]
    ReadDir {
        /// Directory that was listed
        path: PathBuf,
        /// Underlying IO error
        source: io::Error,
    },

    /// The rendered tree could not be written to its output file.
    #[snafu(display("Cannot write tree to {}", path.display()))]
    WriteOutput {
        /// File that should have been written
        path: PathBuf,
        /// Underlying IO error
        source: io::Error,
    },
}
