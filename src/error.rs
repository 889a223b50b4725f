use std::{io, path::PathBuf};

/// Errors returned when reading word input for the [`words`] helpers.
///
/// [`words`]: crate::words
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The file at `path` is missing or cannot be opened.
    #[error("file {} could not be opened", path.display())]
    Open {
        /// The path that was opened.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// An I/O error occurred while reading the input stream.
    #[error("failed to read input")]
    Read {
        /// The underlying I/O error.
        #[from]
        source: io::Error,
    },
}
