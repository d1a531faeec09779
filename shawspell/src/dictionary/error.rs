use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to load a word-list or affix-table resource.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The resource file could not be read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path of the resource that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The affix table declares an encoding other than UTF-8.
    #[error("unsupported dictionary encoding `{0}`, expected UTF-8")]
    UnsupportedEncoding(String),
}
