use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating an input bundle.
///
/// Each variant names the path involved; nothing is retried and files
/// already written are left in place.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create output directory '{}'", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A molecule or dust opacity table is not present in the table directory.
    #[error("required table '{}' is missing", path.display())]
    MissingTable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table exists but could not be copied into the output directory.
    #[error("failed to stage table '{}' into '{}'", from.display(), to.display())]
    Stage {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}'", file.display())]
    Write {
        file: PathBuf,
        #[source]
        source: crate::io::Error,
    },
}
