use std::path::PathBuf;

use thiserror::Error;

use crate::model::sky::SkyCoordError;

/// Errors that can occur while converting an image to FITS.
#[derive(Debug, Error)]
pub enum Error {
    /// The input image could not be opened or parsed.
    #[error("failed to read image '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: crate::io::Error,
    },

    /// The FITS file could not be created or written.
    #[error("failed to write FITS file '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: fitsio::compat::errors::Error,
    },

    #[error("invalid sky coordinate")]
    Coord(#[from] SkyCoordError),
}
