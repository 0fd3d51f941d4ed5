use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse RADMC-3D image: {details} (at line ~{line})")]
    Parse { line: usize, details: String },

    #[error("RADMC-3D image format code {0} is not supported (expected 1 or 3)")]
    UnsupportedImageFormat(i64),
}

impl Error {
    pub fn parse(line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            line,
            details: details.into(),
        }
    }
}
