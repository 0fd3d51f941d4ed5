use thiserror::Error;

use crate::model::field::FieldError;
use crate::model::grid::GridError;

/// Errors that can occur while loading or evaluating a disk model.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse disk model: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid model grid: {0}")]
    Grid(#[from] GridError),

    #[error("invalid model field: {0}")]
    Field(#[from] FieldError),

    /// A `[radmc3d]` entry whose value is a table or array.
    #[error("option '{key}' must be a string, number or boolean")]
    InvalidOption { key: String },
}
