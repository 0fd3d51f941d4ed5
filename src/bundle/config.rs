use std::path::PathBuf;

use crate::io::radmc3d::{RadmcOptions, wavelength};

pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// Where and how an input bundle is written.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleConfig {
    /// Created if missing; existing files with bundle names are overwritten.
    pub output_dir: PathBuf,
    /// Directory holding `molecule_<name>.inp` and `dustkappa_<name>.inp`.
    pub tables_dir: PathBuf,
    pub options: RadmcOptions,
    /// Contents of `wavelength_micron.inp`, in micron.
    pub wavelengths: Vec<f64>,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            tables_dir: PathBuf::from("."),
            options: RadmcOptions::default(),
            wavelengths: wavelength::default_grid(),
        }
    }
}
