//! Tools for both ends of a RADMC-3D radiative-transfer run: writing the
//! simulator's native input bundle from a disk model, and exporting the
//! images it renders as FITS.
//!
//! # Features
//!
//! - **Input bundle generation**: spherical grid, gas temperature and velocity,
//!   molecular number densities, dust densities and temperatures, line and
//!   dust opacity configuration, and the wavelength grid, written in the
//!   layout the simulator reads
//! - **Parametric disk**: an illustrative disk model configured through TOML
//! - **FITS export**: `image.out` files rescaled to Jy/pixel with a
//!   SIN-projected sky header and a frequency axis
//!
//! # Quick Start
//!
//! Any model can be written as long as it supplies fields on a
//! [`SphericalGrid`]; the tables for every molecule and dust species must be
//! present in [`BundleConfig::tables_dir`].
//!
//! ```
//! use radmc_tools::{BundleConfig, DiskModel, SpeciesTable, SphericalGrid, VectorField};
//! use radmc_tools::write_bundle;
//! use std::f64::consts::PI;
//!
//! let grid = SphericalGrid::new(
//!     vec![1.0e13, 2.0e13, 3.0e13],
//!     vec![0.4 * PI, 0.5 * PI, 0.6 * PI],
//!     vec![0.0, PI, 2.0 * PI],
//! )?;
//! let temperature = grid.evaluate(|r, _, _| 250.0 * (r / 1.5e13).powf(-0.5));
//! let model = DiskModel::new(
//!     grid.clone(),
//!     temperature,
//!     VectorField::zeros(grid.shape()),
//!     SpeciesTable::new(),
//!     SpeciesTable::new(),
//! )?;
//!
//! let dir = tempfile::tempdir()?;
//! let config = BundleConfig {
//!     output_dir: dir.path().join("out"),
//!     ..BundleConfig::default()
//! };
//! let report = write_bundle(&model, &config)?;
//!
//! assert_eq!(report.written.len(), 9);
//! assert!(report.staged.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`model`] – Grids, fields, species tables, images and sky coordinates
//! - [`disk`] – Parametric disk model and its TOML configuration
//! - [`bundle`] – Input-bundle generation
//! - [`convert`] – Image to FITS conversion
//! - [`io`] – Bundle writers and the `image.out` reader

pub mod bundle;
pub mod convert;
pub mod disk;
pub mod io;
pub mod model;

pub use model::field::{DiskModel, FieldError, ScalarField, SpeciesTable, VectorField};
pub use model::grid::{Axis, EdgeRange, GridError, SphericalGrid};
pub use model::image::RadmcImage;
pub use model::sky::{SkyCoord, SkyCoordError};

pub use bundle::{BundleConfig, BundleReport, write_bundle};
pub use convert::{FitsOptions, image_to_fits};
pub use disk::{DiskParams, build_model, load_params};
pub use io::radmc3d::RadmcOptions;
