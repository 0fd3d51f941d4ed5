//! Readers and writers for the file formats on both sides of a RADMC-3D run.
//!
//! - [`radmc3d`] – Writers for the simulator's input bundle (`amr_grid.inp`,
//!   `lines.inp`, field files, ...).
//! - [`image`] – Reader for the simulator's `image.out`.
//!
//! FITS output goes through `fitsio` in [`crate::convert`].
//!
//! All writers take any [`std::io::Write`] and the image reader any
//! [`std::io::BufRead`], so they can be exercised on in-memory buffers.

pub mod error;
pub mod image;
pub mod radmc3d;
pub mod util;

pub use error::Error;
