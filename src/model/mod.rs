//! Core data structures shared by both pipelines.
//!
//! - [`grid`] – Spherical cell-edge grids, cell centres, and field evaluation.
//! - [`field`] – Scalar and vector fields, ordered species tables, and the
//!   validated [`DiskModel`](field::DiskModel) the input bundle is written from.
//! - [`image`] – RADMC-3D images and spectral cubes.
//! - [`sky`] – Equatorial coordinates parsed from sexagesimal strings.
//! - [`units`] – CGS constants.
//!
//! Every type here is immutable once built; validation happens in the
//! constructors so the writers in [`crate::io`] can assume consistent shapes.

pub mod field;
pub mod grid;
pub mod image;
pub mod sky;
pub mod units;
