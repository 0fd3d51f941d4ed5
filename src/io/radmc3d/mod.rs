//! Writers for the RADMC-3D input bundle.
//!
//! Each submodule serializes one file kind; [`crate::bundle`] decides which
//! files go where and in what order.

pub mod amr_grid;
pub mod config;
pub mod dustopac;
pub mod field;
pub mod lines;
pub mod wavelength;

pub use config::RadmcOptions;

pub const CONFIG_FILE: &str = "radmc3d.inp";
pub const GRID_FILE: &str = "amr_grid.inp";
pub const LINES_FILE: &str = "lines.inp";
pub const DUSTOPAC_FILE: &str = "dustopac.inp";
pub const GAS_TEMPERATURE_FILE: &str = "gas_temperature.inp";
pub const GAS_VELOCITY_FILE: &str = "gas_velocity.inp";
pub const DUST_DENSITY_FILE: &str = "dust_density.inp";
pub const DUST_TEMPERATURE_FILE: &str = "dust_temperature.dat";
pub const WAVELENGTH_FILE: &str = "wavelength_micron.inp";

pub fn numberdens_file(molecule: &str) -> String {
    format!("numberdens_{molecule}.inp")
}

/// Molecular data table the simulator expects next to `lines.inp`.
pub fn molecule_table_file(molecule: &str) -> String {
    format!("molecule_{molecule}.inp")
}

/// Dust opacity table the simulator expects next to `dustopac.inp`.
pub fn dustkappa_file(species: &str) -> String {
    format!("dustkappa_{species}.inp")
}
