//! An illustrative parametric protoplanetary disk.
//!
//! The model is deliberately simple: a power-law temperature, Keplerian
//! rotation, a Gaussian vertical density profile centred on the midplane and
//! a single Gaussian gap. Any other model can be fed to
//! [`crate::bundle::write_bundle`] by building a [`DiskModel`] directly.

mod error;
mod params;

pub use error::Error;
pub use params::{
    DensityParams, DiskParams, DustParams, GridParams, MoleculeParams, TemperatureParams,
    VelocityParams, default_params, load_params,
};

use std::f64::consts::FRAC_PI_2;

use tracing::{debug, warn};

use crate::model::field::{DiskModel, SpeciesTable, VectorField};
use crate::model::grid::SphericalGrid;
use crate::model::units::{AU, AVOGADRO};

/// Builds the grid in cm from the AU/radian ranges in `params`.
///
/// Radial edges are spaced in AU and converted afterwards, so every edge is
/// exactly `AU` times its AU value.
pub fn build_grid(params: &GridParams) -> Result<SphericalGrid, Error> {
    let r_edges = params.r.edges().into_iter().map(|au| au * AU).collect();
    let grid = SphericalGrid::new(r_edges, params.theta.edges(), params.phi.edges())?;
    if !grid.brackets_midplane() {
        warn!(
            theta_min = params.theta.start,
            theta_max = params.theta.stop,
            "polar edges do not include the midplane (theta = pi/2)"
        );
    }
    Ok(grid)
}

/// Evaluates every field of the disk at the cell centres.
pub fn build_model(params: &DiskParams) -> Result<DiskModel, Error> {
    let grid = build_grid(&params.grid)?;
    debug!(
        nr = grid.nr(),
        nth = grid.nth(),
        nphi = grid.nphi(),
        "evaluating disk fields"
    );

    let t = &params.temperature;
    let temperature = grid.evaluate(|r, _, _| t.t0 * (r / AU).powf(-t.q));

    let gm = params.velocity.gm;
    let velocity = VectorField::new(
        grid.constant(0.0),
        grid.constant(0.0),
        grid.evaluate(|r, _, _| (gm / r).sqrt()),
    )?;

    let d = &params.density;
    let rho = grid.evaluate(|r, th, _| gas_density(d, r, th));
    let gas_number = rho.mapv(|v| AVOGADRO * v / d.mu);

    let mut molecules = SpeciesTable::new();
    for mol in &params.molecules {
        molecules.push(mol.name.as_str(), gas_number.mapv(|n| mol.abundance * n))?;
    }

    let mut dust = SpeciesTable::new();
    for species in &params.dust {
        dust.push(species.name.as_str(), rho.mapv(|v| species.dust_to_gas * v))?;
    }

    Ok(DiskModel::new(grid, temperature, velocity, molecules, dust)?)
}

/// Gas mass density in g cm^-3 at radius `r` (cm) and polar angle `theta`.
pub fn gas_density(d: &DensityParams, r: f64, theta: f64) -> f64 {
    let r_au = r / AU;
    let vertical = (-((theta - FRAC_PI_2) / d.h).powi(2)).exp();
    let gap = 1.0 - (-((r_au - d.r_gap) / d.w_gap).powi(2)).exp();
    d.rho0 * r_au.powf(-d.p) * vertical * gap
}
