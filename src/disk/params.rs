use std::f64::consts::PI;
use std::sync::OnceLock;

use serde::Deserialize;

use super::error::Error;
use crate::io::radmc3d::RadmcOptions;
use crate::model::grid::EdgeRange;

const DEFAULT_DISK_TOML: &str = include_str!("../../resources/default.disk.toml");

static DEFAULT_PARAMS: OnceLock<DiskParams> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiskParams {
    #[serde(default)]
    pub grid: GridParams,
    #[serde(default)]
    pub temperature: TemperatureParams,
    #[serde(default)]
    pub velocity: VelocityParams,
    #[serde(default)]
    pub density: DensityParams,
    #[serde(default)]
    pub molecules: Vec<MoleculeParams>,
    #[serde(default)]
    pub dust: Vec<DustParams>,
    /// Extra `radmc3d.inp` settings, in file order.
    #[serde(default = "default_radmc3d")]
    pub radmc3d: toml::Table,
}

/// Edge ranges; radial values in AU, angles in radians.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GridParams {
    #[serde(default = "default_r")]
    pub r: EdgeRange,
    #[serde(default = "default_theta")]
    pub theta: EdgeRange,
    #[serde(default = "default_phi")]
    pub phi: EdgeRange,
}

fn default_r() -> EdgeRange {
    EdgeRange::new(0.5, 5.0, 100)
}
fn default_theta() -> EdgeRange {
    EdgeRange::new(5.0 * PI / 12.0, 7.0 * PI / 12.0, 55)
}
fn default_phi() -> EdgeRange {
    EdgeRange::new(0.0, 2.0 * PI, 150)
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            r: default_r(),
            theta: default_theta(),
            phi: default_phi(),
        }
    }
}

/// `T = t0 (r/AU)^-q`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemperatureParams {
    #[serde(default = "default_t0")]
    pub t0: f64,
    #[serde(default = "default_q")]
    pub q: f64,
}

fn default_t0() -> f64 {
    250.0
}
fn default_q() -> f64 {
    0.5
}

impl Default for TemperatureParams {
    fn default() -> Self {
        Self {
            t0: default_t0(),
            q: default_q(),
        }
    }
}

/// Keplerian rotation, `v_phi = sqrt(gm / r)`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VelocityParams {
    #[serde(default = "default_gm")]
    pub gm: f64,
}

fn default_gm() -> f64 {
    1.33e26
}

impl Default for VelocityParams {
    fn default() -> Self {
        Self { gm: default_gm() }
    }
}

/// Gas mass density with a Gaussian vertical profile and a Gaussian gap.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DensityParams {
    #[serde(default = "default_rho0")]
    pub rho0: f64,
    #[serde(default = "default_p")]
    pub p: f64,
    /// Vertical width in radians around the midplane.
    #[serde(default = "default_h")]
    pub h: f64,
    /// Gap centre in AU.
    #[serde(default = "default_r_gap")]
    pub r_gap: f64,
    /// Gap width in AU.
    #[serde(default = "default_w_gap")]
    pub w_gap: f64,
    /// Mean molecular weight.
    #[serde(default = "default_mu")]
    pub mu: f64,
}

fn default_rho0() -> f64 {
    1e-10
}
fn default_p() -> f64 {
    2.0
}
fn default_h() -> f64 {
    0.1
}
fn default_r_gap() -> f64 {
    2.0
}
fn default_w_gap() -> f64 {
    0.1
}
fn default_mu() -> f64 {
    2.35
}

impl Default for DensityParams {
    fn default() -> Self {
        Self {
            rho0: default_rho0(),
            p: default_p(),
            h: default_h(),
            r_gap: default_r_gap(),
            w_gap: default_w_gap(),
            mu: default_mu(),
        }
    }
}

/// A line-emitting molecule, `n = abundance * n_gas`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoleculeParams {
    pub name: String,
    pub abundance: f64,
}

/// A dust species, `rho_dust = dust_to_gas * rho_gas`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DustParams {
    pub name: String,
    pub dust_to_gas: f64,
}

fn default_radmc3d() -> toml::Table {
    let mut table = toml::Table::new();
    table.insert("scattering_mode_max".into(), toml::Value::Integer(0));
    table
}

impl DiskParams {
    /// The `[radmc3d]` table as simulator options, in file order.
    pub fn radmc_options(&self) -> Result<RadmcOptions, Error> {
        let mut options = RadmcOptions::empty();
        for (key, value) in &self.radmc3d {
            match value {
                toml::Value::Integer(v) => options.set(key.as_str(), v),
                toml::Value::Float(v) => options.set(key.as_str(), v),
                toml::Value::Boolean(v) => options.set(key.as_str(), u8::from(*v)),
                toml::Value::String(v) => options.set(key.as_str(), v),
                _ => return Err(Error::InvalidOption { key: key.clone() }),
            };
        }
        Ok(options)
    }
}

/// Parses `custom_toml`, or returns the embedded default model.
pub fn load_params(custom_toml: Option<&str>) -> Result<DiskParams, Error> {
    match custom_toml {
        Some(toml) => Ok(toml::from_str(toml)?),
        None => default_params().cloned(),
    }
}

pub fn default_params() -> Result<&'static DiskParams, Error> {
    if let Some(params) = DEFAULT_PARAMS.get() {
        return Ok(params);
    }
    let parsed: DiskParams = toml::from_str(DEFAULT_DISK_TOML)?;
    Ok(DEFAULT_PARAMS.get_or_init(|| parsed))
}
