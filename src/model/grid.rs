use std::f64::consts::FRAC_PI_2;
use std::fmt;

use ndarray::Array3;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Radial,
    Polar,
    Azimuthal,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Radial => write!(f, "radial"),
            Axis::Polar => write!(f, "polar"),
            Axis::Azimuthal => write!(f, "azimuthal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("the {axis} axis needs at least 2 cell edges, got {count}")]
    TooFewEdges { axis: Axis, count: usize },

    #[error("{axis} edge {index} is not a finite number")]
    NonFinite { axis: Axis, index: usize },

    #[error(
        "{axis} edges must be strictly increasing, but edge {index} ({value}) does not exceed the previous edge ({previous})"
    )]
    NotIncreasing {
        axis: Axis,
        index: usize,
        previous: f64,
        value: f64,
    },
}

/// Evenly spaced edges between `start` and `stop` (both included).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EdgeRange {
    pub start: f64,
    pub stop: f64,
    /// Number of edges, i.e. cells + 1.
    pub count: usize,
}

impl EdgeRange {
    pub fn new(start: f64, stop: f64, count: usize) -> Self {
        Self { start, stop, count }
    }

    pub fn edges(&self) -> Vec<f64> {
        linspace(self.start, self.stop, self.count)
    }
}

/// `n` evenly spaced samples over `[start, stop]`; the last sample is `stop` exactly.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            out[n - 1] = stop;
            out
        }
    }
}

/// `n` samples of `10^x` for `x` evenly spaced over `[start_exp, stop_exp]`.
pub fn logspace(start_exp: f64, stop_exp: f64, n: usize) -> Vec<f64> {
    linspace(start_exp, stop_exp, n)
        .into_iter()
        .map(|x| 10f64.powf(x))
        .collect()
}

/// Midpoints of successive pairs; `n` edges give `n - 1` centres.
pub fn midpoints(edges: &[f64]) -> Vec<f64> {
    edges.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect()
}

/// A regular spherical mesh described by its cell edges.
///
/// Lengths are in cm and angles in radians. Edges are validated on
/// construction and never change afterwards, so cell centres are computed
/// once and cached.
#[derive(Debug, Clone, PartialEq)]
pub struct SphericalGrid {
    r_edges: Vec<f64>,
    theta_edges: Vec<f64>,
    phi_edges: Vec<f64>,
    r_centers: Vec<f64>,
    theta_centers: Vec<f64>,
    phi_centers: Vec<f64>,
}

impl SphericalGrid {
    pub fn new(
        r_edges: Vec<f64>,
        theta_edges: Vec<f64>,
        phi_edges: Vec<f64>,
    ) -> Result<Self, GridError> {
        validate_edges(Axis::Radial, &r_edges)?;
        validate_edges(Axis::Polar, &theta_edges)?;
        validate_edges(Axis::Azimuthal, &phi_edges)?;

        Ok(Self {
            r_centers: midpoints(&r_edges),
            theta_centers: midpoints(&theta_edges),
            phi_centers: midpoints(&phi_edges),
            r_edges,
            theta_edges,
            phi_edges,
        })
    }

    pub fn edges(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::Radial => &self.r_edges,
            Axis::Polar => &self.theta_edges,
            Axis::Azimuthal => &self.phi_edges,
        }
    }

    pub fn centers(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::Radial => &self.r_centers,
            Axis::Polar => &self.theta_centers,
            Axis::Azimuthal => &self.phi_centers,
        }
    }

    #[inline]
    pub fn nr(&self) -> usize {
        self.r_centers.len()
    }

    #[inline]
    pub fn nth(&self) -> usize {
        self.theta_centers.len()
    }

    #[inline]
    pub fn nphi(&self) -> usize {
        self.phi_centers.len()
    }

    /// `(nr, nth, nphi)`, the shape of every field defined on this grid.
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.nr(), self.nth(), self.nphi())
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.nr() * self.nth() * self.nphi()
    }

    /// Whether the polar edges span the midplane (theta = pi/2).
    ///
    /// Axisymmetric disk densities peaked at the midplane only make sense
    /// when this holds.
    pub fn brackets_midplane(&self) -> bool {
        let first = self.theta_edges[0];
        let last = self.theta_edges[self.theta_edges.len() - 1];
        first <= FRAC_PI_2 && FRAC_PI_2 <= last
    }

    /// Evaluates `f(r, theta, phi)` at every cell centre into a dense
    /// `[ir, ith, iphi]` array.
    pub fn evaluate<F>(&self, f: F) -> Array3<f64>
    where
        F: Fn(f64, f64, f64) -> f64,
    {
        Array3::from_shape_fn(self.shape(), |(ir, ith, iphi)| {
            f(
                self.r_centers[ir],
                self.theta_centers[ith],
                self.phi_centers[iphi],
            )
        })
    }

    /// A field holding `value` in every cell.
    pub fn constant(&self, value: f64) -> Array3<f64> {
        Array3::from_elem(self.shape(), value)
    }
}

fn validate_edges(axis: Axis, edges: &[f64]) -> Result<(), GridError> {
    if edges.len() < 2 {
        return Err(GridError::TooFewEdges {
            axis,
            count: edges.len(),
        });
    }

    if let Some(index) = edges.iter().position(|e| !e.is_finite()) {
        return Err(GridError::NonFinite { axis, index });
    }

    for (i, w) in edges.windows(2).enumerate() {
        if w[1] <= w[0] {
            return Err(GridError::NotIncreasing {
                axis,
                index: i + 1,
                previous: w[0],
                value: w[1],
            });
        }
    }

    Ok(())
}
