use std::fmt;

/// Formats a real number in its shortest round-trip form, always keeping a
/// decimal point or an exponent (`5.0`, `0.25`, `1e-10`).
///
/// RADMC-3D reads these files with Fortran list-directed input, which
/// accepts every form produced here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Real(pub f64);

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Joins values with single spaces, as used for the edge arrays of `amr_grid.inp`.
pub fn join_reals(values: &[f64]) -> String {
    let mut out = String::with_capacity(values.len() * 24);
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&Real(*v).to_string());
    }
    out
}
