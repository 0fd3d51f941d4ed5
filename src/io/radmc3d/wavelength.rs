use crate::io::{error::Error, util::Real};
use crate::model::grid::logspace;
use std::io::Write;

pub const DEFAULT_COUNT: usize = 100;
pub const DEFAULT_MIN_MICRON: f64 = 1e-1;
pub const DEFAULT_MAX_MICRON: f64 = 1e4;

/// Log-spaced wavelengths in micron from `min` to `max` inclusive.
pub fn log_grid(min_micron: f64, max_micron: f64, count: usize) -> Vec<f64> {
    logspace(min_micron.log10(), max_micron.log10(), count)
}

pub fn default_grid() -> Vec<f64> {
    log_grid(DEFAULT_MIN_MICRON, DEFAULT_MAX_MICRON, DEFAULT_COUNT)
}

/// Writes `wavelength_micron.inp`: the count, then one wavelength per line.
pub fn write<W: Write>(mut writer: W, wavelengths: &[f64]) -> Result<(), Error> {
    writeln!(writer, "{}", wavelengths.len())?;
    for wl in wavelengths {
        writeln!(writer, "{}", Real(*wl))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_grid_spans_five_decades() {
        let grid = default_grid();
        assert_eq!(grid.len(), 100);
        assert_relative_eq!(grid[0], 0.1, max_relative = 1e-12);
        assert_relative_eq!(grid[99], 1e4, max_relative = 1e-12);
        let ratio = grid[1] / grid[0];
        assert_relative_eq!(grid[51] / grid[50], ratio, max_relative = 1e-9);
    }

    #[test]
    fn writes_count_then_values() {
        let mut buf = Vec::new();
        write(&mut buf, &[0.5, 1.0, 1000.0]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "3\n0.5\n1.0\n1000.0\n");
    }
}
