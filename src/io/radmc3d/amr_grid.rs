use crate::io::{error::Error, util};
use crate::model::grid::{Axis, SphericalGrid};
use std::io::Write;

const IFORMAT: u32 = 1;
const GRID_STYLE_REGULAR: u32 = 0;
const COORD_SYSTEM_SPHERICAL: u32 = 100;
const GRID_INFO_OFF: u32 = 0;
/// All three dimensions are active.
const INCLUDE_DIMENSIONS: &str = "1 1 1";

pub fn write<W: Write>(mut writer: W, grid: &SphericalGrid) -> Result<(), Error> {
    writeln!(writer, "{IFORMAT}")?;
    writeln!(writer, "{GRID_STYLE_REGULAR}")?;
    writeln!(writer, "{COORD_SYSTEM_SPHERICAL}")?;
    writeln!(writer, "{GRID_INFO_OFF}")?;
    writeln!(writer, "{INCLUDE_DIMENSIONS}")?;
    writeln!(writer, "{} {} {}", grid.nr(), grid.nth(), grid.nphi())?;
    for axis in [Axis::Radial, Axis::Polar, Axis::Azimuthal] {
        writeln!(writer, "{}", util::join_reals(grid.edges(axis)))?;
    }
    Ok(())
}
