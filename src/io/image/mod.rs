//! The simulator's native image format (`image.out`).

mod reader;
#[cfg(test)]
mod writer;

pub use reader::read;

use crate::io::error::Error;
use crate::model::image::RadmcImage;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<RadmcImage, Error> {
    let file = File::open(path)?;
    read(BufReader::new(file))
}

/// Test fixture writer; the crate only ever consumes images.
#[cfg(test)]
pub(crate) fn write_file(path: &Path, image: &RadmcImage) -> Result<(), Error> {
    use std::io::{BufWriter, Write};

    let mut writer = BufWriter::new(File::create(path)?);
    writer::write(&mut writer, image)?;
    writer.flush()?;
    Ok(())
}
