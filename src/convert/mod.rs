//! RADMC-3D image to FITS conversion.
//!
//! Intensities are rescaled from erg s^-1 cm^-2 Hz^-1 ster^-1 to Jy/pixel
//! for a source at the configured distance, and the sky projection is
//! described with a SIN-projected RA/Dec pair plus a frequency axis.

mod config;
mod error;

pub use config::{
    DEFAULT_BANDWIDTH_MHZ, DEFAULT_DEC, DEFAULT_DISTANCE_PC, DEFAULT_RA, FitsOptions,
};
pub use error::Error;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use fitsio::compat::fitsfile::FitsFile;
use fitsio::compat::images::{ImageDescription, ImageType, WriteImage};
use ndarray::Axis;
use tracing::{debug, info};

use crate::io;
use crate::model::image::RadmcImage;
use crate::model::units::{AU_IMAGE, JANSKY, PC};

/// `<input>.fits`: the input path with `.fits` appended, not substituted.
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".fits");
    PathBuf::from(name)
}

/// Converts the image at `input` into a FITS file.
///
/// Returns the path written, which is `output` or [`default_output_path`].
pub fn image_to_fits(
    input: &Path,
    output: Option<&Path>,
    options: &FitsOptions,
) -> Result<PathBuf, Error> {
    let image = io::image::read_file(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(
        nx = image.nx(),
        ny = image.ny(),
        nlam = image.nlam(),
        stokes = image.has_stokes(),
        "read RADMC-3D image"
    );

    let output = output.map_or_else(|| default_output_path(input), Path::to_path_buf);
    write_fits(&image, &output, options)?;

    info!(input = %input.display(), output = %output.display(), "wrote FITS image");
    Ok(output)
}

/// Writes an in-memory image as a single primary HDU. Only Stokes I is
/// exported; the axes are (x, y, frequency, Stokes).
pub fn write_fits(image: &RadmcImage, output: &Path, options: &FitsOptions) -> Result<(), Error> {
    let write_err = |source| Error::Write {
        path: output.to_path_buf(),
        source,
    };

    let mut fptr = FitsFile::create(output).overwrite().open().map_err(write_err)?;
    let description = ImageDescription {
        data_type: ImageType::Double,
        dimensions: &[image.nx(), image.ny(), image.nlam(), 1],
    };
    let hdu = fptr.create_image("PRIMARY", &description).map_err(write_err)?;

    let data = jansky_per_pixel(image, options.distance_pc);
    f64::write_image(&mut fptr, &hdu, &data).map_err(write_err)?;

    for (keyword, value) in header_cards(image, options) {
        let written = match value {
            CardValue::Text(text) => hdu.write_key(&mut fptr, keyword, &text.to_string()),
            CardValue::Real(real) => hdu.write_key(&mut fptr, keyword, &real),
        };
        written.map_err(write_err)?;
    }
    Ok(())
}

/// Scale factor from specific intensity to Jy per pixel at `distance_pc`.
pub fn jansky_factor(pixel_size: [f64; 2], distance_pc: f64) -> f64 {
    let d = distance_pc * PC;
    pixel_size[0] * pixel_size[1] / (d * d) / JANSKY
}

/// Stokes I in Jy/pixel, flattened with x fastest, then y, then frequency.
fn jansky_per_pixel(image: &RadmcImage, distance_pc: f64) -> Vec<f64> {
    let conv = jansky_factor(image.pixel_size, distance_pc);
    let stokes_i = image.data.index_axis(Axis(1), 0);
    stokes_i.iter().map(|v| v * conv).collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardValue {
    Text(&'static str),
    Real(f64),
}

/// Keywords written after the image data, in output order. The structural
/// keywords (`SIMPLE`, `BITPIX`, `NAXISn`) come from the image description.
pub fn header_cards(image: &RadmcImage, options: &FitsOptions) -> Vec<(&'static str, CardValue)> {
    use CardValue::{Real, Text};

    let pixdeg_x = image.pixel_size[0] / AU_IMAGE / options.distance_pc / 3600.0;
    let pixdeg_y = image.pixel_size[1] / AU_IMAGE / options.distance_pc / 3600.0;
    let nu = image.frequencies();
    let dnu = match nu.as_slice() {
        [_] => options.bandwidth_mhz * 1e6,
        [nu0, nu1, ..] => nu1 - nu0,
        [] => 0.0,
    };

    let mut cards = vec![
        ("EPOCH", Real(2000.0)),
        ("LONPOLE", Real(180.0)),
        ("CTYPE1", Text("RA---SIN")),
        ("CRVAL1", Real(options.coord.ra_deg)),
        ("CRPIX1", Real((image.nx() as f64 + 1.0) / 2.0)),
        ("CDELT1", Real(-pixdeg_x)),
        ("CUNIT1", Text("DEG")),
        ("CTYPE2", Text("DEC--SIN")),
        ("CRVAL2", Real(options.coord.dec_deg)),
        ("CRPIX2", Real((image.ny() as f64 + 1.0) / 2.0)),
        ("CDELT2", Real(pixdeg_y)),
        ("CUNIT2", Text("DEG")),
        ("CTYPE3", Text("FREQ-LSR")),
        ("CRVAL3", Real(nu.first().copied().unwrap_or(0.0))),
        ("CRPIX3", Real(1.0)),
        ("CDELT3", Real(dnu)),
        ("CUNIT3", Text("HZ")),
        ("CTYPE4", Text("STOKES")),
        ("CRVAL4", Real(1.0)),
        ("CRPIX4", Real(1.0)),
        ("CDELT4", Real(1.0)),
        ("BUNIT", Text("JY/PIXEL")),
        ("BTYPE", Text("INTENSITY")),
        ("BSCALE", Real(1.0)),
        ("BZERO", Real(0.0)),
    ];
    if let Some(restfrq) = options.rest_frequency_hz {
        cards.push(("RESTFRQ", Real(restfrq)));
    }
    cards
}
