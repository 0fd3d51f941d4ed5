//! CGS constants shared by the disk model and the FITS converter.

/// Astronomical unit used for grid construction [cm].
pub const AU: f64 = 1.495_978_706_91e13;

/// Astronomical unit used for angular pixel scales, matching the value the
/// radmc3dPy image export applies when writing FITS headers [cm].
pub const AU_IMAGE: f64 = 1.496e13;

/// Parsec [cm].
pub const PC: f64 = 3.085_72e18;

/// Speed of light [cm s^-1].
pub const C: f64 = 2.997_924_58e10;

/// Avogadro's number [mol^-1].
pub const AVOGADRO: f64 = 6.022e23;

/// Jansky in CGS [erg s^-1 cm^-2 Hz^-1].
pub const JANSKY: f64 = 1e-23;

/// Frequency in Hz of a wavelength given in micron.
#[inline]
pub fn micron_to_hz(lambda_micron: f64) -> f64 {
    C / (lambda_micron * 1e-4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn one_millimetre_is_roughly_300_ghz() {
        assert_relative_eq!(micron_to_hz(1000.0), 2.997_924_58e11, max_relative = 1e-12);
    }
}
