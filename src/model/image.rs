use ndarray::Array4;

use super::units;

/// A RADMC-3D image (or spectral cube) as rendered by the simulator.
///
/// Intensities are in erg s^-1 cm^-2 Hz^-1 ster^-1 and laid out as
/// `[ilam, istokes, iy, ix]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadmcImage {
    /// Pixel size in cm, `[x, y]`.
    pub pixel_size: [f64; 2],
    /// Wavelength of each frame in micron.
    pub wavelengths: Vec<f64>,
    pub data: Array4<f64>,
}

impl RadmcImage {
    #[inline]
    pub fn nx(&self) -> usize {
        self.data.dim().3
    }

    #[inline]
    pub fn ny(&self) -> usize {
        self.data.dim().2
    }

    #[inline]
    pub fn nlam(&self) -> usize {
        self.wavelengths.len()
    }

    /// 1 for plain intensity images, 4 for full Stokes images.
    #[inline]
    pub fn nstokes(&self) -> usize {
        self.data.dim().1
    }

    #[inline]
    pub fn has_stokes(&self) -> bool {
        self.nstokes() == 4
    }

    /// Frequency of each frame in Hz.
    pub fn frequencies(&self) -> Vec<f64> {
        self.wavelengths
            .iter()
            .map(|&l| units::micron_to_hz(l))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn dimensions_follow_data_layout() {
        let image = RadmcImage {
            pixel_size: [1e13, 1e13],
            wavelengths: vec![1300.0, 1301.0],
            data: Array4::from_shape_fn((2, 1, 3, 4), |(l, _, y, x)| (l * 100 + y * 10 + x) as f64),
        };
        assert_eq!(image.nx(), 4);
        assert_eq!(image.ny(), 3);
        assert_eq!(image.nlam(), 2);
        assert!(!image.has_stokes());
        assert_eq!(image.nstokes(), 1);
        assert_relative_eq!(
            image.frequencies()[0],
            units::C / 0.13,
            max_relative = 1e-12
        );
    }
}
