use crate::model::sky::{SkyCoord, SkyCoordError};

pub const DEFAULT_DISTANCE_PC: f64 = 140.0;
pub const DEFAULT_RA: &str = "15h48m05s";
pub const DEFAULT_DEC: &str = "24d00m00s";
pub const DEFAULT_BANDWIDTH_MHZ: f64 = 2000.0;

/// Observation metadata attached to the FITS header.
#[derive(Debug, Clone, PartialEq)]
pub struct FitsOptions {
    /// Distance to the source in parsec.
    pub distance_pc: f64,
    /// Sky position of the image centre.
    pub coord: SkyCoord,
    /// Channel width in MHz; only used when the image has a single frequency.
    pub bandwidth_mhz: f64,
    /// Line rest frequency in Hz, written as `RESTFRQ` when set.
    pub rest_frequency_hz: Option<f64>,
}

impl FitsOptions {
    /// Default options placed at the given sexagesimal position.
    pub fn at(ra: &str, dec: &str) -> Result<Self, SkyCoordError> {
        Ok(Self {
            coord: SkyCoord::from_sexagesimal(ra, dec)?,
            ..Self::default()
        })
    }
}

impl Default for FitsOptions {
    fn default() -> Self {
        Self {
            distance_pc: DEFAULT_DISTANCE_PC,
            // 15h48m05s, 24d00m00s
            coord: SkyCoord::new(15.0 * (15.0 + 48.0 / 60.0 + 5.0 / 3600.0), 24.0),
            bandwidth_mhz: DEFAULT_BANDWIDTH_MHZ,
            rest_frequency_hz: None,
        }
    }
}
