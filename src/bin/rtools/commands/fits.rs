use anyhow::{Context, Result};

use radmc_tools::convert::{FitsOptions, image_to_fits};

use crate::cli::{ObservationOptions, ToFitsArgs};

pub fn run(args: ToFitsArgs) -> Result<()> {
    let options = fits_options(&args.observation)?;

    let written = image_to_fits(&args.input, args.output.as_deref(), &options)
        .context("FITS conversion failed")?;

    if args.output.is_none() {
        println!("Output fits file written to {}", written.display());
    }
    Ok(())
}

fn fits_options(obs: &ObservationOptions) -> Result<FitsOptions> {
    let mut options = FitsOptions::at(&obs.ra, &obs.dec)
        .map_err(radmc_tools::convert::Error::from)
        .context("Invalid sky position")?;
    options.distance_pc = obs.distance_pc;
    options.bandwidth_mhz = obs.bandwidth;
    options.rest_frequency_hz = obs.rest_frequency;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(ra: &str, dec: &str) -> ObservationOptions {
        ObservationOptions {
            distance_pc: 100.0,
            ra: ra.into(),
            dec: dec.into(),
            bandwidth: 500.0,
            rest_frequency: Some(2.2e11),
        }
    }

    #[test]
    fn options_carry_command_line_values() {
        let options = fits_options(&observation("00h00m00s", "-10d00m00s")).unwrap();
        assert_eq!(options.distance_pc, 100.0);
        assert_eq!(options.bandwidth_mhz, 500.0);
        assert_eq!(options.rest_frequency_hz, Some(2.2e11));
        assert_eq!(options.coord.dec_deg, -10.0);
    }

    #[test]
    fn malformed_position_is_reported() {
        let err = fits_options(&observation("15:48:05", "24d00m00s")).unwrap_err();
        assert!(err.downcast_ref::<radmc_tools::convert::Error>().is_some());
    }
}
