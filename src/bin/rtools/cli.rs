use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use radmc_tools::bundle::DEFAULT_OUTPUT_DIR;
use radmc_tools::convert::{
    DEFAULT_BANDWIDTH_MHZ, DEFAULT_DEC, DEFAULT_DISTANCE_PC, DEFAULT_RA,
};

#[derive(Parser)]
#[command(
    name = "rtools",
    about = "RADMC-3D input generation and FITS export",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a RADMC-3D image (image.out) to FITS
    #[command(visible_alias = "f")]
    ToFits(ToFitsArgs),

    /// Write the RADMC-3D input bundle for a disk model
    #[command(visible_alias = "r")]
    ToRadmc3d(ToRadmc3dArgs),
}

#[derive(Args)]
pub struct ToFitsArgs {
    /// The input RADMC-3D image file (typically image.out)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output FITS file [default: <INPUT>.fits]
    #[arg(short, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub observation: ObservationOptions,
}

/// Observation metadata written to the FITS header.
#[derive(Args)]
#[command(next_help_heading = "Observation")]
pub struct ObservationOptions {
    /// Distance to the source in pc
    #[arg(long = "dist", value_name = "DISTANCE_PC", default_value_t = DEFAULT_DISTANCE_PC)]
    pub distance_pc: f64,

    /// Right ascension
    #[arg(long, value_name = "__h__m__s", default_value = DEFAULT_RA)]
    pub ra: String,

    /// Declination
    #[arg(
        long,
        value_name = "__d__m__s",
        default_value = DEFAULT_DEC,
        allow_hyphen_values = true
    )]
    pub dec: String,

    /// Bandwidth in MHz (ignored for multi-frequency images)
    #[arg(long, value_name = "BANDWIDTH_MHZ", default_value_t = DEFAULT_BANDWIDTH_MHZ)]
    pub bandwidth: f64,

    /// Line rest frequency in Hz, written as RESTFRQ
    #[arg(long = "restfreq", value_name = "HZ")]
    pub rest_frequency: Option<f64>,
}

#[derive(Args)]
pub struct ToRadmc3dArgs {
    /// Disk model (TOML file) [default: built-in example disk]
    #[arg(short, long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Directory holding molecule_<name>.inp and dustkappa_<name>.inp
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub tables: PathBuf,

    /// Thread count for the simulator, written as setthreads
    #[arg(long, value_name = "N")]
    pub threads: Option<u32>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn to_fits_defaults() {
        let cli = Cli::try_parse_from(["rtools", "to-fits", "image.out"]).unwrap();
        let Command::ToFits(args) = cli.command else {
            panic!("expected to-fits");
        };
        assert_eq!(args.input, PathBuf::from("image.out"));
        assert!(args.output.is_none());
        assert_eq!(args.observation.distance_pc, 140.0);
        assert_eq!(args.observation.ra, "15h48m05s");
        assert_eq!(args.observation.dec, "24d00m00s");
        assert_eq!(args.observation.bandwidth, 2000.0);
    }

    #[test]
    fn negative_declination_is_accepted() {
        let cli =
            Cli::try_parse_from(["rtools", "to-fits", "image.out", "--dec", "-30d00m00s"]).unwrap();
        let Command::ToFits(args) = cli.command else {
            panic!("expected to-fits");
        };
        assert_eq!(args.observation.dec, "-30d00m00s");
    }

    #[test]
    fn to_radmc3d_defaults() {
        let cli = Cli::try_parse_from(["rtools", "to-radmc3d"]).unwrap();
        let Command::ToRadmc3d(args) = cli.command else {
            panic!("expected to-radmc3d");
        };
        assert_eq!(args.output, PathBuf::from("out"));
        assert_eq!(args.tables, PathBuf::from("."));
        assert!(args.model.is_none());
        assert!(args.threads.is_none());
    }
}
