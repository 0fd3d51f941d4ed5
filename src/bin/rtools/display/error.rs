use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

/// Hints for the most specific library error found in the chain.
fn collect_hints(err: &Error) -> Vec<String> {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<radmc_tools::bundle::Error>() {
            return bundle_hints(e);
        }
        if let Some(e) = cause.downcast_ref::<radmc_tools::convert::Error>() {
            return convert_hints(e);
        }
        if let Some(e) = cause.downcast_ref::<radmc_tools::disk::Error>() {
            return disk_hints(e);
        }
        if let Some(e) = cause.downcast_ref::<std::io::Error>() {
            return std_io_hints(e);
        }
    }
    Vec::new()
}

fn bundle_hints(err: &radmc_tools::bundle::Error) -> Vec<String> {
    use radmc_tools::bundle::Error as BundleError;

    match err {
        BundleError::MissingTable { path, .. } => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let mut hints = vec![format!("Place {name} in the table directory")];
            if name.starts_with("molecule_") {
                hints.push("Molecular data files in LAMDA format are available from the Leiden database".into());
            } else {
                hints.push("Dust opacity tables are dustkappa_<species>.inp files".into());
            }
            hints.push("Point --tables at the directory holding the tables".into());
            hints
        }
        BundleError::CreateDir { .. } => vec![
            "Check that the parent of the output directory is writable".into(),
            "Choose another location with -o/--output".into(),
        ],
        BundleError::Stage { .. } | BundleError::Write { .. } => vec![
            "Check permissions and free space in the output directory".into(),
        ],
    }
}

fn convert_hints(err: &radmc_tools::convert::Error) -> Vec<String> {
    use radmc_tools::convert::Error as ConvertError;
    use radmc_tools::io::Error as IoError;

    match err {
        ConvertError::Read { source, .. } => match source {
            IoError::Io { source } if source.kind() == std::io::ErrorKind::NotFound => vec![
                "The image file does not exist".into(),
                "RADMC-3D writes image.out in the directory it was run from".into(),
            ],
            IoError::UnsupportedImageFormat(_) => vec![
                "Only plain (iformat 1) and Stokes (iformat 3) images are supported".into(),
            ],
            IoError::Parse { line, .. } => vec![
                format!("Inspect the image around line {line}"),
                "The file may be truncated if the simulator was interrupted".into(),
            ],
            _ => vec!["Verify the input is an image.out written by RADMC-3D".into()],
        },
        ConvertError::Write { .. } => vec![
            "Check that the output location is writable".into(),
        ],
        ConvertError::Coord(_) => vec![
            "Right ascension is written as 15h48m05s".into(),
            "Declination is written as 24d00m00s or -24d00m00s".into(),
        ],
    }
}

fn disk_hints(err: &radmc_tools::disk::Error) -> Vec<String> {
    use radmc_tools::disk::Error as DiskError;

    match err {
        DiskError::Parse(_) => vec![
            "The model file has invalid TOML syntax or unknown value types".into(),
            "Grid ranges are tables of start, stop and count".into(),
        ],
        DiskError::Grid(_) => vec![
            "Each grid range needs stop > start and count >= 2".into(),
        ],
        DiskError::Field(_) => vec![
            "Molecule and dust names must be unique and free of spaces and slashes".into(),
        ],
        DiskError::InvalidOption { .. } => vec![
            "Values in [radmc3d] must be plain numbers, strings or booleans".into(),
        ],
    }
}

fn std_io_hints(err: &std::io::Error) -> Vec<String> {
    use std::io::ErrorKind;

    match err.kind() {
        ErrorKind::NotFound => vec![
            "Check that the file path is correct".into(),
        ],
        ErrorKind::PermissionDenied => vec![
            "Check file permissions with `ls -la`".into(),
        ],
        _ => Vec::new(),
    }
}
