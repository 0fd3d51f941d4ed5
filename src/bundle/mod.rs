//! Generation of the RADMC-3D input bundle.
//!
//! [`write_bundle`] stages the molecular and dust opacity tables first, so a
//! missing table aborts the run before any model file exists, and then writes
//! the bundle files in a fixed order. Output depends only on the model and
//! the configuration; re-running produces byte-identical files.

mod config;
mod error;

pub use config::{BundleConfig, DEFAULT_OUTPUT_DIR};
pub use error::Error;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::io::{self, radmc3d};
use crate::model::field::DiskModel;

/// Files produced by one [`write_bundle`] call, in the order they were created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleReport {
    pub output_dir: PathBuf,
    pub staged: Vec<PathBuf>,
    pub written: Vec<PathBuf>,
}

pub fn write_bundle(model: &DiskModel, config: &BundleConfig) -> Result<BundleReport, Error> {
    let dir = config.output_dir.as_path();
    fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let grid = model.grid();
    if !grid.brackets_midplane() {
        warn!("polar grid does not include the midplane; disk densities may be off-grid");
    }

    let mut report = BundleReport {
        output_dir: dir.to_path_buf(),
        ..BundleReport::default()
    };

    let tables = model
        .molecules()
        .names()
        .map(radmc3d::molecule_table_file)
        .chain(model.dust().names().map(radmc3d::dustkappa_file));
    for table in tables {
        report.staged.push(stage_table(&config.tables_dir, dir, &table)?);
    }

    write_file(dir, radmc3d::CONFIG_FILE, &mut report, |w| {
        radmc3d::config::write(w, &config.options)
    })?;
    write_file(dir, radmc3d::GRID_FILE, &mut report, |w| {
        radmc3d::amr_grid::write(w, grid)
    })?;
    write_file(dir, radmc3d::LINES_FILE, &mut report, |w| {
        radmc3d::lines::write(w, model.molecules())
    })?;
    write_file(dir, radmc3d::DUSTOPAC_FILE, &mut report, |w| {
        radmc3d::dustopac::write(w, model.dust())
    })?;
    for (name, density) in model.molecules().iter() {
        write_file(dir, &radmc3d::numberdens_file(name), &mut report, |w| {
            radmc3d::field::write_scalar(w, density)
        })?;
    }
    write_file(dir, radmc3d::GAS_TEMPERATURE_FILE, &mut report, |w| {
        radmc3d::field::write_scalar(w, model.temperature())
    })?;
    write_file(dir, radmc3d::GAS_VELOCITY_FILE, &mut report, |w| {
        radmc3d::field::write_vector(w, model.velocity())
    })?;
    let densities: Vec<_> = model.dust().fields().collect();
    write_file(dir, radmc3d::DUST_DENSITY_FILE, &mut report, |w| {
        radmc3d::field::write_species(w, grid.shape(), &densities)
    })?;
    write_file(dir, radmc3d::DUST_TEMPERATURE_FILE, &mut report, |w| {
        radmc3d::field::write_species(w, grid.shape(), &model.dust_temperatures())
    })?;
    write_file(dir, radmc3d::WAVELENGTH_FILE, &mut report, |w| {
        radmc3d::wavelength::write(w, &config.wavelengths)
    })?;

    info!(
        output = %dir.display(),
        cells = grid.cell_count(),
        molecules = model.molecules().len(),
        dust_species = model.dust().len(),
        files = report.written.len() + report.staged.len(),
        "wrote RADMC-3D input bundle"
    );
    Ok(report)
}

fn stage_table(tables_dir: &Path, output_dir: &Path, name: &str) -> Result<PathBuf, Error> {
    let from = tables_dir.join(name);
    let to = output_dir.join(name);
    if let Err(source) = fs::metadata(&from) {
        return Err(Error::MissingTable { path: from, source });
    }
    // Staging onto itself would truncate the table.
    if !same_file(&from, &to) {
        fs::copy(&from, &to).map_err(|source| Error::Stage {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;
    }
    debug!(table = %to.display(), "staged table");
    Ok(to)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn write_file<F>(dir: &Path, name: &str, report: &mut BundleReport, write: F) -> Result<(), Error>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), io::Error>,
{
    let path = dir.join(name);
    let wrap = |source: io::Error| Error::Write {
        file: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(|e| wrap(e.into()))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer).map_err(wrap)?;
    writer.flush().map_err(|e| wrap(e.into()))?;

    debug!(file = %path.display(), "wrote bundle file");
    report.written.push(path);
    Ok(())
}
