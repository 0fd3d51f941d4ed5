use ndarray::Array3;
use thiserror::Error;

use super::grid::SphericalGrid;

/// A dense scalar field indexed `[ir, ith, iphi]`.
pub type ScalarField = Array3<f64>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field '{field}' has shape {found:?}, expected {expected:?} to match the grid")]
    ShapeMismatch {
        field: String,
        expected: (usize, usize, usize),
        found: (usize, usize, usize),
    },

    #[error("species '{0}' appears more than once in the table")]
    DuplicateSpecies(String),

    #[error("dust temperature species {found:?} do not match dust density species {expected:?}")]
    SpeciesMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("species name must be non-empty and free of whitespace and path separators: '{0}'")]
    InvalidSpeciesName(String),
}

/// Velocity components `(v_r, v_theta, v_phi)` in cm/s over one grid.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorField {
    pub r: ScalarField,
    pub theta: ScalarField,
    pub phi: ScalarField,
}

impl VectorField {
    pub fn new(r: ScalarField, theta: ScalarField, phi: ScalarField) -> Result<Self, FieldError> {
        let expected = r.dim();
        check_shape("velocity_theta", &theta, expected)?;
        check_shape("velocity_phi", &phi, expected)?;
        Ok(Self { r, theta, phi })
    }

    pub fn zeros(shape: (usize, usize, usize)) -> Self {
        Self {
            r: Array3::zeros(shape),
            theta: Array3::zeros(shape),
            phi: Array3::zeros(shape),
        }
    }

    #[inline]
    pub fn dim(&self) -> (usize, usize, usize) {
        self.r.dim()
    }

    #[inline]
    pub fn at(&self, ir: usize, ith: usize, iphi: usize) -> [f64; 3] {
        [
            self.r[[ir, ith, iphi]],
            self.theta[[ir, ith, iphi]],
            self.phi[[ir, ith, iphi]],
        ]
    }
}

/// An ordered list of named fields.
///
/// The position of an entry is the species index the simulator assigns to
/// it: entry 0 becomes `imolspec = 1` (or dust species 1), and so on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpeciesTable {
    entries: Vec<(String, ScalarField)>,
}

impl SpeciesTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a species, keeping insertion order as the species index.
    pub fn push(&mut self, name: impl Into<String>, field: ScalarField) -> Result<(), FieldError> {
        let name = name.into();
        if name.is_empty()
            || name
                .chars()
                .any(|c| c.is_whitespace() || c == '/' || c == '\\')
        {
            return Err(FieldError::InvalidSpeciesName(name));
        }
        if self.entries.iter().any(|(n, _)| *n == name) {
            return Err(FieldError::DuplicateSpecies(name));
        }
        self.entries.push((name, field));
        Ok(())
    }

    pub fn with(mut self, name: impl Into<String>, field: ScalarField) -> Result<Self, FieldError> {
        self.push(name, field)?;
        Ok(self)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScalarField)> {
        self.entries.iter().map(|(n, f)| (n.as_str(), f))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = &ScalarField> {
        self.entries.iter().map(|(_, f)| f)
    }

    pub fn get(&self, name: &str) -> Option<&ScalarField> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, f)| f)
    }
}

/// Everything the input bundle is generated from.
///
/// Built once through [`DiskModel::new`], which checks every field against
/// the grid shape; the bundle writers rely on that and do no further checks.
#[derive(Debug, Clone, PartialEq)]
pub struct DiskModel {
    grid: SphericalGrid,
    temperature: ScalarField,
    velocity: VectorField,
    molecules: SpeciesTable,
    dust: SpeciesTable,
    dust_temperature: Option<SpeciesTable>,
}

impl DiskModel {
    pub fn new(
        grid: SphericalGrid,
        temperature: ScalarField,
        velocity: VectorField,
        molecules: SpeciesTable,
        dust: SpeciesTable,
    ) -> Result<Self, FieldError> {
        let expected = grid.shape();
        check_shape("gas_temperature", &temperature, expected)?;
        check_shape("velocity_r", &velocity.r, expected)?;
        check_shape("velocity_theta", &velocity.theta, expected)?;
        check_shape("velocity_phi", &velocity.phi, expected)?;
        for (name, field) in molecules.iter() {
            check_shape(&format!("numberdens_{name}"), field, expected)?;
        }
        for (name, field) in dust.iter() {
            check_shape(&format!("dust_density_{name}"), field, expected)?;
        }

        Ok(Self {
            grid,
            temperature,
            velocity,
            molecules,
            dust,
            dust_temperature: None,
        })
    }

    /// Replaces the default dust temperature (gas temperature reused for
    /// every species) with one field per dust species, in dust table order.
    pub fn with_dust_temperature(mut self, table: SpeciesTable) -> Result<Self, FieldError> {
        let expected = self.grid.shape();
        if !self.dust.names().eq(table.names()) {
            return Err(FieldError::SpeciesMismatch {
                expected: self.dust.names().map(String::from).collect(),
                found: table.names().map(String::from).collect(),
            });
        }
        for (name, field) in table.iter() {
            check_shape(&format!("dust_temperature_{name}"), field, expected)?;
        }
        self.dust_temperature = Some(table);
        Ok(self)
    }

    #[inline]
    pub fn grid(&self) -> &SphericalGrid {
        &self.grid
    }

    #[inline]
    pub fn temperature(&self) -> &ScalarField {
        &self.temperature
    }

    #[inline]
    pub fn velocity(&self) -> &VectorField {
        &self.velocity
    }

    #[inline]
    pub fn molecules(&self) -> &SpeciesTable {
        &self.molecules
    }

    #[inline]
    pub fn dust(&self) -> &SpeciesTable {
        &self.dust
    }

    /// Dust temperature block for each dust species, in dust table order.
    pub fn dust_temperatures(&self) -> Vec<&ScalarField> {
        match &self.dust_temperature {
            Some(table) => table.fields().collect(),
            None => self.dust.fields().map(|_| &self.temperature).collect(),
        }
    }
}

fn check_shape(
    field: &str,
    array: &ScalarField,
    expected: (usize, usize, usize),
) -> Result<(), FieldError> {
    let found = array.dim();
    if found != expected {
        return Err(FieldError::ShapeMismatch {
            field: field.to_string(),
            expected,
            found,
        });
    }
    Ok(())
}
