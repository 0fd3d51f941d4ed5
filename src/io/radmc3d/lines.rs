use crate::io::error::Error;
use crate::model::field::SpeciesTable;
use std::io::Write;

const IFORMAT: u32 = 2;
/// Molecular data tables are read from `molecule_<name>.inp` in LAMDA (Leiden) format.
const DATA_FORMAT: &str = "leiden";

pub fn write<W: Write>(mut writer: W, molecules: &SpeciesTable) -> Result<(), Error> {
    writeln!(writer, "{IFORMAT}")?;
    writeln!(writer, "{}", molecules.len())?;
    for name in molecules.names() {
        // no collision partners for LTE level populations
        writeln!(writer, "{name}   {DATA_FORMAT}   0   0   0")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn one_line_per_molecule_in_table_order() {
        let field = Array3::zeros((1, 1, 1));
        let table = SpeciesTable::new()
            .with("13co", field.clone())
            .unwrap()
            .with("c18o", field)
            .unwrap();

        let mut buf = Vec::new();
        write(&mut buf, &table).expect("write lines.inp");
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(
            out,
            "2\n2\n13co   leiden   0   0   0\nc18o   leiden   0   0   0\n"
        );
    }

    #[test]
    fn empty_table_declares_zero_molecules() {
        let mut buf = Vec::new();
        write(&mut buf, &SpeciesTable::new()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "2\n0\n");
    }
}
