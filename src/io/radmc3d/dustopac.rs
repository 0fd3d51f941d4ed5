use crate::io::error::Error;
use crate::model::field::SpeciesTable;
use std::io::Write;

const IFORMAT: u32 = 2;
const SEPARATOR: &str = "-----------------------------";
/// Opacities come from `dustkappa_<name>.inp`.
const INPUT_STYLE_DUSTKAPPA: u32 = 1;
const THERMAL_GRAIN: u32 = 0;

pub fn write<W: Write>(mut writer: W, dust: &SpeciesTable) -> Result<(), Error> {
    writeln!(writer, "{IFORMAT}")?;
    writeln!(writer, "{}", dust.len())?;
    for name in dust.names() {
        writeln!(writer, "{SEPARATOR}")?;
        writeln!(writer, "{INPUT_STYLE_DUSTKAPPA}")?;
        writeln!(writer, "{THERMAL_GRAIN}")?;
        writeln!(writer, "{name}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn one_block_per_species() {
        let table = SpeciesTable::new()
            .with("silicate", Array3::zeros((1, 1, 1)))
            .unwrap()
            .with("carbon", Array3::zeros((1, 1, 1)))
            .unwrap();

        let mut buf = Vec::new();
        write(&mut buf, &table).expect("write dustopac.inp");
        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[..2], ["2", "2"]);
        assert_eq!(lines[2..6], [SEPARATOR, "1", "0", "silicate"]);
        assert_eq!(lines[6..10], [SEPARATOR, "1", "0", "carbon"]);
        assert_eq!(lines.len(), 10);
    }
}
