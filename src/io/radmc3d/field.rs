use crate::io::{error::Error, util::Real};
use crate::model::field::{ScalarField, VectorField};
use std::io::Write;

const IFORMAT: u32 = 1;

/// Cell indices `[ir, ith, iphi]` in the order RADMC-3D reads them:
/// phi outermost, then theta, with r varying fastest.
///
/// Line `iphi * nth * nr + ith * nr + ir` of a value block holds cell
/// `(ir, ith, iphi)`.
pub fn file_order(shape: (usize, usize, usize)) -> impl Iterator<Item = [usize; 3]> {
    let (nr, nth, nphi) = shape;
    (0..nphi).flat_map(move |iphi| {
        (0..nth).flat_map(move |ith| (0..nr).map(move |ir| [ir, ith, iphi]))
    })
}

/// Writes a single-valued field (`gas_temperature.inp`, `numberdens_*.inp`).
pub fn write_scalar<W: Write>(mut writer: W, field: &ScalarField) -> Result<(), Error> {
    let (nr, nth, nphi) = field.dim();
    writeln!(writer, "{IFORMAT}")?;
    writeln!(writer, "{}", nr * nth * nphi)?;
    write_block(&mut writer, field)?;
    Ok(())
}

/// Writes `gas_velocity.inp`: one `v_r v_theta v_phi` triple per cell.
pub fn write_vector<W: Write>(mut writer: W, field: &VectorField) -> Result<(), Error> {
    let (nr, nth, nphi) = field.dim();
    writeln!(writer, "{IFORMAT}")?;
    writeln!(writer, "{}", nr * nth * nphi)?;
    for [ir, ith, iphi] in file_order(field.dim()) {
        let [vr, vth, vphi] = field.at(ir, ith, iphi);
        writeln!(writer, "{} {} {}", Real(vr), Real(vth), Real(vphi))?;
    }
    Ok(())
}

/// Writes a multi-species file (`dust_density.inp`, `dust_temperature.dat`):
/// the usual header plus a species count, then one block per species.
///
/// `shape` fixes the declared cell count, so an empty species list still
/// yields a well-formed file.
pub fn write_species<W: Write>(
    mut writer: W,
    shape: (usize, usize, usize),
    blocks: &[&ScalarField],
) -> Result<(), Error> {
    let (nr, nth, nphi) = shape;
    writeln!(writer, "{IFORMAT}")?;
    writeln!(writer, "{}", nr * nth * nphi)?;
    writeln!(writer, "{}", blocks.len())?;
    for block in blocks {
        debug_assert_eq!(block.dim(), shape);
        write_block(&mut writer, block)?;
    }
    Ok(())
}

fn write_block<W: Write>(writer: &mut W, field: &ScalarField) -> Result<(), Error> {
    for [ir, ith, iphi] in file_order(field.dim()) {
        writeln!(writer, "{}", Real(field[[ir, ith, iphi]]))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn encoded(ir: usize, ith: usize, iphi: usize) -> f64 {
        (100 * iphi + 10 * ith + ir) as f64
    }

    fn lines(buf: Vec<u8>) -> Vec<String> {
        String::from_utf8(buf)
            .expect("utf8")
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn file_order_varies_radius_fastest() {
        let order: Vec<_> = file_order((2, 2, 2)).collect();
        assert_eq!(
            order,
            vec![
                [0, 0, 0],
                [1, 0, 0],
                [0, 1, 0],
                [1, 1, 0],
                [0, 0, 1],
                [1, 0, 1],
                [0, 1, 1],
                [1, 1, 1],
            ]
        );
    }

    #[test]
    fn constant_field_on_two_cubed_grid() {
        let field = Array3::from_elem((2, 2, 2), 5.0);
        let mut buf = Vec::new();
        write_scalar(&mut buf, &field).expect("write");
        let expected = "1\n8\n5.0\n5.0\n5.0\n5.0\n5.0\n5.0\n5.0\n5.0\n";
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn value_lines_follow_simulator_index() {
        let (nr, nth, nphi) = (2, 2, 2);
        let field = Array3::from_shape_fn((nr, nth, nphi), |(ir, ith, iphi)| encoded(ir, ith, iphi));
        let mut buf = Vec::new();
        write_scalar(&mut buf, &field).expect("write");
        let out = lines(buf);
        let values = &out[2..];
        assert_eq!(values.len(), nr * nth * nphi);

        for iphi in 0..nphi {
            for ith in 0..nth {
                for ir in 0..nr {
                    let line = iphi * nth * nr + ith * nr + ir;
                    let v: f64 = values[line].parse().unwrap();
                    assert_eq!(v, encoded(ir, ith, iphi), "line {line}");
                }
            }
        }
    }

    #[test]
    fn non_cubic_shape_declares_product_of_dimensions() {
        let field = Array3::from_shape_fn((3, 2, 4), |(ir, ith, iphi)| encoded(ir, ith, iphi));
        let mut buf = Vec::new();
        write_scalar(&mut buf, &field).expect("write");
        let out = lines(buf);
        assert_eq!(out[0], "1");
        assert_eq!(out[1], "24");
        assert_eq!(out.len(), 2 + 24);
        // cell (ir=2, ith=1, iphi=3) sits at 3*2*3 + 1*3 + 2 = 23
        assert_eq!(out[2 + 23].parse::<f64>().unwrap(), encoded(2, 1, 3));
    }

    #[test]
    fn vector_field_writes_three_components_per_line() {
        let shape = (2, 1, 2);
        let field = VectorField::new(
            Array3::from_elem(shape, 0.0),
            Array3::from_elem(shape, -1.5),
            Array3::from_shape_fn(shape, |(ir, _, iphi)| encoded(ir, 0, iphi)),
        )
        .unwrap();
        let mut buf = Vec::new();
        write_vector(&mut buf, &field).expect("write");
        let out = lines(buf);
        assert_eq!(&out[..2], &["1", "4"]);
        assert_eq!(out[2], "0.0 -1.5 0.0");
        assert_eq!(out[3], "0.0 -1.5 1.0");
        assert_eq!(out[4], "0.0 -1.5 100.0");
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn species_blocks_are_counted_and_concatenated() {
        let shape = (2, 2, 2);
        let a = Array3::from_elem(shape, 1.0);
        let b = Array3::from_elem(shape, 2.0);
        let mut buf = Vec::new();
        write_species(&mut buf, shape, &[&a, &b]).expect("write");
        let out = lines(buf);
        assert_eq!(&out[..3], &["1", "8", "2"]);
        let values = &out[3..];
        assert_eq!(values.len(), 2 * 8);
        assert!(values[..8].iter().all(|l| l == "1.0"));
        assert!(values[8..].iter().all(|l| l == "2.0"));
    }

    #[test]
    fn empty_species_list_still_declares_cells() {
        let mut buf = Vec::new();
        write_species(&mut buf, (3, 2, 1), &[]).expect("write");
        assert_eq!(String::from_utf8(buf).unwrap(), "1\n6\n0\n");
    }
}
