use crate::io::{error::Error, util::Real};
use crate::model::image::RadmcImage;
use std::io::Write;

/// Writes an image in the simulator's `image.out` layout, readable by [`super::read`].
pub fn write<W: Write>(mut writer: W, image: &RadmcImage) -> Result<(), Error> {
    let iformat = if image.has_stokes() { 3 } else { 1 };
    writeln!(writer, "{iformat}")?;
    writeln!(writer, "{} {}", image.nx(), image.ny())?;
    writeln!(writer, "{}", image.nlam())?;
    writeln!(
        writer,
        "{} {}",
        Real(image.pixel_size[0]),
        Real(image.pixel_size[1])
    )?;
    for wl in &image.wavelengths {
        writeln!(writer, "{}", Real(*wl))?;
    }

    for ilam in 0..image.nlam() {
        writeln!(writer)?;
        for iy in 0..image.ny() {
            for ix in 0..image.nx() {
                let record: Vec<String> = (0..image.nstokes())
                    .map(|s| Real(image.data[[ilam, s, iy, ix]]).to_string())
                    .collect();
                writeln!(writer, "{}", record.join(" "))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::image::read;
    use ndarray::Array4;
    use std::io::Cursor;

    #[test]
    fn written_cube_reads_back_identically() {
        let image = RadmcImage {
            pixel_size: [2.5e12, 3.0e12],
            wavelengths: vec![1300.0, 1300.5, 1301.0],
            data: Array4::from_shape_fn((3, 1, 2, 4), |(l, _, y, x)| {
                1e-20 * (1 + l * 8 + y * 4 + x) as f64
            }),
        };

        let mut buf = Vec::new();
        write(&mut buf, &image).expect("write image");
        let parsed = read(Cursor::new(buf)).expect("read image");
        assert_eq!(parsed, image);
    }

    #[test]
    fn stokes_image_uses_format_three() {
        let image = RadmcImage {
            pixel_size: [1.0, 1.0],
            wavelengths: vec![1.0],
            data: Array4::from_elem((1, 4, 1, 1), 0.5),
        };
        let mut buf = Vec::new();
        write(&mut buf, &image).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("3\n1 1\n1\n"));
        assert!(out.ends_with("\n0.5 0.5 0.5 0.5\n"));
    }
}
