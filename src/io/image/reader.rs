use crate::io::error::Error;
use crate::model::image::RadmcImage;
use ndarray::Array4;
use std::io::BufRead;

/// Reads a RADMC-3D `image.out`.
///
/// Layout: format code (1 = intensity, 3 = full Stokes), `nx ny`, the
/// number of wavelengths, the pixel size in cm, one wavelength per line in
/// micron, then the pixel records with x varying fastest, then y, then
/// wavelength. Stokes records carry `I Q U V` on one line.
pub fn read<R: BufRead>(mut reader: R) -> Result<RadmcImage, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse(&text)
}

fn parse(text: &str) -> Result<RadmcImage, Error> {
    let mut tokens = Tokens::new(text);

    let iformat = tokens.next_i64("image format code")?;
    let nstokes = match iformat {
        1 => 1,
        3 => 4,
        other => return Err(Error::UnsupportedImageFormat(other)),
    };

    let nx = tokens.next_count("nx")?;
    let ny = tokens.next_count("ny")?;
    let nlam = tokens.next_count("number of wavelengths")?;

    // Every value takes at least one byte, so a header claiming more values
    // than the file has bytes is corrupt and must not size an allocation.
    let nvalues = nx
        .checked_mul(ny)
        .and_then(|n| n.checked_mul(nlam))
        .and_then(|n| n.checked_mul(nstokes))
        .filter(|&n| n <= text.len())
        .ok_or_else(|| {
            Error::parse(
                tokens.line(),
                format!(
                    "header declares {nx}x{ny} pixels at {nlam} wavelengths, \
                     more than the file can hold"
                ),
            )
        })?;

    let pixel_size = [
        tokens.next_positive("pixel size x")?,
        tokens.next_positive("pixel size y")?,
    ];

    let mut wavelengths = Vec::with_capacity(nlam);
    for _ in 0..nlam {
        wavelengths.push(tokens.next_positive("wavelength")?);
    }

    let mut values = Vec::with_capacity(nvalues);
    for _ in 0..nvalues {
        values.push(tokens.next_f64("pixel value")?);
    }

    if let Some((line, token)) = tokens.next_token() {
        return Err(Error::parse(
            line,
            format!("unexpected trailing data '{token}' after {} pixel records", nx * ny * nlam),
        ));
    }

    // Records arrive as (wavelength, y, x, stokes); the array is indexed
    // (wavelength, stokes, y, x).
    let records = Array4::from_shape_vec((nlam, ny, nx, nstokes), values)
        .map_err(|e| Error::parse(tokens.line(), e.to_string()))?;
    let data = records.permuted_axes([0, 3, 1, 2]).as_standard_layout().into_owned();

    Ok(RadmcImage {
        pixel_size,
        wavelengths,
        data,
    })
}

/// Whitespace-separated tokens borrowed from the file text, tagged with
/// their 1-based line number.
struct Tokens<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    words: std::str::SplitWhitespace<'a>,
    line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            words: "".split_whitespace(),
            line: 0,
        }
    }

    /// Line of the most recently returned token, or the last line once the
    /// input is exhausted.
    fn line(&self) -> usize {
        self.line
    }

    fn next_token(&mut self) -> Option<(usize, &'a str)> {
        loop {
            if let Some(word) = self.words.next() {
                return Some((self.line, word));
            }
            let (i, line) = self.lines.next()?;
            self.line = i + 1;
            self.words = line.split_whitespace();
        }
    }

    fn next_raw(&mut self, what: &str) -> Result<(usize, &'a str), Error> {
        self.next_token()
            .ok_or_else(|| Error::parse(self.line, format!("file ended while reading {what}")))
    }

    fn next_i64(&mut self, what: &str) -> Result<i64, Error> {
        let (ln, t) = self.next_raw(what)?;
        t.parse::<i64>()
            .map_err(|_| Error::parse(ln, format!("invalid {what}: '{t}'")))
    }

    fn next_count(&mut self, what: &str) -> Result<usize, Error> {
        let (ln, t) = self.next_raw(what)?;
        match t.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(Error::parse(
                ln,
                format!("{what} must be a positive integer, got '{t}'"),
            )),
        }
    }

    fn next_real(&mut self, what: &str) -> Result<(usize, f64), Error> {
        let (ln, t) = self.next_raw(what)?;
        parse_fortran_real(t)
            .map(|v| (ln, v))
            .ok_or_else(|| Error::parse(ln, format!("invalid {what}: '{t}'")))
    }

    fn next_f64(&mut self, what: &str) -> Result<f64, Error> {
        self.next_real(what).map(|(_, v)| v)
    }

    fn next_positive(&mut self, what: &str) -> Result<f64, Error> {
        let (ln, value) = self.next_real(what)?;
        if value > 0.0 && value.is_finite() {
            Ok(value)
        } else {
            Err(Error::parse(ln, format!("{what} must be positive, got {value}")))
        }
    }
}

/// Accepts Fortran `D` exponents (`1.0D-03`) alongside the usual forms.
fn parse_fortran_real(token: &str) -> Option<f64> {
    token
        .parse::<f64>()
        .ok()
        .or_else(|| token.replace(['D', 'd'], "E").parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TWO_BY_THREE: &str = "           1
           2           3
           1
  1.4959787070000000E+13  1.4959787070000000E+13
  1.3003000000000000E+03

  1.0000000000000000E-20
  2.0000000000000000E-20
  3.0000000000000000E-20
  4.0000000000000000E-20
  5.0000000000000000E-20
  6.0000000000000000E-20
";

    #[test]
    fn reads_single_frame_intensity_image() {
        let image = read(Cursor::new(TWO_BY_THREE)).expect("read image");
        assert_eq!(image.nx(), 2);
        assert_eq!(image.ny(), 3);
        assert_eq!(image.nlam(), 1);
        assert!(!image.has_stokes());
        assert_eq!(image.wavelengths, vec![1300.3]);
        assert_eq!(image.pixel_size, [1.495978707e13, 1.495978707e13]);
        // x fastest: second record is (ix=1, iy=0), third is (ix=0, iy=1)
        assert_eq!(image.data[[0, 0, 0, 1]], 2e-20);
        assert_eq!(image.data[[0, 0, 1, 0]], 3e-20);
        assert_eq!(image.data[[0, 0, 2, 1]], 6e-20);
    }

    #[test]
    fn reads_stokes_records() {
        let text = "3\n1 1\n2\n1e13 1e13\n1000.0\n1001.0\n\n1 2 3 4\n\n5 6 7 8\n";
        let image = read(Cursor::new(text)).expect("read stokes image");
        assert!(image.has_stokes());
        assert_eq!(image.nlam(), 2);
        assert_eq!(image.data[[0, 3, 0, 0]], 4.0);
        assert_eq!(image.data[[1, 0, 0, 0]], 5.0);
        assert_eq!(image.data[[1, 2, 0, 0]], 7.0);
    }

    #[test]
    fn accepts_fortran_double_exponents() {
        let text = "1\n1 1\n1\n1.0D13 1.0D13\n1.3D3\n\n2.5D-20\n";
        let image = read(Cursor::new(text)).expect("read");
        assert_eq!(image.data[[0, 0, 0, 0]], 2.5e-20);
        assert_eq!(image.wavelengths[0], 1300.0);
    }

    #[test]
    fn rejects_unsupported_format_code() {
        let err = read(Cursor::new("2\n1 1\n1\n1 1\n1\n1\n")).expect_err("should fail");
        assert!(matches!(err, Error::UnsupportedImageFormat(2)));
    }

    #[test]
    fn reports_truncated_pixel_data() {
        let truncated = TWO_BY_THREE.lines().take(9).collect::<Vec<_>>().join("\n");
        let err = read(Cursor::new(truncated)).expect_err("should fail");
        match err {
            Error::Parse { details, .. } => {
                assert!(details.contains("pixel value"), "{details}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reports_bad_header_line() {
        let err = read(Cursor::new("1\n2 x\n1\n")).expect_err("should fail");
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn rejects_trailing_values() {
        let text = format!("{TWO_BY_THREE}  7.0E-20\n");
        let err = read(Cursor::new(text)).expect_err("should fail");
        assert!(matches!(err, Error::Parse { line: 13, .. }));
    }

    #[test]
    fn rejects_pixel_count_that_overflows() {
        let err = read(Cursor::new("1\n4294967296 4294967296\n1\n1 1\n1\n1.0\n"))
            .expect_err("should fail");
        assert!(matches!(err, Error::Parse { line: 3, .. }), "{err}");
    }

    #[test]
    fn rejects_pixel_count_larger_than_file() {
        let err = read(Cursor::new("1\n100000 100000\n1\n1 1\n1\n1.0\n"))
            .expect_err("should fail");
        match err {
            Error::Parse { line, details } => {
                assert_eq!(line, 3);
                assert!(details.contains("100000x100000"), "{details}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn truncated_stokes_record_reports_last_line() {
        let err = read(Cursor::new("3\n1 1\n1\n1e13 1e13\n1000.0\n\n1 2 3\n"))
            .expect_err("should fail");
        assert!(matches!(err, Error::Parse { line: 7, .. }), "{err}");
    }
}
