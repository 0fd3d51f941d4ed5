use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkyCoordError {
    #[error("expected 'RA DEC' separated by whitespace, got '{0}'")]
    MissingComponent(String),

    #[error("invalid right ascension '{0}': expected __h__m__s")]
    RightAscension(String),

    #[error("invalid declination '{0}': expected [+-]__d__m__s")]
    Declination(String),
}

/// An equatorial position, stored in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyCoord {
    pub ra_deg: f64,
    pub dec_deg: f64,
}

impl SkyCoord {
    pub fn new(ra_deg: f64, dec_deg: f64) -> Self {
        Self { ra_deg, dec_deg }
    }

    /// Parses sexagesimal strings such as `15h48m05s` and `-24d00m00s`.
    pub fn from_sexagesimal(ra: &str, dec: &str) -> Result<Self, SkyCoordError> {
        Ok(Self {
            ra_deg: parse_ra(ra)?,
            dec_deg: parse_dec(dec)?,
        })
    }
}

impl FromStr for SkyCoord {
    type Err = SkyCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(ra), Some(dec), None) => Self::from_sexagesimal(ra, dec),
            _ => Err(SkyCoordError::MissingComponent(s.to_string())),
        }
    }
}

impl fmt::Display for SkyCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RA {:.6}° Dec {:+.6}°", self.ra_deg, self.dec_deg)
    }
}

pub fn parse_ra(s: &str) -> Result<f64, SkyCoordError> {
    let err = || SkyCoordError::RightAscension(s.to_string());
    let (h, m, sec) = split_sexagesimal(s.trim(), 'h').ok_or_else(err)?;
    if !(0.0..24.0).contains(&h) || !(0.0..60.0).contains(&m) || !(0.0..60.0).contains(&sec) {
        return Err(err());
    }
    Ok(15.0 * (h + m / 60.0 + sec / 3600.0))
}

pub fn parse_dec(s: &str) -> Result<f64, SkyCoordError> {
    let err = || SkyCoordError::Declination(s.to_string());
    let trimmed = s.trim();
    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (d, m, sec) = split_sexagesimal(body, 'd').ok_or_else(err)?;
    if d > 90.0 || !(0.0..60.0).contains(&m) || !(0.0..60.0).contains(&sec) {
        return Err(err());
    }
    let value = d + m / 60.0 + sec / 3600.0;
    if value > 90.0 {
        return Err(err());
    }
    Ok(sign * value)
}

/// Splits `AAxBBmCCs` into its three unsigned components.
fn split_sexagesimal(s: &str, major: char) -> Option<(f64, f64, f64)> {
    let (a, rest) = s.split_once(major)?;
    let (b, rest) = rest.split_once('m')?;
    let c = rest.strip_suffix('s')?;
    Some((parse_unsigned(a)?, parse_unsigned(b)?, parse_unsigned(c)?))
}

fn parse_unsigned(s: &str) -> Option<f64> {
    if s.is_empty() || s.starts_with(['-', '+']) {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_default_target() {
        let c: SkyCoord = "15h48m05s 24d00m00s".parse().unwrap();
        assert_relative_eq!(c.ra_deg, 15.0 * (15.0 + 48.0 / 60.0 + 5.0 / 3600.0), epsilon = 1e-12);
        assert_relative_eq!(c.dec_deg, 24.0, epsilon = 1e-12);
    }

    #[test]
    fn negative_declination_applies_sign_to_all_components() {
        let dec = parse_dec("-00d30m00s").unwrap();
        assert_relative_eq!(dec, -0.5, epsilon = 1e-12);
        let dec = parse_dec("-24d30m36s").unwrap();
        assert_relative_eq!(dec, -(24.0 + 0.5 + 0.01), epsilon = 1e-12);
    }

    #[test]
    fn explicit_plus_sign_and_fractional_seconds() {
        assert_relative_eq!(parse_dec("+10d00m36.0s").unwrap(), 10.01, epsilon = 1e-12);
        assert_relative_eq!(parse_ra("00h00m36.0s").unwrap(), 0.15, epsilon = 1e-12);
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(matches!(
            parse_ra("15:48:05"),
            Err(SkyCoordError::RightAscension(_))
        ));
        assert!(parse_ra("25h00m00s").is_err());
        assert!(parse_ra("15h61m00s").is_err());
        assert!(matches!(
            parse_dec("24d00m"),
            Err(SkyCoordError::Declination(_))
        ));
        assert!(parse_dec("91d00m00s").is_err());
        assert!(parse_dec("--1d00m00s").is_err());
        assert!(matches!(
            "15h48m05s".parse::<SkyCoord>(),
            Err(SkyCoordError::MissingComponent(_))
        ));
    }
}
