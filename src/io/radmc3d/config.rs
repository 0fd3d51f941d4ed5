use crate::io::error::Error;
use std::fmt::Display;
use std::io::Write;

/// `key = value` settings written to `radmc3d.inp`, in insertion order.
///
/// Setting an existing key replaces its value in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadmcOptions {
    entries: Vec<(String, String)>,
}

impl RadmcOptions {
    /// No options at all; the simulator falls back to its built-in defaults.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Display) -> &mut Self {
        let key = key.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RadmcOptions {
    /// Scattering disabled, which is what line imaging of a disk needs.
    fn default() -> Self {
        Self::empty().with("scattering_mode_max", 0)
    }
}

pub fn write<W: Write>(mut writer: W, options: &RadmcOptions) -> Result<(), Error> {
    for (key, value) in options.iter() {
        writeln!(writer, "{key} = {value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_disables_scattering() {
        let mut buf = Vec::new();
        write(&mut buf, &RadmcOptions::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "scattering_mode_max = 0\n");
    }

    #[test]
    fn set_replaces_in_place_and_appends_new_keys() {
        let mut options = RadmcOptions::default();
        options.set("setthreads", 8).set("scattering_mode_max", 1);
        assert_eq!(options.len(), 2);
        assert_eq!(options.get("scattering_mode_max"), Some("1"));

        let mut buf = Vec::new();
        write(&mut buf, &options).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "scattering_mode_max = 1\nsetthreads = 8\n"
        );
    }
}
