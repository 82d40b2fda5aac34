//! # Profile Store
//!
//! INI-backed connection profiles. Each section names a profile; the
//! `base_url` key gives the API root for that profile.
//!
//! ```ini
//! [default]
//! base_url = https://jsonplaceholder.typicode.com
//!
//! [local]
//! base_url = http://localhost:3000
//! ```

use anyhow::{anyhow, Result};
use ini::Ini;
use std::path::Path;

/// Connection settings resolved from one profile section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    base_url: String,
}

impl Profile {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Reads profiles from an INI file. The path may start with `~`.
pub struct ProfileStore {
    path: String,
}

impl ProfileStore {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Look up a profile by section name.
    ///
    /// Returns `Ok(None)` when the file or the section does not exist; a
    /// present section without a `base_url` key is an error.
    pub fn get_profile(&self, name: &str) -> Result<Option<Profile>> {
        let expanded = shellexpand::tilde(&self.path).into_owned();
        if !Path::new(&expanded).exists() {
            return Ok(None);
        }

        let ini = Ini::load_from_file(&expanded)
            .map_err(|e| anyhow!("Failed to read profile file '{expanded}': {e}"))?;

        let Some(section) = ini.section(Some(name)) else {
            return Ok(None);
        };

        let base_url = section
            .get("base_url")
            .ok_or_else(|| anyhow!("Profile '{name}' has no base_url"))?;

        Ok(Some(Profile {
            base_url: base_url.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn profile_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn reads_base_url_from_named_section() {
        let file = profile_file("[local]\nbase_url = http://localhost:3000\n");
        let store = ProfileStore::new(file.path().to_string_lossy());

        let profile = store.get_profile("local").unwrap().unwrap();
        assert_eq!(profile.base_url(), "http://localhost:3000");
    }

    #[test]
    fn missing_file_yields_none() {
        let store = ProfileStore::new("/nonexistent/postline-profile");
        assert!(store.get_profile("default").unwrap().is_none());
    }

    #[test]
    fn missing_section_yields_none() {
        let file = profile_file("[other]\nbase_url = http://example.com\n");
        let store = ProfileStore::new(file.path().to_string_lossy());

        assert!(store.get_profile("default").unwrap().is_none());
    }

    #[test]
    fn section_without_base_url_is_an_error() {
        let file = profile_file("[default]\nname = whatever\n");
        let store = ProfileStore::new(file.path().to_string_lossy());

        assert!(store.get_profile("default").is_err());
    }
}
