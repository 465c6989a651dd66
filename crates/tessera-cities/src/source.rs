//! TOML-file city source

use crate::CityError;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tessera_domain::traits::CitySource;
use tessera_domain::CityRecord;

#[derive(Debug, Deserialize)]
struct CityFile {
    #[serde(default)]
    cities: Vec<CityRecord>,
}

/// Parse and check a TOML city list.
///
/// Slugs must be non-empty and unique. Onboarding values are not range
/// checked; sanitizing them is the onboarding flow's job.
pub fn parse_cities(contents: &str) -> Result<Vec<CityRecord>, CityError> {
    let file: CityFile = toml::from_str(contents)?;

    let mut seen = HashSet::new();
    for city in &file.cities {
        if city.slug.trim().is_empty() {
            return Err(CityError::InvalidRecord(format!(
                "city '{}' has an empty slug",
                city.name
            )));
        }
        if !seen.insert(city.slug.as_str()) {
            return Err(CityError::DuplicateSlug(city.slug.clone()));
        }
    }

    Ok(file.cities)
}

/// Reads city records from a TOML file on every load
#[derive(Debug, Clone)]
pub struct TomlCitySource {
    path: PathBuf,
}

impl TomlCitySource {
    /// Create a source for the given file
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CitySource for TomlCitySource {
    type Error = CityError;

    fn load_cities(&self) -> Result<Vec<CityRecord>, Self::Error> {
        let contents = std::fs::read_to_string(&self.path)?;
        let cities = parse_cities(&contents)?;
        tracing::info!(
            path = %self.path.display(),
            count = cities.len(),
            "Loaded city records"
        );
        Ok(cities)
    }
}
