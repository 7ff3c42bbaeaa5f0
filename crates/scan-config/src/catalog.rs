//! Catalog source locations.

use serde::{Deserialize, Serialize};

fn default_diseases() -> String {
    "datasets/diseases.csv".to_string()
}

fn default_symptoms() -> String {
    "datasets/symptoms.csv".to_string()
}

/// Where to read the disease and symptom tables from.
///
/// Each value is either a filesystem path (relative paths resolve against the
/// working directory) or an `http://` / `https://` URL.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CatalogConfig {
    #[serde(default = "default_diseases")]
    pub diseases: String,

    #[serde(default = "default_symptoms")]
    pub symptoms: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            diseases: default_diseases(),
            symptoms: default_symptoms(),
        }
    }
}

impl CatalogConfig {
    /// Whether either table has to be fetched over HTTP.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        is_url(&self.diseases) || is_url(&self.symptoms)
    }
}

/// Whether a catalog location is an HTTP(S) URL rather than a path.
#[must_use]
pub fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_bundled_datasets() {
        let config = CatalogConfig::default();
        assert_eq!(config.diseases, "datasets/diseases.csv");
        assert_eq!(config.symptoms, "datasets/symptoms.csv");
        assert!(!config.is_remote());
    }

    #[test]
    fn detects_remote_tables() {
        let config = CatalogConfig {
            diseases: "https://example.org/diseases.csv".into(),
            ..CatalogConfig::default()
        };
        assert!(config.is_remote());
        assert!(!is_url("file:///tmp/x.csv"));
    }
}
