//! # scan-catalog
//!
//! The read-only disease and symptom tables SymptoScan ranks against.
//!
//! Tables are CSV, loaded once at startup from a local path or an HTTP(S)
//! URL and then shared immutably (typically behind an `Arc`) by every
//! session. Nothing in the catalog is mutated after [`Catalog::load`].
//!
//! ```text
//! diseases.csv: Disease, General Symptoms, Symptoms, Description, Recommendation
//! symptoms.csv: Symptom, Explanation
//! ```

mod error;
mod fetch;
mod rows;

pub use error::CatalogError;
pub use rows::DISEASE_HEADERS;

use std::io::Read;

use scan_config::CatalogConfig;
use scan_core::{DiseaseRecord, SymptomRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    diseases: Vec<DiseaseRecord>,
    symptoms: Vec<SymptomRecord>,
}

impl Catalog {
    /// Build a catalog from already-parsed records.
    ///
    /// Records are re-indexed by position so `index` always equals the row.
    #[must_use]
    pub fn new(mut diseases: Vec<DiseaseRecord>, mut symptoms: Vec<SymptomRecord>) -> Self {
        for (index, disease) in diseases.iter_mut().enumerate() {
            disease.index = index;
        }
        for (index, symptom) in symptoms.iter_mut().enumerate() {
            symptom.index = index;
        }
        Self { diseases, symptoms }
    }

    /// Parse both tables from CSV readers.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Csv`] for unparseable input,
    /// [`CatalogError::InvalidRow`] for rows without a name, and
    /// [`CatalogError::Empty`] for tables without rows.
    pub fn from_csv<D: Read, S: Read>(diseases: D, symptoms: S) -> Result<Self, CatalogError> {
        Ok(Self::new(
            rows::parse_diseases(diseases)?,
            rows::parse_symptoms(symptoms)?,
        ))
    }

    /// Load both tables from the configured locations.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] / [`CatalogError::Http`] /
    /// [`CatalogError::Status`] when a source cannot be read, plus the
    /// parse errors of [`Self::from_csv`].
    pub async fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let (diseases, symptoms) = tokio::try_join!(
            fetch::read_source(&config.diseases),
            fetch::read_source(&config.symptoms),
        )?;
        let catalog = Self::from_csv(diseases.as_bytes(), symptoms.as_bytes())?;
        tracing::debug!(
            diseases = catalog.diseases.len(),
            symptoms = catalog.symptoms.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn diseases(&self) -> &[DiseaseRecord] {
        &self.diseases
    }

    #[must_use]
    pub fn symptoms(&self) -> &[SymptomRecord] {
        &self.symptoms
    }

    #[must_use]
    pub fn disease(&self, index: usize) -> Option<&DiseaseRecord> {
        self.diseases.get(index)
    }

    #[must_use]
    pub fn symptom(&self, index: usize) -> Option<&SymptomRecord> {
        self.symptoms.get(index)
    }

    /// Case-insensitive exact lookup of a symptom by name.
    #[must_use]
    pub fn symptom_named(&self, name: &str) -> Option<&SymptomRecord> {
        let name = name.trim();
        self.symptoms
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// `(index, name)` pairs: the corpus for disease-name ranking.
    #[must_use]
    pub fn disease_name_corpus(&self) -> Vec<(usize, &str)> {
        self.diseases
            .iter()
            .map(|d| (d.index, d.name.as_str()))
            .collect()
    }

    /// `(index, general symptoms)` pairs: the corpus for description ranking.
    #[must_use]
    pub fn general_symptom_corpus(&self) -> Vec<(usize, &str)> {
        self.diseases
            .iter()
            .map(|d| (d.index, d.general_symptoms.as_str()))
            .collect()
    }

    /// `(index, name)` pairs over the symptom table.
    #[must_use]
    pub fn symptom_name_corpus(&self) -> Vec<(usize, &str)> {
        self.symptoms
            .iter()
            .map(|s| (s.index, s.name.as_str()))
            .collect()
    }

    /// Render the disease table back to CSV (no index column).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Csv`] if the writer fails.
    pub fn diseases_csv(&self) -> Result<String, CatalogError> {
        let to_err = |source| CatalogError::Csv {
            table: rows::DISEASE_TABLE,
            source,
        };
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(DISEASE_HEADERS).map_err(to_err)?;
        for d in &self.diseases {
            writer
                .write_record([
                    d.name.as_str(),
                    d.general_symptoms.as_str(),
                    d.symptoms.as_str(),
                    d.description.as_str(),
                    d.recommendation.as_str(),
                ])
                .map_err(to_err)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| to_err(csv::Error::from(e.into_error())))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
