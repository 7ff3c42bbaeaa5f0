//! CSV row shapes and conversion into catalog records.
//!
//! Columns are matched by header name, so a leading pandas index column (or
//! any other extra column) is ignored. Row position becomes the record index.

use std::io::Read;

use scan_core::{DiseaseRecord, SymptomRecord};
use serde::Deserialize;

use crate::error::CatalogError;

pub const DISEASE_TABLE: &str = "disease";
pub const SYMPTOM_TABLE: &str = "symptom";

/// Header row written by [`crate::Catalog::diseases_csv`].
pub const DISEASE_HEADERS: [&str; 5] = [
    "Disease",
    "General Symptoms",
    "Symptoms",
    "Description",
    "Recommendation",
];

#[derive(Debug, Deserialize)]
struct DiseaseRow {
    #[serde(rename = "Disease")]
    name: String,
    #[serde(rename = "General Symptoms", default)]
    general_symptoms: String,
    #[serde(rename = "Symptoms")]
    symptoms: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Recommendation", default)]
    recommendation: String,
}

#[derive(Debug, Deserialize)]
struct SymptomRow {
    #[serde(rename = "Symptom")]
    name: String,
    #[serde(rename = "Explanation", default)]
    explanation: String,
}

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input)
}

pub fn parse_diseases<R: Read>(input: R) -> Result<Vec<DiseaseRecord>, CatalogError> {
    let mut records = Vec::new();
    for (index, row) in reader(input).deserialize::<DiseaseRow>().enumerate() {
        let row = row.map_err(|source| CatalogError::Csv {
            table: DISEASE_TABLE,
            source,
        })?;
        if row.name.is_empty() {
            return Err(CatalogError::InvalidRow {
                table: DISEASE_TABLE,
                row: index,
                reason: "disease name is empty".to_string(),
            });
        }
        records.push(DiseaseRecord {
            index,
            name: row.name,
            general_symptoms: row.general_symptoms,
            symptoms: row.symptoms,
            description: row.description,
            recommendation: row.recommendation,
        });
    }

    if records.is_empty() {
        return Err(CatalogError::Empty(DISEASE_TABLE));
    }
    Ok(records)
}

pub fn parse_symptoms<R: Read>(input: R) -> Result<Vec<SymptomRecord>, CatalogError> {
    let mut records = Vec::new();
    for (index, row) in reader(input).deserialize::<SymptomRow>().enumerate() {
        let row = row.map_err(|source| CatalogError::Csv {
            table: SYMPTOM_TABLE,
            source,
        })?;
        if row.name.is_empty() {
            return Err(CatalogError::InvalidRow {
                table: SYMPTOM_TABLE,
                row: index,
                reason: "symptom name is empty".to_string(),
            });
        }
        records.push(SymptomRecord {
            index,
            name: row.name,
            explanation: row.explanation,
        });
    }

    if records.is_empty() {
        return Err(CatalogError::Empty(SYMPTOM_TABLE));
    }
    Ok(records)
}
