//! Read-only catalog records.
//!
//! Both tables are loaded once at startup by `scan-catalog` and never
//! mutated afterwards. `index` is the row position in the source table and is
//! the stable identifier used everywhere else (checklists, advisor replies).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Separator used by the `Symptoms` column of the disease table.
pub const SYMPTOM_LIST_SEPARATOR: char = ',';

/// A disease row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DiseaseRecord {
    pub index: usize,
    pub name: String,
    /// Free-text symptom description, the searchable field for description ranking.
    pub general_symptoms: String,
    /// Comma-joined symptom names; the source of the interview checklist.
    pub symptoms: String,
    pub description: String,
    pub recommendation: String,
}

impl DiseaseRecord {
    /// Split the comma-joined `symptoms` column into an ordered checklist.
    ///
    /// Blank entries (trailing separators, doubled commas) are dropped.
    #[must_use]
    pub fn symptom_list(&self) -> Vec<String> {
        self.symptoms
            .split(SYMPTOM_LIST_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// A symptom row, used to explain a symptom while interviewing the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SymptomRecord {
    pub index: usize,
    pub name: String,
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn disease(symptoms: &str) -> DiseaseRecord {
        DiseaseRecord {
            index: 0,
            name: "Common Cold".into(),
            general_symptoms: String::new(),
            symptoms: symptoms.into(),
            description: String::new(),
            recommendation: String::new(),
        }
    }

    #[test]
    fn symptom_list_splits_and_trims() {
        let record = disease("runny nose, coughing,sore throat");
        assert_eq!(
            record.symptom_list(),
            vec!["runny nose", "coughing", "sore throat"]
        );
    }

    #[test]
    fn symptom_list_drops_blank_entries() {
        let record = disease("fever, , chills,");
        assert_eq!(record.symptom_list(), vec!["fever", "chills"]);
    }

    #[test]
    fn empty_symptom_column_gives_empty_checklist() {
        assert!(disease("").symptom_list().is_empty());
    }
}
