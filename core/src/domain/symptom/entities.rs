use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Storage-safe key for a symptom: lowercased, with the characters the
/// document store forbids in path keys (`. # $ / [ ]`) replaced by `_`,
/// then trimmed.
pub fn sanitize_symptom_key(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| match c {
            '.' | '#' | '$' | '/' | '[' | ']' => '_',
            other => other,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SymptomEntry {
    /// Display form; the first-seen casing wins.
    pub name: String,
    pub treatment_ids: Vec<String>,
}

/// Inverted index from sanitized symptom key to the treatments that list it.
/// Derived data: rebuilt or incrementally patched whenever a treatment's
/// symptoms change, persisted as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymptomIndex {
    pub entries: BTreeMap<String, SymptomEntry>,
}

impl SymptomIndex {
    /// Strips a treatment out of every entry, pruning entries left empty.
    pub fn remove_treatment(&mut self, treatment_id: &str) {
        for entry in self.entries.values_mut() {
            entry.treatment_ids.retain(|id| id != treatment_id);
        }
        self.entries.retain(|_, entry| !entry.treatment_ids.is_empty());
    }

    /// Registers a treatment under each of its symptoms, creating entries as
    /// needed. Blank symptoms are skipped; duplicates are not re-added.
    pub fn add_treatment(&mut self, treatment_id: &str, symptoms: &[String]) {
        for symptom in symptoms {
            let name = symptom.trim();
            if name.is_empty() {
                continue;
            }
            let key = sanitize_symptom_key(name);
            let entry = self.entries.entry(key).or_insert_with(|| SymptomEntry {
                name: name.to_string(),
                treatment_ids: Vec::new(),
            });
            if !entry.treatment_ids.iter().any(|id| id == treatment_id) {
                entry.treatment_ids.push(treatment_id.to_string());
            }
        }
    }

    /// Derives a fresh index from every treatment's symptom list.
    pub fn rebuild<'a, I>(treatments: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [String])>,
    {
        let mut index = SymptomIndex::default();
        for (treatment_id, symptoms) in treatments {
            index.add_treatment(treatment_id, symptoms);
        }
        index
    }
}
