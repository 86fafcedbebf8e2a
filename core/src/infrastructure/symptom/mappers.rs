use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::symptom::entities::{SymptomEntry, SymptomIndex};

/// Wire form of one entry under the `symptoms` node, keyed by the sanitized
/// symptom key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomEntryRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub treatment_ids: Vec<String>,
}

pub fn index_from_records(records: BTreeMap<String, SymptomEntryRecord>) -> SymptomIndex {
    SymptomIndex {
        entries: records
            .into_iter()
            .map(|(key, record)| {
                (
                    key,
                    SymptomEntry {
                        name: record.name,
                        treatment_ids: record.treatment_ids,
                    },
                )
            })
            .collect(),
    }
}

pub fn records_from_index(index: SymptomIndex) -> BTreeMap<String, SymptomEntryRecord> {
    index
        .entries
        .into_iter()
        .map(|(key, entry)| {
            (
                key,
                SymptomEntryRecord {
                    name: entry.name,
                    treatment_ids: entry.treatment_ids,
                },
            )
        })
        .collect()
}
