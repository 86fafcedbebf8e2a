use std::collections::BTreeMap;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        symptom::{entities::SymptomIndex, ports::SymptomIndexRepository},
    },
    infrastructure::{
        db::RealtimeDb,
        symptom::mappers::{SymptomEntryRecord, index_from_records, records_from_index},
    },
};

const COLLECTION: &str = "symptoms";

#[derive(Clone)]
pub struct RealtimeSymptomIndexRepository {
    pub db: RealtimeDb,
}

impl RealtimeSymptomIndexRepository {
    pub fn new(db: RealtimeDb) -> Self {
        Self { db }
    }
}

impl SymptomIndexRepository for RealtimeSymptomIndexRepository {
    async fn load(&self) -> Result<SymptomIndex, CoreError> {
        let records: Option<BTreeMap<String, SymptomEntryRecord>> =
            self.db.get(COLLECTION).await?;
        Ok(index_from_records(records.unwrap_or_default()))
    }

    async fn store(&self, index: SymptomIndex) -> Result<(), CoreError> {
        self.db.put(COLLECTION, &records_from_index(index)).await
    }
}
