use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        treatment::{entities::Treatment, ports::TreatmentRepository},
    },
    infrastructure::{db::RealtimeDb, treatment::mappers::TreatmentRecord},
};

const COLLECTION: &str = "treatments";

#[derive(Clone)]
pub struct RealtimeTreatmentRepository {
    pub db: RealtimeDb,
}

impl RealtimeTreatmentRepository {
    pub fn new(db: RealtimeDb) -> Self {
        Self { db }
    }

    fn node(treatment_id: &str) -> String {
        format!("{COLLECTION}/{treatment_id}")
    }
}

impl TreatmentRepository for RealtimeTreatmentRepository {
    async fn fetch_all(&self) -> Result<Vec<Treatment>, CoreError> {
        let nodes: Option<BTreeMap<String, TreatmentRecord>> = self.db.get(COLLECTION).await?;

        Ok(nodes
            .unwrap_or_default()
            .into_iter()
            .map(|(id, record)| record.into_treatment(id))
            .collect())
    }

    async fn get_by_id(&self, treatment_id: String) -> Result<Option<Treatment>, CoreError> {
        let record: Option<TreatmentRecord> = self.db.get(&Self::node(&treatment_id)).await?;
        Ok(record.map(|record| record.into_treatment(treatment_id)))
    }

    async fn put(&self, treatment: Treatment) -> Result<(), CoreError> {
        let record = TreatmentRecord::from(&treatment);
        self.db.put(&Self::node(&treatment.id), &record).await
    }

    async fn patch_rating(
        &self,
        treatment_id: String,
        average_rating: f64,
        total_reviews: u64,
        updated_at: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        self.db
            .patch(
                &Self::node(&treatment_id),
                &json!({
                    "averageRating": average_rating,
                    "totalReviews": total_reviews,
                    "updatedAt": updated_at,
                }),
            )
            .await
    }

    async fn patch_symptoms(
        &self,
        treatment_id: String,
        symptoms: Vec<String>,
        updated_at: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        self.db
            .patch(
                &Self::node(&treatment_id),
                &json!({
                    "symptoms": symptoms,
                    "updatedAt": updated_at,
                }),
            )
            .await
    }

    async fn patch_image_url(
        &self,
        treatment_id: String,
        image_url: Option<String>,
        updated_at: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        self.db
            .patch(
                &Self::node(&treatment_id),
                &json!({
                    "imageUrl": image_url,
                    "updatedAt": updated_at,
                }),
            )
            .await
    }

    async fn delete(&self, treatment_id: String) -> Result<(), CoreError> {
        self.db.delete(&Self::node(&treatment_id)).await
    }
}
