use std::collections::BTreeMap;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        review::{entities::Review, ports::ReviewRepository},
    },
    infrastructure::{db::RealtimeDb, review::mappers::ReviewRecord},
};

const COLLECTION: &str = "reviews";

#[derive(Clone)]
pub struct RealtimeReviewRepository {
    pub db: RealtimeDb,
}

impl RealtimeReviewRepository {
    pub fn new(db: RealtimeDb) -> Self {
        Self { db }
    }

    fn node(review_id: &str) -> String {
        format!("{COLLECTION}/{review_id}")
    }
}

impl ReviewRepository for RealtimeReviewRepository {
    async fn fetch_all(&self) -> Result<Vec<Review>, CoreError> {
        let nodes: Option<BTreeMap<String, ReviewRecord>> = self.db.get(COLLECTION).await?;

        Ok(nodes
            .unwrap_or_default()
            .into_iter()
            .map(|(id, record)| record.into_review(id))
            .collect())
    }

    async fn get_by_id(&self, review_id: String) -> Result<Option<Review>, CoreError> {
        let record: Option<ReviewRecord> = self.db.get(&Self::node(&review_id)).await?;
        Ok(record.map(|record| record.into_review(review_id)))
    }

    async fn put(&self, review: Review) -> Result<(), CoreError> {
        let record = ReviewRecord::from(&review);
        self.db.put(&Self::node(&review.id), &record).await
    }

    async fn delete(&self, review_id: String) -> Result<(), CoreError> {
        self.db.delete(&Self::node(&review_id)).await
    }
}
