use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::review::entities::Review;

/// Wire form of a review node, keyed by the review id in the `reviews`
/// collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub treatment_id: String,
    #[serde(default)]
    pub treatment_name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub anonymous: bool,
    #[serde(default)]
    pub admin_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReviewRecord {
    pub fn into_review(self, id: String) -> Review {
        Review {
            id,
            treatment_id: self.treatment_id,
            treatment_name: self.treatment_name,
            rating: self.rating,
            comment: self.comment,
            user_name: self.user_name,
            user_email: self.user_email,
            anonymous: self.anonymous,
            admin_notes: self.admin_notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<&Review> for ReviewRecord {
    fn from(review: &Review) -> Self {
        Self {
            treatment_id: review.treatment_id.clone(),
            treatment_name: review.treatment_name.clone(),
            rating: review.rating,
            comment: review.comment.clone(),
            user_name: review.user_name.clone(),
            user_email: review.user_email.clone(),
            anonymous: review.anonymous,
            admin_notes: review.admin_notes.clone(),
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}
