use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_epoch_id},
    review::value_objects::UpdateReviewInput,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: String,
    pub treatment_id: String,
    /// Denormalized copy of the treatment name; fallback join key for
    /// read-heavy views when id linkage drifts.
    pub treatment_name: String,
    pub rating: u8,
    pub comment: String,
    pub user_name: String,
    pub user_email: String,
    pub anonymous: bool,
    pub admin_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ReviewConfig {
    pub treatment_id: String,
    pub treatment_name: String,
    pub rating: u8,
    pub comment: String,
    pub user_name: String,
    pub user_email: String,
    pub anonymous: bool,
    pub admin_notes: Option<String>,
}

impl Review {
    pub fn new(config: ReviewConfig) -> Self {
        let now = Utc::now();
        // Anonymous submissions carry no reviewer identity.
        let (user_name, user_email) = if config.anonymous {
            (String::new(), String::new())
        } else {
            (config.user_name, config.user_email)
        };

        Self {
            id: generate_epoch_id(),
            treatment_id: config.treatment_id,
            treatment_name: config.treatment_name,
            rating: config.rating,
            comment: config.comment,
            user_name,
            user_email,
            anonymous: config.anonymous,
            admin_notes: config.admin_notes,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, input: UpdateReviewInput) {
        if let Some(rating) = input.rating {
            self.rating = rating;
        }
        if let Some(comment) = input.comment {
            self.comment = comment;
        }
        if let Some(anonymous) = input.anonymous {
            self.anonymous = anonymous;
            if anonymous {
                self.user_name = String::new();
                self.user_email = String::new();
            }
        }
        if let Some(user_name) = input.user_name {
            if !self.anonymous {
                self.user_name = user_name;
            }
        }
        if let Some(user_email) = input.user_email {
            if !self.anonymous {
                self.user_email = user_email;
            }
        }
        if let Some(admin_notes) = input.admin_notes {
            self.admin_notes = admin_notes;
        }
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if !(1..=5).contains(&self.rating) {
            return Err(CoreError::ValidationFailed(
                "rating must be between 1 and 5".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(anonymous: bool) -> ReviewConfig {
        ReviewConfig {
            treatment_id: "ginger-tea".to_string(),
            treatment_name: "Ginger Tea".to_string(),
            rating: 4,
            comment: "Helped with my sore throat".to_string(),
            user_name: "Maria".to_string(),
            user_email: "maria@example.com".to_string(),
            anonymous,
            admin_notes: None,
        }
    }

    #[test]
    fn anonymous_review_blanks_reviewer_identity() {
        let review = Review::new(config(true));
        assert!(review.user_name.is_empty());
        assert!(review.user_email.is_empty());
        assert!(review.anonymous);
    }

    #[test]
    fn named_review_keeps_identity() {
        let review = Review::new(config(false));
        assert_eq!(review.user_name, "Maria");
        assert_eq!(review.user_email, "maria@example.com");
    }

    #[test]
    fn rating_out_of_range_fails_validation() {
        let mut review = Review::new(config(false));
        review.rating = 0;
        assert!(review.validate().is_err());
        review.rating = 6;
        assert!(review.validate().is_err());
        review.rating = 5;
        assert!(review.validate().is_ok());
    }
}
