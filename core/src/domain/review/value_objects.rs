use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewInput {
    pub treatment_id: String,
    pub rating: u8,
    pub comment: String,
    pub user_name: String,
    pub user_email: String,
    pub anonymous: bool,
    pub admin_notes: Option<String>,
}

/// Partial update; `admin_notes` distinguishes "leave as is" (outer `None`)
/// from "clear the note" (`Some(None)`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateReviewInput {
    pub rating: Option<u8>,
    pub comment: Option<String>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub anonymous: Option<bool>,
    pub admin_notes: Option<Option<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct GetReviewsFilter {
    pub page: usize,
    pub page_size: usize,
    pub search: Option<String>,
    pub rating: Option<u8>,
}

/// Collection-wide counters, computed before filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReviewStats {
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewListing {
    pub items: Vec<crate::domain::review::entities::Review>,
    pub total_count: usize,
    pub total_pages: usize,
    pub stats: ReviewStats,
}
