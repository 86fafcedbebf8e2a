use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::treatment::entities::{SourceInfo, SourceType};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTreatmentInput {
    pub name: String,
    pub source_type: SourceType,
    pub sources: Vec<SourceInfo>,
    pub preparation: Vec<String>,
    pub usage: String,
    pub dosage: String,
    pub warnings: Vec<String>,
    pub benefits: Vec<String>,
    pub symptoms: Vec<String>,
    pub image_url: Option<String>,
}

/// Partial update; `image_url` distinguishes "leave as is" (outer `None`) from
/// "clear the image" (`Some(None)`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTreatmentInput {
    pub name: Option<String>,
    pub source_type: Option<SourceType>,
    pub sources: Option<Vec<SourceInfo>>,
    pub preparation: Option<Vec<String>>,
    pub usage: Option<String>,
    pub dosage: Option<String>,
    pub warnings: Option<Vec<String>>,
    pub benefits: Option<Vec<String>>,
    pub symptoms: Option<Vec<String>>,
    pub image_url: Option<Option<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum TreatmentSortBy {
    Name,
    CreatedAt,
    AverageRating,
    TotalReviews,
    SourceType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Default)]
pub struct GetTreatmentsFilter {
    pub page: usize,
    pub page_size: usize,
    pub search: Option<String>,
    pub sort_by: Option<TreatmentSortBy>,
    pub sort_order: Option<SortOrder>,
}

/// Live review aggregate for display. Unlike the cached counters on the
/// treatment record, this also matches reviews whose id linkage drifted but
/// whose denormalized treatment name still matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RatingSummary {
    pub average_rating: f64,
    pub total_reviews: u64,
}
