use herbful_core::domain::treatment::entities::{SourceInfo, SourceType};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Maps JSON `null` to `Some(None)` so a partial update can clear a field;
/// an absent field stays `None`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTreatmentValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    pub source_type: SourceType,

    #[serde(default)]
    pub sources: Vec<SourceInfo>,

    #[validate(length(min = 1, message = "at least one preparation step is required"))]
    pub preparation: Vec<String>,

    #[validate(length(min = 1, message = "usage is required"))]
    pub usage: String,

    #[validate(length(min = 1, message = "dosage is required"))]
    pub dosage: String,

    #[serde(default)]
    pub warnings: Vec<String>,

    #[validate(length(min = 1, message = "at least one benefit is required"))]
    pub benefits: Vec<String>,

    #[serde(default)]
    pub symptoms: Vec<String>,

    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTreatmentValidator {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub source_type: Option<SourceType>,

    #[serde(default)]
    pub sources: Option<Vec<SourceInfo>>,

    #[serde(default)]
    pub preparation: Option<Vec<String>>,

    #[serde(default)]
    pub usage: Option<String>,

    #[serde(default)]
    pub dosage: Option<String>,

    #[serde(default)]
    pub warnings: Option<Vec<String>>,

    #[serde(default)]
    pub benefits: Option<Vec<String>>,

    #[serde(default)]
    pub symptoms: Option<Vec<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
}
