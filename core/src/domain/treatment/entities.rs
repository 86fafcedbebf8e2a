use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::{entities::app_errors::CoreError, slugify},
    treatment::value_objects::{CreateTreatmentInput, UpdateTreatmentInput},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum SourceType {
    #[serde(rename = "Local Remedy")]
    LocalRemedy,
    #[serde(rename = "Verified Source")]
    VerifiedSource,
}

impl SourceType {
    /// Display/wire form, also used as the sort key for `sortBy=sourceType`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::LocalRemedy => "Local Remedy",
            SourceType::VerifiedSource => "Verified Source",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SourceInfo {
    pub authority: String,
    pub url: String,
    pub description: String,
    pub verification_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Treatment {
    pub id: String,
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
    /// Derived cache, re-established after every review mutation.
    pub average_rating: f64,
    pub total_reviews: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Trims every entry and drops the blank ones.
fn clean_list(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Case-insensitive dedup keeping the first-seen casing.
fn dedup_case_insensitive(entries: Vec<String>) -> Vec<String> {
    let mut seen = Vec::new();
    let mut out = Vec::new();
    for entry in entries {
        let key = entry.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            out.push(entry);
        }
    }
    out
}

impl Treatment {
    pub fn new(input: CreateTreatmentInput) -> Self {
        let now = Utc::now();
        let id = slugify(&input.name);

        Self {
            id,
            name: input.name.trim().to_string(),
            source_type: input.source_type,
            sources: input.sources,
            preparation: clean_list(input.preparation),
            usage: input.usage.trim().to_string(),
            dosage: input.dosage.trim().to_string(),
            warnings: clean_list(input.warnings),
            benefits: dedup_case_insensitive(clean_list(input.benefits)),
            symptoms: dedup_case_insensitive(clean_list(input.symptoms)),
            image_url: input.image_url,
            average_rating: 0.0,
            total_reviews: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial update. The id and `created_at` never change; the
    /// rating cache is owned by the review aggregation and is not touched here.
    pub fn update(&mut self, input: UpdateTreatmentInput) {
        if let Some(name) = input.name {
            self.name = name.trim().to_string();
        }
        if let Some(source_type) = input.source_type {
            self.source_type = source_type;
        }
        if let Some(sources) = input.sources {
            self.sources = sources;
        }
        if let Some(preparation) = input.preparation {
            self.preparation = clean_list(preparation);
        }
        if let Some(usage) = input.usage {
            self.usage = usage.trim().to_string();
        }
        if let Some(dosage) = input.dosage {
            self.dosage = dosage.trim().to_string();
        }
        if let Some(warnings) = input.warnings {
            self.warnings = clean_list(warnings);
        }
        if let Some(benefits) = input.benefits {
            self.benefits = dedup_case_insensitive(clean_list(benefits));
        }
        if let Some(symptoms) = input.symptoms {
            self.symptoms = dedup_case_insensitive(clean_list(symptoms));
        }
        if let Some(image_url) = input.image_url {
            self.image_url = image_url;
        }
        self.updated_at = Utc::now();
    }

    /// Store-boundary validation, applied before every create and update.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.is_empty() {
            return Err(CoreError::ValidationFailed(
                "treatment name is required".to_string(),
            ));
        }
        if self.usage.is_empty() {
            return Err(CoreError::ValidationFailed(
                "usage guidelines are required".to_string(),
            ));
        }
        if self.dosage.is_empty() {
            return Err(CoreError::ValidationFailed(
                "dosage information is required".to_string(),
            ));
        }
        if self.preparation.is_empty() {
            return Err(CoreError::ValidationFailed(
                "at least one preparation step is required".to_string(),
            ));
        }
        if self.benefits.is_empty() {
            return Err(CoreError::ValidationFailed(
                "at least one benefit is required".to_string(),
            ));
        }
        if self.source_type == SourceType::VerifiedSource && self.sources.is_empty() {
            return Err(CoreError::ValidationFailed(
                "at least one source is required for verified sources".to_string(),
            ));
        }
        Ok(())
    }
}
