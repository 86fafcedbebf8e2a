use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::treatment::entities::{SourceInfo, SourceType, Treatment};

/// Wire form of a treatment node. The record carries no id; the id is the
/// node's key in the `treatments` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentRecord {
    pub name: String,
    pub source_type: SourceType,
    #[serde(default)]
    pub sources: Vec<SourceInfoRecord>,
    #[serde(default)]
    pub preparation: Vec<String>,
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_reviews: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceInfoRecord {
    #[serde(default)]
    pub authority: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub verification_date: String,
}

impl TreatmentRecord {
    pub fn into_treatment(self, id: String) -> Treatment {
        Treatment {
            id,
            name: self.name,
            source_type: self.source_type,
            sources: self.sources.into_iter().map(SourceInfo::from).collect(),
            preparation: self.preparation,
            usage: self.usage,
            dosage: self.dosage,
            warnings: self.warnings,
            benefits: self.benefits,
            symptoms: self.symptoms,
            image_url: self.image_url,
            average_rating: self.average_rating,
            total_reviews: self.total_reviews,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<&Treatment> for TreatmentRecord {
    fn from(treatment: &Treatment) -> Self {
        Self {
            name: treatment.name.clone(),
            source_type: treatment.source_type,
            sources: treatment
                .sources
                .iter()
                .map(SourceInfoRecord::from)
                .collect(),
            preparation: treatment.preparation.clone(),
            usage: treatment.usage.clone(),
            dosage: treatment.dosage.clone(),
            warnings: treatment.warnings.clone(),
            benefits: treatment.benefits.clone(),
            symptoms: treatment.symptoms.clone(),
            image_url: treatment.image_url.clone(),
            average_rating: treatment.average_rating,
            total_reviews: treatment.total_reviews,
            created_at: treatment.created_at,
            updated_at: treatment.updated_at,
        }
    }
}

impl From<SourceInfoRecord> for SourceInfo {
    fn from(record: SourceInfoRecord) -> Self {
        Self {
            authority: record.authority,
            url: record.url,
            description: record.description,
            verification_date: record.verification_date,
        }
    }
}

impl From<&SourceInfo> for SourceInfoRecord {
    fn from(source: &SourceInfo) -> Self {
        Self {
            authority: source.authority.clone(),
            url: source.url.clone(),
            description: source.description.clone(),
            verification_date: source.verification_date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_decodes_the_stored_wire_shape() {
        let json = r#"{
            "name": "Ginger Tea",
            "sourceType": "Verified Source",
            "sources": [{"authority": "WHO", "url": "https://who.int", "description": "", "verificationDate": "2024-01-01"}],
            "preparation": ["Boil"],
            "usage": "Drink warm",
            "dosage": "1 cup",
            "benefits": ["Warming"],
            "symptoms": ["Nausea"],
            "averageRating": 4.5,
            "totalReviews": 2,
            "createdAt": "2024-03-01T10:00:00Z",
            "updatedAt": "2024-03-02T10:00:00Z"
        }"#;

        let record: TreatmentRecord = serde_json::from_str(json).unwrap();
        let treatment = record.into_treatment("ginger-tea".to_string());

        assert_eq!(treatment.id, "ginger-tea");
        assert_eq!(treatment.source_type, SourceType::VerifiedSource);
        assert_eq!(treatment.sources[0].authority, "WHO");
        assert_eq!(treatment.average_rating, 4.5);
        // Fields missing from the node fall back to their defaults.
        assert!(treatment.warnings.is_empty());
        assert!(treatment.image_url.is_none());
    }
}
