use std::future::Future;

use chrono::{DateTime, Utc};

use crate::domain::{
    common::entities::{app_errors::CoreError, pagination::Page},
    treatment::{
        entities::Treatment,
        value_objects::{
            CreateTreatmentInput, GetTreatmentsFilter, RatingSummary, UpdateTreatmentInput,
        },
    },
};

pub trait TreatmentService: Send + Sync {
    fn list_treatments(
        &self,
        filter: GetTreatmentsFilter,
    ) -> impl Future<Output = Result<Page<Treatment>, CoreError>> + Send;

    fn get_treatment(
        &self,
        treatment_id: String,
    ) -> impl Future<Output = Result<Treatment, CoreError>> + Send;

    fn create_treatment(
        &self,
        input: CreateTreatmentInput,
    ) -> impl Future<Output = Result<Treatment, CoreError>> + Send;

    fn update_treatment(
        &self,
        treatment_id: String,
        input: UpdateTreatmentInput,
    ) -> impl Future<Output = Result<Treatment, CoreError>> + Send;

    fn delete_treatment(
        &self,
        treatment_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn treatment_rating(
        &self,
        treatment_id: String,
    ) -> impl Future<Output = Result<RatingSummary, CoreError>> + Send;
}

/// Store access for the `treatments` collection. Reads pull the whole
/// collection; list semantics (search, sort, pagination) live in the service.
/// Writes narrower than a full record go through the explicit patch operations.
#[cfg_attr(test, mockall::automock)]
pub trait TreatmentRepository: Send + Sync {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Treatment>, CoreError>> + Send;

    fn get_by_id(
        &self,
        treatment_id: String,
    ) -> impl Future<Output = Result<Option<Treatment>, CoreError>> + Send;

    fn put(&self, treatment: Treatment) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn patch_rating(
        &self,
        treatment_id: String,
        average_rating: f64,
        total_reviews: u64,
        updated_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn patch_symptoms(
        &self,
        treatment_id: String,
        symptoms: Vec<String>,
        updated_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn patch_image_url(
        &self,
        treatment_id: String,
        image_url: Option<String>,
        updated_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn delete(&self, treatment_id: String) -> impl Future<Output = Result<(), CoreError>> + Send;
}
