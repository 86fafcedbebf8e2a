use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    review::{
        entities::Review,
        value_objects::{CreateReviewInput, GetReviewsFilter, ReviewListing, UpdateReviewInput},
    },
};

pub trait ReviewService: Send + Sync {
    fn list_reviews(
        &self,
        filter: GetReviewsFilter,
    ) -> impl Future<Output = Result<ReviewListing, CoreError>> + Send;

    fn get_review(&self, review_id: String)
    -> impl Future<Output = Result<Review, CoreError>> + Send;

    fn create_review(
        &self,
        input: CreateReviewInput,
    ) -> impl Future<Output = Result<Review, CoreError>> + Send;

    fn update_review(
        &self,
        review_id: String,
        input: UpdateReviewInput,
    ) -> impl Future<Output = Result<Review, CoreError>> + Send;

    fn delete_review(&self, review_id: String)
    -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Re-establishes the cached `average_rating`/`total_reviews` on the
    /// treatment from the full reviews collection.
    fn recompute_treatment_rating(
        &self,
        treatment_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ReviewRepository: Send + Sync {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Review>, CoreError>> + Send;

    fn get_by_id(
        &self,
        review_id: String,
    ) -> impl Future<Output = Result<Option<Review>, CoreError>> + Send;

    fn put(&self, review: Review) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn delete(&self, review_id: String) -> impl Future<Output = Result<(), CoreError>> + Send;
}
