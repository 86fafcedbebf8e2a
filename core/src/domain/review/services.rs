use chrono::Utc;
use tracing::warn;

use crate::domain::{
    authentication::ports::AuthStateRepository,
    common::{
        entities::{app_errors::CoreError, pagination::paginate},
        services::Service,
    },
    review::{
        entities::{Review, ReviewConfig},
        ports::{ReviewRepository, ReviewService},
        value_objects::{
            CreateReviewInput, GetReviewsFilter, ReviewListing, ReviewStats, UpdateReviewInput,
        },
    },
    storage::ports::ObjectStoragePort,
    symptom::ports::SymptomIndexRepository,
    treatment::ports::TreatmentRepository,
};

/// One-decimal mean over the matching ratings, round half up. `None` when no
/// review matches.
pub fn average_rating(ratings: &[u8]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let mean = ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / ratings.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

fn matches_search(review: &Review, term: &str) -> bool {
    review.treatment_name.to_lowercase().contains(term)
        || review.comment.to_lowercase().contains(term)
        || review.user_name.to_lowercase().contains(term)
        || review.user_email.to_lowercase().contains(term)
}

/// Full-fetch listing semantics: stats cover the whole collection, search and
/// rating filter narrow it, newest first, then page slicing.
pub fn apply_filter(mut reviews: Vec<Review>, filter: &GetReviewsFilter) -> ReviewListing {
    let stats = ReviewStats {
        total: reviews.len(),
    };

    if let Some(search) = filter.search.as_deref() {
        let term = search.to_lowercase();
        if !term.is_empty() {
            reviews.retain(|review| matches_search(review, &term));
        }
    }

    if let Some(rating) = filter.rating {
        reviews.retain(|review| review.rating == rating);
    }

    reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let page = paginate(reviews, filter.page.max(1), filter.page_size.max(1));
    ReviewListing {
        items: page.items,
        total_count: page.total_count,
        total_pages: page.total_pages,
        stats,
    }
}

impl<T, R, S, A, O> ReviewService for Service<T, R, S, A, O>
where
    T: TreatmentRepository,
    R: ReviewRepository,
    S: SymptomIndexRepository,
    A: AuthStateRepository,
    O: ObjectStoragePort,
{
    async fn list_reviews(&self, filter: GetReviewsFilter) -> Result<ReviewListing, CoreError> {
        let reviews = self.review_repository.fetch_all().await?;
        Ok(apply_filter(reviews, &filter))
    }

    async fn get_review(&self, review_id: String) -> Result<Review, CoreError> {
        self.review_repository
            .get_by_id(review_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_review(&self, input: CreateReviewInput) -> Result<Review, CoreError> {
        // Resolve the treatment so the denormalized name starts out consistent.
        let treatment = self
            .treatment_repository
            .get_by_id(input.treatment_id.clone())
            .await?
            .ok_or(CoreError::NotFound)?;

        let review = Review::new(ReviewConfig {
            treatment_id: treatment.id.clone(),
            treatment_name: treatment.name,
            rating: input.rating,
            comment: input.comment,
            user_name: input.user_name,
            user_email: input.user_email,
            anonymous: input.anonymous,
            admin_notes: input.admin_notes,
        });
        review.validate()?;

        self.review_repository.put(review.clone()).await?;
        self.recompute_treatment_rating(review.treatment_id.clone())
            .await?;

        Ok(review)
    }

    async fn update_review(
        &self,
        review_id: String,
        input: UpdateReviewInput,
    ) -> Result<Review, CoreError> {
        let mut review = self
            .review_repository
            .get_by_id(review_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let rating_changed = input.rating.is_some();
        review.update(input);
        review.validate()?;

        self.review_repository.put(review.clone()).await?;

        if rating_changed {
            self.recompute_treatment_rating(review.treatment_id.clone())
                .await?;
        }

        Ok(review)
    }

    async fn delete_review(&self, review_id: String) -> Result<(), CoreError> {
        let review = self
            .review_repository
            .get_by_id(review_id.clone())
            .await?
            .ok_or(CoreError::NotFound)?;

        self.review_repository.delete(review_id).await?;
        self.recompute_treatment_rating(review.treatment_id).await
    }

    async fn recompute_treatment_rating(&self, treatment_id: String) -> Result<(), CoreError> {
        let _guard = self.rating_lock.lock().await;

        let Some(_) = self
            .treatment_repository
            .get_by_id(treatment_id.clone())
            .await?
        else {
            // The treatment may have been deleted while its reviews live on.
            warn!(%treatment_id, "skipping rating recompute for missing treatment");
            return Ok(());
        };

        let reviews = self.review_repository.fetch_all().await?;
        let ratings: Vec<u8> = reviews
            .iter()
            .filter(|review| review.treatment_id == treatment_id)
            .map(|review| review.rating)
            .collect();

        let (average, total) = match average_rating(&ratings) {
            Some(average) => (average, ratings.len() as u64),
            None => (0.0, 0),
        };

        self.treatment_repository
            .patch_rating(treatment_id, average, total, Utc::now())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_fixtures::{sample_review, sample_treatment, service_with};
    use crate::domain::treatment::ports::TreatmentRepository as _;

    #[test]
    fn average_rounds_half_up_to_one_decimal() {
        // round(14/3 * 10) / 10 = round(46.67) / 10 = 4.7
        assert_eq!(average_rating(&[5, 4, 5]), Some(4.7));
        assert_eq!(average_rating(&[1, 2]), Some(1.5));
        assert_eq!(average_rating(&[3]), Some(3.0));
        assert_eq!(average_rating(&[]), None);
    }

    #[test]
    fn listing_stats_count_the_whole_collection() {
        let reviews = vec![
            sample_review("1", "ginger-tea", "Ginger Tea", 5),
            sample_review("2", "ginger-tea", "Ginger Tea", 2),
            sample_review("3", "lagundi", "Lagundi", 4),
        ];

        let listing = apply_filter(
            reviews,
            &GetReviewsFilter {
                page: 1,
                page_size: 10,
                search: Some("lagundi".to_string()),
                rating: None,
            },
        );

        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.total_count, 1);
        assert_eq!(listing.stats.total, 3);
    }

    #[test]
    fn rating_filter_is_exact() {
        let reviews = vec![
            sample_review("1", "ginger-tea", "Ginger Tea", 5),
            sample_review("2", "ginger-tea", "Ginger Tea", 4),
        ];

        let listing = apply_filter(
            reviews,
            &GetReviewsFilter {
                page: 1,
                page_size: 10,
                search: None,
                rating: Some(5),
            },
        );
        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.items[0].rating, 5);
    }

    #[tokio::test]
    async fn recompute_sets_mean_and_count() {
        let treatment = sample_treatment("Ginger Tea", 0.0, 0);
        let id = treatment.id.clone();
        let service = service_with(
            vec![treatment],
            vec![
                sample_review("1", &id, "Ginger Tea", 5),
                sample_review("2", &id, "Ginger Tea", 4),
                sample_review("3", &id, "Ginger Tea", 5),
                sample_review("4", "other", "Other", 1),
            ],
        );

        service.recompute_treatment_rating(id.clone()).await.unwrap();

        let updated = service
            .treatment_repository
            .get_by_id(id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.average_rating, 4.7);
        assert_eq!(updated.total_reviews, 3);
    }

    #[tokio::test]
    async fn deleting_the_last_review_resets_the_cache() {
        let treatment = sample_treatment("Ginger Tea", 5.0, 1);
        let id = treatment.id.clone();
        let review = sample_review("100", &id, "Ginger Tea", 5);
        let service = service_with(vec![treatment], vec![review]);

        service.delete_review("100".to_string()).await.unwrap();

        let updated = service
            .treatment_repository
            .get_by_id(id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.average_rating, 0.0);
        assert_eq!(updated.total_reviews, 0);
    }

    #[tokio::test]
    async fn create_resolves_the_treatment_name() {
        let treatment = sample_treatment("Ginger Tea", 0.0, 0);
        let id = treatment.id.clone();
        let service = service_with(vec![treatment], vec![]);

        let review = service
            .create_review(CreateReviewInput {
                treatment_id: id.clone(),
                rating: 4,
                comment: "Good".to_string(),
                user_name: "Maria".to_string(),
                user_email: "maria@example.com".to_string(),
                anonymous: false,
                admin_notes: None,
            })
            .await
            .unwrap();

        assert_eq!(review.treatment_name, "Ginger Tea");

        let updated = service
            .treatment_repository
            .get_by_id(id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.total_reviews, 1);
        assert_eq!(updated.average_rating, 4.0);
    }

    #[tokio::test]
    async fn create_for_missing_treatment_is_not_found() {
        let service = service_with(vec![], vec![]);
        let result = service
            .create_review(CreateReviewInput {
                treatment_id: "nope".to_string(),
                rating: 4,
                comment: String::new(),
                user_name: String::new(),
                user_email: String::new(),
                anonymous: true,
                admin_notes: None,
            })
            .await;
        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn update_without_rating_change_skips_recompute() {
        let treatment = sample_treatment("Ginger Tea", 2.0, 9);
        let id = treatment.id.clone();
        let review = sample_review("100", &id, "Ginger Tea", 5);
        let service = service_with(vec![treatment], vec![review]);

        service
            .update_review(
                "100".to_string(),
                UpdateReviewInput {
                    comment: Some("Edited".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        // The (stale) cache is untouched because no rating-affecting field changed.
        let unchanged = service
            .treatment_repository
            .get_by_id(id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged.average_rating, 2.0);
        assert_eq!(unchanged.total_reviews, 9);
    }
}
