use std::cmp::Ordering;

use tracing::warn;

use crate::domain::{
    authentication::ports::AuthStateRepository,
    common::{
        entities::{
            app_errors::CoreError,
            pagination::{Page, paginate},
        },
        services::Service,
    },
    review::{entities::Review, ports::ReviewRepository},
    storage::ports::ObjectStoragePort,
    symptom::{ports::SymptomIndexRepository, services as symptom_services},
    treatment::{
        entities::Treatment,
        ports::{TreatmentRepository, TreatmentService},
        value_objects::{
            CreateTreatmentInput, GetTreatmentsFilter, RatingSummary, SortOrder, TreatmentSortBy,
            UpdateTreatmentInput,
        },
    },
};

/// Case-insensitive substring match over name, benefits and symptoms.
fn matches_search(treatment: &Treatment, term: &str) -> bool {
    treatment.name.to_lowercase().contains(term)
        || treatment
            .benefits
            .iter()
            .any(|benefit| benefit.to_lowercase().contains(term))
        || treatment
            .symptoms
            .iter()
            .any(|symptom| symptom.to_lowercase().contains(term))
}

fn compare(a: &Treatment, b: &Treatment, sort_by: TreatmentSortBy) -> Ordering {
    match sort_by {
        TreatmentSortBy::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        TreatmentSortBy::CreatedAt => a.created_at.cmp(&b.created_at),
        TreatmentSortBy::AverageRating => a
            .average_rating
            .partial_cmp(&b.average_rating)
            .unwrap_or(Ordering::Equal),
        TreatmentSortBy::TotalReviews => a.total_reviews.cmp(&b.total_reviews),
        TreatmentSortBy::SourceType => a.source_type.as_str().cmp(b.source_type.as_str()),
    }
}

/// Applies the filter's search, sort and pagination to a full collection
/// snapshot. No sort key means newest-first; an explicit sort key defaults to
/// ascending until `sort_order` flips it. The underlying sort is stable, so
/// ties keep their incoming order.
pub fn apply_filter(mut treatments: Vec<Treatment>, filter: &GetTreatmentsFilter) -> Page<Treatment> {
    if let Some(search) = filter.search.as_deref() {
        let term = search.to_lowercase();
        if !term.is_empty() {
            treatments.retain(|treatment| matches_search(treatment, &term));
        }
    }

    match filter.sort_by {
        Some(sort_by) => {
            treatments.sort_by(|a, b| {
                let ordering = compare(a, b, sort_by);
                match filter.sort_order {
                    Some(SortOrder::Desc) => ordering.reverse(),
                    _ => ordering,
                }
            });
        }
        None => treatments.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    paginate(treatments, filter.page.max(1), filter.page_size.max(1))
}

/// Review aggregate used by read-heavy views: matches by id, falling back to
/// the denormalized treatment name (case-insensitive) when linkage drifted.
pub fn summarize_reviews(treatment: &Treatment, reviews: &[Review]) -> RatingSummary {
    let name = treatment.name.to_lowercase();
    let ratings: Vec<f64> = reviews
        .iter()
        .filter(|review| {
            review.treatment_id == treatment.id || review.treatment_name.to_lowercase() == name
        })
        .map(|review| f64::from(review.rating))
        .collect();

    if ratings.is_empty() {
        return RatingSummary {
            average_rating: 0.0,
            total_reviews: 0,
        };
    }

    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    RatingSummary {
        average_rating: (mean * 10.0).round() / 10.0,
        total_reviews: ratings.len() as u64,
    }
}

impl<T, R, S, A, O> TreatmentService for Service<T, R, S, A, O>
where
    T: TreatmentRepository,
    R: ReviewRepository,
    S: SymptomIndexRepository,
    A: AuthStateRepository,
    O: ObjectStoragePort,
{
    async fn list_treatments(
        &self,
        filter: GetTreatmentsFilter,
    ) -> Result<Page<Treatment>, CoreError> {
        let treatments = self.treatment_repository.fetch_all().await?;
        Ok(apply_filter(treatments, &filter))
    }

    async fn get_treatment(&self, treatment_id: String) -> Result<Treatment, CoreError> {
        if treatment_id.trim().is_empty() {
            return Err(CoreError::NotFound);
        }

        self.treatment_repository
            .get_by_id(treatment_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_treatment(&self, input: CreateTreatmentInput) -> Result<Treatment, CoreError> {
        let treatment = Treatment::new(input);
        treatment.validate()?;

        if self
            .treatment_repository
            .get_by_id(treatment.id.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::SlugConflict(treatment.id));
        }

        self.treatment_repository.put(treatment.clone()).await?;

        symptom_services::reindex_treatment(
            &self.symptom_repository,
            &treatment.id,
            &treatment.symptoms,
        )
        .await?;

        Ok(treatment)
    }

    async fn update_treatment(
        &self,
        treatment_id: String,
        input: UpdateTreatmentInput,
    ) -> Result<Treatment, CoreError> {
        let mut treatment = self
            .treatment_repository
            .get_by_id(treatment_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        treatment.update(input);
        treatment.validate()?;

        self.treatment_repository.put(treatment.clone()).await?;

        symptom_services::reindex_treatment(
            &self.symptom_repository,
            &treatment.id,
            &treatment.symptoms,
        )
        .await?;

        Ok(treatment)
    }

    async fn delete_treatment(&self, treatment_id: String) -> Result<(), CoreError> {
        let treatment = self
            .treatment_repository
            .get_by_id(treatment_id.clone())
            .await?
            .ok_or(CoreError::NotFound)?;

        self.treatment_repository.delete(treatment_id.clone()).await?;

        symptom_services::remove_treatment(&self.symptom_repository, &treatment_id).await?;

        // Reviews are kept; only the image is cleaned up, best effort.
        if let Some(image_url) = treatment.image_url {
            match self.object_storage.object_key_for_url(&image_url) {
                Some(object_key) => {
                    if let Err(err) = self.object_storage.delete_object(object_key).await {
                        warn!(%treatment_id, %err, "failed to delete treatment image");
                    }
                }
                None => warn!(%treatment_id, %image_url, "image url not in configured store"),
            }
        }

        Ok(())
    }

    async fn treatment_rating(&self, treatment_id: String) -> Result<RatingSummary, CoreError> {
        let treatment = self
            .treatment_repository
            .get_by_id(treatment_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let reviews = self.review_repository.fetch_all().await?;
        Ok(summarize_reviews(&treatment, &reviews))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_fixtures::{sample_review, sample_treatment, service_with};
    use crate::domain::symptom::ports::SymptomIndexRepository as _;

    fn filter(page: usize, page_size: usize) -> GetTreatmentsFilter {
        GetTreatmentsFilter {
            page,
            page_size,
            ..Default::default()
        }
    }

    #[test]
    fn search_is_case_insensitive() {
        let treatments = vec![
            sample_treatment("Malunggay", 0.0, 0),
            sample_treatment("Ginger Tea", 0.0, 0),
        ];

        let mut upper = filter(1, 10);
        upper.search = Some("MALUNGGAY".to_string());
        let mut lower = filter(1, 10);
        lower.search = Some("malunggay".to_string());

        let upper_page = apply_filter(treatments.clone(), &upper);
        let lower_page = apply_filter(treatments, &lower);
        assert_eq!(upper_page, lower_page);
        assert_eq!(upper_page.items.len(), 1);
        assert_eq!(upper_page.items[0].name, "Malunggay");
    }

    #[test]
    fn search_matches_benefits_and_symptoms() {
        let mut a = sample_treatment("Sambong", 0.0, 0);
        a.benefits = vec!["Diuretic".to_string()];
        let mut b = sample_treatment("Lagundi", 0.0, 0);
        b.symptoms = vec!["Dry cough".to_string()];

        let mut by_benefit = filter(1, 10);
        by_benefit.search = Some("diuretic".to_string());
        assert_eq!(apply_filter(vec![a, b.clone()], &by_benefit).items.len(), 1);

        let mut by_symptom = filter(1, 10);
        by_symptom.search = Some("cough".to_string());
        assert_eq!(apply_filter(vec![b], &by_symptom).items.len(), 1);
    }

    #[test]
    fn default_sort_is_newest_first() {
        let mut older = sample_treatment("Older", 0.0, 0);
        older.created_at = chrono::Utc::now() - chrono::Duration::days(2);
        let newer = sample_treatment("Newer", 0.0, 0);

        let page = apply_filter(vec![older, newer], &filter(1, 10));
        assert_eq!(page.items[0].name, "Newer");
        assert_eq!(page.items[1].name, "Older");
    }

    #[test]
    fn name_sort_ignores_case_and_desc_flips() {
        let treatments = vec![
            sample_treatment("banana", 0.0, 0),
            sample_treatment("Apple", 0.0, 0),
            sample_treatment("cherry", 0.0, 0),
        ];

        let mut asc = filter(1, 10);
        asc.sort_by = Some(TreatmentSortBy::Name);
        let names: Vec<_> = apply_filter(treatments.clone(), &asc)
            .items
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["Apple", "banana", "cherry"]);

        let mut desc = asc.clone();
        desc.sort_order = Some(SortOrder::Desc);
        let names: Vec<_> = apply_filter(treatments, &desc)
            .items
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["cherry", "banana", "Apple"]);
    }

    #[test]
    fn rating_sort_orders_numerically() {
        let treatments = vec![
            sample_treatment("Mid", 3.4, 10),
            sample_treatment("Top", 4.9, 3),
            sample_treatment("Low", 1.2, 50),
        ];

        let mut by_rating = filter(1, 10);
        by_rating.sort_by = Some(TreatmentSortBy::AverageRating);
        by_rating.sort_order = Some(SortOrder::Desc);
        let names: Vec<_> = apply_filter(treatments, &by_rating)
            .items
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["Top", "Mid", "Low"]);
    }

    #[test]
    fn pagination_counts_reflect_the_filtered_set() {
        let treatments: Vec<_> = (0..7)
            .map(|i| sample_treatment(&format!("Herb {i}"), 0.0, 0))
            .collect();

        let page = apply_filter(treatments, &filter(3, 3));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_count, 7);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn summary_falls_back_to_treatment_name() {
        let treatment = sample_treatment("Malunggay", 0.0, 0);
        let reviews = vec![
            sample_review("1", &treatment.id, "Malunggay", 5),
            sample_review("2", "stale-id", "MALUNGGAY", 4),
            sample_review("3", "other", "Lagundi", 1),
        ];

        let summary = summarize_reviews(&treatment, &reviews);
        assert_eq!(summary.total_reviews, 2);
        assert_eq!(summary.average_rating, 4.5);
    }

    #[tokio::test]
    async fn create_rejects_slug_collisions() {
        let service = service_with(vec![sample_treatment("Ginger Tea", 0.0, 0)], vec![]);

        let input = CreateTreatmentInput {
            name: "ginger  tea".to_string(),
            source_type: crate::domain::treatment::entities::SourceType::LocalRemedy,
            sources: vec![],
            preparation: vec!["Steep".to_string()],
            usage: "Drink".to_string(),
            dosage: "1 cup".to_string(),
            warnings: vec![],
            benefits: vec!["Warming".to_string()],
            symptoms: vec![],
            image_url: None,
        };

        let result = service.create_treatment(input).await;
        assert_eq!(result, Err(CoreError::SlugConflict("ginger-tea".to_string())));
    }

    #[tokio::test]
    async fn create_indexes_symptoms_and_delete_unindexes_them() {
        let service = service_with(vec![], vec![]);

        let input = CreateTreatmentInput {
            name: "Lagundi".to_string(),
            source_type: crate::domain::treatment::entities::SourceType::LocalRemedy,
            sources: vec![],
            preparation: vec!["Boil".to_string()],
            usage: "Drink".to_string(),
            dosage: "1 cup".to_string(),
            warnings: vec![],
            benefits: vec!["Cough relief".to_string()],
            symptoms: vec!["Headache".to_string(), "Fever".to_string()],
            image_url: None,
        };

        let created = service.create_treatment(input).await.unwrap();
        let index = service.symptom_repository.load().await.unwrap();
        assert_eq!(index.entries.len(), 2);
        assert!(index.entries["headache"].treatment_ids.contains(&created.id));
        assert!(index.entries["fever"].treatment_ids.contains(&created.id));

        service.delete_treatment(created.id).await.unwrap();
        let index = service.symptom_repository.load().await.unwrap();
        assert!(index.entries.is_empty());
    }

    #[tokio::test]
    async fn get_treatment_with_blank_id_is_not_found() {
        let service = service_with(vec![], vec![]);
        assert_eq!(
            service.get_treatment("  ".to_string()).await,
            Err(CoreError::NotFound)
        );
    }
}
