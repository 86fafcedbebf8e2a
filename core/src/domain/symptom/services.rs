use chrono::Utc;

use crate::domain::{
    authentication::ports::AuthStateRepository,
    common::{entities::app_errors::CoreError, services::Service},
    review::ports::ReviewRepository,
    storage::ports::ObjectStoragePort,
    symptom::{
        entities::{SymptomEntry, SymptomIndex},
        ports::{SymptomIndexRepository, SymptomService},
    },
    treatment::ports::TreatmentRepository,
};

/// Incremental index update for one treatment: strip it everywhere, re-add it
/// under its current symptoms, persist the whole index.
pub async fn reindex_treatment<S>(
    repository: &S,
    treatment_id: &str,
    symptoms: &[String],
) -> Result<(), CoreError>
where
    S: SymptomIndexRepository,
{
    let mut index = repository.load().await?;
    index.remove_treatment(treatment_id);
    index.add_treatment(treatment_id, symptoms);
    repository.store(index).await
}

pub async fn remove_treatment<S>(repository: &S, treatment_id: &str) -> Result<(), CoreError>
where
    S: SymptomIndexRepository,
{
    let mut index = repository.load().await?;
    index.remove_treatment(treatment_id);
    repository.store(index).await
}

impl<T, R, S, A, O> SymptomService for Service<T, R, S, A, O>
where
    T: TreatmentRepository,
    R: ReviewRepository,
    S: SymptomIndexRepository,
    A: AuthStateRepository,
    O: ObjectStoragePort,
{
    async fn list_symptoms(&self) -> Result<Vec<(String, SymptomEntry)>, CoreError> {
        let index = self.symptom_repository.load().await?;
        Ok(index.entries.into_iter().collect())
    }

    async fn rebuild_symptom_index(&self) -> Result<(), CoreError> {
        let treatments = self.treatment_repository.fetch_all().await?;
        let index = SymptomIndex::rebuild(
            treatments
                .iter()
                .map(|treatment| (treatment.id.as_str(), treatment.symptoms.as_slice())),
        );
        self.symptom_repository.store(index).await
    }

    async fn rename_symptom(&self, old_name: String, new_name: String) -> Result<(), CoreError> {
        let old_name = old_name.trim().to_string();
        let new_name = new_name.trim().to_string();
        if old_name.is_empty() || new_name.is_empty() || old_name == new_name {
            return Ok(());
        }

        let treatments = self.treatment_repository.fetch_all().await?;
        for treatment in treatments {
            if !treatment.symptoms.iter().any(|s| s.trim() == old_name) {
                continue;
            }
            let symptoms: Vec<String> = treatment
                .symptoms
                .iter()
                .map(|symptom| {
                    if symptom.trim() == old_name {
                        new_name.clone()
                    } else {
                        symptom.clone()
                    }
                })
                .collect();
            self.treatment_repository
                .patch_symptoms(treatment.id, symptoms, Utc::now())
                .await?;
        }

        self.rebuild_symptom_index().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_fixtures::{sample_treatment, service_with};
    use crate::domain::treatment::ports::TreatmentRepository as _;

    #[tokio::test]
    async fn rebuild_groups_every_treatment() {
        let mut a = sample_treatment("Ginger Tea", 0.0, 0);
        a.symptoms = vec!["Nausea".to_string()];
        let mut b = sample_treatment("Lagundi", 0.0, 0);
        b.symptoms = vec!["Cough".to_string(), "nausea".to_string()];

        let service = service_with(vec![a, b], vec![]);
        service.rebuild_symptom_index().await.unwrap();

        let entries = service.list_symptoms().await.unwrap();
        assert_eq!(entries.len(), 2);
        let nausea = entries.iter().find(|(key, _)| key == "nausea").unwrap();
        assert_eq!(nausea.1.treatment_ids, vec!["ginger-tea", "lagundi"]);
    }

    #[tokio::test]
    async fn rename_rewrites_treatments_and_rebuilds() {
        let mut treatment = sample_treatment("Ginger Tea", 0.0, 0);
        treatment.symptoms = vec!["Head ache".to_string(), "Nausea".to_string()];
        let service = service_with(vec![treatment], vec![]);
        service.rebuild_symptom_index().await.unwrap();

        service
            .rename_symptom("Head ache".to_string(), "Headache".to_string())
            .await
            .unwrap();

        let updated = service
            .treatment_repository
            .get_by_id("ginger-tea".to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.symptoms, vec!["Headache", "Nausea"]);

        let entries = service.list_symptoms().await.unwrap();
        assert!(entries.iter().any(|(key, _)| key == "headache"));
        assert!(!entries.iter().any(|(key, _)| key == "head ache"));
    }

    #[tokio::test]
    async fn rename_with_equal_or_blank_names_is_a_noop() {
        let mut treatment = sample_treatment("Ginger Tea", 0.0, 0);
        treatment.symptoms = vec!["Nausea".to_string()];
        let service = service_with(vec![treatment], vec![]);

        service
            .rename_symptom(" Nausea ".to_string(), "Nausea".to_string())
            .await
            .unwrap();
        service
            .rename_symptom("".to_string(), "Anything".to_string())
            .await
            .unwrap();

        let unchanged = service
            .treatment_repository
            .get_by_id("ginger-tea".to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged.symptoms, vec!["Nausea"]);
    }

    #[tokio::test]
    async fn rename_matches_exact_case_only() {
        let mut treatment = sample_treatment("Ginger Tea", 0.0, 0);
        treatment.symptoms = vec!["headache".to_string()];
        let service = service_with(vec![treatment], vec![]);

        service
            .rename_symptom("Headache".to_string(), "Migraine".to_string())
            .await
            .unwrap();

        let unchanged = service
            .treatment_repository
            .get_by_id("ginger-tea".to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged.symptoms, vec!["headache"]);
    }
}
