use chrono::Utc;
use tracing::warn;

use crate::domain::{
    authentication::ports::AuthStateRepository,
    common::{entities::app_errors::CoreError, services::Service},
    review::ports::ReviewRepository,
    storage::{
        ports::{ObjectStoragePort, StorageService},
        value_objects::UploadTreatmentImageInput,
    },
    symptom::ports::SymptomIndexRepository,
    treatment::ports::TreatmentRepository,
};

const IMAGES_PREFIX: &str = "treatments/images";

impl<T, R, S, A, O> StorageService for Service<T, R, S, A, O>
where
    T: TreatmentRepository,
    R: ReviewRepository,
    S: SymptomIndexRepository,
    A: AuthStateRepository,
    O: ObjectStoragePort,
{
    async fn upload_treatment_image(
        &self,
        input: UploadTreatmentImageInput,
    ) -> Result<String, CoreError> {
        let treatment = self
            .treatment_repository
            .get_by_id(input.treatment_id.clone())
            .await?
            .ok_or(CoreError::NotFound)?;

        let object_key = format!(
            "{IMAGES_PREFIX}/{}/{}_{}",
            treatment.id,
            Utc::now().timestamp_millis(),
            input.file_name
        );

        self.object_storage
            .put_object(object_key.clone(), input.payload, input.content_type)
            .await?;

        let image_url = self.object_storage.object_url(&object_key);
        self.treatment_repository
            .patch_image_url(treatment.id.clone(), Some(image_url.clone()), Utc::now())
            .await?;

        // The replaced image is secondary; its deletion never fails the upload.
        if let Some(previous_url) = treatment.image_url {
            self.delete_treatment_image(previous_url).await?;
        }

        Ok(image_url)
    }

    async fn delete_treatment_image(&self, image_url: String) -> Result<(), CoreError> {
        let Some(object_key) = self.object_storage.object_key_for_url(&image_url) else {
            warn!(%image_url, "image url not in configured store, skipping deletion");
            return Ok(());
        };

        if let Err(err) = self.object_storage.delete_object(object_key).await {
            warn!(%image_url, %err, "failed to delete treatment image");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_fixtures::{sample_treatment, service_with};
    use crate::domain::treatment::ports::TreatmentRepository as _;
    use bytes::Bytes;

    #[tokio::test]
    async fn upload_patches_the_treatment_image_url() {
        let treatment = sample_treatment("Ginger Tea", 0.0, 0);
        let id = treatment.id.clone();
        let service = service_with(vec![treatment], vec![]);

        let url = service
            .upload_treatment_image(UploadTreatmentImageInput {
                treatment_id: id.clone(),
                file_name: "ginger.jpg".to_string(),
                content_type: "image/jpeg".to_string(),
                payload: Bytes::from_static(b"fake image"),
            })
            .await
            .unwrap();

        let updated = service
            .treatment_repository
            .get_by_id(id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.image_url, Some(url));
    }

    #[tokio::test]
    async fn upload_for_missing_treatment_is_not_found() {
        let service = service_with(vec![], vec![]);
        let result = service
            .upload_treatment_image(UploadTreatmentImageInput {
                treatment_id: "nope".to_string(),
                file_name: "x.jpg".to_string(),
                content_type: "image/jpeg".to_string(),
                payload: Bytes::new(),
            })
            .await;
        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn foreign_urls_are_skipped_without_error() {
        let service = service_with(vec![], vec![]);
        service
            .delete_treatment_image("https://elsewhere.example/img.png".to_string())
            .await
            .unwrap();
    }
}
