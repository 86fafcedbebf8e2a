use crate::{
    domain::common::{HerbfulConfig, services::Service},
    infrastructure::{
        authentication::repositories::auth_state_repository::FileAuthStateRepository,
        db::RealtimeDb, object_storage::minio::MinioObjectStorage,
        review::repositories::review_repository::RealtimeReviewRepository,
        symptom::repositories::symptom_repository::RealtimeSymptomIndexRepository,
        treatment::repositories::treatment_repository::RealtimeTreatmentRepository,
    },
};

pub type HerbfulService = Service<
    RealtimeTreatmentRepository,
    RealtimeReviewRepository,
    RealtimeSymptomIndexRepository,
    FileAuthStateRepository,
    MinioObjectStorage,
>;

/// Wires the production adapters together from configuration.
pub async fn create_service(config: HerbfulConfig) -> Result<HerbfulService, anyhow::Error> {
    let db = RealtimeDb::new(config.database);
    let object_storage = MinioObjectStorage::new(config.object_storage).await;

    Ok(Service::new(
        RealtimeTreatmentRepository::new(db.clone()),
        RealtimeReviewRepository::new(db.clone()),
        RealtimeSymptomIndexRepository::new(db),
        FileAuthStateRepository::new(config.auth),
        object_storage,
    ))
}
