use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{
    authentication::ports::AuthStateRepository, review::ports::ReviewRepository,
    storage::ports::ObjectStoragePort, symptom::ports::SymptomIndexRepository,
    treatment::ports::TreatmentRepository,
};

/// Aggregate service over the five ports of the system. Every domain service
/// trait is implemented on this struct; collaborators arrive by constructor
/// injection.
#[derive(Clone)]
pub struct Service<T, R, S, A, O>
where
    T: TreatmentRepository,
    R: ReviewRepository,
    S: SymptomIndexRepository,
    A: AuthStateRepository,
    O: ObjectStoragePort,
{
    pub treatment_repository: T,
    pub review_repository: R,
    pub symptom_repository: S,
    pub auth_repository: A,
    pub object_storage: O,
    // Serializes rating recomputes so two review mutations cannot interleave
    // their fetch-compute-write cycles against the same treatment.
    pub(crate) rating_lock: Arc<Mutex<()>>,
}

impl<T, R, S, A, O> Service<T, R, S, A, O>
where
    T: TreatmentRepository,
    R: ReviewRepository,
    S: SymptomIndexRepository,
    A: AuthStateRepository,
    O: ObjectStoragePort,
{
    pub fn new(
        treatment_repository: T,
        review_repository: R,
        symptom_repository: S,
        auth_repository: A,
        object_storage: O,
    ) -> Self {
        Self {
            treatment_repository,
            review_repository,
            symptom_repository,
            auth_repository,
            object_storage,
            rating_lock: Arc::new(Mutex::new(())),
        }
    }
}
