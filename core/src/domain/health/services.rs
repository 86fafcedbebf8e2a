use tracing::warn;

use crate::domain::{
    authentication::ports::AuthStateRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::{entities::StoreHealthStatus, ports::HealthCheckService},
    review::ports::ReviewRepository,
    storage::ports::ObjectStoragePort,
    symptom::ports::SymptomIndexRepository,
    treatment::ports::TreatmentRepository,
};

impl<T, R, S, A, O> HealthCheckService for Service<T, R, S, A, O>
where
    T: TreatmentRepository,
    R: ReviewRepository,
    S: SymptomIndexRepository,
    A: AuthStateRepository,
    O: ObjectStoragePort,
{
    async fn readiness(&self) -> Result<StoreHealthStatus, CoreError> {
        match self.treatment_repository.fetch_all().await {
            Ok(treatments) => Ok(StoreHealthStatus::ok(treatments.len() as u64)),
            Err(err) => {
                warn!(%err, "store readiness probe failed");
                Ok(StoreHealthStatus::degraded())
            }
        }
    }
}
