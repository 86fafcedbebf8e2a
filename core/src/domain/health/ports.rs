use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, health::entities::StoreHealthStatus};

pub trait HealthCheckService: Send + Sync {
    /// Probes the backing store; never fails, a broken store reads as degraded.
    fn readiness(&self) -> impl Future<Output = Result<StoreHealthStatus, CoreError>> + Send;
}
