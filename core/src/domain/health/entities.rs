use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StoreHealthStatus {
    pub status: String,
    pub treatment_count: u64,
}

impl StoreHealthStatus {
    pub fn ok(treatment_count: u64) -> Self {
        Self {
            status: "ok".to_string(),
            treatment_count,
        }
    }

    pub fn degraded() -> Self {
        Self {
            status: "degraded".to_string(),
            treatment_count: 0,
        }
    }
}
