use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    symptom::entities::{SymptomEntry, SymptomIndex},
};

pub trait SymptomService: Send + Sync {
    fn list_symptoms(
        &self,
    ) -> impl Future<Output = Result<Vec<(String, SymptomEntry)>, CoreError>> + Send;

    /// Repair tooling: derives the whole index from scratch, discarding the
    /// previous contents.
    fn rebuild_symptom_index(&self) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Replaces exact (trimmed, case-sensitive) matches of `old_name` in every
    /// treatment's symptom list, then rebuilds the index.
    fn rename_symptom(
        &self,
        old_name: String,
        new_name: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// The index is small and always read and written as a whole.
#[cfg_attr(test, mockall::automock)]
pub trait SymptomIndexRepository: Send + Sync {
    fn load(&self) -> impl Future<Output = Result<SymptomIndex, CoreError>> + Send;

    fn store(&self, index: SymptomIndex) -> impl Future<Output = Result<(), CoreError>> + Send;
}
