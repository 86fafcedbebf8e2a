use std::future::Future;

use bytes::Bytes;

use crate::domain::{
    common::entities::app_errors::CoreError, storage::value_objects::UploadTreatmentImageInput,
};

pub trait StorageService: Send + Sync {
    /// Stores the image, points the treatment's `image_url` at it and
    /// best-effort-deletes any replaced image. Returns the public URL.
    fn upload_treatment_image(
        &self,
        input: UploadTreatmentImageInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Best-effort deletion by public URL: URLs outside the configured store
    /// and backend failures are logged, never propagated.
    fn delete_treatment_image(
        &self,
        image_url: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ObjectStoragePort: Send + Sync {
    fn put_object(
        &self,
        object_key: String,
        payload: Bytes,
        content_type: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn delete_object(
        &self,
        object_key: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Public URL for an object key.
    fn object_url(&self, object_key: &str) -> String;

    /// Inverse of `object_url`; `None` when the URL does not belong to the
    /// configured store.
    fn object_key_for_url(&self, url: &str) -> Option<String>;
}
