use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Credentials, Region},
    primitives::ByteStream,
};
use bytes::Bytes;
use tracing::{info, instrument};

use crate::domain::{
    common::{ObjectStorageConfig, entities::app_errors::CoreError},
    storage::ports::ObjectStoragePort,
};

/// S3-compatible blob store holding the treatment images in a single bucket.
#[derive(Clone)]
pub struct MinioObjectStorage {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl MinioObjectStorage {
    pub async fn new(config: ObjectStorageConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "herbful",
        );

        let endpoint = config.endpoint.trim_end_matches('/');

        info!(
            endpoint = %endpoint,
            region = %config.region,
            bucket = %config.bucket,
            "initializing object storage client"
        );

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(endpoint)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket,
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl ObjectStoragePort for MinioObjectStorage {
    #[instrument(skip(self, payload))]
    async fn put_object(
        &self,
        object_key: String,
        payload: Bytes,
        content_type: String,
    ) -> Result<(), CoreError> {
        let payload_size = payload.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&object_key)
            .content_type(&content_type)
            .body(ByteStream::from(payload))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    object_key = %object_key,
                    payload_size,
                    "failed to upload object"
                );
                CoreError::ObjectStorageError(format!("failed to upload object: {e}"))
            })?;

        info!(bucket = %self.bucket, object_key = %object_key, size = payload_size, "object uploaded");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_object(&self, object_key: String) -> Result<(), CoreError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(&object_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    object_key = %object_key,
                    "failed to delete object"
                );
                CoreError::ObjectStorageError(format!("failed to delete object: {e}"))
            })?;

        info!(bucket = %self.bucket, object_key = %object_key, "object deleted");
        Ok(())
    }

    fn object_url(&self, object_key: &str) -> String {
        format!("{}/{}/{}", self.public_base_url, self.bucket, object_key)
    }

    fn object_key_for_url(&self, url: &str) -> Option<String> {
        let prefix = format!("{}/{}/", self.public_base_url, self.bucket);
        url.strip_prefix(&prefix)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
    }
}
