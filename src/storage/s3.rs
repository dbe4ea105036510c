use crate::{
    error::{CoverError, Result},
    storage::traits::ObjectStore,
};
use async_trait::async_trait;
use aws_sdk_s3::{error::ProvideErrorMetadata, primitives::ByteStream, Client};

#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_sdk_config(config: &aws_config::SdkConfig) -> Self {
        Self::new(Client::new(config))
    }
}

fn storage_error<E>(action: &str, bucket: &str, key: &str, e: aws_sdk_s3::error::SdkError<E>) -> CoverError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    if let Some(service_error) = e.as_service_error() {
        CoverError::StorageError(format!(
            "failed to {} s3://{}/{}: {} - {}",
            action,
            bucket,
            key,
            service_error.code().unwrap_or("unknown"),
            service_error.message().unwrap_or("no message")
        ))
    } else {
        CoverError::StorageError(format!("failed to {} s3://{}/{}: {}", action, bucket, key, e))
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        log::debug!("Writing {} bytes to s3://{}/{}", body.len(), bucket, key);

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map(|_| ())
            .map_err(|e| storage_error("write", bucket, key, e))
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        log::debug!("Reading s3://{}/{}", bucket, key);

        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| storage_error("read", bucket, key, e))?;

        let bytes = response.body.collect().await.map_err(|e| {
            CoverError::StorageError(format!(
                "failed to read body of s3://{}/{}: {}",
                bucket, key, e
            ))
        })?;

        Ok(bytes.into_bytes().to_vec())
    }
}
