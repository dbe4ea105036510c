pub mod image_client;
pub mod traits;

use crate::config::AwsConfig;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_bedrockruntime::config::{Credentials, Region};
use aws_sdk_bedrockruntime::Client;

pub use image_client::{ImageClient, ImageModelFamily};
pub use traits::ImageGenerator;

/// Shared SDK configuration for the Bedrock, S3 and Step Functions clients.
pub async fn load_sdk_config(aws: &AwsConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &aws.region {
        loader = loader.region(Region::new(region.clone()));
    }

    if let (Some(access_key), Some(secret_key)) = (&aws.access_key, &aws.secret_key) {
        loader = loader.credentials_provider(Credentials::new(
            access_key,
            secret_key,
            None,
            None,
            "covergen",
        ));
    }

    loader.load().await
}

#[derive(Clone)]
pub struct BedrockClient {
    image_client: ImageClient,
}

impl BedrockClient {
    pub async fn new(aws: &AwsConfig) -> Self {
        Self::from_sdk_config(&load_sdk_config(aws).await)
    }

    pub fn from_sdk_config(config: &SdkConfig) -> Self {
        let client = Client::new(config);
        Self {
            image_client: ImageClient::new(client),
        }
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}
