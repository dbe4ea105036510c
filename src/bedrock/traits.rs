use crate::{
    error::Result,
    models::{ImageGenerationRequest, ImageGenerationResponse},
};
use async_trait::async_trait;

#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, request: &ImageGenerationRequest) -> Result<ImageGenerationResponse>;
}
