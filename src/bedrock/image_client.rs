use crate::{
    bedrock::traits::ImageGenerator,
    error::{CoverError, Result},
    models::{
        ImageGenerationRequest, ImageGenerationResponse, StabilityImageResponse,
        TitanImageResponse,
    },
};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::{error::ProvideErrorMetadata, primitives::Blob, Client};
use serde_json::{json, Value};

/// Request/response dialect spoken by a Bedrock image model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageModelFamily {
    Titan,
    Stability,
}

impl ImageModelFamily {
    pub fn from_model_id(model_id: &str) -> Result<Self> {
        if model_id.starts_with("amazon.titan-image-generator") {
            Ok(ImageModelFamily::Titan)
        } else if model_id.starts_with("stability.") {
            Ok(ImageModelFamily::Stability)
        } else {
            Err(CoverError::GenerationError(format!(
                "Unsupported image model: {}",
                model_id
            )))
        }
    }
}

pub fn build_payload(family: ImageModelFamily, request: &ImageGenerationRequest) -> Value {
    match family {
        ImageModelFamily::Titan => json!({
            "taskType": "TEXT_IMAGE",
            "textToImageParams": {
                "text": request.prompt
            },
            "imageGenerationConfig": {
                "numberOfImages": request.num_images,
                "quality": request.quality,
                "cfgScale": request.cfg_scale,
                "height": request.height,
                "width": request.width,
                "seed": request.seed
            }
        }),
        ImageModelFamily::Stability => json!({
            "text_prompts": [{ "text": request.prompt }],
            "cfg_scale": request.cfg_scale,
            "height": request.height,
            "width": request.width,
            "steps": request.steps,
            "seed": request.seed
        }),
    }
}

/// Pulls the first base64 image out of a model response body.
pub fn first_image(family: ImageModelFamily, body: &[u8]) -> Result<String> {
    let image = match family {
        ImageModelFamily::Titan => {
            let response: TitanImageResponse = serde_json::from_slice(body)
                .map_err(|e| CoverError::GenerationError(format!("bad Titan response: {}", e)))?;
            response.images.into_iter().next()
        }
        ImageModelFamily::Stability => {
            let response: StabilityImageResponse = serde_json::from_slice(body).map_err(|e| {
                CoverError::GenerationError(format!("bad Stability response: {}", e))
            })?;
            response.artifacts.into_iter().next().map(|artifact| artifact.base64)
        }
    };

    image.ok_or_else(|| CoverError::GenerationError("No images generated".into()))
}

#[derive(Clone)]
pub struct ImageClient {
    client: Client,
}

impl ImageClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn supported_models() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("amazon.titan-image-generator-v1", "Titan Image Generator G1", "Amazon"),
            ("amazon.titan-image-generator-v2:0", "Titan Image Generator G1 v2", "Amazon"),
            ("stability.stable-diffusion-xl-v1", "Stable Diffusion XL", "Stability AI"),
        ]
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    async fn generate(&self, request: &ImageGenerationRequest) -> Result<ImageGenerationResponse> {
        let family = ImageModelFamily::from_model_id(&request.model_id)?;
        let request_json = serde_json::to_string(&build_payload(family, request))?;

        log::info!("Generating image with model: {}", request.model_id);
        log::debug!("Image generation request payload: {}", request_json);

        let response = self
            .client
            .invoke_model()
            .model_id(&request.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(request_json.into_bytes()))
            .send()
            .await
            .map_err(|e| {
                log::error!("Bedrock image generation error details: {:?}", e);

                if let Some(service_error) = e.as_service_error() {
                    CoverError::GenerationError(format!(
                        "Bedrock service error: {} - {}",
                        service_error.code().unwrap_or("unknown"),
                        service_error.message().unwrap_or("no message")
                    ))
                } else {
                    CoverError::GenerationError(format!("AWS SDK error: {}", e))
                }
            })?;

        let image_data = first_image(family, response.body.as_ref())?;

        Ok(ImageGenerationResponse {
            image_data,
            model: request.model_id.clone(),
        })
    }
}
