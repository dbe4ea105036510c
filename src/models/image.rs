use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    pub model_id: String,
    pub width: u32,
    pub height: u32,
    pub num_images: u32,
    pub quality: String,
    pub cfg_scale: f32,
    pub steps: u32,
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerationResponse {
    pub image_data: String, // Base64 encoded
    pub model: String,
}

#[derive(Serialize, Deserialize)]
pub struct TitanImageResponse {
    pub images: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct StabilityArtifact {
    pub base64: String,
    #[serde(rename = "finishReason", default)]
    pub finish_reason: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct StabilityImageResponse {
    pub artifacts: Vec<StabilityArtifact>,
}
