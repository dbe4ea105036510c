use crate::{
    bedrock::ImageGenerator,
    config::CoverConfig,
    error::{CoverError, Result},
    logger,
    models::{AuthorName, BackgroundHandoff, ImageGenerationRequest, TitleSpec},
    storage::{CoverKeys, ObjectStore},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

pub fn build_prompt(title: &str) -> String {
    format!(
        "A fantasy background image with a theme of {}, vibrant colors, detailed artwork, no text or words",
        title
    )
}

pub fn build_generation_request(title: &str, config: &CoverConfig) -> ImageGenerationRequest {
    ImageGenerationRequest {
        prompt: build_prompt(title),
        model_id: config.model_id.clone(),
        width: config.image.width,
        height: config.image.height,
        num_images: config.image.num_images,
        quality: config.image.quality.clone(),
        cfg_scale: config.image.cfg_scale,
        steps: config.image.steps,
        seed: config.image.seed,
    }
}

/// MIME type of an encoded image, falling back to PNG.
pub fn content_type_of(bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or("image/png")
}

/// Generates the background for `title`, stores the decoded image at the
/// background key and returns everything the compositor needs.
pub async fn request_background(
    title: &TitleSpec,
    author: &AuthorName,
    config: &CoverConfig,
    generator: &dyn ImageGenerator,
    store: &dyn ObjectStore,
) -> Result<BackgroundHandoff> {
    let display_title = title.display_title();
    let keys = CoverKeys::for_title(&config.bucket, &display_title);
    let request = build_generation_request(&display_title, config);

    let response = {
        let _timer = logger::timer("background generation");
        generator.generate(&request).await?
    };

    let image_bytes = STANDARD
        .decode(response.image_data.trim())
        .map_err(|e| CoverError::GenerationError(format!("image data is not base64: {}", e)))?;

    log::info!(
        "🖼️  Storing {} byte background at {}",
        image_bytes.len(),
        keys.background_object()
    );
    let content_type = content_type_of(&image_bytes);
    store
        .put_object(&keys.bucket, &keys.background_key, image_bytes, content_type)
        .await?;

    Ok(BackgroundHandoff {
        title: display_title,
        author: author.to_string(),
        title_spec: Some(title.clone()),
        model_id: response.model,
        background_object: keys.background_object(),
        cover_object: keys.cover_object(),
        output_url: keys.output_url(),
        bucket: keys.bucket,
        background_key: keys.background_key,
        cover_key: keys.cover_key,
    })
}
