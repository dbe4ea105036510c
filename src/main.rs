use covergen::{
    bedrock::{load_sdk_config, BedrockClient, ImageClient},
    config::CoverConfig,
    logger,
    pipeline::{render_cover, request_background, CoverFont},
    storage::object_store_for,
    title::{title_rng, TitleGenerator},
};
use std::env;

/// Runs one cover through both stages without the workflow engine and prints
/// the result as JSON. Set `COVER_LOCAL_DIR` to keep everything on disk
/// (Bedrock is still called for the background).
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    logger::init_with_config(logger::LoggerConfig::from_env())?;

    let config = CoverConfig::from_env();
    logger::log_config_info(&config);

    if env::var("AWS_ACCESS_KEY_ID").is_err() && env::var("AWS_PROFILE").is_err() {
        log::warn!("⚠️  No AWS credentials in environment variables, will try default credential chain");
    }

    log::info!("🖼️  Available image generation models:");
    for (id, name, provider) in ImageClient::supported_models() {
        log::info!("  {} - {} ({})", id, name, provider);
    }

    let sdk_config = load_sdk_config(&config.aws).await;
    let bedrock = BedrockClient::from_sdk_config(&sdk_config);
    let store = object_store_for(&config, &sdk_config);
    let font = CoverFont::from_config(&config)?;

    let mut rng = title_rng(config.title_seed);
    let (title, author) = TitleGenerator::default().generate(&mut rng)?;
    log::info!("📖 '{}' by {}", title, author);

    let handoff = match request_background(&title, &author, &config, bedrock.image(), store.as_ref()).await {
        Ok(handoff) => handoff,
        Err(e) => {
            log::error!("❌ Background generation failed: {}", e);
            return Err(e.into());
        }
    };

    let result = render_cover(&handoff, &font, store.as_ref()).await?;
    log::info!("🎉 Cover written to {}", handoff.cover_object);

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
