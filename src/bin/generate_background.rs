use covergen::{
    bedrock::{load_sdk_config, BedrockClient},
    config::CoverConfig,
    logger,
    models::StageEnvelope,
    pipeline::request_background,
    storage::{object_store_for, ObjectStore},
    title::{title_rng, TitleGenerator},
    BackgroundHandoff,
};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;

struct BackgroundStage {
    config: CoverConfig,
    bedrock: BedrockClient,
    store: Arc<dyn ObjectStore>,
    titles: TitleGenerator,
}

/// First workflow step. The incoming event is ignored; every run draws a
/// fresh title.
async fn handle_request(
    event: LambdaEvent<Value>,
    stage: &BackgroundStage,
) -> Result<StageEnvelope<BackgroundHandoff>, Error> {
    logger::set_request_id(Some(event.context.request_id.clone()));

    let mut rng = title_rng(stage.config.title_seed);
    let (title, author) = stage.titles.generate(&mut rng)?;
    log::info!("📖 Generating background for '{}' by {}", title, author);

    let handoff = request_background(
        &title,
        &author,
        &stage.config,
        stage.bedrock.image(),
        stage.store.as_ref(),
    )
    .await
    .map_err(|e| {
        log::error!("❌ Background stage failed: {}", e);
        e
    })?;

    Ok(StageEnvelope::ok(handoff))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init().map_err(Error::from)?;

    let config = CoverConfig::from_env();
    logger::log_config_info(&config);

    let sdk_config = load_sdk_config(&config.aws).await;
    let stage = BackgroundStage {
        bedrock: BedrockClient::from_sdk_config(&sdk_config),
        store: object_store_for(&config, &sdk_config),
        titles: TitleGenerator::default(),
        config,
    };
    let stage = &stage;

    lambda_runtime::run(service_fn(move |event| handle_request(event, stage))).await
}
