use covergen::{
    bedrock::load_sdk_config,
    config::CoverConfig,
    logger,
    models::{unwrap_stage_event, BackgroundHandoff, CoverResult, StageEnvelope},
    pipeline::{render_cover, CoverFont},
    storage::{object_store_for, ObjectStore},
};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;

struct CoverStage {
    font: CoverFont,
    store: Arc<dyn ObjectStore>,
}

/// Second workflow step. Takes the background stage output, enveloped or bare.
async fn handle_request(
    event: LambdaEvent<Value>,
    stage: &CoverStage,
) -> Result<StageEnvelope<CoverResult>, Error> {
    logger::set_request_id(Some(event.context.request_id.clone()));

    let handoff: BackgroundHandoff = unwrap_stage_event(event.payload)?;
    let result = render_cover(&handoff, &stage.font, stage.store.as_ref())
        .await
        .map_err(|e| {
            log::error!("❌ Cover stage failed for '{}': {}", handoff.title, e);
            e
        })?;

    log::info!("✅ Cover ready at {}", result.output_url);
    Ok(StageEnvelope::ok(result))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init().map_err(Error::from)?;

    let config = CoverConfig::from_env();
    let sdk_config = load_sdk_config(&config.aws).await;
    let stage = CoverStage {
        font: CoverFont::from_config(&config)?,
        store: object_store_for(&config, &sdk_config),
    };
    let stage = &stage;

    lambda_runtime::run(service_fn(move |event| handle_request(event, stage))).await
}
