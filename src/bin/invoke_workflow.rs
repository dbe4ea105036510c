use covergen::{
    bedrock::load_sdk_config,
    config::{AwsConfig, WorkflowConfig},
    facade::{handle_invoke, StepFunctionsEngine},
    logger,
    models::ApiGatewayResponse,
};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    config: &WorkflowConfig,
    engine: &StepFunctionsEngine,
) -> Result<ApiGatewayResponse, Error> {
    logger::set_request_id(Some(event.context.request_id.clone()));
    Ok(handle_invoke(&event.payload, config, engine).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init().map_err(Error::from)?;

    let config = WorkflowConfig::from_env();
    if config.state_machine_arn.is_none() {
        log::warn!("⚠️  STATE_MACHINE_ARN is not set; every request will fail");
    }
    let engine = StepFunctionsEngine::from_sdk_config(&load_sdk_config(&AwsConfig::from_env()).await);
    let (config, engine) = (&config, &engine);

    lambda_runtime::run(service_fn(move |event| handle_request(event, config, engine))).await
}
