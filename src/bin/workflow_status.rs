use covergen::{
    bedrock::load_sdk_config,
    config::AwsConfig,
    facade::{handle_status, StepFunctionsEngine},
    logger,
    models::ApiGatewayResponse,
};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    engine: &StepFunctionsEngine,
) -> Result<ApiGatewayResponse, Error> {
    logger::set_request_id(Some(event.context.request_id.clone()));
    Ok(handle_status(event.payload, engine).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init().map_err(Error::from)?;

    let engine = StepFunctionsEngine::from_sdk_config(&load_sdk_config(&AwsConfig::from_env()).await);
    let engine = &engine;

    lambda_runtime::run(service_fn(move |event| handle_request(event, engine))).await
}
