use crate::{
    error::{CoverError, Result},
    facade::{
        engine::WorkflowEngine,
        response::{error_response, is_preflight, json_response, preflight_response, request_body},
    },
    models::{ApiGatewayResponse, ExecutionStatus, StatusRequest},
};
use serde_json::Value;

pub async fn query_status(event: Value, engine: &dyn WorkflowEngine) -> Result<ExecutionStatus> {
    let body = request_body(event)?;
    let request: StatusRequest = serde_json::from_value(body)
        .map_err(|e| CoverError::ValidationError(format!("Malformed status request: {}", e)))?;

    let execution_arn = request
        .arn
        .filter(|arn| !arn.trim().is_empty())
        .ok_or_else(|| CoverError::ValidationError("Missing execution ARN".into()))?;

    engine.describe_execution(&execution_arn).await
}

/// Relays the status and output of the run named by `{ "arn": ... }`.
pub async fn handle_status(event: Value, engine: &dyn WorkflowEngine) -> ApiGatewayResponse {
    if is_preflight(&event) {
        return preflight_response();
    }

    match query_status(event, engine).await {
        Ok(status) => json_response(200, &status),
        Err(e) => error_response(&e),
    }
}
