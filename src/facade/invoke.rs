use crate::{
    config::WorkflowConfig,
    error::{CoverError, Result},
    facade::{
        engine::WorkflowEngine,
        response::{error_response, is_preflight, json_response, preflight_response},
    },
    models::{ApiGatewayResponse, InvokeResponse},
};
use serde_json::Value;

pub async fn start_run(config: &WorkflowConfig, engine: &dyn WorkflowEngine) -> Result<String> {
    let state_machine_arn = config
        .state_machine_arn
        .as_deref()
        .ok_or_else(|| CoverError::ConfigError("STATE_MACHINE_ARN not configured".into()))?;
    engine.start_execution(state_machine_arn).await
}

/// Starts a cover run. No request body is required.
pub async fn handle_invoke(
    event: &Value,
    config: &WorkflowConfig,
    engine: &dyn WorkflowEngine,
) -> ApiGatewayResponse {
    if is_preflight(event) {
        return preflight_response();
    }

    match start_run(config, engine).await {
        Ok(execution_arn) => json_response(200, &InvokeResponse { execution_arn }),
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionStatus;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingEngine {
        started: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl WorkflowEngine for RecordingEngine {
        async fn start_execution(&self, state_machine_arn: &str) -> Result<String> {
            if self.fail {
                return Err(CoverError::WorkflowError("ExecutionLimitExceeded".into()));
            }
            self.started.lock().unwrap().push(state_machine_arn.to_string());
            Ok(format!("{}:run-1", state_machine_arn.replace("stateMachine", "execution")))
        }

        async fn describe_execution(&self, _: &str) -> Result<ExecutionStatus> {
            unreachable!("invoke never describes executions")
        }
    }

    fn body(response: &ApiGatewayResponse) -> Value {
        serde_json::from_str(&response.body).unwrap()
    }

    #[tokio::test]
    async fn unset_state_machine_is_a_server_error() {
        let engine = RecordingEngine::default();
        let response = handle_invoke(&json!({}), &WorkflowConfig::default(), &engine).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(body(&response), json!({"error": "STATE_MACHINE_ARN not configured"}));
        assert_eq!(response.headers["Access-Control-Allow-Origin"], "*");
        assert!(engine.started.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn returns_execution_arn() {
        let engine = RecordingEngine::default();
        let config = WorkflowConfig::default()
            .with_state_machine("arn:aws:states:us-east-1:123456789012:stateMachine:Covers");

        let response = handle_invoke(&json!({}), &config, &engine).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(
            body(&response),
            json!({"executionArn": "arn:aws:states:us-east-1:123456789012:execution:Covers:run-1"})
        );
        assert_eq!(engine.started.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn engine_failure_is_wrapped() {
        let engine = RecordingEngine {
            fail: true,
            ..Default::default()
        };
        let config = WorkflowConfig::default().with_state_machine("arn:aws:states:x");

        let response = handle_invoke(&json!({}), &config, &engine).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(body(&response), json!({"error": "ExecutionLimitExceeded"}));
    }

    #[tokio::test]
    async fn preflight_does_not_start_a_run() {
        let engine = RecordingEngine::default();
        let config = WorkflowConfig::default().with_state_machine("arn:aws:states:x");

        let response = handle_invoke(&json!({"httpMethod": "OPTIONS"}), &config, &engine).await;

        assert_eq!(response.status_code, 200);
        assert!(engine.started.lock().unwrap().is_empty());
    }
}
