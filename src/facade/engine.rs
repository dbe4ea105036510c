use crate::{
    error::{CoverError, Result},
    models::ExecutionStatus,
};
use async_trait::async_trait;
use aws_sdk_sfn::{error::ProvideErrorMetadata, Client};

/// The managed workflow engine that sequences the pipeline stages.
#[async_trait]
pub trait WorkflowEngine: Send + Sync {
    /// Starts a run and returns its execution ARN.
    async fn start_execution(&self, state_machine_arn: &str) -> Result<String>;

    async fn describe_execution(&self, execution_arn: &str) -> Result<ExecutionStatus>;
}

#[derive(Clone)]
pub struct StepFunctionsEngine {
    client: Client,
}

impl StepFunctionsEngine {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_sdk_config(config: &aws_config::SdkConfig) -> Self {
        Self::new(Client::new(config))
    }
}

fn workflow_error<E>(action: &str, e: aws_sdk_sfn::error::SdkError<E>) -> CoverError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    match e.as_service_error() {
        Some(service_error) => CoverError::WorkflowError(format!(
            "{}: {} - {}",
            action,
            service_error.code().unwrap_or("unknown"),
            service_error.message().unwrap_or("no message")
        )),
        None => CoverError::WorkflowError(format!("{}: {}", action, e)),
    }
}

#[async_trait]
impl WorkflowEngine for StepFunctionsEngine {
    async fn start_execution(&self, state_machine_arn: &str) -> Result<String> {
        let output = self
            .client
            .start_execution()
            .state_machine_arn(state_machine_arn)
            .send()
            .await
            .map_err(|e| workflow_error("failed to start execution", e))?;

        log::info!("▶️  Started execution {}", output.execution_arn());
        Ok(output.execution_arn().to_string())
    }

    async fn describe_execution(&self, execution_arn: &str) -> Result<ExecutionStatus> {
        let output = self
            .client
            .describe_execution()
            .execution_arn(execution_arn)
            .send()
            .await
            .map_err(|e| workflow_error("failed to describe execution", e))?;

        Ok(ExecutionStatus {
            status: output.status().as_str().to_string(),
            output: output.output().unwrap_or("{}").to_string(),
        })
    }
}
