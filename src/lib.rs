//! Serverless fantasy book cover generator.
//!
//! A run draws a random title and author, asks a Bedrock image model for a
//! background, overlays the title on it and stores the finished cover in S3.
//! The two stages run as separate Lambda functions sequenced by Step
//! Functions; two more functions let a browser start a run and poll it.

pub mod bedrock;
pub mod config;
pub mod error;
pub mod facade;
pub mod logger;
pub mod models;
pub mod pipeline;
pub mod storage;
pub mod title;

pub use bedrock::{load_sdk_config, BedrockClient, ImageClient, ImageGenerator};
pub use config::{AwsConfig, CoverConfig, ImageSettings, WorkflowConfig};
pub use error::{CoverError, Result};
pub use models::{
    AuthorName, BackgroundHandoff, CoverResult, StageEnvelope, TitleClauses, TitleSpec,
};
pub use pipeline::{render_cover, request_background, CoverFont};
pub use storage::{object_store_for, ObjectStore};
pub use title::TitleGenerator;
