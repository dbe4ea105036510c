use crate::error::{CoverError, Result};
use crate::models::TitleSpec;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Output of the background stage and the only input of the compositor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundHandoff {
    pub title: String,
    pub author: String,
    /// Absent in payloads produced before the structured title was carried;
    /// the compositor then parses `title` instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_spec: Option<TitleSpec>,
    pub model_id: String,
    pub bucket: String,
    pub background_key: String,
    pub background_object: String,
    pub cover_key: String,
    pub cover_object: String,
    pub output_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverResult {
    pub title: String,
    pub author: String,
    #[serde(rename = "output")]
    pub output_url: String,
}

/// `{ "statusCode": 200, "body": ... }`, the shape each stage hands back to
/// the workflow. Pollers read the cover URL from `output.body.output`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageEnvelope<T> {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: T,
}

impl<T> StageEnvelope<T> {
    pub fn ok(body: T) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }
}

/// Accepts either a bare payload or one wrapped in a stage envelope, with the
/// body given as an object or as a JSON string.
pub fn unwrap_stage_event<T: DeserializeOwned>(event: Value) -> Result<T> {
    let payload = match event {
        Value::Object(mut object) => match object.remove("body") {
            Some(Value::String(text)) => serde_json::from_str(&text).map_err(|e| {
                CoverError::ValidationError(format!("Malformed JSON body: {}", e))
            })?,
            Some(body @ Value::Object(_)) => body,
            Some(_) => {
                return Err(CoverError::ValidationError(
                    "Request body must be a JSON object".into(),
                ))
            }
            None => Value::Object(object),
        },
        _ => {
            return Err(CoverError::ValidationError(
                "Stage payload must be a JSON object".into(),
            ))
        }
    };

    serde_json::from_value(payload)
        .map_err(|e| CoverError::ValidationError(format!("Malformed stage payload: {}", e)))
}
