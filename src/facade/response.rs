use crate::{
    error::{CoverError, Result},
    models::{ApiGatewayResponse, ErrorBody},
};
use serde::Serialize;
use serde_json::{json, Value};

pub fn cors_headers() -> Value {
    json!({
        "Content-Type": "application/json",
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Headers": "Content-Type",
        "Access-Control-Allow-Methods": "GET,POST,OPTIONS"
    })
}

/// Builds every facade response: JSON body plus permissive CORS headers.
pub fn json_response(status_code: u16, payload: &impl Serialize) -> ApiGatewayResponse {
    match serde_json::to_string(payload) {
        Ok(body) => ApiGatewayResponse {
            status_code,
            headers: cors_headers(),
            body,
        },
        Err(e) => ApiGatewayResponse {
            status_code: 500,
            headers: cors_headers(),
            body: json!({ "error": e.to_string() }).to_string(),
        },
    }
}

pub fn error_response(error: &CoverError) -> ApiGatewayResponse {
    log::warn!("Responding {} to request: {}", error.status_code(), error);
    json_response(
        error.status_code(),
        &ErrorBody {
            error: error.message().to_string(),
        },
    )
}

pub fn preflight_response() -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: 200,
        headers: cors_headers(),
        body: String::new(),
    }
}

/// True for CORS preflight requests from either API Gateway payload version.
pub fn is_preflight(event: &Value) -> bool {
    event
        .get("httpMethod")
        .or_else(|| event.pointer("/requestContext/http/method"))
        .and_then(Value::as_str)
        .map(|method| method.eq_ignore_ascii_case("OPTIONS"))
        .unwrap_or(false)
}

/// The JSON request body of an API Gateway event. Events without a `body`
/// field are treated as direct invocations and returned whole.
pub fn request_body(event: Value) -> Result<Value> {
    let Value::Object(mut object) = event else {
        return Err(CoverError::ValidationError(
            "Request payload must be a JSON object".into(),
        ));
    };

    match object.remove("body") {
        None => Ok(Value::Object(object)),
        Some(Value::Null) => Ok(json!({})),
        Some(body @ Value::Object(_)) => Ok(body),
        Some(Value::String(text)) if text.trim().is_empty() => Ok(json!({})),
        Some(Value::String(text)) => serde_json::from_str(&text)
            .map_err(|e| CoverError::ValidationError(format!("Malformed JSON body: {}", e))),
        Some(_) => Err(CoverError::ValidationError(
            "Request body must be a JSON object".into(),
        )),
    }
}
