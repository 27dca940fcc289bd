/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Error body the router sends with 4xx answers
///
/// `{"exception": {"domain": "...", "code": "429", "errors": [{"name": "...", "reason": "..."}]}}`
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiErrorResponse {
    /// Exception details
    #[serde(default)]
    pub exception: ApiException,
}

/// Exception block of an [`ApiErrorResponse`]
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiException {
    /// Error domain, usually the endpoint name
    #[serde(default)]
    pub domain: Option<String>,
    /// Individual errors
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

/// One entry of [`ApiException::errors`]
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiErrorDetail {
    /// Parameter or check that failed
    #[serde(default)]
    pub name: Option<String>,
    /// Human readable reason
    #[serde(default)]
    pub reason: Option<String>,
}

impl ApiErrorResponse {
    /// Parses an error body, `None` if it is not the router's error shape
    #[must_use]
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Reason of the first error, if any
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.exception
            .errors
            .first()
            .and_then(|e| e.reason.as_deref())
            .filter(|r| !r.is_empty())
    }
}

/// Unwraps the single-element array the router puts around most answers
#[must_use]
pub fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Array(mut items) if items.len() == 1 => items.remove(0),
        other => other,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn join_path(prefix: &str, path: &str) -> String {
    if path.is_empty() || path == "." {
        prefix.to_string()
    } else if prefix.is_empty() {
        path.to_string()
    } else if path.starts_with('[') {
        format!("{prefix}{path}")
    } else {
        format!("{prefix}.{path}")
    }
}

fn missing_field(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next()
}

/// Walks `path` from the response root and deserializes the record found there
///
/// Any mismatch becomes [`AppError::Validation`] whose field is the dotted
/// path from the root, e.g. `hosts.list[1].ethernet.speed`.
pub fn extract<T: DeserializeOwned>(value: Value, path: &[&str]) -> Result<T, AppError> {
    let mut current = value;
    for (depth, key) in path.iter().enumerate() {
        current = match current {
            Value::Object(mut map) => map
                .remove(*key)
                .ok_or_else(|| AppError::validation(path[..=depth].join("."), "missing field"))?,
            other => {
                let parent = if depth == 0 {
                    "<root>".to_string()
                } else {
                    path[..depth].join(".")
                };
                return Err(AppError::validation(
                    parent,
                    format!("expected an object, found {}", json_type(&other)),
                ));
            }
        };
    }

    let prefix = path.join(".");
    serde_path_to_error::deserialize(current).map_err(|err| {
        let message = err.inner().to_string();
        let mut field = join_path(&prefix, &err.path().to_string());
        if let Some(name) = missing_field(&message) {
            field = join_path(&field, name);
        }
        if field.is_empty() {
            field = "<root>".to_string();
        }
        AppError::validation(field, message)
    })
}
