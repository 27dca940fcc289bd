/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::responses::unwrap_envelope;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

/// Sends one HTTP request to the router
///
/// The response is returned whatever its status; mapping statuses to errors
/// is up to the caller since login and endpoint calls read them differently.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `query` - Query string parameters
/// * `form` - Optional body, sent as `application/x-www-form-urlencoded`
/// * `timeout_secs` - Per-request timeout
///
/// # Returns
///
/// * `Ok(Response)` - The router answered
/// * `Err(AppError::Timeout)` - No answer within `timeout_secs`
/// * `Err(AppError::Network)` - Connection refused, DNS failure, TLS error...
pub async fn make_http_request<B: Serialize + ?Sized>(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    query: &[(&str, &str)],
    form: Option<&B>,
    timeout_secs: u64,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client
        .request(method, url)
        .timeout(Duration::from_secs(timeout_secs));

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if !query.is_empty() {
        request = request.query(query);
    }

    if let Some(body) = form {
        request = request.form(body);
    }

    let response = request
        .send()
        .await
        .map_err(|e| transport_error(e, url, timeout_secs))?;

    debug!("Response status: {}", response.status());
    Ok(response)
}

fn transport_error(e: reqwest::Error, url: &str, timeout_secs: u64) -> AppError {
    if e.is_timeout() {
        error!("Request to {} timed out after {}s", url, timeout_secs);
        AppError::Timeout(timeout_secs)
    } else {
        error!("Request to {} failed: {}", url, e);
        AppError::Network(e)
    }
}

/// Reads a response body as JSON and strips the router's array envelope
///
/// The request timeout keeps running while the body streams in; a router
/// that sends headers and then stalls yields [`AppError::Timeout`] with
/// `timeout_secs`. A body that is not JSON at all is a
/// [`AppError::Protocol`] error.
pub async fn read_json(response: Response, timeout_secs: u64) -> Result<Value, AppError> {
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .map_err(|e| transport_error(e, &url, timeout_secs))?;
    parse_json(&body)
}

/// Parses a response body, see [`read_json`]
pub fn parse_json(body: &str) -> Result<Value, AppError> {
    if body.trim().is_empty() {
        return Err(AppError::Protocol("empty response body".to_string()));
    }
    let value: Value = serde_json::from_str(body)
        .map_err(|e| AppError::Protocol(format!("response is not valid JSON: {e}")))?;
    Ok(unwrap_envelope(value))
}
