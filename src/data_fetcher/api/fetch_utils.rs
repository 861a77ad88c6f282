//! Request execution: query serialization, credential cookies, body parsing

use reqwest::header::{COOKIE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use super::client::AuthCredential;
use crate::constants::cookies;
use crate::error::AppError;

/// A single query parameter value. Lists go out as one comma-joined
/// occurrence of the key, which is what the upstream expects for `view`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    List(Vec<String>),
}

impl ParamValue {
    fn render(&self) -> String {
        match self {
            ParamValue::Single(value) => value.clone(),
            ParamValue::List(values) => values.join(","),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Single(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<&[&str]> for ParamValue {
    fn from(values: &[&str]) -> Self {
        ParamValue::List(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ParamValue {
    fn from(values: [&str; N]) -> Self {
        ParamValue::from(&values[..])
    }
}

/// Ordered query parameters for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, ParamValue)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: &str, value: impl Into<ParamValue>) {
        self.0.push((key.to_string(), value.into()));
    }

    /// Key/value pairs as sent on the wire
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(key, value)| (key.clone(), value.render()))
            .collect()
    }
}

/// How a successful body is handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Single resource. The legacy family wraps these in a one-element
    /// array, so arrays are unwrapped to their first element.
    Single,
    /// Collection endpoints; arrays are returned as they are.
    Collection,
}

/// Cookie header value for private league access.
pub(super) fn cookie_header(credential: &AuthCredential) -> String {
    format!(
        "{}={}; {}={}",
        cookies::ESPN_S2,
        credential.espn_s2(),
        cookies::SWID,
        credential.swid()
    )
}

/// Merges the credential cookie into the caller's headers. A caller supplied
/// `Cookie` header is extended, never replaced.
pub(super) fn merge_headers(
    extra: &HeaderMap,
    credential: Option<&AuthCredential>,
) -> Result<HeaderMap, AppError> {
    let mut headers = extra.clone();
    let Some(credential) = credential else {
        return Ok(headers);
    };

    let cookie = match headers.get(COOKIE).and_then(|v| v.to_str().ok()) {
        Some(existing) if !existing.trim().is_empty() => {
            format!("{}; {}", existing.trim_end_matches(';'), cookie_header(credential))
        }
        _ => cookie_header(credential),
    };
    let value = HeaderValue::from_str(&cookie).map_err(|_| {
        AppError::config_error("espn_s2/SWID contain characters not allowed in a cookie")
    })?;
    headers.insert(COOKIE, value);
    Ok(headers)
}

/// Builds a header map from name/value pairs.
pub fn header_map(pairs: &[(&str, String)]) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| AppError::config_error(format!("Invalid header name {name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| AppError::config_error(format!("Invalid value for header {name}: {e}")))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

/// Issues one GET. No retries happen here; status handling is left to the
/// caller so that authorization failures can be redirected.
#[instrument(skip(client, headers, credential))]
pub(super) async fn execute(
    client: &Client,
    url: &str,
    params: &QueryParams,
    headers: &HeaderMap,
    credential: Option<&AuthCredential>,
) -> Result<Response, AppError> {
    info!("Fetching data from URL: {url}");
    let headers = merge_headers(headers, credential)?;

    match client
        .get(url)
        .query(&params.to_pairs())
        .headers(headers)
        .send()
        .await
    {
        Ok(response) => {
            debug!("Response status: {}", response.status());
            Ok(response)
        }
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            }
        }
    }
}

/// Reads and parses a successful body.
pub(super) async fn read_json(
    response: Response,
    url: &str,
    shape: ResponseShape,
) -> Result<Value, AppError> {
    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    parse_body(&response_text, url, shape)
}

pub(super) fn parse_body(text: &str, url: &str, shape: ResponseShape) -> Result<Value, AppError> {
    match serde_json::from_str::<Value>(text) {
        Ok(parsed) => Ok(match shape {
            ResponseShape::Single => unwrap_single(parsed),
            ResponseShape::Collection => parsed,
        }),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            if text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !text.trim_start().starts_with('{') && !text.trim_start().starts_with('[') {
                Err(AppError::api_malformed_json("Response is not valid JSON", url))
            } else {
                Err(AppError::ApiParse(e))
            }
        }
    }
}

/// Takes the first element of an array body. Length and element types are
/// not checked; an empty array becomes `null` and normalizes to defaults.
pub fn unwrap_single(value: Value) -> Value {
    match value {
        Value::Array(items) => items.into_iter().next().unwrap_or(Value::Null),
        other => other,
    }
}
