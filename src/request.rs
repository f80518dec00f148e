//! Request construction for every C-CEX call.
//!
//! A call is described by a [`CallDescriptor`] and turned into a [`PreparedRequest`]
//! without any I/O. Private calls are signed here, as the very last step, over the
//! exact URL that the transport will send.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Method, Url};
use secrecy::ExposeSecret;
use tracing::debug;

use crate::client::Credentials;
use crate::error::{CcexError, Result};
use crate::signing::{sign, SIGNATURE_HEADER};

/// Query parameter carrying the remote call name.
pub const CALL_PARAM: &str = "a";

// =============================================================================
// Parameters
// =============================================================================

/// A primitive query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => write!(f, "{}", s),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::UInt(n) => write!(f, "{}", n),
            ParamValue::Float(n) => write!(f, "{}", n),
            ParamValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::UInt(u64::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::UInt(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// Insertion-ordered query parameters.
///
/// Names are stored as the exchange expects them: word separators are stripped, so
/// `type_` is sent as `type` and `currency_name` as `currencyname`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value under the same name.
    pub fn insert(&mut self, name: &str, value: impl Into<ParamValue>) {
        let name = normalize_param_name(name);
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of [`Params::insert`].
    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Like [`Params::with`], but an absent value leaves the parameter out entirely.
    pub fn with_opt<V: Into<ParamValue>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    /// Value stored under `name`, after normalization.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        let name = normalize_param_name(name);
        self.entries.iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Strip word separators from a parameter name (`market_id` -> `marketid`).
pub fn normalize_param_name(name: &str) -> String {
    name.chars().filter(|c| *c != '_').collect()
}

// =============================================================================
// Call descriptors
// =============================================================================

/// How the response of a call is enveloped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStyle {
    /// Static `.json` resource, returned as-is.
    Ticker,
    /// `{success, message, result}` envelope.
    Api,
}

impl CallStyle {
    pub fn for_path(path: &str) -> Self {
        if path.ends_with(".json") {
            CallStyle::Ticker
        } else {
            CallStyle::Api
        }
    }
}

/// Everything needed to issue one logical operation.
#[derive(Debug, Clone)]
pub struct CallDescriptor {
    /// SDK-side operation name, used for logging.
    pub operation: &'static str,
    /// Remote call name sent as `a=<call>`.
    pub call: &'static str,
    pub path: String,
    pub params: Params,
    pub authenticated: bool,
}

impl CallDescriptor {
    /// Describe an unauthenticated call with no parameters.
    pub fn new(operation: &'static str, call: &'static str, path: impl Into<String>) -> Self {
        Self {
            operation,
            call,
            path: path.into(),
            params: Params::new(),
            authenticated: false,
        }
    }

    /// Attach the call parameters.
    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Mark the call as private, so it gets signed.
    pub fn authenticated(mut self) -> Self {
        self.authenticated = true;
        self
    }
}

// =============================================================================
// Prepared requests
// =============================================================================

/// A fully built request, ready for the transport.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    /// Final URL including the serialized query. For private calls this is the signed URL.
    pub url: Url,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub style: CallStyle,
}

impl PreparedRequest {
    /// Value of a query parameter, if present.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// The `apisign` header, present on private calls.
    pub fn signature(&self) -> Option<&str> {
        self.headers
            .get(SIGNATURE_HEADER)
            .and_then(|v| v.to_str().ok())
    }
}

/// Build the request for `descriptor`, signing it when the call is authenticated.
pub fn build(
    base_url: &Url,
    descriptor: &CallDescriptor,
    credentials: Option<&Credentials>,
) -> Result<PreparedRequest> {
    build_with_nonce(base_url, descriptor, credentials, unix_nonce)
}

/// Same as [`build`], with the nonce supplied by `nonce` (only called for private calls).
pub(crate) fn build_with_nonce(
    base_url: &Url,
    descriptor: &CallDescriptor,
    credentials: Option<&Credentials>,
    nonce: impl FnOnce() -> u64,
) -> Result<PreparedRequest> {
    let mut query: Vec<(String, String)> = descriptor
        .params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    upsert(&mut query, CALL_PARAM, descriptor.call.to_string());

    let credentials = if descriptor.authenticated {
        let credentials = credentials
            .filter(|c| c.is_usable())
            .ok_or_else(|| CcexError::MissingCredentials {
                call: descriptor.call.to_string(),
            })?;
        upsert(&mut query, "apikey", credentials.api_key().to_string());
        upsert(&mut query, "nonce", nonce().to_string());
        Some(credentials)
    } else {
        None
    };

    // The path is one segment, so '/' and '?' in caller input are percent-encoded.
    let mut url = base_url.clone();
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| CcexError::Config(format!("Invalid base URL '{}'", base_url)))?
        .pop_if_empty()
        .push(descriptor.path.trim_start_matches('/'));
    url.query_pairs_mut()
        .clear()
        .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    let mut headers = HeaderMap::new();
    if let Some(credentials) = credentials {
        // Must stay last: the signature covers the final URL.
        let signature = sign(
            credentials.api_secret().expose_secret().as_bytes(),
            url.as_str().as_bytes(),
        )?;
        let value = HeaderValue::from_str(&signature)
            .map_err(|e| CcexError::Config(format!("Invalid signature header: {}", e)))?;
        headers.insert(SIGNATURE_HEADER, value);
    }

    debug!(
        operation = descriptor.operation,
        call = descriptor.call,
        path = %descriptor.path,
        authenticated = descriptor.authenticated,
        param_count = descriptor.params.len(),
        "Built C-CEX request"
    );

    Ok(PreparedRequest {
        method: Method::GET,
        url,
        query,
        headers,
        style: CallStyle::for_path(&descriptor.path),
    })
}

fn upsert(query: &mut Vec<(String, String)>, name: &str, value: String) {
    match query.iter_mut().find(|(k, _)| k == name) {
        Some(entry) => entry.1 = value,
        None => query.push((name.to_string(), value)),
    }
}

/// Current Unix time in seconds.
fn unix_nonce() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
