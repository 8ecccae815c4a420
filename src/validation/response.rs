//! Checks applied to authenticated gateway responses before anything is handed to the caller.

use serde_json::Value;

use crate::Result;
use crate::error::Error;
use crate::validation::is_url;

#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    NonEmptyString,
    Url,
}

/// Required keys of a response body and the constraint each value must satisfy.
pub type ResponseShape = &'static [(&'static str, Rule)];

pub const INIT: ResponseShape = &[
    ("token", Rule::NonEmptyString),
    ("merchantId", Rule::NonEmptyString),
    ("cartId", Rule::NonEmptyString),
];

pub const INIT_WITH_JS_URL: ResponseShape = &[
    ("token", Rule::NonEmptyString),
    ("merchantId", Rule::NonEmptyString),
    ("cartId", Rule::NonEmptyString),
    ("jsUrl", Rule::Url),
];

pub const CREATE: ResponseShape = &[
    ("token", Rule::NonEmptyString),
    ("merchantId", Rule::NonEmptyString),
    ("cartId", Rule::NonEmptyString),
    ("redirectUrl", Rule::Url),
];

/// Keys of `shape` that are missing from `body` or violate their rule, in shape order.
#[must_use]
pub fn invalid_keys(body: &Value, shape: ResponseShape) -> Vec<String> {
    shape
        .iter()
        .filter(|(key, rule)| {
            let value = body.get(key).and_then(Value::as_str);
            match (rule, value) {
                (Rule::NonEmptyString, Some(value)) => value.trim().is_empty(),
                (Rule::Url, Some(value)) => !is_url(value),
                (_, None) => true,
            }
        })
        .map(|(key, _)| (*key).to_owned())
        .collect()
}

pub fn check_shape(body: &Value, shape: ResponseShape) -> Result<()> {
    let invalid = invalid_keys(body, shape);
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(Error::invalid_response(invalid))
    }
}

/// The gateway may answer `200` and still decline: `available` must be literally `true`
/// and `errors` must be absent or empty.
pub fn check_availability(body: &Value) -> Result<()> {
    let available = body.get("available").and_then(Value::as_bool) == Some(true);
    let errors = body.get("errors").cloned().unwrap_or(Value::Null);

    if available && is_empty(&errors) {
        return Ok(());
    }

    let errors = if errors.is_null() {
        Value::Array(Vec::new())
    } else {
        errors
    };
    Err(Error::service_unavailable(errors))
}

fn is_empty(errors: &Value) -> bool {
    match errors {
        Value::Null => true,
        Value::Array(list) => list.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::String(text) => text.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
