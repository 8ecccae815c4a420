//! Merchant-side SDK for a buy-now-pay-later payment gateway.
//!
//! Every call is signed with HMAC-SHA384 over the exact request body and every answer is
//! authenticated the same way before it is trusted:
//!
//! 1. request payloads are validated locally ([`validation`]),
//! 2. the body is signed and sent with `Authorization: HMAC <merchantId>:<signature>`,
//! 3. the raw response body is verified against its `Authorization` header ([`auth`]),
//! 4. only then is the response checked for shape and availability.
//!
//! Inbound IPN callbacks go through [`auth::verify_notification`] (or
//! [`auth::decode_notification`]) with the raw body exactly as received.
//!
//! ```no_run
//! use paylater_gateway_sdk::{Client, Config, Direct};
//! use secrecy::SecretString;
//!
//! # async fn run() -> paylater_gateway_sdk::Result<()> {
//! let config = Config::from_raw(
//!     "https://gateway.example/",
//!     "merchant-1",
//!     SecretString::from("shared-secret"),
//! )?;
//! let client = Client::<Direct>::new(config)?;
//! client.credential_check().await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod flow;
pub mod types;
pub mod validation;

use reqwest::header::HeaderMap;
use reqwest::{Client as ReqwestClient, Request};
use secrecy::SecretString;
use serde::de::DeserializeOwned;

pub use auth::Credentials;
pub use client::Client;
pub use config::Config;
pub use error::{Error, Kind};
#[cfg(feature = "direct")]
pub use flow::Direct;
pub use flow::Flow;
#[cfg(feature = "redirect")]
pub use flow::Redirect;

pub type Result<T> = std::result::Result<T, Error>;

/// Header carrying the SDK identifier on every outbound call.
pub const SDK_VERSION_HEADER: &str = "x-sdk-version";

/// Sends `request` with `headers` and returns the body once it is authenticated.
///
/// Non-2xx statuses become [`Kind::Request`]; a missing or wrong signature becomes
/// [`Kind::Authentication`] before anything else looks at the body.
async fn request(
    client: &ReqwestClient,
    mut request: Request,
    headers: HeaderMap,
    secret: &SecretString,
) -> Result<Vec<u8>> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    *request.headers_mut() = headers;

    #[cfg(feature = "tracing")]
    tracing::debug!(method = %method, path = %path, "sending gateway request");

    let response = client.execute(request).await?;
    let status_code = response.status();

    if !status_code.is_success() {
        let message = response.text().await.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            message = %message,
            "gateway request failed"
        );

        return Err(Error::status(status_code, method, path, message));
    }

    let response_headers = response.headers().clone();
    let body = response.bytes().await?.to_vec();

    auth::verify_response(&response_headers, &body, secret)?;

    Ok(body)
}

/// Decodes an authenticated JSON body, reporting unknown keys and the failing path.
#[cfg(feature = "tracing")]
pub(crate) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut json = serde_json::Deserializer::from_slice(bytes);
    let mut ignored = Vec::new();
    let mut track = |path: serde_ignored::Path<'_>| ignored.push(path.to_string());

    let decoded: std::result::Result<T, _> =
        serde_path_to_error::deserialize(serde_ignored::Deserializer::new(&mut json, &mut track));

    match decoded {
        Ok(value) => {
            if !ignored.is_empty() {
                tracing::debug!(?ignored, "ignored unknown keys in gateway payload");
            }
            Ok(value)
        }
        Err(err) => {
            tracing::warn!(path = %err.path(), "failed to decode gateway payload");
            Err(Error::undecodable_response(err.inner().to_string()))
        }
    }
}

/// Decodes an authenticated JSON body.
#[cfg(not(feature = "tracing"))]
pub(crate) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| Error::undecodable_response(e.to_string()))
}
