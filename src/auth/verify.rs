use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use hmac::Mac as _;
use reqwest::header::{AUTHORIZATION, HeaderMap};
use secrecy::{ExposeSecret as _, SecretString};
use serde::de::DeserializeOwned;

use crate::Result;
use crate::auth::signer;
use crate::error::{AuthFailure, Error};

/// Checks a gateway response against its `Authorization` header.
///
/// `body` must be the raw bytes as received; re-serialized JSON will not verify.
pub fn verify_response(headers: &HeaderMap, body: &[u8], secret: &SecretString) -> Result<()> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Err(reject(AuthFailure::MissingHeader));
    };
    let Ok(header) = value.to_str() else {
        return Err(reject(AuthFailure::MalformedHeader));
    };

    verify(header, body, secret)
}

/// Checks an inbound IPN callback before any of it is trusted or parsed.
pub fn verify_notification(
    raw_body: &[u8],
    authorization: &str,
    secret: &SecretString,
) -> Result<()> {
    if authorization.trim().is_empty() {
        return Err(reject(AuthFailure::MissingHeader));
    }

    verify(authorization, raw_body, secret)
}

/// Verifies an IPN callback and only then decodes it into `T`.
pub fn decode_notification<T: DeserializeOwned>(
    raw_body: &str,
    authorization: &str,
    secret: &SecretString,
) -> Result<T> {
    verify_notification(raw_body.as_bytes(), authorization, secret)?;
    crate::decode(raw_body.as_bytes())
}

/// Header for answering an inbound notification, signed over the reply body.
#[must_use]
pub fn reply_header(body: &[u8], id: &str, secret: &SecretString) -> String {
    signer::build_authorization_header(id, secret.expose_secret().as_bytes(), body)
}

fn verify(header: &str, body: &[u8], secret: &SecretString) -> Result<()> {
    let signature =
        signer::parse_signature(header).ok_or_else(|| reject(AuthFailure::MalformedHeader))?;
    let Ok(expected) = STANDARD.decode(signature) else {
        return Err(reject(AuthFailure::SignatureMismatch));
    };

    if signer::mac(secret.expose_secret().as_bytes(), body)
        .verify_slice(&expected)
        .is_err()
    {
        return Err(reject(AuthFailure::SignatureMismatch));
    }

    Ok(())
}

fn reject(failure: AuthFailure) -> Error {
    #[cfg(feature = "tracing")]
    tracing::warn!(reason = %failure, "rejected unauthenticated payload");

    Error::authentication(failure)
}
