//! Shared-secret authentication for the gateway protocol.
//!
//! Both directions use the same HMAC-SHA384 scheme:
//! - outbound requests carry `Authorization: HMAC <merchantId>:<signature>`
//! - responses and IPN callbacks carry `HMAC <signature>` or `HMAC <id>:<signature>`
//!
//! The signature is always computed over the exact body bytes on the wire.

pub mod signer;
pub mod verify;

use secrecy::SecretString;

pub use signer::{
    build_authorization_header, build_authorization_header_without_id, parse_signature, sign,
};
pub use verify::{decode_notification, reply_header, verify_notification, verify_response};

/// Merchant identifier and the secret shared with the gateway.
///
/// The secret is only ever exposed to the HMAC computation; `Debug` redacts it.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct Credentials {
    merchant_id: String,
    secret: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new<S: Into<String>>(merchant_id: S, secret: SecretString) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            secret,
        }
    }

    #[must_use]
    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    #[must_use]
    pub fn secret(&self) -> &SecretString {
        &self.secret
    }
}
