use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac as _};
use sha2::Sha384;

pub type HmacSha384 = Hmac<Sha384>;

/// Authorization scheme token.
pub const SCHEME: &str = "HMAC";

pub(crate) fn mac(secret: &[u8], body: &[u8]) -> HmacSha384 {
    let mut mac = HmacSha384::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(body);
    mac
}

/// Base64 of the 48-byte HMAC-SHA384 digest of `body` keyed by `secret`.
///
/// An empty body is valid input and signs deterministically.
#[must_use]
pub fn sign(secret: &[u8], body: &[u8]) -> String {
    STANDARD.encode(mac(secret, body).finalize().into_bytes())
}

/// `HMAC <id>:<signature>`, used for outbound requests and IPN replies.
#[must_use]
pub fn build_authorization_header(id: &str, secret: &[u8], body: &[u8]) -> String {
    format!("{SCHEME} {id}:{}", sign(secret, body))
}

/// `HMAC <signature>`, for a counterpart that has no identifier to echo back.
#[must_use]
pub fn build_authorization_header_without_id(secret: &[u8], body: &[u8]) -> String {
    format!("{SCHEME} {}", sign(secret, body))
}

/// Extracts the signature from either `HMAC <sig>` or `HMAC <id>:<sig>`.
///
/// When a colon is present the signature is whatever follows the last one. Returns `None`
/// unless the value starts with the literal `HMAC` token followed by whitespace, or when
/// nothing is left to compare against.
#[must_use]
pub fn parse_signature(header: &str) -> Option<&str> {
    let rest = header.strip_prefix(SCHEME)?;
    let mut chars = rest.chars();
    if !chars.next()?.is_whitespace() {
        return None;
    }

    let credential = chars.as_str().trim();
    let signature = credential
        .rsplit_once(':')
        .map_or(credential, |(_, signature)| signature);

    (!signature.is_empty()).then_some(signature)
}
