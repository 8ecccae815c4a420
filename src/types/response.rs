use serde::Deserialize;
use serde_json::{Map, Value};
use url::Url;

/// Outcome of a successful `init`.
///
/// `js_url` is only returned by the direct flow, where it points at the checkout widget.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitResult {
    pub token: String,
    pub merchant_id: String,
    pub cart_id: String,
    pub js_url: Option<Url>,
}

/// Outcome of a successful `create`; the shopper continues at `redirect_url`.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateResult {
    pub token: String,
    pub merchant_id: String,
    pub cart_id: String,
    pub redirect_url: Url,
}

/// Order state reported through an IPN callback.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationStatus {
    Accepted,
    Rejected,
    Cancelled,
    Delivered,
    Returned,
    #[serde(other)]
    Unknown,
}

/// IPN payload. Decode it through [`crate::auth::decode_notification`] so the body is
/// authenticated before any field is read.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub merchant_id: String,
    pub merchant_cart_id: String,
    #[serde(default)]
    pub token: Option<String>,
    pub status: NotificationStatus,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_is_tolerated() {
        let notification: Notification = serde_json::from_str(
            r#"{"merchantId":"m1","merchantCartId":"42","status":"on_hold","score":7}"#,
        )
        .expect("decodes");

        assert_eq!(notification.status, NotificationStatus::Unknown);
        assert_eq!(notification.token, None);
        assert_eq!(notification.extra.get("score"), Some(&Value::from(7)));
    }

    #[test]
    fn status_display() {
        assert_eq!(NotificationStatus::Accepted.to_string(), "accepted");
    }
}
