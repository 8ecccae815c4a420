use std::error::Error as StdError;
use std::fmt;

use reqwest::{Method, StatusCode};
use serde_json::Value;

/// Broad category of an [`Error`].
///
/// Every kind is terminal for the call that produced it; nothing in this crate retries.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// A request DTO failed field validation before anything was sent.
    Validation,
    /// The transport failed or the gateway answered with a non-2xx status.
    Request,
    /// A response or notification failed HMAC verification.
    Authentication,
    /// An authenticated response is missing required keys or has malformed values.
    InvalidResponse,
    /// An authenticated, well-formed response reports business-level unavailability.
    ServiceUnavailable,
    /// Serialization or URL building failed locally.
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Returns the typed payload carried by this error, if it is of type `E`.
    #[must_use]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let source = self.source.as_deref()?;
        source.downcast_ref::<E>()
    }

    pub fn validation<I, S>(entity: Entity, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Validation {
            entity,
            fields: fields.into_iter().map(Into::into).collect(),
        }
        .into()
    }

    pub fn status<S: Into<String>>(
        status_code: StatusCode,
        method: Method,
        path: String,
        message: S,
    ) -> Self {
        RequestFailure {
            reason: message.into(),
            status_code: Some(status_code),
            method: Some(method),
            path: Some(path),
        }
        .into()
    }

    pub fn authentication(failure: AuthFailure) -> Self {
        Self::with_source(Kind::Authentication, failure)
    }

    pub fn invalid_response<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        InvalidResponse {
            fields: fields.into_iter().map(Into::into).collect(),
            reason: None,
        }
        .into()
    }

    pub fn undecodable_response<S: Into<String>>(reason: S) -> Self {
        InvalidResponse {
            fields: Vec::new(),
            reason: Some(reason.into()),
        }
        .into()
    }

    pub fn service_unavailable(errors: Value) -> Self {
        ServiceUnavailable { errors }.into()
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::with_source(Kind::Internal, Internal(message.into()))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{:?}: {source}", self.kind),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// Payload entity that failed validation.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "camelCase")]
pub enum Entity {
    Address,
    Cart,
    CartItem,
    Customer,
    Other,
    Urls,
    ReturnData,
    Config,
}

/// Field-level validation failure, fields in the order they were checked.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation {
    pub entity: Entity,
    pub fields: Vec<String>,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid {} fields: {}",
            self.entity,
            self.fields.join(", ")
        )
    }
}

impl StdError for Validation {}

impl From<Validation> for Error {
    fn from(err: Validation) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

/// Transport failure or non-2xx answer from the gateway.
#[non_exhaustive]
#[derive(Debug)]
pub struct RequestFailure {
    pub reason: String,
    pub status_code: Option<StatusCode>,
    pub method: Option<Method>,
    pub path: Option<String>,
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.status_code, &self.method, &self.path) {
            (Some(status), Some(method), Some(path)) => write!(
                f,
                "error({status}) making {method} call to {path} with {}",
                self.reason
            ),
            _ => write!(f, "request failed: {}", self.reason),
        }
    }
}

impl StdError for RequestFailure {}

impl From<RequestFailure> for Error {
    fn from(err: RequestFailure) -> Self {
        Error::with_source(Kind::Request, err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        RequestFailure {
            reason: err.to_string(),
            status_code: err.status(),
            method: None,
            path: err.url().map(|url| url.path().to_owned()),
        }
        .into()
    }
}

/// Why an inbound response or notification was rejected.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum AuthFailure {
    #[strum(to_string = "authorization header is missing")]
    MissingHeader,
    #[strum(to_string = "authorization header is not a valid HMAC header")]
    MalformedHeader,
    #[strum(to_string = "signature does not match the payload")]
    SignatureMismatch,
}

impl StdError for AuthFailure {}

/// Authenticated response that does not have the expected shape.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidResponse {
    pub fields: Vec<String>,
    pub reason: Option<String>,
}

impl fmt::Display for InvalidResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "invalid response: {reason}"),
            None => write!(f, "invalid response fields: {}", self.fields.join(", ")),
        }
    }
}

impl StdError for InvalidResponse {}

impl From<InvalidResponse> for Error {
    fn from(err: InvalidResponse) -> Self {
        Error::with_source(Kind::InvalidResponse, err)
    }
}

/// The gateway declined the operation; `errors` is passed through as received.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceUnavailable {
    pub errors: Value,
}

impl fmt::Display for ServiceUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "service unavailable: {}", self.errors)
    }
}

impl StdError for ServiceUnavailable {}

impl From<ServiceUnavailable> for Error {
    fn from(err: ServiceUnavailable) -> Self {
        Error::with_source(Kind::ServiceUnavailable, err)
    }
}

#[derive(Debug)]
struct Internal(String);

impl fmt::Display for Internal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for Internal {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(Kind::Internal, err)
    }
}

impl From<reqwest::header::InvalidHeaderValue> for Error {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Error::with_source(Kind::Internal, err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_keeps_field_order() {
        let err = Error::validation(Entity::Address, ["street", "houseNo", "address1"]);

        assert_eq!(err.kind(), Kind::Validation);
        assert_eq!(
            err.to_string(),
            "Validation: invalid address fields: street, houseNo, address1"
        );
        let payload = err.downcast_ref::<Validation>().expect("validation payload");
        assert_eq!(payload.fields, vec!["street", "houseNo", "address1"]);
    }

    #[test]
    fn entity_names_are_camel_case() {
        assert_eq!(Entity::CartItem.to_string(), "cartItem");
        assert_eq!(Entity::ReturnData.to_string(), "returnData");
    }

    #[test]
    fn status_error_mentions_call() {
        let err = Error::status(
            StatusCode::BAD_REQUEST,
            Method::POST,
            "/direct/v1/init".to_owned(),
            "bad cart",
        );

        assert_eq!(err.kind(), Kind::Request);
        assert_eq!(
            err.to_string(),
            "Request: error(400 Bad Request) making POST call to /direct/v1/init with bad cart"
        );
    }

    #[test]
    fn service_unavailable_carries_errors() {
        let err = Error::service_unavailable(serde_json::json!({ "x": 1 }));

        let payload = err
            .downcast_ref::<ServiceUnavailable>()
            .expect("unavailable payload");
        assert_eq!(payload.errors, serde_json::json!({ "x": 1 }));
    }
}
