use bon::Builder;
use serde::Serialize;

/// Callback address for the direct flow.
///
/// URLs are kept as the caller supplied them and checked by [`crate::validation::urls`].
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct Urls {
    pub ipn: String,
}

/// Where the gateway sends the shopper (and the IPN) in the redirect flow.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct RedirectUrls {
    pub accepted: String,
    pub rejected: String,
    pub cancelled: String,
    pub ipn: String,
    pub checkout: String,
}
