use bon::Builder;
use serde::Serialize;

/// Postal address.
///
/// Either the structured form (`street` + `house_no`) or the free-form `address1` must be
/// filled in; both may be present.
#[serde_with::skip_serializing_none]
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct Address {
    pub zip: String,
    pub city: String,
    #[builder(default)]
    pub street: String,
    #[builder(default)]
    pub house_no: String,
    #[builder(default)]
    pub address1: String,
    #[builder(default)]
    pub address2: String,
    pub country: Option<String>,
}
