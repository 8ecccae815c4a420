use std::str::FromStr;

use bon::Builder;
use serde::Serialize;

use crate::Result;
use crate::error::{Entity, Error};
use crate::types::Address;

/// How the shopper is known to the merchant.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Registered {
    Guest,
    Merchant,
    ThirdParty,
}

impl Registered {
    pub const ALL: [Registered; 3] = [
        Registered::Guest,
        Registered::Merchant,
        Registered::ThirdParty,
    ];

    pub fn parse(value: &str) -> Result<Registered> {
        match value {
            "guest" => Ok(Registered::Guest),
            "merchant" => Ok(Registered::Merchant),
            "3rdparty" => Ok(Registered::ThirdParty),
            _ => Err(Error::validation(Entity::Customer, ["registered"])),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Registered::Guest => "guest",
            Registered::Merchant => "merchant",
            Registered::ThirdParty => "3rdparty",
        }
    }
}

impl FromStr for Registered {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Registered::parse(s)
    }
}

impl From<Registered> for String {
    fn from(value: Registered) -> Self {
        value.as_str().to_owned()
    }
}

/// Identifier and registration status only.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct LimitedCustomer {
    pub merchant_customer_id: String,
    pub registered: String,
}

#[serde_with::skip_serializing_none]
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct BasicCustomer {
    pub merchant_customer_id: String,
    pub registered: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct DetailedCustomer {
    pub merchant_customer_id: String,
    pub registered: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
}

/// Detailed customer together with billing and (optionally) shipping address.
#[serde_with::skip_serializing_none]
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct FullCustomer {
    pub merchant_customer_id: String,
    pub registered: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub billing_address: Address,
    pub shipping_address: Option<Address>,
}

/// Customer payload; each variant is a field superset of the one before it.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Customer {
    Limited(LimitedCustomer),
    Basic(BasicCustomer),
    Detailed(DetailedCustomer),
    Full(FullCustomer),
}

impl Customer {
    #[must_use]
    pub fn merchant_customer_id(&self) -> &str {
        match self {
            Customer::Limited(c) => &c.merchant_customer_id,
            Customer::Basic(c) => &c.merchant_customer_id,
            Customer::Detailed(c) => &c.merchant_customer_id,
            Customer::Full(c) => &c.merchant_customer_id,
        }
    }

    #[must_use]
    pub fn registered(&self) -> &str {
        match self {
            Customer::Limited(c) => &c.registered,
            Customer::Basic(c) => &c.registered,
            Customer::Detailed(c) => &c.registered,
            Customer::Full(c) => &c.registered,
        }
    }
}

impl From<LimitedCustomer> for Customer {
    fn from(value: LimitedCustomer) -> Self {
        Customer::Limited(value)
    }
}

impl From<BasicCustomer> for Customer {
    fn from(value: BasicCustomer) -> Self {
        Customer::Basic(value)
    }
}

impl From<DetailedCustomer> for Customer {
    fn from(value: DetailedCustomer) -> Self {
        Customer::Detailed(value)
    }
}

impl From<FullCustomer> for Customer {
    fn from(value: FullCustomer) -> Self {
        Customer::Full(value)
    }
}
