//! Gateway deployment variants.
//!
//! The direct and redirect integrations share request shapes but live under different path
//! prefixes and accept different customer/other variants. [`Client`](crate::Client) is
//! parameterised by one of the markers below so that flow-only operations such as
//! `create` exist only where the gateway offers them.

use std::fmt::Debug;

use crate::types::{Customer, Other};

mod sealed {
    pub trait Sealed {}
}

pub trait Flow: sealed::Sealed + Clone + Copy + Debug + Send + Sync + 'static {
    /// Path prefix relative to the configured host, with a trailing slash.
    const PREFIX: &'static str;

    /// Whether a successful `init` must carry the widget `jsUrl`.
    const JS_URL: bool;

    /// Customer variants accepted by `init`.
    fn accepts_customer(customer: &Customer) -> bool;

    /// Other variants accepted by `init`.
    fn accepts_other(other: &Other) -> bool;
}

/// The gateway widget is embedded in the merchant's checkout page.
#[cfg(feature = "direct")]
#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct Direct;

#[cfg(feature = "direct")]
impl sealed::Sealed for Direct {}

#[cfg(feature = "direct")]
impl Flow for Direct {
    const PREFIX: &'static str = "direct/v1/";
    const JS_URL: bool = true;

    fn accepts_customer(customer: &Customer) -> bool {
        matches!(
            customer,
            Customer::Basic(_) | Customer::Detailed(_) | Customer::Full(_)
        )
    }

    fn accepts_other(other: &Other) -> bool {
        matches!(other, Other::Basic(_) | Other::Start(_))
    }
}

/// The shopper is sent to a gateway-hosted page after `create`.
#[cfg(feature = "redirect")]
#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct Redirect;

#[cfg(feature = "redirect")]
impl Redirect {
    /// Customer variants accepted by `create`.
    #[must_use]
    pub fn accepts_create_customer(customer: &Customer) -> bool {
        matches!(customer, Customer::Detailed(_) | Customer::Full(_))
    }

    /// Other variants accepted by `create`.
    #[must_use]
    pub fn accepts_create_other(other: &Other) -> bool {
        matches!(other, Other::Create(_))
    }
}

#[cfg(feature = "redirect")]
impl sealed::Sealed for Redirect {}

#[cfg(feature = "redirect")]
impl Flow for Redirect {
    const PREFIX: &'static str = "redirect/v1/";
    const JS_URL: bool = false;

    fn accepts_customer(customer: &Customer) -> bool {
        matches!(customer, Customer::Limited(_) | Customer::Basic(_))
    }

    fn accepts_other(other: &Other) -> bool {
        matches!(other, Other::Basic(_))
    }
}
