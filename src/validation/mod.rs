//! Field checks for request payloads.
//!
//! Each function returns the names of the invalid fields in the order they were checked;
//! an empty list means the payload is valid. [`ensure`] turns a non-empty list into a
//! [`Kind::Validation`](crate::error::Kind::Validation) error.

pub mod response;

use std::net::IpAddr;

use rust_decimal::Decimal;
use url::Url;

use crate::Result;
use crate::error::{Entity, Error};
use crate::types::{
    Address, Cart, CartItem, Customer, Other, Registered, RedirectUrls, ReturnData,
    SUPPORTED_CURRENCY, Urls, item_type,
};

pub fn ensure(entity: Entity, fields: Vec<String>) -> Result<()> {
    if fields.is_empty() {
        Ok(())
    } else {
        Err(Error::validation(entity, fields))
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[must_use]
pub fn address(address: &Address) -> Vec<String> {
    let mut fields = Vec::new();

    if address.zip.trim().chars().count() != 4 {
        fields.push("zip".to_owned());
    }
    if blank(&address.city) {
        fields.push("city".to_owned());
    }

    let structured = !blank(&address.street) && !blank(&address.house_no);
    if !structured && blank(&address.address1) {
        if blank(&address.street) {
            fields.push("street".to_owned());
        }
        if blank(&address.house_no) {
            fields.push("houseNo".to_owned());
        }
        fields.push("address1".to_owned());
    }

    fields
}

#[must_use]
pub fn cart_item(item: &CartItem) -> Vec<String> {
    let mut fields = Vec::new();

    if blank(&item.name) {
        fields.push("name".to_owned());
    }
    if blank(&item.category) && !item_type::is_category_exempt(&item.item_type) {
        fields.push("category".to_owned());
    }
    if blank(&item.item_type) {
        fields.push("type".to_owned());
    }
    if item.quantity < 1 {
        fields.push("quantity".to_owned());
    }
    if blank(&item.merchant_item_id) {
        fields.push("merchantItemId".to_owned());
    }

    fields
}

/// Cart-level fields first, then the fields of every invalid item in item order.
#[must_use]
pub fn cart(cart: &Cart) -> Vec<String> {
    let mut fields = Vec::new();

    if cart.currency != SUPPORTED_CURRENCY {
        fields.push("currency".to_owned());
    }
    if cart.total_value < Decimal::ZERO {
        fields.push("totalValue".to_owned());
    }
    if cart.items.is_empty() {
        fields.push("items".to_owned());
    }
    fields.extend(cart.items.iter().flat_map(cart_item));

    fields
}

#[must_use]
pub fn customer(customer: &Customer) -> Vec<String> {
    let mut fields = Vec::new();

    if blank(customer.merchant_customer_id()) {
        fields.push("merchantCustomerId".to_owned());
    }
    if Registered::parse(customer.registered()).is_err() {
        fields.push("registered".to_owned());
    }

    match customer {
        Customer::Limited(_) | Customer::Basic(_) => {}
        Customer::Detailed(c) => {
            push_blank(&mut fields, &[
                ("name", &c.name),
                ("surname", &c.surname),
                ("email", &c.email),
                ("phone", &c.phone),
            ]);
        }
        Customer::Full(c) => {
            push_blank(&mut fields, &[
                ("name", &c.name),
                ("surname", &c.surname),
                ("email", &c.email),
                ("phone", &c.phone),
            ]);
            fields.extend(prefixed("billingAddress", address(&c.billing_address)));
            if let Some(shipping) = &c.shipping_address {
                fields.extend(prefixed("shippingAddress", address(shipping)));
            }
        }
    }

    fields
}

fn push_blank(fields: &mut Vec<String>, values: &[(&str, &String)]) {
    fields.extend(
        values
            .iter()
            .filter(|(_, value)| blank(value))
            .map(|(name, _)| (*name).to_owned()),
    );
}

fn prefixed(prefix: &str, fields: Vec<String>) -> impl Iterator<Item = String> {
    fields.into_iter().map(move |field| format!("{prefix}.{field}"))
}

/// `ip` may be empty; anything else must be an IPv4 or IPv6 literal.
#[must_use]
pub fn other(other: &Other) -> Vec<String> {
    let ip = other.ip();
    if ip.is_empty() || ip.parse::<IpAddr>().is_ok() {
        Vec::new()
    } else {
        vec!["ip".to_owned()]
    }
}

/// Absolute URL with a host, as the gateway needs something it can call back.
#[must_use]
pub fn is_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| url.has_host())
}

#[must_use]
pub fn urls(urls: &Urls) -> Vec<String> {
    invalid_urls(&[("ipn", &urls.ipn)])
}

#[must_use]
pub fn redirect_urls(urls: &RedirectUrls) -> Vec<String> {
    invalid_urls(&[
        ("accepted", &urls.accepted),
        ("rejected", &urls.rejected),
        ("cancelled", &urls.cancelled),
        ("ipn", &urls.ipn),
        ("checkout", &urls.checkout),
    ])
}

fn invalid_urls(values: &[(&str, &String)]) -> Vec<String> {
    values
        .iter()
        .filter(|(_, value)| !is_url(value))
        .map(|(name, _)| (*name).to_owned())
        .collect()
}

#[must_use]
pub fn return_data(data: &ReturnData) -> Vec<String> {
    match data.reduced_value {
        Some(value) if value < Decimal::ZERO => vec!["reducedValue".to_owned()],
        _ => Vec::new(),
    }
}
