use bon::Builder;
use rust_decimal::Decimal;
use serde::Serialize;

/// The only currency the gateway settles in.
pub const SUPPORTED_CURRENCY: &str = "HUF";

/// Well-known cart item types.
///
/// Delivery lines and every `discount*` type are exempt from the category requirement.
pub mod item_type {
    pub const SKU: &str = "sku";
    pub const DELIVERY: &str = "delivery";
    pub const DISCOUNT: &str = "discount";
    pub const DISCOUNT_COUPON: &str = "discount_coupon";
    pub const DISCOUNT_LOYALTY: &str = "discount_loyalty";

    /// Whether items of this type may omit `category`.
    #[must_use]
    pub fn is_category_exempt(item_type: &str) -> bool {
        item_type == DELIVERY || item_type.starts_with(DISCOUNT)
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct Cart {
    #[builder(default = SUPPORTED_CURRENCY.to_owned())]
    pub currency: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
    #[builder(default)]
    pub items: Vec<CartItem>,
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct CartItem {
    pub merchant_item_id: String,
    pub name: String,
    #[builder(default)]
    pub category: String,
    #[serde(rename = "type")]
    #[builder(default = item_type::SKU.to_owned())]
    pub item_type: String,
    #[builder(default = 1)]
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
}
