#![allow(dead_code, reason = "each test binary uses a different subset of fixtures")]

use httpmock::MockServer;
use paylater_gateway_sdk::auth::sign;
use paylater_gateway_sdk::types::{
    Address, BasicCustomer, BasicOther, Cart, CartItem, CreateOther, Customer, FullCustomer,
    Other, RedirectUrls, Registered, StartOther, item_type,
};
use paylater_gateway_sdk::{Client, Config, Flow};
use rust_decimal_macros::dec;
use secrecy::SecretString;

pub const MERCHANT_ID: &str = "m1";
pub const SECRET: &str = "merchant-secret";

pub fn client<F: Flow>(server: &MockServer) -> Client<F> {
    let config = Config::from_raw(
        &server.base_url(),
        MERCHANT_ID,
        SecretString::from(SECRET),
    )
    .expect("valid config");

    Client::new(config).expect("client")
}

/// `HMAC <signature>` as the gateway would send it for `body`.
pub fn signed(body: &str) -> String {
    format!("HMAC {}", sign(SECRET.as_bytes(), body.as_bytes()))
}

/// What the client must send for a call without a body.
pub fn empty_body_authorization() -> String {
    format!("HMAC {MERCHANT_ID}:{}", sign(SECRET.as_bytes(), b""))
}

pub fn cart() -> Cart {
    Cart::builder()
        .total_value(dec!(12990))
        .items(vec![
            CartItem::builder()
                .merchant_item_id("sku-1")
                .name("Kettle")
                .category("kitchen")
                .unit_price(dec!(11990))
                .total_value(dec!(11990))
                .build(),
            CartItem::builder()
                .merchant_item_id("ship")
                .name("Courier")
                .item_type(item_type::DELIVERY)
                .unit_price(dec!(1000))
                .total_value(dec!(1000))
                .build(),
        ])
        .build()
}

pub fn basic_customer() -> Customer {
    BasicCustomer::builder()
        .merchant_customer_id("c-1")
        .registered(Registered::Merchant)
        .email("ada@example.com")
        .build()
        .into()
}

pub fn full_customer() -> Customer {
    FullCustomer::builder()
        .merchant_customer_id("c-1")
        .registered(Registered::Merchant)
        .name("Ada")
        .surname("Lovelace")
        .email("ada@example.com")
        .phone("+3611234567")
        .billing_address(
            Address::builder()
                .zip("1051")
                .city("Budapest")
                .street("Nador utca")
                .house_no("9")
                .build(),
        )
        .build()
        .into()
}

pub fn basic_other() -> Other {
    BasicOther::builder().ip("203.0.113.7").build().into()
}

pub fn start_other() -> Other {
    StartOther::builder()
        .ip("203.0.113.7")
        .language("hu")
        .build()
        .into()
}

pub fn create_other() -> Other {
    CreateOther::builder().ip("2001:db8::7").build().into()
}

pub fn redirect_urls() -> RedirectUrls {
    RedirectUrls::builder()
        .accepted("https://shop.example/accepted")
        .rejected("https://shop.example/rejected")
        .cancelled("https://shop.example/cancelled")
        .ipn("https://shop.example/ipn")
        .checkout("https://shop.example/checkout")
        .build()
}
