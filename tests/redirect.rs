#![cfg(feature = "redirect")]

mod common;

use httpmock::prelude::*;
use paylater_gateway_sdk::error::{Entity, ServiceUnavailable, Validation};
use paylater_gateway_sdk::{Kind, Redirect};
use serde_json::json;

use crate::common::{
    basic_customer, basic_other, cart, client, create_other, full_customer, redirect_urls, signed,
};

#[tokio::test]
async fn initiate_should_not_require_js_url() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let client = client::<Redirect>(&server);
    let body = r#"{"token":"tok-1","merchantId":"m1","cartId":"42","available":true}"#;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/redirect/v1/init");
            then.status(200).header("authorization", signed(body)).body(body);
        })
        .await;

    let result = client
        .initiate("42", &cart(), &basic_customer(), &basic_other(), None)
        .await?;

    mock.assert_async().await;
    assert_eq!(result.token, "tok-1");
    assert_eq!(result.js_url, None);
    Ok(())
}

#[tokio::test]
async fn create_should_append_token_and_return_redirect() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let client = client::<Redirect>(&server);
    let body = r#"{"token":"tok-1","merchantId":"m1","cartId":"42","redirectUrl":"https://gateway.example/pay/tok-1","available":true,"errors":[]}"#;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/redirect/v1/create/tok-1")
                .header_exists("authorization")
                .json_body(json!({
                    "merchantId": "m1",
                    "merchantCartId": "42",
                    "cart": {
                        "currency": "HUF",
                        "totalValue": 12990.0,
                        "items": [
                            {
                                "merchantItemId": "sku-1",
                                "name": "Kettle",
                                "category": "kitchen",
                                "type": "sku",
                                "quantity": 1,
                                "unitPrice": 11990.0,
                                "totalValue": 11990.0
                            },
                            {
                                "merchantItemId": "ship",
                                "name": "Courier",
                                "category": "",
                                "type": "delivery",
                                "quantity": 1,
                                "unitPrice": 1000.0,
                                "totalValue": 1000.0
                            }
                        ]
                    },
                    "customer": {
                        "merchantCustomerId": "c-1",
                        "registered": "merchant",
                        "name": "Ada",
                        "surname": "Lovelace",
                        "email": "ada@example.com",
                        "phone": "+3611234567",
                        "billingAddress": {
                            "zip": "1051",
                            "city": "Budapest",
                            "street": "Nador utca",
                            "houseNo": "9",
                            "address1": "",
                            "address2": ""
                        }
                    },
                    "other": { "ip": "2001:db8::7" },
                    "urls": {
                        "accepted": "https://shop.example/accepted",
                        "rejected": "https://shop.example/rejected",
                        "cancelled": "https://shop.example/cancelled",
                        "ipn": "https://shop.example/ipn",
                        "checkout": "https://shop.example/checkout"
                    }
                }));
            then.status(200).header("authorization", signed(body)).body(body);
        })
        .await;

    let result = client
        .create(
            Some("tok-1"),
            "42",
            &cart(),
            &full_customer(),
            &create_other(),
            &redirect_urls(),
        )
        .await?;

    mock.assert_async().await;
    assert_eq!(result.cart_id, "42");
    assert_eq!(result.redirect_url.as_str(), "https://gateway.example/pay/tok-1");
    Ok(())
}

#[tokio::test]
async fn create_without_token_should_use_bare_path() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let client = client::<Redirect>(&server);
    let body = r#"{"token":"tok-2","merchantId":"m1","cartId":"43","redirectUrl":"https://gateway.example/pay/tok-2","available":true}"#;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/redirect/v1/create");
            then.status(200).header("authorization", signed(body)).body(body);
        })
        .await;

    let result = client
        .create(
            None,
            "43",
            &cart(),
            &full_customer(),
            &create_other(),
            &redirect_urls(),
        )
        .await?;

    mock.assert_async().await;
    assert_eq!(result.token, "tok-2");
    Ok(())
}

#[tokio::test]
async fn create_should_surface_declines() {
    let server = MockServer::start_async().await;
    let client = client::<Redirect>(&server);
    let body = r#"{"token":"tok-1","merchantId":"m1","cartId":"42","redirectUrl":"https://gateway.example/pay/tok-1","available":true,"errors":["customer.limit"]}"#;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/redirect/v1/create/tok-1");
            then.status(200).header("authorization", signed(body)).body(body);
        })
        .await;

    let err = client
        .create(
            Some("tok-1"),
            "42",
            &cart(),
            &full_customer(),
            &create_other(),
            &redirect_urls(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Kind::ServiceUnavailable);
    let payload = err.downcast_ref::<ServiceUnavailable>().expect("payload");
    assert_eq!(payload.errors, json!(["customer.limit"]));
}

#[tokio::test]
async fn create_should_validate_before_sending() {
    let server = MockServer::start_async().await;
    let client = client::<Redirect>(&server);

    let err = client
        .create(
            Some("tok-1"),
            "42",
            &cart(),
            &basic_customer(),
            &create_other(),
            &redirect_urls(),
        )
        .await
        .unwrap_err();
    let payload = err.downcast_ref::<Validation>().expect("validation payload");
    assert_eq!(payload.entity, Entity::Customer);
    assert_eq!(payload.fields, vec!["variant"]);

    let mut urls = redirect_urls();
    urls.checkout = "checkout".to_owned();
    let err = client
        .create(
            Some("tok-1"),
            "42",
            &cart(),
            &full_customer(),
            &create_other(),
            &urls,
        )
        .await
        .unwrap_err();
    let payload = err.downcast_ref::<Validation>().expect("validation payload");
    assert_eq!(payload.entity, Entity::Urls);
    assert_eq!(payload.fields, vec!["checkout"]);

    let err = client
        .initiate("", &cart(), &basic_customer(), &basic_other(), None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), Kind::Validation);
}
