use std::marker::PhantomData;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, Request};
use secrecy::ExposeSecret as _;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::auth::{self, signer};
use crate::config::Config;
use crate::error::{Entity, Error};
#[cfg(feature = "redirect")]
use crate::flow::Redirect;
use crate::flow::Flow;
#[cfg(feature = "redirect")]
use crate::types::{CreateResult, RedirectUrls};
use crate::types::{Cart, Customer, InitResult, Other, ReturnData, Urls};
use crate::validation::{self, response};
use crate::{Result, SDK_VERSION_HEADER};

const JSON: &str = "application/json";

#[serde_with::skip_serializing_none]
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InitRequest<'req> {
    merchant_id: &'req str,
    merchant_cart_id: &'req str,
    cart: &'req Cart,
    customer: &'req Customer,
    other: &'req Other,
    urls: Option<&'req Urls>,
}

#[cfg(feature = "redirect")]
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateRequest<'req> {
    merchant_id: &'req str,
    merchant_cart_id: &'req str,
    cart: &'req Cart,
    customer: &'req Customer,
    other: &'req Other,
    urls: &'req RedirectUrls,
}

/// Gateway client for one merchant account and one deployment [`Flow`].
///
/// The client holds no state between calls besides its configuration; clones share the
/// underlying connection pool.
#[derive(Clone, Debug)]
pub struct Client<F: Flow> {
    config: Config,
    client: ReqwestClient,
    flow: PhantomData<F>,
}

impl<F: Flow> Client<F> {
    /// Creates a client with its own HTTP client bounded by the configured timeout.
    pub fn new(config: Config) -> Result<Self> {
        let client = ReqwestClient::builder().timeout(config.timeout()).build()?;
        Ok(Self::with_http_client(config, client))
    }

    /// Creates a client on top of a caller-supplied HTTP client.
    ///
    /// Timeouts, proxies and TLS settings are taken from `client` as is.
    #[must_use]
    pub fn with_http_client(config: Config, client: ReqwestClient) -> Self {
        Self {
            config,
            client,
            flow: PhantomData,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn merchant_id(&self) -> &str {
        self.config.credentials().merchant_id()
    }

    /// `HEAD /cred`: succeeds when the gateway accepts our signature and answers with a
    /// valid one of its own.
    pub async fn credential_check(&self) -> Result<()> {
        let request = self
            .client
            .request(Method::HEAD, self.endpoint(&["cred"])?)
            .build()?;

        self.send(request).await.map(drop)
    }

    /// `POST /init`: registers the cart and opens a payment session.
    ///
    /// `urls` carries the IPN callback for integrations that register it per cart.
    pub async fn initiate(
        &self,
        cart_id: &str,
        cart: &Cart,
        customer: &Customer,
        other: &Other,
        urls: Option<&Urls>,
    ) -> Result<InitResult> {
        ensure_cart_id(cart_id)?;
        validation::ensure(Entity::Cart, validation::cart(cart))?;
        ensure_customer(customer, F::accepts_customer(customer))?;
        ensure_other(other, F::accepts_other(other))?;
        if let Some(urls) = urls {
            validation::ensure(Entity::Urls, validation::urls(urls))?;
        }

        let body = InitRequest {
            merchant_id: self.merchant_id(),
            merchant_cart_id: cart_id,
            cart,
            customer,
            other,
            urls,
        };
        let request = self
            .client
            .request(Method::POST, self.endpoint(&["init"])?)
            .body(serde_json::to_vec(&body)?)
            .build()?;

        let value = self.send_and_decode(request).await?;
        let shape = if F::JS_URL {
            response::INIT_WITH_JS_URL
        } else {
            response::INIT
        };
        response::check_shape(&value, shape)?;
        response::check_availability(&value)?;

        let js_url = if F::JS_URL {
            Some(Url::parse(str_field(&value, "jsUrl"))?)
        } else {
            None
        };

        Ok(InitResult {
            token: str_field(&value, "token").to_owned(),
            merchant_id: str_field(&value, "merchantId").to_owned(),
            cart_id: str_field(&value, "cartId").to_owned(),
            js_url,
        })
    }

    /// `PUT /delivery/{merchantId}/{cartId}[/{itemId}]`: the whole cart, or a single item,
    /// has been handed over to the shopper.
    pub async fn confirm_delivery(&self, cart_id: &str, item_id: Option<&str>) -> Result<()> {
        ensure_cart_id(cart_id)?;

        let request = self
            .client
            .request(Method::PUT, self.order_endpoint("delivery", cart_id, item_id)?)
            .build()?;

        self.send(request).await.map(drop)
    }

    /// `PUT /return/{merchantId}/{cartId}[/{itemId}]`: records a return, optionally for a
    /// reduced amount.
    pub async fn record_return(
        &self,
        cart_id: &str,
        item_id: Option<&str>,
        data: &ReturnData,
    ) -> Result<()> {
        ensure_cart_id(cart_id)?;
        validation::ensure(Entity::ReturnData, validation::return_data(data))?;

        let request = self
            .client
            .request(Method::PUT, self.order_endpoint("return", cart_id, item_id)?)
            .body(serde_json::to_vec(data)?)
            .build()?;

        self.send(request).await.map(drop)
    }

    /// Authenticates an IPN callback with this client's secret.
    pub fn verify_notification(&self, raw_body: &[u8], authorization: &str) -> Result<()> {
        auth::verify_notification(raw_body, authorization, self.config.credentials().secret())
    }

    /// Authenticates an IPN callback and decodes it into `T`.
    pub fn decode_notification<T: DeserializeOwned>(
        &self,
        raw_body: &str,
        authorization: &str,
    ) -> Result<T> {
        auth::decode_notification(raw_body, authorization, self.config.credentials().secret())
    }

    /// `Authorization` value for acknowledging an IPN callback with `body`.
    #[must_use]
    pub fn reply_header(&self, body: &[u8]) -> String {
        auth::reply_header(body, self.merchant_id(), self.config.credentials().secret())
    }

    async fn send(&self, request: Request) -> Result<Vec<u8>> {
        let headers = self.create_headers(&request)?;
        crate::request(
            &self.client,
            request,
            headers,
            self.config.credentials().secret(),
        )
        .await
    }

    async fn send_and_decode(&self, request: Request) -> Result<Value> {
        let body = self.send(request).await?;
        crate::decode(&body)
    }

    /// Signs exactly the bytes that will go on the wire; a request without a body is
    /// signed as empty.
    fn create_headers(&self, request: &Request) -> Result<HeaderMap> {
        let body = request
            .body()
            .and_then(reqwest::Body::as_bytes)
            .unwrap_or_default();
        let credentials = self.config.credentials();
        let authorization = signer::build_authorization_header(
            credentials.merchant_id(),
            credentials.secret().expose_secret().as_bytes(),
            body,
        );

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&authorization)?);
        headers.insert(
            SDK_VERSION_HEADER,
            HeaderValue::from_str(self.config.sdk_version())?,
        );
        Ok(headers)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.config.host().join(F::PREFIX)?;
        url.path_segments_mut()
            .map_err(|()| Error::internal(format!("{} cannot be a base URL", self.config.host())))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn order_endpoint(&self, action: &str, cart_id: &str, item_id: Option<&str>) -> Result<Url> {
        let mut segments = vec![action, self.merchant_id(), cart_id];
        segments.extend(item_id.filter(|id| !id.trim().is_empty()));
        self.endpoint(&segments)
    }
}

#[cfg(feature = "redirect")]
impl Client<Redirect> {
    /// `POST /create[/{token}]`: turns an initiated cart into an order and returns the
    /// gateway page the shopper must be redirected to.
    pub async fn create(
        &self,
        token: Option<&str>,
        cart_id: &str,
        cart: &Cart,
        customer: &Customer,
        other: &Other,
        urls: &RedirectUrls,
    ) -> Result<CreateResult> {
        ensure_cart_id(cart_id)?;
        validation::ensure(Entity::Cart, validation::cart(cart))?;
        ensure_customer(customer, Redirect::accepts_create_customer(customer))?;
        ensure_other(other, Redirect::accepts_create_other(other))?;
        validation::ensure(Entity::Urls, validation::redirect_urls(urls))?;

        let mut segments = vec!["create"];
        segments.extend(token.filter(|token| !token.trim().is_empty()));

        let body = CreateRequest {
            merchant_id: self.merchant_id(),
            merchant_cart_id: cart_id,
            cart,
            customer,
            other,
            urls,
        };
        let request = self
            .client
            .request(Method::POST, self.endpoint(&segments)?)
            .body(serde_json::to_vec(&body)?)
            .build()?;

        let value = self.send_and_decode(request).await?;
        response::check_shape(&value, response::CREATE)?;
        response::check_availability(&value)?;

        Ok(CreateResult {
            token: str_field(&value, "token").to_owned(),
            merchant_id: str_field(&value, "merchantId").to_owned(),
            cart_id: str_field(&value, "cartId").to_owned(),
            redirect_url: Url::parse(str_field(&value, "redirectUrl"))?,
        })
    }
}

fn ensure_cart_id(cart_id: &str) -> Result<()> {
    if cart_id.trim().is_empty() {
        return Err(Error::validation(Entity::Cart, ["merchantCartId"]));
    }
    Ok(())
}

fn ensure_customer(customer: &Customer, accepted: bool) -> Result<()> {
    let mut fields = Vec::new();
    if !accepted {
        fields.push("variant".to_owned());
    }
    fields.extend(validation::customer(customer));
    validation::ensure(Entity::Customer, fields)
}

fn ensure_other(other: &Other, accepted: bool) -> Result<()> {
    let mut fields = Vec::new();
    if !accepted {
        fields.push("variant".to_owned());
    }
    fields.extend(validation::other(other));
    validation::ensure(Entity::Other, fields)
}

/// Only called after [`response::check_shape`] has vouched for `key`.
fn str_field<'body>(value: &'body Value, key: &str) -> &'body str {
    value.get(key).and_then(Value::as_str).unwrap_or_default()
}
