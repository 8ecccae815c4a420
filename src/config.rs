use std::time::Duration;

use bon::bon;
use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret as _, SecretString};
use url::Url;

use crate::Result;
use crate::auth::Credentials;
use crate::error::{Entity, Error};
use crate::validation;

/// Upper bound for a single gateway call, enforced by the HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Value of the SDK version header unless overridden.
pub const DEFAULT_SDK_VERSION: &str = concat!("rust-", env!("CARGO_PKG_VERSION"));

/// Connection settings for one merchant account.
#[derive(Clone, Debug)]
pub struct Config {
    host: Url,
    credentials: Credentials,
    timeout: Duration,
    sdk_version: String,
}

#[bon]
impl Config {
    #[builder]
    pub fn new(
        host: Url,
        credentials: Credentials,
        #[builder(default = DEFAULT_TIMEOUT)] timeout: Duration,
        #[builder(into)] sdk_version: Option<String>,
    ) -> Result<Self> {
        let mut invalid = Vec::new();
        if !matches!(host.scheme(), "http" | "https") || !host.has_host() {
            invalid.push("host");
        }
        if credentials.merchant_id().trim().is_empty() {
            invalid.push("merchantId");
        }
        if credentials.secret().expose_secret().is_empty() {
            invalid.push("secret");
        }
        if timeout.is_zero() {
            invalid.push("timeout");
        }
        let sdk_version = sdk_version.unwrap_or_else(|| DEFAULT_SDK_VERSION.to_owned());
        if sdk_version.trim().is_empty() || HeaderValue::from_str(&sdk_version).is_err() {
            invalid.push("sdkVersion");
        }
        validation::ensure(
            Entity::Config,
            invalid.into_iter().map(str::to_owned).collect(),
        )?;

        Ok(Self {
            host: with_trailing_slash(host),
            credentials,
            timeout,
            sdk_version,
        })
    }

    /// Builds a configuration from plain values as typically read from app-level settings.
    pub fn from_raw<S: Into<String>>(
        host: &str,
        merchant_id: S,
        secret: SecretString,
    ) -> Result<Self> {
        let Ok(host) = Url::parse(host) else {
            return Err(Error::validation(Entity::Config, ["host"]));
        };

        Self::builder()
            .host(host)
            .credentials(Credentials::new(merchant_id, secret))
            .build()
    }

    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn sdk_version(&self) -> &str {
        &self.sdk_version
    }
}

/// `Url::join` drops the last segment of a base without a trailing slash.
fn with_trailing_slash(mut host: Url) -> Url {
    if !host.path().ends_with('/') {
        let path = format!("{}/", host.path());
        host.set_path(&path);
    }
    host
}
