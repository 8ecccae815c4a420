use bon::Builder;
use serde::Serialize;

/// Shopper session data attached to `init`.
///
/// An empty `ip` means "not provided".
#[serde_with::skip_serializing_none]
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct BasicOther {
    #[builder(default)]
    pub ip: String,
    pub user_agent: Option<String>,
}

/// Session data for the direct flow, where the gateway widget starts in the shopper's browser.
#[serde_with::skip_serializing_none]
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct StartOther {
    #[builder(default)]
    pub ip: String,
    pub user_agent: Option<String>,
    pub language: Option<String>,
}

/// Session data for `create` in the redirect flow.
#[serde_with::skip_serializing_none]
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct CreateOther {
    #[builder(default)]
    pub ip: String,
    pub user_agent: Option<String>,
    pub device_id: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Other {
    Basic(BasicOther),
    Start(StartOther),
    Create(CreateOther),
}

impl Other {
    #[must_use]
    pub fn ip(&self) -> &str {
        match self {
            Other::Basic(other) => &other.ip,
            Other::Start(other) => &other.ip,
            Other::Create(other) => &other.ip,
        }
    }
}

impl From<BasicOther> for Other {
    fn from(value: BasicOther) -> Self {
        Other::Basic(value)
    }
}

impl From<StartOther> for Other {
    fn from(value: StartOther) -> Self {
        Other::Start(value)
    }
}

impl From<CreateOther> for Other {
    fn from(value: CreateOther) -> Self {
        Other::Create(value)
    }
}
