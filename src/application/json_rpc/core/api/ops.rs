use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use strum::EnumString;
use strum::IntoStaticStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(ascii_case_insensitive)]
pub enum Namespace {
    Eth,
    Personal,
}

impl Namespace {
    /// The namespace of a `namespace_method` style method name.
    pub fn of_method(method: &str) -> Option<Self> {
        let (namespace, _) = method.split_once('_')?;
        Self::from_str(namespace).ok()
    }

    /// Methods in this namespace carry secrets in their params.
    pub fn has_sensitive_params(self) -> bool {
        matches!(self, Self::Personal)
    }
}

/// Methods known to this client, named `namespace_method` on the wire.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumString, IntoStaticStr, strum::Display,
)]
pub enum RpcMethods {
    #[strum(serialize = "eth_coinbase")]
    Coinbase,

    #[strum(serialize = "personal_unlockAccount")]
    UnlockAccount,
}

impl RpcMethods {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn namespace(self) -> Namespace {
        match self {
            Self::Coinbase => Namespace::Eth,
            Self::UnlockAccount => Namespace::Personal,
        }
    }
}
