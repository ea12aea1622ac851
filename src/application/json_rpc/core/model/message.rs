use serde::ser::SerializeTuple;
use serde::Serialize;
use serde::Serializer;
use serde_tuple::Deserialize_tuple;
use serde_tuple::Serialize_tuple;

use crate::application::json_rpc::core::model::common::*;

/// Positional params of `personal_unlockAccount`:
/// `[address, passphrase, duration]`.
#[derive(Clone, PartialEq, Eq, Serialize_tuple, Deserialize_tuple)]
pub struct UnlockAccountRequest {
    pub address: RpcAddress,
    pub passphrase: String,
    pub duration: EncodedQuantity,
}

impl std::fmt::Debug for UnlockAccountRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnlockAccountRequest")
            .field("address", &self.address)
            .field("passphrase", &"<redacted>")
            .field("duration", &self.duration)
            .finish()
    }
}

/// Whether the node unlocked the account.
pub type UnlockAccountResponse = bool;

/// `eth_coinbase` takes no params and is sent with an empty array.
#[derive(Clone, Copy, Debug)]
pub struct CoinbaseRequest {}

impl Serialize for CoinbaseRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_tuple(0)?.end()
    }
}

pub type CoinbaseResponse = RpcAddress;
