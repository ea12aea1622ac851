use std::sync::Arc;

use tracing::debug;

use crate::application::json_rpc::core::api::client::transport::Transport;
use crate::application::json_rpc::core::api::eth::EthCoinbase;
use crate::application::json_rpc::core::api::handler::RpcRequestResponseHandler;
use crate::application::json_rpc::core::api::ops::RpcMethods;
use crate::application::json_rpc::core::error::required;
use crate::application::json_rpc::core::error::RpcResult;
use crate::application::json_rpc::core::model::common::EncodedQuantity;
use crate::application::json_rpc::core::model::common::QuantityEncoding;
use crate::application::json_rpc::core::model::common::RequestId;
use crate::application::json_rpc::core::model::common::RpcAddress;
use crate::application::json_rpc::core::model::common::RpcQuantity;
use crate::application::json_rpc::core::model::json::JsonRequest;
use crate::application::json_rpc::core::model::message::UnlockAccountRequest;
use crate::application::json_rpc::core::model::message::UnlockAccountResponse;

/// `personal_unlockAccount`: unlocks an account for `duration_in_seconds`.
///
/// Params are `[address, passphrase, duration]`. The node answers with a
/// boolean telling whether the account was unlocked.
///
/// Every required argument is checked before any request is sent, and the
/// first missing one is reported by name as
/// [`RpcError::InvalidArgument`](crate::application::json_rpc::core::error::RpcError::InvalidArgument).
/// Example, in the node's console syntax:
///
/// ```text
/// personal.unlockAccount(eth.coinbase, "mypasswd", 300)
/// ```
#[derive(Clone, Debug)]
pub struct PersonalUnlockAccount {
    handler: RpcRequestResponseHandler<UnlockAccountResponse>,
    encoding: QuantityEncoding,
}

impl PersonalUnlockAccount {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            handler: RpcRequestResponseHandler::new(transport, RpcMethods::UnlockAccount),
            encoding: QuantityEncoding::default(),
        }
    }

    /// Selects how the duration is written on the wire.
    pub fn with_encoding(mut self, encoding: QuantityEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn encoding(&self) -> QuantityEncoding {
        self.encoding
    }

    /// Unlocks `address`. A missing `0x` prefix is added.
    pub async fn send_request(
        &self,
        address: Option<&str>,
        pass_phrase: Option<&str>,
        duration_in_seconds: Option<RpcQuantity>,
        id: Option<RequestId>,
    ) -> RpcResult<bool> {
        let params = self.unlock_params(address, pass_phrase, duration_in_seconds)?;
        self.send(params, id).await
    }

    /// Unlocks the node's coinbase account.
    ///
    /// Resolves the address with `coinbase_request` first, then unlocks it.
    /// If resolution fails, the unlock request is never sent. The resolved
    /// address is not remembered between calls.
    pub async fn send_request_with_coinbase(
        &self,
        coinbase_request: Option<&EthCoinbase>,
        pass_phrase: Option<&str>,
        duration_in_seconds: Option<RpcQuantity>,
        id: Option<RequestId>,
    ) -> RpcResult<bool> {
        let coinbase_request = required("coinbase_request", coinbase_request)?;
        let pass_phrase = required("pass_phrase", pass_phrase)?;
        let duration = self.duration(duration_in_seconds)?;

        let address = coinbase_request.send_request(None).await?;
        debug!("Unlocking coinbase account {}", address);

        let params = UnlockAccountRequest {
            address,
            passphrase: pass_phrase.to_string(),
            duration,
        };
        self.send(params, id).await
    }

    /// Builds the unlock envelope without sending it, for callers that
    /// submit requests themselves.
    pub fn build_request(
        &self,
        address: Option<&str>,
        pass_phrase: Option<&str>,
        duration_in_seconds: Option<RpcQuantity>,
        id: Option<RequestId>,
    ) -> RpcResult<JsonRequest> {
        let params = self.unlock_params(address, pass_phrase, duration_in_seconds)?;
        self.handler.build_request(id, &params)
    }

    /// Sends an envelope made by [`Self::build_request`].
    pub async fn send_built_request(&self, request: JsonRequest) -> RpcResult<bool> {
        self.handler.send_built_request(request).await
    }

    fn unlock_params(
        &self,
        address: Option<&str>,
        pass_phrase: Option<&str>,
        duration_in_seconds: Option<RpcQuantity>,
    ) -> RpcResult<UnlockAccountRequest> {
        let address = required("address", address)?;
        let pass_phrase = required("pass_phrase", pass_phrase)?;
        let duration = self.duration(duration_in_seconds)?;

        Ok(UnlockAccountRequest {
            address: RpcAddress::new(address),
            passphrase: pass_phrase.to_string(),
            duration,
        })
    }

    fn duration(&self, duration_in_seconds: Option<RpcQuantity>) -> RpcResult<EncodedQuantity> {
        required("duration_in_seconds", duration_in_seconds)?.encode(self.encoding)
    }

    async fn send(&self, params: UnlockAccountRequest, id: Option<RequestId>) -> RpcResult<bool> {
        self.handler.send_request(id, &params).await
    }
}
