use std::sync::Arc;

use crate::application::json_rpc::core::api::client::transport::Transport;
use crate::application::json_rpc::core::api::handler::RpcRequestResponseHandler;
use crate::application::json_rpc::core::api::ops::RpcMethods;
use crate::application::json_rpc::core::error::RpcResult;
use crate::application::json_rpc::core::model::common::RequestId;
use crate::application::json_rpc::core::model::json::JsonRequest;
use crate::application::json_rpc::core::model::message::CoinbaseRequest;
use crate::application::json_rpc::core::model::message::CoinbaseResponse;

/// `eth_coinbase`: the default account address configured on the node.
#[derive(Clone, Debug)]
pub struct EthCoinbase {
    handler: RpcRequestResponseHandler<CoinbaseResponse>,
}

impl EthCoinbase {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            handler: RpcRequestResponseHandler::new(transport, RpcMethods::Coinbase),
        }
    }

    pub async fn send_request(&self, id: Option<RequestId>) -> RpcResult<CoinbaseResponse> {
        self.handler.send_request(id, &CoinbaseRequest {}).await
    }

    pub fn build_request(&self, id: Option<RequestId>) -> RpcResult<JsonRequest> {
        self.handler.build_request(id, &CoinbaseRequest {})
    }
}
