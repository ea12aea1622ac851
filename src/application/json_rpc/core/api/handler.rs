use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::application::json_rpc::core::api::client::transport::Transport;
use crate::application::json_rpc::core::api::ops::RpcMethods;
use crate::application::json_rpc::core::error::RpcError;
use crate::application::json_rpc::core::error::RpcResult;
use crate::application::json_rpc::core::model::common::RequestId;
use crate::application::json_rpc::core::model::json::JsonRequest;

/// Binds one RPC method to its decoded result type `T`.
///
/// Builds the envelope, hands it to the transport and decodes the `result`
/// member. Errors from the transport are returned as they are.
#[derive(Debug)]
pub struct RpcRequestResponseHandler<T> {
    transport: Arc<dyn Transport>,
    method: RpcMethods,
    response: PhantomData<fn() -> T>,
}

impl<T> Clone for RpcRequestResponseHandler<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            method: self.method,
            response: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> RpcRequestResponseHandler<T> {
    pub fn new(transport: Arc<dyn Transport>, method: RpcMethods) -> Self {
        Self {
            transport,
            method,
            response: PhantomData,
        }
    }

    pub fn method(&self) -> RpcMethods {
        self.method
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Builds the envelope without sending it. Without an explicit `id`, the
    /// transport's next id is used.
    pub fn build_request<P>(&self, id: Option<RequestId>, params: &P) -> RpcResult<JsonRequest>
    where
        P: Serialize + ?Sized,
    {
        let params = serde_json::to_value(params).map_err(|err| {
            RpcError::Parse(format!("params of {} failed to serialize: {err}", self.method))
        })?;
        let id = id.unwrap_or_else(|| self.transport.next_id());

        Ok(JsonRequest::new(self.method.name(), params, Some(id)))
    }

    pub async fn send_request<P>(&self, id: Option<RequestId>, params: &P) -> RpcResult<T>
    where
        P: Serialize + Sync + ?Sized,
    {
        let request = self.build_request(id, params)?;
        self.send_built_request(request).await
    }

    /// Sends an envelope built earlier, e.g. by [`Self::build_request`].
    pub async fn send_built_request(&self, request: JsonRequest) -> RpcResult<T> {
        debug!("Calling {} with id {:?}", request.method, request.id);
        let value = self.transport.send(request).await?;

        serde_json::from_value(value)
            .map_err(|err| RpcError::Parse(format!("unexpected result for {}: {err}", self.method)))
    }
}
