use std::fmt::Debug;

use async_trait::async_trait;
use serde_json::Value;

use crate::application::json_rpc::core::error::RpcResult;
use crate::application::json_rpc::core::model::common::RequestId;
use crate::application::json_rpc::core::model::json::JsonRequest;

/// Trait which must be implemented by data transports to be used with the
/// typed method adapters.
#[async_trait]
pub trait Transport: Debug + Send + Sync {
    /// The id given to requests whose caller did not pick one.
    fn next_id(&self) -> RequestId;

    /// Sends a complete envelope and returns the `result` member of the
    /// response.
    async fn send(&self, request: JsonRequest) -> RpcResult<Value>;

    async fn call(&self, method: &str, params: Value) -> RpcResult<Value> {
        let request = JsonRequest::new(method, params, Some(self.next_id()));
        self.send(request).await
    }
}
