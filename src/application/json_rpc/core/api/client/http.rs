use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use serde_json::Value;
use tracing::trace;
use tracing::warn;

use crate::application::json_rpc::core::api::client::transport::Transport;
use crate::application::json_rpc::core::api::ops::Namespace;
use crate::application::json_rpc::core::error::RpcError;
use crate::application::json_rpc::core::error::RpcResult;
use crate::application::json_rpc::core::model::common::RequestId;
use crate::application::json_rpc::core::model::json::JsonRequest;
use crate::application::json_rpc::core::model::json::JsonResponse;

/// JSON-RPC over HTTP `POST`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    url: String,
    client: Client,
    last_id: Arc<AtomicU64>,
}

impl HttpTransport {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(url: impl Into<String>) -> RpcResult<Self> {
        Self::with_timeout(url, Self::DEFAULT_TIMEOUT)
    }

    /// A transport whose requests fail once `timeout` elapses without a
    /// complete response.
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> RpcResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| RpcError::Transport(err.to_string()))?;

        Ok(Self {
            url: url.into(),
            client,
            last_id: Arc::new(AtomicU64::new(0)),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Params as they may appear in logs.
fn loggable_params(request: &JsonRequest) -> Value {
    match Namespace::of_method(&request.method) {
        Some(namespace) if namespace.has_sensitive_params() => json!("<redacted>"),
        _ => request.params.clone(),
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn next_id(&self) -> RequestId {
        self.last_id.fetch_add(1, Ordering::SeqCst).into()
    }

    async fn send(&self, request: JsonRequest) -> RpcResult<Value> {
        trace!(
            "<< Sending request, method: {:?}, params: {}, id: {:?}",
            &request.method,
            loggable_params(&request),
            &request.id
        );

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                trace!(">> Request to {} failed: {}", self.url, err);
                RpcError::Transport(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::Transport(format!(
                "{} responded with HTTP status {}",
                self.url, status
            )));
        }

        let response: JsonResponse = response
            .json()
            .await
            .map_err(|err| RpcError::Parse(err.to_string()))?;
        trace!(">> Received response: {:?}", response);

        if response.id() != request.id.as_ref() {
            warn!(
                "Response id {:?} does not match request id {:?} for {}",
                response.id(),
                request.id,
                request.method
            );
        }

        response.into_result().map_err(RpcError::Server)
    }
}
