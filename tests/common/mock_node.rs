use std::sync::Arc;
use std::sync::Mutex;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Json;
use axum::Router;
use eth_personal_rpc::application::json_rpc::core::model::json::JsonError;
use eth_personal_rpc::application::json_rpc::core::model::json::JsonRequest;
use eth_personal_rpc::application::json_rpc::core::model::json::JsonResponse;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

type Responder = Box<dyn Fn(&JsonRequest) -> Result<Value, JsonError> + Send + Sync>;

struct NodeState {
    responder: Responder,
    received: Arc<Mutex<Vec<JsonRequest>>>,
}

/// A JSON-RPC endpoint on a local port that answers with `responder` and
/// records what it was sent.
pub struct MockNode {
    pub url: String,
    received: Arc<Mutex<Vec<JsonRequest>>>,
    server: JoinHandle<()>,
}

impl MockNode {
    pub async fn start<F>(responder: F) -> anyhow::Result<Self>
    where
        F: Fn(&JsonRequest) -> Result<Value, JsonError> + Send + Sync + 'static,
    {
        let received = Arc::new(Mutex::new(vec![]));
        let state = Arc::new(NodeState {
            responder: Box::new(responder),
            received: received.clone(),
        });
        let app = Router::new().route("/", post(rpc_handler)).with_state(state);

        Self::serve(app, received).await
    }

    /// A node whose every answer is an empty response with `status`.
    pub async fn failing(status: StatusCode) -> anyhow::Result<Self> {
        let app = Router::new().route("/", post(move || async move { status }));

        Self::serve(app, Arc::default()).await
    }

    async fn serve(app: Router, received: Arc<Mutex<Vec<JsonRequest>>>) -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let url = format!("http://{}", listener.local_addr()?);
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            url,
            received,
            server,
        })
    }

    pub fn received(&self) -> Vec<JsonRequest> {
        self.received.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.received()
            .into_iter()
            .map(|request| request.method)
            .collect()
    }
}

impl Drop for MockNode {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn rpc_handler(
    State(state): State<Arc<NodeState>>,
    Json(request): Json<JsonRequest>,
) -> Json<JsonResponse> {
    let response = match (state.responder)(&request) {
        Ok(result) => JsonResponse::success(request.id.clone(), result),
        Err(error) => JsonResponse::error(request.id.clone(), error),
    };
    state.received.lock().unwrap().push(request);

    Json(response)
}
