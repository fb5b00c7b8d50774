//! Cancellable todo loads.
//!
//! # Design
//! `TodoLoader` keeps the token of the load it started last. `activate`
//! cancels that token before spawning the next fetch, so at most one load
//! can ever commit. The spawned task races the HTTP round-trip against the
//! token and stops as soon as the token fires; dropping the request future
//! aborts the connection.
//!
//! There is no timeout. A load ends by completing, failing, or being
//! cancelled.

use reqwest::Client;
use tokio::task::JoinHandle;
use todo_viewer_core::{HttpMethod, HttpRequest, HttpResponse, TodoClient, TodoItem};

use crate::cancel::CancellationToken;
use crate::error::LoadError;

/// How a load ended.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The list arrived. `token` must still be live when the list is
    /// committed.
    Loaded {
        items: Vec<TodoItem>,
        token: CancellationToken,
    },
    Failed(LoadError),
    /// Superseded or unmounted. Not an error.
    Cancelled,
}

/// A load started by `TodoLoader::activate`.
#[derive(Debug)]
pub struct PendingLoad {
    token: CancellationToken,
    handle: JoinHandle<Option<Result<Vec<TodoItem>, LoadError>>>,
}

impl PendingLoad {
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Wait for the load to finish. A load whose token was cancelled reports
    /// `Cancelled` even if its response had already arrived.
    pub async fn outcome(self) -> LoadOutcome {
        let joined = self.handle.await;
        if self.token.is_cancelled() {
            return LoadOutcome::Cancelled;
        }
        match joined {
            Ok(Some(Ok(items))) => LoadOutcome::Loaded {
                items,
                token: self.token,
            },
            Ok(Some(Err(e))) => LoadOutcome::Failed(e),
            Ok(None) => LoadOutcome::Cancelled,
            Err(e) => LoadOutcome::Failed(e.into()),
        }
    }
}

#[derive(Debug, Default)]
pub struct TodoLoader {
    http: Client,
    in_flight: Option<CancellationToken>,
}

impl TodoLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading from `target`, cancelling any load still in flight.
    /// Must be called from within a tokio runtime.
    pub fn activate(&mut self, target: &TodoClient) -> PendingLoad {
        self.deactivate();

        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());

        let request = target.build_list_todos();
        tracing::debug!(url = %request.url, "starting todo load");

        let http = self.http.clone();
        let client = target.clone();
        let task_token = token.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                () = task_token.cancelled() => None,
                result = execute(&http, request) => Some(
                    result
                        .map_err(LoadError::from)
                        .and_then(|response| client.parse_list_todos(response).map_err(LoadError::from)),
                ),
            }
        });

        PendingLoad { token, handle }
    }

    /// Cancel the load in flight, if any.
    pub fn deactivate(&mut self) {
        if let Some(token) = self.in_flight.take() {
            if !token.is_cancelled() {
                tracing::debug!("cancelling in-flight todo load");
            }
            token.cancel();
        }
    }
}

impl Drop for TodoLoader {
    fn drop(&mut self) {
        self.deactivate();
    }
}

/// Execute an `HttpRequest` with reqwest and return it as plain data.
/// Non-2xx statuses come back as data for the core to interpret.
async fn execute(http: &Client, request: HttpRequest) -> Result<HttpResponse, reqwest::Error> {
    let builder = match request.method {
        HttpMethod::Get => http.get(&request.url),
    };
    let response = builder.send().await?;
    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    let body = response.text().await?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
