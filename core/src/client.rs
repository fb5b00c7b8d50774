//! Stateless HTTP request builder and response parser for the todo list.
//!
//! # Design
//! `TodoClient` holds only the fetch target and carries no mutable state
//! between calls. `build_list_todos` produces an `HttpRequest` and
//! `parse_list_todos` consumes an `HttpResponse`; the caller executes the
//! round-trip and owns cancellation.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::TodoItem;

/// Public example endpoint the viewer reads by default.
pub const DEFAULT_TODOS_URL: &str = "https://jsonplaceholder.typicode.com/todos";

/// Synchronous, stateless client for the remote todo list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoClient {
    url: String,
}

impl Default for TodoClient {
    fn default() -> Self {
        Self::new(DEFAULT_TODOS_URL)
    }
}

impl TodoClient {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
        }
    }

    /// The fetch target. A change of target is what re-activates a load.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Parse the list and reset every item's `completed` flag to `false`.
    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<TodoItem>, ApiError> {
        check_status(&response)?;
        let items: Vec<TodoItem> = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        Ok(items
            .into_iter()
            .map(|item| TodoItem {
                completed: false,
                ..item
            })
            .collect())
    }
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
