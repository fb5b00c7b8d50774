//! Stand-in for the public todo endpoint.
//!
//! Serves a jsonplaceholder-shaped array at `GET /todos`. The fixture, the
//! response status and an artificial delay are configurable so tests can
//! drive success, failure and slow-response paths.

use std::{sync::Arc, time::Duration};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub use axum::http::StatusCode as MockStatus;

const USERS: i64 = 10;
const TODOS_PER_USER: i64 = 20;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

#[derive(Clone, Debug)]
pub struct MockConfig {
    pub todos: Vec<Todo>,
    pub status: StatusCode,
    pub delay: Duration,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            todos: seed_todos(),
            status: StatusCode::OK,
            delay: Duration::ZERO,
        }
    }
}

impl MockConfig {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos,
            ..Self::default()
        }
    }

    pub fn failing(status: StatusCode) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Ten users with twenty todos each; every third one arrives completed.
pub fn seed_todos() -> Vec<Todo> {
    (1..=USERS * TODOS_PER_USER)
        .map(|id| Todo {
            user_id: (id - 1) / TODOS_PER_USER + 1,
            id,
            title: format!("todo {id}"),
            completed: id % 3 == 0,
        })
        .collect()
}

pub fn app() -> Router {
    app_with(MockConfig::default())
}

pub fn app_with(config: MockConfig) -> Router {
    Router::new()
        .route("/todos", get(list_todos))
        .with_state(Arc::new(config))
}

pub async fn run_with(listener: TcpListener, config: MockConfig) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(config)).await
}

async fn list_todos(State(config): State<Arc<MockConfig>>) -> Response {
    if !config.delay.is_zero() {
        tokio::time::sleep(config.delay).await;
    }
    tracing::debug!(status = %config.status, count = config.todos.len(), "serving /todos");
    if config.status.is_success() {
        (config.status, Json(config.todos.clone())).into_response()
    } else {
        (config.status, "mock failure").into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn todo_serializes_with_camel_case_keys() {
        let todo = Todo {
            user_id: 1,
            id: 2,
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["id"], 2);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn seed_has_unique_ids_and_mixed_completion() {
        let todos = seed_todos();
        assert_eq!(todos.len(), 200);
        let ids: HashSet<i64> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 200);
        assert!(todos.iter().any(|t| t.completed));
        assert!(todos.iter().any(|t| !t.completed));
    }

    #[test]
    fn seed_assigns_twenty_todos_per_user() {
        let todos = seed_todos();
        assert_eq!(todos[0].user_id, 1);
        assert_eq!(todos[19].user_id, 1);
        assert_eq!(todos[20].user_id, 2);
        assert_eq!(todos[199].user_id, 10);
    }

    #[test]
    fn failing_config_keeps_seed() {
        let config = MockConfig::failing(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(config.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(config.todos.len(), 200);
    }
}
