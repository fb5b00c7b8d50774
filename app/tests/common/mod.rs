#![allow(dead_code)]

use mock_server::{MockConfig, Todo};

/// Start the mock server on a random port and return its `/todos` URL.
pub async fn spawn_server(config: MockConfig) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run_with(listener, config));
    format!("http://{addr}/todos")
}

/// A URL nothing is listening on.
pub async fn closed_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/todos")
}

pub fn todo(user_id: i64, id: i64, title: &str, completed: bool) -> Todo {
    Todo {
        user_id,
        id,
        title: title.to_string(),
        completed,
    }
}

/// The two-item fixture: one completed upstream, one not.
pub fn fixture() -> Vec<Todo> {
    vec![todo(1, 1, "A", true), todo(2, 2, "B", false)]
}
