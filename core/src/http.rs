//! HTTP transport types for the host-does-IO pattern.
//!
//! These types describe the list request and its response as plain data.
//! The core builds `HttpRequest` values and parses `HttpResponse` values;
//! the host executes the round-trip and decides how it gets cancelled.

/// HTTP method for a request. The viewer only ever reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

/// An HTTP request described as plain data.
///
/// Built by `TodoClient::build_list_todos`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
