//! Deterministic core of the todo viewer.
//!
//! # Overview
//! Builds the list request and parses its response without touching the
//! network (host-does-IO pattern), owns the theme setting on top of an
//! abstract key-value store, and renders the view as plain text. The host
//! crate performs the HTTP round-trip and supplies durable storage.
//!
//! # Design
//! - `TodoClient` holds only the fetch target; `build_*` produces a request,
//!   `parse_*` consumes a response.
//! - Completion state is local: parsing forces every `completed` to `false`.
//! - `ThemeManager` is a write-through cache over any `KeyValueStore`, with
//!   the colour-scheme preference injected at construction.
//! - Rendering is a pure function of `(theme, items)`.

pub mod client;
pub mod error;
pub mod http;
pub mod storage;
pub mod theme;
pub mod todos;
pub mod types;
pub mod view;

pub use client::{TodoClient, DEFAULT_TODOS_URL};
pub use error::{ApiError, StorageError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use storage::{KeyValueStore, MemoryStore};
pub use theme::{ThemeManager, THEME_KEY};
pub use todos::{toggle_completed, TodoList};
pub use types::{Theme, TodoItem, UnknownTheme};
pub use view::render;
