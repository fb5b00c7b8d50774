//! Host side of the todo viewer.
//!
//! # Overview
//! Executes the core's list request with `reqwest`, persists the theme in a
//! JSON file, and drives the view from a line-oriented terminal loop.
//!
//! # Design
//! - Everything runs on one thread. The fetch is the only operation that
//!   suspends; its result is committed back on the loop.
//! - A load is cancelled through a `CancellationToken`. Starting a new load
//!   cancels the previous one, and a result whose token was cancelled is
//!   never committed, so the most recent activation always wins.
//! - Load failures are logged and reported to an optional observer; the
//!   list is left as it was.

pub mod app;
pub mod cancel;
pub mod config;
pub mod error;
pub mod loader;
pub mod shell;
pub mod storage;

pub use app::TodoApp;
pub use cancel::CancellationToken;
pub use config::Config;
pub use error::{LoadError, ViewerError};
pub use loader::{LoadOutcome, PendingLoad, TodoLoader};
pub use shell::{run, Command};
pub use storage::FileStore;
