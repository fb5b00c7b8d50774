use todo_viewer_core::ApiError;

/// Why a todo load did not produce a list.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("http request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Errors that end the terminal loop.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
