use std::path::PathBuf;

use clap::Parser;
use todo_viewer_core::DEFAULT_TODOS_URL;

#[derive(Parser, Debug, Clone)]
#[command(name = "todo-viewer", about = "Fetch a todo list and tick items off locally")]
pub struct Config {
    /// Endpoint returning the JSON todo array.
    #[arg(long, env = "TODO_VIEWER_URL", default_value = DEFAULT_TODOS_URL)]
    pub url: String,

    /// File holding the persisted theme.
    #[arg(long, env = "TODO_VIEWER_STORE", default_value = ".todo-viewer.json")]
    pub store: PathBuf,

    /// Whether the environment prefers a dark colour scheme. Only consulted
    /// when no theme has been persisted yet.
    #[arg(long, env = "TODO_VIEWER_PREFER_DARK")]
    pub prefer_dark: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["todo-viewer"]).unwrap();
        assert_eq!(config.url, DEFAULT_TODOS_URL);
        assert_eq!(config.store, PathBuf::from(".todo-viewer.json"));
        assert!(!config.prefer_dark);
    }

    #[test]
    fn explicit_flags() {
        let config = Config::try_parse_from([
            "todo-viewer",
            "--url",
            "http://127.0.0.1:3000/todos",
            "--store",
            "/tmp/viewer.json",
            "--prefer-dark",
        ])
        .unwrap();
        assert_eq!(config.url, "http://127.0.0.1:3000/todos");
        assert_eq!(config.store, PathBuf::from("/tmp/viewer.json"));
        assert!(config.prefer_dark);
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(Config::try_parse_from(["todo-viewer", "--verbose"]).is_err());
    }
}
