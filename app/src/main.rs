use clap::Parser;
use todo_viewer::{Config, FileStore, TodoApp, ViewerError};
use todo_viewer_core::TodoClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ViewerError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = Config::parse();
    tracing::debug!(url = %config.url, store = %config.store.display(), "starting todo viewer");

    let store = FileStore::new(&config.store);
    let mut app = TodoApp::new(store, config.prefer_dark, TodoClient::new(&config.url));
    todo_viewer::run(&mut app, tokio::io::stdin(), tokio::io::stdout()).await
}
