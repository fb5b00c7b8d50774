//! Line-oriented terminal loop.
//!
//! Reads one command per line while the load is pending and re-renders the
//! view after every change. End of input behaves like `q`.

use std::future::Future;
use std::pin::Pin;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use todo_viewer_core::{KeyValueStore, TodoClient};

use crate::app::TodoApp;
use crate::error::ViewerError;
use crate::loader::{LoadOutcome, PendingLoad};

const HELP: &str = "commands: t <id> | theme | url <endpoint> | reload | q";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle(i64),
    Theme,
    Retarget(String),
    Reload,
    Redraw,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Command::Redraw);
        };
        let arg = words.next();
        if words.next().is_some() {
            return Err(format!("too many arguments to `{head}`"));
        }
        match (head, arg) {
            ("t" | "toggle", Some(id)) => id
                .parse()
                .map(Command::Toggle)
                .map_err(|_| format!("not a todo id: {id}")),
            ("theme", None) => Ok(Command::Theme),
            ("url", Some(url)) => Ok(Command::Retarget(url.to_string())),
            ("reload", None) => Ok(Command::Reload),
            ("q" | "quit", None) => Ok(Command::Quit),
            _ => Err(format!("unknown command `{}`", line.trim())),
        }
    }
}

type Outcome = Pin<Box<dyn Future<Output = LoadOutcome>>>;

fn track(load: PendingLoad) -> Option<Outcome> {
    let outcome: Outcome = Box::pin(load.outcome());
    Some(outcome)
}

/// Mount `app`, serve commands from `input` and write views to `output`
/// until quit or end of input. The app is unmounted on return.
pub async fn run<S, R, W>(app: &mut TodoApp<S>, input: R, mut output: W) -> Result<(), ViewerError>
where
    S: KeyValueStore,
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(input).lines();
    let mut pending = track(app.mount());

    write_view(&mut output, &app.render()).await?;

    let result = loop {
        let message = tokio::select! {
            outcome = async {
                match pending.as_mut() {
                    Some(load) => load.await,
                    None => std::future::pending().await,
                }
            } => {
                pending = None;
                app.apply(outcome).then(|| app.render())
            }
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break Ok(()),
                    Err(e) => break Err(e.into()),
                };
                match Command::parse(&line) {
                    Ok(Command::Quit) => break Ok(()),
                    Ok(Command::Toggle(id)) => {
                        if app.toggle_completed(id) {
                            Some(app.render())
                        } else {
                            Some(format!("no todo with id {id}\n"))
                        }
                    }
                    Ok(Command::Theme) => {
                        app.toggle_theme();
                        Some(app.render())
                    }
                    Ok(Command::Retarget(url)) => match app.retarget(TodoClient::new(&url)) {
                        Some(load) => {
                            pending = track(load);
                            Some(format!("loading {}\n", app.target().url()))
                        }
                        None => Some(format!("already showing {}\n", app.target().url())),
                    },
                    Ok(Command::Reload) => {
                        pending = app.reload().and_then(track);
                        Some(format!("reloading {}\n", app.target().url()))
                    }
                    Ok(Command::Redraw) => Some(app.render()),
                    Err(message) => Some(format!("{message}\n{HELP}\n")),
                }
            }
        };

        if let Some(text) = message {
            if let Err(e) = write_view(&mut output, &text).await {
                break Err(e.into());
            }
        }
    };

    app.unmount();
    result
}

async fn write_view<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> std::io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.flush().await
}
