//! The todo viewer as one stateful component.
//!
//! `TodoApp` owns the theme setting, the list on screen and the loader.
//! Loads are started by `mount` and `retarget` and committed by `apply`;
//! the other mutations are `toggle_theme` and `toggle_completed`.

use todo_viewer_core::{render, KeyValueStore, Theme, ThemeManager, TodoClient, TodoItem, TodoList};

use crate::error::LoadError;
use crate::loader::{LoadOutcome, PendingLoad, TodoLoader};

/// Called with every load failure that reaches `apply`.
pub type ErrorObserver = Box<dyn Fn(&LoadError)>;

pub struct TodoApp<S> {
    theme: ThemeManager<S>,
    todos: TodoList,
    target: TodoClient,
    loader: TodoLoader,
    mounted: bool,
    on_error: Option<ErrorObserver>,
}

impl<S: KeyValueStore> TodoApp<S> {
    /// The theme is settled here, synchronously; nothing is fetched until
    /// `mount`.
    pub fn new(store: S, prefers_dark: bool, target: TodoClient) -> Self {
        Self {
            theme: ThemeManager::new(store, prefers_dark),
            todos: TodoList::new(),
            target,
            loader: TodoLoader::new(),
            mounted: false,
            on_error: None,
        }
    }

    /// Observe load failures. Without an observer they are only logged.
    pub fn on_load_error(&mut self, observer: impl Fn(&LoadError) + 'static) {
        self.on_error = Some(Box::new(observer));
    }

    pub fn mount(&mut self) -> PendingLoad {
        self.mounted = true;
        self.loader.activate(&self.target)
    }

    /// Cancel any load in flight and drop the list.
    pub fn unmount(&mut self) {
        self.loader.deactivate();
        self.mounted = false;
        self.todos.clear();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Point the app at a new fetch target. While mounted, a changed target
    /// starts a fresh load and cancels the previous one; an unchanged target
    /// does nothing.
    pub fn retarget(&mut self, target: TodoClient) -> Option<PendingLoad> {
        if target == self.target {
            return None;
        }
        self.target = target;
        if self.mounted {
            Some(self.loader.activate(&self.target))
        } else {
            None
        }
    }

    /// Start a fresh load from the current target, cancelling the one in
    /// flight. The list on screen stays until the new one commits.
    pub fn reload(&mut self) -> Option<PendingLoad> {
        if !self.mounted {
            return None;
        }
        Some(self.loader.activate(&self.target))
    }

    /// Commit the result of a load. Returns whether the list was replaced.
    pub fn apply(&mut self, outcome: LoadOutcome) -> bool {
        if !self.mounted {
            tracing::debug!("discarding load outcome after unmount");
            return false;
        }
        match outcome {
            LoadOutcome::Loaded { token, .. } if token.is_cancelled() => {
                tracing::debug!("discarding superseded todo load");
                false
            }
            LoadOutcome::Loaded { items, .. } => {
                tracing::info!(count = items.len(), url = %self.target.url(), "loaded todos");
                self.todos.replace(items);
                true
            }
            LoadOutcome::Failed(e) => {
                tracing::error!(error = %e, url = %self.target.url(), "failed to load todos");
                if let Some(observer) = &self.on_error {
                    observer(&e);
                }
                false
            }
            LoadOutcome::Cancelled => {
                tracing::debug!("todo load cancelled");
                false
            }
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle_theme()
    }

    /// Flip one item. Returns whether `id` exists.
    pub fn toggle_completed(&mut self, id: i64) -> bool {
        self.todos.toggle_completed(id)
    }

    pub fn todos(&self) -> &[TodoItem] {
        self.todos.items()
    }

    pub fn target(&self) -> &TodoClient {
        &self.target
    }

    pub fn theme_store(&self) -> &S {
        self.theme.store()
    }

    pub fn render(&self) -> String {
        render(self.theme(), self.todos.items())
    }
}
