//! Domain types for the todo viewer.
//!
//! `TodoItem` mirrors the remote JSON record. Field names on the wire are
//! camelCase (`userId`); the mock-server crate defines its own copy of the
//! schema and integration tests catch drift between the two.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single todo record as displayed locally.
///
/// `completed` is owned by the viewer, not the remote source: parsing
/// always resets it to `false`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

/// Colour theme of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Default theme when nothing is persisted.
    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored string is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_item_uses_camel_case_on_the_wire() {
        let item = TodoItem {
            user_id: 7,
            id: 3,
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["userId"], 7);
        assert_eq!(json["id"], 3);
        assert_eq!(json["title"], "Test");
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn todo_item_ignores_unknown_fields() {
        let item: TodoItem = serde_json::from_str(
            r#"{"userId":1,"id":2,"title":"A","completed":true,"extra":"x"}"#,
        )
        .unwrap();
        assert_eq!(item.id, 2);
        assert!(item.completed);
    }

    #[test]
    fn todo_item_rejects_missing_title() {
        let result: Result<TodoItem, _> =
            serde_json::from_str(r#"{"userId":1,"id":2,"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn theme_from_preference() {
        assert_eq!(Theme::from_preference(true), Theme::Dark);
        assert_eq!(Theme::from_preference(false), Theme::Light);
    }

    #[test]
    fn theme_toggles_between_both_values() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn theme_parses_its_own_string_form() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(
            "Dark".parse::<Theme>(),
            Err(UnknownTheme("Dark".to_string()))
        );
    }
}
