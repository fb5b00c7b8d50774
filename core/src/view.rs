//! Text rendering of the todo list.

use std::fmt::Write;

use crate::types::{Theme, TodoItem};

pub const HEADING: &str = "My Todo List";

/// Label of the theme control: it names the theme a press switches to.
pub fn theme_button_label(theme: Theme) -> String {
    format!("{}Mode", theme.toggled())
}

/// Render the view. Pure: the same `(theme, items)` always produce the same
/// text.
pub fn render(theme: Theme, items: &[TodoItem]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{HEADING}  (theme: {theme})");
    let _ = writeln!(out, "[{}]", theme_button_label(theme));
    for item in items {
        let mark = if item.completed { 'x' } else { ' ' };
        let _ = writeln!(out, "{:>4} [{mark}] {}", item.id, item.title);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, title: &str, completed: bool) -> TodoItem {
        TodoItem {
            user_id: 1,
            id,
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn button_names_the_other_theme() {
        assert_eq!(theme_button_label(Theme::Light), "darkMode");
        assert_eq!(theme_button_label(Theme::Dark), "lightMode");
    }

    #[test]
    fn empty_list_renders_heading_and_control_only() {
        let out = render(Theme::Light, &[]);
        assert_eq!(out, "My Todo List  (theme: light)\n[darkMode]\n");
    }

    #[test]
    fn one_row_per_item_with_checkbox_state() {
        let out = render(Theme::Dark, &[item(1, "A", false), item(12, "B", true)]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "[lightMode]");
        assert_eq!(lines[2], "   1 [ ] A");
        assert_eq!(lines[3], "  12 [x] B");
    }

    #[test]
    fn render_is_deterministic() {
        let items = vec![item(1, "A", true)];
        assert_eq!(render(Theme::Light, &items), render(Theme::Light, &items));
    }
}
