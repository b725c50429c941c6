//! HTML formalization

use super::Formalization;

/// Renders captions and lists as HTML fragments
///
/// The default leaves each `<li>` unclosed; [`Html::with_closed_items`]
/// emits balanced tags instead.
#[derive(Debug, Clone, Copy)]
pub struct Html {
    close_items: bool,
}

impl Html {
    pub fn new() -> Self {
        Self { close_items: false }
    }

    /// Variant that closes each `<li>` tag
    pub fn with_closed_items() -> Self {
        Self { close_items: true }
    }
}

impl Default for Html {
    fn default() -> Self {
        Self::new()
    }
}

impl Formalization for Html {
    fn make_caption(&self, caption: &str) -> String {
        format!("<h1>{}</h1>", caption)
    }

    fn begin_list(&self) -> String {
        "<ul>".to_string()
    }

    fn make_item(&self, label: &str, value: &str) -> String {
        if self.close_items {
            format!("<li><b>{}</b>: {}</li>", label, value)
        } else {
            format!("<li><b>{}</b>: {}", label, value)
        }
    }

    fn end_list(&self) -> String {
        "</ul>".to_string()
    }
}
