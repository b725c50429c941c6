//! Markdown formalization

use super::Formalization;

/// Renders captions and lists as Markdown
///
/// Markdown lists need no surrounding delimiters, so `begin_list` and
/// `end_list` are empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Markdown;

impl Formalization for Markdown {
    fn make_caption(&self, caption: &str) -> String {
        format!("## {}\n\n", caption)
    }

    fn begin_list(&self) -> String {
        String::new()
    }

    fn make_item(&self, label: &str, value: &str) -> String {
        format!(" * **{}**: {}\n\n", label, value)
    }

    fn end_list(&self) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption() {
        assert_eq!(Markdown.make_caption("Median"), "## Median\n\n");
    }

    #[test]
    fn test_item() {
        assert_eq!(
            Markdown.make_item("Humidity", "Mean = 60 Std = 10"),
            " * **Humidity**: Mean = 60 Std = 10\n\n"
        );
    }

    #[test]
    fn test_list_delimiters_are_empty() {
        assert_eq!(Markdown.begin_list(), "");
        assert_eq!(Markdown.end_list(), "");
    }
}
