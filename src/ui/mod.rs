//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Terminal rendering and layout
//! - Theme management
//! - Markdown conversion for the page prose
//! - Plain text output for headless printing

type Frame<'a> = ratatui::Frame<'a>;

pub mod markdown;
mod render;
mod theme;
mod widgets;

pub use render::render;
pub use render::{document_lines, PageStyle};
pub use theme::Theme;

use crate::pages::Document;
use crate::tables::Tables;

/// Render a document as plain text, one line per terminal line, without
/// trailing blank lines.
///
pub fn plain_text(document: &Document, tables: &Tables, style: &PageStyle) -> String {
    let text = document_lines(document, tables, style)
        .iter()
        .map(|line| markdown::plain(line).trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    text.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Locale;
    use crate::pages::{PageView, RenderContext};
    use crate::tables::fixtures;
    use std::path::Path;

    #[test]
    fn plain_text_has_no_markup() {
        let tables = fixtures::tables();
        let strings = Locale::En.strings();
        let document = crate::pages::cloud::PAGE.render(&RenderContext {
            strings,
            tables: &tables,
        });
        let theme = Theme::default();
        let text = plain_text(
            &document,
            &tables,
            &PageStyle {
                theme: &theme,
                strings,
                images_dir: Path::new("images"),
                button_focused: false,
            },
        );
        assert!(text.starts_with(strings.cloud.title));
        assert!(!text.contains("**"));
        assert!(!text.contains("```"));
        assert!(text.ends_with(&format!("[ {} ]", strings.cloud.button)));
    }
}
