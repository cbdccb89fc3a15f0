use super::table::table_lines;
use crate::content::Strings;
use crate::pages::{Block, Document};
use crate::tables::Tables;
use crate::ui::markdown;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use std::path::Path;

/// Everything needed to turn a document into lines.
///
pub struct PageStyle<'a> {
    pub theme: &'a Theme,
    pub strings: &'static Strings,
    pub images_dir: &'a Path,
    pub button_focused: bool,
}

fn image_lines(file: &str, caption: &str, style: &PageStyle) -> Vec<Line<'static>> {
    let path = style.images_dir.join(file);
    let muted = styling::muted_text_style(style.theme);
    vec![
        Line::from(vec![
            Span::styled("┌ ", muted),
            Span::styled(
                format!("{}: {}", style.strings.chrome.image, path.display()),
                styling::link_style(style.theme),
            ),
        ]),
        Line::from(vec![
            Span::styled("└ ", muted),
            Span::styled(caption.to_string(), muted.add_modifier(Modifier::ITALIC)),
        ]),
    ]
}

/// Convert a page document into styled lines, blank line between blocks.
///
pub fn document_lines(document: &Document, tables: &Tables, style: &PageStyle) -> Vec<Line<'static>> {
    let theme = style.theme;
    let mut lines = vec![];

    for block in &document.blocks {
        match block {
            Block::Heading(text) => {
                lines.push(Line::from(Span::styled(
                    text.to_string(),
                    styling::heading_style(theme).add_modifier(Modifier::UNDERLINED),
                )));
            }
            Block::Subheader(text) => {
                lines.push(Line::from(Span::styled(
                    text.to_string(),
                    styling::heading_style(theme),
                )));
            }
            Block::Markdown(source) => lines.extend(markdown::to_lines(source, theme)),
            Block::Code(source) => {
                lines.extend(source.lines().map(|line| {
                    Line::from(Span::styled(line.to_string(), styling::code_style(theme)))
                }));
            }
            Block::Image { file, caption } => lines.extend(image_lines(file, caption, style)),
            Block::Table { kind, caption } => {
                let (headers, rows) = tables.grid(*kind);
                lines.extend(table_lines(&headers, &rows, theme));
                lines.push(Line::from(Span::styled(
                    caption.to_string(),
                    styling::muted_text_style(theme),
                )));
            }
            Block::Button { label, .. } => {
                lines.push(Line::from(Span::styled(
                    format!("[ {} ]", label),
                    styling::button_style(theme, style.button_focused),
                )));
            }
            Block::Rule => lines.push(markdown::rule(theme)),
        }
        lines.push(Line::from(""));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Locale;
    use crate::pages::{PageView, RenderContext};
    use crate::tables::fixtures;
    use crate::ui::markdown::plain;

    fn render_text(view: &dyn PageView, locale: Locale) -> Vec<String> {
        let tables = fixtures::tables();
        let theme = Theme::default();
        let strings = locale.strings();
        let document = view.render(&RenderContext {
            strings,
            tables: &tables,
        });
        let style = PageStyle {
            theme: &theme,
            strings,
            images_dir: Path::new("images"),
            button_focused: false,
        };
        document_lines(&document, &tables, &style)
            .iter()
            .map(plain)
            .collect()
    }

    #[test]
    fn overview_shows_button_and_tables() {
        let text = render_text(&crate::pages::overview::PAGE, Locale::En);
        let strings = Locale::En.strings();
        assert_eq!(text[0], strings.overview.title);
        assert!(text.contains(&format!("[ {} ]", strings.overview.button)));
        assert_eq!(text.iter().filter(|l| l.as_str() == "1 rows").count(), 2);
    }

    #[test]
    fn image_placeholder_names_file() {
        let text = render_text(&crate::pages::architecture::PAGE, Locale::Pt);
        let path = Path::new("images").join("arquitetura.png");
        assert!(text.iter().any(|l| l.ends_with(&path.display().to_string())));
        assert!(text
            .iter()
            .any(|l| l.contains(Locale::Pt.strings().architecture.diagram_caption)));
    }

    #[test]
    fn focused_button_is_reversed() {
        let tables = fixtures::tables();
        let theme = Theme::default();
        let strings = Locale::En.strings();
        let document = crate::pages::local::PAGE.render(&RenderContext {
            strings,
            tables: &tables,
        });
        let style = PageStyle {
            theme: &theme,
            strings,
            images_dir: Path::new("images"),
            button_focused: true,
        };
        let lines = document_lines(&document, &tables, &style);
        let button = lines
            .iter()
            .find(|l| plain(l).starts_with("[ "))
            .unwrap();
        assert!(button.spans[0]
            .style
            .add_modifier
            .contains(Modifier::REVERSED));
    }
}
