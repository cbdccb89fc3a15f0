//! Markdown to terminal lines.
//!
//! Supports the subset used by the page text: headings, nested bullets,
//! ordered items, fenced code, horizontal rules and inline bold, italic,
//! code and links.

use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use once_cell::sync::Lazy;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use regex::Regex;

/// Width of the line drawn for `---`.
///
pub const RULE_WIDTH: usize = 48;

const BULLETS: [&str; 3] = ["•", "◦", "▪"];

static INLINE: Lazy<Option<Regex>> = Lazy::new(|| {
    compile(
        "inline",
        r"\*\*(?P<bold>.+?)\*\*|`(?P<code>[^`]+)`|\[(?P<text>[^\]]+)\]\((?P<url>[^)]+)\)|\*(?P<italic>[^*\s][^*]*)\*",
    )
});

static ORDERED: Lazy<Option<Regex>> = Lazy::new(|| compile("ordered item", r"^(\d+)\.\s+(.*)$"));

/// Compile a markup pattern. On failure the markup it covers is shown as
/// plain text and the error is logged.
///
fn compile(name: &str, pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            log::error!("Failed to compile {} markup pattern: {}", name, e);
            None
        }
    }
}

/// Return a horizontal rule line.
///
pub fn rule(theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(RULE_WIDTH),
        styling::muted_text_style(theme),
    ))
}

/// Convert inline markup into spans on top of the base style.
///
pub fn inline(text: &str, base: Style, theme: &Theme) -> Vec<Span<'static>> {
    let Some(re) = INLINE.as_ref() else {
        return vec![Span::styled(text.to_string(), base)];
    };

    let mut spans = vec![];
    let mut last = 0;
    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            spans.push(Span::styled(text[last..whole.start()].to_string(), base));
        }
        if let Some(bold) = caps.name("bold") {
            spans.extend(inline(bold.as_str(), base.add_modifier(Modifier::BOLD), theme));
        } else if let Some(code) = caps.name("code") {
            spans.push(Span::styled(
                code.as_str().to_string(),
                base.patch(styling::code_style(theme)),
            ));
        } else if let (Some(label), Some(url)) = (caps.name("text"), caps.name("url")) {
            spans.push(Span::styled(
                label.as_str().to_string(),
                base.patch(styling::link_style(theme)),
            ));
            if label.as_str() != url.as_str() {
                spans.push(Span::styled(
                    format!(" <{}>", url.as_str()),
                    styling::muted_text_style(theme),
                ));
            }
        } else if let Some(italic) = caps.name("italic") {
            spans.extend(inline(
                italic.as_str(),
                base.add_modifier(Modifier::ITALIC),
                theme,
            ));
        }
        last = whole.end();
    }
    if last < text.len() {
        spans.push(Span::styled(text[last..].to_string(), base));
    }
    spans
}

fn heading_level(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|c| *c == '#').count();
    if (1..=6).contains(&level) {
        line[level..].strip_prefix(' ').map(|rest| (level, rest.trim()))
    } else {
        None
    }
}

fn is_rule(line: &str) -> bool {
    line.len() >= 3 && line.chars().all(|c| c == '-')
}

/// Convert a markdown source into styled lines.
///
pub fn to_lines(source: &str, theme: &Theme) -> Vec<Line<'static>> {
    let base = styling::normal_text_style(theme);
    let mut lines = vec![];
    let mut in_code = false;

    for raw in source.lines() {
        let trimmed = raw.trim_start();
        let indent = raw.len() - trimmed.len();

        if trimmed.starts_with("```") {
            in_code = !in_code;
            if in_code {
                let language = trimmed.trim_start_matches('`').trim();
                if !language.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", language),
                        styling::muted_text_style(theme).add_modifier(Modifier::ITALIC),
                    )));
                }
            }
            continue;
        }

        if in_code {
            lines.push(Line::from(vec![
                Span::styled("  │ ".to_string(), styling::muted_text_style(theme)),
                Span::styled(raw.to_string(), styling::code_style(theme)),
            ]));
            continue;
        }

        if trimmed.is_empty() {
            lines.push(Line::from(""));
        } else if is_rule(trimmed) {
            lines.push(rule(theme));
        } else if let Some((level, text)) = heading_level(trimmed) {
            let mut style = styling::heading_style(theme);
            if level <= 2 {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            lines.push(Line::from(inline(text, style, theme)));
        } else if let Some(item) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            let depth = indent / 4;
            let mut spans = vec![Span::styled(
                format!("{}{} ", "  ".repeat(depth), BULLETS[depth.min(BULLETS.len() - 1)]),
                Style::default().fg(theme.accent.to_color()),
            )];
            spans.extend(inline(item, base, theme));
            lines.push(Line::from(spans));
        } else if let Some(caps) = ORDERED.as_ref().and_then(|re| re.captures(trimmed)) {
            let depth = indent / 4;
            let mut spans = vec![Span::styled(
                format!("{}{}. ", "  ".repeat(depth), &caps[1]),
                Style::default().fg(theme.accent.to_color()),
            )];
            spans.extend(inline(&caps[2], base, theme));
            lines.push(Line::from(spans));
        } else if indent > 0 {
            let mut spans = vec![Span::raw("  ".repeat(indent / 4 + 1))];
            spans.extend(inline(trimmed, base, theme));
            lines.push(Line::from(spans));
        } else {
            lines.push(Line::from(inline(trimmed, base, theme)));
        }
    }

    lines
}

/// Return the plain text of a line.
///
pub fn plain(line: &Line) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_patterns_compile() {
        assert!(INLINE.is_some());
        assert!(ORDERED.is_some());
        assert!(compile("broken", r"(unclosed").is_none());
    }

    fn texts(source: &str) -> Vec<String> {
        to_lines(source, &Theme::default()).iter().map(plain).collect()
    }

    #[test]
    fn headings_drop_hashes() {
        let theme = Theme::default();
        let lines = to_lines("### 🎯 Objective", &theme);
        assert_eq!(plain(&lines[0]), "🎯 Objective");
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn hash_without_space_is_text() {
        assert_eq!(texts("#hashtag"), vec!["#hashtag"]);
    }

    #[test]
    fn bullets_nest_by_indentation() {
        assert_eq!(
            texts("- Type\n    - Port: 5439\n        - deep"),
            vec!["• Type", "  ◦ Port: 5439", "    ▪ deep"]
        );
    }

    #[test]
    fn ordered_items_keep_numbers() {
        assert_eq!(
            texts("1. Download\n2. Create two connections:"),
            vec!["1. Download", "2. Create two connections:"]
        );
    }

    #[test]
    fn code_fence_lines_are_verbatim() {
        let lines = texts("```bash\ndocker-compose up\n```\nafter");
        assert_eq!(lines, vec!["  bash", "  │ docker-compose up", "after"]);
    }

    #[test]
    fn markup_inside_code_is_untouched() {
        let lines = texts("```\n**not bold**\n```");
        assert_eq!(lines, vec!["  │ **not bold**"]);
    }

    #[test]
    fn rule_line() {
        let lines = texts("---");
        assert_eq!(lines[0].chars().count(), RULE_WIDTH);
    }

    #[test]
    fn inline_bold_and_code() {
        let theme = Theme::default();
        let spans = inline(
            "Create a **Workgroup** and `COPY` data",
            styling::normal_text_style(&theme),
            &theme,
        );
        let contents: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(
            contents,
            vec!["Create a ", "Workgroup", " and ", "COPY", " data"]
        );
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(spans[3].style.fg, Some(theme.code.to_color()));
    }

    #[test]
    fn bold_code_combines_styles() {
        let theme = Theme::default();
        let spans = inline("**`login_agg_date`**", Style::default(), &theme);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "login_agg_date");
        assert!(spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(spans[0].style.fg, Some(theme.code.to_color()));
    }

    #[test]
    fn links_show_url_once() {
        assert_eq!(
            texts("[http://localhost:8080](http://localhost:8080)"),
            vec!["http://localhost:8080"]
        );
        assert_eq!(
            texts("see [docs](https://dbeaver.io/download/)"),
            vec!["see docs <https://dbeaver.io/download/>"]
        );
    }

    #[test]
    fn italic_text() {
        let theme = Theme::default();
        let spans = inline("💡 *optional step*", Style::default(), &theme);
        assert_eq!(spans[1].content, "optional step");
        assert!(spans[1].style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn continuation_lines_are_indented() {
        assert_eq!(
            texts("- **Title:**\n  Body text"),
            vec!["• Title:", "  Body text"]
        );
    }
}
