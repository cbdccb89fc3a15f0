use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for current list items.
///
pub fn current_list_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.text.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for active list items.
///
pub fn active_list_item_style(theme: &Theme) -> Style {
    current_list_item_style(theme).fg(theme.primary.to_color())
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for secondary text such as captions.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

pub fn heading_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.heading.to_color())
        .add_modifier(Modifier::BOLD)
}

pub fn code_style(theme: &Theme) -> Style {
    Style::default().fg(theme.code.to_color())
}

pub fn link_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.link.to_color())
        .add_modifier(Modifier::UNDERLINED)
}

/// Return the style for page buttons; focused buttons are reversed.
///
pub fn button_style(theme: &Theme, focused: bool) -> Style {
    let style = Style::default()
        .fg(theme.button.to_color())
        .add_modifier(Modifier::BOLD);
    if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

pub fn table_header_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.table_header.to_color())
        .add_modifier(Modifier::BOLD)
}

pub fn table_rule_style(theme: &Theme) -> Style {
    Style::default().fg(theme.table_rule.to_color())
}
