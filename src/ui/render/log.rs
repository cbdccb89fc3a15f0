use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render the most recent log lines that fit the panel.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let block = Block::default()
        .title(state.locale().strings().chrome.log_title)
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let visible = usize::from(size.height.saturating_sub(2));
    let items: Vec<ListItem> = state
        .log_buffer()
        .tail(visible)
        .into_iter()
        .map(|entry| {
            let style = if entry.contains(" ERROR ") || entry.contains(" WARN ") {
                styling::normal_text_style(theme).fg(theme.warning.to_color())
            } else {
                styling::muted_text_style(theme)
            };
            ListItem::new(Line::from(Span::styled(entry, style)))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), size);
}
