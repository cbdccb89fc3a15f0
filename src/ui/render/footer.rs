use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the key hints shown for the focused panel.
///
pub fn hints(state: &State) -> String {
    let chrome = &state.locale().strings().chrome;
    let focused = match state.focus() {
        Focus::Sidebar => chrome.hint_sidebar,
        Focus::Page => chrome.hint_page,
    };
    format!(" {} | {}", focused, chrome.hint_global)
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", state.locale().code().to_uppercase()),
            styling::active_list_item_style(theme),
        ),
        Span::styled(hints(state), styling::muted_text_style(theme)),
    ]);
    frame.render_widget(Paragraph::new(line), size);
}
