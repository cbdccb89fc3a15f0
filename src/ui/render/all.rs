use super::page::{document_lines, PageStyle};
use super::{footer, log, sidebar, Frame};
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
};

const SIDEBAR_PERCENT: u16 = 25;
const LOG_HEIGHT: u16 = 8;

/// Render the current page with its scroll position.
///
fn page(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.theme().clone();
    let focused = state.focus() == Focus::Page;
    let lines = document_lines(
        state.document(),
        state.tables(),
        &PageStyle {
            theme: &theme,
            strings: state.locale().strings(),
            images_dir: state.images_dir(),
            button_focused: focused,
        },
    );

    let title = state
        .locale()
        .strings()
        .page_label(state.current_page());
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(&theme))
        .title(title);
    if focused {
        block = block
            .border_style(styling::active_block_border_style(&theme))
            .title(Span::styled(title, styling::active_block_title_style()));
    }

    let inner = block.inner(size);
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    state.set_content_height(
        paragraph.line_count(inner.width),
        usize::from(inner.height),
    );
    let paragraph = paragraph.block(block).scroll((state.scroll(), 0));
    frame.render_widget(paragraph, size);
}

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let mut constraints = vec![Constraint::Min(3)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(SIDEBAR_PERCENT),
            Constraint::Percentage(100 - SIDEBAR_PERCENT),
        ])
        .split(rows[0]);

    sidebar(frame, columns[0], state);
    page(frame, columns[1], state);
    if state.is_log_visible() {
        log(frame, rows[1], state);
    }
    footer(frame, rows[rows.len() - 1], state);
}
