use super::Frame;
use crate::state::{Focus, Page, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

/// Render the page selector according to state.
///
pub fn sidebar(frame: &mut Frame, size: Rect, state: &mut State) {
    let strings = state.locale().strings();
    let theme = state.theme().clone();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(&theme));
    let list_item_style;
    if state.focus() == Focus::Sidebar {
        list_item_style = styling::active_list_item_style(&theme);
        block = block
            .border_style(styling::active_block_border_style(&theme))
            .title(Span::styled(
                strings.sidebar_title,
                styling::active_block_title_style(),
            ));
    } else {
        list_item_style = styling::current_list_item_style(&theme);
        block = block.title(strings.sidebar_title);
    }

    let inner = block.inner(size);
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    let prompt = Paragraph::new(Line::from(Span::styled(
        strings.sidebar_prompt,
        styling::muted_text_style(&theme),
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(prompt, rows[0]);

    let items: Vec<ListItem> = Page::ALL
        .iter()
        .map(|page| ListItem::new(format!("{}. {}", page.index() + 1, strings.page_label(*page))))
        .collect();
    let list = List::new(items)
        .style(styling::normal_text_style(&theme))
        .highlight_style(list_item_style)
        .highlight_symbol("› ");
    frame.render_stateful_widget(list, rows[1], state.sidebar_state());
}
