use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

const BLOCK_TITLE: &str = "Companies";

/// Render company list widget according to state.
///
pub fn company_list(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let active = *state.current_focus() == Focus::Companies;
    let title = if state.is_new_mode() {
        format!("{} (new)", BLOCK_TITLE)
    } else {
        BLOCK_TITLE.to_string()
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::block_border_style(theme, active));
    block = if active {
        block.title(Span::styled(title, styling::active_block_title_style()))
    } else {
        block.title(title)
    };

    let companies = state.registry().companies().all();
    if companies.is_empty() {
        let empty = List::new(vec![ListItem::new(Span::styled(
            "No companies. Press n to register one.",
            styling::muted_text_style(theme),
        ))])
        .block(block);
        frame.render_widget(empty, size);
        return;
    }

    let items: Vec<ListItem> = companies
        .iter()
        .map(|company| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    company.name.clone(),
                    styling::normal_text_style(theme),
                )),
                Line::from(Span::styled(
                    format!("  {}", company.registration_number),
                    styling::muted_text_style(theme),
                )),
            ])
        })
        .collect();

    let selected = state
        .registry()
        .active_company()
        .and_then(|active| companies.iter().position(|c| c.id == active.id));
    let mut list_state = ListState::default().with_selected(selected);

    let highlight = if active {
        styling::active_list_item_style(theme)
    } else {
        styling::current_list_item_style(theme)
    };
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, size, &mut list_state);
}
