use super::{centered_rect, Frame};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render the delete confirmation dialog.
///
pub fn confirmation(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let confirmation = match state.confirmation() {
        Some(confirmation) => confirmation,
        None => return,
    };
    let area = centered_rect(50, 30, size);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::error_text_style(theme))
        .title(Span::styled(
            confirmation.title.clone(),
            styling::active_block_title_style(),
        ));
    let lines = vec![
        Line::from(Span::styled(
            confirmation.message.clone(),
            styling::normal_text_style(theme),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "y/Enter: delete  n/Esc: cancel",
            styling::muted_text_style(theme),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// Render the current toast, if any, in the top right corner.
///
pub fn toast(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let toast = match state.toast() {
        Some(toast) => toast,
        None => return,
    };
    let area = toast_area(size, toast.message.chars().count());
    let paragraph = Paragraph::new(Span::raw(toast.message.clone()))
        .style(styling::toast_style(theme, toast.kind))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn toast_area(size: Rect, message_width: usize) -> Rect {
    let width = (message_width as u16).saturating_add(4).min(size.width);
    let height = 3.min(size.height);
    Rect::new(size.x + size.width - width, size.y, width, height)
}
