mod all;
mod company_form;
mod company_list;
mod dialogs;
mod fiscal_year_modal;
mod fiscal_years;
mod footer;
mod log;

use self::log::log;
use super::*;
use company_form::company_form;
use company_list::company_list;
use dialogs::{confirmation, toast};
use fiscal_year_modal::fiscal_year_modal;
use fiscal_years::fiscal_years;
use footer::footer;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
};

pub use all::all as render;

/// Helper function to create a centered rectangle (ratatui modal pattern)
///
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Build the lines for one labelled text input: the value with a cursor when
/// focused, then the field's error message if it has one.
///
fn field_lines(
    theme: &Theme,
    label: &str,
    value: &str,
    focused: bool,
    error: Option<&str>,
) -> Vec<Line<'static>> {
    let label_style = if focused {
        styling::active_list_item_style(theme)
    } else {
        styling::muted_text_style(theme)
    };
    let mut spans = vec![
        Span::styled(format!("{:<14}", label), label_style),
        Span::styled(value.to_string(), styling::normal_text_style(theme)),
    ];
    if focused {
        spans.push(Span::styled("▏", styling::active_list_item_style(theme)));
    }
    let mut lines = vec![Line::from(spans)];
    if let Some(message) = error {
        lines.push(Line::from(Span::styled(
            format!("{:<14}{}", "", message),
            styling::error_text_style(theme),
        )));
    }
    lines
}
