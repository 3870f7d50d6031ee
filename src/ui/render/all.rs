use super::*;
use crate::state::State;

/// Number of rows the log panel takes when shown.
///
const LOG_HEIGHT: u16 = 8;

/// Render the whole interface according to state: the company list beside the
/// company form and fiscal year table, then any open modal, dialog or toast
/// on top.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let mut constraints = vec![Constraint::Min(10)];
    if state.show_log() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    let details = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(6)])
        .split(columns[1]);

    company_list(frame, columns[0], state);
    company_form(frame, details[0], state);
    fiscal_years(frame, details[1], state);

    if state.show_log() {
        log(frame, rows[1], state);
    }
    footer(frame, rows[rows.len() - 1], state);

    let area = frame.size();
    if state.fiscal_year_form().is_some() {
        fiscal_year_modal(frame, area, state);
    }
    if state.confirmation().is_some() {
        confirmation(frame, area, state);
    }
    toast(frame, area, state);
}
