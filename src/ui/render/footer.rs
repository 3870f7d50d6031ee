use super::Frame;
use crate::state::{Focus, State};
use crate::ui::{ColorSpec, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Footer mode label, key hints and label color for the current state.
///
fn mode(state: &State, theme: &Theme) -> (&'static str, &'static str, ColorSpec) {
    if state.confirmation().is_some() {
        (
            "CONFIRM:",
            " y/Enter: delete, n/Esc: cancel",
            theme.footer_confirm,
        )
    } else if state.fiscal_year_form().is_some() {
        (
            "MODAL:",
            " Tab/↑↓: field, Space: toggle main, Enter: save, Esc: cancel",
            theme.footer_modal,
        )
    } else {
        match state.current_focus() {
            Focus::Companies => (
                "COMPANIES:",
                " j/k: select, n: new, e: edit, d: delete, Tab: next pane, Ctrl-l: log, q: quit",
                theme.footer_companies,
            ),
            Focus::CompanyForm => (
                "FORM:",
                " Type to edit, ↑↓: field, Enter: save, Esc: back, Tab: next pane",
                theme.footer_form,
            ),
            Focus::FiscalYears => (
                "FISCAL YEARS:",
                " j/k: row, h/l: page, a: add, e: edit, d: delete, 1/2/3: sort, q: quit",
                theme.footer_table,
            ),
        }
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (label, hints, color) = mode(state, theme);
    let controls_content = Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(theme.highlight_fg.to_color())
                .bg(color.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(hints, Style::default().fg(theme.warning.to_color())),
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    let right_content = Line::from(vec![Span::styled(
        format!(" {}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(theme.text_muted.to_color()),
    )]);
    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}
