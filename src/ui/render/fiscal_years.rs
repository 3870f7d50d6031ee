use super::Frame;
use crate::state::{sort_indicator, Focus, SortKey, State};
use crate::ui::widgets::styling;
use crate::utils::text_processing::{format_yyyymmdd, truncate};
use ratatui::{
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

const REMARKS_WIDTH: usize = 32;

/// Render the active company's fiscal years as a sorted, paginated table.
///
pub fn fiscal_years(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let active = *state.current_focus() == Focus::FiscalYears;
    let page_count = state.page_count().max(1);
    let title = format!(
        "Fiscal years (page {}/{})",
        state.pagination().page(),
        page_count
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::block_border_style(theme, active))
        .title(Span::styled(title, styling::active_block_title_style()));

    let rows = state.page_fiscal_years();
    if rows.is_empty() {
        let message = if state.is_new_mode() {
            "Register the company to add fiscal years."
        } else {
            "No fiscal years yet. Press a to add one."
        };
        let empty =
            Paragraph::new(Span::styled(message, styling::muted_text_style(theme))).block(block);
        frame.render_widget(empty, size);
        return;
    }

    let sort = state.sort();
    let header = Row::new(vec![
        Cell::from(format!("Year {}", sort_indicator(sort, SortKey::Year))),
        Cell::from(format!("Start {}", sort_indicator(sort, SortKey::StartDate))),
        Cell::from(format!("End {}", sort_indicator(sort, SortKey::EndDate))),
        Cell::from("Main"),
        Cell::from("Remarks"),
    ])
    .style(styling::active_block_title_style());

    let body: Vec<Row> = rows
        .iter()
        .map(|fiscal_year| {
            Row::new(vec![
                Cell::from(fiscal_year.year.clone()),
                Cell::from(format_yyyymmdd(&fiscal_year.start_date)),
                Cell::from(format_yyyymmdd(&fiscal_year.end_date)),
                Cell::from(if fiscal_year.is_main { "✓" } else { "" }),
                Cell::from(truncate(&fiscal_year.remarks, REMARKS_WIDTH)),
            ])
            .style(styling::normal_text_style(theme))
        })
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Length(13),
        Constraint::Length(13),
        Constraint::Length(5),
        Constraint::Min(10),
    ];
    let table = Table::new(body, widths)
        .header(header)
        .block(block)
        .highlight_style(styling::highlight_style(theme));

    let selected = if active { Some(state.row_index()) } else { None };
    let mut table_state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, size, &mut table_state);
}
