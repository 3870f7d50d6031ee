use super::{centered_rect, field_lines, Frame};
use crate::state::{FiscalYearField, State};
use crate::ui::widgets::styling;
use crate::validation::Field;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the add/edit fiscal year modal over the table.
///
pub fn fiscal_year_modal(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let form = match state.fiscal_year_form() {
        Some(form) => form,
        None => return,
    };
    let area = centered_rect(60, 60, size);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .title(Span::styled(form.title(), styling::active_block_title_style()));

    let text_fields = [
        (FiscalYearField::Year, "Year", &form.year),
        (FiscalYearField::StartDate, "Start date", &form.start_date),
        (FiscalYearField::EndDate, "End date", &form.end_date),
        (FiscalYearField::Remarks, "Remarks", &form.remarks),
    ];
    let mut lines: Vec<Line> = vec![];
    for (field, label, value) in text_fields {
        let error = field
            .validation_field()
            .and_then(|field: Field| form.errors.get(field));
        lines.extend(field_lines(
            theme,
            label,
            value,
            form.focused == field,
            error,
        ));
    }

    let checkbox = if form.is_main { "[x]" } else { "[ ]" };
    let checkbox_style = if form.focused == FiscalYearField::IsMain {
        styling::active_list_item_style(theme)
    } else {
        styling::normal_text_style(theme)
    };
    lines.push(Line::from(Span::styled(
        format!("{} Main fiscal year", checkbox),
        checkbox_style,
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Dates as YYYYMMDD. Enter: save, Esc: cancel",
        styling::muted_text_style(theme),
    )));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
