use super::{field_lines, Frame};
use crate::state::{CompanyField, Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the company identity form. In "new" mode the fields start blank and
/// saving registers a company.
///
pub fn company_form(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let active = *state.current_focus() == Focus::CompanyForm;
    let form = state.company_form();
    let title = if state.is_new_mode() {
        "New company"
    } else {
        "Company details"
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::block_border_style(theme, active))
        .title(Span::styled(title, styling::active_block_title_style()));

    let mut lines: Vec<Line> = vec![];
    for (field, label, value) in [
        (CompanyField::Name, "Name", &form.name),
        (
            CompanyField::RegistrationNumber,
            "Reg. number",
            &form.registration_number,
        ),
    ] {
        lines.extend(field_lines(
            theme,
            label,
            value,
            active && form.focused == field,
            form.errors.get(field.validation_field()),
        ));
    }
    lines.push(Line::from(""));
    let hint = if state.is_new_mode() {
        "Enter: register"
    } else {
        "Enter: save changes"
    };
    lines.push(Line::from(Span::styled(hint, styling::muted_text_style(theme))));

    frame.render_widget(Paragraph::new(lines).block(block), size);
}
