//! Form editing state types.
//!
//! This module contains the buffered company form and the fiscal year modal
//! form. Buffers hold raw text; nothing is committed until a store accepts it.

use crate::model::{Company, CompanyDraft, CompanyId, FiscalYear, FiscalYearDraft, FiscalYearId};
use crate::validation::{Field, FieldErrors};

/// Specifying company form field state.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CompanyField {
    Name,
    RegistrationNumber,
}

impl CompanyField {
    pub fn next(self) -> Self {
        match self {
            CompanyField::Name => CompanyField::RegistrationNumber,
            CompanyField::RegistrationNumber => CompanyField::Name,
        }
    }

    pub fn validation_field(self) -> Field {
        match self {
            CompanyField::Name => Field::Name,
            CompanyField::RegistrationNumber => Field::RegistrationNumber,
        }
    }
}

/// Company identity form, pre-filled from the active company or blank in
/// "new" mode.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CompanyForm {
    pub name: String,
    pub registration_number: String,
    pub errors: FieldErrors,
    pub focused: CompanyField,
}

impl Default for CompanyForm {
    fn default() -> Self {
        CompanyForm::blank()
    }
}

impl CompanyForm {
    pub fn blank() -> Self {
        CompanyForm {
            name: String::new(),
            registration_number: String::new(),
            errors: FieldErrors::new(),
            focused: CompanyField::Name,
        }
    }

    pub fn from_company(company: &Company) -> Self {
        CompanyForm {
            name: company.name.clone(),
            registration_number: company.registration_number.clone(),
            ..CompanyForm::blank()
        }
    }

    pub fn to_draft(&self, id: Option<CompanyId>) -> CompanyDraft {
        CompanyDraft {
            id,
            name: self.name.clone(),
            registration_number: self.registration_number.clone(),
        }
    }

    fn focused_buffer(&mut self) -> &mut String {
        match self.focused {
            CompanyField::Name => &mut self.name,
            CompanyField::RegistrationNumber => &mut self.registration_number,
        }
    }

    pub fn push_char(&mut self, c: char) -> &mut Self {
        self.focused_buffer().push(c);
        self
    }

    pub fn pop_char(&mut self) -> &mut Self {
        self.focused_buffer().pop();
        self
    }

    pub fn next_field(&mut self) -> &mut Self {
        self.focused = self.focused.next();
        self
    }
}

/// Specifying fiscal year modal field state.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FiscalYearField {
    Year,
    StartDate,
    EndDate,
    Remarks,
    IsMain,
}

impl FiscalYearField {
    const ORDER: [FiscalYearField; 5] = [
        FiscalYearField::Year,
        FiscalYearField::StartDate,
        FiscalYearField::EndDate,
        FiscalYearField::Remarks,
        FiscalYearField::IsMain,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn validation_field(self) -> Option<Field> {
        match self {
            FiscalYearField::Year => Some(Field::Year),
            FiscalYearField::StartDate => Some(Field::StartDate),
            FiscalYearField::EndDate => Some(Field::EndDate),
            FiscalYearField::Remarks | FiscalYearField::IsMain => None,
        }
    }
}

/// Fiscal year add/edit modal state.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FiscalYearForm {
    pub editing_id: Option<FiscalYearId>,
    pub year: String,
    pub start_date: String,
    pub end_date: String,
    pub remarks: String,
    pub is_main: bool,
    pub errors: FieldErrors,
    pub focused: FiscalYearField,
}

impl FiscalYearForm {
    pub fn blank() -> Self {
        FiscalYearForm {
            editing_id: None,
            year: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            remarks: String::new(),
            is_main: false,
            errors: FieldErrors::new(),
            focused: FiscalYearField::Year,
        }
    }

    pub fn from_fiscal_year(fiscal_year: &FiscalYear) -> Self {
        FiscalYearForm {
            editing_id: Some(fiscal_year.id),
            year: fiscal_year.year.clone(),
            start_date: fiscal_year.start_date.clone(),
            end_date: fiscal_year.end_date.clone(),
            remarks: fiscal_year.remarks.clone(),
            is_main: fiscal_year.is_main,
            ..FiscalYearForm::blank()
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit fiscal year"
        } else {
            "Add fiscal year"
        }
    }

    pub fn to_draft(&self) -> FiscalYearDraft {
        FiscalYearDraft {
            id: self.editing_id,
            year: self.year.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            is_main: self.is_main,
            remarks: self.remarks.clone(),
        }
    }

    fn focused_buffer(&mut self) -> Option<&mut String> {
        match self.focused {
            FiscalYearField::Year => Some(&mut self.year),
            FiscalYearField::StartDate => Some(&mut self.start_date),
            FiscalYearField::EndDate => Some(&mut self.end_date),
            FiscalYearField::Remarks => Some(&mut self.remarks),
            FiscalYearField::IsMain => None,
        }
    }

    /// Types into the focused text field; a space on the checkbox toggles it.
    ///
    pub fn push_char(&mut self, c: char) -> &mut Self {
        match self.focused_buffer() {
            Some(buffer) => buffer.push(c),
            None if c == ' ' => self.is_main = !self.is_main,
            None => (),
        }
        self
    }

    pub fn pop_char(&mut self) -> &mut Self {
        if let Some(buffer) = self.focused_buffer() {
            buffer.pop();
        }
        self
    }

    pub fn toggle_main(&mut self) -> &mut Self {
        self.is_main = !self.is_main;
        self
    }

    pub fn next_field(&mut self) -> &mut Self {
        self.focused = self.focused.next();
        self
    }

    pub fn previous_field(&mut self) -> &mut Self {
        self.focused = self.focused.previous();
        self
    }
}
