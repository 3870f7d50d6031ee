//! Navigation-related state types.

/// Specifying the different panes that can hold focus.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Companies,
    CompanyForm,
    FiscalYears,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Companies => Focus::CompanyForm,
            Focus::CompanyForm => Focus::FiscalYears,
            Focus::FiscalYears => Focus::Companies,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Companies => Focus::FiscalYears,
            Focus::CompanyForm => Focus::Companies,
            Focus::FiscalYears => Focus::CompanyForm,
        }
    }
}
