//! User intents applied to `State` through `State::dispatch`.

use super::navigation::Focus;
use super::table::SortKey;
use crate::model::CompanyId;
use std::time::Instant;

/// Every transition the interface can request.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    // Company list
    SelectCompany(Option<CompanyId>),
    NextCompany,
    PreviousCompany,
    NewCompany,
    RequestDeleteCompany,

    // Company form
    CompanyInput(char),
    CompanyBackspace,
    CompanyNextField,
    SaveCompany,

    // Fiscal year table
    OpenAddFiscalYear,
    OpenEditFiscalYear,
    RequestDeleteFiscalYear,
    Sort(SortKey),
    NextPage,
    PreviousPage,
    NextRow,
    PreviousRow,

    // Fiscal year modal
    ModalInput(char),
    ModalBackspace,
    ModalNextField,
    ModalPreviousField,
    ToggleMain,
    SaveFiscalYear,
    CloseModal,

    // Confirmation dialog
    Confirm,
    Cancel,

    // Layout
    FocusPane(Focus),
    NextFocus,
    PreviousFocus,
    ToggleLog,
    Tick(Instant),
}
