use super::action::Action;
use super::form::{CompanyForm, FiscalYearForm};
use super::navigation::Focus;
use super::notification::{Confirmation, DeleteTarget, Notifier, Toast};
use super::table::{sort_fiscal_years, Pagination, SortConfig};
use crate::logger::LogBuffer;
use crate::model::{CompanyId, FiscalYear};
use crate::store::{Registry, StoreError};
use crate::ui::Theme;
use log::*;
use std::time::Duration;

/// Houses data representative of application state.
///
pub struct State {
    registry: Registry,
    company_form: CompanyForm,
    fiscal_year_form: Option<FiscalYearForm>,
    confirmation: Option<Confirmation>,
    notifier: Notifier,
    sort: Option<SortConfig>,
    pagination: Pagination,
    row_index: usize,
    current_focus: Focus,
    show_log: bool,
    log_buffer: LogBuffer,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            registry: Registry::default(),
            company_form: CompanyForm::blank(),
            fiscal_year_form: None,
            confirmation: None,
            notifier: Notifier::default(),
            sort: None,
            pagination: Pagination::default(),
            row_index: 0,
            current_focus: Focus::Companies,
            show_log: false,
            log_buffer: LogBuffer::default(),
            theme: Theme::default(),
        }
    }
}

impl State {
    /// Returns a new instance of State over the loaded records, with the
    /// company form pre-filled from the initially active company.
    ///
    pub fn new(
        registry: Registry,
        theme: Theme,
        page_size: usize,
        toast_duration: Duration,
        log_buffer: LogBuffer,
    ) -> Self {
        let mut state = State {
            registry,
            theme,
            log_buffer,
            notifier: Notifier::new(toast_duration),
            pagination: Pagination::new(page_size),
            ..State::default()
        };
        state.sync_company_form();
        state
    }

    /// Applies one user intent. This is the only path that mutates the stores.
    ///
    pub fn dispatch(&mut self, action: Action) -> &mut Self {
        if !matches!(action, Action::Tick(_)) {
            debug!("Dispatching {:?}", action);
        }
        match action {
            Action::SelectCompany(id) => self.select_company(id),
            Action::NextCompany => self.step_company(true),
            Action::PreviousCompany => self.step_company(false),
            Action::NewCompany => {
                self.select_company(None);
                self.current_focus = Focus::CompanyForm;
            }
            Action::RequestDeleteCompany => self.request_delete_company(),
            Action::CompanyInput(c) => {
                self.company_form.push_char(c);
            }
            Action::CompanyBackspace => {
                self.company_form.pop_char();
            }
            Action::CompanyNextField => {
                self.company_form.next_field();
            }
            Action::SaveCompany => self.save_company(),
            Action::OpenAddFiscalYear => self.open_add_fiscal_year(),
            Action::OpenEditFiscalYear => self.open_edit_fiscal_year(),
            Action::RequestDeleteFiscalYear => self.request_delete_fiscal_year(),
            Action::Sort(key) => {
                self.sort = Some(SortConfig::request(self.sort, key));
                self.clamp_table();
            }
            Action::NextPage => {
                let len = self.visible_fiscal_years().len();
                self.pagination.next(len);
                self.row_index = 0;
            }
            Action::PreviousPage => {
                self.pagination.previous();
                self.row_index = 0;
            }
            Action::NextRow => {
                if self.row_index + 1 < self.page_fiscal_years().len() {
                    self.row_index += 1;
                }
            }
            Action::PreviousRow => {
                self.row_index = self.row_index.saturating_sub(1);
            }
            Action::ModalInput(c) => {
                if let Some(form) = self.fiscal_year_form.as_mut() {
                    form.push_char(c);
                }
            }
            Action::ModalBackspace => {
                if let Some(form) = self.fiscal_year_form.as_mut() {
                    form.pop_char();
                }
            }
            Action::ModalNextField => {
                if let Some(form) = self.fiscal_year_form.as_mut() {
                    form.next_field();
                }
            }
            Action::ModalPreviousField => {
                if let Some(form) = self.fiscal_year_form.as_mut() {
                    form.previous_field();
                }
            }
            Action::ToggleMain => {
                if let Some(form) = self.fiscal_year_form.as_mut() {
                    form.toggle_main();
                }
            }
            Action::SaveFiscalYear => self.save_fiscal_year(),
            Action::CloseModal => self.fiscal_year_form = None,
            Action::Confirm => self.confirm(),
            Action::Cancel => self.confirmation = None,
            Action::FocusPane(focus) => self.current_focus = focus,
            Action::NextFocus => self.current_focus = self.current_focus.next(),
            Action::PreviousFocus => self.current_focus = self.current_focus.previous(),
            Action::ToggleLog => self.show_log = !self.show_log,
            Action::Tick(now) => self.notifier.expire(now),
        }
        self
    }

    /// Return the record stores.
    ///
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Return true when no company is active and the form creates a new one.
    ///
    pub fn is_new_mode(&self) -> bool {
        self.registry.active_company().is_none()
    }

    pub fn company_form(&self) -> &CompanyForm {
        &self.company_form
    }

    pub fn fiscal_year_form(&self) -> Option<&FiscalYearForm> {
        self.fiscal_year_form.as_ref()
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.notifier.current()
    }

    pub fn sort(&self) -> Option<SortConfig> {
        self.sort
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Return the highlighted row within the current page.
    ///
    pub fn row_index(&self) -> usize {
        self.row_index
    }

    /// Return the current focus.
    ///
    pub fn current_focus(&self) -> &Focus {
        &self.current_focus
    }

    pub fn show_log(&self) -> bool {
        self.show_log
    }

    pub fn log_buffer(&self) -> &LogBuffer {
        &self.log_buffer
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Returns the active company's fiscal years in display order.
    ///
    pub fn visible_fiscal_years(&self) -> Vec<FiscalYear> {
        let mut fiscal_years = self.registry.active_fiscal_years();
        sort_fiscal_years(&mut fiscal_years, self.sort);
        fiscal_years
    }

    /// Returns the fiscal years on the current page.
    ///
    pub fn page_fiscal_years(&self) -> Vec<FiscalYear> {
        let fiscal_years = self.visible_fiscal_years();
        self.pagination.slice(&fiscal_years).to_vec()
    }

    pub fn page_count(&self) -> usize {
        self.pagination
            .page_count(self.registry.active_fiscal_years().len())
    }

    pub fn highlighted_fiscal_year(&self) -> Option<FiscalYear> {
        self.page_fiscal_years().into_iter().nth(self.row_index)
    }

    fn select_company(&mut self, id: Option<CompanyId>) {
        match self.registry.select_company(id) {
            Ok(()) => {
                self.sync_company_form();
                self.reset_table();
            }
            Err(err) => self.report(err),
        }
    }

    /// Moves the selection along the company list, wrapping at both ends.
    ///
    fn step_company(&mut self, forward: bool) {
        let companies = self.registry.companies().all();
        if companies.is_empty() {
            return;
        }
        let last = companies.len() - 1;
        let position = self
            .registry
            .companies()
            .active_id()
            .and_then(|id| companies.iter().position(|company| company.id == id));
        let next = match (position, forward) {
            (None, true) => 0,
            (None, false) => last,
            (Some(i), true) if i == last => 0,
            (Some(i), true) => i + 1,
            (Some(0), false) => last,
            (Some(i), false) => i - 1,
        };
        let id = companies[next].id;
        self.select_company(Some(id));
    }

    fn save_company(&mut self) {
        let result = match self.registry.active_company().map(|company| company.id) {
            Some(id) => {
                let draft = self.company_form.to_draft(Some(id));
                self.registry
                    .update_company(id, &draft)
                    .map(|_| "Company details updated.")
            }
            None => {
                let draft = self.company_form.to_draft(None);
                self.registry.create_company(&draft).map(|id| {
                    info!("Registered company {}", id);
                    "Company registered."
                })
            }
        };
        match result {
            Ok(message) => {
                let focused = self.company_form.focused;
                self.sync_company_form();
                self.company_form.focused = focused;
                self.reset_table();
                self.notifier.success(message);
            }
            Err(StoreError::Validation(errors)) => {
                debug!("Company form rejected: {}", errors);
                self.company_form.errors = errors;
            }
            Err(err) => self.report(err),
        }
    }

    fn request_delete_company(&mut self) {
        match self.registry.active_company() {
            Some(company) => self.confirmation = Some(Confirmation::delete_company(company)),
            None => self.notifier.error("No company is selected."),
        }
    }

    fn open_add_fiscal_year(&mut self) {
        if self.is_new_mode() {
            self.notifier.error("Select or register a company first.");
            return;
        }
        self.fiscal_year_form = Some(FiscalYearForm::blank());
    }

    fn open_edit_fiscal_year(&mut self) {
        if let Some(fiscal_year) = self.highlighted_fiscal_year() {
            self.fiscal_year_form = Some(FiscalYearForm::from_fiscal_year(&fiscal_year));
        }
    }

    fn request_delete_fiscal_year(&mut self) {
        if let Some(fiscal_year) = self.highlighted_fiscal_year() {
            self.confirmation = Some(Confirmation::delete_fiscal_year(fiscal_year.id));
        }
    }

    fn save_fiscal_year(&mut self) {
        let (editing_id, draft) = match &self.fiscal_year_form {
            Some(form) => (form.editing_id, form.to_draft()),
            None => return,
        };
        let result = match editing_id {
            Some(id) => self
                .registry
                .update_fiscal_year(id, &draft)
                .map(|_| "Fiscal year updated."),
            None => self
                .registry
                .create_fiscal_year(&draft)
                .map(|_| "Fiscal year added."),
        };
        match result {
            Ok(message) => {
                self.fiscal_year_form = None;
                self.clamp_table();
                self.notifier.success(message);
            }
            Err(StoreError::Validation(errors)) => {
                debug!("Fiscal year form rejected: {}", errors);
                if let Some(form) = self.fiscal_year_form.as_mut() {
                    form.errors = errors;
                }
            }
            Err(err) => {
                self.fiscal_year_form = None;
                self.report(err);
            }
        }
    }

    /// Runs the pending delete, if any.
    ///
    fn confirm(&mut self) {
        let confirmation = match self.confirmation.take() {
            Some(confirmation) => confirmation,
            None => return,
        };
        match confirmation.target {
            DeleteTarget::Company(id) => match self.registry.delete_company(id) {
                Ok(_) => {
                    self.sync_company_form();
                    self.reset_table();
                    self.current_focus = Focus::Companies;
                    self.notifier.success("Company deleted.");
                }
                Err(err) => self.report(err),
            },
            DeleteTarget::FiscalYear(id) => match self.registry.delete_fiscal_year(id) {
                Ok(_) => {
                    self.clamp_table();
                    self.notifier.success("Fiscal year deleted.");
                }
                Err(err) => self.report(err),
            },
        }
    }

    /// Surfaces a rejected store operation that has no form to attach to.
    ///
    fn report(&mut self, err: StoreError) {
        warn!("{}", err);
        self.notifier.error(err.to_string());
    }

    fn sync_company_form(&mut self) {
        self.company_form = match self.registry.active_company() {
            Some(company) => CompanyForm::from_company(company),
            None => CompanyForm::blank(),
        };
    }

    fn reset_table(&mut self) {
        self.pagination = Pagination::new(self.pagination.page_size());
        self.row_index = 0;
    }

    fn clamp_table(&mut self) {
        let len = self.registry.active_fiscal_years().len();
        self.pagination.clamp(len);
        let rows = self.page_fiscal_years().len();
        self.row_index = self.row_index.min(rows.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dataset, DatasetLoader, MockDataset};
    use crate::state::{SortKey, ToastKind};
    use crate::validation::Field;
    use std::time::Instant;

    fn mock_state() -> State {
        let registry = Registry::new(MockDataset.load().unwrap());
        State::new(
            registry,
            Theme::default(),
            5,
            Duration::from_secs(3),
            LogBuffer::default(),
        )
    }

    fn empty_state() -> State {
        State::new(
            Registry::new(Dataset::default()),
            Theme::default(),
            5,
            Duration::from_secs(3),
            LogBuffer::default(),
        )
    }

    fn type_company(state: &mut State, text: &str) {
        for c in text.chars() {
            state.dispatch(Action::CompanyInput(c));
        }
    }

    fn type_modal(state: &mut State, text: &str) {
        for c in text.chars() {
            state.dispatch(Action::ModalInput(c));
        }
    }

    /// Fills year, start and end, leaving focus on the remarks field.
    ///
    fn fill_modal(state: &mut State, year: &str, start_date: &str, end_date: &str) {
        type_modal(state, year);
        state.dispatch(Action::ModalNextField);
        type_modal(state, start_date);
        state.dispatch(Action::ModalNextField);
        type_modal(state, end_date);
        state.dispatch(Action::ModalNextField);
    }

    fn register(state: &mut State, name: &str, registration_number: &str) {
        state.dispatch(Action::NewCompany);
        type_company(state, name);
        state.dispatch(Action::CompanyNextField);
        type_company(state, registration_number);
        state.dispatch(Action::SaveCompany);
    }

    #[test]
    fn new_prefills_active_company() {
        let state = mock_state();
        assert_eq!(state.company_form().name, "Frontend Solutions");
        assert_eq!(state.company_form().registration_number, "111-81-12345");
        assert_eq!(state.visible_fiscal_years().len(), 4);
        assert!(!state.is_new_mode());
    }

    #[test]
    fn empty_state_starts_in_new_mode() {
        let mut state = empty_state();
        assert!(state.is_new_mode());
        state.dispatch(Action::OpenAddFiscalYear);
        assert!(state.fiscal_year_form().is_none());
        assert_eq!(state.toast().unwrap().kind, ToastKind::Error);
    }

    #[test]
    fn register_company_through_form() {
        let mut state = empty_state();
        register(&mut state, "Acme", "123-45-67890");
        assert!(!state.is_new_mode());
        assert_eq!(state.registry().active_company().unwrap().name, "Acme");
        let toast = state.toast().unwrap();
        assert_eq!(toast.message, "Company registered.");
        assert_eq!(toast.kind, ToastKind::Success);
        assert!(state.visible_fiscal_years().is_empty());
    }

    #[test]
    fn invalid_company_keeps_form_and_records() {
        let mut state = mock_state();
        register(&mut state, "  ", "111-81-12345");
        assert!(state.is_new_mode());
        assert_eq!(state.registry().companies().all().len(), 3);
        let errors = &state.company_form().errors;
        assert!(errors.contains(Field::Name));
        assert!(errors.contains(Field::RegistrationNumber));
        assert!(state.toast().is_none());
    }

    #[test]
    fn update_company_keeps_own_registration_number() {
        let mut state = mock_state();
        state.dispatch(Action::FocusPane(Focus::CompanyForm));
        type_company(&mut state, " Inc");
        state.dispatch(Action::SaveCompany);
        let active = state.registry().active_company().unwrap();
        assert_eq!(active.name, "Frontend Solutions Inc");
        assert_eq!(state.toast().unwrap().message, "Company details updated.");
        assert!(state.company_form().errors.is_empty());
    }

    #[test]
    fn company_navigation_wraps() {
        let mut state = mock_state();
        state.dispatch(Action::PreviousCompany);
        assert_eq!(state.registry().active_company().unwrap().id, 3);
        assert_eq!(state.company_form().name, "UI/UX Design Lab");
        state.dispatch(Action::NextCompany);
        assert_eq!(state.registry().active_company().unwrap().id, 1);
        state.dispatch(Action::SelectCompany(Some(2)));
        assert_eq!(state.visible_fiscal_years().len(), 1);
    }

    #[test]
    fn selecting_unknown_company_reports_error() {
        let mut state = mock_state();
        state.dispatch(Action::SelectCompany(Some(42)));
        assert_eq!(state.registry().active_company().unwrap().id, 1);
        assert_eq!(state.toast().unwrap().kind, ToastKind::Error);
    }

    #[test]
    fn add_fiscal_year_through_modal() {
        let mut state = empty_state();
        register(&mut state, "Acme", "123-45-67890");
        state.dispatch(Action::OpenAddFiscalYear);
        assert_eq!(state.fiscal_year_form().unwrap().title(), "Add fiscal year");
        fill_modal(&mut state, "2023", "20230101", "20231231");
        state.dispatch(Action::ModalNextField);
        state.dispatch(Action::ModalInput(' '));
        state.dispatch(Action::SaveFiscalYear);
        assert!(state.fiscal_year_form().is_none());
        assert_eq!(state.toast().unwrap().message, "Fiscal year added.");
        let years = state.visible_fiscal_years();
        assert_eq!(years.len(), 1);
        assert!(years[0].is_main);
    }

    #[test]
    fn overlapping_fiscal_year_keeps_modal_open() {
        let mut state = mock_state();
        state.dispatch(Action::OpenAddFiscalYear);
        fill_modal(&mut state, "2023", "20230601", "20240531");
        state.dispatch(Action::SaveFiscalYear);
        let form = state.fiscal_year_form().unwrap();
        assert!(form.errors.contains(Field::StartDate));
        assert_eq!(state.visible_fiscal_years().len(), 4);
    }

    #[test]
    fn main_flag_moves_to_saved_year() {
        let mut state = mock_state();
        state.dispatch(Action::OpenAddFiscalYear);
        fill_modal(&mut state, "2024", "20240101", "20241231");
        state.dispatch(Action::ToggleMain);
        state.dispatch(Action::SaveFiscalYear);
        let mains: Vec<_> = state
            .visible_fiscal_years()
            .into_iter()
            .filter(|fy| fy.is_main)
            .collect();
        assert_eq!(mains.len(), 1);
        assert_eq!(mains[0].year, "2024");
    }

    #[test]
    fn edit_highlighted_fiscal_year() {
        let mut state = mock_state();
        state.dispatch(Action::NextRow);
        let target = state.highlighted_fiscal_year().unwrap();
        state.dispatch(Action::OpenEditFiscalYear);
        let form = state.fiscal_year_form().unwrap();
        assert_eq!(form.title(), "Edit fiscal year");
        assert_eq!(form.editing_id, Some(target.id));
        state.dispatch(Action::ModalPreviousField);
        state.dispatch(Action::ModalPreviousField);
        type_modal(&mut state, " adjusted");
        state.dispatch(Action::SaveFiscalYear);
        assert_eq!(state.toast().unwrap().message, "Fiscal year updated.");
        let updated = state.registry().active_fiscal_year(target.id).unwrap();
        assert_eq!(updated.remarks, format!("{} adjusted", target.remarks));
        assert_eq!(updated.start_date, target.start_date);
    }

    #[test]
    fn close_modal_discards_edits() {
        let mut state = mock_state();
        state.dispatch(Action::OpenEditFiscalYear);
        type_modal(&mut state, "9");
        state.dispatch(Action::CloseModal);
        assert!(state.fiscal_year_form().is_none());
        assert_eq!(state.visible_fiscal_years()[0].year, "2023");
    }

    #[test]
    fn delete_company_requires_confirmation() {
        let mut state = mock_state();
        state.dispatch(Action::RequestDeleteCompany);
        let confirmation = state.confirmation().unwrap();
        assert!(confirmation.message.contains("Frontend Solutions"));
        state.dispatch(Action::Cancel);
        assert!(state.confirmation().is_none());
        assert_eq!(state.registry().companies().all().len(), 3);

        state.dispatch(Action::RequestDeleteCompany);
        state.dispatch(Action::Confirm);
        assert_eq!(state.registry().companies().all().len(), 2);
        assert!(state
            .registry()
            .all_fiscal_years()
            .iter()
            .all(|fy| fy.company_id != 1));
        assert_eq!(state.registry().active_company().unwrap().id, 2);
        assert_eq!(state.company_form().name, "Backend Systems");
        assert_eq!(state.toast().unwrap().message, "Company deleted.");
    }

    #[test]
    fn deleting_last_company_enters_new_mode() {
        let mut state = empty_state();
        register(&mut state, "Acme", "123-45-67890");
        state.dispatch(Action::RequestDeleteCompany);
        state.dispatch(Action::Confirm);
        assert!(state.is_new_mode());
        assert_eq!(state.company_form().name, "");
    }

    #[test]
    fn delete_fiscal_year_clamps_page() {
        let mut state = empty_state();
        register(&mut state, "Acme", "123-45-67890");
        for year in 2015..2021 {
            state.dispatch(Action::OpenAddFiscalYear);
            let start = format!("{}0101", year);
            let end = format!("{}1231", year);
            fill_modal(&mut state, &year.to_string(), &start, &end);
            state.dispatch(Action::SaveFiscalYear);
        }
        assert_eq!(state.page_count(), 2);
        state.dispatch(Action::NextPage);
        assert_eq!(state.pagination().page(), 2);
        assert_eq!(state.page_fiscal_years().len(), 1);

        state.dispatch(Action::RequestDeleteFiscalYear);
        state.dispatch(Action::Confirm);
        assert_eq!(state.toast().unwrap().message, "Fiscal year deleted.");
        assert_eq!(state.pagination().page(), 1);
        assert_eq!(state.page_fiscal_years().len(), 5);
    }

    #[test]
    fn sort_requests_toggle_direction() {
        let mut state = mock_state();
        state.dispatch(Action::Sort(SortKey::StartDate));
        let ascending: Vec<_> = state
            .visible_fiscal_years()
            .into_iter()
            .map(|fy| fy.start_date)
            .collect();
        state.dispatch(Action::Sort(SortKey::StartDate));
        let mut descending: Vec<_> = state
            .visible_fiscal_years()
            .into_iter()
            .map(|fy| fy.start_date)
            .collect();
        descending.reverse();
        assert_eq!(ascending, descending);
        assert_eq!(ascending[0], "20200101");
    }

    #[test]
    fn row_highlight_stays_on_page() {
        let mut state = mock_state();
        for _ in 0..10 {
            state.dispatch(Action::NextRow);
        }
        assert_eq!(state.row_index(), 3);
        state.dispatch(Action::PreviousRow);
        assert_eq!(state.row_index(), 2);
    }

    #[test]
    fn toast_expires_on_tick() {
        let mut state = mock_state();
        state.dispatch(Action::RequestDeleteCompany);
        state.dispatch(Action::Confirm);
        assert!(state.toast().is_some());
        state.dispatch(Action::Tick(Instant::now()));
        assert!(state.toast().is_some());
        state.dispatch(Action::Tick(Instant::now() + Duration::from_secs(4)));
        assert!(state.toast().is_none());
    }

    #[test]
    fn focus_and_log_toggles() {
        let mut state = mock_state();
        state.dispatch(Action::NextFocus);
        assert_eq!(*state.current_focus(), Focus::CompanyForm);
        state.dispatch(Action::PreviousFocus);
        state.dispatch(Action::PreviousFocus);
        assert_eq!(*state.current_focus(), Focus::FiscalYears);
        state.dispatch(Action::ToggleLog);
        assert!(state.show_log());
    }
}
