//! Store module.
//!
//! This module contains the in-memory stores for companies and fiscal years and
//! the `Registry` that couples them, including:
//! - Active company selection
//! - Fiscal year operations scoped to the active company
//! - Cascade delete of a company and its fiscal years

mod company;
mod error;
mod fiscal_year;

pub use company::CompanyStore;
pub use error::StoreError;
pub use fiscal_year::FiscalYearStore;

use crate::model::{
    Company, CompanyDraft, CompanyId, Dataset, FiscalYear, FiscalYearDraft, FiscalYearId,
};
use log::*;

/// Both stores behind one facade so that cross-store operations keep the
/// "no fiscal year without its company" invariant.
///
#[derive(Debug, Default)]
pub struct Registry {
    companies: CompanyStore,
    fiscal_years: FiscalYearStore,
}

impl Registry {
    pub fn new(dataset: Dataset) -> Self {
        Registry {
            companies: CompanyStore::new(dataset.companies),
            fiscal_years: FiscalYearStore::new(dataset.fiscal_years),
        }
    }

    pub fn companies(&self) -> &CompanyStore {
        &self.companies
    }

    pub fn all_fiscal_years(&self) -> &[FiscalYear] {
        self.fiscal_years.all()
    }

    pub fn active_company(&self) -> Option<&Company> {
        self.companies.active()
    }

    pub fn select_company(&mut self, id: Option<CompanyId>) -> Result<(), StoreError> {
        self.companies.select(id)
    }

    pub fn create_company(&mut self, draft: &CompanyDraft) -> Result<CompanyId, StoreError> {
        self.companies.create(draft)
    }

    pub fn update_company(
        &mut self,
        id: CompanyId,
        draft: &CompanyDraft,
    ) -> Result<(), StoreError> {
        self.companies.update(id, draft)
    }

    /// Deletes the company after its fiscal years, then re-selects the first
    /// remaining company. Returns the removed company.
    ///
    pub fn delete_company(&mut self, id: CompanyId) -> Result<Company, StoreError> {
        if !self.companies.contains(id) {
            return Err(StoreError::CompanyNotFound { id });
        }
        let removed_years = self.fiscal_years.delete_for_company(id);
        let company = self.companies.remove(id)?;
        let fallback = self.companies.select_fallback();
        info!(
            "Deleted company {} with {} fiscal years, now selecting {:?}",
            id, removed_years, fallback
        );
        Ok(company)
    }

    /// Returns the fiscal years of the active company, empty in "new" mode.
    ///
    pub fn active_fiscal_years(&self) -> Vec<FiscalYear> {
        match self.companies.active_id() {
            Some(company_id) => self.fiscal_years.list(company_id),
            None => vec![],
        }
    }

    pub fn active_fiscal_year(&self, id: FiscalYearId) -> Option<&FiscalYear> {
        let company_id = self.companies.active_id()?;
        self.fiscal_years.get(company_id, id)
    }

    pub fn create_fiscal_year(
        &mut self,
        draft: &FiscalYearDraft,
    ) -> Result<FiscalYearId, StoreError> {
        let company_id = self.active_company_id()?;
        self.fiscal_years.create(company_id, draft)
    }

    pub fn update_fiscal_year(
        &mut self,
        id: FiscalYearId,
        draft: &FiscalYearDraft,
    ) -> Result<(), StoreError> {
        let company_id = self.active_company_id()?;
        self.fiscal_years.update(company_id, id, draft)
    }

    pub fn delete_fiscal_year(&mut self, id: FiscalYearId) -> Result<FiscalYear, StoreError> {
        let company_id = self.active_company_id()?;
        self.fiscal_years.delete(company_id, id)
    }

    fn active_company_id(&self) -> Result<CompanyId, StoreError> {
        self.companies.active_id().ok_or(StoreError::NoActiveCompany)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DatasetLoader, MockDataset};
    use crate::validation::Field;
    use std::collections::HashMap;

    fn company_draft(name: &str, registration_number: &str) -> CompanyDraft {
        CompanyDraft {
            id: None,
            name: name.to_string(),
            registration_number: registration_number.to_string(),
        }
    }

    fn year_draft(year: &str, start_date: &str, end_date: &str, is_main: bool) -> FiscalYearDraft {
        FiscalYearDraft {
            id: None,
            year: year.to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            is_main,
            remarks: String::new(),
        }
    }

    fn empty() -> Registry {
        Registry::new(Dataset::default())
    }

    fn assert_invariants(registry: &Registry) {
        let companies = registry.companies().all();
        for fiscal_year in registry.all_fiscal_years() {
            assert!(
                companies.iter().any(|c| c.id == fiscal_year.company_id),
                "orphan fiscal year {}",
                fiscal_year.id
            );
        }
        let mut mains: HashMap<CompanyId, usize> = HashMap::new();
        for fiscal_year in registry.all_fiscal_years().iter().filter(|fy| fy.is_main) {
            *mains.entry(fiscal_year.company_id).or_default() += 1;
        }
        assert!(mains.values().all(|count| *count <= 1));
        let years = registry.all_fiscal_years();
        for (i, a) in years.iter().enumerate() {
            for b in &years[i + 1..] {
                if a.company_id == b.company_id {
                    assert!(!a.overlaps(&b.start_date, &b.end_date));
                }
            }
        }
    }

    #[test]
    fn scenario_create_company() {
        let mut registry = empty();
        let id = registry
            .create_company(&company_draft("Acme", "123-45-67890"))
            .unwrap();
        assert_eq!(registry.active_company().unwrap().id, id);
        assert!(registry.active_fiscal_years().is_empty());
    }

    #[test]
    fn scenario_overlap_then_main_switch() {
        let mut registry = empty();
        registry
            .create_company(&company_draft("Acme", "123-45-67890"))
            .unwrap();
        let main_2023 = registry
            .create_fiscal_year(&year_draft("2023", "20230101", "20231231", true))
            .unwrap();

        let error = registry
            .create_fiscal_year(&year_draft("2022", "20220601", "20230301", true))
            .unwrap_err();
        assert!(error.field_errors().unwrap().contains(Field::StartDate));
        assert_eq!(registry.active_fiscal_years().len(), 1);

        let main_2022 = registry
            .create_fiscal_year(&year_draft("2022", "20220101", "20221231", true))
            .unwrap();
        assert!(!registry.active_fiscal_year(main_2023).unwrap().is_main);
        assert!(registry.active_fiscal_year(main_2022).unwrap().is_main);
        assert_invariants(&registry);
    }

    #[test]
    fn scenario_bad_registration_number() {
        let mut registry = Registry::new(MockDataset.load().unwrap());
        let before = registry.companies().all().to_vec();
        let error = registry
            .create_company(&company_draft("Acme", "12345"))
            .unwrap_err();
        assert!(error.field_errors().unwrap().contains(Field::RegistrationNumber));
        assert_eq!(registry.companies().all(), before.as_slice());
    }

    #[test]
    fn scenario_delete_only_company() {
        let mut registry = empty();
        let id = registry
            .create_company(&company_draft("Acme", "123-45-67890"))
            .unwrap();
        registry
            .create_fiscal_year(&year_draft("2023", "20230101", "20231231", true))
            .unwrap();
        registry.delete_company(id).unwrap();
        assert!(registry.active_company().is_none());
        assert!(registry.active_fiscal_years().is_empty());
        assert!(registry.all_fiscal_years().is_empty());
    }

    #[test]
    fn delete_company_leaves_no_orphans() {
        let mut registry = Registry::new(MockDataset.load().unwrap());
        registry.delete_company(1).unwrap();
        assert!(registry.all_fiscal_years().iter().all(|fy| fy.company_id != 1));
        assert_eq!(registry.active_company().unwrap().id, 2);
        assert_eq!(registry.active_fiscal_years().len(), 1);
        assert_invariants(&registry);
    }

    #[test]
    fn delete_unknown_company_keeps_state() {
        let mut registry = Registry::new(MockDataset.load().unwrap());
        assert!(registry.delete_company(42).is_err());
        assert_eq!(registry.all_fiscal_years().len(), 6);
    }

    #[test]
    fn fiscal_year_operations_need_active_company() {
        let mut registry = Registry::new(MockDataset.load().unwrap());
        registry.select_company(None).unwrap();
        assert!(registry.active_fiscal_years().is_empty());
        assert!(matches!(
            registry.create_fiscal_year(&year_draft("2024", "20240101", "20241231", false)),
            Err(StoreError::NoActiveCompany)
        ));
        assert!(matches!(
            registry.delete_fiscal_year(1),
            Err(StoreError::NoActiveCompany)
        ));
    }

    #[test]
    fn fiscal_year_operations_follow_selection() {
        let mut registry = Registry::new(MockDataset.load().unwrap());
        registry.select_company(Some(2)).unwrap();
        // Fiscal year 1 belongs to company 1.
        assert!(registry.delete_fiscal_year(1).is_err());
        assert!(registry.active_fiscal_year(1).is_none());
        assert!(registry.active_fiscal_year(3).is_some());
    }

    #[test]
    fn invariants_hold_over_mixed_operations() {
        let mut registry = Registry::new(MockDataset.load().unwrap());
        let drafts = [
            year_draft("2024", "20240101", "20241231", true),
            year_draft("2019", "20190101", "20191231", true),
            year_draft("2023", "20230615", "20240615", true),
            year_draft("2018", "20180101", "20181231", false),
        ];
        for company_id in [1, 2, 3] {
            registry.select_company(Some(company_id)).unwrap();
            for draft in &drafts {
                let _ = registry.create_fiscal_year(draft);
            }
            for fiscal_year in registry.active_fiscal_years() {
                let mut draft = FiscalYearDraft::from(&fiscal_year);
                draft.is_main = true;
                let _ = registry.update_fiscal_year(fiscal_year.id, &draft);
            }
            assert_invariants(&registry);
        }
    }
}
