use super::StoreError;
use crate::model::{CompanyId, FiscalYear, FiscalYearDraft, FiscalYearId};
use crate::validation::validate_fiscal_year;
use log::*;

/// Holds fiscal years of every company. Each operation is scoped by the
/// owning company's id so no call can reach another company's records.
///
#[derive(Debug, Default)]
pub struct FiscalYearStore {
    fiscal_years: Vec<FiscalYear>,
}

impl FiscalYearStore {
    pub fn new(fiscal_years: Vec<FiscalYear>) -> Self {
        FiscalYearStore { fiscal_years }
    }

    pub fn all(&self) -> &[FiscalYear] {
        &self.fiscal_years
    }

    /// Returns the fiscal years of the company in insertion order.
    ///
    pub fn list(&self, company_id: CompanyId) -> Vec<FiscalYear> {
        self.fiscal_years
            .iter()
            .filter(|fiscal_year| fiscal_year.company_id == company_id)
            .cloned()
            .collect()
    }

    pub fn get(&self, company_id: CompanyId, id: FiscalYearId) -> Option<&FiscalYear> {
        self.fiscal_years
            .iter()
            .find(|fiscal_year| fiscal_year.id == id && fiscal_year.company_id == company_id)
    }

    /// Validates and inserts a fiscal year for the company. Returns the
    /// assigned id.
    ///
    pub fn create(
        &mut self,
        company_id: CompanyId,
        draft: &FiscalYearDraft,
    ) -> Result<FiscalYearId, StoreError> {
        self.validate(company_id, draft, None)?;
        let id = self.next_id()?;
        if draft.is_main {
            self.clear_main(company_id);
        }

        self.fiscal_years.push(FiscalYear {
            id,
            company_id,
            year: draft.year.clone(),
            start_date: draft.start_date.clone(),
            end_date: draft.end_date.clone(),
            is_main: draft.is_main,
            remarks: draft.remarks.clone(),
        });
        info!("Created fiscal year {} for company {}", id, company_id);
        Ok(id)
    }

    /// Validates and merges the fields into an existing fiscal year of the
    /// company.
    ///
    pub fn update(
        &mut self,
        company_id: CompanyId,
        id: FiscalYearId,
        draft: &FiscalYearDraft,
    ) -> Result<(), StoreError> {
        if self.get(company_id, id).is_none() {
            return Err(StoreError::FiscalYearNotFound { id });
        }
        self.validate(company_id, draft, Some(id))?;
        if draft.is_main {
            self.clear_main(company_id);
        }

        if let Some(fiscal_year) = self.fiscal_years.iter_mut().find(|fy| fy.id == id) {
            fiscal_year.year = draft.year.clone();
            fiscal_year.start_date = draft.start_date.clone();
            fiscal_year.end_date = draft.end_date.clone();
            fiscal_year.is_main = draft.is_main;
            fiscal_year.remarks = draft.remarks.clone();
        }
        info!("Updated fiscal year {} for company {}", id, company_id);
        Ok(())
    }

    /// Removes a single fiscal year of the company.
    ///
    pub fn delete(
        &mut self,
        company_id: CompanyId,
        id: FiscalYearId,
    ) -> Result<FiscalYear, StoreError> {
        let index = self
            .fiscal_years
            .iter()
            .position(|fiscal_year| fiscal_year.id == id && fiscal_year.company_id == company_id)
            .ok_or(StoreError::FiscalYearNotFound { id })?;
        info!("Deleted fiscal year {} of company {}", id, company_id);
        Ok(self.fiscal_years.remove(index))
    }

    /// Removes every fiscal year of the company, returning how many went.
    ///
    pub fn delete_for_company(&mut self, company_id: CompanyId) -> usize {
        let before = self.fiscal_years.len();
        self.fiscal_years
            .retain(|fiscal_year| fiscal_year.company_id != company_id);
        let removed = before - self.fiscal_years.len();
        debug!("Removed {} fiscal years of company {}", removed, company_id);
        removed
    }

    fn validate(
        &self,
        company_id: CompanyId,
        draft: &FiscalYearDraft,
        editing_id: Option<FiscalYearId>,
    ) -> Result<(), StoreError> {
        let existing = self.list(company_id);
        let errors = validate_fiscal_year(draft, &existing, editing_id);
        if errors.is_empty() {
            Ok(())
        } else {
            debug!("Rejected fiscal year for company {}: {}", company_id, errors);
            Err(StoreError::Validation(errors))
        }
    }

    fn clear_main(&mut self, company_id: CompanyId) {
        self.fiscal_years
            .iter_mut()
            .filter(|fiscal_year| fiscal_year.company_id == company_id)
            .for_each(|fiscal_year| fiscal_year.is_main = false);
    }

    fn next_id(&self) -> Result<FiscalYearId, StoreError> {
        match self.fiscal_years.iter().map(|fiscal_year| fiscal_year.id).max() {
            Some(max) => max
                .checked_add(1)
                .ok_or(StoreError::IdsExhausted { kind: "fiscal year" }),
            None => Ok(1),
        }
    }
}
