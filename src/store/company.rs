use super::StoreError;
use crate::model::{Company, CompanyDraft, CompanyId};
use crate::validation::validate_company;
use log::*;

/// Holds the companies and the active selection.
///
#[derive(Debug, Default)]
pub struct CompanyStore {
    companies: Vec<Company>,
    active_id: Option<CompanyId>,
}

impl CompanyStore {
    /// Returns a store over the given companies with the first one active.
    ///
    pub fn new(companies: Vec<Company>) -> Self {
        let active_id = companies.first().map(|company| company.id);
        CompanyStore {
            companies,
            active_id,
        }
    }

    pub fn all(&self) -> &[Company] {
        &self.companies
    }

    pub fn get(&self, id: CompanyId) -> Option<&Company> {
        self.companies.iter().find(|company| company.id == id)
    }

    pub fn contains(&self, id: CompanyId) -> bool {
        self.get(id).is_some()
    }

    pub fn active_id(&self) -> Option<CompanyId> {
        self.active_id
    }

    /// Returns a reference to the active company or None in "new" mode.
    ///
    pub fn active(&self) -> Option<&Company> {
        self.active_id.and_then(|id| self.get(id))
    }

    /// Sets the active company, or enters "new" mode when `id` is None.
    ///
    pub fn select(&mut self, id: Option<CompanyId>) -> Result<(), StoreError> {
        if let Some(id) = id {
            if !self.contains(id) {
                return Err(StoreError::CompanyNotFound { id });
            }
        }
        debug!("Selecting company {:?}...", id);
        self.active_id = id;
        Ok(())
    }

    /// Re-selects the first remaining company, or none if the store is empty.
    ///
    pub fn select_fallback(&mut self) -> Option<CompanyId> {
        self.active_id = self.companies.first().map(|company| company.id);
        self.active_id
    }

    /// Validates and appends a new company, making it active. Returns the
    /// assigned id.
    ///
    pub fn create(&mut self, draft: &CompanyDraft) -> Result<CompanyId, StoreError> {
        let draft = CompanyDraft {
            id: None,
            ..draft.clone()
        };
        let errors = validate_company(&draft, &self.companies);
        if !errors.is_empty() {
            debug!("Rejected new company: {}", errors);
            return Err(StoreError::Validation(errors));
        }

        let id = self.next_id()?;
        self.companies.push(Company {
            id,
            name: draft.name,
            registration_number: draft.registration_number,
        });
        self.active_id = Some(id);
        info!("Created company {}", id);
        Ok(id)
    }

    /// Validates the fields, excluding the company itself from the duplicate
    /// check, and merges them into the existing record.
    ///
    pub fn update(&mut self, id: CompanyId, draft: &CompanyDraft) -> Result<(), StoreError> {
        if !self.contains(id) {
            return Err(StoreError::CompanyNotFound { id });
        }
        let draft = CompanyDraft {
            id: Some(id),
            ..draft.clone()
        };
        let errors = validate_company(&draft, &self.companies);
        if !errors.is_empty() {
            debug!("Rejected update of company {}: {}", id, errors);
            return Err(StoreError::Validation(errors));
        }

        if let Some(company) = self.companies.iter_mut().find(|company| company.id == id) {
            company.name = draft.name;
            company.registration_number = draft.registration_number;
        }
        info!("Updated company {}", id);
        Ok(())
    }

    /// Removes the company without touching the selection or its fiscal
    /// years. Callers cascade first and re-select afterwards.
    ///
    pub fn remove(&mut self, id: CompanyId) -> Result<Company, StoreError> {
        let index = self
            .companies
            .iter()
            .position(|company| company.id == id)
            .ok_or(StoreError::CompanyNotFound { id })?;
        Ok(self.companies.remove(index))
    }

    fn next_id(&self) -> Result<CompanyId, StoreError> {
        match self.companies.iter().map(|company| company.id).max() {
            Some(max) => max
                .checked_add(1)
                .ok_or(StoreError::IdsExhausted { kind: "company" }),
            None => Ok(1),
        }
    }
}
