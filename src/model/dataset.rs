//! Initial dataset loading.
//!
//! The stores start from a `Dataset` produced by a `DatasetLoader`. The built-in
//! mock set mirrors the records the application has always shipped with; a JSON
//! file can replace it. Nothing is ever written back.

use super::error::DatasetError;
use super::resource::{Company, CompanyDraft, FiscalYear, FiscalYearDraft};
use crate::validation::{validate_company, validate_fiscal_year};
use log::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Starting collections for both stores.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub fiscal_years: Vec<FiscalYear>,
}

impl Dataset {
    /// Verify the loaded records uphold the data model invariants: every
    /// record passes the same field rules as the forms, ids and registration
    /// numbers are unique, and fiscal years are neither orphaned nor
    /// overlapping, with at most one main fiscal year per company.
    ///
    pub fn check_invariants(&self) -> Result<(), DatasetError> {
        let mut company_ids = HashSet::new();
        let mut registration_numbers = HashSet::new();
        for company in &self.companies {
            if !company_ids.insert(company.id) {
                return Err(DatasetError::Invariant(format!(
                    "duplicate company id {}",
                    company.id
                )));
            }
            let errors = validate_company(&CompanyDraft::from(company), &[]);
            if !errors.is_empty() {
                return Err(DatasetError::Invariant(format!(
                    "company {} is invalid: {}",
                    company.id, errors
                )));
            }
            if !registration_numbers.insert(company.registration_number.as_str()) {
                return Err(DatasetError::Invariant(format!(
                    "duplicate registration number {}",
                    company.registration_number
                )));
            }
        }

        let mut fiscal_year_ids = HashSet::new();
        let mut main_counts: HashMap<u64, usize> = HashMap::new();
        for (index, fiscal_year) in self.fiscal_years.iter().enumerate() {
            if !fiscal_year_ids.insert(fiscal_year.id) {
                return Err(DatasetError::Invariant(format!(
                    "duplicate fiscal year id {}",
                    fiscal_year.id
                )));
            }
            if !company_ids.contains(&fiscal_year.company_id) {
                return Err(DatasetError::Invariant(format!(
                    "fiscal year {} references missing company {}",
                    fiscal_year.id, fiscal_year.company_id
                )));
            }
            let errors = validate_fiscal_year(
                &FiscalYearDraft::from(fiscal_year),
                &[],
                Some(fiscal_year.id),
            );
            if !errors.is_empty() {
                return Err(DatasetError::Invariant(format!(
                    "fiscal year {} is invalid: {}",
                    fiscal_year.id, errors
                )));
            }
            if fiscal_year.is_main {
                let count = main_counts.entry(fiscal_year.company_id).or_insert(0);
                *count += 1;
                if *count > 1 {
                    return Err(DatasetError::Invariant(format!(
                        "company {} has more than one main fiscal year",
                        fiscal_year.company_id
                    )));
                }
            }
            let clash = self.fiscal_years[..index].iter().find(|other| {
                other.company_id == fiscal_year.company_id
                    && other.overlaps(&fiscal_year.start_date, &fiscal_year.end_date)
            });
            if let Some(other) = clash {
                return Err(DatasetError::Invariant(format!(
                    "fiscal years {} and {} overlap",
                    other.id, fiscal_year.id
                )));
            }
        }
        Ok(())
    }
}

/// Supplies the starting collections.
///
pub trait DatasetLoader {
    fn load(&self) -> Result<Dataset, DatasetError>;
}

/// The fixed sample records.
///
pub struct MockDataset;

impl DatasetLoader for MockDataset {
    fn load(&self) -> Result<Dataset, DatasetError> {
        debug!("Loading built-in mock dataset...");
        let companies = vec![
            company(1, "Frontend Solutions", "111-81-12345"),
            company(2, "Backend Systems", "222-86-54321"),
            company(3, "UI/UX Design Lab", "333-88-67890"),
        ];
        let fiscal_years = vec![
            fiscal_year(1, 1, "2023", "20230101", "20231231", true, "2023 regular term"),
            fiscal_year(2, 1, "2022", "20220101", "20221231", false, "2022"),
            fiscal_year(3, 2, "2023", "20230401", "20240331", true, "March closing"),
            fiscal_year(4, 1, "2021", "20210101", "20211231", false, ""),
            fiscal_year(5, 1, "2020", "20200101", "20201231", false, "Pandemic period"),
            fiscal_year(6, 3, "2023", "20230101", "20231231", true, "Initial setup"),
        ];
        Ok(Dataset {
            companies,
            fiscal_years,
        })
    }
}

/// Reads `{ "companies": [...], "fiscalYears": [...] }` from a JSON file.
///
pub struct JsonDataset {
    path: PathBuf,
}

impl JsonDataset {
    pub fn new(path: impl AsRef<Path>) -> Self {
        JsonDataset {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DatasetLoader for JsonDataset {
    fn load(&self) -> Result<Dataset, DatasetError> {
        info!("Loading dataset from {}...", self.path.display());
        let contents = fs::read_to_string(&self.path).map_err(|e| DatasetError::ReadFailed {
            path: self.path.clone(),
            source: e,
        })?;
        let dataset: Dataset = serde_json::from_str(&contents)?;
        dataset.check_invariants()?;
        debug!(
            "Loaded {} companies and {} fiscal years",
            dataset.companies.len(),
            dataset.fiscal_years.len()
        );
        Ok(dataset)
    }
}

fn company(id: u64, name: &str, registration_number: &str) -> Company {
    Company {
        id,
        name: name.to_string(),
        registration_number: registration_number.to_string(),
    }
}

fn fiscal_year(
    id: u64,
    company_id: u64,
    year: &str,
    start_date: &str,
    end_date: &str,
    is_main: bool,
    remarks: &str,
) -> FiscalYear {
    FiscalYear {
        id,
        company_id,
        year: year.to_string(),
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        is_main,
        remarks: remarks.to_string(),
    }
}
