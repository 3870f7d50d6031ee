use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Identifier of a company record.
pub type CompanyId = u64;

/// Identifier of a fiscal year record.
pub type FiscalYearId = u64;

/// Defines company data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub registration_number: String, // ###-##-#####
}

/// Defines fiscal year data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiscalYear {
    pub id: FiscalYearId,
    pub company_id: CompanyId,
    pub year: String,       // YYYY
    pub start_date: String, // YYYYMMDD
    pub end_date: String,   // YYYYMMDD
    pub is_main: bool,
    #[serde(default)]
    pub remarks: String,
}

impl FiscalYear {
    /// Returns true if the inclusive date ranges of both records intersect.
    ///
    pub fn overlaps(&self, start_date: &str, end_date: &str) -> bool {
        start_date <= self.end_date.as_str() && end_date >= self.start_date.as_str()
    }
}

/// Editable company fields submitted from the company form.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompanyDraft {
    pub id: Option<CompanyId>,
    pub name: String,
    pub registration_number: String,
}

impl From<&Company> for CompanyDraft {
    fn from(company: &Company) -> Self {
        CompanyDraft {
            id: Some(company.id),
            name: company.name.clone(),
            registration_number: company.registration_number.clone(),
        }
    }
}

/// Editable fiscal year fields submitted from the fiscal year modal. The
/// owning company is never part of the draft; stores scope it.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FiscalYearDraft {
    pub id: Option<FiscalYearId>,
    pub year: String,
    pub start_date: String,
    pub end_date: String,
    pub is_main: bool,
    pub remarks: String,
}

impl From<&FiscalYear> for FiscalYearDraft {
    fn from(fiscal_year: &FiscalYear) -> Self {
        FiscalYearDraft {
            id: Some(fiscal_year.id),
            year: fiscal_year.year.clone(),
            start_date: fiscal_year.start_date.clone(),
            end_date: fiscal_year.end_date.clone(),
            is_main: fiscal_year.is_main,
            remarks: fiscal_year.remarks.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    fn fiscal_year(start_date: &str, end_date: &str) -> FiscalYear {
        FiscalYear {
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            ..Faker.fake()
        }
    }

    #[test]
    fn overlaps_shared_endpoint() {
        let existing = fiscal_year("20230101", "20231231");
        assert!(existing.overlaps("20231231", "20241231"));
        assert!(existing.overlaps("20220101", "20230101"));
    }

    #[test]
    fn overlaps_containment() {
        let existing = fiscal_year("20230101", "20231231");
        assert!(existing.overlaps("20230301", "20230331"));
        assert!(existing.overlaps("20220101", "20241231"));
    }

    #[test]
    fn disjoint_ranges_do_not_overlap() {
        let existing = fiscal_year("20230101", "20231231");
        assert!(!existing.overlaps("20220101", "20221231"));
        assert!(!existing.overlaps("20240101", "20241231"));
    }

    #[test]
    fn company_serializes_camel_case() {
        let company = Company {
            id: 7,
            name: "Acme".to_string(),
            registration_number: "123-45-67890".to_string(),
        };
        let json = serde_json::to_string(&company).unwrap();
        assert!(json.contains("\"registrationNumber\":\"123-45-67890\""));
    }

    #[test]
    fn fiscal_year_remarks_default_to_empty() {
        let json = r#"{"id":1,"companyId":2,"year":"2023","startDate":"20230101","endDate":"20231231","isMain":true}"#;
        let fiscal_year: FiscalYear = serde_json::from_str(json).unwrap();
        assert_eq!(fiscal_year.company_id, 2);
        assert!(fiscal_year.is_main);
        assert_eq!(fiscal_year.remarks, "");
    }

    #[test]
    fn draft_from_fiscal_year_keeps_id() {
        let record: FiscalYear = Faker.fake();
        let draft = FiscalYearDraft::from(&record);
        assert_eq!(draft.id, Some(record.id));
        assert_eq!(draft.start_date, record.start_date);
        assert_eq!(draft.is_main, record.is_main);
    }
}
