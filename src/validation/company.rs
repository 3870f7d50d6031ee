use super::{Field, FieldErrors};
use crate::model::{Company, CompanyDraft};
use once_cell::sync::Lazy;
use regex::Regex;

static REGISTRATION_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}-[0-9]{2}-[0-9]{5}$").expect("registration number pattern"));

pub const NAME_REQUIRED: &str = "Enter the company name.";
pub const REGISTRATION_NUMBER_FORMAT: &str =
    "Registration number format is invalid (###-##-#####).";
pub const REGISTRATION_NUMBER_DUPLICATE: &str = "Registration number is already registered.";

/// Validate a company draft against the existing companies. Every rule runs;
/// a duplicate message replaces a format message on the same field.
///
pub fn validate_company(draft: &CompanyDraft, existing: &[Company]) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.name.trim().is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    if !REGISTRATION_NUMBER.is_match(&draft.registration_number) {
        errors.insert(Field::RegistrationNumber, REGISTRATION_NUMBER_FORMAT);
    }

    let duplicate = existing.iter().any(|company| {
        company.registration_number == draft.registration_number && Some(company.id) != draft.id
    });
    if duplicate {
        errors.insert(Field::RegistrationNumber, REGISTRATION_NUMBER_DUPLICATE);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> Vec<Company> {
        vec![
            Company {
                id: 1,
                name: "Frontend Solutions".to_string(),
                registration_number: "111-81-12345".to_string(),
            },
            Company {
                id: 2,
                name: "Backend Systems".to_string(),
                registration_number: "222-86-54321".to_string(),
            },
        ]
    }

    fn draft(id: Option<u64>, name: &str, registration_number: &str) -> CompanyDraft {
        CompanyDraft {
            id,
            name: name.to_string(),
            registration_number: registration_number.to_string(),
        }
    }

    #[test]
    fn valid_new_company() {
        let errors = validate_company(&draft(None, "Acme", "123-45-67890"), &existing());
        assert!(errors.is_empty());
    }

    #[test]
    fn blank_name_is_rejected() {
        let errors = validate_company(&draft(None, "   ", "123-45-67890"), &existing());
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn malformed_registration_number_is_rejected() {
        for bad in ["12345", "123-45-6789", "123-456-7890", "abc-de-fghij", " 123-45-67890"] {
            let errors = validate_company(&draft(None, "Acme", bad), &existing());
            assert_eq!(
                errors.get(Field::RegistrationNumber),
                Some(REGISTRATION_NUMBER_FORMAT),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        let errors = validate_company(&draft(None, "Acme", "١٢٣-٤٥-٦٧٨٩٠"), &existing());
        assert_eq!(
            errors.get(Field::RegistrationNumber),
            Some(REGISTRATION_NUMBER_FORMAT)
        );
    }

    #[test]
    fn all_errors_surface_together() {
        let errors = validate_company(&draft(None, "", "12345"), &existing());
        assert!(errors.contains(Field::Name));
        assert!(errors.contains(Field::RegistrationNumber));
    }

    #[test]
    fn duplicate_registration_number_is_rejected() {
        let errors = validate_company(&draft(None, "Acme", "222-86-54321"), &existing());
        assert_eq!(
            errors.get(Field::RegistrationNumber),
            Some(REGISTRATION_NUMBER_DUPLICATE)
        );
    }

    #[test]
    fn editing_keeps_own_registration_number() {
        let errors = validate_company(
            &draft(Some(2), "Backend Systems Ltd", "222-86-54321"),
            &existing(),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn editing_into_another_company_number_is_rejected() {
        let errors = validate_company(&draft(Some(2), "Backend", "111-81-12345"), &existing());
        assert_eq!(
            errors.get(Field::RegistrationNumber),
            Some(REGISTRATION_NUMBER_DUPLICATE)
        );
    }
}
