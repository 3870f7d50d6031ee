use super::{Field, FieldErrors};
use crate::model::{FiscalYear, FiscalYearDraft, FiscalYearId};
use once_cell::sync::Lazy;
use regex::Regex;

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("year pattern"));
static DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{8}$").expect("date pattern"));

pub const YEAR_FORMAT: &str = "Enter the year as YYYY.";
pub const DATE_FORMAT: &str = "Enter the date as YYYYMMDD.";
pub const END_BEFORE_START: &str = "End date must be after the start date.";
pub const OVERLAPPING_RANGE: &str = "Period overlaps an existing fiscal year.";

/// Validate a fiscal year draft against the other fiscal years of the same
/// company.
///
/// Format errors are reported first; when any exist the ordering and overlap
/// checks are skipped for this call. The record identified by `editing_id` is
/// left out of the overlap check.
///
pub fn validate_fiscal_year(
    draft: &FiscalYearDraft,
    existing: &[FiscalYear],
    editing_id: Option<FiscalYearId>,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if !YEAR.is_match(&draft.year) {
        errors.insert(Field::Year, YEAR_FORMAT);
    }
    if !DATE.is_match(&draft.start_date) {
        errors.insert(Field::StartDate, DATE_FORMAT);
    }
    if !DATE.is_match(&draft.end_date) {
        errors.insert(Field::EndDate, DATE_FORMAT);
    }
    if !errors.is_empty() {
        return errors;
    }

    // Fixed-width digit strings order the same way as the dates they encode.
    if draft.start_date >= draft.end_date {
        errors.insert(Field::EndDate, END_BEFORE_START);
    }

    let overlapping = existing
        .iter()
        .filter(|fiscal_year| Some(fiscal_year.id) != editing_id)
        .any(|fiscal_year| fiscal_year.overlaps(&draft.start_date, &draft.end_date));
    if overlapping {
        errors.insert(Field::StartDate, OVERLAPPING_RANGE);
    }

    errors
}
