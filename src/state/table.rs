//! Fiscal year table presentation: sorting and pagination.

use crate::model::FiscalYear;
use std::cmp::Ordering;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Columns the fiscal year table can be sorted by.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SortKey {
    Year,
    StartDate,
    EndDate,
}

impl SortKey {
    fn value<'a>(&self, fiscal_year: &'a FiscalYear) -> &'a str {
        match self {
            SortKey::Year => &fiscal_year.year,
            SortKey::StartDate => &fiscal_year.start_date,
            SortKey::EndDate => &fiscal_year.end_date,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Returns the sort produced by clicking the `key` header: the same key
    /// sorted ascending flips to descending, anything else starts ascending.
    ///
    pub fn request(current: Option<SortConfig>, key: SortKey) -> SortConfig {
        let direction = match current {
            Some(SortConfig {
                key: current_key,
                direction: SortDirection::Ascending,
            }) if current_key == key => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        SortConfig { key, direction }
    }

    fn compare(&self, a: &FiscalYear, b: &FiscalYear) -> Ordering {
        let ordering = self.key.value(a).cmp(self.key.value(b));
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Sorts the fiscal years in place. Equal keys keep their relative order.
///
pub fn sort_fiscal_years(fiscal_years: &mut [FiscalYear], sort: Option<SortConfig>) {
    if let Some(sort) = sort {
        fiscal_years.sort_by(|a, b| sort.compare(a, b));
    }
}

/// Header marker for the column.
///
pub fn sort_indicator(sort: Option<SortConfig>, key: SortKey) -> &'static str {
    match sort {
        Some(sort) if sort.key == key => match sort.direction {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        },
        _ => "↕",
    }
}

/// 1-based page cursor over a list of fixed page size.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Pagination {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns ceil(len / page_size).
    ///
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Returns the items of the current page.
    ///
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1).saturating_mul(self.page_size);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    pub fn next(&mut self, len: usize) -> &mut Self {
        if self.page < self.page_count(len) {
            self.page += 1;
        }
        self
    }

    pub fn previous(&mut self) -> &mut Self {
        if self.page > 1 {
            self.page -= 1;
        }
        self
    }

    /// Moves back to the last valid page after the list shrank.
    ///
    pub fn clamp(&mut self, len: usize) -> &mut Self {
        self.page = self.page.min(self.page_count(len)).max(1);
        self
    }
}
