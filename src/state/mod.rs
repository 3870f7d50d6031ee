//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds the stores and all transient UI state
//! - `Action` values, the only way to request a transition
//! - Navigation, form, table and notification types

mod action;
mod form;
mod navigation;
mod notification;
mod table;

pub use action::Action;
pub use form::{CompanyField, CompanyForm, FiscalYearField, FiscalYearForm};
pub use navigation::Focus;
pub use notification::{
    Confirmation, DeleteTarget, Notifier, Toast, ToastKind, DEFAULT_TOAST_DURATION,
};
pub use table::{
    sort_fiscal_years, sort_indicator, Pagination, SortConfig, SortDirection, SortKey,
    DEFAULT_PAGE_SIZE,
};

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
