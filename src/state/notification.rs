//! Transient notifications and delete confirmations.

use crate::model::{Company, CompanyId, FiscalYearId};
use std::time::{Duration, Instant};

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ToastKind {
    Success,
    Error,
}

/// A fire-and-forget message shown until it expires.
///
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    shown_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant, duration: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) >= duration
    }
}

/// Single-slot toast holder; a new toast replaces the visible one.
///
#[derive(Debug, Clone)]
pub struct Notifier {
    current: Option<Toast>,
    duration: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Notifier::new(DEFAULT_TOAST_DURATION)
    }
}

impl Notifier {
    pub fn new(duration: Duration) -> Self {
        Notifier {
            current: None,
            duration,
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into(), Instant::now());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into(), Instant::now());
    }

    pub fn show(&mut self, kind: ToastKind, message: String, now: Instant) {
        self.current = Some(Toast {
            message,
            kind,
            shown_at: now,
        });
    }

    /// Drops the toast once its display time has passed.
    ///
    pub fn expire(&mut self, now: Instant) {
        let expired = self
            .current
            .as_ref()
            .map_or(false, |toast| toast.is_expired(now, self.duration));
        if expired {
            self.current = None;
        }
    }
}

/// Record a pending delete refers to.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DeleteTarget {
    Company(CompanyId),
    FiscalYear(FiscalYearId),
}

/// Accept/cancel gate shown before a delete runs.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Confirmation {
    pub title: String,
    pub message: String,
    pub target: DeleteTarget,
}

impl Confirmation {
    pub fn delete_company(company: &Company) -> Self {
        Confirmation {
            title: "Delete company".to_string(),
            message: format!(
                "All fiscal years of '{}' will be deleted with it. Delete this company?",
                company.name
            ),
            target: DeleteTarget::Company(company.id),
        }
    }

    pub fn delete_fiscal_year(id: FiscalYearId) -> Self {
        Confirmation {
            title: "Delete fiscal year".to_string(),
            message: "Delete this fiscal year?".to_string(),
            target: DeleteTarget::FiscalYear(id),
        }
    }
}
