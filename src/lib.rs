//! Terminal manager for companies and their fiscal years.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod model;
pub mod state;
pub mod store;
pub mod ui;
pub mod utils;
pub mod validation;
