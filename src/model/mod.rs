//! Data model module.
//!
//! This module contains the company and fiscal year records, the drafts
//! submitted by the forms, and the loaders for the starting dataset.

mod dataset;
mod error;
mod resource;

pub use dataset::{Dataset, DatasetLoader, JsonDataset, MockDataset};
pub use error::DatasetError;
pub use resource::*;
