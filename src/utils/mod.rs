//! Utility functions module.
//!
//! This module contains formatting helpers used by the render functions.

pub mod text_processing;
