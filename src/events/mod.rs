//! Event handling module.
//!
//! This module contains the terminal event handler, which polls user input on a
//! background thread and turns key presses into state actions.

pub mod terminal;
