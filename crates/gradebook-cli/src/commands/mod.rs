//! Command implementations for the gradebook CLI.

pub mod demo;
pub mod report;
