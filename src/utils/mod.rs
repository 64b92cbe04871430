//! Utility functions shared across modules

pub mod file;
pub mod parsing;
