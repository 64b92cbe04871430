//! bginfo library
//!
//! Periodically renders machine facts (identity, memory, network, drives) onto
//! the desktop background image and applies the result.

pub mod apply;
pub mod background;
pub mod collectors;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod overlay;
pub mod platform;
pub mod scheduler;
pub mod utils;

pub use error::{BginfoError, Result};
pub use data::{DriveInfo, FactRecord};
pub use config::{Config, Profile};
pub use scheduler::{run_cycle, run_loop, Context};

