//! Data structures shared between collectors, layout and compositing

pub mod facts;
pub mod probe;

pub use facts::{DriveInfo, FactRecord};
pub use probe::{DiskUsage, InterfaceAddr, Partition};
