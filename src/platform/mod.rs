//! OS capability interfaces
//!
//! Collectors, the resolver and the applier only talk to the machine through
//! these traits, so they can be driven by fakes in tests.

pub mod desktop;
#[cfg(unix)]
pub mod local;

use crate::data::{DiskUsage, InterfaceAddr, Partition};
use crate::error::Result;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

pub use desktop::WallpaperDesktop;
#[cfg(unix)]
pub use local::LocalSystem;

/// Read-only queries about the local machine
pub trait SystemProbe {
    /// Environment variable lookup; `None` when unset or not unicode
    fn env_var(&self, key: &str) -> Option<String>;

    /// Mounted partitions in OS enumeration order
    fn partitions(&self) -> Result<Vec<Partition>>;

    /// Capacity of the filesystem mounted at `mount_point`
    fn disk_usage(&self, mount_point: &str) -> Result<DiskUsage>;

    fn memory_total(&self) -> Result<u64>;

    fn hostname(&self) -> Result<String>;

    /// Resolve a host name to its first IPv4 address
    fn resolve_ipv4(&self, host: &str) -> Result<Ipv4Addr>;

    /// IPv4 addresses assigned to all interfaces
    fn interface_addrs(&self) -> Result<Vec<InterfaceAddr>>;
}

/// Desktop background get/set
pub trait Desktop {
    /// Path of the current background image, `None` for a flat colour
    fn current_background(&self) -> Result<Option<PathBuf>>;

    /// Display `path` as the background on every monitor
    fn set_background(&self, path: &Path) -> Result<()>;
}
