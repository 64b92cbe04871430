//! Per-cycle snapshot of machine facts

/// Identity, storage and network facts gathered for one cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactRecord {
    /// `DOMAIN\user`
    pub identity: String,
    pub hostname: Option<String>,
    /// Human-readable RAM capacity, e.g. `"15 GB"`
    pub memory_total: Option<String>,
    /// Primary IPv4 address, with `/<cidr>` when the owning interface is known
    pub primary_ip: String,
    /// Drives in partition enumeration order
    pub drives: Vec<DriveInfo>,
}

/// A mounted partition with formatted capacities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveInfo {
    pub device: String,
    pub mount_point: String,
    pub used: String,
    pub free: String,
    pub total: String,
}
