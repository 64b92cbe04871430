//! Raw records returned by platform queries

use std::net::Ipv4Addr;

/// A mounted partition as listed by the OS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub device: String,
    pub mount_point: String,
    pub fs_type: String,
}

/// Byte counts for a mounted filesystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

/// An IPv4 address assigned to a network interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddr {
    pub interface: String,
    pub address: Ipv4Addr,
    pub netmask: Option<Ipv4Addr>,
}
