//! In-memory [`SystemProbe`] for unit tests

use crate::data::{DiskUsage, InterfaceAddr, Partition};
use crate::error::{BginfoError, Result};
use crate::platform::SystemProbe;
use std::collections::HashMap;
use std::io;
use std::net::Ipv4Addr;

#[derive(Debug, Default)]
pub struct FakeProbe {
    env: HashMap<String, String>,
    partitions: Vec<(Partition, Option<DiskUsage>)>,
    memory: Option<u64>,
    host: Option<(String, Option<Ipv4Addr>)>,
    interfaces: Vec<InterfaceAddr>,
    interfaces_fail: bool,
}

impl FakeProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.to_string(), value.to_string());
        self
    }

    /// `usage` is `(total, used, free)`; `None` makes the usage query fail
    pub fn with_partition(mut self, device: &str, mount_point: &str, usage: Option<(u64, u64, u64)>) -> Self {
        let partition = Partition {
            device: device.to_string(),
            mount_point: mount_point.to_string(),
            fs_type: "fake".to_string(),
        };
        let usage = usage.map(|(total, used, free)| DiskUsage { total, used, free });
        self.partitions.push((partition, usage));
        self
    }

    pub fn with_memory(mut self, bytes: u64) -> Self {
        self.memory = Some(bytes);
        self
    }

    /// `ip` of `None` makes resolution fail
    pub fn with_host(mut self, name: &str, ip: Option<[u8; 4]>) -> Self {
        self.host = Some((name.to_string(), ip.map(Ipv4Addr::from)));
        self
    }

    pub fn with_interface(mut self, addr: InterfaceAddr) -> Self {
        self.interfaces.push(addr);
        self
    }

    pub fn with_netmask(self, address: [u8; 4], netmask: [u8; 4]) -> Self {
        self.with_interface(InterfaceAddr {
            interface: "eth0".to_string(),
            address: Ipv4Addr::from(address),
            netmask: Some(Ipv4Addr::from(netmask)),
        })
    }

    pub fn failing_interfaces(mut self) -> Self {
        self.interfaces_fail = true;
        self
    }
}

impl SystemProbe for FakeProbe {
    fn env_var(&self, key: &str) -> Option<String> {
        self.env.get(key).cloned()
    }

    fn partitions(&self) -> Result<Vec<Partition>> {
        Ok(self.partitions.iter().map(|(p, _)| p.clone()).collect())
    }

    fn disk_usage(&self, mount_point: &str) -> Result<DiskUsage> {
        self.partitions
            .iter()
            .find(|(p, _)| p.mount_point == mount_point)
            .and_then(|(_, usage)| *usage)
            .ok_or_else(|| BginfoError::StorageQuery {
                mount_point: mount_point.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "device not ready"),
            })
    }

    fn memory_total(&self) -> Result<u64> {
        self.memory
            .ok_or_else(|| BginfoError::Detection("MemTotal not found".to_string()))
    }

    fn hostname(&self) -> Result<String> {
        self.host
            .as_ref()
            .map(|(name, _)| name.clone())
            .ok_or_else(|| BginfoError::NetworkResolution("no hostname".to_string()))
    }

    fn resolve_ipv4(&self, host: &str) -> Result<Ipv4Addr> {
        match &self.host {
            Some((name, Some(ip))) if name == host => Ok(*ip),
            _ => Err(BginfoError::NetworkResolution(format!("cannot resolve {}", host))),
        }
    }

    fn interface_addrs(&self) -> Result<Vec<InterfaceAddr>> {
        if self.interfaces_fail {
            return Err(BginfoError::NetworkResolution("getifaddrs failed".to_string()));
        }
        Ok(self.interfaces.clone())
    }
}
