//! Local machine queries via procfs and direct libc calls

use super::SystemProbe;
use crate::data::{DiskUsage, InterfaceAddr, Partition};
use crate::error::{BginfoError, Result};
use crate::utils::{file::*, parsing::*};
use std::collections::HashSet;
use std::env;
use std::ffi::{CStr, CString};
use std::io;
use std::net::{Ipv4Addr, ToSocketAddrs};

const MOUNTS: &str = "/proc/mounts";
const FILESYSTEMS: &str = "/proc/filesystems";
const MEMINFO: &str = "/proc/meminfo";

/// [`SystemProbe`] backed by the running system
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalSystem;

impl LocalSystem {
    pub fn new() -> Self {
        LocalSystem
    }
}

impl SystemProbe for LocalSystem {
    fn env_var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn partitions(&self) -> Result<Vec<Partition>> {
        // Without /proc/filesystems every mount is kept
        let nodev = read_file_safe(FILESYSTEMS)
            .map(|content| parse_nodev_filesystems(&content))
            .unwrap_or_else(|_| HashSet::new());
        let mounts = read_file_safe(MOUNTS)?;
        Ok(parse_mounts(&mounts, &nodev))
    }

    fn disk_usage(&self, mount_point: &str) -> Result<DiskUsage> {
        statvfs_usage(mount_point).map_err(|source| BginfoError::StorageQuery {
            mount_point: mount_point.to_string(),
            source,
        })
    }

    fn memory_total(&self) -> Result<u64> {
        find_line(MEMINFO, "MemTotal")?
            .as_deref()
            .and_then(parse_meminfo_bytes)
            .ok_or_else(|| BginfoError::Detection("MemTotal not found".to_string()))
    }

    fn hostname(&self) -> Result<String> {
        let mut buffer = [0u8; 256];
        // SAFETY: the buffer outlives the call and its length is passed along
        let rc = unsafe { libc::gethostname(buffer.as_mut_ptr() as *mut libc::c_char, buffer.len()) };
        if rc != 0 {
            return Err(BginfoError::NetworkResolution(format!(
                "gethostname failed: {}",
                io::Error::last_os_error()
            )));
        }
        let end = buffer.iter().position(|&b| b == 0).unwrap_or(buffer.len());
        let name = String::from_utf8_lossy(&buffer[..end]).trim().to_string();
        if name.is_empty() {
            return Err(BginfoError::NetworkResolution("empty hostname".to_string()));
        }
        Ok(name)
    }

    fn resolve_ipv4(&self, host: &str) -> Result<Ipv4Addr> {
        let addrs = (host, 0)
            .to_socket_addrs()
            .map_err(|e| BginfoError::NetworkResolution(format!("cannot resolve {}: {}", host, e)))?;
        addrs
            .filter_map(|addr| match addr.ip() {
                std::net::IpAddr::V4(ip) => Some(ip),
                std::net::IpAddr::V6(_) => None,
            })
            .next()
            .ok_or_else(|| BginfoError::NetworkResolution(format!("no IPv4 address for {}", host)))
    }

    fn interface_addrs(&self) -> Result<Vec<InterfaceAddr>> {
        getifaddrs_ipv4().map_err(|e| BginfoError::NetworkResolution(format!("getifaddrs failed: {}", e)))
    }
}

fn statvfs_usage(mount_point: &str) -> io::Result<DiskUsage> {
    let path = CString::new(mount_point)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "mount point contains NUL"))?;

    // SAFETY: statvfs only writes into the zeroed struct we own
    let stat = unsafe {
        let mut stat: libc::statvfs = std::mem::zeroed();
        if libc::statvfs(path.as_ptr(), &mut stat) != 0 {
            return Err(io::Error::last_os_error());
        }
        stat
    };

    let frsize = stat.f_frsize as u64;
    let total = (stat.f_blocks as u64).saturating_mul(frsize);
    let free = (stat.f_bavail as u64).saturating_mul(frsize);
    let used = (stat.f_blocks as u64)
        .saturating_sub(stat.f_bfree as u64)
        .saturating_mul(frsize);

    Ok(DiskUsage { total, used, free })
}

fn getifaddrs_ipv4() -> io::Result<Vec<InterfaceAddr>> {
    let mut ifap: *mut libc::ifaddrs = std::ptr::null_mut();

    // SAFETY: the list is walked read-only and released with freeifaddrs
    // before returning; no pointer escapes this block.
    unsafe {
        if libc::getifaddrs(&mut ifap) != 0 {
            return Err(io::Error::last_os_error());
        }

        let mut addrs = Vec::new();
        let mut cursor = ifap;
        while !cursor.is_null() {
            let ifa = &*cursor;
            cursor = ifa.ifa_next;

            if ifa.ifa_addr.is_null() || i32::from((*ifa.ifa_addr).sa_family) != libc::AF_INET {
                continue;
            }

            let address = sockaddr_to_ipv4(ifa.ifa_addr);
            let netmask = if ifa.ifa_netmask.is_null() {
                None
            } else {
                Some(sockaddr_to_ipv4(ifa.ifa_netmask))
            };
            let interface = CStr::from_ptr(ifa.ifa_name).to_string_lossy().into_owned();

            addrs.push(InterfaceAddr {
                interface,
                address,
                netmask,
            });
        }

        libc::freeifaddrs(ifap);
        Ok(addrs)
    }
}

/// # Safety
/// `addr` must point at a valid `sockaddr_in`
unsafe fn sockaddr_to_ipv4(addr: *const libc::sockaddr) -> Ipv4Addr {
    let sin = &*(addr as *const libc::sockaddr_in);
    Ipv4Addr::from(u32::from_be(sin.sin_addr.s_addr))
}
