//! Primary IPv4 address and its prefix length

use crate::data::InterfaceAddr;
use crate::platform::SystemProbe;
use crate::utils::parsing::prefix_len;
use std::net::Ipv4Addr;

/// Shown when the hostname cannot be resolved to an address
pub const UNKNOWN_IP: &str = "Unknown";

/// Resolve `hostname` and append `/<cidr>` from the interface that carries the
/// address. Never fails: resolution problems degrade to a placeholder and a
/// missing interface match leaves the bare address.
pub fn collect_primary_ip(probe: &dyn SystemProbe, hostname: Option<&str>) -> String {
    let Some(hostname) = hostname else {
        return UNKNOWN_IP.to_string();
    };

    let ip = match probe.resolve_ipv4(hostname) {
        Ok(ip) => ip,
        Err(e) => {
            log::warn!("{}", e);
            return UNKNOWN_IP.to_string();
        }
    };

    let addrs = match probe.interface_addrs() {
        Ok(addrs) => addrs,
        Err(e) => {
            log::warn!("{}", e);
            return ip.to_string();
        }
    };

    match matching_prefix(&addrs, ip) {
        Some(cidr) => format!("{}/{}", ip, cidr),
        None => {
            log::debug!("No interface carries {}, omitting prefix length", ip);
            ip.to_string()
        }
    }
}

/// Prefix length of the first interface address exactly equal to `ip`
pub fn matching_prefix(addrs: &[InterfaceAddr], ip: Ipv4Addr) -> Option<u32> {
    addrs
        .iter()
        .find(|addr| addr.address == ip && addr.netmask.is_some())
        .and_then(|addr| addr.netmask)
        .map(prefix_len)
}
