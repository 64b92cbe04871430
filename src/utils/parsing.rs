//! String parsing and formatting utilities

use crate::data::Partition;
use std::collections::HashSet;
use std::net::Ipv4Addr;

const GIB: u64 = 1 << 30;

/// Format a byte count as whole gigabytes (floor division by 2^30)
pub fn format_gb(bytes: u64) -> String {
    format!("{} GB", bytes / GIB)
}

/// Network prefix length of a subnet mask: the number of set bits across its octets
pub fn prefix_len(mask: Ipv4Addr) -> u32 {
    mask.octets().iter().map(|octet| octet.count_ones()).sum()
}

/// Extract value after a colon and space
pub fn extract_after_colon(line: &str) -> Option<String> {
    line.split(':')
        .nth(1)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse a `/proc/meminfo` style line (`MemTotal:  16318584 kB`) into bytes
pub fn parse_meminfo_bytes(line: &str) -> Option<u64> {
    let value = extract_after_colon(line)?;
    let kb: u64 = value.trim_end_matches("kB").trim().parse().ok()?;
    Some(kb * 1024)
}

/// Decode the octal escapes the kernel uses in mount tables (`\040` for space)
pub fn unescape_mount_field(field: &str) -> String {
    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 3 < bytes.len() {
            let digits = &bytes[i + 1..i + 4];
            if digits.iter().all(|d| (b'0'..=b'7').contains(d)) {
                let value = digits.iter().fold(0u32, |acc, d| acc * 8 + u32::from(d - b'0'));
                if let Ok(value) = u8::try_from(value) {
                    out.push(value);
                    i += 4;
                    continue;
                }
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Filesystem types marked `nodev` in `/proc/filesystems`
pub fn parse_nodev_filesystems(content: &str) -> HashSet<String> {
    content
        .lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some("nodev"), Some(fs_type)) => Some(fs_type.to_string()),
                _ => None,
            }
        })
        .collect()
}

/// Parse a mount table, keeping only filesystems backed by a device
pub fn parse_mounts(content: &str, nodev: &HashSet<String>) -> Vec<Partition> {
    content
        .lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let device = parts.next()?;
            let mount_point = parts.next()?;
            let fs_type = parts.next()?;
            if nodev.contains(fs_type) {
                return None;
            }
            Some(Partition {
                device: unescape_mount_field(device),
                mount_point: unescape_mount_field(mount_point),
                fs_type: fs_type.to_string(),
            })
        })
        .collect()
}
