//! Partition enumeration and usage

use crate::data::DriveInfo;
use crate::platform::SystemProbe;
use crate::utils::parsing::format_gb;

/// One [`DriveInfo`] per mounted partition, in enumeration order.
/// Partitions whose usage cannot be read are skipped with a warning.
pub fn collect_drives(probe: &dyn SystemProbe) -> Vec<DriveInfo> {
    let partitions = match probe.partitions() {
        Ok(partitions) => partitions,
        Err(e) => {
            log::warn!("Cannot enumerate partitions: {}", e);
            return Vec::new();
        }
    };

    partitions
        .into_iter()
        .filter_map(|partition| match probe.disk_usage(&partition.mount_point) {
            Ok(usage) => Some(DriveInfo {
                device: partition.device,
                mount_point: partition.mount_point,
                used: format_gb(usage.used),
                free: format_gb(usage.free),
                total: format_gb(usage.total),
            }),
            Err(e) => {
                log::warn!("Skipping {}: {}", partition.mount_point, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collectors::testing::FakeProbe;

    const GIB: u64 = 1 << 30;

    #[test]
    fn drives_keep_enumeration_order() {
        let probe = FakeProbe::new()
            .with_partition("/dev/sdb1", "/data", Some((100 * GIB, 40 * GIB, 60 * GIB)))
            .with_partition("/dev/sda1", "/", Some((30 * GIB, 10 * GIB, 20 * GIB)));

        let drives = collect_drives(&probe);
        let mounts: Vec<&str> = drives.iter().map(|d| d.mount_point.as_str()).collect();
        assert_eq!(mounts, vec!["/data", "/"]);
        assert_eq!(drives[1].used, "10 GB");
        assert_eq!(drives[1].free, "20 GB");
        assert_eq!(drives[1].total, "30 GB");
    }

    #[test]
    fn unreadable_partition_is_skipped() {
        let probe = FakeProbe::new()
            .with_partition("/dev/sda1", "/", Some((30 * GIB, 10 * GIB, 20 * GIB)))
            .with_partition("/dev/sr0", "/media/cdrom", None)
            .with_partition("/dev/sdb1", "/data", Some((GIB - 1, 0, GIB - 1)));

        let drives = collect_drives(&probe);
        assert_eq!(drives.len(), 2);
        assert_eq!(drives[1].device, "/dev/sdb1");
        assert_eq!(drives[1].total, "0 GB");
    }

    #[test]
    fn no_partitions_gives_empty_list() {
        assert!(collect_drives(&FakeProbe::new()).is_empty());
    }
}
