//! Facts collection

pub mod identity;
pub mod memory;
pub mod network;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;

use crate::config::IdentityConfig;
use crate::data::FactRecord;
use crate::error::Result;
use crate::platform::SystemProbe;

/// Gather one [`FactRecord`]. Only a missing user variable is an error;
/// every other fact degrades on failure.
pub fn collect_facts(probe: &dyn SystemProbe, identity_config: &IdentityConfig) -> Result<FactRecord> {
    let identity = identity::collect_identity(probe, identity_config)?;

    let hostname = match probe.hostname() {
        Ok(name) => Some(name),
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    };
    let primary_ip = network::collect_primary_ip(probe, hostname.as_deref());

    Ok(FactRecord {
        identity,
        hostname,
        memory_total: memory::collect_memory_total(probe),
        primary_ip,
        drives: storage::collect_drives(probe),
    })
}
