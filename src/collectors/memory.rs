//! Physical memory capacity

use crate::platform::SystemProbe;
use crate::utils::parsing::format_gb;

/// Total RAM as `"<N> GB"`, or `None` when it cannot be read
pub fn collect_memory_total(probe: &dyn SystemProbe) -> Option<String> {
    match probe.memory_total() {
        Ok(bytes) => Some(format_gb(bytes)),
        Err(e) => {
            log::warn!("Cannot read memory size: {}", e);
            None
        }
    }
}
