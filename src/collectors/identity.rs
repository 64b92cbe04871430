//! User identity from environment variables

use crate::config::IdentityConfig;
use crate::error::{BginfoError, Result};
use crate::platform::SystemProbe;

/// Build the `DOMAIN\user` identity string
pub fn collect_identity(probe: &dyn SystemProbe, config: &IdentityConfig) -> Result<String> {
    let domain = probe
        .env_var(&config.domain_var)
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| config.default_domain.clone());

    let username = config
        .user_vars
        .iter()
        .find_map(|var| probe.env_var(var).filter(|u| !u.is_empty()))
        .ok_or_else(|| BginfoError::MissingVariable(config.user_vars.join(", ")))?;

    Ok(format!("{}\\{}", domain, username))
}
