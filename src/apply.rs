//! Hands the composited image to the desktop

use crate::error::Result;
use crate::platform::Desktop;
use std::fs;
use std::path::{Path, PathBuf};

/// Set `image` as the desktop background. The path is made absolute first;
/// a refusal from the OS surfaces as [`BginfoError::Apply`](crate::BginfoError::Apply).
pub fn apply_background(desktop: &dyn Desktop, image: &Path) -> Result<PathBuf> {
    let absolute = fs::canonicalize(image)?;
    desktop.set_background(&absolute)?;
    log::debug!("Background set to {}", absolute.display());
    Ok(absolute)
}
