//! Desktop background access through the `wallpaper` crate

use super::Desktop;
use crate::error::{BginfoError, Result};
use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};

/// [`Desktop`] for the running desktop environment
#[derive(Debug, Default, Clone, Copy)]
pub struct WallpaperDesktop;

impl WallpaperDesktop {
    pub fn new() -> Self {
        WallpaperDesktop
    }
}

impl Desktop for WallpaperDesktop {
    fn current_background(&self) -> Result<Option<PathBuf>> {
        let current = wallpaper::get()
            .map_err(|e| BginfoError::Detection(format!("cannot query wallpaper: {}", e)))?;
        Ok(parse_background_path(&current))
    }

    fn set_background(&self, path: &Path) -> Result<()> {
        let path_str = path.to_str().ok_or_else(|| BginfoError::Apply {
            code: None,
            message: format!("path is not valid UTF-8: {}", path.display()),
        })?;

        wallpaper::set_from_path(path_str).map_err(|e| BginfoError::Apply {
            code: os_error_code(e.as_ref()),
            message: e.to_string(),
        })
    }
}

/// Interpret a background query result; empty means a flat colour
pub fn parse_background_path(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim().trim_matches('\'').trim_matches('"');
    let path = trimmed.strip_prefix("file://").unwrap_or(trimmed);
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

fn os_error_code(err: &(dyn Error + 'static)) -> Option<i32> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(code) = e.downcast_ref::<io::Error>().and_then(io::Error::raw_os_error) {
            return Some(code);
        }
        current = e.source();
    }
    None
}
