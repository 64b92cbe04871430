//! Backdrop selection: the static image every cycle draws onto

use crate::config::GradientConfig;
use crate::display::parse_color;
use crate::error::Result;
use crate::platform::Desktop;
use crate::utils::file::same_file;
use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Files owned by the program inside its working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub dir: PathBuf,
    /// Saved copy of the original background
    pub backdrop: PathBuf,
    /// Composited image handed to the desktop
    pub output: PathBuf,
}

impl Workspace {
    pub fn new(dir: impl Into<PathBuf>, backdrop_name: &str, output_name: &str) -> Self {
        let dir = dir.into();
        Workspace {
            backdrop: dir.join(backdrop_name),
            output: dir.join(output_name),
            dir,
        }
    }

    /// True when `path` names our own output file
    pub fn is_own_output(&self, path: &Path) -> bool {
        match (path.file_name(), self.output.file_name()) {
            (Some(current), Some(ours)) => current == ours,
            _ => false,
        }
    }
}

/// Pick and prepare the backdrop. Called once at startup.
///
/// - current background is our output: keep the backdrop saved by a previous run
/// - no background image (flat colour): synthesize a gradient
/// - otherwise: copy the current image into the workspace
pub fn resolve_backdrop(
    desktop: &dyn Desktop,
    workspace: &Workspace,
    gradient: &GradientConfig,
) -> Result<PathBuf> {
    fs::create_dir_all(&workspace.dir)?;

    let current = match desktop.current_background() {
        Ok(current) => current,
        Err(e) => {
            log::warn!("{}; treating background as a flat colour", e);
            None
        }
    };

    match current {
        Some(path) if workspace.is_own_output(&path) => {
            if workspace.backdrop.exists() {
                log::info!(
                    "Background is already our overlay, reusing {}",
                    workspace.backdrop.display()
                );
            } else {
                log::warn!(
                    "Background is our overlay but {} is missing; generating a gradient",
                    workspace.backdrop.display()
                );
                write_gradient(&workspace.backdrop, gradient)?;
            }
        }
        Some(path) if same_file(&path, &workspace.backdrop) => {
            log::info!("Background is the saved backdrop {}", path.display());
        }
        Some(path) => {
            log::info!("Copying {} to {}", path.display(), workspace.backdrop.display());
            fs::copy(&path, &workspace.backdrop)?;
        }
        None => {
            log::info!("No background image set; generating a gradient");
            write_gradient(&workspace.backdrop, gradient)?;
        }
    }

    Ok(workspace.backdrop.clone())
}

/// Diagonal gradient: each pixel interpolates by `(x + y) / (width + height)`
pub fn gradient_image(config: &GradientConfig) -> Result<RgbImage> {
    let start = parse_color(&config.start)?;
    let end = parse_color(&config.end)?;
    let span = (config.width + config.height).max(1) as f32;

    Ok(RgbImage::from_fn(config.width, config.height, |x, y| {
        let ratio = (x + y) as f32 / span;
        let channel = |i: usize| {
            let (a, b) = (f32::from(start[i]), f32::from(end[i]));
            (a + ratio * (b - a)) as u8
        };
        Rgb([channel(0), channel(1), channel(2)])
    }))
}

fn write_gradient(path: &Path, config: &GradientConfig) -> Result<()> {
    let image = gradient_image(config)?;
    image.save(path)?;
    Ok(())
}
