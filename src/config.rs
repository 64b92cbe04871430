use crate::error::{BginfoError, Result};
use dirs::config_dir;
use serde::Deserialize;
use std::{fs, path::{Path, PathBuf}, time::Duration};

const SYSTEM_CONFIG_PATH: &str = "/usr/share/bginfo/config.toml";
const DEFAULT_CONFIG: &str = include_str!("../config/config.toml");

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub identity: IdentityConfig,
    pub overlay: OverlayConfig,
    pub branding: BrandingConfig,
    pub gradient: GradientConfig,
}

/// Which header block the overlay starts with
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Identity, RAM and IP address
    #[default]
    System,
    /// Branding lines, then hostname, identity and IP address
    Branded,
}

impl Profile {
    pub fn default_interval(self) -> Duration {
        match self {
            Profile::System => Duration::from_secs(60),
            Profile::Branded => Duration::from_secs(3600),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    pub profile: Profile,
    pub interval_secs: Option<u64>,
    pub work_dir: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct IdentityConfig {
    pub domain_var: String,
    pub default_domain: String,
    /// Tried in order; the first one set wins
    pub user_vars: Vec<String>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        IdentityConfig {
            domain_var: "USERDOMAIN".to_string(),
            default_domain: "NoDomain".to_string(),
            user_vars: vec!["USERNAME".to_string(), "USER".to_string()],
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OverlayConfig {
    /// Glyph scale for the 8x8 bitmap font
    pub font_scale: u32,
    pub text_color: String,
    pub outline_color: String,
    pub outline_width: i32,
    /// Distance of the right edge of the text block from the image edge
    pub margin: u32,
    /// Extra vertical space between lines
    pub line_gap: u32,
    pub output_name: String,
    pub backdrop_name: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfig {
            font_scale: 2,
            text_color: "white".to_string(),
            outline_color: "black".to_string(),
            outline_width: 1,
            margin: 50,
            line_gap: 5,
            output_name: "overlay.png".to_string(),
            backdrop_name: "original_wallpaper.jpg".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BrandingConfig {
    pub lines: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GradientConfig {
    pub width: u32,
    pub height: u32,
    pub start: String,
    pub end: String,
}

impl Default for GradientConfig {
    fn default() -> Self {
        GradientConfig {
            width: 1920,
            height: 1080,
            start: "#216ad1".to_string(),
            end: "#183f76".to_string(),
        }
    }
}

impl Config {
    pub fn interval(&self) -> Duration {
        self.general
            .interval_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| self.general.profile.default_interval())
    }

    /// Directory holding the backdrop and the generated overlay
    pub fn work_dir(&self) -> PathBuf {
        match self.general.work_dir.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
            Some(dir) => PathBuf::from(shellexpand::tilde(dir).to_string()),
            None => dirs::data_local_dir()
                .map(|p| p.join("bginfo"))
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

pub fn parse_config(content: &str) -> Result<Config> {
    toml::de::from_str(content).map_err(|e| BginfoError::Config(e.to_string()))
}

fn user_config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("bginfo/config.toml"))
}

/// Write the bundled default config to the user config dir unless one exists
pub fn ensure_user_config_exists() -> Result<PathBuf> {
    let user_config_path = user_config_path()
        .ok_or_else(|| BginfoError::Config("could not determine config dir".to_string()))?;

    if !user_config_path.exists() {
        if let Some(parent) = user_config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&user_config_path, DEFAULT_CONFIG)?;
        log::info!("Created config at {}", user_config_path.display());
    }

    Ok(user_config_path)
}

/// Load the explicit config if given, else the user config, else the
/// system-wide one, else built-in defaults
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path)
            .map_err(|e| BginfoError::Config(format!("{}: {}", path.display(), e)))?;
        return parse_config(&content);
    }

    let candidates = user_config_path()
        .into_iter()
        .chain(std::iter::once(PathBuf::from(SYSTEM_CONFIG_PATH)));

    for path in candidates {
        if path.exists() {
            log::debug!("Loading config from {}", path.display());
            let content = fs::read_to_string(&path)?;
            return parse_config(&content);
        }
    }

    Ok(Config::default())
}
