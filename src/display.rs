//! Overlay text layout: which lines are drawn, in which order

use crate::config::Profile;
use crate::data::{DriveInfo, FactRecord};
use crate::error::{BginfoError, Result};
use image::Rgb;

const UNKNOWN: &str = "Unknown";

/// Parse a colour given as a name or as `#rrggbb`
pub fn parse_color(color: &str) -> Result<Rgb<u8>> {
    if let Some(rgb) = named_color(color) {
        return Ok(rgb);
    }

    if color.is_ascii() && color.starts_with('#') && color.len() == 7 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&color[1..3], 16),
            u8::from_str_radix(&color[3..5], 16),
            u8::from_str_radix(&color[5..7], 16),
        ) {
            return Ok(Rgb([r, g, b]));
        }
    }

    Err(BginfoError::Config(format!(
        "unknown color '{}' (use black, white, red, green, blue, yellow, cyan, magenta, gray or #rrggbb)",
        color
    )))
}

fn named_color(color_name: &str) -> Option<Rgb<u8>> {
    let rgb = match color_name.to_lowercase().as_str() {
        "black" => [0, 0, 0],
        "white" => [255, 255, 255],
        "red" => [255, 0, 0],
        "green" => [0, 128, 0],
        "blue" => [0, 0, 255],
        "yellow" => [255, 255, 0],
        "cyan" => [0, 255, 255],
        "magenta" | "purple" => [255, 0, 255],
        "gray" | "grey" => [128, 128, 128],
        "orange" => [255, 165, 0],
        _ => return None,
    };
    Some(Rgb(rgb))
}

/// Fixed header lines for `profile`
pub fn header_lines(record: &FactRecord, profile: Profile, branding: &[String]) -> Vec<String> {
    match profile {
        Profile::System => vec![
            format!("Computer Name\\User: {}", record.identity),
            format!("RAM: {}", record.memory_total.as_deref().unwrap_or(UNKNOWN)),
            format!("IP Address: {}", record.primary_ip),
            " ".to_string(),
            "Drives:".to_string(),
        ],
        Profile::Branded => {
            let mut lines = branding.to_vec();
            lines.extend([
                " ".to_string(),
                " ".to_string(),
                format!("Hostname: {}", record.hostname.as_deref().unwrap_or(UNKNOWN)),
                record.identity.clone(),
                format!("IP Address: {}", record.primary_ip),
                " ".to_string(),
                " ".to_string(),
                ".:: Disk Drives ::.".to_string(),
            ]);
            lines
        }
    }
}

pub fn drive_line(drive: &DriveInfo) -> String {
    format!(
        "{} ({}) - Used: {}, Free: {}, Total: {}",
        drive.device, drive.mount_point, drive.used, drive.free, drive.total
    )
}

/// Every overlay line: the profile header followed by one line per drive
pub fn overlay_lines(record: &FactRecord, profile: Profile, branding: &[String]) -> Vec<String> {
    let mut lines = header_lines(record, profile, branding);
    lines.extend(record.drives.iter().map(drive_line));
    lines
}
