//! Overlay compositing: draws the fact lines onto the backdrop
//!
//! Text is rasterized from the 8x8 bitmap font scaled by an integer factor, so
//! rendering is fully deterministic and needs no font files on the machine.
//! Lines form a right-aligned block whose right edge sits `margin` pixels from
//! the right border, starting at the vertical midpoint. Text wider than the
//! canvas runs off the left edge; nothing is wrapped or truncated.

use crate::config::OverlayConfig;
use crate::display::parse_color;
use crate::error::Result;
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{io::Reader as ImageReader, DynamicImage, ImageFormat, Rgb, RgbImage};
use std::fs;
use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const GLYPH_SIZE: u32 = 8;

/// Resolved drawing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayStyle {
    pub fill: Rgb<u8>,
    pub outline: Rgb<u8>,
    pub outline_width: i32,
    pub scale: u32,
    pub margin: u32,
    pub line_gap: u32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        OverlayStyle {
            fill: Rgb([255, 255, 255]),
            outline: Rgb([0, 0, 0]),
            outline_width: 1,
            scale: 2,
            margin: 50,
            line_gap: 5,
        }
    }
}

impl OverlayStyle {
    pub fn from_config(config: &OverlayConfig) -> Result<Self> {
        Ok(OverlayStyle {
            fill: parse_color(&config.text_color)?,
            outline: parse_color(&config.outline_color)?,
            outline_width: config.outline_width,
            scale: config.font_scale.max(1),
            margin: config.margin,
            line_gap: config.line_gap,
        })
    }

    fn cell(&self) -> u32 {
        GLYPH_SIZE * self.scale.max(1)
    }

    /// Rendered height of one line, without the gap
    pub fn line_height(&self) -> u32 {
        self.cell()
    }

    /// Rendered width of `text` in pixels
    pub fn text_width(&self, text: &str) -> u32 {
        UnicodeWidthStr::width(text) as u32 * self.cell()
    }
}

fn glyph(ch: char) -> [u8; 8] {
    BASIC_FONTS
        .get(ch)
        .or_else(|| LATIN_FONTS.get(ch))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// Draw `text` with its top-left corner at (`x`, `y`); pixels outside the
/// canvas are dropped.
pub fn draw_text(canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>, scale: u32) {
    let scale = scale.max(1) as i32;
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);
    let mut cursor_x = x;

    for ch in text.chars() {
        let cells = ch.width().unwrap_or(0) as i32;
        if cells == 0 {
            continue;
        }

        for (row_idx, row_bits) in glyph(ch).iter().enumerate() {
            for col_idx in 0..GLYPH_SIZE as i32 {
                if (row_bits >> col_idx) & 1 == 0 {
                    continue;
                }
                let px = cursor_x + col_idx * scale;
                let py = y + row_idx as i32 * scale;
                for sy in 0..scale {
                    for sx in 0..scale {
                        let (tx, ty) = (px + sx, py + sy);
                        if tx >= 0 && ty >= 0 && tx < width && ty < height {
                            canvas.put_pixel(tx as u32, ty as u32, color);
                        }
                    }
                }
            }
        }

        cursor_x += cells * GLYPH_SIZE as i32 * scale;
    }
}

/// Four diagonal copies in the outline colour, then the text itself
pub fn draw_text_with_outline(canvas: &mut RgbImage, x: i32, y: i32, text: &str, style: &OverlayStyle) {
    let w = style.outline_width;
    for (dx, dy) in [(-w, -w), (w, -w), (-w, w), (w, w)] {
        draw_text(canvas, x + dx, y + dy, text, style.outline, style.scale);
    }
    draw_text(canvas, x, y, text, style.fill, style.scale);
}

/// Draw `lines` onto a copy of `backdrop`
pub fn compose(backdrop: &DynamicImage, lines: &[String], style: &OverlayStyle) -> RgbImage {
    let mut canvas = backdrop.to_rgb8();
    let (width, height) = canvas.dimensions();

    let right = width as i32 - style.margin as i32;
    let mut y = (height / 2) as i32;
    let advance = (style.line_height() + style.line_gap) as i32;

    for line in lines {
        let x = right - style.text_width(line) as i32;
        draw_text_with_outline(&mut canvas, x, y, line, style);
        y += advance;
    }

    canvas
}

/// Decode an image, detecting the format from its content rather than its
/// extension
pub fn load_backdrop(path: &Path) -> Result<DynamicImage> {
    Ok(ImageReader::open(path)?.with_guessed_format()?.decode()?)
}

/// Compose `lines` onto the backdrop at `backdrop_path` and write the result
/// to `output_path`, replacing any previous output. The backdrop file is only
/// read.
pub fn render_overlay(
    lines: &[String],
    backdrop_path: &Path,
    output_path: &Path,
    style: &OverlayStyle,
) -> Result<()> {
    let backdrop = load_backdrop(backdrop_path)?;
    let canvas = compose(&backdrop, lines, style);

    // Write beside the target and rename so the desktop never sees a partial file
    let format = ImageFormat::from_path(output_path)?;
    let tmp_path = output_path.with_extension("tmp");
    canvas.save_with_format(&tmp_path, format)?;
    fs::rename(&tmp_path, output_path)?;

    log::debug!(
        "Rendered {} lines onto {}x{} backdrop -> {}",
        lines.len(),
        canvas.width(),
        canvas.height(),
        output_path.display()
    );
    Ok(())
}
