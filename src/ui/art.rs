//! Cover images rendered with upper-half-block cells.
//!
//! Each terminal cell shows two vertically stacked pixels: the foreground
//! color paints the top half (`▀`), the background the bottom half.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{ImageReader, RgbImage};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use tracing::warn;

const HALF_BLOCK: &str = "▀";

/// Decoded cover for the current path; decoded again only when it changes.
#[derive(Default)]
pub struct CoverArt {
    path: Option<PathBuf>,
    image: Option<RgbImage>,
}

impl CoverArt {
    /// Make sure the cached image matches `path`.
    pub fn sync(&mut self, path: Option<&Path>) {
        if self.path.as_deref() == path {
            return;
        }
        self.path = path.map(Path::to_path_buf);
        self.image = path.and_then(|p| match decode(p) {
            Ok(img) => Some(img),
            Err(e) => {
                warn!(path = %p.display(), "cannot decode cover: {e}");
                None
            }
        });
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Lines filling at most `width` x `height` cells, or `None` when there
    /// is no decodable image.
    pub fn lines(&self, width: u16, height: u16) -> Option<Vec<Line<'static>>> {
        let img = self.image.as_ref()?;
        if width == 0 || height == 0 {
            return None;
        }
        Some(halfblock_lines(img, width, height))
    }
}

fn decode(path: &Path) -> Result<RgbImage, image::ImageError> {
    Ok(ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?
        .to_rgb8())
}

/// Scale `img` to fit `width` x `2 * height` pixels, keeping its aspect
/// ratio, and pack pixel pairs into half-block cells.
pub(super) fn halfblock_lines(img: &RgbImage, width: u16, height: u16) -> Vec<Line<'static>> {
    let (iw, ih) = img.dimensions();
    if iw == 0 || ih == 0 {
        return Vec::new();
    }
    let max_w = u32::from(width);
    let max_h = u32::from(height) * 2;
    let scale = f64::min(max_w as f64 / iw as f64, max_h as f64 / ih as f64);
    let w = ((iw as f64 * scale).round() as u32).clamp(1, max_w);
    let h = ((ih as f64 * scale).round() as u32).clamp(1, max_h);

    let scaled;
    let img = if (w, h) == (iw, ih) {
        img
    } else {
        scaled = imageops::resize(img, w, h, FilterType::Triangle);
        &scaled
    };

    (0..h)
        .step_by(2)
        .map(|y| {
            let spans: Vec<Span<'static>> = (0..w)
                .map(|x| {
                    let top = img.get_pixel(x, y).0;
                    let bottom = if y + 1 < h {
                        img.get_pixel(x, y + 1).0
                    } else {
                        top
                    };
                    Span::styled(
                        HALF_BLOCK,
                        Style::default()
                            .fg(Color::Rgb(top[0], top[1], top[2]))
                            .bg(Color::Rgb(bottom[0], bottom[1], bottom[2])),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
