//! Inspection of a generated icon pair
//!
//! Decoded PNGs are compared position by position. Where the foreground
//! layer is transparent the opaque icon must show the background colour;
//! everywhere else both images must carry the same colour.

use anyhow::{Context, Result};
use image::{DynamicImage, Rgba};
use std::path::Path;

/// Summary of the properties checked on an icon pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconReport {
    pub opaque_size: (u32, u32),
    pub foreground_size: (u32, u32),
    pub opaque_has_alpha: bool,
    pub foreground_shape_pixels: usize,
    /// Positions where the opaque icon disagrees with the foreground layer
    /// composited over the background
    pub mismatched_pixels: usize,
    pub layers_match: bool,
    /// Every non-transparent foreground pixel has alpha 255
    pub foreground_fully_opaque: bool,
}

impl IconReport {
    pub fn is_valid(&self, expected_size: u32) -> bool {
        self.opaque_size == (expected_size, expected_size)
            && self.foreground_size == (expected_size, expected_size)
            && !self.opaque_has_alpha
            && self.layers_match
            && self.foreground_fully_opaque
            && self.foreground_shape_pixels > 0
    }
}

/// Mark the pixels of a layer that carry any coverage (alpha > 0)
pub fn foreground_mask(image: &DynamicImage) -> Vec<bool> {
    image.to_rgba8().pixels().map(|pixel| pixel[3] != 0).collect()
}

pub fn check_icon_pair(
    opaque: &DynamicImage,
    foreground: &DynamicImage,
    background: Rgba<u8>,
) -> IconReport {
    let opaque_size = (opaque.width(), opaque.height());
    let foreground_size = (foreground.width(), foreground.height());
    let opaque_pixels = opaque.to_rgba8();
    let foreground_pixels = foreground.to_rgba8();

    let mut foreground_shape_pixels = 0;
    let mut foreground_fully_opaque = true;
    for pixel in foreground_pixels.pixels() {
        match pixel[3] {
            0 => {}
            255 => foreground_shape_pixels += 1,
            _ => {
                foreground_shape_pixels += 1;
                foreground_fully_opaque = false;
            }
        }
    }

    let mismatched_pixels = if opaque_size == foreground_size {
        opaque_pixels
            .pixels()
            .zip(foreground_pixels.pixels())
            .filter(|(drawn, layer)| {
                let expected = if layer[3] == 0 {
                    background
                } else {
                    Rgba([layer[0], layer[1], layer[2], 255])
                };
                **drawn != expected
            })
            .count()
    } else {
        0
    };

    IconReport {
        opaque_size,
        foreground_size,
        opaque_has_alpha: opaque.color().has_alpha(),
        foreground_shape_pixels,
        mismatched_pixels,
        layers_match: opaque_size == foreground_size && mismatched_pixels == 0,
        foreground_fully_opaque,
    }
}

/// Load both icons from `dir` and check them against each other
pub fn check_icon_dir(dir: &Path, background: Rgba<u8>) -> Result<IconReport> {
    let opaque_path = dir.join(crate::icon_gen::APP_ICON_FILE);
    let foreground_path = dir.join(crate::icon_gen::FOREGROUND_ICON_FILE);

    let opaque = image::open(&opaque_path)
        .with_context(|| format!("Failed to load {}", opaque_path.display()))?;
    let foreground = image::open(&foreground_path)
        .with_context(|| format!("Failed to load {}", foreground_path.display()))?;

    Ok(check_icon_pair(&opaque, &foreground, background))
}
