//! Named colours used by both icon renders
//!
//! The default palette reproduces the stock icon. A JSON file can override
//! individual roles with any CSS colour string.

use crate::layout::Role;
use anyhow::{Context, Result};
use image::Rgba;
use serde::Deserialize;
use std::{path::Path, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgba<u8>,
    pub building_fill: Rgba<u8>,
    pub building_outline: Rgba<u8>,
    pub window_fill: Rgba<u8>,
    pub window_outline: Rgba<u8>,
    pub door_fill: Rgba<u8>,
    pub door_outline: Rgba<u8>,
    pub roof_fill: Rgba<u8>,
    pub roof_outline: Rgba<u8>,
}

/// Palette overrides as read from disk; every role is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PaletteFile {
    background: Option<String>,
    building_fill: Option<String>,
    building_outline: Option<String>,
    window_fill: Option<String>,
    window_outline: Option<String>,
    door_fill: Option<String>,
    door_outline: Option<String>,
    roof_fill: Option<String>,
    roof_outline: Option<String>,
}

const fn rgb(hex: u32) -> Rgba<u8> {
    Rgba([(hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255])
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: rgb(0x2196F3),
            building_fill: rgb(0xFFFFFF),
            building_outline: rgb(0x1976D2),
            window_fill: rgb(0x64B5F6),
            window_outline: rgb(0x1976D2),
            door_fill: rgb(0x8B4513),
            door_outline: rgb(0x654321),
            roof_fill: rgb(0xE91E63),
            roof_outline: rgb(0xC2185B),
        }
    }
}

impl Palette {
    /// Resolve a role to its colour
    pub fn color(&self, role: Role) -> Rgba<u8> {
        match role {
            Role::Background => self.background,
            Role::BuildingFill => self.building_fill,
            Role::BuildingOutline => self.building_outline,
            Role::WindowFill => self.window_fill,
            Role::WindowOutline => self.window_outline,
            Role::DoorFill => self.door_fill,
            Role::DoorOutline => self.door_outline,
            Role::RoofFill => self.roof_fill,
            Role::RoofOutline => self.roof_outline,
        }
    }

    /// Load a palette from a JSON file, starting from the defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read palette file {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid palette file {}", path.display()))
    }

    /// Apply the overrides in a JSON object on top of the default palette
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: PaletteFile =
            serde_json::from_str(json).context("Failed to parse palette JSON")?;

        let mut palette = Self::default();
        let overrides = [
            ("background", file.background, &mut palette.background),
            ("building_fill", file.building_fill, &mut palette.building_fill),
            ("building_outline", file.building_outline, &mut palette.building_outline),
            ("window_fill", file.window_fill, &mut palette.window_fill),
            ("window_outline", file.window_outline, &mut palette.window_outline),
            ("door_fill", file.door_fill, &mut palette.door_fill),
            ("door_outline", file.door_outline, &mut palette.door_outline),
            ("roof_fill", file.roof_fill, &mut palette.roof_fill),
            ("roof_outline", file.roof_outline, &mut palette.roof_outline),
        ];

        for (role, value, slot) in overrides {
            if let Some(value) = value {
                *slot = parse_color(role, &value)?;
            }
        }

        Ok(palette)
    }
}

/// Parse a CSS colour into an opaque pixel
///
/// Alpha is forced to 255 so the opaque icon never gains transparency.
pub fn parse_color(role: &str, value: &str) -> Result<Rgba<u8>> {
    let color = css_color::Srgb::from_str(value)
        .map_err(|_| anyhow::anyhow!("Invalid colour `{}` for {}", value, role))?;

    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.).round() as u8;
    Ok(Rgba([
        channel(color.red),
        channel(color.green),
        channel(color.blue),
        255,
    ]))
}
