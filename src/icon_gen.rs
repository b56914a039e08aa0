use crate::{
    canvas::{Background, Canvas},
    layout::{building_layout, Shape, ICON_SIZE},
    palette::Palette,
};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, DynamicImage, ImageEncoder,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

pub const APP_ICON_FILE: &str = "app_icon.png";
pub const FOREGROUND_ICON_FILE: &str = "app_icon_foreground.png";
pub const DEFAULT_OUTPUT_DIR: &str = "assets/icon";

// Library-side options; the CLI parses into this
#[derive(Debug, Clone)]
pub struct Args {
    pub output: PathBuf,
    pub palette: Option<PathBuf>,
}

/// Rasterizes the building icon onto opaque or transparent canvases
///
/// Both renders draw the same shape list, so the foreground geometry is
/// identical and only the base canvas differs.
#[derive(Debug, Clone)]
pub struct IconRenderer {
    palette: Palette,
    shapes: Vec<Shape>,
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl IconRenderer {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            shapes: building_layout(),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Render the icon on a solid background
    pub fn render_opaque_icon(&self) -> Result<Canvas> {
        self.render(Background::Solid(self.palette.background))
    }

    /// Render the adaptive icon foreground on a fully transparent canvas
    pub fn render_foreground_icon(&self) -> Result<Canvas> {
        self.render(Background::Transparent)
    }

    fn render(&self, background: Background) -> Result<Canvas> {
        let mut canvas = Canvas::new(ICON_SIZE, ICON_SIZE, background)
            .context("Failed to allocate icon canvas")?;
        canvas.draw_shapes(&self.shapes, &self.palette);
        Ok(canvas)
    }
}

/// Write a canvas to `path` as PNG
///
/// The parent directory must already exist.
pub fn save(canvas: Canvas, path: &Path) -> Result<()> {
    let image = canvas.into_dynamic();
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);

    write_png(&image, &mut out_file)
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file
        .flush()
        .with_context(|| format!("Failed to flush PNG {}", path.display()))?;
    Ok(())
}

// Encode image data as PNG with compression; no ancillary chunks are written,
// so identical pixels always produce identical bytes
fn write_png<W: Write>(image: &DynamicImage, w: W) -> Result<()> {
    let color_type = match image {
        DynamicImage::ImageRgb8(_) => ColorType::Rgb8,
        DynamicImage::ImageRgba8(_) => ColorType::Rgba8,
        other => anyhow::bail!("Unsupported pixel layout {:?}", other.color()),
    };
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_bytes(), image.width(), image.height(), color_type)?;
    Ok(())
}

/// Render and save both icons into `args.output`
///
/// The output directory is not created; a missing one fails on the first
/// save with an error naming the file path.
pub fn generate_icons(args: Args) -> Result<()> {
    let palette = match &args.palette {
        Some(path) => Palette::from_json_file(path)?,
        None => Palette::default(),
    };
    let renderer = IconRenderer::new(palette);

    generate_app_icon(&renderer, &args.output)?;
    generate_foreground_icon(&renderer, &args.output)?;

    println!("App icons created successfully!");
    Ok(())
}

fn generate_app_icon(renderer: &IconRenderer, out_dir: &Path) -> Result<()> {
    println!("Generating {APP_ICON_FILE}...");
    let canvas = renderer.render_opaque_icon()?;
    save(canvas, &out_dir.join(APP_ICON_FILE))?;
    println!("✓ Generated {APP_ICON_FILE}");
    Ok(())
}

fn generate_foreground_icon(renderer: &IconRenderer, out_dir: &Path) -> Result<()> {
    println!("Generating {FOREGROUND_ICON_FILE}...");
    let canvas = renderer.render_foreground_icon()?;
    save(canvas, &out_dir.join(FOREGROUND_ICON_FILE))?;
    println!("✓ Generated {FOREGROUND_ICON_FILE}");
    Ok(())
}
