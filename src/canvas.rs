use crate::{
    layout::{Rect, Shape},
    palette::Palette,
};
use anyhow::Result;
use image::{DynamicImage, ImageBuffer, Rgba, RgbaImage};

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// What the canvas is filled with before any shape is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Solid(Rgba<u8>),
    Transparent,
}

/// In-memory pixel buffer the icon is drawn into
///
/// Pixels are always stored as RGBA. A solid-background canvas is emitted
/// as RGB when converted for saving.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
    background: Background,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Background) -> Result<Self> {
        if width == 0 || height == 0 {
            anyhow::bail!("Canvas dimensions must be non-zero, got {width}x{height}");
        }
        // Coordinates are handled as i32 while drawing
        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            anyhow::bail!("Canvas dimensions {width}x{height} are too large");
        }

        let fill = match background {
            Background::Solid(color) => color,
            Background::Transparent => TRANSPARENT,
        };

        Ok(Self {
            image: ImageBuffer::from_pixel(width, height, fill),
            background,
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.image
    }

    /// Convert into the image that gets written to disk: RGB for a solid
    /// background, RGBA for a transparent one
    pub fn into_dynamic(self) -> DynamicImage {
        let image = DynamicImage::ImageRgba8(self.image);
        match self.background {
            Background::Solid(_) => DynamicImage::ImageRgb8(image.to_rgb8()),
            Background::Transparent => image,
        }
    }

    /// Paint a list of shapes in order, resolving roles through the palette
    pub fn draw_shapes(&mut self, shapes: &[Shape], palette: &Palette) {
        for shape in shapes {
            match shape {
                Shape::Rectangle {
                    rect,
                    fill,
                    outline,
                    width,
                } => self.draw_rectangle(
                    *rect,
                    palette.color(*fill),
                    palette.color(*outline),
                    *width,
                ),
                Shape::Polygon {
                    points,
                    fill,
                    outline,
                } => self.draw_polygon(points, palette.color(*fill), palette.color(*outline)),
            }
        }
    }

    /// Fill a rectangle and paint a border `width` pixels thick inside its
    /// edges. A border wider than half the rectangle covers it entirely.
    pub fn draw_rectangle(&mut self, rect: Rect, fill: Rgba<u8>, outline: Rgba<u8>, width: u32) {
        let width = width.min(i32::MAX as u32) as i32;
        let (x_min, x_max) = (rect.x0.max(0), rect.x1.min(self.max_x()));
        let (y_min, y_max) = (rect.y0.max(0), rect.y1.min(self.max_y()));

        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let edge_distance = (x - rect.x0)
                    .min(rect.x1 - x)
                    .min(y - rect.y0)
                    .min(rect.y1 - y);
                let color = if edge_distance < width { outline } else { fill };
                self.image.put_pixel(x as u32, y as u32, color);
            }
        }
    }

    /// Scanline-fill a polygon, then trace a one pixel outline along each
    /// edge including the closing one
    pub fn draw_polygon(&mut self, points: &[(i32, i32)], fill: Rgba<u8>, outline: Rgba<u8>) {
        if points.is_empty() {
            return;
        }

        self.fill_polygon(points, fill);

        for (i, &start) in points.iter().enumerate() {
            let end = points[(i + 1) % points.len()];
            self.draw_line(start, end, outline);
        }
    }

    fn fill_polygon(&mut self, points: &[(i32, i32)], color: Rgba<u8>) {
        let top = points.iter().map(|p| p.1).min().unwrap_or(0).max(0);
        let bottom = points.iter().map(|p| p.1).max().unwrap_or(-1).min(self.max_y());

        let mut crossings: Vec<f64> = Vec::with_capacity(points.len());
        for y in top..=bottom {
            crossings.clear();
            for (i, &(ax, ay)) in points.iter().enumerate() {
                let (bx, by) = points[(i + 1) % points.len()];
                if ay == by {
                    continue;
                }
                let (lo, hi) = if ay < by { (ay, by) } else { (by, ay) };
                // Half-open on the lower end so shared vertices count once
                if y < lo || y >= hi {
                    continue;
                }
                let t = (y - ay) as f64 / (by - ay) as f64;
                crossings.push(ax as f64 + t * (bx - ax) as f64);
            }
            crossings.sort_by(|a, b| a.total_cmp(b));

            for span in crossings.chunks_exact(2) {
                let start = (span[0].ceil() as i32).max(0);
                let end = (span[1].floor() as i32).min(self.max_x());
                for x in start..=end {
                    self.image.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    /// Bresenham line between two points, inclusive of both ends
    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgba<u8>) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let step_x = if x < to.0 { 1 } else { -1 };
        let step_y = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put_clipped(x, y, color);
            if x == to.0 && y == to.1 {
                break;
            }
            let doubled = 2 * err;
            if doubled >= dy {
                err += dy;
                x += step_x;
            }
            if doubled <= dx {
                err += dx;
                y += step_y;
            }
        }
    }

    fn put_clipped(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x >= 0 && y >= 0 && x <= self.max_x() && y <= self.max_y() {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    fn max_x(&self) -> i32 {
        self.image.width() as i32 - 1
    }

    fn max_y(&self) -> i32 {
        self.image.height() as i32 - 1
    }
}
