//! Shape data model and the building icon layout
//!
//! This module defines the drawing primitives the renderer understands and
//! the fixed layout of the building icon: a walled building with a 4×3
//! window grid, a door and a triangular roof. Every value is derived from
//! the constants below, so the layout is identical on every call.

/// Width and height of both generated icons, in pixels
pub const ICON_SIZE: u32 = 512;

pub const WINDOW_ROWS: i32 = 4;
pub const WINDOW_COLS: i32 = 3;
pub const WINDOW_WIDTH: i32 = 50;
pub const WINDOW_HEIGHT: i32 = 40;
pub const WINDOW_STRIDE_X: i32 = 90;
pub const WINDOW_STRIDE_Y: i32 = 60;
const WINDOW_ORIGIN: (i32, i32) = (140, 190);

pub const BUILDING: Rect = Rect::new(100, 150, 412, 450);
pub const DOOR: Rect = Rect::new(220, 370, 292, 450);
pub const ROOF: [(i32, i32); 3] = [(80, 150), (256, 80), (432, 150)];

const BUILDING_BORDER: u32 = 8;
const WINDOW_BORDER: u32 = 3;
const DOOR_BORDER: u32 = 4;

/// Semantic colour slot a shape is painted with
///
/// Shapes never carry concrete colours; the palette resolves a role to a
/// colour at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Background,
    BuildingFill,
    BuildingOutline,
    WindowFill,
    WindowOutline,
    DoorFill,
    DoorOutline,
    RoofFill,
    RoofOutline,
}

/// Axis-aligned rectangle with inclusive pixel corners
///
/// `Rect::new(0, 0, 2, 2)` covers a 3×3 block of pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Whether the pixel at (x, y) lies on or inside the rectangle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

/// A single drawing primitive of the icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Filled rectangle with a border `width` pixels thick, drawn inward
    /// from the rectangle's edges
    Rectangle {
        rect: Rect,
        fill: Role,
        outline: Role,
        width: u32,
    },

    /// Filled polygon with a one pixel outline along every edge,
    /// including the closing edge from the last vertex back to the first
    Polygon {
        points: Vec<(i32, i32)>,
        fill: Role,
        outline: Role,
    },
}

/// Top-left corner of the window at the given grid cell
pub fn window_origin(row: i32, col: i32) -> (i32, i32) {
    (
        WINDOW_ORIGIN.0 + col * WINDOW_STRIDE_X,
        WINDOW_ORIGIN.1 + row * WINDOW_STRIDE_Y,
    )
}

/// Build the full list of shapes in draw order
///
/// The order is building, windows (row-major), door, roof. The roof is
/// drawn last so its outline sits on top of the building's upper border.
pub fn building_layout() -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(3 + (WINDOW_ROWS * WINDOW_COLS) as usize);

    shapes.push(Shape::Rectangle {
        rect: BUILDING,
        fill: Role::BuildingFill,
        outline: Role::BuildingOutline,
        width: BUILDING_BORDER,
    });

    for row in 0..WINDOW_ROWS {
        for col in 0..WINDOW_COLS {
            let (x, y) = window_origin(row, col);
            shapes.push(Shape::Rectangle {
                rect: Rect::new(x, y, x + WINDOW_WIDTH, y + WINDOW_HEIGHT),
                fill: Role::WindowFill,
                outline: Role::WindowOutline,
                width: WINDOW_BORDER,
            });
        }
    }

    shapes.push(Shape::Rectangle {
        rect: DOOR,
        fill: Role::DoorFill,
        outline: Role::DoorOutline,
        width: DOOR_BORDER,
    });

    shapes.push(Shape::Polygon {
        points: ROOF.to_vec(),
        fill: Role::RoofFill,
        outline: Role::RoofOutline,
    });

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windows(shapes: &[Shape]) -> Vec<Rect> {
        shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Rectangle {
                    rect,
                    fill: Role::WindowFill,
                    ..
                } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_layout_has_fifteen_shapes_in_draw_order() {
        let shapes = building_layout();
        assert_eq!(shapes.len(), 15);

        assert!(matches!(
            shapes[0],
            Shape::Rectangle { rect: BUILDING, width: 8, .. }
        ));
        assert!(matches!(
            shapes[13],
            Shape::Rectangle { rect: DOOR, width: 4, .. }
        ));
        assert!(matches!(shapes[14], Shape::Polygon { .. }));
    }

    #[test]
    fn test_window_grid_spacing_and_size() {
        let shapes = building_layout();
        let windows = windows(&shapes);
        assert_eq!(windows.len(), 12);

        assert_eq!(windows[0], Rect::new(140, 190, 190, 230));
        assert_eq!(windows[2], Rect::new(320, 190, 370, 230));
        assert_eq!(windows[11], Rect::new(320, 370, 370, 410));

        for rect in &windows {
            assert_eq!(rect.x1 - rect.x0, WINDOW_WIDTH);
            assert_eq!(rect.y1 - rect.y0, WINDOW_HEIGHT);
        }

        // Neighbours along a row and a column differ only by the stride
        assert_eq!(windows[1].x0 - windows[0].x0, 90);
        assert_eq!(windows[3].y0 - windows[0].y0, 60);
    }

    #[test]
    fn test_windows_do_not_overlap() {
        let windows = windows(&building_layout());
        for (i, a) in windows.iter().enumerate() {
            for b in &windows[i + 1..] {
                let disjoint = a.x1 < b.x0 || b.x1 < a.x0 || a.y1 < b.y0 || b.y1 < a.y0;
                assert!(disjoint, "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_roof_vertices() {
        let shapes = building_layout();
        match shapes.last() {
            Some(Shape::Polygon { points, fill, outline }) => {
                assert_eq!(points, &vec![(80, 150), (256, 80), (432, 150)]);
                assert_eq!(*fill, Role::RoofFill);
                assert_eq!(*outline, Role::RoofOutline);
            }
            other => panic!("expected roof polygon last, got {other:?}"),
        }
    }

    #[test]
    fn test_window_origin() {
        assert_eq!(window_origin(0, 0), (140, 190));
        assert_eq!(window_origin(3, 2), (320, 370));
    }

    #[test]
    fn test_rect_contains_is_inclusive() {
        let rect = Rect::new(1, 1, 3, 3);
        assert!(rect.contains(1, 1));
        assert!(rect.contains(3, 3));
        assert!(!rect.contains(4, 3));
        assert!(!rect.contains(0, 2));
    }
}
