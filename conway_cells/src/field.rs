// field.rs - Screen geometry of the cell field

use crate::grid::{Grid, GridSize};

/// Pixel size of the watch display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySize {
    pub width: u16,
    pub height: u16,
}

impl DisplaySize {
    pub const PEBBLE: DisplaySize = DisplaySize { width: 144, height: 168 };
}

/// Rectangle in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// A straight grid line, from `start` to `end` in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: (i32, i32),
    pub end: (i32, i32),
}

/// Where the field sits on the display and how big its cells are.
///
/// The field is inset by `cell_size - 1` pixels on every side so the outer
/// grid lines stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub frame: Rect,
    pub cell_size: u8,
    pub grid_size: GridSize,
}

impl FieldLayout {
    pub fn new(display: DisplaySize, cell_size: u8) -> Self {
        let cell = cell_size.max(1) as i32;
        let inset = cell - 1;
        let frame = Rect {
            x: inset,
            y: inset,
            w: (display.width as i32 - (2 * cell - 1)).max(0),
            h: (display.height as i32 - (2 * cell - 1)).max(0),
        };
        let grid_size = GridSize::new((frame.h / cell) as u16, (frame.w / cell) as u16);
        Self { frame, cell_size: cell as u8, grid_size }
    }

    /// Display rectangle covered by one cell.
    pub fn cell_rect(&self, row: u16, col: u16) -> Rect {
        let cell = self.cell_size as i32;
        Rect {
            x: self.frame.x + col as i32 * cell,
            y: self.frame.y + row as i32 * cell,
            w: cell,
            h: cell,
        }
    }

    /// Horizontal lines first, then vertical; both bound the cell area.
    pub fn grid_lines(&self) -> Vec<Line> {
        let cell = self.cell_size as i32;
        let (x0, y0) = (self.frame.x, self.frame.y);
        let width = self.grid_size.columns as i32 * cell;
        let height = self.grid_size.rows as i32 * cell;

        let horizontal = (0..=self.grid_size.rows as i32).map(|row| Line {
            start: (x0, y0 + row * cell),
            end: (x0 + width, y0 + row * cell),
        });
        let vertical = (0..=self.grid_size.columns as i32).map(|col| Line {
            start: (x0 + col * cell, y0),
            end: (x0 + col * cell, y0 + height),
        });
        horizontal.chain(vertical).collect()
    }

    /// Rectangles of every live cell, row by row.
    pub fn alive_rects(&self, grid: &Grid) -> Vec<Rect> {
        let size = grid.size();
        let mut rects = Vec::new();
        for row in 0..size.rows {
            for col in 0..size.columns {
                if grid.is_alive(row, col) {
                    rects.push(self.cell_rect(row, col));
                }
            }
        }
        rects
    }
}
