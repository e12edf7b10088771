use std::time::Duration;

use crate::error::{Result, SnakeError};
use crate::surface::{Color, Font};

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Largest accepted grid edge in cells.
pub const MAX_GRID_EDGE: u16 = 255;

/// Default edge length of one grid cell in surface pixels.
pub const DEFAULT_CELL_SIZE_PX: u32 = 20;

/// Largest accepted cell edge in pixels. Keeps a full-size board inside `i32`.
pub const MAX_CELL_SIZE_PX: u32 = 1_024;

/// Default tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum accepted tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Rejection-sampling attempts before food placement scans for free cells.
pub const MAX_FOOD_SPAWN_ATTEMPTS: u32 = 1_000;

/// Colors used by the board renderer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub food: Color,
    pub snake: Color,
    pub head_outline: Color,
    pub overlay_text: Color,
}

pub const PALETTE: Palette = Palette {
    background: Color::from_hex(0x22_22_22),
    food: Color::from_hex(0xe6_39_46),
    snake: Color::from_hex(0x00_c8_53),
    head_outline: Color::from_hex(0xff_ff_ff),
    overlay_text: Color::from_hex(0xff_ff_ff),
};

/// Outline width around the head cell, in pixels.
pub const HEAD_OUTLINE_WIDTH_PX: u32 = 2;

/// Title font for the game-over overlay: 32px on a 20px cell.
#[must_use]
pub fn game_over_font(cell_size_px: u32) -> Font {
    Font {
        size_px: (cell_size_px.saturating_mul(8) / 5).max(1),
        bold: true,
    }
}

/// Font for the score and restart lines: one cell tall.
#[must_use]
pub fn overlay_font(cell_size_px: u32) -> Font {
    Font {
        size_px: cell_size_px.max(1),
        bold: false,
    }
}

/// Vertical distance between overlay lines: 30px on a 20px cell.
///
/// Always at least one cell, so consecutive lines never share a grid row.
#[must_use]
pub fn overlay_line_spacing_px(cell_size_px: u32) -> u32 {
    (cell_size_px.saturating_mul(3) / 2).max(cell_size_px).max(1)
}

pub const GAME_OVER_TEXT: &str = "Game Over!";
pub const RESTART_HINT_TEXT: &str = "Press Restart or any Arrow Key";

/// Validated board and timing settings for one session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BoardConfig {
    pub grid: GridSize,
    pub cell_size_px: u32,
    pub tick_interval: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            cell_size_px: DEFAULT_CELL_SIZE_PX,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
        }
    }
}

impl BoardConfig {
    /// Builds a config from raw values, rejecting unusable combinations.
    pub fn new(width: u16, height: u16, cell_size_px: u32, tick_ms: u64) -> Result<Self> {
        let grid = GridSize { width, height };
        if width == 0
            || height == 0
            || width > MAX_GRID_EDGE
            || height > MAX_GRID_EDGE
            || grid.total_cells() < 2
        {
            return Err(SnakeError::InvalidGrid { width, height });
        }
        if cell_size_px == 0 || cell_size_px > MAX_CELL_SIZE_PX {
            return Err(SnakeError::InvalidCellSize(cell_size_px));
        }
        if tick_ms < MIN_TICK_INTERVAL_MS {
            return Err(SnakeError::InvalidTickInterval {
                requested_ms: tick_ms,
                min_ms: MIN_TICK_INTERVAL_MS,
            });
        }

        Ok(Self {
            grid,
            cell_size_px,
            tick_interval: Duration::from_millis(tick_ms),
        })
    }

    /// Surface size in pixels as `(width, height)`.
    #[must_use]
    pub fn surface_size_px(&self) -> (u32, u32) {
        (
            u32::from(self.grid.width).saturating_mul(self.cell_size_px),
            u32::from(self.grid.height).saturating_mul(self.cell_size_px),
        )
    }
}
