use std::ops::Range;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color as TermColor, Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::surface::{Color, DrawSurface, Font, TextAlign};

/// Terminal columns used for one grid cell, so cells look roughly square.
pub const COLUMNS_PER_CELL: u16 = 2;

const STROKE_LEFT: &str = "[";
const STROKE_RIGHT: &str = "]";

/// [`DrawSurface`] backed by a region of a ratatui [`Buffer`].
///
/// One grid cell of `cell_size_px` pixels becomes two columns by one row.
/// Fills paint the cell background; strokes bracket the covered cells in the
/// stroke color; text lands on the row holding its baseline.
pub struct TerminalCanvas<'a> {
    buffer: &'a mut Buffer,
    area: Rect,
    cell_size_px: u32,
    background: Color,
}

impl<'a> TerminalCanvas<'a> {
    #[must_use]
    pub fn new(buffer: &'a mut Buffer, area: Rect, cell_size_px: u32, background: Color) -> Self {
        Self {
            buffer,
            area,
            cell_size_px: cell_size_px.max(1),
            background,
        }
    }

    /// Terminal size needed to show a `width` x `height` cell grid.
    #[must_use]
    pub fn required_size(width: u16, height: u16) -> (u16, u16) {
        (width.saturating_mul(COLUMNS_PER_CELL), height)
    }

    fn columns(&self, x: i32, width: u32) -> Range<u16> {
        project(
            x,
            width,
            self.cell_size_px,
            u32::from(COLUMNS_PER_CELL),
            self.area.width,
        )
    }

    fn rows(&self, y: i32, height: u32) -> Range<u16> {
        project(y, height, self.cell_size_px, 1, self.area.height)
    }

    fn paint(&mut self, columns: Range<u16>, rows: Range<u16>, color: Color) {
        let bg = term_color(color);
        for row in rows {
            for column in columns.clone() {
                if let Some(cell) = self
                    .buffer
                    .cell_mut((self.area.x + column, self.area.y + row))
                {
                    cell.set_symbol(" ").set_bg(bg);
                }
            }
        }
    }
}

impl DrawSurface for TerminalCanvas<'_> {
    fn clear(&mut self, width: u32, height: u32) {
        let columns = self.columns(0, width);
        let rows = self.rows(0, height);
        let bg = term_color(self.background);

        for row in rows {
            for column in columns.clone() {
                if let Some(cell) = self
                    .buffer
                    .cell_mut((self.area.x + column, self.area.y + row))
                {
                    cell.reset();
                    cell.set_bg(bg);
                }
            }
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        let columns = self.columns(x, width);
        let rows = self.rows(y, height);
        self.paint(columns, rows, color);
    }

    fn stroke_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
        _line_width: u32,
    ) {
        let columns = self.columns(x, width);
        if columns.is_empty() {
            return;
        }

        let style = Style::new()
            .fg(term_color(color))
            .add_modifier(Modifier::BOLD);
        let left = self.area.x + columns.start;
        let right = self.area.x + columns.end - 1;

        for row in self.rows(y, height) {
            let y = self.area.y + row;
            if let Some(cell) = self.buffer.cell_mut((left, y)) {
                cell.set_symbol(STROKE_LEFT).set_style(style);
            }
            if right != left {
                if let Some(cell) = self.buffer.cell_mut((right, y)) {
                    cell.set_symbol(STROKE_RIGHT).set_style(style);
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: Font, color: Color, align: TextAlign) {
        let row = i64::from(y).div_euclid(i64::from(self.cell_size_px));
        let Ok(row) = u16::try_from(row) else {
            return;
        };
        if row >= self.area.height {
            return;
        }

        let anchor = (i64::from(x) * i64::from(COLUMNS_PER_CELL))
            .div_euclid(i64::from(self.cell_size_px));
        let width = i64::try_from(text.width()).unwrap_or(i64::MAX);
        let start = match align {
            TextAlign::Left => anchor,
            TextAlign::Center => anchor - width / 2,
            TextAlign::Right => anchor - width,
        }
        .clamp(0, i64::from(self.area.width));
        let Ok(start) = u16::try_from(start) else {
            return;
        };

        let mut style = Style::new().fg(term_color(color));
        if font.bold {
            style = style.add_modifier(Modifier::BOLD);
        }

        let available = usize::from(self.area.width - start);
        self.buffer.set_stringn(
            self.area.x + start,
            self.area.y + row,
            text,
            available,
            style,
        );
    }
}

/// Maps a pixel span onto terminal units, clipped to `0..limit`.
fn project(start: i32, len: u32, cell_size_px: u32, units_per_cell: u32, limit: u16) -> Range<u16> {
    let cell = i64::from(cell_size_px);
    let scale = i64::from(units_per_cell);
    let begin = (i64::from(start) * scale).div_euclid(cell);
    let end = ((i64::from(start) + i64::from(len)) * scale + cell - 1).div_euclid(cell);

    let clip = |value: i64| u16::try_from(value.clamp(0, i64::from(limit))).unwrap_or(limit);
    clip(begin)..clip(end)
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb(color.r, color.g, color.b)
}
