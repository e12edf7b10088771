/// RGB color as used by draw surfaces.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Builds a color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }
}

/// Font request for text drawing. Surfaces map this to whatever they can show.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Font {
    pub size_px: u32,
    pub bold: bool,
}

/// Horizontal anchoring of text relative to its `x` coordinate.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Bitmap-like surface the renderer draws on, addressed in pixels.
pub trait DrawSurface {
    /// Clears a `width` x `height` pixel area starting at the origin.
    fn clear(&mut self, width: u32, height: u32);

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color);

    /// Outlines a rectangle with a stroke of `line_width` pixels.
    fn stroke_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
        line_width: u32,
    );

    /// Draws `text` with its baseline at `y`, anchored at `x` per `align`.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: Font, color: Color, align: TextAlign);
}
