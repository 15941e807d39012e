//! Quadrant mask derived from a template outline
//!
//! Every pixel of the mask tells which tile shows through at that
//! position when hexagons are laid out in a grid: the hexagon itself
//! (middle) or the neighbour in one of the four corners.

use hexagon_config::{Palette, Rgba};
use tracing::debug;

use crate::surface::PixelCanvas;
use crate::types::Region;

/// A mask canvas together with the palette it was painted with
#[derive(Debug, Clone)]
pub struct HexagonMask {
    canvas: PixelCanvas,
    palette: Palette,
}

impl HexagonMask {
    /// Derive the mask from a template that already has its outline drawn
    ///
    /// Each row of the left half is scanned once. Once the scan meets a
    /// border pixel the rest of that row, and its mirror on the right,
    /// is painted as middle.
    pub fn derive(template: &PixelCanvas, palette: &Palette) -> Self {
        let width = template.width();
        let height = template.height();
        let mut canvas = PixelCanvas::new(width, height);

        paint_half(
            &mut canvas,
            template,
            palette,
            0..height / 2,
            palette.upper_left,
            palette.upper_right,
        );
        paint_half(
            &mut canvas,
            template,
            palette,
            height / 2..height,
            palette.lower_left,
            palette.lower_right,
        );

        debug!(
            "Derived {}x{} mask, {} middle pixels",
            width,
            height,
            canvas.count(palette.middle)
        );

        Self {
            canvas,
            palette: *palette,
        }
    }

    /// Region at the given pixel, None outside the tile or for a color
    /// the palette does not know
    pub fn region_at(&self, x: u32, y: u32) -> Option<Region> {
        self.canvas
            .try_get(x, y)
            .and_then(|color| Region::from_mask_color(color, &self.palette))
    }

    /// Whether the pixel lies on or inside the hexagon outline
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.canvas.try_get(x, y) == Some(self.palette.middle)
    }

    /// Whether a point in tile space lies on or inside the hexagon
    ///
    /// A fractional point counts as inside when either the pixel it
    /// floors to or the pixel it ceils to is inside.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;

        if !(0.0..width).contains(&x) || !(0.0..height).contains(&y) {
            return false;
        }

        self.contains(x.floor() as u32, y.floor() as u32)
            || self.contains(x.ceil() as u32, y.ceil() as u32)
    }

    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    pub fn into_canvas(self) -> PixelCanvas {
        self.canvas
    }
}

fn paint_half(
    mask: &mut PixelCanvas,
    template: &PixelCanvas,
    palette: &Palette,
    rows: std::ops::Range<u32>,
    left: Rgba,
    right: Rgba,
) {
    let width = template.width();

    for y in rows {
        let mut left_color = left;
        let mut right_color = right;

        for x in 0..width / 2 {
            if template.get(x, y) == palette.border {
                left_color = palette.middle;
                right_color = palette.middle;
            }

            mask.set(x, y, left_color);
            mask.set(width - x - 1, y, right_color);
        }
    }
}
