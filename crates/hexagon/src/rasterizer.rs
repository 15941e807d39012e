//! Hexagon outline rasterizer
//!
//! Draws a pointy-top hexagon whose vertical sides are the left and right
//! columns of the tile and whose tips touch the top and bottom rows. Only
//! integer pixel writes are used: the four slanted edges are stepped
//! together, Bresenham style, with the fractional part of the slope
//! collected in an error accumulator.

use hexagon_config::{Palette, Rgba};
use tracing::{debug, trace};

use crate::geometry::TileGeometry;
use crate::surface::PixelCanvas;
use crate::validation::GeometryError;

/// Draw the outline of a hexagon with the given side onto `canvas`
///
/// The canvas must be blank or at least free of anything that should
/// survive; only border pixels are written. Nothing is drawn if the
/// canvas and side do not form a valid tile.
pub fn draw_hexagon(
    canvas: &mut PixelCanvas,
    side: u32,
    border: Rgba,
) -> Result<(), GeometryError> {
    let geometry = TileGeometry::new(canvas.width(), canvas.height(), side)?;
    rasterize(canvas, &geometry, border);
    Ok(())
}

/// Allocate a canvas for `geometry` and draw the template outline on it
pub fn render_template(geometry: &TileGeometry, palette: &Palette) -> PixelCanvas {
    let mut canvas = geometry.canvas();
    rasterize(&mut canvas, geometry, palette.border);
    canvas
}

fn rasterize(canvas: &mut PixelCanvas, geometry: &TileGeometry, border: Rgba) {
    let width = geometry.width();
    let height = geometry.height();
    let side = geometry.side();
    let vpad = geometry.vpad();

    // lateral sides
    for y in vpad..vpad + side {
        canvas.set(0, y, border);
        canvas.set(width - 1, y, border);
    }

    // tips
    canvas.set(width / 2 - 1, 0, border);
    canvas.set(width / 2, 0, border);
    canvas.set(width / 2 - 1, height - 1, border);
    canvas.set(width / 2, height - 1, border);

    // slanted sides
    let h_diff = geometry.slant_rows();
    let w_diff = geometry.slant_columns();
    let step_diff = w_diff as f64 / h_diff as f64;
    let step_floor = step_diff.floor() as u32;
    let step_fract = step_diff - step_floor as f64;

    debug!(
        "Rasterizing {}x{} hexagon, side {}, vpad {}, {:.3} columns per row",
        width, height, side, vpad, step_diff
    );

    // Edge cursors: top-left (x_left, y_top), top-right (x_right, y_top),
    // bottom-left (x_left, y_bottom), bottom-right (x_right, y_bottom).
    // The bottom pair mirrors the top pair so all four stay in lock-step.
    let mut x_left = 1;
    let mut x_right = width - 2;
    let mut y_top = 1 + h_diff;
    let mut y_bottom = height - 1 - y_top;

    let x_target = width / 2 - 2;
    let y_target = 1;

    let mut x_debt = 0.0_f64;

    while x_left < x_target && y_top > y_target {
        for i in 0..step_floor {
            mark_edges(canvas, border, x_left + i, x_right - i, y_top, y_bottom);
        }

        x_left += step_floor;
        x_right -= step_floor;
        y_top -= 1;
        y_bottom += 1;

        x_debt += step_fract;

        // Spending one unit of debt draws two pixels, not one.
        if x_debt > 1.0 {
            x_debt -= 1.0;
            trace!("Carry at row {}, x {}", y_top, x_left);

            mark_edges(canvas, border, x_left, x_right, y_top, y_bottom);
            x_left += 1;
            x_right -= 1;
            mark_edges(canvas, border, x_left, x_right, y_top, y_bottom);
        }
    }

    mark_edges(canvas, border, x_left, x_right, y_top, y_bottom);
}

#[inline]
fn mark_edges(
    canvas: &mut PixelCanvas,
    border: Rgba,
    x_left: u32,
    x_right: u32,
    y_top: u32,
    y_bottom: u32,
) {
    canvas.set(x_left, y_top, border);
    canvas.set(x_right, y_top, border);
    canvas.set(x_left, y_bottom, border);
    canvas.set(x_right, y_bottom, border);
}
