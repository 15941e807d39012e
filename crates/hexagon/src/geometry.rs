//! Tile dimension resolution
//!
//! A regular pointy-top hexagon with side `s` fits a tile of
//! `s·√3 × 2·s`. Callers give exactly one of width, height or side; the
//! other two are derived and all three are rounded down to an even
//! integer independently, so `height` is not always exactly `2·side`.

use tracing::debug;

use crate::constants::{SLANT_MARGIN, SQRT_3};
use crate::surface::PixelCanvas;
use crate::validation::{
    GeometryError, require_positive, require_within_max, round_down_even, validate_tile,
};

/// The caller's choice of which dimension drives the tile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DimensionRequest {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub side: Option<u32>,
}

impl DimensionRequest {
    pub fn width(width: u32) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }

    pub fn height(height: u32) -> Self {
        Self {
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn side(side: u32) -> Self {
        Self {
            side: Some(side),
            ..Self::default()
        }
    }
}

/// Validated tile dimensions, all even
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGeometry {
    width: u32,
    height: u32,
    side: u32,
}

impl TileGeometry {
    /// Validate explicit dimensions without any rounding
    pub fn new(width: u32, height: u32, side: u32) -> Result<Self, GeometryError> {
        validate_tile(width, height, side)?;
        Ok(Self {
            width,
            height,
            side,
        })
    }

    /// Derive the missing dimensions from the single one given
    pub fn resolve(request: DimensionRequest) -> Result<Self, GeometryError> {
        let (width, height, side) = match request {
            DimensionRequest {
                width: Some(width),
                height: None,
                side: None,
            } => {
                let side = require_positive("width", width)? as f64 / SQRT_3;
                (width as f64, 2.0 * side, side)
            }
            DimensionRequest {
                width: None,
                height: Some(height),
                side: None,
            } => {
                let side = require_positive("height", height)? as f64 / 2.0;
                (side * SQRT_3, height as f64, side)
            }
            DimensionRequest {
                width: None,
                height: None,
                side: Some(side),
            } => {
                let side = require_positive("side", side)? as f64;
                (side * SQRT_3, 2.0 * side, side)
            }
            DimensionRequest {
                width: None,
                height: None,
                side: None,
            } => return Err(GeometryError::NoDimension),
            _ => return Err(GeometryError::ConflictingDimensions),
        };

        require_within_max("width", width)?;
        require_within_max("height", height)?;
        require_within_max("side", side)?;

        let geometry = Self::new(
            round_down_even(width),
            round_down_even(height),
            round_down_even(side),
        )?;
        debug!(
            "Resolved {:?} to {}x{} tile with side {}",
            request, geometry.width, geometry.height, geometry.side
        );
        Ok(geometry)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Rows above the left and right vertical edges
    #[inline]
    pub fn vpad(&self) -> u32 {
        (self.height - self.side) / 2
    }

    /// Rows available to each slanted edge
    #[inline]
    pub fn slant_rows(&self) -> u32 {
        self.vpad() - SLANT_MARGIN
    }

    /// Columns available to each slanted edge
    #[inline]
    pub fn slant_columns(&self) -> u32 {
        self.width / 2 - SLANT_MARGIN
    }

    /// A blank canvas sized for this tile
    pub fn canvas(&self) -> PixelCanvas {
        PixelCanvas::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_from_side() {
        let geometry = TileGeometry::resolve(DimensionRequest::side(8)).unwrap();
        // 8·√3 = 13.86 rounds down to 12
        assert_eq!(geometry.width(), 12);
        assert_eq!(geometry.height(), 16);
        assert_eq!(geometry.side(), 8);
        assert_eq!(geometry.vpad(), 4);
        assert_eq!(geometry.slant_rows(), 2);
        assert_eq!(geometry.slant_columns(), 4);
    }

    #[test]
    fn test_resolve_from_height() {
        let geometry = TileGeometry::resolve(DimensionRequest::height(64)).unwrap();
        assert_eq!(geometry.side(), 32);
        // 32·√3 = 55.43
        assert_eq!(geometry.width(), 54);
        assert_eq!(geometry.height(), 64);
    }

    #[test]
    fn test_resolve_from_width() {
        let geometry = TileGeometry::resolve(DimensionRequest::width(110)).unwrap();
        // 110/√3 = 63.51, twice that is 127.02
        assert_eq!(geometry.side(), 62);
        assert_eq!(geometry.height(), 126);
        assert_eq!(geometry.width(), 110);
    }

    #[test]
    fn test_odd_input_is_rounded_down() {
        let geometry = TileGeometry::resolve(DimensionRequest::height(33)).unwrap();
        assert_eq!(geometry.height(), 32);
        assert_eq!(geometry.side(), 16);
    }

    #[test]
    fn test_side_height_fixed_point() {
        for side in (6..200).step_by(2) {
            let from_side = TileGeometry::resolve(DimensionRequest::side(side)).unwrap();
            let from_height =
                TileGeometry::resolve(DimensionRequest::height(from_side.height())).unwrap();
            assert_eq!(from_height.side(), side);
            assert_eq!(from_height.width(), from_side.width());
        }
    }

    #[test]
    fn test_conflicting_dimensions_rejected() {
        let request = DimensionRequest {
            width: Some(4),
            height: Some(4),
            side: None,
        };
        assert_eq!(
            TileGeometry::resolve(request),
            Err(GeometryError::ConflictingDimensions)
        );

        let request = DimensionRequest {
            width: Some(100),
            height: Some(100),
            side: Some(100),
        };
        assert_eq!(
            TileGeometry::resolve(request),
            Err(GeometryError::ConflictingDimensions)
        );
    }

    #[test]
    fn test_missing_dimension_rejected() {
        assert_eq!(
            TileGeometry::resolve(DimensionRequest::default()),
            Err(GeometryError::NoDimension)
        );
    }

    #[test]
    fn test_zero_rejected() {
        assert_eq!(
            TileGeometry::resolve(DimensionRequest::side(0)),
            Err(GeometryError::NonPositive { name: "side" })
        );
    }

    #[test]
    fn test_huge_side_rejected_before_rounding() {
        assert_eq!(
            TileGeometry::resolve(DimensionRequest::side(4_000_000_000)),
            Err(GeometryError::TooLarge {
                name: "width",
                value: 6_928_203_230
            })
        );
        // 9460·√3 = 16385.2, just past the limit
        assert!(matches!(
            TileGeometry::resolve(DimensionRequest::side(9_460)),
            Err(GeometryError::TooLarge { name: "width", .. })
        ));
        assert!(matches!(
            TileGeometry::resolve(DimensionRequest::width(u32::MAX)),
            Err(GeometryError::TooLarge { name: "width", .. })
        ));
        let geometry = TileGeometry::resolve(DimensionRequest::height(16_384)).unwrap();
        assert_eq!((geometry.width(), geometry.side()), (14_188, 8_192));
    }

    #[test]
    fn test_minimal_side() {
        // side 4 gives vpad 2, side 6 gives vpad 3
        assert!(matches!(
            TileGeometry::resolve(DimensionRequest::side(4)),
            Err(GeometryError::PaddingTooSmall { vpad: 2, .. })
        ));
        let geometry = TileGeometry::resolve(DimensionRequest::side(6)).unwrap();
        assert_eq!((geometry.width(), geometry.height()), (10, 12));
        assert_eq!(geometry.vpad(), 3);
    }

    #[test]
    fn test_canvas_matches_tile() {
        let canvas = TileGeometry::new(12, 16, 8).unwrap().canvas();
        assert_eq!((canvas.width(), canvas.height()), (12, 16));
    }
}
