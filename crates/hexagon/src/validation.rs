use crate::constants::{MAX_DIMENSION, MIN_HEIGHT_EXCLUSIVE, MIN_VPAD_EXCLUSIVE, MIN_WIDTH};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("One of width, height or side has to be specified")]
    NoDimension,
    #[error("Only one of width, height or side can be specified")]
    ConflictingDimensions,
    #[error("The {name} has to be a positive integer")]
    NonPositive { name: &'static str },
    #[error("The {name} of {value} exceeds the maximum of {}", MAX_DIMENSION)]
    TooLarge { name: &'static str, value: u64 },
    #[error("The {name} has to be even, got {value}")]
    Odd { name: &'static str, value: u32 },
    #[error("Tile height {height} is too small, it has to exceed {}", MIN_HEIGHT_EXCLUSIVE)]
    HeightTooSmall { height: u32 },
    #[error("Tile width {width} is too small, it has to be at least {}", MIN_WIDTH)]
    WidthTooSmall { width: u32 },
    #[error(
        "Side {side} leaves a vertical padding of {vpad} in a tile of height {height}, \
         it has to exceed {}",
        MIN_VPAD_EXCLUSIVE
    )]
    PaddingTooSmall { side: u32, height: u32, vpad: u32 },
}

/// Floor `n` and drop it to the nearest even integer below, e.g. 13.86 -> 12
pub fn round_down_even(n: f64) -> u32 {
    let floor = n.floor().max(0.0) as u32;
    floor - floor % 2
}

/// Reject zero for a caller-supplied dimension
pub fn require_positive(name: &'static str, value: u32) -> Result<u32, GeometryError> {
    if value == 0 {
        return Err(GeometryError::NonPositive { name });
    }
    Ok(value)
}

/// Reject a derived dimension before it is rounded into a `u32`
pub fn require_within_max(name: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value > MAX_DIMENSION as f64 {
        return Err(GeometryError::TooLarge {
            name,
            value: value as u64,
        });
    }
    Ok(value)
}

/// Check every precondition the rasterizer relies on
///
/// `vpad > 2` keeps the slope's vertical run non-zero; checking it here
/// means a bad tile is rejected before anything is allocated.
pub fn validate_tile(width: u32, height: u32, side: u32) -> Result<(), GeometryError> {
    for (name, value) in [("width", width), ("height", height), ("side", side)] {
        require_positive(name, value)?;
        require_within_max(name, value as f64)?;
        if value % 2 != 0 {
            return Err(GeometryError::Odd { name, value });
        }
    }

    if height <= MIN_HEIGHT_EXCLUSIVE {
        return Err(GeometryError::HeightTooSmall { height });
    }

    if width < MIN_WIDTH {
        return Err(GeometryError::WidthTooSmall { width });
    }

    let vpad = height.saturating_sub(side) / 2;
    if side >= height || vpad <= MIN_VPAD_EXCLUSIVE {
        return Err(GeometryError::PaddingTooSmall { side, height, vpad });
    }

    Ok(())
}
