/// Rows and columns reserved around each slanted edge: the tip row and the
/// vertical-edge column on one end, the cursor start offset on the other.
pub const SLANT_MARGIN: u32 = 2;

/// Tile height must be strictly greater than this.
pub const MIN_HEIGHT_EXCLUSIVE: u32 = 4;

/// Vertical padding must be strictly greater than this, otherwise the
/// slanted edges have no rows to step through.
pub const MIN_VPAD_EXCLUSIVE: u32 = SLANT_MARGIN;

/// Smallest usable tile width; below it the horizontal run goes negative.
pub const MIN_WIDTH: u32 = 2 * SLANT_MARGIN;

/// Width to height ratio of a pointy-top regular hexagon, per unit of side.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Largest width, height or side a tile may have.
pub const MAX_DIMENSION: u32 = 16_384;
