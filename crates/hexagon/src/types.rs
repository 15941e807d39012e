use hexagon_config::{Palette, Rgba};

/// Region labels written by the rasterizer and the mask deriver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Outline pixel of the template
    Border,
    /// Mask pixel on or inside the outline
    Middle,
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl Region {
    /// The regions a mask pixel can take
    pub const MASK: [Region; 5] = [
        Region::Middle,
        Region::UpperLeft,
        Region::UpperRight,
        Region::LowerLeft,
        Region::LowerRight,
    ];

    /// Color of this region in the given palette
    pub fn color(self, palette: &Palette) -> Rgba {
        match self {
            Region::Border => palette.border,
            Region::Middle => palette.middle,
            Region::UpperLeft => palette.upper_left,
            Region::UpperRight => palette.upper_right,
            Region::LowerLeft => palette.lower_left,
            Region::LowerRight => palette.lower_right,
        }
    }

    /// Look a mask color back up; `Border` is never returned
    pub fn from_mask_color(color: Rgba, palette: &Palette) -> Option<Region> {
        Self::MASK
            .into_iter()
            .find(|region| region.color(palette) == color)
    }

    /// True for the four corner regions outside the hexagon
    pub fn is_quadrant(self) -> bool {
        !matches!(self, Region::Border | Region::Middle)
    }
}
