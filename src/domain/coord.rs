/// Position of a cell on the grid, column first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub x: usize,
    pub y: usize,
}

impl CellCoord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Convert a pixel position into the cell under it by floor-dividing each
    /// axis by `cell_size`. Positions left of or above the origin, and
    /// non-finite ones, have no cell.
    pub fn from_pixel(px: f32, py: f32, cell_size: f32) -> Option<Self> {
        let on_screen = px.is_finite() && py.is_finite() && px >= 0.0 && py >= 0.0;
        if !on_screen || cell_size.is_nan() || cell_size <= 0.0 {
            return None;
        }
        let x = (px / cell_size).floor() as usize;
        let y = (py / cell_size).floor() as usize;
        Some(Self { x, y })
    }
}

impl From<(usize, usize)> for CellCoord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}
