use super::{Cell, CellCoord, GridError};
use rand::Rng;

/// Fixed-size board of cells stored row-major.
/// Dimensions never change after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    /// Both dimensions must be positive; use [`Grid::try_new`] for unchecked input.
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0, "empty {width}x{height} grid");
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Like [`Grid::new`] but refuses a zero-sized board
    pub fn try_new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        Ok(Self::new(width, height))
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Bounds check shared by every accessor; returns the flat index.
    fn index_of(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if self.contains(x, y) {
            Ok(y * self.width + x)
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Validate a coordinate without touching any cell
    pub fn check(&self, coord: CellCoord) -> Result<(), GridError> {
        self.index_of(coord.x, coord.y).map(|_| ())
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Cell, GridError> {
        let idx = self.index_of(x, y)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GridError> {
        let idx = self.index_of(x, y)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip one cell and return its new state
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<Cell, GridError> {
        let idx = self.index_of(x, y)?;
        let next = self.cells[idx].toggle();
        self.cells[idx] = next;
        Ok(next)
    }

    /// Liveness lookup used while counting neighbors.
    /// Anything off the board reads as dead.
    pub(crate) fn is_alive_at(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        self.contains(x, y) && self.cells[y * self.width + x].is_alive()
    }

    /// Fresh all-dead grid with the same dimensions
    pub fn cleared(&self) -> Self {
        Self::new(self.width, self.height)
    }

    /// Build a grid of the same size from a row-major cell buffer
    pub(crate) fn with_cells(&self, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len());
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Fill every cell independently, alive with probability `density`
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (CellCoord, Cell)> + '_ {
        self.cells.iter().enumerate().map(move |(idx, &cell)| {
            (CellCoord::new(idx % self.width, idx / self.width), cell)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(7, 4);
        assert_eq!(grid.dimensions(), (7, 4));
        assert_eq!(grid.population(), 0);
        assert!(grid.iter_cells().all(|(_, c)| c == Cell::Dead));
    }

    #[test]
    fn test_try_new_rejects_zero() {
        assert_eq!(
            Grid::try_new(0, 3),
            Err(GridError::EmptyDimensions { width: 0, height: 3 })
        );
        assert!(Grid::try_new(1, 1).is_ok());
    }

    #[test]
    #[should_panic(expected = "empty 0x4 grid")]
    #[cfg(debug_assertions)]
    fn test_new_rejects_zero_in_debug() {
        let _ = Grid::new(0, 4);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(3, 2);
        assert!(grid.get(2, 1).is_ok());
        assert_eq!(
            grid.get(3, 0),
            Err(GridError::OutOfBounds { x: 3, y: 0, width: 3, height: 2 })
        );
        assert!(grid.get(0, 2).is_err());
    }

    #[test]
    fn test_set_out_of_bounds_leaves_grid_untouched() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.set(5, 5, Cell::Alive).is_err());
        assert_eq!(grid, Grid::new(3, 3));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(4, 4);
        grid.set(1, 2, Cell::Alive).unwrap();
        assert_eq!(grid.get(1, 2), Ok(Cell::Alive));
        assert_eq!(grid.get(2, 1), Ok(Cell::Dead));
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut grid = Grid::new(5, 5);
        grid.set(3, 3, Cell::Alive).unwrap();
        let before = grid.clone();

        for (x, y) in [(0, 0), (3, 3), (4, 1)] {
            let flipped = grid.toggle(x, y).unwrap();
            assert_eq!(grid.get(x, y), Ok(flipped));
            grid.toggle(x, y).unwrap();
        }
        assert_eq!(grid, before);
        assert!(grid.toggle(5, 0).is_err());
    }

    #[test]
    fn test_is_alive_at_treats_outside_as_dead() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, Cell::Alive).unwrap();
        assert!(grid.is_alive_at(0, 0));
        assert!(!grid.is_alive_at(-1, 0));
        assert!(!grid.is_alive_at(0, -1));
        assert!(!grid.is_alive_at(2, 0));
    }

    #[test]
    fn test_iter_cells_positions() {
        let mut grid = Grid::new(3, 2);
        grid.set(2, 1, Cell::Alive).unwrap();
        let alive: Vec<_> = grid
            .iter_cells()
            .filter(|(_, c)| c.is_alive())
            .map(|(p, _)| p)
            .collect();
        assert_eq!(alive, vec![CellCoord::new(2, 1)]);
        assert_eq!(grid.iter_cells().count(), 6);
    }

    #[test]
    fn test_randomize_is_seeded_and_bounded() {
        let mut a = Grid::new(20, 20);
        let mut b = Grid::new(20, 20);
        a.randomize(&mut StdRng::seed_from_u64(7), 0.3);
        b.randomize(&mut StdRng::seed_from_u64(7), 0.3);
        assert_eq!(a, b);

        a.randomize(&mut StdRng::seed_from_u64(1), 0.0);
        assert_eq!(a.population(), 0);
        a.randomize(&mut StdRng::seed_from_u64(1), 1.0);
        assert_eq!(a.population(), 400);
    }

    #[test]
    fn test_cleared_keeps_dimensions() {
        let mut grid = Grid::new(6, 3);
        grid.set(1, 1, Cell::Alive).unwrap();
        let cleared = grid.cleared();
        assert_eq!(cleared.dimensions(), (6, 3));
        assert_eq!(cleared.population(), 0);
    }
}
