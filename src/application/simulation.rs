use log::{debug, info};
use rand::Rng;

use crate::domain::{CellCoord, Grid, GridError, next_generation};
use super::{PresentationAdapter, TickTimer};

/// What the board is currently doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Paused with cell editing enabled
    Edit,
    #[default]
    Stopped,
    Running,
}

impl Mode {
    pub const fn is_running(self) -> bool {
        matches!(self, Mode::Running)
    }

    pub const fn is_editing(self) -> bool {
        matches!(self, Mode::Edit)
    }
}

/// The two supported simulation speeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TickRate {
    /// One generation per second
    #[default]
    Slow,
    /// Four generations per second
    Fast,
}

impl TickRate {
    pub const fn from_fast(fast: bool) -> Self {
        if fast { TickRate::Fast } else { TickRate::Slow }
    }

    pub const fn is_fast(self) -> bool {
        matches!(self, TickRate::Fast)
    }

    pub const fn generations_per_second(self) -> u32 {
        match self {
            TickRate::Slow => 1,
            TickRate::Fast => 4,
        }
    }

    /// Seconds between generations
    pub fn interval(self) -> f32 {
        1.0 / self.generations_per_second() as f32
    }
}

/// SimulationClock owns the board and the edit/run state machine.
///
/// Every operation takes the presentation adapter by reference and notifies
/// it after the state change. Ticks only happen while `Running`.
pub struct SimulationClock {
    grid: Grid,
    mode: Mode,
    rate: TickRate,
    timer: TickTimer,
    generation: u64,
}

impl SimulationClock {
    /// Start stopped, slow, on an all-dead grid
    pub fn new(grid: Grid) -> Self {
        let rate = TickRate::default();
        Self {
            grid,
            mode: Mode::default(),
            rate,
            timer: TickTimer::new(rate.interval()),
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn rate(&self) -> TickRate {
        self.rate
    }

    /// Generations applied since the last clear or randomize
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    fn enter(&mut self, mode: Mode, presenter: &mut dyn PresentationAdapter) {
        if self.mode != mode {
            info!("mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
            presenter.on_mode_changed(mode);
        }
    }

    /// Begin ticking at the current rate. Ignored while already running.
    pub fn start(&mut self, presenter: &mut dyn PresentationAdapter) {
        if self.mode.is_running() {
            return;
        }
        self.timer.start();
        self.enter(Mode::Running, presenter);
    }

    /// Halt ticking; the grid is kept as is
    pub fn stop(&mut self, presenter: &mut dyn PresentationAdapter) {
        if self.mode == Mode::Stopped {
            return;
        }
        self.timer.stop();
        self.enter(Mode::Stopped, presenter);
    }

    /// Enter edit mode (stopping first if running) or leave it
    pub fn toggle_edit(&mut self, presenter: &mut dyn PresentationAdapter) {
        self.timer.stop();
        let next = if self.mode.is_editing() { Mode::Stopped } else { Mode::Edit };
        self.enter(next, presenter);
    }

    /// Kill every cell. A running board stops; edit mode is kept.
    pub fn clear(&mut self, presenter: &mut dyn PresentationAdapter) {
        self.reset_grid(presenter);
        info!("grid cleared");
        presenter.on_grid_replaced(&self.grid);
    }

    /// Like `clear`, then bring each cell to life with probability `density`
    pub fn randomize<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        density: f64,
        presenter: &mut dyn PresentationAdapter,
    ) {
        self.reset_grid(presenter);
        self.grid.randomize(rng, density);
        info!("grid randomized, {} cells alive", self.grid.population());
        presenter.on_grid_replaced(&self.grid);
    }

    fn reset_grid(&mut self, presenter: &mut dyn PresentationAdapter) {
        self.timer.stop();
        if self.mode.is_running() {
            self.enter(Mode::Stopped, presenter);
        }
        self.grid = self.grid.cleared();
        self.generation = 0;
    }

    /// Switch between 1 and 4 generations per second without restarting
    pub fn set_rate(&mut self, fast: bool) {
        let rate = TickRate::from_fast(fast);
        if rate != self.rate {
            info!("rate set to {} gen/s", rate.generations_per_second());
            self.rate = rate;
            self.timer.set_interval(rate.interval());
        }
    }

    /// Advance one generation. Does nothing unless running.
    pub fn tick(&mut self, presenter: &mut dyn PresentationAdapter) -> bool {
        if !self.mode.is_running() {
            return false;
        }
        self.grid = next_generation(&self.grid);
        self.generation += 1;
        debug!("generation {} ({} alive)", self.generation, self.grid.population());
        presenter.on_grid_replaced(&self.grid);
        true
    }

    /// Feed frame time to the timer and tick at most once
    pub fn update(&mut self, delta_time: f32, presenter: &mut dyn PresentationAdapter) -> bool {
        if self.timer.advance(delta_time) {
            self.tick(presenter)
        } else {
            false
        }
    }

    /// Flip the cell at `coord` while editing.
    ///
    /// The coordinate is checked against the grid first and an invalid one is
    /// returned as `OutOfBounds` with nothing changed. Outside edit mode, or
    /// while an overlay is shown, the click is ignored and `Ok(false)` is
    /// returned.
    pub fn toggle_cell_at(
        &mut self,
        coord: CellCoord,
        presenter: &mut dyn PresentationAdapter,
    ) -> Result<bool, GridError> {
        self.grid.check(coord)?;
        if !self.mode.is_editing() || presenter.is_overlay_visible() {
            return Ok(false);
        }
        let cell = self.grid.toggle(coord.x, coord.y)?;
        presenter.on_cell_changed(coord, cell.is_alive());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::presenter::recording::Recorder;
    use crate::domain::Cell;
    use rand::{SeedableRng, rngs::StdRng};

    fn editing_clock(width: usize, height: usize, rec: &mut Recorder) -> SimulationClock {
        let mut clock = SimulationClock::new(Grid::new(width, height));
        clock.toggle_edit(rec);
        clock
    }

    fn click(clock: &mut SimulationClock, rec: &mut Recorder, cells: &[(usize, usize)]) {
        for &cell in cells {
            assert_eq!(clock.toggle_cell_at(cell.into(), rec), Ok(true));
        }
    }

    #[test]
    fn test_initial_state() {
        let clock = SimulationClock::new(Grid::new(4, 4));
        assert_eq!(clock.mode(), Mode::Stopped);
        assert_eq!(clock.rate(), TickRate::Slow);
        assert_eq!(clock.generation(), 0);
    }

    #[test]
    fn test_rates() {
        assert_eq!(TickRate::Slow.interval(), 1.0);
        assert_eq!(TickRate::Fast.interval(), 0.25);
        assert!(TickRate::from_fast(true).is_fast());
    }

    #[test]
    fn test_blinker_through_clock() {
        let mut rec = Recorder::default();
        let mut clock = editing_clock(5, 5, &mut rec);
        click(&mut clock, &mut rec, &[(2, 1), (2, 2), (2, 3)]);
        assert_eq!(rec.cells.len(), 3);

        clock.start(&mut rec);
        assert_eq!(clock.mode(), Mode::Running);
        assert!(clock.tick(&mut rec));

        let grid = clock.grid();
        for (x, y) in [(1, 2), (2, 2), (3, 2)] {
            assert_eq!(grid.get(x, y), Ok(Cell::Alive));
        }
        assert_eq!(grid.get(2, 1), Ok(Cell::Dead));
        assert_eq!(grid.get(2, 3), Ok(Cell::Dead));
        assert_eq!(clock.generation(), 1);
        assert_eq!(rec.replaced, 1);
    }

    #[test]
    fn test_clear_while_running() {
        let mut rec = Recorder::default();
        let mut clock = editing_clock(6, 6, &mut rec);
        click(&mut clock, &mut rec, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        clock.start(&mut rec);
        clock.tick(&mut rec);

        clock.clear(&mut rec);
        assert_eq!(clock.mode(), Mode::Stopped);
        assert_eq!(clock.grid().population(), 0);
        assert_eq!(clock.generation(), 0);

        let replaced = rec.replaced;
        assert!(!clock.update(5.0, &mut rec));
        assert!(!clock.tick(&mut rec));
        assert_eq!(rec.replaced, replaced);

        clock.start(&mut rec);
        assert!(clock.update(1.0, &mut rec));
    }

    #[test]
    fn test_clear_keeps_edit_mode() {
        let mut rec = Recorder::default();
        let mut clock = editing_clock(3, 3, &mut rec);
        click(&mut clock, &mut rec, &[(0, 0)]);
        clock.clear(&mut rec);
        assert_eq!(clock.mode(), Mode::Edit);
        assert_eq!(clock.grid().population(), 0);
    }

    #[test]
    fn test_toggle_ignored_while_running() {
        let mut rec = Recorder::default();
        let mut clock = SimulationClock::new(Grid::new(5, 5));
        clock.start(&mut rec);
        let before = clock.grid().clone();

        assert_eq!(clock.toggle_cell_at(CellCoord::new(2, 2), &mut rec), Ok(false));
        assert_eq!(clock.grid(), &before);
        assert!(rec.cells.is_empty());
    }

    #[test]
    fn test_toggle_ignored_while_stopped_or_overlay() {
        let mut rec = Recorder::default();
        let mut clock = SimulationClock::new(Grid::new(5, 5));
        assert_eq!(clock.toggle_cell_at(CellCoord::new(0, 0), &mut rec), Ok(false));

        clock.toggle_edit(&mut rec);
        rec.overlay = true;
        assert_eq!(clock.toggle_cell_at(CellCoord::new(0, 0), &mut rec), Ok(false));
        assert_eq!(clock.grid().population(), 0);

        rec.overlay = false;
        assert_eq!(clock.toggle_cell_at(CellCoord::new(0, 0), &mut rec), Ok(true));
        assert_eq!(rec.cells, vec![(CellCoord::new(0, 0), true)]);
    }

    #[test]
    fn test_toggle_out_of_bounds_rejected() {
        let mut rec = Recorder::default();
        let mut clock = editing_clock(4, 3, &mut rec);
        let result = clock.toggle_cell_at(CellCoord::new(4, 0), &mut rec);
        assert_eq!(
            result,
            Err(GridError::OutOfBounds { x: 4, y: 0, width: 4, height: 3 })
        );
        assert_eq!(clock.grid().population(), 0);
        assert!(rec.cells.is_empty());
    }

    #[test]
    fn test_edit_mode_transitions() {
        let mut rec = Recorder::default();
        let mut clock = SimulationClock::new(Grid::new(3, 3));

        clock.toggle_edit(&mut rec);
        assert_eq!(clock.mode(), Mode::Edit);
        clock.toggle_edit(&mut rec);
        assert_eq!(clock.mode(), Mode::Stopped);

        clock.start(&mut rec);
        clock.toggle_edit(&mut rec);
        assert_eq!(clock.mode(), Mode::Edit);
        assert!(!clock.update(10.0, &mut rec));

        clock.start(&mut rec);
        assert_eq!(clock.mode(), Mode::Running);
        clock.stop(&mut rec);
        assert_eq!(clock.mode(), Mode::Stopped);

        assert_eq!(
            rec.modes,
            vec![Mode::Edit, Mode::Stopped, Mode::Running, Mode::Edit, Mode::Running, Mode::Stopped]
        );
    }

    #[test]
    fn test_stop_from_edit_and_idempotent_start() {
        let mut rec = Recorder::default();
        let mut clock = editing_clock(3, 3, &mut rec);
        clock.stop(&mut rec);
        assert_eq!(clock.mode(), Mode::Stopped);

        clock.start(&mut rec);
        clock.start(&mut rec);
        assert_eq!(rec.modes, vec![Mode::Edit, Mode::Stopped, Mode::Running]);
    }

    #[test]
    fn test_stop_halts_ticks() {
        let mut rec = Recorder::default();
        let mut clock = SimulationClock::new(Grid::new(3, 3));
        clock.start(&mut rec);
        assert!(clock.update(1.0, &mut rec));
        clock.stop(&mut rec);
        assert!(!clock.update(1.0, &mut rec));
        assert_eq!(clock.generation(), 1);
    }

    #[test]
    fn test_rate_change_while_running() {
        let mut rec = Recorder::default();
        let mut clock = SimulationClock::new(Grid::new(3, 3));
        clock.start(&mut rec);
        assert!(!clock.update(0.5, &mut rec));

        clock.set_rate(true);
        assert_eq!(clock.rate(), TickRate::Fast);
        assert_eq!(clock.mode(), Mode::Running);
        assert!(clock.update(0.0, &mut rec));
        assert!(!clock.update(0.1, &mut rec));
        assert!(clock.update(0.2, &mut rec));

        clock.set_rate(false);
        assert!(!clock.update(0.5, &mut rec));
        assert!(clock.update(0.5, &mut rec));
    }

    #[test]
    fn test_generations_per_second_at_frame_rate() {
        for (fast, fps, expected) in [(false, 60, 10), (true, 60, 40), (false, 50, 10), (true, 50, 40)] {
            let mut rec = Recorder::default();
            let mut clock = SimulationClock::new(Grid::new(3, 3));
            clock.set_rate(fast);
            clock.start(&mut rec);
            let ticks = (0..10 * fps)
                .filter(|_| clock.update(1.0 / fps as f32, &mut rec))
                .count();
            assert_eq!(ticks, expected, "fast={fast} at {fps} fps");
            assert_eq!(clock.generation(), expected as u64);
        }
    }

    #[test]
    fn test_randomize_stops_and_seeds() {
        let mut rec = Recorder::default();
        let mut clock = SimulationClock::new(Grid::new(10, 10));
        clock.start(&mut rec);
        clock.randomize(&mut StdRng::seed_from_u64(3), 1.0, &mut rec);
        assert_eq!(clock.mode(), Mode::Stopped);
        assert_eq!(clock.grid().population(), 100);
        assert_eq!(rec.replaced, 1);
    }
}
