//! The automaton itself: a fixed-size toroidal grid of cells advanced one
//! generation at a time under the configured rules.

use crate::{Cell, Config, GridPosition, Intent, config::SeedMode};

/// The 8 Moore-neighbourhood offsets, anticlockwise from the left.
const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
];

/// Wraps a coordinate onto the toroidal grid.
///
/// Only single-step wrapping is needed: a neighbour offset never moves more
/// than one cell past an edge.
fn wrap(coordinate: i32, dimension: i32) -> i32 {
    if coordinate < 0 {
        dimension - 1
    } else if coordinate >= dimension {
        0
    } else {
        coordinate
    }
}

/// A double-buffered cellular automaton on a toroidal grid.
///
/// The grid dimensions are fixed at construction. Each generation is
/// computed by reading the current grid & writing the next grid, so every
/// cell sees the same stable pre-step state (simultaneous-update
/// semantics); the finished buffer is then committed back into the current
/// grid.
///
/// The automaton is single threaded: [`step`](Self::step) never blocks &
/// the caller must only read the grid between completed steps.
pub struct Automaton {
    width: i32,
    height: i32,
    /// The authoritative grid read by the rules & by the renderer.
    current: Box<[Cell]>,
    /// The write buffer for the generation being computed.
    next: Box<[Cell]>,

    /// Completed generations since the last reset.
    generation: u64,
    /// Step calls remaining until the next generation is due.
    countdown: i32,

    running: bool,
    boosted: bool,

    config: Config,
    rng: fastrand::Rng,
}

impl Automaton {
    /// Creates an automaton with the given grid dimensions.
    ///
    /// Both dimensions must be positive. An initial generation is seeded
    /// immediately from the configured seeding settings. The simulation
    /// starts stopped.
    pub fn new(width: i32, height: i32, config: Config) -> Self {
        Self::with_rng(width, height, config, fastrand::Rng::new())
    }

    /// As [`new`](Self::new), with an explicit random number generator.
    ///
    /// Seeding draws only from the given rng, so a seeded rng produces a
    /// reproducible initial generation.
    pub fn with_rng(width: i32, height: i32, config: Config, rng: fastrand::Rng) -> Self {
        debug_assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive"
        );

        let cells = (width * height) as usize;
        let countdown = config.tick_rate as i32;
        let mut automaton = Self {
            width,
            height,
            current: vec![Cell::DEAD; cells].into_boxed_slice(),
            next: vec![Cell::DEAD; cells].into_boxed_slice(),
            generation: 0,
            countdown,
            running: false,
            boosted: false,
            config,
            rng,
        };

        automaton.seed();
        automaton
    }

    /// Creates an automaton sized for a display resolution.
    ///
    /// The grid dimensions are the resolution divided by the cell-to-pixel
    /// scale, derived once here; the grid never resizes afterwards.
    pub fn from_resolution(resolution: (i32, i32), scale: i32, config: Config) -> Self {
        Self::new(resolution.0 / scale, resolution.1 / scale, config)
    }

    /// The amount of cells in the x axis.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// The amount of cells in the y axis.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The amount of completed generations since the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the simulation is currently running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The configuration the automaton was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The cell value at the given position.
    ///
    /// The position must be within the grid bounds; this accessor does not
    /// wrap. Wraparound is a neighbour-counting concept, not a general
    /// indexing mode.
    pub fn cell_value(&self, position: GridPosition) -> Cell {
        self.current[self.index(position)]
    }

    /// Row-major iteration over the current generation, for rendering.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.current.iter().copied()
    }

    /// The current generation as rows of cells, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.current.chunks(self.width as usize)
    }

    /// Starts or stops the simulation.
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Starts the simulation if stopped, stops it if running.
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Holds or releases the speed boost.
    ///
    /// While boosted the configured tick rate is ignored & a generation is
    /// computed on every step call; the configured rate applies again once
    /// the boost is released.
    pub fn set_boost(&mut self, boosted: bool) {
        self.boosted = boosted;
    }

    /// Applies a debounced user intent from the presentation layer.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::ToggleRunning => self.toggle_running(),
            Intent::Reset => self.reset(),
            Intent::Boost(active) => self.set_boost(active),
        }
    }

    /// Throws away the grid & seeds a fresh initial generation.
    ///
    /// The rule & seeding configuration and the run-state flags are kept;
    /// the tick countdown and the generation counter start over. Callable
    /// at any time, including mid-simulation.
    pub fn reset(&mut self) {
        self.seed();
        self.countdown = self.config.tick_rate as i32;
        self.generation = 0;
        log::debug!("grid reseeded");
    }

    /// Advances the simulation when a generation is due.
    ///
    /// Call this once per frame. While running, the tick countdown gates
    /// how many calls pass between generations, decoupling the generation
    /// rate from the frame rate. Does nothing while stopped.
    pub fn step(&mut self) {
        if !self.running {
            return;
        }

        self.countdown -= 1;
        if self.countdown > 0 {
            return;
        }
        self.countdown = self.effective_tick_rate() as i32;

        for y in 0..self.height {
            for x in 0..self.width {
                let position = GridPosition::new(x, y);
                let index = self.index(position);
                let cell = self.current[index];
                let live = self.live_neighbours(position);

                if cell.is_alive() {
                    // A surviving cell keeps its buffer value; only a
                    // failed survival writes the dying marker.
                    if !self.config.ruleset.survives(live) {
                        self.next[index] = self.next[index].flip();
                    }
                } else if self.config.ruleset.born(live) {
                    self.next[index] = self.next[index].flip();
                } else if cell > Cell::DEAD {
                    self.next[index] = self.next[index].fade(self.config.fade_amount);
                }
            }
        }

        // Generation commit. Nothing above reads from `next`, so every
        // cell was judged against the same pre-step grid.
        self.current.copy_from_slice(&self.next);
        self.generation += 1;
    }

    /// The tick rate currently in force: boosting overrides the configured
    /// rate with 0, which advances on every call.
    fn effective_tick_rate(&self) -> u32 {
        if self.boosted { 0 } else { self.config.tick_rate }
    }

    /// Counts the live cells in the Moore neighbourhood of the position.
    ///
    /// On a grid thinner than 3 cells an offset can wrap back onto the
    /// same row or column; the duplicate hits are counted rather than
    /// deduplicated.
    fn live_neighbours(&self, position: GridPosition) -> u8 {
        NEIGHBOUR_OFFSETS
            .iter()
            .filter(|&&offset| self.get_wrapped(position + offset).is_alive())
            .count() as u8
    }

    /// Reads the current grid with toroidal wraparound on both axes.
    fn get_wrapped(&self, position: GridPosition) -> Cell {
        let wrapped =
            GridPosition::new(wrap(position.x, self.width), wrap(position.y, self.height));
        self.current[self.index(wrapped)]
    }

    fn index(&self, position: GridPosition) -> usize {
        debug_assert!(
            (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y),
            "position {position} is outside the {}x{} grid",
            self.width,
            self.height
        );
        (position.y * self.width + position.x) as usize
    }

    /// Overwrites both buffers with a fresh random generation.
    ///
    /// Both buffers are zeroed first, then every position subject to the
    /// random draw gets an independent chance of starting alive, written
    /// identically into both buffers. After seeding, `current` & `next`
    /// are always equal.
    fn seed(&mut self) {
        self.current.fill(Cell::DEAD);
        self.next.fill(Cell::DEAD);

        let (x_range, y_range) = match self.config.seed_mode {
            SeedMode::FullGrid => (0..self.width, 0..self.height),
            SeedMode::Square { size } => {
                // Centred on the grid, clipped to it if oversized.
                let centre = GridPosition::new(self.width / 2, self.height / 2);
                (
                    (centre.x - size / 2).max(0)..(centre.x + size / 2).min(self.width),
                    (centre.y - size / 2).max(0)..(centre.y + size / 2).min(self.height),
                )
            }
        };

        for y in y_range {
            for x in x_range.clone() {
                let cell = if self.rng.u32(0..100) < self.config.seed_ratio {
                    Cell::ALIVE
                } else {
                    Cell::DEAD
                };

                let index = self.index(GridPosition::new(x, y));
                self.current[index] = cell;
                self.next[index] = cell;
            }
        }
    }
}
