use alloc::collections::VecDeque;
use core::fmt;
use ndarray::Array2;

use crate::*;

/// Whether the mines have been laid yet. Placement waits for the first reveal so that cell can be
/// kept safe, and happens exactly once.
#[derive(Clone, Debug)]
enum Mines<P> {
    Pending(P),
    Placed,
}

/// Rectangular grid of cells plus the rules that mutate it.
///
/// All positions are `(row, col)`. Every method taking a position fails with
/// [`GameError::OutOfBounds`] unless [`Board::has_position`] holds for it.
#[derive(Clone, Debug)]
pub struct Board<P = RandomMinePlacer> {
    config: BoardConfig,
    cells: Array2<Cell>,
    mines: Mines<P>,
    flagged_count: CellCount,
}

impl Board {
    /// Board whose mines are drawn from OS entropy on the first reveal.
    #[cfg(feature = "std")]
    pub fn create(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        Self::with_placer(
            BoardConfig::new(width, height, mines)?,
            RandomMinePlacer::from_entropy(),
        )
    }

    pub fn new(config: BoardConfig, seed: u64) -> Result<Self> {
        Self::with_placer(config, RandomMinePlacer::new(seed))
    }

    pub fn with_seed(width: Coord, height: Coord, mines: CellCount, seed: u64) -> Result<Self> {
        Self::new(BoardConfig::new(width, height, mines)?, seed)
    }

    /// Board with mines already laid at `mine_coords`. Duplicate positions count once.
    pub fn from_mine_coords(width: Coord, height: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::empty(BoardConfig::new(width, height, 0)?, Mines::Placed);

        for &coords in mine_coords {
            board.validate_coords(coords)?;
        }

        let mut planted: CellCount = 0;
        for &coords in mine_coords {
            if board.plant_mine(coords) {
                planted += 1;
            }
        }

        board.config = BoardConfig::new(width, height, planted)?;
        Ok(board)
    }
}

impl<P: MinePlacer> Board<P> {
    pub fn with_placer(config: BoardConfig, placer: P) -> Result<Self> {
        config.validate()?;
        Ok(Self::empty(config, Mines::Pending(placer)))
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn cols(&self) -> Coord {
        self.config.width
    }

    pub fn rows(&self) -> Coord {
        self.config.height
    }

    pub fn mines_count(&self) -> CellCount {
        self.config.mines
    }

    /// Whether mines have been placed, i.e. a reveal has happened.
    pub fn is_initialized(&self) -> bool {
        matches!(self.mines, Mines::Placed)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Mines minus flags, negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        (self.config.mines as isize) - (self.flagged_count as isize)
    }

    pub fn has_position(&self, (row, col): Coord2) -> bool {
        row < self.rows() && col < self.cols()
    }

    pub fn cell(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn cell_state(&self, coords: Coord2) -> Result<CellState> {
        self.cell(coords).map(Cell::state)
    }

    pub fn is_open(&self, coords: Coord2) -> Result<bool> {
        self.cell(coords).map(Cell::is_open)
    }

    pub fn is_flag(&self, coords: Coord2) -> Result<bool> {
        self.cell(coords).map(Cell::is_flagged)
    }

    pub fn is_mine(&self, coords: Coord2) -> Result<bool> {
        self.cell(coords).map(Cell::is_mine)
    }

    pub fn mines_adjacent(&self, coords: Coord2) -> Result<u8> {
        self.cell(coords).map(Cell::adjacent_mines)
    }

    /// Opens the cell at `coords`. The first call on a board lays the mines, never on `coords`.
    ///
    /// A mine opens alone. A safe cell opens together with its connected region of zero-count
    /// cells and their numbered border; flagged cells stop that spread.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        if self.cells[coords.to_nd_index()].is_open() {
            return Err(GameError::AlreadyOpen);
        }

        self.ensure_mines_placed(coords)?;

        if self.cells[coords.to_nd_index()].is_mine() {
            self.open_cell(coords);
            return Ok(RevealOutcome::HitMine);
        }

        let opened = self.flood_fill(coords);
        log::trace!("Reveal at {:?} opened {} cells", coords, opened);
        Ok(RevealOutcome::Safe { opened })
    }

    /// Flips a flag, returning whether the cell is flagged afterwards.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];

        match cell.state() {
            CellState::Flagged => {
                cell.set_state(CellState::Closed);
                self.flagged_count -= 1;
                Ok(false)
            }
            CellState::Closed => {
                cell.set_state(CellState::Flagged);
                self.flagged_count += 1;
                Ok(true)
            }
            CellState::Open => Err(GameError::InvalidTransition),
        }
    }

    /// Won once every mine carries a flag. Flags on safe cells and closed safe cells don't matter.
    pub fn is_win(&self) -> bool {
        if !self.is_initialized() && self.config.mines > 0 {
            return false;
        }

        self.cells
            .iter()
            .filter(|cell| cell.is_mine())
            .all(Cell::is_flagged)
    }

    /// Opens every cell. With `show_mines` unset, mine cells keep their current state.
    pub fn reveal_all(&mut self, show_mines: bool) {
        for cell in self.cells.iter_mut() {
            if show_mines || !cell.is_mine() {
                cell.set_state(CellState::Open);
            }
        }

        self.flagged_count = self
            .cells
            .iter()
            .filter(|cell| cell.is_flagged())
            .count() as CellCount;
    }

    fn ensure_mines_placed(&mut self, first: Coord2) -> Result<()> {
        let Mines::Pending(placer) = &mut self.mines else {
            return Ok(());
        };

        let positions = placer.place(self.config, first)?;
        for &coords in &positions {
            self.validate_coords(coords)?;
        }

        for coords in positions {
            self.plant_mine(coords);
        }
        self.mines = Mines::Placed;

        log::debug!(
            "Placed {} mines on {}x{} board, first reveal at {:?}",
            self.config.mines,
            self.config.width,
            self.config.height,
            first
        );
        Ok(())
    }

    /// Breadth-first opening from `start`, returns how many cells changed to open.
    fn flood_fill(&mut self, start: Coord2) -> CellCount {
        let mut opened = 0;
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            // a cell can be queued by several zero-count neighbours
            if self.cells[coords.to_nd_index()].is_open() {
                continue;
            }

            self.open_cell(coords);
            opened += 1;

            if self.cells[coords.to_nd_index()].adjacent_mines() > 0 {
                continue;
            }

            to_visit.extend(
                self.cells
                    .iter_neighbors(coords)
                    .filter(|&pos| self.cells[pos.to_nd_index()].is_closed()),
            );
        }

        opened
    }

    fn open_cell(&mut self, coords: Coord2) {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_flagged() {
            self.flagged_count -= 1;
        }
        cell.set_state(CellState::Open);
    }
}

impl<P> Board<P> {
    fn empty(config: BoardConfig, mines: Mines<P>) -> Self {
        let (rows, cols) = config.size();

        Self {
            config,
            cells: Array2::from_shape_fn((usize::from(rows), usize::from(cols)), |(row, col)| {
                Cell::new((row as Coord, col as Coord))
            }),
            mines,
            flagged_count: 0,
        }
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.config.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// Marks a mine and bumps the neighbour counts, returns false if it was already a mine.
    fn plant_mine(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_mine() {
            return false;
        }
        cell.plant_mine();

        for pos in self.cells.iter_neighbors(coords) {
            self.cells[pos.to_nd_index()].increment_adjacent();
        }
        true
    }
}

impl<P> fmt::Display for Board<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
