use thiserror::Error;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Number of aligned discs needed to win.
pub const CONNECT: usize = 4;

/// One of the two seats at the board. Red always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    Red,
    Yellow,
}

impl Disc {
    /// Get the other seat
    pub fn other(self) -> Disc {
        match self {
            Disc::Red => Disc::Yellow,
            Disc::Yellow => Disc::Red,
        }
    }

    /// Convert disc to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Disc::Red => Cell::Red,
            Disc::Yellow => Cell::Yellow,
        }
    }

    /// Get seat name for logging
    pub fn name(self) -> &'static str {
        match self {
            Disc::Red => "Red",
            Disc::Yellow => "Yellow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column out of range")]
    InvalidColumn,
    #[error("game is already over")]
    GameOver,
}

/// The 6x7 grid. Row 0 is the top, row 5 the bottom; columns fill strictly
/// bottom-to-top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check whether a disc can still be dropped into a column
    pub fn can_place(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col] == Cell::Empty
    }

    /// Drop a disc into a column, returning the row where it landed.
    /// On error the grid is left untouched.
    pub fn drop_disc(&mut self, col: usize, disc: Disc) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        // Gravity: the disc settles in the lowest empty cell.
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = disc.to_cell();
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull)
    }

    /// Check whether the disc sitting on top of `col`'s stack belongs to
    /// `disc` and lies on a line of at least four. Intended to be called
    /// right after a successful drop into `col`.
    pub fn is_winning_move(&self, col: usize, disc: Disc) -> bool {
        if col >= COLS {
            return false;
        }
        let Some(row) = (0..ROWS).find(|&r| self.cells[r][col] != Cell::Empty) else {
            return false;
        };
        let cell = disc.to_cell();
        if self.cells[row][col] != cell {
            return false;
        }

        // Horizontal, vertical, and the two diagonals; each axis is the
        // landing cell plus the runs in both directions.
        const AXES: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];
        AXES.iter().any(|&(dr, dc)| {
            let run = 1
                + self.count_run(row, col, dr, dc, cell)
                + self.count_run(row, col, -dr, -dc, cell);
            run >= CONNECT
        })
    }

    /// Count matching cells walking from (row, col) in one direction,
    /// excluding the starting cell. Stops at the grid edge.
    fn count_run(&self, row: usize, col: usize, dr: i32, dc: i32, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as i32 + dr;
        let mut c = col as i32 + dc;
        while (0..ROWS as i32).contains(&r)
            && (0..COLS as i32).contains(&c)
            && self.cells[r as usize][c as usize] == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    /// Check if the board is completely full. The top row suffices because
    /// columns fill bottom-up.
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.cells[0][col] != Cell::Empty)
    }

    /// Clear every cell in place for a new round.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
