use std::fmt;

pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLS: usize = 6;

/// Largest accepted row or column count.
pub const MAX_DIMENSION: usize = 64;

/// Shortest run of same-colour pieces that scores.
pub const MIN_STREAK: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// Signed cell value: 0 for empty, otherwise the owning player's sign.
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::One => 1,
            Cell::Two => -1,
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::One => 'X',
            Cell::Two => 'O',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

/// A `rows x cols` grid. Row 0 is the top; pieces settle in the lowest empty
/// row of their column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols || self.rows == 0 {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        for row in (0..self.rows).rev() {
            if self.get(row, col) == Cell::Empty {
                self.cells[row * self.cols + col] = cell;
                return Ok(row);
            }
        }

        unreachable!("Column should not be full if is_column_full returned false");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Every row, top to bottom, each read left to right.
    pub fn row_lines(&self) -> Vec<Vec<i8>> {
        (0..self.rows)
            .map(|row| (0..self.cols).map(|col| self.get(row, col).value()).collect())
            .collect()
    }

    /// Every column, left to right, each read bottom to top (drop order).
    pub fn col_lines(&self) -> Vec<Vec<i8>> {
        (0..self.cols)
            .map(|col| {
                (0..self.rows)
                    .rev()
                    .map(|row| self.get(row, col).value())
                    .collect()
            })
            .collect()
    }

    /// Every diagonal of every length: the "/" diagonals read bottom-left to
    /// top-right, followed by the "\" diagonals read top-left to bottom-right.
    pub fn diag_lines(&self) -> Vec<Vec<i8>> {
        if self.cells.is_empty() {
            return Vec::new();
        }
        let (rows, cols) = (self.rows as isize, self.cols as isize);
        let mut lines = Vec::with_capacity(2 * (self.rows + self.cols - 1));

        // "/": start on the left edge, then along the bottom edge
        for row in 0..rows {
            lines.push(self.walk(row, 0, -1, 1));
        }
        for col in 1..cols {
            lines.push(self.walk(rows - 1, col, -1, 1));
        }

        // "\": start on the left edge from the bottom up, then along the top edge
        for row in (0..rows).rev() {
            lines.push(self.walk(row, 0, 1, 1));
        }
        for col in 1..cols {
            lines.push(self.walk(0, col, 1, 1));
        }

        lines
    }

    fn walk(&self, mut row: isize, mut col: isize, d_row: isize, d_col: isize) -> Vec<i8> {
        let mut line = Vec::new();
        while row >= 0 && col >= 0 && row < self.rows as isize && col < self.cols as isize {
            line.push(self.get(row as usize, col as usize).value());
            row += d_row;
            col += d_col;
        }
        line
    }

    /// Points scored by each player over all rows, columns and diagonals.
    pub fn points(&self) -> (u32, u32) {
        self.row_lines()
            .iter()
            .chain(self.col_lines().iter())
            .chain(self.diag_lines().iter())
            .map(|line| line_points(line))
            .fold((0, 0), |(one, two), (a, b)| (one + a, two + b))
    }
}

/// Each maximal run of `k >= MIN_STREAK` pieces is worth `k * k` to its owner.
fn line_points(line: &[i8]) -> (u32, u32) {
    let mut one = 0;
    let mut two = 0;
    let mut credit = |value: i8, run: usize| {
        if run >= MIN_STREAK {
            let points = (run * run) as u32;
            match value {
                1 => one += points,
                -1 => two += points,
                _ => {}
            }
        }
    };

    let mut run = 0;
    let mut current = 0;
    for &value in line {
        if value == current {
            run += 1;
        } else {
            credit(current, run);
            current = value;
            run = 1;
        }
    }
    credit(current, run);

    (one, two)
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = (0..self.cols)
                .map(|col| self.get(row, col).symbol())
                .collect();
            writeln!(f, "{line}")?;
        }
        let footer: String = (0..self.cols)
            .map(|col| char::from_digit((col % 10) as u32, 10).unwrap_or('?'))
            .collect();
        write!(f, "{footer}")
    }
}
