use std::fmt;

use super::{Board, Player, StateCounter};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column is out of range")]
    InvalidColumn,
    #[error("game is over")]
    GameOver,
}

/// Immutable Connect 383 position. Every constructed state, root or
/// successor, is tallied in the shared [`StateCounter`].
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_player: Player,
    points: (u32, u32),
    counter: StateCounter,
}

impl GameState {
    /// Create initial game state on an empty `rows x cols` board
    pub fn initial(rows: usize, cols: usize) -> Self {
        Self::with_counter(rows, cols, StateCounter::new())
    }

    /// Initial state that reports its constructions to an existing counter.
    pub fn with_counter(rows: usize, cols: usize, counter: StateCounter) -> Self {
        Self::from_parts(Board::new(rows, cols), Player::One, counter)
    }

    fn from_parts(board: Board, current_player: Player, counter: StateCounter) -> Self {
        counter.increment();
        let points = board.points();
        GameState {
            board,
            current_player,
            points,
            counter,
        }
    }

    /// Replay a sequence of columns from the initial state.
    pub fn from_moves(rows: usize, cols: usize, moves: &[usize]) -> Result<Self, MoveError> {
        moves
            .iter()
            .try_fold(Self::initial(rows, cols), |state, &col| state.apply_move(col))
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Counter shared by this state and everything derived from it.
    pub fn counter(&self) -> &StateCounter {
        &self.counter
    }

    /// Points earned so far by each player.
    pub fn points(&self) -> (u32, u32) {
        self.points
    }

    /// The game ends only when the board is full
    pub fn is_terminal(&self) -> bool {
        self.board.is_full()
    }

    /// Final margin from player one's perspective.
    pub fn margin(&self) -> i64 {
        i64::from(self.points.0) - i64::from(self.points.1)
    }

    /// Get list of legal columns (not full), ascending
    pub fn legal_actions(&self) -> Vec<usize> {
        (0..self.board.num_cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mut new_board = self.board.clone();
        new_board
            .drop_piece(column, self.current_player.to_cell())
            .map_err(|e| match e {
                super::board::MoveError::ColumnFull => MoveError::ColumnFull,
                super::board::MoveError::InvalidColumn => MoveError::InvalidColumn,
            })?;

        Ok(Self::from_parts(
            new_board,
            self.current_player.other(),
            self.counter.clone(),
        ))
    }
}

impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board && self.current_player == other.current_player
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(
            f,
            "Score: {} {} - {} {}",
            Player::One.name(),
            self.points.0,
            self.points.1,
            Player::Two.name()
        )
    }
}
