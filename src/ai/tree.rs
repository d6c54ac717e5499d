//! The contract between the searchers and whatever game they play.

use std::fmt::Debug;

use crate::game::{GameState, Player};

/// A node of a two-player, zero-sum game tree.
///
/// Values are always from [`Player::One`]'s perspective: positive favours
/// player one, negative favours player two.
pub trait GameTree: Sized {
    type Move: Copy + Eq + Ord + Debug;

    /// Every `(move, resulting state)` pair, in a deterministic order.
    /// Empty iff [`is_full`](GameTree::is_full).
    fn successors(&self) -> Vec<(Self::Move, Self)>;

    /// Terminal test.
    fn is_full(&self) -> bool;

    /// Exact value of a terminal state. Only meaningful when `is_full()`.
    fn utility(&self) -> f64;

    fn next_player(&self) -> Player;
}

/// Board features read by static evaluators.
pub trait LineFeatures {
    /// Signed running scores: player one's is `>= 0`, player two's `<= 0`.
    fn scores(&self) -> (f64, f64);
    fn rows(&self) -> Vec<Vec<i8>>;
    fn cols(&self) -> Vec<Vec<i8>>;
    fn diags(&self) -> Vec<Vec<i8>>;
}

impl GameTree for GameState {
    type Move = usize;

    fn successors(&self) -> Vec<(usize, GameState)> {
        self.legal_actions()
            .into_iter()
            .map(|col| match self.apply_move(col) {
                Ok(next) => (col, next),
                Err(e) => unreachable!("legal column {col} rejected: {e}"),
            })
            .collect()
    }

    fn is_full(&self) -> bool {
        self.is_terminal()
    }

    fn utility(&self) -> f64 {
        self.margin() as f64
    }

    fn next_player(&self) -> Player {
        self.current_player()
    }
}

impl LineFeatures for GameState {
    fn scores(&self) -> (f64, f64) {
        let (one, two) = self.points();
        (f64::from(one), -f64::from(two))
    }

    fn rows(&self) -> Vec<Vec<i8>> {
        self.board().row_lines()
    }

    fn cols(&self) -> Vec<Vec<i8>> {
        self.board().col_lines()
    }

    fn diags(&self) -> Vec<Vec<i8>> {
        self.board().diag_lines()
    }
}
