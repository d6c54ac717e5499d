mod agent;
pub mod evaluation;
mod human;
pub mod minimax;
mod random;
#[cfg(test)]
mod scripted;
pub mod search;
pub mod tree;

pub use agent::Agent;
pub use evaluation::{Evaluator, GapEvaluator};
pub use human::HumanAgent;
pub use minimax::{select_move, MinimaxAgent};
pub use random::RandomAgent;
pub use search::{AlphaBeta, DepthLimit, DepthLimited, Exhaustive, Searcher};
pub use tree::{GameTree, LineFeatures};
