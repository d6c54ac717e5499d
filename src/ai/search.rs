//! Minimax searchers.
//!
//! All three variants share one max/min recursion. They differ only in
//! whether it stops early at a depth budget (handing the state to an
//! [`Evaluator`]) and whether it tracks an alpha-beta window to skip subtrees
//! that cannot change the result. Successors are always visited in the order
//! [`GameTree::successors`] returns them.

use super::evaluation::{Evaluator, GapEvaluator};
use super::tree::GameTree;
use crate::error::SearchError;
use crate::game::Player;

/// Remaining plies before a depth-limited search falls back to evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthLimit {
    Limited(u32),
    #[default]
    Unlimited,
}

impl DepthLimit {
    /// Rejects negative depths.
    pub fn new(depth: i64) -> Result<Self, SearchError> {
        if depth < 0 {
            return Err(SearchError::InvalidDepth(depth));
        }
        Ok(DepthLimit::Limited(
            u32::try_from(depth).unwrap_or(u32::MAX),
        ))
    }

    /// `None` means unlimited.
    pub fn from_option(depth: Option<i64>) -> Result<Self, SearchError> {
        depth.map_or(Ok(DepthLimit::Unlimited), Self::new)
    }

    fn is_spent(self) -> bool {
        self == DepthLimit::Limited(0)
    }

    fn step(self) -> Self {
        match self {
            DepthLimit::Limited(depth) => DepthLimit::Limited(depth.saturating_sub(1)),
            DepthLimit::Unlimited => DepthLimit::Unlimited,
        }
    }
}

/// Computes the minimax value of a state from player one's perspective.
pub trait Searcher<S: GameTree> {
    fn minimax(&self, state: &S) -> f64;

    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Copy)]
struct Window {
    alpha: f64,
    beta: f64,
}

impl Window {
    const OPEN: Window = Window {
        alpha: f64::NEG_INFINITY,
        beta: f64::INFINITY,
    };
}

struct Policy<'e, S> {
    prune: bool,
    evaluator: Option<&'e dyn Evaluator<S>>,
}

fn search<S: GameTree>(
    policy: &Policy<'_, S>,
    state: &S,
    depth: DepthLimit,
    mut window: Window,
) -> f64 {
    if state.is_full() {
        return state.utility();
    }
    if depth.is_spent() {
        if let Some(evaluator) = policy.evaluator {
            return evaluator.evaluate(state);
        }
    }

    let maximizing = state.next_player() == Player::One;
    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };

    for (_, child) in state.successors() {
        let value = search(policy, &child, depth.step(), window);
        if maximizing {
            best = best.max(value);
            if policy.prune {
                if best >= window.beta {
                    return best;
                }
                window.alpha = window.alpha.max(best);
            }
        } else {
            best = best.min(value);
            if policy.prune {
                if best <= window.alpha {
                    return best;
                }
                window.beta = window.beta.min(best);
            }
        }
    }

    best
}

/// Exact minimax over the whole remaining tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exhaustive;

impl<S: GameTree> Searcher<S> for Exhaustive {
    fn minimax(&self, state: &S) -> f64 {
        let policy = Policy {
            prune: false,
            evaluator: None,
        };
        search(&policy, state, DepthLimit::Unlimited, Window::OPEN)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

/// Minimax that evaluates statically once its depth budget runs out.
/// Terminal states still report their exact utility at any depth.
#[derive(Debug, Clone)]
pub struct DepthLimited<E = GapEvaluator> {
    depth: DepthLimit,
    evaluator: E,
}

impl DepthLimited<GapEvaluator> {
    pub fn new(depth: DepthLimit) -> Self {
        Self::with_evaluator(depth, GapEvaluator)
    }
}

impl<E> DepthLimited<E> {
    pub fn with_evaluator(depth: DepthLimit, evaluator: E) -> Self {
        DepthLimited { depth, evaluator }
    }
}

impl<S: GameTree, E: Evaluator<S>> Searcher<S> for DepthLimited<E> {
    fn minimax(&self, state: &S) -> f64 {
        let policy = Policy {
            prune: false,
            evaluator: Some(&self.evaluator),
        };
        search(&policy, state, self.depth, Window::OPEN)
    }

    fn name(&self) -> &str {
        "Minimax Heuristic"
    }
}

/// Exact minimax with alpha-beta pruning. Returns the same value as
/// [`Exhaustive`] while constructing no more states.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaBeta;

impl<S: GameTree> Searcher<S> for AlphaBeta {
    fn minimax(&self, state: &S) -> f64 {
        let policy = Policy {
            prune: true,
            evaluator: None,
        };
        search(&policy, state, DepthLimit::Unlimited, Window::OPEN)
    }

    fn name(&self) -> &str {
        "Minimax Prune"
    }
}
