use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;
use super::tree::GameTree;
use crate::error::{AgentError, SearchError};

/// An agent that selects uniformly at random from the available moves.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Two agents built from the same seed choose the same moves.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameTree> Agent<S> for RandomAgent {
    fn get_move(&mut self, state: &S) -> Result<(S::Move, S), AgentError> {
        let mut successors = state.successors();
        if successors.is_empty() {
            return Err(SearchError::ExhaustedState.into());
        }
        let idx = self.rng.random_range(0..successors.len());
        Ok(successors.swap_remove(idx))
    }

    fn name(&self) -> &str {
        "Random"
    }
}
