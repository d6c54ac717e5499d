use super::tree::GameTree;
use crate::error::AgentError;

/// Universal interface for all agents.
pub trait Agent<S: GameTree> {
    /// Choose a move for the player to move in `state`, returning it together
    /// with the state it produces.
    fn get_move(&mut self, state: &S) -> Result<(S::Move, S), AgentError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

impl<S: GameTree, A: Agent<S> + ?Sized> Agent<S> for Box<A> {
    fn get_move(&mut self, state: &S) -> Result<(S::Move, S), AgentError> {
        (**self).get_move(state)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
