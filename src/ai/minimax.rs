use log::debug;

use super::agent::Agent;
use super::search::{AlphaBeta, DepthLimit, DepthLimited, Exhaustive, Searcher};
use super::tree::GameTree;
use crate::error::{AgentError, SearchError};

/// Pick the successor with the best searched value for the player to move.
///
/// Successors are scored in the order the state yields them and a candidate
/// replaces the current best only when strictly better, so the earliest of
/// several equally good moves wins.
pub fn select_move<S, T>(searcher: &T, state: &S) -> Result<(S::Move, S), SearchError>
where
    S: GameTree,
    T: Searcher<S> + ?Sized,
{
    let sign = f64::from(state.next_player().sign());
    let mut best: Option<(f64, S::Move, S)> = None;

    for (mv, next) in state.successors() {
        let value = searcher.minimax(&next);
        debug!("{}: move {:?} scores {}", searcher.name(), mv, value);

        let better = match &best {
            None => true,
            Some((best_value, _, _)) => sign * (value - *best_value) > 0.0,
        };
        if better {
            best = Some((value, mv, next));
        }
    }

    best.map(|(_, mv, next)| (mv, next))
        .ok_or(SearchError::ExhaustedState)
}

/// Agent that plays the move chosen by [`select_move`] with its searcher.
#[derive(Debug, Clone)]
pub struct MinimaxAgent<T> {
    searcher: T,
}

impl MinimaxAgent<Exhaustive> {
    pub fn exhaustive() -> Self {
        MinimaxAgent::new(Exhaustive)
    }
}

impl MinimaxAgent<DepthLimited> {
    pub fn heuristic(depth: DepthLimit) -> Self {
        MinimaxAgent::new(DepthLimited::new(depth))
    }
}

impl MinimaxAgent<AlphaBeta> {
    pub fn pruning() -> Self {
        MinimaxAgent::new(AlphaBeta)
    }
}

impl<T> MinimaxAgent<T> {
    pub fn new(searcher: T) -> Self {
        MinimaxAgent { searcher }
    }
}

impl<S: GameTree, T: Searcher<S>> Agent<S> for MinimaxAgent<T> {
    fn get_move(&mut self, state: &S) -> Result<(S::Move, S), AgentError> {
        Ok(select_move(&self.searcher, state)?)
    }

    fn name(&self) -> &str {
        self.searcher.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::scripted::{leaves, Scripted};
    use crate::game::{GameState, Player};

    // --- Driver tests ---

    #[test]
    fn takes_the_move_that_completes_a_streak() {
        // [1, 1, _, _, _, -1, -1], player one to move: column 2 locks in a run
        // worth at least 7; columns 3 and 4 let player two hold it to 0.
        let state = GameState::from_moves(1, 7, &[0, 6, 1, 5]).unwrap();
        let limited = DepthLimited::new(DepthLimit::Limited(5));
        let searchers: [&dyn Searcher<GameState>; 3] = [&Exhaustive, &AlphaBeta, &limited];
        for searcher in searchers {
            let (mv, next) = select_move(searcher, &state).unwrap();
            assert_eq!(mv, 2, "{}", searcher.name());
            assert_eq!(next, state.apply_move(2).unwrap());
            assert_eq!(searcher.minimax(&next), 7.0);
        }
    }

    #[test]
    fn ties_keep_the_earliest_move() {
        let state = Scripted::root(leaves(&[5.0, 5.0, 3.0]), Player::One);
        assert_eq!(select_move(&Exhaustive, &state).unwrap().0, 0);

        let state = Scripted::root(leaves(&[3.0, 5.0, 5.0]), Player::One);
        assert_eq!(select_move(&AlphaBeta, &state).unwrap().0, 1);
    }

    #[test]
    fn player_two_minimises() {
        let state = Scripted::root(leaves(&[4.0, -2.0, -2.0, 7.0]), Player::Two);
        assert_eq!(select_move(&Exhaustive, &state).unwrap().0, 1);
    }

    #[test]
    fn forced_loss_picks_first_move() {
        let state = GameState::from_moves(1, 6, &[0, 2, 5, 3]).unwrap();
        assert_eq!(select_move(&AlphaBeta, &state).unwrap().0, 1);
    }

    #[test]
    fn full_board_is_exhausted() {
        let state = GameState::from_moves(1, 3, &[0, 1, 2]).unwrap();
        assert_eq!(
            select_move(&Exhaustive, &state).unwrap_err(),
            SearchError::ExhaustedState
        );
    }

    // --- Agent tests ---

    #[test]
    fn agent_reports_exhausted_state() {
        let state = GameState::from_moves(1, 2, &[0, 1]).unwrap();
        let mut agent = MinimaxAgent::pruning();
        assert!(matches!(
            agent.get_move(&state),
            Err(AgentError::Search(SearchError::ExhaustedState))
        ));
    }

    #[test]
    fn agents_play_a_full_game() {
        let mut one = MinimaxAgent::pruning();
        let mut two = MinimaxAgent::heuristic(DepthLimit::Limited(2));
        let mut state = GameState::initial(2, 4);
        let mut turn = 0;

        while !state.is_terminal() {
            let (mv, next) = if turn % 2 == 0 {
                one.get_move(&state).unwrap()
            } else {
                two.get_move(&state).unwrap()
            };
            assert!(state.legal_actions().contains(&mv));
            state = next;
            turn += 1;
        }

        assert_eq!(turn, 8);
    }

    #[test]
    fn names() {
        assert_eq!(Agent::<GameState>::name(&MinimaxAgent::exhaustive()), "Minimax");
        assert_eq!(Agent::<GameState>::name(&MinimaxAgent::pruning()), "Minimax Prune");
        assert_eq!(
            Agent::<GameState>::name(&MinimaxAgent::heuristic(DepthLimit::Unlimited)),
            "Minimax Heuristic"
        );
    }
}
