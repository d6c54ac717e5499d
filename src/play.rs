//! Pitting two agents against each other.

use log::info;

use crate::ai::{Agent, HumanAgent, MinimaxAgent, RandomAgent};
use crate::config::{AgentConfig, AgentKind};
use crate::error::{AgentError, SearchError};
use crate::game::{GameState, Player};

/// A finished game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub final_state: GameState,
}

impl GameRecord {
    /// `None` on a tie.
    pub fn winner(&self) -> Option<Player> {
        match self.final_state.margin() {
            m if m > 0 => Some(Player::One),
            m if m < 0 => Some(Player::Two),
            _ => None,
        }
    }
}

/// Build the agent described by one seat of the configuration.
pub fn build_agent(config: &AgentConfig) -> Result<Box<dyn Agent<GameState>>, SearchError> {
    let agent: Box<dyn Agent<GameState>> = match config.kind {
        AgentKind::Human => Box::new(HumanAgent::stdio()),
        AgentKind::Random => match config.seed {
            Some(seed) => Box::new(RandomAgent::with_seed(seed)),
            None => Box::new(RandomAgent::new()),
        },
        AgentKind::Minimax => Box::new(MinimaxAgent::exhaustive()),
        AgentKind::Heuristic => Box::new(MinimaxAgent::heuristic(config.depth_limit()?)),
        AgentKind::Prune => Box::new(MinimaxAgent::pruning()),
    };
    Ok(agent)
}

/// Play from `state` until the board is full. `on_move` sees every move and
/// the state it produced.
pub fn play_game<A, B, F>(
    one: &mut A,
    two: &mut B,
    mut state: GameState,
    mut on_move: F,
) -> Result<GameRecord, AgentError>
where
    A: Agent<GameState> + ?Sized,
    B: Agent<GameState> + ?Sized,
    F: FnMut(Player, usize, &GameState),
{
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let player = state.current_player();
        let (mv, next) = match player {
            Player::One => one.get_move(&state)?,
            Player::Two => two.get_move(&state)?,
        };
        let name = match player {
            Player::One => one.name(),
            Player::Two => two.name(),
        };
        info!("{} ({}) plays column {}", player.name(), name, mv);
        moves.push(mv);
        on_move(player, mv, &next);
        state = next;
    }

    let (one_points, two_points) = state.points();
    info!(
        "game over after {} moves: {} - {}",
        moves.len(),
        one_points,
        two_points
    );

    Ok(GameRecord {
        moves,
        final_state: state,
    })
}
