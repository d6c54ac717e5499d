use std::io::{self, BufRead, Write};
use std::str::FromStr;

use super::agent::Agent;
use super::tree::GameTree;
use crate::error::{AgentError, SearchError};

/// Prompts for a move until a legal one is entered.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl HumanAgent<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        HumanAgent::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HumanAgent { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<S, R, W> Agent<S> for HumanAgent<R, W>
where
    S: GameTree,
    S::Move: FromStr,
    R: BufRead,
    W: Write,
{
    fn get_move(&mut self, state: &S) -> Result<(S::Move, S), AgentError> {
        let mut successors = state.successors();
        if successors.is_empty() {
            return Err(SearchError::ExhaustedState.into());
        }
        let mut legal: Vec<S::Move> = successors.iter().map(|(mv, _)| *mv).collect();
        legal.sort();

        let mut line = String::new();
        loop {
            write!(self.output, "Enter your move {legal:?}: ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(AgentError::InputClosed);
            }
            let Ok(mv) = line.trim().parse::<S::Move>() else {
                continue;
            };
            if let Some(idx) = successors.iter().position(|(candidate, _)| *candidate == mv) {
                return Ok(successors.swap_remove(idx));
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}
