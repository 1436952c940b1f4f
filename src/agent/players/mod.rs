use std::path::Path;

use crate::prelude::*;

mod greedy;
mod minimax;
mod negamax;
mod random;
mod transposition;

pub use greedy::GreedyPlayer;
pub use minimax::MinimaxPlayer;
pub use negamax::NegamaxPlayer;
pub use random::RandomPlayer;
pub use transposition::TranspositionPlayer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
/// The playing strategies a server can expose.
pub enum Strategy
{
    Random,
    Greedy,
    Minimax,
    Negamax,
    Transposition,
}

impl Strategy
{
    /// Builds a fresh agent implementing this strategy.
    pub fn build(&self, depth: u8, seed: Option<u64>, table_file: Option<&Path>) -> Result<Box<dyn Agent>>
    {
        Ok(match self
        {
            | Strategy::Random => Box::new(RandomPlayer::new(seed)),
            | Strategy::Greedy => Box::new(GreedyPlayer::new(seed)),
            | Strategy::Minimax => Box::new(MinimaxPlayer::new(depth)),
            | Strategy::Negamax => Box::new(NegamaxPlayer::new(depth)),
            | Strategy::Transposition => match table_file
            {
                | Some(path) => Box::new(TranspositionPlayer::from_json_file(depth, path)?),
                | None => Box::new(TranspositionPlayer::new(depth)),
            },
        })
    }
}

/// Settles a search result into a playable action.
///
/// A search that never expanded the root (an already-exhausted time budget)
/// falls back to the first legal action; a board with no action at all is a
/// finished game.
pub(crate) fn settle(board: &Board, found: Option<Action>) -> Result<Action>
{
    match found
    {
        | Some(action) => Ok(action),
        | None =>
        {
            log::warn!("search returned no action, falling back to the first legal one");
            board.legal_actions().next().ok_or_else(|| Error::empty(Kind::GameFinished))
        }
    }
}
