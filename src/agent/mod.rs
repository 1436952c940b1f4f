use std::time::Duration;

use crate::prelude::*;

pub mod evaluators;
pub mod players;
pub mod scalars;
pub mod search;
pub mod searchargs;
pub mod table;

pub use evaluators::{Heuristic, Material, MoveContext, TowerValue};
pub use players::*;
pub use scalars::*;
pub use search::{minimax, Searcher};
pub use searchargs::SearchArgs;
pub use table::{Fingerprint, TTBound, TTEntry, TranspositionTable};

/// The contract between a playing strategy and whatever serves it.
///
/// Both operations are synchronous; the time budget, when one exists, covers
/// everything done inside them.
pub trait Agent
{
    /// Begins a new game. Optional precomputation goes here.
    fn initialize(&mut self, percepts: &Percepts, players: &[Player], time_left: Option<Duration>)
    {
        let _ = (percepts, players, time_left);
    }

    /// Chooses one legal action for `player` on the perceived board.
    ///
    /// Implementations reconstruct a board from the percepts; the caller's
    /// grid is never touched. The pathological position with no action at all
    /// surfaces as a `GameFinished` error.
    fn play(&mut self, percepts: &Percepts, player: Player, step: u32, time_left: Option<Duration>) -> Result<Action>;
}
