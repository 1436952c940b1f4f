use std::time::Duration;

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::prelude::*;

/// A dumb agent: any legal action will do.
pub struct RandomPlayer
{
    rng: StdRng,
}

impl RandomPlayer
{
    /// Creates the player, seeded for reproducibility when a seed is given.
    pub fn new(seed: Option<u64>) -> RandomPlayer
    {
        RandomPlayer { rng: rng_from(seed) }
    }
}

impl Agent for RandomPlayer
{
    fn play(&mut self, percepts: &Percepts, player: Player, step: u32, _time_left: Option<Duration>) -> Result<Action>
    {
        let board = Board::new(percepts, board::consts::MAX_HEIGHT, false)?;
        let actions: Vec<Action> = board.legal_actions().collect();

        log::debug!("step {}: {} has {} actions", step, player, actions.len());

        actions.choose(&mut self.rng).copied().ok_or_else(|| Error::empty(Kind::GameFinished))
    }
}

/// A seeded generator when reproducibility matters, entropy otherwise.
pub(super) fn rng_from(seed: Option<u64>) -> StdRng
{
    match seed
    {
        | Some(seed) => StdRng::seed_from_u64(seed),
        | None => StdRng::from_entropy(),
    }
}
