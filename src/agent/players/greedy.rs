use std::time::Duration;

use rand::{rngs::StdRng, seq::SliceRandom, Rng};

use crate::prelude::*;

use super::random::rng_from;

/// How often the preferred action is actually played.
const PLAY_BEST: f64 = 0.8;

/// A one-ply agent: ranks actions by the tower each would leave on its
/// destination cell, preferring tall own towers and short enemy ones, and
/// plays the best-ranked action most of the time.
pub struct GreedyPlayer
{
    rng: StdRng,
}

impl GreedyPlayer
{
    pub fn new(seed: Option<u64>) -> GreedyPlayer
    {
        GreedyPlayer { rng: rng_from(seed) }
    }

    /// The tower left on the destination cell once the action is played.
    fn predict(board: &Board, action: &Action) -> i32
    {
        let mut child = board.clone();
        if let Err(err) = child.apply_action(action)
        {
            panic!("{}", err);
        }
        child.cell(action.i2 as usize, action.j2 as usize)
    }
}

impl Agent for GreedyPlayer
{
    fn play(&mut self, percepts: &Percepts, player: Player, step: u32, _time_left: Option<Duration>) -> Result<Action>
    {
        let board = Board::new(percepts, board::consts::MAX_HEIGHT, false)?;
        let actions: Vec<Action> = board.legal_actions().collect();

        log::debug!("step {}: {} has {} actions", step, player, actions.len());

        if actions.is_empty()
        {
            return Err(Error::empty(Kind::GameFinished));
        }

        // Merges yield towers of height 2..=max, so this covers every outcome
        // best-first for the moving player.
        let sign = player.sign();
        let preference = [5 * sign, 4 * sign, 3 * sign, 2 * sign, -2 * sign, -3 * sign, -4 * sign, -5 * sign];

        let rank = |action: &Action| {
            let outcome = Self::predict(&board, action);
            preference.iter().position(|&p| p == outcome).unwrap_or(preference.len())
        };

        // min_by_key keeps the earliest of equally-ranked actions.
        let best = actions.iter().copied().min_by_key(|action| rank(action));

        if self.rng.gen::<f64>() < PLAY_BEST
        {
            best.ok_or_else(|| Error::empty(Kind::GameFinished))
        }
        else
        {
            actions.choose(&mut self.rng).copied().ok_or_else(|| Error::empty(Kind::GameFinished))
        }
    }
}
