use std::time::{Duration, Instant};

use crate::prelude::*;

/// An agent around the explicit max/min alpha-beta search and the raw board
/// score. No tactical knowledge, no transpositions; the baseline searcher.
pub struct MinimaxPlayer
{
    depth: u8,
}

impl MinimaxPlayer
{
    pub fn new(depth: u8) -> MinimaxPlayer
    {
        MinimaxPlayer { depth }
    }
}

impl Agent for MinimaxPlayer
{
    fn play(&mut self, percepts: &Percepts, player: Player, step: u32, _time_left: Option<Duration>) -> Result<Action>
    {
        // The max/min search maximizes the board's own score, so the board is
        // viewed with the controlled player as positive. Actions are pure
        // coordinates and survive the inversion unchanged.
        let board = Board::new(percepts, board::consts::MAX_HEIGHT, player == Player::Negative)?;

        let start = Instant::now();
        let (value, action) = minimax::search(&board, self.depth);

        log::debug!("step {}: minimax scored {:>4} in {:.1}s", step, value, start.elapsed().as_secs_f64());

        super::settle(&board, action)
    }
}
