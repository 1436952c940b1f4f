use std::time::{Duration, Instant};

use crate::prelude::*;

/// The main searching agent: negamax alpha-beta over the tower-value
/// heuristic, depth-limited and optionally time-limited.
pub struct NegamaxPlayer
{
    depth:     u8,
    heuristic: TowerValue,
}

impl NegamaxPlayer
{
    pub fn new(depth: u8) -> NegamaxPlayer
    {
        NegamaxPlayer {
            depth,
            heuristic: TowerValue,
        }
    }
}

impl Agent for NegamaxPlayer
{
    fn play(&mut self, percepts: &Percepts, player: Player, step: u32, time_left: Option<Duration>) -> Result<Action>
    {
        let board = Board::new(percepts, board::consts::MAX_HEIGHT, false)?;

        let start = Instant::now();
        let mut searcher = Searcher::new(&self.heuristic);
        if let Some(budget) = time_left
        {
            searcher = searcher.with_deadline(start + budget);
        }

        let (value, action) = searcher.best_action(&board, player, self.depth);
        let elapsed = start.elapsed();

        log::debug!("step {}: scored {:>8} at depth {}", step, value, self.depth);
        log::debug!(
            "visited {} stems and {} leaves in {:.1}s",
            searcher.stem_count,
            searcher.leaf_count,
            elapsed.as_secs_f64()
        );

        super::settle(&board, action)
    }
}
