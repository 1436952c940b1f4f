use std::{
    path::Path,
    time::{Duration, Instant},
};

use crate::prelude::*;

/// The negamax agent backed by a transposition table, so positions reached
/// through different move orders are searched once.
///
/// The table persists across the agent's games; callers wanting isolation
/// build a fresh player.
pub struct TranspositionPlayer
{
    depth:     u8,
    heuristic: TowerValue,
    table:     TranspositionTable,
}

impl TranspositionPlayer
{
    pub fn new(depth: u8) -> TranspositionPlayer
    {
        TranspositionPlayer {
            depth,
            heuristic: TowerValue,
            table: TranspositionTable::new(),
        }
    }

    /// Creates the player with a table warmed from an earlier session.
    pub fn from_json_file(depth: u8, path: impl AsRef<Path>) -> Result<TranspositionPlayer>
    {
        let table = TranspositionTable::from_json_file(path)?;
        Ok(TranspositionPlayer {
            depth,
            heuristic: TowerValue,
            table,
        })
    }

    /// Writes the accumulated table out for offline analysis.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()>
    {
        self.table.to_json_file(path)
    }

    pub fn table(&self) -> &TranspositionTable
    {
        &self.table
    }
}

impl Agent for TranspositionPlayer
{
    fn play(&mut self, percepts: &Percepts, player: Player, step: u32, time_left: Option<Duration>) -> Result<Action>
    {
        let board = Board::new(percepts, board::consts::MAX_HEIGHT, false)?;

        let start = Instant::now();
        let mut searcher = Searcher::new(&self.heuristic).with_table(&self.table);
        if let Some(budget) = time_left
        {
            searcher = searcher.with_deadline(start + budget);
        }

        let (value, action) = searcher.best_action(&board, player, self.depth);
        let elapsed = start.elapsed();

        log::debug!("step {}: scored {:>8} at depth {}", step, value, self.depth);
        log::debug!(
            "visited {} stems and {} leaves in {:.1}s, {} transpositions held",
            searcher.stem_count,
            searcher.leaf_count,
            elapsed.as_secs_f64(),
            self.table.len()
        );

        super::settle(&board, action)
    }
}
