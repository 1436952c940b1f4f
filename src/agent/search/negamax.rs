use std::time::Instant;

use crate::prelude::*;

/// Depth-first negamax with alpha-beta pruning.
///
/// Each call owns a freshly cloned board per branch, so nothing is shared
/// between siblings; the only state threaded through the recursion is the
/// window, the remaining depth, and the side to move.
pub struct Searcher<'a, H: Heuristic>
{
    heuristic: &'a H,
    table:     Option<&'a TranspositionTable>,
    deadline:  Option<Instant>,

    /// Interior and leaf nodes visited, for reporting.
    pub stem_count: u64,
    pub leaf_count: u64,
}

impl<'a, H: Heuristic> Searcher<'a, H>
{
    /// Creates a searcher over the given heuristic.
    pub fn new(heuristic: &'a H) -> Searcher<'a, H>
    {
        Searcher {
            heuristic,
            table: None,
            deadline: None,
            stem_count: 0,
            leaf_count: 0,
        }
    }

    /// Caps the search with a wall-clock deadline.
    pub fn with_deadline(mut self, deadline: Instant) -> Searcher<'a, H>
    {
        self.deadline = Some(deadline);
        self
    }

    /// Consults and fills the given transposition table while searching.
    pub fn with_table(mut self, table: &'a TranspositionTable) -> Searcher<'a, H>
    {
        self.table = Some(table);
        self
    }

    /// Searches for the best continuation for `player`.
    ///
    /// Returns the value of the position and the action achieving it; the
    /// action is None only when the search never expanded the root (terminal
    /// position, or an already-exhausted time budget).
    pub fn best_action(&mut self, board: &Board, player: Player, depth: u8) -> (i32, Option<Action>)
    {
        self.negamax(board, player, None, depth, -INF, INF)
    }

    /// Whether the search must stop recursing at this node.
    fn cutoff(&self, depth: u8) -> bool
    {
        depth == 0 || self.out_of_time()
    }

    fn out_of_time(&self) -> bool
    {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    fn negamax(&mut self, board: &Board, player: Player, last: Option<&MoveContext>, depth: u8, alpha: i32, beta: i32) -> (i32, Option<Action>)
    {
        if self.cutoff(depth) || board.is_finished()
        {
            self.leaf_count += 1;
            return (self.heuristic.evaluate(board, player, last, depth), None);
        }

        self.stem_count += 1;

        let alpha_orig = alpha;
        let (mut alpha, mut beta) = (alpha, beta);

        // Try the transposition table, and check for an early return.
        let mut candidate: Option<Action> = None;
        let key = self.table.map(|_| Fingerprint::of(board, player));

        if let (Some(table), Some(key)) = (self.table, key.as_ref())
        {
            if let Some(value) = table.check(key, depth, &mut candidate, &mut alpha, &mut beta)
            {
                return (value, candidate);
            }
        }

        // The enumeration order is fixed by the board; a remembered move is
        // hoisted to the front, everything else keeps its place.
        let mut actions: Vec<Action> = board.legal_actions().collect();
        if let Some(remembered) = candidate
        {
            if let Some(position) = actions.iter().position(|action| *action == remembered)
            {
                actions[..=position].rotate_right(1);
            }
        }

        let (mut best_value, mut best_action) = (-INF, None);

        for action in actions
        {
            let context = MoveContext::record(board, &action);

            let mut child = board.clone();
            if let Err(err) = child.apply_action(&action)
            {
                panic!("{}", err);
            }

            let (child_value, _) = self.negamax(&child, player.flip(), Some(&context), depth - 1, -beta, -alpha);
            let value = -child_value;

            // Strict improvement only: ties keep the earliest action found.
            if value > best_value
            {
                best_value = value;
                best_action = Some(action);
            }

            alpha = alpha.max(value);
            if alpha >= beta
            {
                break;
            }
        }

        // An expired deadline leaves heuristic noise in the subtree, which is
        // not worth remembering.
        if let (Some(table), Some(key)) = (self.table, key)
        {
            if !self.out_of_time()
            {
                let bound = if best_value <= alpha_orig
                {
                    TTBound::Upper
                }
                else if best_value >= beta
                {
                    TTBound::Lower
                }
                else
                {
                    TTBound::Exact
                };

                let entry = TTEntry {
                    depth,
                    bound,
                    value: best_value,
                    mv: best_action,
                };
                table.store(key, entry);
            }
        }

        (best_value, best_action)
    }
}
