//! Alpha-beta search in the explicit max/min formulation.
//!
//! Boards are scored with their own `score()`, so callers must present a view
//! in which the maximizing player is positive; with the same cutoff this
//! chooses the same actions as the negamax formulation.

use crate::prelude::*;

/// Searches `depth` plies ahead for the best action of the positive player.
pub fn search(board: &Board, depth: u8) -> (i32, Option<Action>)
{
    max_value(board, -INF, INF, depth)
}

fn max_value(board: &Board, alpha: i32, beta: i32, depth: u8) -> (i32, Option<Action>)
{
    if depth == 0 || board.is_finished()
    {
        return (board.score(), None);
    }

    let mut alpha = alpha;
    let (mut best_value, mut best_action) = (-INF, None);

    for action in board.legal_actions()
    {
        let mut child = board.clone();
        if let Err(err) = child.apply_action(&action)
        {
            panic!("{}", err);
        }

        let (value, _) = min_value(&child, alpha, beta, depth - 1);

        if value > best_value
        {
            best_value = value;
            best_action = Some(action);
            alpha = alpha.max(best_value);
        }

        if best_value >= beta
        {
            break;
        }
    }

    (best_value, best_action)
}

fn min_value(board: &Board, alpha: i32, beta: i32, depth: u8) -> (i32, Option<Action>)
{
    if depth == 0 || board.is_finished()
    {
        return (board.score(), None);
    }

    let mut beta = beta;
    let (mut best_value, mut best_action) = (INF, None);

    for action in board.legal_actions()
    {
        let mut child = board.clone();
        if let Err(err) = child.apply_action(&action)
        {
            panic!("{}", err);
        }

        let (value, _) = max_value(&child, alpha, beta, depth - 1);

        if value < best_value
        {
            best_value = value;
            best_action = Some(action);
            beta = beta.min(best_value);
        }

        if best_value <= alpha
        {
            break;
        }
    }

    (best_value, best_action)
}
