use towermind::prelude::*;

/// Builds a board with the standard maximum height from literal rows.
pub fn board_from(rows: &[&[i32]]) -> Board
{
    let percepts: Percepts = rows.iter().map(|row| row.to_vec()).collect();
    Board::new(&percepts, board::consts::MAX_HEIGHT, false).expect("fixture percepts must be valid")
}

/// The total piece count on a board, which merges must conserve.
pub fn total_pieces(board: &Board) -> i32
{
    board.towers().map(|(_, _, h)| h.abs()).sum()
}

/// A position where the only good move for Positive is capturing the
/// enemy four with its lone counter.
pub fn capture_fixture() -> Board
{
    board_from(&[
        &[1, -4, 0],
        &[0, 0, 0],
        &[0, 0, 0],
    ])
}

/// A sparse middlegame with a handful of towers, cheap to search exhaustively.
pub fn sparse_fixture() -> Board
{
    board_from(&[
        &[1, -1, 0, 0],
        &[0, 2, -2, 0],
        &[0, -1, 1, 0],
        &[0, 0, 0, -3],
    ])
}
