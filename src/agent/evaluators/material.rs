use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default)]
/// The plain material heuristic: the board's own score, signed for the side
/// being evaluated. No tactical knowledge at all.
pub struct Material;

impl Heuristic for Material
{
    fn evaluate(&self, board: &Board, player: Player, _last: Option<&MoveContext>, _depth_left: u8) -> i32
    {
        board.score() * player.sign()
    }
}
