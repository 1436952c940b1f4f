use crate::prelude::*;

/// Completing a full tower on top of an enemy four.
const CAPTURE_FOUR: i32 = 160;

/// Completing a full tower on top of an own four.
const SAVE_FOUR: i32 = 150;

/// A 2-on-3 or 3-on-2 merge over an enemy tower.
const CAPTURE_SPLIT: i32 = 140;

/// The friendly equivalent of the split merge.
const MERGE_SPLIT: i32 = 135;

/// Forming an own pair, or denying the opponent one.
const PAIR: i32 = 20;

/// Burying an opponent pair under an own pair.
const SMOTHER_PAIR: i32 = 15;

#[derive(Clone, Copy, Debug, Default)]
/// A tactical heuristic: raw score plus fixed bonuses for recognized merge
/// patterns on the action that led here, with a mild preference for reaching
/// good positions in fewer plies.
///
/// Values are in millipoints: the total is scaled by `RESOLUTION +
/// depth_left`, the integer form of multiplying by `1 + 0.001 * depth_left`.
pub struct TowerValue;

impl Heuristic for TowerValue
{
    fn evaluate(&self, board: &Board, player: Player, last: Option<&MoveContext>, depth_left: u8) -> i32
    {
        let mut score = board.score();

        if let Some(context) = last
        {
            score += Self::pattern_bonus(context);
        }

        score * (RESOLUTION + depth_left as i32) * player.sign()
    }
}

impl TowerValue
{
    /// Scores the merge pattern of an action, positive when it favours the
    /// player whose tower moved.
    ///
    /// The inputs are the signed heights recorded before the merge; the moved
    /// tower's sign decides who the bonus belongs to.
    fn pattern_bonus(context: &MoveContext) -> i32
    {
        let mover = context.origin.signum();
        let friendly = context.origin.signum() == context.target.signum();
        let heights = (context.origin.abs(), context.target.abs());

        let bonus = match heights
        {
            | (1, 4) | (4, 1) if !friendly => CAPTURE_FOUR,
            | (1, 4) | (4, 1) => SAVE_FOUR,
            | (2, 3) | (3, 2) if !friendly => CAPTURE_SPLIT,
            | (2, 3) | (3, 2) => MERGE_SPLIT,
            | (1, 1) => PAIR,
            | (2, 2) if !friendly => SMOTHER_PAIR,
            | _ => 0,
        };

        bonus * mover
    }
}
