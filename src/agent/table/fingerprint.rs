use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// A canonical encoding of (side to move, board contents) used as a cache key.
///
/// Every cell is encoded in row-major order, empty ones included, so the
/// encoding is injective: two distinct positions can never share a key. The
/// table trusts Exact entries verbatim, which makes a collision a correctness
/// bug rather than a slowdown.
pub struct Fingerprint(String);

impl Fingerprint
{
    /// Fingerprints any board; no cooperation from the board type is needed.
    pub fn of(board: &Board, to_move: Player) -> Fingerprint
    {
        let mut key = String::with_capacity(2 * board.rows() * board.columns() + 1);

        key.push(match to_move
        {
            | Player::Positive => 'p',
            | Player::Negative => 'n',
        });

        for i in 0..board.rows()
        {
            for j in 0..board.columns()
            {
                // Infallible for String.
                let _ = write!(key, ",{}", board.cell(i, j));
            }
        }

        Fingerprint(key)
    }

    pub fn as_str(&self) -> &str
    {
        &self.0
    }
}

impl From<String> for Fingerprint
{
    fn from(value: String) -> Self
    {
        Fingerprint(value)
    }
}

impl std::fmt::Display for Fingerprint
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}
