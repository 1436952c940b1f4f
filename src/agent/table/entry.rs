use serde::{Deserialize, Serialize};

use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// How a stored value relates to the true minimax value of its position.
pub enum TTBound
{
    /// The stored value is the true value.
    Exact,

    /// A beta cutoff occurred: the true value is at least the stored value.
    Lower,

    /// Alpha was never raised: the true value is at most the stored value.
    Upper,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// The cached result of searching a position to some depth.
pub struct TTEntry
{
    pub depth: u8,
    pub bound: TTBound,
    pub value: i32,
    pub mv:    Option<Action>,
}
