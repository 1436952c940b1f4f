use serde::{Deserialize, Serialize};

use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// A move of the tower at (i1, j1) onto the adjacent tower at (i2, j2).
///
/// Coordinates are signed so that off-grid candidates (from neighbour offsets
/// at the edge of the grid) are representable; the board rejects them.
pub struct Action
{
    pub i1: i8,
    pub j1: i8,
    pub i2: i8,
    pub j2: i8,
}

impl Action
{
    /// Constructs a new action.
    pub const fn new(i1: i8, j1: i8, i2: i8, j2: i8) -> Action
    {
        Action { i1, j1, i2, j2 }
    }

    /// Tries to parse whitespace-separated coordinates into an action.
    pub fn parse(args: &[&str]) -> Result<Action>
    {
        let base = Error::for_parse::<Self>(args.join(" "));

        if args.len() != 4
        {
            let err = Error::new(Kind::ParseError, "An action requires exactly four coordinates.".into());
            return Err(err.chain(base));
        }

        let mut coords = [0i8; 4];
        for (slot, arg) in coords.iter_mut().zip(args)
        {
            let Ok(coord) = arg.parse::<i8>()
            else
            {
                let err = Error::for_parse::<i8>((*arg).to_owned());
                return Err(err.chain(base));
            };
            *slot = coord;
        }

        Ok(Action::new(coords[0], coords[1], coords[2], coords[3]))
    }
}

impl std::fmt::Display for Action
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "({}, {}) -> ({}, {})", self.i1, self.j1, self.i2, self.j2)
    }
}

impl FromStr for Action
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let args: Vec<&str> = s.split_whitespace().collect();
        Action::parse(&args)
    }
}
