use crate::prelude::*;

#[repr(i8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The players in a game of towers.
///
/// A player's discriminant is the sign its towers carry on the grid.
pub enum Player
{
    Positive = 1,
    Negative = -1,
}

impl Player
{
    /// Gets the other player.
    pub fn flip(&self) -> Self
    {
        match self
        {
            | Self::Positive => Self::Negative,
            | Self::Negative => Self::Positive,
        }
    }

    /// Constructs a player from the sign of a nonzero value.
    pub fn of_sign(value: i32) -> Result<Self>
    {
        match value.signum()
        {
            | 1 => Ok(Self::Positive),
            | -1 => Ok(Self::Negative),
            | _ => Err(Error::for_parse::<Self>(value.to_string())),
        }
    }

    /// The sign this player's towers carry on the grid.
    pub fn sign(&self) -> i32
    {
        *self as i8 as i32
    }
}

impl std::fmt::Display for Player
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::Positive => "Positive",
            | Self::Negative => "Negative",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Player
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "Positive" | "+1" | "1" => Ok(Self::Positive),
            | "Negative" | "-1" => Ok(Self::Negative),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
