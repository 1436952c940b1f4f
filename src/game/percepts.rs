use std::path::Path;

use crate::prelude::*;

/// The raw grid an agent perceives: one row of signed cell values per rank.
pub type Percepts = Vec<Vec<i32>>;

/// Checks that percepts form a usable rectangular grid.
pub fn validate(percepts: &[Vec<i32>]) -> Result<()>
{
    if percepts.is_empty() || percepts[0].is_empty()
    {
        return Err(Error::new(Kind::InvalidPercepts, "Percepts must contain at least one row and one column.".into()));
    }

    let columns = percepts[0].len();
    for (i, row) in percepts.iter().enumerate()
    {
        if row.len() != columns
        {
            let msg = format!("Row {} has {} cells, but row 0 has {}.", i, row.len(), columns);
            return Err(Error::new(Kind::InvalidPercepts, msg));
        }
    }

    Ok(())
}

/// Loads percepts from a delimited text file, one comma-separated row per line.
///
/// Blank lines are skipped; anything else that fails to parse as an integer
/// is an error, never a silent coercion.
pub fn load(path: impl AsRef<Path>) -> Result<Percepts>
{
    let contents = std::fs::read_to_string(path.as_ref())?;
    let mut percepts: Percepts = Vec::new();

    for (number, line) in contents.lines().enumerate()
    {
        if line.trim().is_empty()
        {
            continue;
        }

        let mut row: Vec<i32> = Vec::new();
        for cell in line.split(',')
        {
            let Ok(value) = cell.trim().parse::<i32>()
            else
            {
                let msg = format!("Line {}: '{}' is not an integer cell.", number + 1, cell.trim());
                return Err(Error::new(Kind::InvalidPercepts, msg));
            };
            row.push(value);
        }
        percepts.push(row);
    }

    validate(&percepts)?;
    Ok(percepts)
}
