use arrayvec::ArrayVec;
use itertools::iproduct;

use crate::prelude::*;

mod printers;

pub mod consts
{
    /// The side lengths of the standard grid.
    pub const ROWS: usize = 9;
    pub const COLUMNS: usize = 9;

    /// The tallest tower the standard variant allows.
    pub const MAX_HEIGHT: i32 = 5;
}

use consts::*;

/// An occupied cell: row, column, and signed height.
pub type Tower = (usize, usize, i32);

/// The standard opening layout: a diagonal band of alternating single counters.
const STANDARD: [[i32; COLUMNS]; ROWS] = [
    [0, 0, 1, -1, 0, 0, 0, 0, 0],
    [0, 1, -1, 1, -1, 0, 0, 0, 0],
    [0, -1, 1, -1, 1, -1, 1, 0, 0],
    [0, 1, -1, 1, -1, 1, -1, 1, -1],
    [1, -1, 1, -1, 0, -1, 1, -1, 1],
    [-1, 1, -1, 1, -1, 1, -1, 1, 0],
    [0, 0, 1, -1, 1, -1, 1, -1, 0],
    [0, 0, 0, 0, -1, 1, -1, 1, 0],
    [0, 0, 0, 0, 0, -1, 1, 0, 0],
];

#[derive(Clone, PartialEq, Eq)]
/// A grid of towers.
///
/// The absolute value of a cell is the height of the tower there; the sign is
/// the colour of its top-most counter. Zero is an empty cell, and cells only
/// ever become empty: towers merge, they never split.
pub struct Board
{
    grid:       Vec<Vec<i32>>,
    rows:       usize,
    columns:    usize,
    max_height: i32,
}

impl Default for Board
{
    fn default() -> Self
    {
        Board::standard()
    }
}

impl Board
{
    /// Builds a board from percepts, deep-copying the grid.
    ///
    /// With `invert`, every sign is flipped, giving the opposing player's view
    /// of the same position.
    pub fn new(percepts: &[Vec<i32>], max_height: i32, invert: bool) -> Result<Board>
    {
        percepts::validate(percepts)?;

        if max_height < 1
        {
            let msg = format!("A maximum height of {} leaves no playable towers.", max_height);
            return Err(Error::new(Kind::InvalidPercepts, msg));
        }

        let mul = if invert { -1 } else { 1 };
        let mut grid: Vec<Vec<i32>> = Vec::with_capacity(percepts.len());

        for (i, row) in percepts.iter().enumerate()
        {
            for (j, &cell) in row.iter().enumerate()
            {
                if cell.abs() > max_height
                {
                    let msg = format!("Cell ({}, {}) holds a tower of height {}, above the maximum {}.", i, j, cell.abs(), max_height);
                    return Err(Error::new(Kind::InvalidPercepts, msg));
                }
            }
            grid.push(row.iter().map(|&cell| mul * cell).collect());
        }

        Ok(Board {
            rows: grid.len(),
            columns: grid[0].len(),
            grid,
            max_height,
        })
    }

    /// The standard opening position.
    pub fn standard() -> Board
    {
        Board {
            grid:       STANDARD.iter().map(|row| row.to_vec()).collect(),
            rows:       ROWS,
            columns:    COLUMNS,
            max_height: MAX_HEIGHT,
        }
    }

    /// The signed height at the given cell.
    pub fn cell(&self, i: usize, j: usize) -> i32
    {
        self.grid[i][j]
    }

    pub fn columns(&self) -> usize
    {
        self.columns
    }

    pub fn max_height(&self) -> i32
    {
        self.max_height
    }

    pub fn rows(&self) -> usize
    {
        self.rows
    }

    /// Yields every tower as (row, column, signed height), scanning row-major.
    ///
    /// The iterator borrows the board and re-scans the grid on each call.
    pub fn towers(&self) -> impl Iterator<Item = Tower> + '_
    {
        iproduct!(0..self.rows, 0..self.columns).filter_map(move |(i, j)| {
            let h = self.grid[i][j];
            (h != 0).then_some((i, j, h))
        })
    }

    /// Whether the action is legal on this board.
    ///
    /// A pure predicate: out-of-grid coordinates and degenerate actions are
    /// simply invalid, never a panic.
    pub fn is_action_valid(&self, action: &Action) -> bool
    {
        let (i1, j1, i2, j2) = (action.i1 as i32, action.j1 as i32, action.i2 as i32, action.j2 as i32);

        if i1 < 0
            || j1 < 0
            || i2 < 0
            || j2 < 0
            || i1 >= self.rows as i32
            || j1 >= self.columns as i32
            || i2 >= self.rows as i32
            || j2 >= self.columns as i32
            || (i1 == i2 && j1 == j2)
            || (i1 - i2).abs() > 1
            || (j1 - j2).abs() > 1
        {
            return false;
        }

        let h1 = self.grid[i1 as usize][j1 as usize].abs();
        let h2 = self.grid[i2 as usize][j2 as usize].abs();

        h1 >= 1 && h1 < self.max_height && h2 >= 1 && h2 < self.max_height && h1 + h2 <= self.max_height
    }

    /// All valid actions moving the tower at (i, j): at most its 8 neighbours.
    pub fn actions_for_tower(&self, i: usize, j: usize) -> ArrayVec<Action, 8>
    {
        let mut actions = ArrayVec::new();
        let h = self.grid[i][j].abs();

        if h > 0 && h < self.max_height
        {
            for (di, dj) in iproduct!(-1i8..=1, -1i8..=1)
            {
                let action = Action::new(i as i8, j as i8, i as i8 + di, j as i8 + dj);
                if self.is_action_valid(&action)
                {
                    actions.push(action);
                }
            }
        }

        actions
    }

    /// Whether the tower at (i, j) has at least one legal move.
    pub fn is_tower_movable(&self, i: usize, j: usize) -> bool
    {
        !self.actions_for_tower(i, j).is_empty()
    }

    /// Yields every valid action on this board.
    ///
    /// The order is fixed: towers row-major, then neighbour offsets with the
    /// row delta outermost. Search tie-breaking depends on this order.
    pub fn legal_actions(&self) -> impl Iterator<Item = Action> + '_
    {
        self.towers().flat_map(move |(i, j, _)| self.actions_for_tower(i, j))
    }

    /// Plays an action, merging the moved tower onto its destination.
    ///
    /// The merged tower takes the moving tower's sign, and the origin cell is
    /// emptied. Mutates in place and returns the board for chaining; callers
    /// that need the pre-move position must clone first.
    pub fn apply_action(&mut self, action: &Action) -> Result<&mut Board>
    {
        if !self.is_action_valid(action)
        {
            return Err(Error::new(Kind::InvalidAction, action.to_string()));
        }

        let (i1, j1) = (action.i1 as usize, action.j1 as usize);
        let (i2, j2) = (action.i2 as usize, action.j2 as usize);

        let h1 = self.grid[i1][j1];
        let h2 = self.grid[i2][j2];

        self.grid[i2][j2] = h1.signum() * (h1.abs() + h2.abs());
        self.grid[i1][j1] = 0;

        Ok(self)
    }

    /// Whether no more moves can be made by either player.
    pub fn is_finished(&self) -> bool
    {
        self.legal_actions().next().is_none()
    }

    /// Scores the position: the difference in tower counts, breaking exact
    /// ties by the difference in full-height tower counts.
    ///
    /// On a finished board this is the final result (> 0: Positive wins,
    /// < 0: Negative wins, 0: draw).
    pub fn score(&self) -> i32
    {
        let mut score: i32 = self.towers().map(|(_, _, h)| h.signum()).sum();

        if score == 0
        {
            score = self
                .towers()
                .filter(|&(_, _, h)| h.abs() == self.max_height)
                .map(|(_, _, h)| h.signum())
                .sum();
        }

        score
    }

    /// Copies the grid back out as percepts, optionally flipping every sign
    /// to present the opposing player's view.
    pub fn percepts(&self, invert: bool) -> Percepts
    {
        let mul = if invert { -1 } else { 1 };
        self.grid.iter().map(|row| row.iter().map(|&cell| mul * cell).collect()).collect()
    }
}
