use crate::prelude::*;

impl std::fmt::Display for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let lines = self
            .percepts(false)
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&cell| if cell != 0 { format!("{:>+2}", cell) } else { " .".to_owned() })
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<String>>();

        write!(f, "{}", lines.join("\n"))
    }
}

impl std::fmt::Debug for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "Board ({}x{}, max {})\n{}", self.rows(), self.columns(), self.max_height(), self)
    }
}
