mod common;
use common::*;

#[cfg(test)]
mod percepts_io
{
    use super::*;
    use std::path::PathBuf;
    use towermind::prelude::*;

    fn scratch_file(name: &str, contents: &str) -> PathBuf
    {
        let path = std::env::temp_dir().join(format!("towermind-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_a_delimited_grid()
    {
        let _setup = setup::setup();

        let path = scratch_file("grid.csv", "0, 1,-1\n\n0, 2, 0\n");
        let loaded = percepts::load(&path).unwrap();

        assert_eq!(loaded, vec![vec![0, 1, -1], vec![0, 2, 0]]);

        let board = Board::new(&loaded, board::consts::MAX_HEIGHT, false).unwrap();
        assert_eq!(board.rows(), 2);
        assert_eq!(board.columns(), 3);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn rejects_ragged_rows()
    {
        let _setup = setup::setup();

        let path = scratch_file("ragged.csv", "0,1\n0,1,-1\n");
        let err = percepts::load(&path).unwrap_err();
        assert_eq!(err.kind, Kind::InvalidPercepts);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn rejects_non_integer_cells()
    {
        let _setup = setup::setup();

        let path = scratch_file("words.csv", "0,one,-1\n");
        let err = percepts::load(&path).unwrap_err();
        assert_eq!(err.kind, Kind::InvalidPercepts);
        assert!(err.msg.contains("one"));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn rejects_missing_files()
    {
        let _setup = setup::setup();

        let err = percepts::load("/definitely/not/a/file.csv").unwrap_err();
        assert_eq!(err.kind, Kind::IoError);
    }

    #[test]
    fn validates_rectangles()
    {
        let _setup = setup::setup();

        assert!(percepts::validate(&[vec![0, 1], vec![1, 0]]).is_ok());
        assert!(percepts::validate(&[]).is_err());
        assert!(percepts::validate(&[vec![]]).is_err());
        assert!(percepts::validate(&[vec![0], vec![0, 1]]).is_err());
    }
}
