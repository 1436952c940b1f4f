mod common;
use common::*;

#[cfg(test)]
mod board
{
    use super::*;
    use towermind::prelude::*;

    #[test]
    fn standard_layout_has_deterministic_actions()
    {
        let _setup = setup::setup();
        let board = Board::standard();

        let first: Vec<Action> = board.legal_actions().collect();
        let second: Vec<Action> = board.legal_actions().collect();

        assert!(!first.is_empty());
        assert_eq!(first, second);

        // Row-major towers, row offset outermost: the lone counter at (0, 2)
        // reaches its right-hand neighbour first.
        assert_eq!(first[0], Action::new(0, 2, 0, 3));
    }

    #[test]
    fn merge_follows_the_moving_tower()
    {
        let _setup = setup::setup();

        let mut board = boards::board_from(&[&[1, -1], &[0, 0]]);
        board.apply_action(&Action::new(0, 0, 0, 1)).unwrap();
        assert_eq!(board.percepts(false), vec![vec![0, 2], vec![0, 0]]);

        let mut board = boards::board_from(&[&[-1, 1], &[0, 0]]);
        board.apply_action(&Action::new(0, 0, 0, 1)).unwrap();
        assert_eq!(board.percepts(false), vec![vec![0, -2], vec![0, 0]]);
    }

    #[test]
    fn merges_conserve_pieces_and_respect_the_height_bound()
    {
        let _setup = setup::setup();

        let mut board = Board::standard();
        let pieces = boards::total_pieces(&board);

        for _ in 0..20
        {
            let Some(action) = board.legal_actions().next()
            else
            {
                break;
            };
            board.apply_action(&action).unwrap();

            assert_eq!(boards::total_pieces(&board), pieces);
            assert!(board.towers().all(|(_, _, h)| h.abs() <= board.max_height()));
        }
    }

    #[test]
    fn clones_share_nothing()
    {
        let _setup = setup::setup();

        let board = Board::standard();
        let before = board.percepts(false);

        let mut clone = board.clone();
        let action = clone.legal_actions().next().unwrap();
        clone.apply_action(&action).unwrap();

        assert_eq!(board.percepts(false), before);
        assert_ne!(clone.percepts(false), before);
    }

    #[test]
    fn score_is_antisymmetric_under_inversion()
    {
        let _setup = setup::setup();

        for board in [Board::standard(), boards::sparse_fixture(), boards::capture_fixture()]
        {
            let inverted = Board::new(&board.percepts(false), board.max_height(), true).unwrap();
            assert_eq!(board.score(), -inverted.score());
        }
    }

    #[test]
    fn score_breaks_exact_ties_on_full_towers()
    {
        let _setup = setup::setup();

        // One tower each, but only Positive owns a full one.
        let board = boards::board_from(&[&[5, -4], &[0, 0]]);
        assert_eq!(board.score(), 1);

        // Unequal counts never consult the tie-break.
        let board = boards::board_from(&[&[0, -4], &[-1, 1]]);
        assert_eq!(board.score(), -1);
    }

    #[test]
    fn finished_means_no_actions()
    {
        let _setup = setup::setup();

        let live = [Board::standard(), boards::sparse_fixture()];
        let dead = [
            boards::board_from(&[&[5, 0], &[0, -5]]),
            boards::board_from(&[&[5, -5], &[0, 5]]),
        ];

        for board in live.iter().chain(dead.iter())
        {
            assert_eq!(board.is_finished(), board.legal_actions().count() == 0);
        }

        assert!(dead.iter().all(|board| board.is_finished()));
        assert!(live.iter().all(|board| !board.is_finished()));
    }

    #[test]
    fn towers_rescan_the_grid()
    {
        let _setup = setup::setup();

        let board = boards::sparse_fixture();
        let first: Vec<Tower> = board.towers().collect();
        let second: Vec<Tower> = board.towers().collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
    }

    #[test]
    fn validity_is_a_pure_predicate()
    {
        let _setup = setup::setup();
        let board = boards::sparse_fixture();

        // Off-grid, degenerate, and distant candidates.
        assert!(!board.is_action_valid(&Action::new(-1, 0, 0, 0)));
        assert!(!board.is_action_valid(&Action::new(0, 0, 0, -1)));
        assert!(!board.is_action_valid(&Action::new(0, 0, 4, 0)));
        assert!(!board.is_action_valid(&Action::new(0, 0, 0, 0)));
        assert!(!board.is_action_valid(&Action::new(0, 0, 0, 2)));

        // Empty origins and destinations.
        assert!(!board.is_action_valid(&Action::new(0, 2, 0, 1)));
        assert!(!board.is_action_valid(&Action::new(0, 0, 1, 0)));

        // A perfectly ordinary merge.
        assert!(board.is_action_valid(&Action::new(0, 0, 0, 1)));
    }

    #[test]
    fn full_towers_can_neither_move_nor_grow()
    {
        let _setup = setup::setup();

        let board = boards::board_from(&[&[5, 1], &[0, 0]]);
        assert!(!board.is_action_valid(&Action::new(0, 0, 0, 1)));
        assert!(!board.is_action_valid(&Action::new(0, 1, 0, 0)));
        assert!(!board.is_tower_movable(0, 0));

        let board = boards::board_from(&[&[3, 3], &[0, 0]]);
        assert!(!board.is_action_valid(&Action::new(0, 0, 0, 1)));
        assert!(board.is_finished());
    }

    #[test]
    fn tower_actions_stay_within_the_neighbourhood()
    {
        let _setup = setup::setup();
        let board = Board::standard();

        for (i, j, _) in board.towers()
        {
            let actions = board.actions_for_tower(i, j);
            assert!(actions.len() <= 8);
            assert_eq!(board.is_tower_movable(i, j), !actions.is_empty());
            assert!(actions.iter().all(|action| board.is_action_valid(action)));
        }
    }

    #[test]
    fn invalid_actions_are_rejected_and_diagnosed()
    {
        let _setup = setup::setup();

        let mut board = boards::sparse_fixture();
        let before = board.percepts(false);

        let action = Action::new(0, 0, 0, 2);
        let err = board.apply_action(&action).unwrap_err();

        assert_eq!(err.kind, Kind::InvalidAction);
        assert_eq!(err.msg, action.to_string());
        assert_eq!(board.percepts(false), before);
    }

    #[test]
    fn construction_rejects_malformed_percepts()
    {
        let _setup = setup::setup();

        let empty: Vec<Vec<i32>> = Vec::new();
        assert_eq!(Board::new(&empty, 5, false).unwrap_err().kind, Kind::InvalidPercepts);

        let ragged = vec![vec![0, 1], vec![0]];
        assert_eq!(Board::new(&ragged, 5, false).unwrap_err().kind, Kind::InvalidPercepts);

        let overheight = vec![vec![6, 0]];
        assert_eq!(Board::new(&overheight, 5, false).unwrap_err().kind, Kind::InvalidPercepts);

        let unplayable = vec![vec![0, 0]];
        assert_eq!(Board::new(&unplayable, 0, false).unwrap_err().kind, Kind::InvalidPercepts);
    }

    #[test]
    fn actions_and_players_round_trip_through_text()
    {
        let _setup = setup::setup();

        let action: Action = "0 2 0 3".parse().unwrap();
        assert_eq!(action, Action::new(0, 2, 0, 3));
        assert_eq!(action.to_string(), "(0, 2) -> (0, 3)");

        assert!("0 2 0".parse::<Action>().is_err());
        assert!("0 2 0 x".parse::<Action>().is_err());

        assert_eq!("1".parse::<Player>().unwrap(), Player::Positive);
        assert_eq!("-1".parse::<Player>().unwrap(), Player::Negative);
        assert_eq!(Player::of_sign(-3).unwrap(), Player::Negative);
        assert!(Player::of_sign(0).is_err());
        assert_eq!(Player::Positive.flip().sign(), -1);
    }

    #[test]
    fn inverted_views_flip_every_sign()
    {
        let _setup = setup::setup();

        let board = boards::sparse_fixture();
        let inverted = Board::new(&board.percepts(false), board.max_height(), true).unwrap();

        assert_eq!(inverted.percepts(true), board.percepts(false));
        assert_eq!(inverted.percepts(false), board.percepts(true));
    }
}
