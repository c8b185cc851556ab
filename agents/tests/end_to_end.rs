use cube_agents::{play_game, GameOutcome, MoveLearner, RandomAgent, ScoreTable};
use cube_core::{is_legal, legal_moves, move_to_identifier, Board, Color, Coord, Move};

fn c(x: u8, y: u8, z: u8) -> Coord {
    Coord::new(x, y, z).unwrap()
}

#[test]
fn one_round_from_the_start() {
    let dir = tempfile::tempdir().unwrap();
    let mut learner = MoveLearner::load_seeded(dir.path().join("ai_memory.json"), 9).unwrap();
    let mut board = Board::starting_position();
    let mut history = Vec::new();

    let opening = Move::new(c(1, 0, 0), c(1, 1, 0));
    assert!(is_legal(&board, Color::White, opening));
    board.apply_move(opening.from, opening.to).unwrap();
    history.push(move_to_identifier(opening));

    let replies = legal_moves(&board, Color::Black);
    let reply = learner.choose_move(&replies, &board).unwrap();
    assert!(replies.contains(&reply));
    let captured = board.apply_move(reply.from, reply.to).unwrap();
    history.push(move_to_identifier(reply));

    assert!(captured.is_none());
    assert_eq!(board.piece_count(), 6);
    assert!(!board.is_game_over());
    assert_eq!(history.len(), 2);
}

#[test]
fn empty_table_spreads_choices_over_all_replies() {
    let dir = tempfile::tempdir().unwrap();
    let mut learner = MoveLearner::load_seeded(dir.path().join("ai_memory.json"), 5).unwrap();
    let mut board = Board::starting_position();
    board.apply_move(c(1, 0, 0), c(1, 1, 0)).unwrap();
    let replies = legal_moves(&board, Color::Black);

    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
        seen.insert(learner.choose_move(&replies, &board).unwrap());
    }
    assert_eq!(seen.len(), replies.len());
}

#[test]
fn training_games_feed_the_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ai_memory.json");
    let mut learner = MoveLearner::load_seeded(&path, 3).unwrap();
    let mut opponent = RandomAgent::seeded(4);

    let mut finished = 0;
    for _ in 0..10 {
        if let GameOutcome::Finished { result, history } =
            play_game(&mut opponent, &mut learner, 300).unwrap()
        {
            learner.record_result(&history, result).unwrap();
            finished += 1;
        }
    }

    let on_disk = ScoreTable::load(&path).unwrap();
    assert_eq!(&on_disk, learner.table());
    if finished > 0 {
        assert!(!on_disk.is_empty());
    }
}

#[test]
fn reachable_positions_only_offer_own_pieces() {
    use cube_agents::Agent;

    let mut white = RandomAgent::seeded(21);
    let mut black = RandomAgent::seeded(22);

    for _ in 0..30 {
        let mut board = Board::starting_position();
        let mut color = Color::White;
        let mut plies = 0;

        while !board.is_game_over() && plies < 300 {
            let moves = legal_moves(&board, color);
            for mv in &moves {
                let piece = board.piece_at(mv.from).expect("source occupied");
                assert_eq!(piece.color, color);
                assert!(!board.piece_at(mv.to).map_or(false, |p| p.color == color));
            }

            let agent: &mut dyn Agent = match color {
                Color::White => &mut white,
                Color::Black => &mut black,
            };
            let mv = agent.choose_move(&board, &moves).unwrap();
            let before = board.piece_count();
            let captured = board.apply_move(mv.from, mv.to).unwrap();
            let expected = if captured.is_some() { before - 1 } else { before };
            assert_eq!(board.piece_count(), expected);

            color = color.opponent();
            plies += 1;
        }

        if board.is_game_over() {
            assert_eq!(board.result().winner(), Some(color.opponent()));
        }
    }
}
