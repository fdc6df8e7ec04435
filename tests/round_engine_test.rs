//! Round resolution, scoring and termination.

use rockterm::rps::{
    judge, GameState, Move, Phase, RandomMoves, RoundEngine, RoundError, ScriptedMoves, Side,
    Verdict,
};

fn engine(computer: &[Move]) -> RoundEngine<ScriptedMoves> {
    RoundEngine::new(5, ScriptedMoves::new(computer.to_vec()).unwrap())
}

#[test]
fn mixed_case_rock_beats_scissors() {
    let mut e = engine(&[Move::Scissors]);

    let report = e.resolve_round("ROCK").unwrap();

    assert_eq!(report.outcome.player, Move::Rock);
    assert_eq!(report.outcome.computer, Move::Scissors);
    assert_eq!(report.outcome.verdict, Verdict::PlayerWins);
    assert_eq!(report.state.player_score, 1);
    assert_eq!(report.state.computer_score, 0);
    assert!(report.outcome.message().contains("rock beats scissors"));
    assert!(report.ended.is_none());
}

#[test]
fn five_straight_wins_end_the_game() {
    let mut e = engine(&[Move::Rock]);

    for round in 1..=4 {
        let report = e.play(Move::Paper).unwrap();
        assert_eq!(report.state.player_score, round);
        assert!(report.ended.is_none());
        assert!(report.state.active);
    }

    let last = e.play(Move::Paper).unwrap();
    let ended = last.ended.expect("fifth win ends the game");
    assert_eq!(ended.winner, Side::Player);
    assert_eq!((ended.player_score, ended.computer_score), (5, 0));
    assert!(!last.state.active);
    assert_eq!(e.state().phase(), Phase::GameOver);
}

#[test]
fn computer_can_win_too() {
    let mut e = engine(&[Move::Paper]);
    let reports: Vec<_> = (0..5).map(|_| e.resolve_round("rock").unwrap()).collect();

    let ended = reports[4].ended.unwrap();
    assert_eq!(ended.winner, Side::Computer);
    assert_eq!((ended.player_score, ended.computer_score), (0, 5));
    assert!(ended.message().starts_with("😭 Computer won the game!"));
}

#[test]
fn inactive_game_rejects_rounds() {
    let mut e = RoundEngine::new(1, ScriptedMoves::new([Move::Scissors]).unwrap());
    e.play(Move::Rock).unwrap();
    let frozen = *e.state();

    assert_eq!(e.resolve_round("rock"), Err(RoundError::GameInactive));
    assert_eq!(e.play(Move::Paper), Err(RoundError::GameInactive));
    // Inactive wins over a malformed move.
    assert_eq!(e.resolve_round("lizard"), Err(RoundError::GameInactive));
    assert_eq!(*e.state(), frozen);
}

#[test]
fn unknown_move_leaves_state_alone() {
    let mut e = engine(&[Move::Rock]);
    e.play(Move::Paper).unwrap();
    let before = *e.state();

    let err = e.resolve_round("lizard").unwrap_err();

    assert_eq!(err, RoundError::InvalidMove("lizard".into()));
    assert_eq!(*e.state(), before);
}

#[test]
fn ties_score_nothing() {
    let mut e = engine(&[Move::Scissors]);
    let report = e.play(Move::Scissors).unwrap();

    assert_eq!(report.outcome.verdict, Verdict::Tie);
    assert_eq!(report.state, GameState::new(5));
}

#[test]
fn scores_only_climb_by_one() {
    let mut e = RoundEngine::new(1000, RandomMoves::seeded(3));
    let mut prev = *e.state();

    for i in 0..200 {
        let player = Move::ALL[i % 3];
        let report = e.play(player).unwrap();
        let s = report.state;
        let (dp, dc) = (s.player_score - prev.player_score, s.computer_score - prev.computer_score);
        match report.outcome.verdict {
            Verdict::PlayerWins => assert_eq!((dp, dc), (1, 0)),
            Verdict::ComputerWins => assert_eq!((dp, dc), (0, 1)),
            Verdict::Tie => assert_eq!((dp, dc), (0, 0)),
        }
        assert_eq!(report.outcome.verdict, judge(report.outcome.player, report.outcome.computer));
        prev = s;
    }
}

#[test]
fn threshold_leaves_one_side_at_most() {
    let mut e = RoundEngine::new(3, RandomMoves::seeded(11));
    while e.state().active {
        e.play(Move::Rock).unwrap();
    }
    let s = e.state();
    let at_threshold = [s.player_score, s.computer_score].iter().filter(|n| **n >= 3).count();
    assert_eq!(at_threshold, 1);
}

#[test]
fn scripted_source_needs_at_least_one_move() {
    assert!(ScriptedMoves::new(Vec::new()).is_none());

    let mut e = RoundEngine::new(5, ScriptedMoves::new([Move::Rock, Move::Paper]).unwrap());
    let drawn: Vec<Move> = (0..3).map(|_| e.generate_computer_move()).collect();
    assert_eq!(drawn, [Move::Rock, Move::Paper, Move::Rock]);
}
