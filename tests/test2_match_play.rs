use rusty_tour::model::{HoleResult, MatchState, Side, StatusState};
use rusty_tour::score::{
    determine_match_result, format_match_play_result, match_play_result, match_play_status,
    singles_hole_results,
};

fn results(codes: &[i32]) -> Vec<HoleResult> {
    codes.iter().map(|c| HoleResult::from(*c)).collect()
}

/// `halved` halved holes followed by `wins` holes won by `side`.
fn run(halved: usize, wins: usize, side: Side) -> Vec<HoleResult> {
    let win = match side {
        Side::A => HoleResult::SideA,
        Side::B => HoleResult::SideB,
    };
    let mut v = vec![HoleResult::Halved; halved];
    v.extend(std::iter::repeat_n(win, wins));
    v
}

#[test]
fn test_match_play_result() {
    assert_eq!(match_play_result(Some(4), Some(5), 1, 0.0, 0.0), HoleResult::SideA);
    assert_eq!(match_play_result(Some(6), Some(5), 1, 0.0, 0.0), HoleResult::SideB);
    assert_eq!(match_play_result(Some(5), Some(5), 1, 0.0, 0.0), HoleResult::Halved);

    // B gets a stroke on the hardest hole and halves it
    assert_eq!(match_play_result(Some(4), Some(5), 1, 0.0, 1.0), HoleResult::Halved);
    // but not on stroke index 2
    assert_eq!(match_play_result(Some(4), Some(5), 2, 0.0, 1.0), HoleResult::SideA);

    assert_eq!(match_play_result(None, Some(5), 1, 0.0, 0.0), HoleResult::Halved);
    assert_eq!(match_play_result(Some(4), Some(0), 1, 0.0, 0.0), HoleResult::Halved);
}

#[test]
fn test_match_play_result_with_huge_scores() {
    // compared exactly, not wrapped through i32
    assert_eq!(
        match_play_result(Some(3_000_000_000), Some(2_147_483_648), 1, 0.0, 0.0),
        HoleResult::SideB
    );
    assert_eq!(
        match_play_result(Some(u32::MAX), Some(u32::MAX), 1, f64::MAX, f64::MAX),
        HoleResult::Halved
    );
    assert_eq!(match_play_result(Some(4), Some(4), 1, 0.0, 1e12), HoleResult::SideB);
}

#[test]
fn test_hole_result_codes() {
    assert_eq!(HoleResult::from(1).value(), 1);
    assert_eq!(HoleResult::from(-1).value(), -1);
    assert_eq!(HoleResult::from(0), HoleResult::Halved);
    assert_eq!(HoleResult::from(3), HoleResult::SideA);
    assert_eq!(HoleResult::SideB.winner(), Some(Side::B));
    assert_eq!(HoleResult::Halved.winner(), None);
}

#[test]
fn test_match_play_status() {
    let status = match_play_status(&results(&[1, 1, -1, 0]));
    assert_eq!(status.state, StatusState::Up);
    assert_eq!(status.difference, 1);
    assert_eq!(status.leader(), Some(Side::A));

    let status = match_play_status(&results(&[-1, -1]));
    assert_eq!(status.state, StatusState::Down);
    assert_eq!(status.difference, 2);

    let status = match_play_status(&[]);
    assert_eq!(status.state, StatusState::AllSquare);
    assert_eq!(status.difference, 0);
    assert_eq!(status.state.to_string(), "ALL SQUARE");
}

#[test]
fn test_format_match_play_result() {
    assert_eq!(format_match_play_result(3, 2), "3&2");
    assert_eq!(format_match_play_result(4, 0), "4 UP");
    assert_eq!(format_match_play_result(1, 1), "1&1");
    assert_eq!(format_match_play_result(10, 8), "10&8");
}

#[test]
fn test_straight_wins_decided_at_first_possible_hole() {
    // sixteen straight wins: after hole 10 the lead of 10 beats the 8 left
    let outcome = determine_match_result(&run(0, 16, Side::A), 18);
    assert!(outcome.is_over);
    assert_eq!(outcome.state, MatchState::Decided);
    assert_eq!(outcome.ended_on_hole, 10);
    assert_eq!(outcome.difference, 10);
    assert_eq!(outcome.holes_remaining, 8);
    assert_eq!(outcome.notation, "10&8");
    assert_eq!(outcome.winner(), Some(Side::A));
}

#[test]
fn test_decided_on_sixteenth() {
    let outcome = determine_match_result(&run(13, 3, Side::A), 18);
    assert!(outcome.is_over);
    assert_eq!(outcome.ended_on_hole, 16);
    assert_eq!(outcome.notation, "3&2");
    assert_eq!(outcome.leader, Some(Side::A));
}

#[test]
fn test_decided_on_fourteenth_for_either_side() {
    let outcome = determine_match_result(&run(9, 5, Side::A), 18);
    assert_eq!(outcome.ended_on_hole, 14);
    assert_eq!(outcome.notation, "5&4");
    assert_eq!(outcome.leader, Some(Side::A));

    let outcome = determine_match_result(&run(9, 5, Side::B), 18);
    assert_eq!(outcome.ended_on_hole, 14);
    assert_eq!(outcome.notation, "5&4");
    assert_eq!(outcome.leader, Some(Side::B));
    assert_eq!(outcome.winner(), Some(Side::B));
}

#[test]
fn test_holes_entered_after_decision_do_not_change_it() {
    let mut played_out = run(13, 3, Side::A);
    played_out.push(HoleResult::SideB);
    played_out.push(HoleResult::SideB);

    let outcome = determine_match_result(&played_out, 18);
    assert_eq!(outcome.state, MatchState::Decided);
    assert_eq!(outcome.ended_on_hole, 16);
    assert_eq!(outcome.notation, "3&2");
}

#[test]
fn test_won_on_last_hole() {
    let outcome = determine_match_result(&run(17, 1, Side::A), 18);
    assert!(outcome.is_over);
    assert_eq!(outcome.state, MatchState::Decided);
    assert_eq!(outcome.ended_on_hole, 18);
    assert_eq!(outcome.holes_remaining, 0);
    assert_eq!(outcome.notation, "1 UP");
}

#[test]
fn test_all_square_after_all_holes() {
    let mut halved = results(&[1, -1, 1, -1]);
    halved.extend(run(14, 0, Side::A));
    let outcome = determine_match_result(&halved, 18);
    assert!(outcome.is_over);
    assert_eq!(outcome.state, MatchState::AllSquareFinal);
    assert_eq!(outcome.notation, "AS");
    assert_eq!(outcome.ended_on_hole, 18);
    assert_eq!(outcome.leader, None);
    assert_eq!(outcome.winner(), None);
}

#[test]
fn test_match_in_progress() {
    let outcome = determine_match_result(&results(&[1, 1, 0]), 18);
    assert!(!outcome.is_over);
    assert_eq!(outcome.state, MatchState::InProgress);
    assert_eq!(outcome.notation, "2 UP");
    assert_eq!(outcome.holes_remaining, 15);
    assert_eq!(outcome.ended_on_hole, 0);
    assert!(!outcome.dormie);

    let outcome = determine_match_result(&results(&[-1]), 18);
    assert_eq!(outcome.notation, "1 DOWN");
    assert_eq!(outcome.leader, Some(Side::B));

    let outcome = determine_match_result(&[], 18);
    assert_eq!(outcome.notation, "AS");
    assert_eq!(outcome.holes_remaining, 18);
    assert!(!outcome.is_over);
}

#[test]
fn test_dormie() {
    let outcome = determine_match_result(&run(10, 4, Side::A), 18);
    assert!(!outcome.is_over);
    assert!(outcome.dormie);
    assert_eq!(outcome.notation, "4 UP");
    assert_eq!(outcome.holes_remaining, 4);
}

#[test]
fn test_nine_hole_match() {
    let outcome = determine_match_result(&run(4, 3, Side::B), 9);
    assert_eq!(outcome.ended_on_hole, 7);
    assert_eq!(outcome.notation, "3&2");
}

#[test]
fn test_singles_hole_results_stop_at_last_entered_hole() {
    let a = [Some(4), Some(5), Some(4), None];
    let b = [Some(5), Some(5), Some(3), None];
    let holes = singles_hole_results(&a, &b, &[1, 2, 3, 4], 0.0, 0.0);
    assert_eq!(
        holes,
        vec![HoleResult::SideA, HoleResult::Halved, HoleResult::SideB]
    );

    // a hole skipped by one player in the middle is undecided, not dropped
    let a = [Some(4), None, Some(4)];
    let b = [Some(4), Some(5), Some(5)];
    let holes = singles_hole_results(&a, &b, &[], 0.0, 0.0);
    assert_eq!(
        holes,
        vec![HoleResult::Halved, HoleResult::Halved, HoleResult::SideA]
    );
}
