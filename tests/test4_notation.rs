use rusty_tour::ScoringError;
use rusty_tour::model::HoleResult;
use rusty_tour::score::{Notation, determine_match_result, parse_notation};

#[test]
fn test_parse_notation() -> Result<(), ScoringError> {
    assert_eq!(
        parse_notation("3&2")?,
        Notation::Decided {
            lead: 3,
            remaining: 2
        }
    );
    assert_eq!(
        parse_notation(" 10 & 8 ")?,
        Notation::Decided {
            lead: 10,
            remaining: 8
        }
    );
    assert_eq!(parse_notation("2 UP")?, Notation::Up(2));
    assert_eq!(parse_notation("1up")?, Notation::Up(1));
    assert_eq!(parse_notation("1 DOWN")?, Notation::Down(1));
    assert_eq!(parse_notation("3 dn")?, Notation::Down(3));
    assert_eq!(parse_notation("AS")?, Notation::AllSquare);
    assert_eq!(parse_notation("all square")?, Notation::AllSquare);
    assert_eq!(parse_notation("Halved")?, Notation::AllSquare);
    assert_eq!(parse_notation("0 UP")?, Notation::AllSquare);
    Ok(())
}

#[test]
fn test_parse_notation_rejects_garbage() {
    for bad in ["", "3-2", "UP", "3&", "&2", "2 UP 1", "99999999999&1"] {
        assert!(
            matches!(parse_notation(bad), Err(ScoringError::Parse(_))),
            "expected parse error for '{bad}'"
        );
    }
}

#[test]
fn test_notation_display_matches_engine_output() -> Result<(), ScoringError> {
    let mut holes = vec![HoleResult::Halved; 13];
    holes.extend([HoleResult::SideA; 3]);
    let outcome = determine_match_result(&holes, 18);

    let parsed = parse_notation(&outcome.notation)?;
    assert!(parsed.is_terminal());
    assert_eq!(parsed.difference(), 3);
    assert_eq!(parsed.to_string(), outcome.notation);

    let live = determine_match_result(&[HoleResult::SideB, HoleResult::SideB], 18);
    let parsed = parse_notation(&live.notation)?;
    assert_eq!(parsed, Notation::Down(2));
    assert!(!parsed.is_terminal());
    assert_eq!(parsed.to_string(), "2 DOWN");
    Ok(())
}
