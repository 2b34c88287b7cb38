use super::*;

// ==================== TEXT FORM TESTS ====================

#[test]
fn test_display_round_trips_through_parse() {
    let board = Board::new();
    let text = board.to_string();

    assert_eq!(text.lines().nth(3), Some("...WB..."));
    assert_eq!(text.parse::<Board>(), Ok(board));
}

#[test]
fn test_parse_ignores_spaces_and_blank_lines() {
    let spaced = "
        . . . . . . . .
        . . . . . . . .

        . . . . . . . .
        . . . W B . . .
        . . . B W . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
    ";

    assert_eq!(spaced.parse::<Board>(), Ok(Board::new()));
}

#[test]
fn test_parse_rejects_wrong_row_count() {
    let err = "........\n........".parse::<Board>().unwrap_err();
    assert_eq!(err, ParseBoardError::RowCount(2));
}

#[test]
fn test_parse_rejects_short_row() {
    let text = "........\n".repeat(7) + ".......";
    let err = text.parse::<Board>().unwrap_err();
    assert_eq!(err, ParseBoardError::RowLength { row: 7, len: 7 });
}

#[test]
fn test_parse_rejects_unknown_character() {
    let text = "...Q....\n".to_string() + &"........\n".repeat(7);
    let err = text.parse::<Board>().unwrap_err();
    assert_eq!(err, ParseBoardError::UnknownCell { row: 0, ch: 'Q' });
}
