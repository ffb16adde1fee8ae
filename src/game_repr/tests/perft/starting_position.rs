use super::*;

// ==================== STARTING POSITION PERFT TESTS ====================

#[test]
fn test_perft_starting_position_depth_1() {
    let mut pos = Position::standard();
    assert_eq!(pos.perft(Color::White, 1), 20);
}

#[test]
fn test_perft_starting_position_depth_2() {
    let mut pos = Position::standard();
    assert_eq!(pos.perft(Color::White, 2), 400);
}

#[test]
fn test_perft_starting_position_depth_3() {
    let mut pos = Position::standard();
    assert_eq!(pos.perft(Color::White, 3), 8902);
}

#[test]
#[ignore = "slow in debug builds"]
fn test_perft_starting_position_depth_4() {
    let mut pos = Position::standard();
    assert_eq!(pos.perft(Color::White, 4), 197281);
}
