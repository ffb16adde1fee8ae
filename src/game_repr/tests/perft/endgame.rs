use super::*;

// ==================== ENDGAME POSITION PERFT TESTS ====================
// En passant pins along the fifth rank
// FEN: 8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -

const FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8";

#[test]
fn test_perft_endgame_depth_1() {
    let mut pos = position(FEN);
    assert_eq!(pos.perft(Color::White, 1), 14);
}

#[test]
fn test_perft_endgame_depth_2() {
    let mut pos = position(FEN);
    assert_eq!(pos.perft(Color::White, 2), 191);
}

#[test]
fn test_perft_endgame_depth_3() {
    let mut pos = position(FEN);
    assert_eq!(pos.perft(Color::White, 3), 2812);
}

#[test]
fn test_perft_endgame_depth_4() {
    let mut pos = position(FEN);
    assert_eq!(pos.perft(Color::White, 4), 43238);
}
