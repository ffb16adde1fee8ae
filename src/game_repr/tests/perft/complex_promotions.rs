use super::*;

// ==================== COMPLEX POSITION WITH PROMOTIONS PERFT TESTS ====================
// Promotion captures and underpromotion
// FEN: r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq -

const FEN: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1";

#[test]
fn test_perft_complex_promotions_depth_1() {
    let mut pos = position(FEN);
    assert_eq!(pos.perft(Color::White, 1), 6);
}

#[test]
fn test_perft_complex_promotions_depth_2() {
    let mut pos = position(FEN);
    assert_eq!(pos.perft(Color::White, 2), 264);
}

#[test]
fn test_perft_complex_promotions_depth_3() {
    let mut pos = position(FEN);
    assert_eq!(pos.perft(Color::White, 3), 9467);
}
