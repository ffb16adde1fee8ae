use super::*;

// ==================== KIWIPETE PERFT TESTS ====================
// Castling, en passant and promotions all in play
// FEN: r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -

const FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";

#[test]
fn test_perft_kiwipete_depth_1() {
    let mut pos = position(FEN);
    assert_eq!(pos.perft(Color::White, 1), 48);
}

#[test]
fn test_perft_kiwipete_depth_2() {
    let mut pos = position(FEN);
    assert_eq!(pos.perft(Color::White, 2), 2039);
}

#[test]
#[ignore = "slow in debug builds"]
fn test_perft_kiwipete_depth_3() {
    let mut pos = position(FEN);
    assert_eq!(pos.perft(Color::White, 3), 97862);
}
