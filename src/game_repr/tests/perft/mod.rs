use super::*;

mod starting_position;
mod kiwipete;
mod endgame;
mod complex_promotions;

#[test]
fn test_divide_sums_to_perft() {
    let mut pos = Position::standard();
    let divide = pos.divide(Color::White, 2);

    assert_eq!(divide.len(), 20);
    assert!(divide.iter().all(|&(_, count)| count == 20));
    assert_eq!(divide.iter().map(|&(_, count)| count).sum::<u64>(), pos.perft(Color::White, 2));
}
