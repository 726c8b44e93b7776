use proptest::prelude::*;

use crate::domain::alignment::{align_seat, round_leader};
use crate::domain::game_result::GameResult;
use crate::domain::test_fixtures::game_with_leaders;

fn leader_layout() -> impl Strategy<Value = GameResult> {
    (0u8..4, proptest::array::uniform8(0u8..4))
        .prop_map(|(starting, winners)| game_with_leaders(starting, winners))
}

proptest! {
    #[test]
    fn aligning_a_game_to_itself_is_the_identity(
        game in leader_layout(),
        round in 0usize..8,
        seat in 0u8..4,
    ) {
        prop_assert_eq!(align_seat(&game, &game, round, seat), seat);
    }

    #[test]
    fn alignment_is_symmetric(
        a in leader_layout(),
        b in leader_layout(),
        round in 0usize..8,
        seat in 0u8..4,
    ) {
        let there = align_seat(&a, &b, round, seat);
        prop_assert_eq!(align_seat(&b, &a, round, there), seat);
    }

    #[test]
    fn alignment_preserves_turn_order_position(
        a in leader_layout(),
        b in leader_layout(),
        round in 0usize..8,
        seat in 0u8..4,
    ) {
        let there = align_seat(&a, &b, round, seat);
        let pos_a = (seat + 4 - round_leader(&a, round)) % 4;
        let pos_b = (there + 4 - round_leader(&b, round)) % 4;
        prop_assert_eq!(pos_a, pos_b);
    }

    #[test]
    fn alignment_composes_across_three_games(
        a in leader_layout(),
        b in leader_layout(),
        c in leader_layout(),
        round in 0usize..8,
        seat in 0u8..4,
    ) {
        let via_b = align_seat(&b, &c, round, align_seat(&a, &b, round, seat));
        prop_assert_eq!(via_b, align_seat(&a, &c, round, seat));
    }
}
