use crate::domain::test_fixtures::{card, game_with_leaders, with_players, with_round_cards};

#[test]
fn differs_flags_mark_the_single_divergent_seat() {
    // Both games start at seat 0. Round 0: game A plays 7♣ 8♣ 9♣ 10♣ by
    // seat, game B plays 7♣ 8♠ 9♣ 10♣. Only seat 1's choice differs.
    let a = with_round_cards(
        game_with_leaders(0, [0; 8]),
        0,
        [
            card("SEVEN", "CLUBS"),
            card("EIGHT", "CLUBS"),
            card("NINE", "CLUBS"),
            card("TEN", "CLUBS"),
        ],
    );
    let b = with_round_cards(
        game_with_leaders(0, [0; 8]),
        0,
        [
            card("SEVEN", "CLUBS"),
            card("EIGHT", "SPADES"),
            card("NINE", "CLUBS"),
            card("TEN", "CLUBS"),
        ],
    );
    let group = vec![a.clone(), b.clone()];

    for game in &group {
        let view = game.renderable(&group);
        let flags: Vec<bool> = view.rounds[0].cards.iter().map(|c| c.differs).collect();
        assert_eq!(flags, vec![false, true, false, false]);
    }
}

#[test]
fn differs_compares_turn_positions_not_physical_seats() {
    // Round 1 leaders differ: seat 2 leads in game A, seat 1 in game B.
    // Both games play the same cards in the same turn order, just from
    // different seats, so nothing differs.
    let turn_cards = [
        card("JACK", "HEARTS"),
        card("NINE", "HEARTS"),
        card("ACE", "HEARTS"),
        card("SEVEN", "HEARTS"),
    ];
    // Seat-indexed layout: seat s holds the card of turn position (s - leader) mod 4.
    let a = with_round_cards(
        game_with_leaders(0, [2, 0, 0, 0, 0, 0, 0, 0]),
        1,
        std::array::from_fn(|seat| turn_cards[(seat + 4 - 2) % 4].clone()),
    );
    let b = with_round_cards(
        game_with_leaders(0, [1, 0, 0, 0, 0, 0, 0, 0]),
        1,
        std::array::from_fn(|seat| turn_cards[(seat + 4 - 1) % 4].clone()),
    );
    let group = vec![a.clone(), b.clone()];

    let view_a = a.renderable(&group);
    assert!(view_a.rounds[1].cards.iter().all(|c| !c.differs));

    // Change what game B's leader (seat 1, turn position 0) played: now the
    // leaders disagree, flagged at A's seat 2 and B's seat 1.
    let mut changed = b.rounds[1].clone();
    changed[1] = card("KING", "HEARTS");
    let b = with_round_cards(b, 1, changed);
    let group = vec![a.clone(), b.clone()];

    let view_a = a.renderable(&group);
    let flags_a: Vec<bool> = view_a.rounds[1].cards.iter().map(|c| c.differs).collect();
    assert_eq!(flags_a, vec![false, false, true, false]);

    let view_b = b.renderable(&group);
    let flags_b: Vec<bool> = view_b.rounds[1].cards.iter().map(|c| c.differs).collect();
    assert_eq!(flags_b, vec![false, true, false, false]);
}

#[test]
fn teams_resolve_relative_to_starting_player() {
    let game = game_with_leaders(1, [0; 8]);
    let group = vec![game.clone(), game_with_leaders(1, [1; 8])];
    let view = game.renderable(&group);

    assert_eq!(view.starting_player, "East");
    assert_eq!(view.playing_team, ["East".to_string(), "West".to_string()]);
    assert_eq!(view.opposing_team, ["South".to_string(), "North".to_string()]);
    assert_eq!(view.playing_team_score, 82);
    assert_eq!(view.playing_team_glory, 20);
    assert_eq!(view.playing_team_score_excl_glory, 62);
    assert_eq!(view.opposing_team_score_excl_glory, 80);
    assert_eq!(view.trump, "♣");
}

#[test]
fn rounds_carry_leader_names_and_winner_flags() {
    let game = game_with_leaders(0, [2, 3, 1, 0, 0, 0, 0, 0]);
    let group = vec![game.clone(), game.clone()];
    let view = game.renderable(&group);

    assert_eq!(view.rounds[0].leader, "North");
    assert_eq!(view.rounds[1].leader, "South");
    assert_eq!(view.rounds[2].leader, "West");
    assert!(view.rounds[0].cards[2].winner);
    assert!(!view.rounds[0].cards[0].winner);
    assert!(view.rounds[1].cards[3].winner);
}

#[test]
fn unique_players_counted_across_the_whole_group() {
    let g1 = with_players(game_with_leaders(0, [0; 8]), ["Alice", "P1", "P2", "P3"]);
    let g2 = with_players(game_with_leaders(0, [0; 8]), ["Bob", "Q1", "Q2", "Q3"]);
    let g3 = with_players(game_with_leaders(0, [0; 8]), ["Bob", "R1", "R2", "R3"]);
    let group = vec![g1.clone(), g2.clone(), g3.clone()];

    let view1 = g1.renderable(&group);
    assert!(view1.unique_players.contains(&"Alice".to_string()));

    let view2 = g2.renderable(&group);
    assert!(!view2.unique_players.contains(&"Bob".to_string()));
    assert!(view2.unique_players.contains(&"Q1".to_string()));

    let view3 = g3.renderable(&group);
    assert!(!view3.unique_players.contains(&"Bob".to_string()));
}

#[test]
fn building_twice_yields_identical_output() {
    let a = game_with_leaders(1, [2, 0, 3, 1, 2, 0, 3, 1]);
    let b = game_with_leaders(3, [1, 1, 0, 2, 3, 0, 1, 2]);
    let group = vec![a.clone(), b];
    assert_eq!(a.renderable(&group), a.renderable(&group));
}

#[test]
fn round_glory_is_carried_through() {
    let mut game = game_with_leaders(0, [0; 8]);
    game.round_glory = [0, 20, 0, 0, 50, 0, 0, 0];
    let group = vec![game.clone(), game.clone()];
    let view = game.renderable(&group);
    assert_eq!(view.rounds[1].glory, 20);
    assert_eq!(view.rounds[4].glory, 50);
}
