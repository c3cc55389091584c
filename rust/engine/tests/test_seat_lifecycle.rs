use felt_engine::errors::TableError;
use felt_engine::table::{Action, Phase, Table, MAX_SEATS};

#[test]
fn the_table_seats_at_most_six() {
    let mut table = Table::new_with_seed(3);
    for i in 0..MAX_SEATS {
        table.add_seat(format!("P{}", i + 1), 1_000, false).unwrap();
    }
    let err = table.add_seat("P7", 1_000, false).unwrap_err();
    assert_eq!(err, TableError::TableFull);
}

#[test]
fn joining_and_leaving_are_blocked_mid_round() {
    let mut table = Table::new_with_seed(3);
    table.add_seat("Ada", 1_000, false).unwrap();
    table.place_bet(0, 50).unwrap();
    table.advance_readiness().unwrap();
    assert_ne!(table.phase(), Phase::Betting);

    assert_eq!(
        table.add_seat("Bea", 1_000, false).unwrap_err(),
        TableError::RoundInProgress
    );
    assert_eq!(
        table.seat_leaves(0).unwrap_err(),
        TableError::RoundInProgress
    );
}

#[test]
fn leaving_publishes_the_bankroll_to_the_leaderboard() {
    let mut table = Table::new_with_seed(4);
    table.add_seat("Ada", 1_000, false).unwrap();
    table.add_seat("Bea", 750, false).unwrap();

    let entry = table.seat_leaves(1).unwrap();
    assert_eq!(entry.name, "Bea");
    assert_eq!(entry.bankroll, 750);

    assert_eq!(table.seats().len(), 1);
    assert_eq!(table.leaderboard().entries().len(), 1);
    assert_eq!(table.leaderboard().entries()[0], entry);
}

#[test]
fn leaving_with_a_live_bet_refunds_it_first() {
    let mut table = Table::new_with_seed(4);
    table.add_seat("Ada", 1_000, false).unwrap();
    table.place_bet(0, 300).unwrap();

    let entry = table.seat_leaves(0).unwrap();
    assert_eq!(entry.bankroll, 1_000, "staked chips come home before publishing");
}

#[test]
fn leaving_at_round_over_is_permitted() {
    let mut table = Table::new_with_seed(5);
    table.add_seat("Ada", 1_000, false).unwrap();
    table.add_seat("Bea", 1_000, false).unwrap();
    table.place_bet(0, 50).unwrap();
    table.advance_readiness().unwrap();
    table.place_bet(1, 50).unwrap();
    table.advance_readiness().unwrap();

    while let Some(seat) = table.active_seat() {
        table.player_action(seat, Action::Stand).unwrap();
    }
    while table.phase() == Phase::DealerTurn && table.dealer_step().unwrap() {}
    assert_eq!(table.phase(), Phase::RoundOver);

    let entry = table.seat_leaves(0).unwrap();
    assert_eq!(entry.name, "Ada");
    assert_eq!(table.seats().len(), 1);
    assert_eq!(table.seats()[0].name(), "Bea");

    // the remaining seat can open the next round normally
    table.start_new_round().unwrap();
    assert_eq!(table.phase(), Phase::Betting);
}

#[test]
fn leaderboard_entries_are_append_only_until_cleared() {
    let mut table = Table::new_with_seed(6);
    table.add_seat("Ada", 500, false).unwrap();
    table.add_seat("Bea", 900, false).unwrap();
    table.seat_leaves(0).unwrap();
    table.seat_leaves(0).unwrap();

    let sorted = table.leaderboard().sorted_desc();
    assert_eq!(sorted[0].name, "Bea");
    assert_eq!(sorted[1].name, "Ada");

    table.leaderboard_mut().clear();
    assert!(table.leaderboard().is_empty());
}
