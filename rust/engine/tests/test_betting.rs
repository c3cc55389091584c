use felt_engine::errors::TableError;
use felt_engine::table::{Phase, Table, TABLE_LIMIT};

#[test]
fn bet_cannot_pass_table_limit_across_the_round() {
    let mut table = Table::new_with_seed(1);
    let seat = table.add_seat("Ada", 1_000, false).unwrap();

    table.place_bet(seat, 400).unwrap();
    let err = table.place_bet(seat, 200).unwrap_err();
    assert_eq!(
        err,
        TableError::OverTableLimit {
            amount: 600,
            limit: TABLE_LIMIT
        }
    );
    // the rejected bet must not move any chips
    assert_eq!(table.seat(seat).unwrap().bet(), 400);
    assert_eq!(table.seat(seat).unwrap().bankroll(), 600);
}

#[test]
fn bet_cannot_exceed_bankroll() {
    let mut table = Table::new_with_seed(1);
    let seat = table.add_seat("Ada", 100, false).unwrap();

    let err = table.place_bet(seat, 200).unwrap_err();
    assert_eq!(err, TableError::InsufficientBankroll);
    assert_eq!(table.seat(seat).unwrap().bet(), 0);
    assert_eq!(table.seat(seat).unwrap().bankroll(), 100);
}

#[test]
fn automated_seats_never_wager() {
    let mut table = Table::new_with_seed(1);
    table.add_seat("Ada", 1_000, false).unwrap();
    let bot = table.add_seat("Bot", 1_000, true).unwrap();

    let err = table.place_bet(bot, 10).unwrap_err();
    assert_eq!(err, TableError::AutomatedWager);
}

#[test]
fn readiness_requires_a_bet_from_the_focused_seat() {
    let mut table = Table::new_with_seed(1);
    table.add_seat("Ada", 1_000, false).unwrap();

    let err = table.advance_readiness().unwrap_err();
    assert_eq!(err, TableError::NoBet);
    assert_eq!(table.phase(), Phase::Betting);
}

#[test]
fn readiness_walks_focus_to_the_next_unbet_human() {
    let mut table = Table::new_with_seed(1);
    let ada = table.add_seat("Ada", 1_000, false).unwrap();
    let bot = table.add_seat("Bot", 1_000, true).unwrap();
    let bea = table.add_seat("Bea", 1_000, false).unwrap();

    table.place_bet(ada, 50).unwrap();
    table.advance_readiness().unwrap();
    // the automated seat between them is skipped
    assert_eq!(table.focus(), bea);
    assert_ne!(table.focus(), bot);
    assert_eq!(table.phase(), Phase::Betting);

    table.place_bet(bea, 25).unwrap();
    table.advance_readiness().unwrap();
    assert_ne!(table.phase(), Phase::Betting);
}

#[test]
fn round_starts_once_every_human_has_bet() {
    let mut table = Table::new_with_seed(1);
    let ada = table.add_seat("Ada", 1_000, false).unwrap();
    table.add_seat("Bot", 1_000, true).unwrap();

    table.place_bet(ada, 50).unwrap();
    table.advance_readiness().unwrap();

    assert!(table.phase() == Phase::PlayerTurns || table.phase() == Phase::DealerTurn);
    // both the human and the non-wagering automated seat were dealt in
    assert_eq!(table.seat(0).unwrap().hand().len(), 2);
    assert_eq!(table.seat(1).unwrap().hand().len(), 2);
    assert_eq!(table.dealer_hand().len(), 2);
}

#[test]
fn restart_during_betting_refunds_staked_chips() {
    let mut table = Table::new_with_seed(1);
    let ada = table.add_seat("Ada", 1_000, false).unwrap();

    table.place_bet(ada, 300).unwrap();
    table.start_new_round().unwrap();

    // chips staked in the abandoned betting phase return to the bankroll
    assert_eq!(table.seat(ada).unwrap().bankroll(), 1_000);
    assert_eq!(table.seat(ada).unwrap().bet(), 0);
    assert_eq!(table.phase(), Phase::Betting);
}

#[test]
fn betting_is_rejected_outside_the_betting_phase() {
    let mut table = Table::new_with_seed(1);
    let ada = table.add_seat("Ada", 1_000, false).unwrap();
    table.place_bet(ada, 50).unwrap();
    table.advance_readiness().unwrap();

    let err = table.place_bet(ada, 50).unwrap_err();
    assert!(matches!(err, TableError::WrongPhase { .. }));
}
