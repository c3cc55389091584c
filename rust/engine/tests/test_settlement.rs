use felt_engine::cards::{Card, Rank, Suit};
use felt_engine::shoe::Shoe;
use felt_engine::table::{Action, Outcome, Phase, Table};

fn card(rank: Rank) -> Card {
    Card {
        suit: Suit::Clubs,
        rank,
    }
}

/// One human seat betting 100 out of 1000. Cards are listed in draw
/// order: seat, dealer up, seat, dealer hole, then any extra draws.
fn settled(cards: Vec<Card>, actions: &[Action]) -> Table {
    let mut table = Table::with_shoe(Shoe::stacked(cards));
    table.add_seat("Ada", 1_000, false).unwrap();
    table.place_bet(0, 100).unwrap();
    table.advance_readiness().unwrap();
    for &a in actions {
        table.player_action(0, a).unwrap();
    }
    while table.phase() == Phase::DealerTurn && table.dealer_step().unwrap() {}
    assert_eq!(table.phase(), Phase::RoundOver);
    table
}

#[test]
fn plain_win_pays_one_to_one() {
    // player 20 vs dealer 19
    let table = settled(
        vec![
            card(Rank::Ten),
            card(Rank::Ten),
            card(Rank::Ten),
            card(Rank::Nine),
        ],
        &[Action::Stand],
    );
    let seat = table.seat(0).unwrap();
    assert_eq!(seat.bankroll(), 1_100);
    assert_eq!(seat.bet(), 0);
    assert_eq!(seat.record().wins, 1);

    let outcome = &table.last_outcomes()[0];
    assert_eq!(outcome.outcome, Outcome::Win);
    assert_eq!(outcome.payout, 200);
    assert!(!outcome.blackjack);
}

#[test]
fn blackjack_win_pays_three_to_two() {
    let table = settled(
        vec![
            card(Rank::Ace),
            card(Rank::Ten),
            card(Rank::King),
            card(Rank::Nine),
        ],
        &[], // natural is auto-stood
    );
    let seat = table.seat(0).unwrap();
    assert_eq!(seat.bankroll(), 1_150, "100 bet returns 250");

    let outcome = &table.last_outcomes()[0];
    assert_eq!(outcome.outcome, Outcome::Win);
    assert!(outcome.blackjack);
    assert_eq!(outcome.payout, 250);
}

#[test]
fn bust_loses_even_when_the_dealer_busts_too() {
    let table = settled(
        vec![
            card(Rank::Ten),
            card(Rank::Ten),
            card(Rank::Six),   // player 16
            card(Rank::Six),   // dealer 16
            card(Rank::King),  // player hit -> 26
            card(Rank::Queen), // dealer draw -> 26
        ],
        &[Action::Hit],
    );
    let seat = table.seat(0).unwrap();
    assert_eq!(seat.bankroll(), 900, "no credit on a bust");
    assert_eq!(seat.record().losses, 1);
    assert_eq!(table.last_outcomes()[0].outcome, Outcome::Lose);
}

#[test]
fn dealer_bust_pays_standing_players() {
    let table = settled(
        vec![
            card(Rank::Ten),
            card(Rank::Ten),
            card(Rank::Eight), // player 18
            card(Rank::Six),   // dealer 16
            card(Rank::King),  // dealer draw -> 26
        ],
        &[Action::Stand],
    );
    assert!(table.dealer_hand().is_busted());
    assert_eq!(table.seat(0).unwrap().bankroll(), 1_100);
    assert_eq!(table.last_outcomes()[0].outcome, Outcome::Win);
}

#[test]
fn lower_score_loses() {
    let table = settled(
        vec![
            card(Rank::Ten),
            card(Rank::Ten),
            card(Rank::Seven), // player 17
            card(Rank::Nine),  // dealer 19
        ],
        &[Action::Stand],
    );
    assert_eq!(table.seat(0).unwrap().bankroll(), 900);
    assert_eq!(table.last_outcomes()[0].outcome, Outcome::Lose);
}

#[test]
fn push_returns_the_stake_exactly() {
    let table = settled(
        vec![
            card(Rank::Ten),
            card(Rank::Ten),
            card(Rank::Ten), // player 20
            card(Rank::Ten), // dealer 20
        ],
        &[Action::Stand],
    );
    let seat = table.seat(0).unwrap();
    assert_eq!(seat.bankroll(), 1_000, "stake back, no winnings");
    assert_eq!(seat.record().pushes, 1);
    assert_eq!(table.last_outcomes()[0].outcome, Outcome::Push);
}

#[test]
fn doubled_win_pays_on_the_doubled_stake() {
    let table = settled(
        vec![
            card(Rank::Six),
            card(Rank::Ten),
            card(Rank::Five),  // player 11
            card(Rank::Nine),  // dealer 19
            card(Rank::Queen), // double card -> 21
        ],
        &[Action::Double],
    );
    let seat = table.seat(0).unwrap();
    // 1000 - 200 staked + 400 payout
    assert_eq!(seat.bankroll(), 1_200);
    let outcome = &table.last_outcomes()[0];
    assert_eq!(outcome.bet, 200);
    assert!(!outcome.blackjack, "a doubled 21 is not a natural");
}

#[test]
fn non_wagering_seats_are_skipped_by_settlement() {
    let stacked = Shoe::stacked(vec![
        card(Rank::Ten),  // Ada
        card(Rank::Ten),  // Bot
        card(Rank::Ten),  // dealer up
        card(Rank::Ten),  // Ada -> 20
        card(Rank::Nine), // Bot -> 19
        card(Rank::Nine), // dealer hole -> 19
    ]);
    let mut table = Table::with_shoe(stacked);
    table.add_seat("Ada", 1_000, false).unwrap();
    table.add_seat("Bot", 1_000, true).unwrap();
    table.place_bet(0, 100).unwrap();
    table.advance_readiness().unwrap();
    table.player_action(0, Action::Stand).unwrap();
    table.player_action(1, Action::Stand).unwrap();
    while table.dealer_step().unwrap() {}

    assert_eq!(table.last_outcomes().len(), 1);
    assert_eq!(table.last_outcomes()[0].seat, 0);
    let bot = table.seat(1).unwrap();
    assert_eq!(bot.bankroll(), 1_000);
    assert_eq!(bot.record().wins + bot.record().losses + bot.record().pushes, 0);
}

#[test]
fn deep_penetration_reshuffles_after_settlement() {
    // a 4-card stacked shoe is almost fully drawn by the deal
    let table = settled(
        vec![
            card(Rank::Ten),
            card(Rank::Ten),
            card(Rank::Ten),
            card(Rank::Nine),
        ],
        &[Action::Stand],
    );
    assert!(
        table.penetration() < 0.75,
        "settlement must have rebuilt the shoe"
    );
}
