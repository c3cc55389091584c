use felt_engine::cards::{Card, Rank, Suit};
use felt_engine::logger::{format_round_id, RoundLogger, RoundRecord, SeatResult};
use felt_engine::table::Outcome;

fn sample_record(id: String) -> RoundRecord {
    RoundRecord {
        round_id: id,
        seed: Some(42),
        dealer_score: 19,
        dealer_busted: false,
        dealer_cards: vec![
            Card {
                suit: Suit::Spades,
                rank: Rank::Ten,
            },
            Card {
                suit: Suit::Hearts,
                rank: Rank::Nine,
            },
        ],
        results: vec![SeatResult {
            name: "Ada".to_string(),
            outcome: Outcome::Win,
            blackjack: false,
            bet: 100,
            payout: 200,
            score: 20,
        }],
        ts: None,
    }
}

#[test]
fn round_ids_are_date_sequenced() {
    assert_eq!(format_round_id("20260829", 7), "20260829-000007");

    let mut logger = RoundLogger::with_seq_for_test("20260829");
    assert_eq!(logger.next_id(), "20260829-000001");
    assert_eq!(logger.next_id(), "20260829-000002");
}

#[test]
fn written_records_parse_back_with_a_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history").join("rounds.jsonl");

    let mut logger = RoundLogger::create(&path).unwrap();
    let id = logger.next_id();
    logger.write(&sample_record(id.clone())).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let line = raw.lines().next().unwrap();
    let parsed: RoundRecord = serde_json::from_str(line).unwrap();
    assert_eq!(parsed.round_id, id);
    assert_eq!(parsed.results[0].outcome, Outcome::Win);
    assert!(parsed.ts.is_some(), "missing timestamps are injected");
}

#[test]
fn outcome_serializes_to_lowercase_words() {
    let raw = serde_json::to_string(&Outcome::Win).unwrap();
    assert_eq!(raw, "\"win\"");
    assert_eq!(Outcome::Lose.as_str(), "lose");
}
