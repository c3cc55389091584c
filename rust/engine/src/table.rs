use serde::{Deserialize, Serialize};

use crate::achievements::{AchievementTracker, RoundFacts};
use crate::cards::Card;
use crate::errors::TableError;
use crate::events::{Spot, TableEvent};
use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::seat::{Role, Seat};
use crate::shoe::Shoe;

/// Maximum total bet a seat may have riding in one round.
pub const TABLE_LIMIT: u32 = 500;
/// Time units a human seat gets per turn before being auto-stood.
pub const TURN_TIME_UNITS: u32 = 15;
/// Maximum number of seats at the table.
pub const MAX_SEATS: usize = 6;
/// Shoe penetration past which settlement triggers a reshuffle.
pub const RESHUFFLE_PENETRATION: f64 = 0.75;

/// Round phases in order. `Settlement` is momentary: payouts happen in a
/// single step between the last dealer card and `RoundOver`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Betting,
    Dealing,
    PlayerTurns,
    DealerTurn,
    Settlement,
    RoundOver,
}

/// A seat's move during its turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Hit,
    Stand,
    Double,
}

/// How a wagering seat fared against the dealer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Push,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Push => "push",
        }
    }
}

/// Per-seat settlement result for one round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatOutcome {
    pub seat: usize,
    pub name: String,
    pub outcome: Outcome,
    pub blackjack: bool,
    /// The bet that was riding, including any double.
    pub bet: u32,
    /// Chips returned to the bankroll (stake plus winnings; 0 on a loss).
    pub payout: u32,
    pub score: u32,
}

/// The table: shoe, seats, dealer, and the round state machine.
///
/// All transitions happen on the caller's thread as discrete steps; the
/// table owns no timers and runs no AI. Human actions, automated-seat
/// decisions, clock ticks, and dealer steps all arrive as commands, and
/// invalid commands leave the state untouched and return an error the
/// caller can surface as a transient notice.
#[derive(Debug)]
pub struct Table {
    shoe: Shoe,
    seats: Vec<Seat>,
    dealer: Seat,
    phase: Phase,
    /// Betting focus: which seat the next `place_bet` clicks apply to.
    focus: usize,
    /// Turn cursor during `PlayerTurns`.
    active: usize,
    hole_hidden: bool,
    turn_clock: u32,
    tracker: AchievementTracker,
    leaderboard: Leaderboard,
    last_outcomes: Vec<SeatOutcome>,
    events: Vec<TableEvent>,
}

impl Table {
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_shoe(Shoe::new_with_seed(seed))
    }

    /// Build a table around an existing shoe (used by tests with
    /// [`Shoe::stacked`]).
    pub fn with_shoe(shoe: Shoe) -> Self {
        Self {
            shoe,
            seats: Vec::new(),
            dealer: Seat::house(),
            phase: Phase::Betting,
            focus: 0,
            active: 0,
            hole_hidden: false,
            turn_clock: TURN_TIME_UNITS,
            tracker: AchievementTracker::new(),
            leaderboard: Leaderboard::new(),
            last_outcomes: Vec::new(),
            events: Vec::new(),
        }
    }

    // ---- seat lifecycle ----

    /// Seat a new participant. Only permitted between rounds.
    pub fn add_seat(
        &mut self,
        name: impl Into<String>,
        bankroll: u32,
        automated: bool,
    ) -> Result<usize, TableError> {
        self.require_between_rounds()?;
        if self.seats.len() >= MAX_SEATS {
            return Err(TableError::TableFull);
        }
        let role = if automated { Role::Automated } else { Role::Human };
        self.seats.push(Seat::new(name, bankroll, role));
        Ok(self.seats.len() - 1)
    }

    /// The seat leaves voluntarily, publishing its bankroll to the
    /// leaderboard. Only permitted between rounds; any chips still staked
    /// return to the bankroll before publishing.
    pub fn seat_leaves(&mut self, seat: usize) -> Result<LeaderboardEntry, TableError> {
        self.require_between_rounds()?;
        if seat >= self.seats.len() {
            return Err(TableError::NoSuchSeat(seat));
        }
        let refund = self.seats[seat].bet();
        self.seats[seat].settle(refund);
        let leaving = self.seats.remove(seat);
        let entry = self.leaderboard.push(leaving.name(), leaving.bankroll());
        self.events.push(TableEvent::SeatLeft {
            seat,
            entry: entry.clone(),
        });
        if self.focus >= self.seats.len() {
            self.focus = 0;
        }
        Ok(entry)
    }

    // ---- betting ----

    /// Add chips to `seat`'s bet for the coming round. Rejected when the
    /// round total would pass the table limit or the bankroll can't cover
    /// it; automated seats never wager.
    pub fn place_bet(&mut self, seat: usize, amount: u32) -> Result<(), TableError> {
        self.require_phase(Phase::Betting)?;
        let s = self.seats.get(seat).ok_or(TableError::NoSuchSeat(seat))?;
        if s.is_automated() {
            return Err(TableError::AutomatedWager);
        }
        let total = s.bet().saturating_add(amount);
        if total > TABLE_LIMIT {
            return Err(TableError::OverTableLimit {
                amount: total,
                limit: TABLE_LIMIT,
            });
        }
        self.seats[seat].stake(amount)?;
        self.focus = seat;
        self.events.push(TableEvent::BetPlaced {
            seat,
            bet: self.seats[seat].bet(),
            bankroll: self.seats[seat].bankroll(),
        });
        Ok(())
    }

    /// The focused seat declares itself ready. Either moves the betting
    /// focus to the next human without a bet (round-robin), or deals when
    /// every human has one.
    pub fn advance_readiness(&mut self) -> Result<(), TableError> {
        self.require_phase(Phase::Betting)?;
        if self.seats.is_empty() {
            return Err(TableError::EmptyTable);
        }
        let cur = self.seats.get(self.focus);
        if cur.map_or(true, |s| s.is_automated() || s.bet() == 0) {
            return Err(TableError::NoBet);
        }
        if self.all_humans_bet() {
            self.deal();
            return Ok(());
        }
        let n = self.seats.len();
        let mut next = (self.focus + 1) % n;
        let start = next;
        loop {
            let s = &self.seats[next];
            if !s.is_automated() && s.bet() == 0 {
                self.focus = next;
                self.events.push(TableEvent::BettingFocus { seat: next });
                return Ok(());
            }
            next = (next + 1) % n;
            if next == start {
                // no human still owes a bet
                self.deal();
                return Ok(());
            }
        }
    }

    fn all_humans_bet(&self) -> bool {
        let mut humans = 0;
        for s in &self.seats {
            if !s.is_automated() {
                humans += 1;
                if s.bet() == 0 {
                    return false;
                }
            }
        }
        humans > 0
    }

    // ---- dealing and turns ----

    /// Two full passes: one card to every seat in table order, then one
    /// to the dealer; the dealer's second card stays face down.
    fn deal(&mut self) {
        self.set_phase(Phase::Dealing);
        for pass in 0..2 {
            for i in 0..self.seats.len() {
                let card = self.shoe.draw();
                self.seats[i].hand_mut().add(card);
                self.events.push(TableEvent::CardDealt {
                    to: Spot::Seat(i),
                    card: Some(card),
                });
            }
            let card = self.shoe.draw();
            self.dealer.hand_mut().add(card);
            let hole = pass == 1;
            self.events.push(TableEvent::CardDealt {
                to: Spot::Dealer,
                card: if hole { None } else { Some(card) },
            });
        }
        self.hole_hidden = true;
        self.set_phase(Phase::PlayerTurns);
        self.active = 0;
        self.open_turn();
    }

    /// Start the active seat's turn, auto-standing naturals, or hand over
    /// to the dealer once the cursor runs off the end.
    fn open_turn(&mut self) {
        while self.active < self.seats.len() {
            let seat = self.active;
            if self.seats[seat].hand().is_blackjack() {
                self.events.push(TableEvent::TurnStarted { seat });
                self.events.push(TableEvent::TurnEnded { seat });
                self.active += 1;
                continue;
            }
            self.turn_clock = TURN_TIME_UNITS;
            self.events.push(TableEvent::TurnStarted { seat });
            return;
        }
        self.enter_dealer_turn();
    }

    /// Apply the active seat's action. Works identically for human and
    /// automated seats; only the active seat may act.
    pub fn player_action(&mut self, seat: usize, action: Action) -> Result<(), TableError> {
        self.require_phase(Phase::PlayerTurns)?;
        if seat >= self.seats.len() {
            return Err(TableError::NoSuchSeat(seat));
        }
        if seat != self.active {
            return Err(TableError::OutOfTurn {
                expected: self.active,
                actual: seat,
            });
        }
        match action {
            Action::Hit => {
                self.events.push(TableEvent::SeatActed { seat, action });
                self.hit_active();
                if self.phase == Phase::PlayerTurns && self.active == seat {
                    self.turn_clock = TURN_TIME_UNITS;
                }
                Ok(())
            }
            Action::Stand => {
                self.events.push(TableEvent::SeatActed { seat, action });
                self.close_turn();
                Ok(())
            }
            Action::Double => {
                let s = &self.seats[seat];
                if s.hand().len() != 2 || s.bankroll() < s.bet() {
                    return Err(TableError::DoubleNotAllowed);
                }
                let stake = s.bet();
                self.seats[seat].stake(stake)?;
                self.events.push(TableEvent::SeatActed { seat, action });
                self.events.push(TableEvent::BetPlaced {
                    seat,
                    bet: self.seats[seat].bet(),
                    bankroll: self.seats[seat].bankroll(),
                });
                // exactly one card, then the turn ends, bust or not
                let card = self.shoe.draw();
                self.seats[seat].hand_mut().add(card);
                self.events.push(TableEvent::CardDealt {
                    to: Spot::Seat(seat),
                    card: Some(card),
                });
                self.close_turn();
                Ok(())
            }
        }
    }

    fn hit_active(&mut self) {
        let seat = self.active;
        let card = self.shoe.draw();
        self.seats[seat].hand_mut().add(card);
        self.events.push(TableEvent::CardDealt {
            to: Spot::Seat(seat),
            card: Some(card),
        });
        if self.seats[seat].hand().is_busted() {
            self.close_turn();
        }
    }

    fn close_turn(&mut self) {
        self.events.push(TableEvent::TurnEnded { seat: self.active });
        self.active += 1;
        self.open_turn();
    }

    /// One time unit slips by for the active seat. Only a human seat's
    /// clock is live; fifteen unanswered units auto-stand it. Outside
    /// `PlayerTurns` this is a no-op.
    pub fn tick(&mut self) {
        if self.phase != Phase::PlayerTurns {
            return;
        }
        let Some(seat) = self.seats.get(self.active) else {
            return;
        };
        if seat.is_automated() {
            return;
        }
        self.turn_clock = self.turn_clock.saturating_sub(1);
        if self.turn_clock == 0 {
            self.events.push(TableEvent::TurnTimedOut { seat: self.active });
            self.close_turn();
        }
    }

    /// Time units left on the active seat's clock.
    pub fn time_remaining(&self) -> u32 {
        self.turn_clock
    }

    // ---- dealer resolution ----

    fn enter_dealer_turn(&mut self) {
        self.set_phase(Phase::DealerTurn);
        self.hole_hidden = false;
        if let Some(&card) = self.dealer.hand().cards().get(1) {
            self.events.push(TableEvent::HoleCardRevealed { card });
        }
    }

    /// Advance the dealer by one step: draw while the dealer's score is
    /// below 17 (standing on every 17, soft included), then settle.
    /// Returns `true` while a card was drawn, `false` once the round is
    /// settled and phase is `RoundOver`.
    pub fn dealer_step(&mut self) -> Result<bool, TableError> {
        self.require_phase(Phase::DealerTurn)?;
        if self.dealer.hand().score() < 17 {
            let card = self.shoe.draw();
            self.dealer.hand_mut().add(card);
            self.events.push(TableEvent::CardDealt {
                to: Spot::Dealer,
                card: Some(card),
            });
            Ok(true)
        } else {
            self.settle();
            Ok(false)
        }
    }

    // ---- settlement ----

    fn settle(&mut self) {
        self.set_phase(Phase::Settlement);
        let dealer_score = self.dealer.hand().score();
        let dealer_busted = dealer_score > 21;
        let tracked = self.tracked_seat();
        let mut outcomes = Vec::new();
        let mut tracked_facts: Option<RoundFacts> = None;

        for i in 0..self.seats.len() {
            let bet = self.seats[i].bet();
            if bet == 0 {
                continue;
            }
            let score = self.seats[i].hand().score();
            let blackjack = self.seats[i].hand().is_blackjack();
            let (outcome, payout) = if score > 21 {
                (Outcome::Lose, 0)
            } else if dealer_busted || score > dealer_score {
                // blackjack pays 3:2 on top of the returned stake
                let payout = if blackjack { bet * 5 / 2 } else { bet * 2 };
                (Outcome::Win, payout)
            } else if score < dealer_score {
                (Outcome::Lose, 0)
            } else {
                (Outcome::Push, bet)
            };

            self.seats[i].settle(payout);
            let record = self.seats[i].record_mut();
            match outcome {
                Outcome::Win => record.wins += 1,
                Outcome::Lose => record.losses += 1,
                Outcome::Push => record.pushes += 1,
            }

            if tracked == Some(i) {
                tracked_facts = Some(RoundFacts {
                    won: outcome == Outcome::Win,
                    lost: outcome == Outcome::Lose,
                    blackjack,
                    card_count: self.seats[i].hand().len(),
                    bet,
                    bankroll: self.seats[i].bankroll(),
                    bet_outstanding: 0,
                });
            }

            outcomes.push(SeatOutcome {
                seat: i,
                name: self.seats[i].name().to_string(),
                outcome,
                blackjack,
                bet,
                payout,
                score,
            });
        }

        if let Some(facts) = tracked_facts {
            for achievement in self.tracker.observe(facts) {
                self.events
                    .push(TableEvent::AchievementUnlocked { achievement });
            }
        }

        self.events.push(TableEvent::RoundSettled {
            outcomes: outcomes.clone(),
        });
        self.last_outcomes = outcomes;

        if self.shoe.penetration() > RESHUFFLE_PENETRATION {
            self.shoe.reset();
            self.events.push(TableEvent::ShoeReshuffled);
        }
        self.set_phase(Phase::RoundOver);
    }

    /// Open a fresh betting phase: all hands emptied, any staked chips
    /// returned to their bankrolls, the betting focus back on the first
    /// human seat.
    pub fn start_new_round(&mut self) -> Result<(), TableError> {
        self.require_between_rounds()?;
        if let Some(i) = self.tracked_seat() {
            let facts = RoundFacts {
                bet_outstanding: self.seats[i].bet(),
                bankroll: self.seats[i].bankroll(),
                ..RoundFacts::default()
            };
            for achievement in self.tracker.observe(facts) {
                self.events
                    .push(TableEvent::AchievementUnlocked { achievement });
            }
        }
        for s in &mut self.seats {
            s.hand_mut().clear();
            // a restart during Betting refunds any chips already staked
            let refund = s.bet();
            s.settle(refund);
        }
        self.dealer.hand_mut().clear();
        self.hole_hidden = false;
        self.active = 0;
        self.last_outcomes.clear();
        self.focus = self
            .seats
            .iter()
            .position(|s| !s.is_automated())
            .unwrap_or(0);
        self.set_phase(Phase::Betting);
        self.events.push(TableEvent::BettingFocus { seat: self.focus });
        Ok(())
    }

    // ---- queries ----

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The seat whose turn it is, during `PlayerTurns`.
    pub fn active_seat(&self) -> Option<usize> {
        (self.phase == Phase::PlayerTurns && self.active < self.seats.len())
            .then_some(self.active)
    }

    /// The seat betting clicks currently apply to.
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, i: usize) -> Result<&Seat, TableError> {
        self.seats.get(i).ok_or(TableError::NoSuchSeat(i))
    }

    /// The dealer's exposed first card.
    pub fn dealer_upcard(&self) -> Option<Card> {
        self.dealer.hand().cards().first().copied()
    }

    pub fn dealer_hand(&self) -> &crate::hand::Hand {
        self.dealer.hand()
    }

    pub fn dealer_hole_hidden(&self) -> bool {
        self.hole_hidden
    }

    /// What the table shows for the dealer: only the up-card's value
    /// while the hole card is down, the full score after the reveal.
    pub fn dealer_visible_score(&self) -> u32 {
        if self.hole_hidden {
            self.dealer_upcard().map_or(0, |c| u32::from(c.value()))
        } else {
            self.dealer.hand().score()
        }
    }

    pub fn penetration(&self) -> f64 {
        self.shoe.penetration()
    }

    /// Settlement results of the round most recently finished.
    pub fn last_outcomes(&self) -> &[SeatOutcome] {
        &self.last_outcomes
    }

    pub fn tracker(&self) -> &AchievementTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut AchievementTracker {
        &mut self.tracker
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn leaderboard_mut(&mut self) -> &mut Leaderboard {
        &mut self.leaderboard
    }

    /// Take everything queued since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<TableEvent> {
        std::mem::take(&mut self.events)
    }

    // ---- internals ----

    /// The seat whose outcomes feed the achievement tracker: the first
    /// human at the table.
    fn tracked_seat(&self) -> Option<usize> {
        self.seats.iter().position(|s| !s.is_automated())
    }

    fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.events.push(TableEvent::PhaseChanged { phase });
    }

    fn require_phase(&self, phase: Phase) -> Result<(), TableError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(TableError::WrongPhase { phase: self.phase })
        }
    }

    fn require_between_rounds(&self) -> Result<(), TableError> {
        match self.phase {
            Phase::Betting | Phase::RoundOver => Ok(()),
            _ => Err(TableError::RoundInProgress),
        }
    }
}
