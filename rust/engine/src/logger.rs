use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::table::{Outcome, SeatOutcome};

/// One seat's line in a round record.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatResult {
    pub name: String,
    pub outcome: Outcome,
    pub blackjack: bool,
    pub bet: u32,
    pub payout: u32,
    pub score: u32,
}

impl From<&SeatOutcome> for SeatResult {
    fn from(o: &SeatOutcome) -> Self {
        Self {
            name: o.name.clone(),
            outcome: o.outcome,
            blackjack: o.blackjack,
            bet: o.bet,
            payout: o.payout,
            score: o.score,
        }
    }
}

/// Complete record of one settled round, serialized to JSONL for session
/// history and offline aggregation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Shoe RNG seed, when the session was seeded (enables replay)
    pub seed: Option<u64>,
    /// Dealer's final score
    pub dealer_score: u32,
    pub dealer_busted: bool,
    /// Dealer's full hand after the reveal
    pub dealer_cards: Vec<Card>,
    /// Per-seat settlement results
    pub results: Vec<SeatResult>,
    /// Timestamp when the round settled (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`RoundRecord`]s to a JSONL file, one line per round, with
/// date-sequenced ids.
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
