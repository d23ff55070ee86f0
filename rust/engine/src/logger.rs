use serde::{Deserialize, Serialize};

use crate::cards::RevealCard;
use crate::game::Stage;
use crate::player::{PlayerAction, SeatId};
use crate::showdown::HandResult;

/// Records a single accepted action.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: SeatId,
    pub stage: Stage,
    pub action: PlayerAction,
}

/// Complete record of a hand, serialized one per line in hand-history files.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Format: YYYYMMDD-NNNNNN
    pub hand_id: String,
    /// Table seed; with `hand_number` it pins down the shuffle and reveals
    pub seed: Option<u64>,
    pub hand_number: u32,
    pub dealer: Option<SeatId>,
    pub small_blind: u32,
    pub big_blind: u32,
    pub actions: Vec<ActionRecord>,
    #[serde(default)]
    pub arena_card: Option<RevealCard>,
    #[serde(default)]
    pub power_cards: Vec<RevealCard>,
    #[serde(default)]
    pub result: Option<HandResult>,
    /// RFC3339 timestamp
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::io::Write;

/// Hands out hand ids and appends hand records as JSONL, one line each, LF only.
pub struct HandLogger {
    writer: Option<Box<dyn Write>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    /// Writes to any sink, e.g. a compressing encoder; ids use `date`.
    pub fn with_writer(writer: Box<dyn Write>, date: &str) -> Self {
        Self {
            writer: Some(writer),
            date: date.to_string(),
            seq: 0,
        }
    }

    /// A logger that only hands out ids; nothing is written.
    pub fn in_memory(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    /// Serializes `record` to one line, stamping `ts` if it is missing.
    pub fn to_line(record: &HandRecord) -> std::io::Result<String> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        serde_json::to_string(&rec).map_err(std::io::Error::other)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        let line = Self::to_line(record)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        match &mut self.writer {
            Some(w) => w.flush(),
            None => Ok(()),
        }
    }
}
