use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::DraftEngineError;

/// Serialized upper case. Any casing of the backend spellings is accepted.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum DraftStatus {
    #[default]
    NotStarted,
    Ongoing,
    Paused,
    Completed,
}

impl DraftStatus {
    /// Only an ongoing draft has a player on the clock.
    pub fn is_active(&self) -> bool {
        matches!(self, DraftStatus::Ongoing)
    }
}

impl FromStr for DraftStatus {
    type Err = DraftEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NOT_STARTED" | "PENDING" => Ok(DraftStatus::NotStarted),
            "ONGOING" | "STARTED" => Ok(DraftStatus::Ongoing),
            "PAUSED" => Ok(DraftStatus::Paused),
            "COMPLETED" => Ok(DraftStatus::Completed),
            _ => Err(DraftEngineError::UnknownDraftStatus(s.to_string())),
        }
    }
}

impl TryFrom<String> for DraftStatus {
    type Error = DraftEngineError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Read-only view of a league's draft, owned and mutated by the draft service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Draft {
    pub league_id: Uuid,
    #[serde(default)]
    pub status: DraftStatus,
    /// 1-based overall pick number.
    pub current_pick_on_clock: u32,
    #[serde(default)]
    pub current_turn_player_id: Option<Uuid>,
    #[serde(default)]
    pub current_turn_start_time: Option<DateTime<Utc>>,
    /// Minutes.
    #[serde(default)]
    pub turn_time_limit: i64,
}
