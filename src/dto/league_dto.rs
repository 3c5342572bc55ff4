use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::DraftEngineError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum DraftOrderType {
    #[default]
    Random,
    Manual,
}

impl FromStr for DraftOrderType {
    type Err = DraftEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "RANDOM" => Ok(DraftOrderType::Random),
            "MANUAL" => Ok(DraftOrderType::Manual),
            _ => Err(DraftEngineError::UnknownDraftOrderType(s.to_string())),
        }
    }
}

impl TryFrom<String> for DraftOrderType {
    type Error = DraftEngineError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeagueStatus {
    #[default]
    Pending,
    Setup,
    Drafting,
    PostDraft,
    TransferWindow,
    RegularSeason,
    PostRegularSeason,
    Playoffs,
    Completed,
    Cancelled,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct LeagueFormat {
    #[serde(default)]
    pub is_snake_round_draft: bool,
    #[serde(default)]
    pub draft_order_type: DraftOrderType,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct League {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: LeagueStatus,
    /// Doubles as the number of draft rounds.
    pub max_pokemon_per_player: u32,
    #[serde(default)]
    pub starting_draft_points: i64,
    #[serde(default)]
    pub format: LeagueFormat,
}

impl League {
    pub fn is_snake_draft(&self) -> bool {
        self.format.is_snake_round_draft
    }

    /// Whether the draft widgets (timer, turns until pick) are relevant.
    pub fn shows_draft_status(&self) -> bool {
        matches!(self.status, LeagueStatus::Drafting | LeagueStatus::PostDraft)
    }
}
