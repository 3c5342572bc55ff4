use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A league participant as returned by the league service.
///
/// A league's player list is expected to arrive sorted by `draft_position`.
/// The index in that list is the player's seat for the whole draft.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Player {
    pub id: Uuid,
    pub user_id: Uuid,
    pub league_id: Uuid,
    #[serde(default)]
    pub in_league_name: String,
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub draft_points: i64,
    #[serde(default)]
    pub draft_position: u32,
}
