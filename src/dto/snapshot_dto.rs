use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::{
    draft_dto::Draft,
    league_dto::League,
    pick_dto::{PlayerDraftCard, PlayerPick},
    player_dto::Player,
    pokemon_dto::DraftedPokemon,
};
use crate::error::Result;
use crate::services::draft_order;

/// Everything the draft views need, as fetched from the league service.
/// Parts that have not loaded yet are `None` or empty.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct DraftSnapshot {
    #[serde(default)]
    pub league: Option<League>,
    #[serde(default)]
    pub draft: Option<Draft>,
    /// Sorted by initial draft position.
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub drafted_pokemon: Vec<DraftedPokemon>,
}

impl DraftSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn player(&self, player_id: Uuid) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Player holding the pick currently on the clock.
    pub fn player_on_clock(&self) -> Option<&Player> {
        let league = self.league.as_ref()?;
        let draft = self.draft.as_ref()?;
        draft_order::player_on_clock(draft.current_pick_on_clock, league, &self.players)
    }

    pub fn turns_until_next_pick(&self, player_id: Uuid) -> Option<u32> {
        let league = self.league.as_ref()?;
        let draft = self.draft.as_ref()?;
        let player = self.player(player_id)?;
        draft_order::turns_until_next_pick(
            draft.current_pick_on_clock,
            league,
            player,
            &self.players,
        )
    }

    pub fn picks_for_player(&self, player_id: Uuid) -> Vec<PlayerPick> {
        match (&self.league, self.player(player_id)) {
            (Some(league), Some(player)) => {
                draft_order::picks_for_player(player, league, &self.players, &self.drafted_pokemon)
            }
            _ => vec![],
        }
    }

    pub fn draft_board(&self) -> Vec<PlayerDraftCard> {
        match &self.league {
            Some(league) => draft_order::draft_board(league, &self.players, &self.drafted_pokemon),
            None => vec![],
        }
    }

    /// Roster of a player, released Pokémon excluded.
    pub fn roster(&self, player_id: Uuid) -> Vec<DraftedPokemon> {
        self.drafted_pokemon
            .iter()
            .filter(|dp| dp.player_id == player_id && !dp.is_released)
            .cloned()
            .collect()
    }
}
