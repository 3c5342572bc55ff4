use serde::Serialize;

use crate::dto::{player_dto::Player, pokemon_dto::DraftedPokemon};

/// One of a player's draft slots. `pokemon` is `None` until the pick is made.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PlayerPick {
    pub pick_number: u32,
    pub pokemon: Option<DraftedPokemon>,
}

impl PlayerPick {
    pub fn is_made(&self) -> bool {
        self.pokemon.is_some()
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PlayerDraftCard {
    pub player: Player,
    pub picks: Vec<PlayerPick>,
}
