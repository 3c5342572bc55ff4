use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PokemonAbility {
    pub name: String,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PokemonSpecies {
    pub id: i64,
    #[serde(default)]
    pub dex_id: i64,
    pub name: String,
    /// Lowercase type names, primary type first.
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub abilities: Vec<PokemonAbility>,
}

/// A Pokémon owned by a player.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DraftedPokemon {
    pub id: Uuid,
    pub league_id: Uuid,
    pub player_id: Uuid,
    pub pokemon_species_id: i64,
    #[serde(default)]
    pub draft_round_number: u32,
    /// 0 when acquired outside the draft (free agency, trades).
    #[serde(default)]
    pub draft_pick_number: u32,
    #[serde(default)]
    pub is_released: bool,
    #[serde(default)]
    pub pokemon_species: Option<PokemonSpecies>,
}
