//! Draft order, turn timer and defensive type chart for Pokémon draft leagues.
//!
//! Everything here works on read-only snapshots fetched from the league
//! service. Nothing is persisted or mutated.

pub mod dto {
    pub mod draft_dto;
    pub mod league_dto;
    pub mod pick_dto;
    pub mod player_dto;
    pub mod pokemon_dto;
    pub mod snapshot_dto;
    pub mod type_dto;
}

pub mod services {
    pub mod defensive_profile;
    pub mod draft_order;
    pub mod draft_timer;
    pub mod type_chart;
}

pub mod error;

pub use dto::{
    draft_dto::{Draft, DraftStatus},
    league_dto::{DraftOrderType, League, LeagueFormat, LeagueStatus},
    pick_dto::{PlayerDraftCard, PlayerPick},
    player_dto::Player,
    pokemon_dto::{DraftedPokemon, PokemonAbility, PokemonSpecies},
    snapshot_dto::DraftSnapshot,
    type_dto::{Effectiveness, EffectivenessTier, PokemonType, TypeEffectivenessMap},
};
pub use error::{DraftEngineError, Result};
pub use services::defensive_profile::{
    DefensiveProfile, EFFECTIVENESS_ALTERING_ABILITIES, RosterDefensiveRow, defensive_profile,
    roster_defensive_chart,
};
pub use services::draft_order::{
    draft_board, initial_draft_order, pick_number_for, picks_for_player, player_on_clock,
    seat_for_pick, total_picks, turns_until_next_pick,
};
pub use services::draft_timer::{
    Clock, ClockTick, DraftTimerClock, DraftTimerConfig, DraftTimerHandle, SystemClock, TimerEvent,
    format_remaining, spawn_draft_timer, time_remaining, turn_deadline,
};
pub use services::type_chart::{dual_type_effectiveness, single_type_effectiveness};
