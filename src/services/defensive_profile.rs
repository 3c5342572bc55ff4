use serde::Serialize;
use tracing::warn;

use crate::dto::{
    pokemon_dto::{DraftedPokemon, PokemonAbility, PokemonSpecies},
    type_dto::{Effectiveness, PokemonType, TypeEffectivenessMap},
};
use crate::services::type_chart::dual_type_effectiveness;

/// Abilities whose effect on incoming damage is modeled.
pub const EFFECTIVENESS_ALTERING_ABILITIES: [&str; 12] = [
    // immunities
    "dry-skin",
    "earth-eater",
    "flash-fire",
    "levitate",
    "lightning-rod",
    "sap-sipper",
    "storm-drain",
    "volt-absorb",
    "water-absorb",
    "wonder-guard",
    // resistances
    "purifying-salt",
    "thick-fat",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DefensiveAbility {
    DrySkin,
    EarthEater,
    FlashFire,
    Levitate,
    LightningRod,
    SapSipper,
    StormDrain,
    VoltAbsorb,
    WaterAbsorb,
    WonderGuard,
    PurifyingSalt,
    ThickFat,
}

impl DefensiveAbility {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "dry-skin" => Some(DefensiveAbility::DrySkin),
            "earth-eater" => Some(DefensiveAbility::EarthEater),
            "flash-fire" => Some(DefensiveAbility::FlashFire),
            "levitate" => Some(DefensiveAbility::Levitate),
            "lightning-rod" => Some(DefensiveAbility::LightningRod),
            "sap-sipper" => Some(DefensiveAbility::SapSipper),
            "storm-drain" => Some(DefensiveAbility::StormDrain),
            "volt-absorb" => Some(DefensiveAbility::VoltAbsorb),
            "water-absorb" => Some(DefensiveAbility::WaterAbsorb),
            "wonder-guard" => Some(DefensiveAbility::WonderGuard),
            "purifying-salt" => Some(DefensiveAbility::PurifyingSalt),
            "thick-fat" => Some(DefensiveAbility::ThickFat),
            _ => None,
        }
    }

    /// Fixed (attacking type, factor) adjustments. Wonder Guard is handled
    /// separately because it depends on the current profile.
    fn adjustments(&self) -> &'static [(PokemonType, Effectiveness)] {
        use PokemonType::*;

        match self {
            DefensiveAbility::DrySkin => &[
                (Water, Effectiveness::IMMUNE),
                (Fire, Effectiveness::SUPER_EFFECTIVE),
            ],
            DefensiveAbility::EarthEater | DefensiveAbility::Levitate => {
                &[(Ground, Effectiveness::IMMUNE)]
            }
            DefensiveAbility::FlashFire => &[(Fire, Effectiveness::IMMUNE)],
            DefensiveAbility::LightningRod | DefensiveAbility::VoltAbsorb => {
                &[(Electric, Effectiveness::IMMUNE)]
            }
            DefensiveAbility::SapSipper => &[(Grass, Effectiveness::IMMUNE)],
            DefensiveAbility::StormDrain | DefensiveAbility::WaterAbsorb => {
                &[(Water, Effectiveness::IMMUNE)]
            }
            DefensiveAbility::PurifyingSalt => &[(Ghost, Effectiveness::NOT_VERY_EFFECTIVE)],
            DefensiveAbility::ThickFat => &[
                (Fire, Effectiveness::NOT_VERY_EFFECTIVE),
                (Ice, Effectiveness::NOT_VERY_EFFECTIVE),
            ],
            DefensiveAbility::WonderGuard => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefensiveProfile {
    pub effectiveness: TypeEffectivenessMap,
    pub ability_mattered: bool,
    /// Attacking types changed by an ability, in application order. A type
    /// touched by two abilities appears twice.
    pub affected_types: Vec<PokemonType>,
}

impl DefensiveProfile {
    pub fn is_affected(&self, attacking: PokemonType) -> bool {
        self.affected_types.contains(&attacking)
    }
}

/// Damage taken from every attacking type by a Pokémon of the given types,
/// adjusted for the abilities in [`EFFECTIVENESS_ALTERING_ABILITIES`].
pub fn defensive_profile(
    type1: PokemonType,
    type2: Option<PokemonType>,
    abilities: &[PokemonAbility],
) -> DefensiveProfile {
    let mut effectiveness = TypeEffectivenessMap::default();
    for attacking in PokemonType::ALL {
        effectiveness.set(attacking, dual_type_effectiveness(attacking, type1, type2));
    }

    let mut ability_mattered = false;
    let mut affected_types = Vec::new();

    let relevant = abilities
        .iter()
        .filter(|a| EFFECTIVENESS_ALTERING_ABILITIES.iter().any(|known| *known == a.name));

    for ability in relevant {
        let Some(rule) = DefensiveAbility::from_name(&ability.name) else {
            warn!(
                "Ability {} is listed as effectiveness altering but has no rule, ignoring.",
                ability.name
            );
            continue;
        };
        ability_mattered = true;

        if rule == DefensiveAbility::WonderGuard {
            for attacking in PokemonType::ALL {
                let current = effectiveness.get(attacking);
                if current <= Effectiveness::NEUTRAL {
                    if !current.is_immune() {
                        affected_types.push(attacking);
                    }
                    effectiveness.set(attacking, Effectiveness::IMMUNE);
                }
            }
            continue;
        }

        for &(attacking, factor) in rule.adjustments() {
            effectiveness.scale(attacking, factor);
            affected_types.push(attacking);
        }
    }

    DefensiveProfile {
        effectiveness,
        ability_mattered,
        affected_types,
    }
}

impl PokemonSpecies {
    /// Profile from the species' stored type names. `None` when the primary
    /// type is missing or not a known type.
    pub fn defensive_profile(&self) -> Option<DefensiveProfile> {
        let type1 = match self.types.first().map(|t| t.parse::<PokemonType>()) {
            Some(Ok(t)) => t,
            Some(Err(e)) => {
                warn!("Skipping {}: {}", self.name, e);
                return None;
            }
            None => {
                warn!("Skipping {}: species has no types.", self.name);
                return None;
            }
        };

        let type2 = match self.types.get(1).map(|t| t.parse::<PokemonType>()) {
            Some(Ok(t)) => Some(t),
            Some(Err(e)) => {
                warn!("Ignoring secondary type of {}: {}", self.name, e);
                None
            }
            None => None,
        };

        Some(defensive_profile(type1, type2, &self.abilities))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterDefensiveRow {
    pub drafted_pokemon_id: uuid::Uuid,
    pub species_name: String,
    pub profile: DefensiveProfile,
}

/// One row per roster entry whose species data is loaded, in roster order.
pub fn roster_defensive_chart(roster: &[DraftedPokemon]) -> Vec<RosterDefensiveRow> {
    roster
        .iter()
        .filter_map(|dp| {
            let species = dp.pokemon_species.as_ref()?;
            let profile = species.defensive_profile()?;
            Some(RosterDefensiveRow {
                drafted_pokemon_id: dp.id,
                species_name: species.name.clone(),
                profile,
            })
        })
        .collect()
}
