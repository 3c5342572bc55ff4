use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

use crate::error::DraftEngineError;

/// Elemental types. Declaration order is the fixed enumeration order used
/// for every type chart row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl PokemonType {
    pub const ALL: [PokemonType; 18] = [
        PokemonType::Normal,
        PokemonType::Fire,
        PokemonType::Water,
        PokemonType::Grass,
        PokemonType::Electric,
        PokemonType::Ice,
        PokemonType::Fighting,
        PokemonType::Poison,
        PokemonType::Ground,
        PokemonType::Flying,
        PokemonType::Psychic,
        PokemonType::Bug,
        PokemonType::Rock,
        PokemonType::Ghost,
        PokemonType::Dragon,
        PokemonType::Dark,
        PokemonType::Steel,
        PokemonType::Fairy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PokemonType::Normal => "normal",
            PokemonType::Fire => "fire",
            PokemonType::Water => "water",
            PokemonType::Grass => "grass",
            PokemonType::Electric => "electric",
            PokemonType::Ice => "ice",
            PokemonType::Fighting => "fighting",
            PokemonType::Poison => "poison",
            PokemonType::Ground => "ground",
            PokemonType::Flying => "flying",
            PokemonType::Psychic => "psychic",
            PokemonType::Bug => "bug",
            PokemonType::Rock => "rock",
            PokemonType::Ghost => "ghost",
            PokemonType::Dragon => "dragon",
            PokemonType::Dark => "dark",
            PokemonType::Steel => "steel",
            PokemonType::Fairy => "fairy",
        }
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PokemonType {
    type Err = DraftEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PokemonType::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| DraftEngineError::UnknownType(s.to_string()))
    }
}

/// Damage multiplier taken by a defender.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Effectiveness(pub f32);

impl Effectiveness {
    pub const IMMUNE: Effectiveness = Effectiveness(0.0);
    pub const BARELY_EFFECTIVE: Effectiveness = Effectiveness(0.25);
    pub const NOT_VERY_EFFECTIVE: Effectiveness = Effectiveness(0.5);
    pub const NEUTRAL: Effectiveness = Effectiveness(1.0);
    pub const SUPER_EFFECTIVE: Effectiveness = Effectiveness(2.0);
    // Same value as SUPER_EFFECTIVE; 4x only ever comes from dual-type stacking.
    pub const EXTREMELY_EFFECTIVE: Effectiveness = Effectiveness(2.0);

    pub fn value(&self) -> f32 {
        self.0
    }

    pub fn is_immune(&self) -> bool {
        self.0 == 0.0
    }

    /// Short label for roster tables, e.g. `0.25x` or `4x`.
    pub fn label(&self) -> String {
        format!("{}x", self.0)
    }

    pub fn tier(&self) -> EffectivenessTier {
        match self.0 {
            v if v == 0.0 => EffectivenessTier::Immune,
            v if v <= 0.25 => EffectivenessTier::Barely,
            v if v < 1.0 => EffectivenessTier::NotVery,
            v if v == 1.0 => EffectivenessTier::Neutral,
            v if v <= 2.0 => EffectivenessTier::Super,
            _ => EffectivenessTier::Extreme,
        }
    }
}

impl Mul for Effectiveness {
    type Output = Effectiveness;

    fn mul(self, rhs: Effectiveness) -> Effectiveness {
        Effectiveness(self.0 * rhs.0)
    }
}

impl fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Coarse buckets used when colouring a defensive chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectivenessTier {
    Immune,
    Barely,
    NotVery,
    Neutral,
    Super,
    Extreme,
}

/// Attacking type -> multiplier for one defender. Lookups of missing
/// entries read as neutral.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeEffectivenessMap(BTreeMap<PokemonType, Effectiveness>);

impl TypeEffectivenessMap {
    pub fn get(&self, attacking: PokemonType) -> Effectiveness {
        self.0.get(&attacking).copied().unwrap_or(Effectiveness::NEUTRAL)
    }

    pub fn set(&mut self, attacking: PokemonType, value: Effectiveness) {
        self.0.insert(attacking, value);
    }

    /// Multiplies the current entry (neutral if absent) by `factor`.
    pub fn scale(&mut self, attacking: PokemonType, factor: Effectiveness) {
        let current = self.get(attacking);
        self.set(attacking, current * factor);
    }

    /// Entries in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (PokemonType, Effectiveness)> + '_ {
        self.0.iter().map(|(t, e)| (*t, *e))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
