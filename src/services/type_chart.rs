use crate::dto::type_dto::{Effectiveness, PokemonType};

/// Non-neutral entries of the attacking/defending chart. `None` means the
/// matchup is neutral.
fn chart_entry(attacking: PokemonType, defending: PokemonType) -> Option<Effectiveness> {
    use PokemonType::*;

    const SE: Effectiveness = Effectiveness::SUPER_EFFECTIVE;
    const NVE: Effectiveness = Effectiveness::NOT_VERY_EFFECTIVE;
    const IMM: Effectiveness = Effectiveness::IMMUNE;

    let value = match (attacking, defending) {
        // Normal
        (Normal, Rock) | (Normal, Steel) => NVE,
        (Normal, Ghost) => IMM,

        // Fire
        (Fire, Fire) | (Fire, Water) | (Fire, Rock) | (Fire, Dragon) => NVE,
        (Fire, Grass) | (Fire, Ice) | (Fire, Bug) | (Fire, Steel) => SE,

        // Water
        (Water, Water) | (Water, Grass) | (Water, Dragon) => NVE,
        (Water, Fire) | (Water, Ground) | (Water, Rock) => SE,

        // Grass
        (Grass, Fire)
        | (Grass, Grass)
        | (Grass, Poison)
        | (Grass, Flying)
        | (Grass, Bug)
        | (Grass, Dragon)
        | (Grass, Steel) => NVE,
        (Grass, Water) | (Grass, Ground) | (Grass, Rock) => SE,

        // Electric
        (Electric, Grass) | (Electric, Electric) | (Electric, Dragon) => NVE,
        (Electric, Ground) => IMM,
        (Electric, Water) | (Electric, Flying) => SE,

        // Ice
        (Ice, Fire) | (Ice, Water) | (Ice, Ice) | (Ice, Steel) => NVE,
        (Ice, Grass) | (Ice, Ground) | (Ice, Flying) | (Ice, Dragon) => SE,

        // Fighting
        (Fighting, Poison)
        | (Fighting, Flying)
        | (Fighting, Psychic)
        | (Fighting, Bug)
        | (Fighting, Fairy) => NVE,
        (Fighting, Ghost) => IMM,
        (Fighting, Normal)
        | (Fighting, Ice)
        | (Fighting, Rock)
        | (Fighting, Dark)
        | (Fighting, Steel) => SE,

        // Poison
        (Poison, Poison) | (Poison, Ground) | (Poison, Rock) | (Poison, Ghost) => NVE,
        (Poison, Steel) => IMM,
        (Poison, Grass) | (Poison, Fairy) => SE,

        // Ground
        (Ground, Grass) | (Ground, Bug) => NVE,
        (Ground, Flying) => IMM,
        (Ground, Fire)
        | (Ground, Electric)
        | (Ground, Poison)
        | (Ground, Rock)
        | (Ground, Steel) => SE,

        // Flying
        (Flying, Electric) | (Flying, Rock) | (Flying, Steel) => NVE,
        (Flying, Grass) | (Flying, Fighting) | (Flying, Bug) => SE,

        // Psychic
        (Psychic, Psychic) | (Psychic, Steel) => NVE,
        (Psychic, Dark) => IMM,
        (Psychic, Fighting) | (Psychic, Poison) => SE,

        // Bug
        (Bug, Fire)
        | (Bug, Fighting)
        | (Bug, Poison)
        | (Bug, Flying)
        | (Bug, Ghost)
        | (Bug, Steel)
        | (Bug, Fairy) => NVE,
        (Bug, Grass) | (Bug, Psychic) | (Bug, Dark) => SE,

        // Rock
        (Rock, Fighting) | (Rock, Ground) | (Rock, Steel) => NVE,
        (Rock, Fire) | (Rock, Ice) | (Rock, Flying) | (Rock, Bug) => SE,

        // Ghost
        (Ghost, Normal) => IMM,
        (Ghost, Dark) => NVE,
        (Ghost, Psychic) | (Ghost, Ghost) => SE,

        // Dragon
        (Dragon, Steel) => NVE,
        (Dragon, Fairy) => IMM,
        (Dragon, Dragon) => SE,

        // Dark
        (Dark, Fighting) | (Dark, Dark) | (Dark, Fairy) => NVE,
        (Dark, Psychic) | (Dark, Ghost) => SE,

        // Steel
        (Steel, Fire) | (Steel, Water) | (Steel, Electric) | (Steel, Steel) => NVE,
        (Steel, Ice) | (Steel, Rock) | (Steel, Fairy) => SE,

        // Fairy
        (Fairy, Fire) | (Fairy, Poison) | (Fairy, Steel) => NVE,
        (Fairy, Fighting) | (Fairy, Dragon) | (Fairy, Dark) => SE,

        _ => return None,
    };

    Some(value)
}

pub fn single_type_effectiveness(attacking: PokemonType, defending: PokemonType) -> Effectiveness {
    chart_entry(attacking, defending).unwrap_or(Effectiveness::NEUTRAL)
}

/// Product of both single-type multipliers, so resistances and weaknesses
/// stack and any immunity wins.
pub fn dual_type_effectiveness(
    attacking: PokemonType,
    type1: PokemonType,
    type2: Option<PokemonType>,
) -> Effectiveness {
    let primary = single_type_effectiveness(attacking, type1);
    match type2 {
        Some(secondary) => primary * single_type_effectiveness(attacking, secondary),
        None => primary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PokemonType::*;

    #[test]
    fn chart_is_directional() {
        assert_eq!(single_type_effectiveness(Fire, Grass), Effectiveness::SUPER_EFFECTIVE);
        assert_eq!(single_type_effectiveness(Grass, Fire), Effectiveness::NOT_VERY_EFFECTIVE);
        assert_eq!(single_type_effectiveness(Ghost, Normal), Effectiveness::IMMUNE);
        assert_eq!(single_type_effectiveness(Normal, Ghost), Effectiveness::IMMUNE);
        assert_eq!(single_type_effectiveness(Psychic, Dark), Effectiveness::IMMUNE);
        assert_eq!(single_type_effectiveness(Dark, Psychic), Effectiveness::SUPER_EFFECTIVE);
    }

    #[test]
    fn absent_entries_are_neutral() {
        assert_eq!(single_type_effectiveness(Normal, Normal), Effectiveness::NEUTRAL);
        assert_eq!(single_type_effectiveness(Dragon, Fire), Effectiveness::NEUTRAL);
    }

    #[test]
    fn chart_row_counts() {
        let count = |attacking: PokemonType, wanted: Effectiveness| {
            PokemonType::ALL
                .into_iter()
                .filter(|&d| single_type_effectiveness(attacking, d) == wanted)
                .count()
        };
        assert_eq!(count(Fighting, Effectiveness::SUPER_EFFECTIVE), 5);
        assert_eq!(count(Steel, Effectiveness::NOT_VERY_EFFECTIVE), 4);
        assert_eq!(count(Bug, Effectiveness::NOT_VERY_EFFECTIVE), 7);
        let immunities: usize = PokemonType::ALL
            .into_iter()
            .map(|a| count(a, Effectiveness::IMMUNE))
            .sum();
        assert_eq!(immunities, 8);
    }

    #[test]
    fn ground_immunity_dominates_water_weakness() {
        assert_eq!(single_type_effectiveness(Electric, Water), Effectiveness::SUPER_EFFECTIVE);
        assert_eq!(single_type_effectiveness(Electric, Ground), Effectiveness::IMMUNE);
        assert_eq!(dual_type_effectiveness(Electric, Water, Some(Ground)), Effectiveness::IMMUNE);
    }

    #[test]
    fn dual_types_stack() {
        assert_eq!(dual_type_effectiveness(Ice, Grass, Some(Ground)), Effectiveness(4.0));
        assert_eq!(
            dual_type_effectiveness(Grass, Fire, Some(Dragon)),
            Effectiveness::BARELY_EFFECTIVE
        );
        assert_eq!(dual_type_effectiveness(Fire, Water, None), Effectiveness::NOT_VERY_EFFECTIVE);
    }
}
