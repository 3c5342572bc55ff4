use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::dto::{
    league_dto::{DraftOrderType, League},
    pick_dto::{PlayerDraftCard, PlayerPick},
    player_dto::Player,
    pokemon_dto::DraftedPokemon,
};

/// Overall pick number held by the seat `player_index` in the 0-based `round`.
///
/// Snake drafts reverse direction on every odd 0-based round. Panics if
/// `player_index` is not a valid seat, since that means the draft order was
/// built wrong upstream.
pub fn pick_number_for(round: u32, player_index: usize, num_players: usize, is_snake: bool) -> u32 {
    assert!(num_players >= 1, "draft order needs at least one player");
    assert!(
        player_index < num_players,
        "player index {} out of range for {} players",
        player_index,
        num_players
    );

    let n = num_players as u32;
    let seat = player_index as u32;
    if is_snake && round % 2 == 1 {
        round * n + (n - 1 - seat) + 1
    } else {
        round * n + seat + 1
    }
}

/// Seat (index into the draft-ordered player list) that holds `pick_number`.
pub fn seat_for_pick(pick_number: u32, num_players: usize, is_snake: bool) -> Option<usize> {
    if pick_number == 0 || num_players == 0 {
        return None;
    }

    let n = num_players as u32;
    let round = pick_number.div_ceil(n); // 1-based
    let pick_in_round = ((pick_number - 1) % n) as usize;

    if is_snake && round % 2 == 0 {
        Some(num_players - 1 - pick_in_round)
    } else {
        Some(pick_in_round)
    }
}

/// Picks in the whole draft, or `None` if the count does not fit in a `u32`.
pub fn total_picks(league: &League, num_players: usize) -> Option<u32> {
    let n = u32::try_from(num_players).ok()?;
    league.max_pokemon_per_player.checked_mul(n)
}

/// The player holding `pick_number`, if that pick exists in this draft.
pub fn player_on_clock<'a>(
    pick_number: u32,
    league: &League,
    players: &'a [Player],
) -> Option<&'a Player> {
    if pick_number > total_picks(league, players.len())? {
        return None;
    }
    seat_for_pick(pick_number, players.len(), league.is_snake_draft()).map(|seat| &players[seat])
}

/// Every pick slot belonging to `player`, one per round, with the Pokémon
/// taken at that slot if the pick has been made.
pub fn picks_for_player(
    player: &Player,
    league: &League,
    players: &[Player],
    drafted: &[DraftedPokemon],
) -> Vec<PlayerPick> {
    let Some(seat) = players.iter().position(|p| p.id == player.id) else {
        debug!("Player {} is not part of the draft order.", player.id);
        return vec![];
    };
    if total_picks(league, players.len()).is_none() {
        debug!("Draft of league {} has more picks than can be numbered.", league.id);
        return vec![];
    }

    (0..league.max_pokemon_per_player)
        .map(|round| {
            let pick_number = pick_number_for(round, seat, players.len(), league.is_snake_draft());
            // Released Pokémon keep their slot.
            let pokemon = drafted
                .iter()
                .find(|dp| {
                    dp.draft_pick_number > 0
                        && dp.draft_pick_number == pick_number
                        && dp.player_id == player.id
                })
                .cloned();

            PlayerPick { pick_number, pokemon }
        })
        .collect()
}

/// Picks for every player, in draft order.
pub fn draft_board(
    league: &League,
    players: &[Player],
    drafted: &[DraftedPokemon],
) -> Vec<PlayerDraftCard> {
    players
        .iter()
        .map(|player| PlayerDraftCard {
            player: player.clone(),
            picks: picks_for_player(player, league, players, drafted),
        })
        .collect()
}

/// Number of picks other players make before `player` is next on the clock.
///
/// Only picks strictly after `current_pick_on_clock` are considered, so a
/// player who is on the clock right now gets the distance to their following
/// pick. Returns `None` once the player has no picks left.
pub fn turns_until_next_pick(
    current_pick_on_clock: u32,
    league: &League,
    player: &Player,
    players: &[Player],
) -> Option<u32> {
    if players.is_empty() {
        debug!("No players loaded, cannot compute turns until next pick.");
        return None;
    }

    let last_pick = total_picks(league, players.len())?;
    let first_pick = current_pick_on_clock.checked_add(1)?;
    (first_pick..=last_pick)
        .find(|&overall_pick| {
            seat_for_pick(overall_pick, players.len(), league.is_snake_draft())
                .is_some_and(|seat| players[seat].id == player.id)
        })
        .map(|next_pick| next_pick - current_pick_on_clock - 1)
}

/// Seat order for a draft that is about to start.
pub fn initial_draft_order<R: Rng + ?Sized>(
    players: &[Player],
    order_type: DraftOrderType,
    rng: &mut R,
) -> Vec<Player> {
    let mut ordered = players.to_vec();
    match order_type {
        DraftOrderType::Random => ordered.shuffle(rng),
        DraftOrderType::Manual => ordered.sort_by_key(|p| p.draft_position),
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::league_dto::{LeagueFormat, LeagueStatus};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use uuid::Uuid;

    fn league(rounds: u32, snake: bool) -> League {
        League {
            id: Uuid::new_v4(),
            name: "Test League".into(),
            status: LeagueStatus::Drafting,
            max_pokemon_per_player: rounds,
            starting_draft_points: 140,
            format: LeagueFormat {
                is_snake_round_draft: snake,
                draft_order_type: DraftOrderType::Manual,
            },
        }
    }

    fn players(count: usize) -> Vec<Player> {
        let league_id = Uuid::new_v4();
        (0..count)
            .map(|i| Player {
                id: Uuid::new_v4(),
                user_id: Uuid::new_v4(),
                league_id,
                in_league_name: format!("coach{}", i),
                team_name: format!("Team {}", i),
                draft_points: 140,
                draft_position: i as u32 + 1,
            })
            .collect()
    }

    fn drafted(player: &Player, pick_number: u32) -> DraftedPokemon {
        DraftedPokemon {
            id: Uuid::new_v4(),
            league_id: player.league_id,
            player_id: player.id,
            pokemon_species_id: 25,
            draft_round_number: 0,
            draft_pick_number: pick_number,
            is_released: false,
            pokemon_species: None,
        }
    }

    #[test]
    fn pick_numbers_cover_every_slot_exactly_once() {
        for snake in [true, false] {
            for num_players in 1..=9 {
                for rounds in 1..=8u32 {
                    let mut seen = HashSet::new();
                    for round in 0..rounds {
                        for seat in 0..num_players {
                            assert!(seen.insert(pick_number_for(round, seat, num_players, snake)));
                        }
                    }
                    let expected: HashSet<u32> = (1..=rounds * num_players as u32).collect();
                    assert_eq!(
                        seen, expected,
                        "players={} rounds={} snake={}",
                        num_players, rounds, snake
                    );
                }
            }
        }
    }

    #[test]
    fn snake_reverses_second_round() {
        let first: Vec<u32> = (0..4).map(|p| pick_number_for(0, p, 4, true)).collect();
        let second: Vec<u32> = (0..4).map(|p| pick_number_for(1, p, 4, true)).collect();
        assert_eq!(first, vec![1, 2, 3, 4]);
        assert_eq!(second, vec![8, 7, 6, 5]);
    }

    #[test]
    fn linear_never_reverses() {
        let second: Vec<u32> = (0..4).map(|p| pick_number_for(1, p, 4, false)).collect();
        let third: Vec<u32> = (0..4).map(|p| pick_number_for(2, p, 4, false)).collect();
        assert_eq!(second, vec![5, 6, 7, 8]);
        assert_eq!(third, vec![9, 10, 11, 12]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_seat_panics() {
        pick_number_for(0, 4, 4, true);
    }

    #[test]
    #[should_panic(expected = "at least one player")]
    fn zero_players_panics() {
        pick_number_for(0, 0, 0, false);
    }

    #[test]
    fn seat_for_pick_inverts_pick_number_for() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let num_players = rng.random_range(1..=12);
            let round = rng.random_range(0..10u32);
            let seat = rng.random_range(0..num_players);
            let snake = rng.random_bool(0.5);
            let pick = pick_number_for(round, seat, num_players, snake);
            assert_eq!(seat_for_pick(pick, num_players, snake), Some(seat));
        }
        assert_eq!(seat_for_pick(0, 4, true), None);
        assert_eq!(seat_for_pick(3, 0, true), None);
    }

    #[test]
    fn player_on_clock_follows_the_snake() {
        let league = league(2, true);
        let players = players(3);
        assert_eq!(player_on_clock(1, &league, &players), Some(&players[0]));
        assert_eq!(player_on_clock(3, &league, &players), Some(&players[2]));
        assert_eq!(player_on_clock(4, &league, &players), Some(&players[2]));
        assert_eq!(player_on_clock(6, &league, &players), Some(&players[0]));
        assert_eq!(player_on_clock(7, &league, &players), None);
        assert_eq!(player_on_clock(0, &league, &players), None);
    }

    #[test]
    fn picks_for_player_pairs_made_picks() {
        let league = league(3, true);
        let players = players(4);
        let coach = &players[1];
        let mut first = drafted(coach, 2);
        first.is_released = true;
        let history = vec![first.clone(), drafted(&players[0], 1), drafted(coach, 7)];

        let picks = picks_for_player(coach, &league, &players, &history);
        let numbers: Vec<u32> = picks.iter().map(|p| p.pick_number).collect();
        assert_eq!(numbers, vec![2, 7, 10]);
        assert_eq!(picks[0].pokemon.as_ref(), Some(&first));
        assert!(picks[1].is_made());
        assert!(!picks[2].is_made());
    }

    #[test]
    fn picks_ignore_other_owners_and_non_draft_acquisitions() {
        let league = league(2, false);
        let players = players(2);
        let coach = &players[0];
        // Traded to someone else after being picked at #1.
        let traded = drafted(&players[1], 1);
        let free_agent = drafted(coach, 0);

        let picks = picks_for_player(coach, &league, &players, &[traded, free_agent]);
        assert_eq!(picks.len(), 2);
        assert!(picks.iter().all(|p| p.pokemon.is_none()));
    }

    #[test]
    fn unknown_player_has_no_picks() {
        let league = league(3, true);
        let players = players(4);
        let outsider = self::players(1).remove(0);
        assert!(picks_for_player(&outsider, &league, &players, &[]).is_empty());
    }

    #[test]
    fn draft_board_has_a_card_per_player() {
        let league = league(2, true);
        let players = players(3);
        let board = draft_board(&league, &players, &[]);
        assert_eq!(board.len(), 3);
        assert_eq!(board[2].player, players[2]);
        let picks: Vec<u32> = board[2].picks.iter().map(|p| p.pick_number).collect();
        assert_eq!(picks, vec![3, 4]);
    }

    #[test]
    fn turns_until_next_pick_counts_other_players() {
        let league = league(3, true);
        let players = players(4);
        // Pick 1 is on the clock; player 1 holds pick 2.
        assert_eq!(turns_until_next_pick(1, &league, &players[1], &players), Some(0));
        // Player 0 is on the clock at 1; next pick is 8.
        assert_eq!(turns_until_next_pick(1, &league, &players[0], &players), Some(6));
        // Player 3 holds picks 4 and 5 back to back.
        assert_eq!(turns_until_next_pick(4, &league, &players[3], &players), Some(0));
    }

    #[test]
    fn turns_until_next_pick_linear() {
        let league = league(2, false);
        let players = players(4);
        assert_eq!(turns_until_next_pick(2, &league, &players[0], &players), Some(2));
        assert_eq!(turns_until_next_pick(5, &league, &players[0], &players), None);
    }

    #[test]
    fn turns_until_next_pick_is_none_after_final_pick() {
        let league = league(2, true);
        let players = players(4);
        // Player 3's last pick is 5.
        assert_eq!(turns_until_next_pick(5, &league, &players[3], &players), None);
        assert_eq!(turns_until_next_pick(8, &league, &players[0], &players), None);
    }

    #[test]
    fn turns_until_next_pick_tolerates_empty_inputs() {
        let league = league(2, true);
        let players = players(2);
        assert_eq!(turns_until_next_pick(0, &league, &players[0], &[]), None);
        assert_eq!(turns_until_next_pick(0, &self::league(0, true), &players[0], &players), None);
    }

    #[test]
    fn oversized_drafts_do_not_overflow() {
        let players = players(2);
        let huge = league(u32::MAX, true);
        assert_eq!(total_picks(&huge, players.len()), None);
        assert_eq!(turns_until_next_pick(1, &huge, &players[0], &players), None);
        assert_eq!(player_on_clock(1, &huge, &players), None);
        assert!(picks_for_player(&players[0], &huge, &players, &[]).is_empty());
        assert!(draft_board(&huge, &players, &[]).iter().all(|card| card.picks.is_empty()));

        let normal = league(3, true);
        assert_eq!(total_picks(&normal, players.len()), Some(6));
        assert_eq!(turns_until_next_pick(u32::MAX, &normal, &players[0], &players), None);
        assert_eq!(player_on_clock(u32::MAX, &normal, &players), None);
    }

    #[test]
    fn manual_order_sorts_by_draft_position() {
        let mut shuffled = players(4);
        shuffled.reverse();
        let mut rng = StdRng::seed_from_u64(1);
        let ordered = initial_draft_order(&shuffled, DraftOrderType::Manual, &mut rng);
        let positions: Vec<u32> = ordered.iter().map(|p| p.draft_position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);
    }

    #[test]
    fn random_order_is_a_permutation() {
        let players = players(8);
        let mut rng = StdRng::seed_from_u64(42);
        let ordered = initial_draft_order(&players, DraftOrderType::Random, &mut rng);
        assert_eq!(ordered.len(), players.len());
        let original: HashSet<Uuid> = players.iter().map(|p| p.id).collect();
        let shuffled: HashSet<Uuid> = ordered.iter().map(|p| p.id).collect();
        assert_eq!(original, shuffled);
    }
}
