use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use pizzaquest_core::constants::*;
use pizzaquest_core::enums::{Direction, Intelligence};
use pizzaquest_core::types::GridPos;

use crate::brain::*;
use crate::profiles::{get_profile, Manoeuvre};

/// Every probability roll succeeds; `gen_range` yields its lower bound.
fn always() -> StepRng {
    StepRng::new(0, 0)
}

/// Every probability roll fails.
fn never() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

/// First roll fails, every later roll succeeds.
fn second_roll() -> StepRng {
    StepRng::new(u64::MAX, 1)
}

fn make_context(intelligence: Intelligence, position: GridPos, player: GridPos) -> LlamaContext {
    LlamaContext {
        intelligence,
        position,
        facing: Direction::Left,
        anchor: position,
        wander_radius: LLAMA_WANDER_RADIUS,
        pursuit_radius: LLAMA_PURSUIT_RADIUS,
        player: Some(player),
        spit_range: LLAMA_SPIT_RANGE,
    }
}

#[test]
fn test_profiles_match_tiers() {
    assert_eq!(
        get_profile(Intelligence::Passive).manoeuvre,
        Manoeuvre::FacePlayer
    );
    assert_eq!(
        get_profile(Intelligence::Wandering).manoeuvre,
        Manoeuvre::Wander
    );
    assert_eq!(
        get_profile(Intelligence::Aggressive).manoeuvre,
        Manoeuvre::Chase
    );
    assert!(get_profile(Intelligence::Passive).shoot_requires_facing);
}

#[test]
fn test_no_player_is_idle() {
    let mut ctx = make_context(Intelligence::Aggressive, GridPos::new(5, 5), GridPos::new(6, 5));
    ctx.player = None;
    assert_eq!(decide(&ctx, &mut always()), LlamaIntent::Idle);
}

#[test]
fn test_passive_turns_toward_player() {
    let ctx = make_context(Intelligence::Passive, GridPos::new(5, 5), GridPos::new(9, 6));
    assert_eq!(
        decide(&ctx, &mut always()),
        LlamaIntent::Face(Direction::Right)
    );
}

#[test]
fn test_passive_spits_only_when_facing() {
    // Player to the left, llama already facing left.
    let ctx = make_context(Intelligence::Passive, GridPos::new(5, 5), GridPos::new(2, 5));
    assert_eq!(decide(&ctx, &mut second_roll()), LlamaIntent::Shoot);

    // Same spot, but the llama looks the other way.
    let mut turned = ctx;
    turned.facing = Direction::Right;
    assert_eq!(decide(&turned, &mut second_roll()), LlamaIntent::Idle);
}

#[test]
fn test_spit_needs_player_in_range() {
    // Reach is spit range + margin = 5 cells; 5 away is too far.
    let ctx = make_context(Intelligence::Wandering, GridPos::new(10, 10), GridPos::new(5, 10));
    assert_eq!(decide(&ctx, &mut second_roll()), LlamaIntent::Idle);
    let close = make_context(Intelligence::Wandering, GridPos::new(10, 10), GridPos::new(6, 10));
    assert_eq!(decide(&close, &mut second_roll()), LlamaIntent::Shoot);
}

#[test]
fn test_all_rolls_failing_is_idle() {
    for tier in [
        Intelligence::Passive,
        Intelligence::Wandering,
        Intelligence::Aggressive,
    ] {
        let ctx = make_context(tier, GridPos::new(5, 5), GridPos::new(4, 5));
        assert_eq!(decide(&ctx, &mut never()), LlamaIntent::Idle, "{tier:?}");
    }
}

#[test]
fn test_wander_respects_leash() {
    // The mock RNG always picks the first direction in the table (Left).
    let mut ctx = make_context(Intelligence::Wandering, GridPos::new(10, 10), GridPos::new(30, 30));
    assert_eq!(
        decide(&ctx, &mut always()),
        LlamaIntent::Step(Direction::Left)
    );

    // Already 6 cells left of the anchor: one more would hit the leash.
    ctx.position = GridPos::new(4, 10);
    assert_eq!(decide(&ctx, &mut always()), LlamaIntent::Idle);
}

#[test]
fn test_aggressive_chases_along_dominant_axis() {
    let ctx = make_context(Intelligence::Aggressive, GridPos::new(10, 10), GridPos::new(13, 11));
    assert_eq!(
        decide(&ctx, &mut always()),
        LlamaIntent::Step(Direction::Right)
    );

    let ctx = make_context(Intelligence::Aggressive, GridPos::new(10, 10), GridPos::new(9, 5));
    assert_eq!(decide(&ctx, &mut always()), LlamaIntent::Step(Direction::Up));
}

#[test]
fn test_aggressive_ignores_distant_player() {
    let ctx = make_context(
        Intelligence::Aggressive,
        GridPos::new(10, 10),
        GridPos::new(10 + LLAMA_PURSUIT_RADIUS, 10),
    );
    assert_eq!(decide(&ctx, &mut always()), LlamaIntent::Idle);
}

#[test]
fn test_step_toward_tie_breaks_both_ways() {
    let mut seen_x = false;
    let mut seen_y = false;
    for seed in 0..64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        match step_toward(GridPos::new(0, 0), GridPos::new(2, 2), 7, &mut rng) {
            Some(Direction::Right) => seen_x = true,
            Some(Direction::Down) => seen_y = true,
            other => panic!("unexpected step {other:?}"),
        }
    }
    assert!(seen_x && seen_y, "diagonal ties should go either way");
}

#[test]
fn test_step_toward_already_there() {
    let p = GridPos::new(3, 3);
    assert_eq!(step_toward(p, p, 7, &mut always()), None);
}

#[test]
fn test_face_toward() {
    let o = GridPos::new(0, 0);
    assert_eq!(face_toward(o, GridPos::new(3, 1)), Direction::Right);
    assert_eq!(face_toward(o, GridPos::new(-3, 1)), Direction::Left);
    assert_eq!(face_toward(o, GridPos::new(1, 2)), Direction::Down);
    assert_eq!(face_toward(o, GridPos::new(1, -2)), Direction::Up);
    // Ties favour the vertical axis.
    assert_eq!(face_toward(o, GridPos::new(2, 2)), Direction::Down);
}

#[test]
fn test_within_leash() {
    let anchor = GridPos::new(10, 10);
    assert!(within_leash(GridPos::new(16, 4), anchor, 7));
    assert!(!within_leash(GridPos::new(17, 10), anchor, 7));
    assert!(!within_leash(GridPos::new(10, 3), anchor, 7));
}

#[test]
fn test_rat_fidget() {
    assert_eq!(rat_fidget(RAT_RESTLESSNESS, &mut never()), None);
    assert_eq!(rat_fidget(1, &mut always()), Some(Direction::Left));
    // Zero restlessness is treated as "always".
    assert!(rat_fidget(0, &mut always()).is_some());
}

#[test]
fn test_decisions_reproducible_with_seed() {
    let ctx = make_context(Intelligence::Aggressive, GridPos::new(10, 10), GridPos::new(12, 9));
    let run = |seed| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..50).map(|_| decide(&ctx, &mut rng)).collect::<Vec<_>>()
    };
    assert_eq!(run(7), run(7));
}
