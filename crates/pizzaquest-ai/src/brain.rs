//! Llama and rat decision making.
//!
//! Each call consumes random numbers in a fixed order (manoeuvre roll,
//! then shoot roll) so a seeded RNG reproduces the same behaviour.
//! No ECS dependency: operates on plain data and returns an intent.

use glam::IVec2;
use rand::Rng;

use pizzaquest_core::constants::SHOT_RANGE_MARGIN;
use pizzaquest_core::enums::{Direction, Intelligence};
use pizzaquest_core::types::GridPos;

use crate::profiles::{get_profile, Chance, Manoeuvre};

/// Input to the llama brain for a single entity.
#[derive(Debug, Clone, Copy)]
pub struct LlamaContext {
    pub intelligence: Intelligence,
    pub position: GridPos,
    pub facing: Direction,
    pub anchor: GridPos,
    pub wander_radius: i32,
    pub pursuit_radius: i32,
    /// Where the player stands, if there is one.
    pub player: Option<GridPos>,
    /// Cells a spitball travels.
    pub spit_range: u32,
}

/// What the llama wants to do this event. Blocking checks happen when
/// the simulation applies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlamaIntent {
    Idle,
    /// Turn in place.
    Face(Direction),
    /// Move one cell (turns first if not already facing that way).
    Step(Direction),
    /// Spit along the current facing.
    Shoot,
}

fn roll(rng: &mut impl Rng, chance: Chance) -> bool {
    rng.gen_ratio(chance.numerator, chance.denominator)
}

/// Evaluate one llama event.
pub fn decide(ctx: &LlamaContext, rng: &mut impl Rng) -> LlamaIntent {
    let Some(player) = ctx.player else {
        return LlamaIntent::Idle;
    };
    let profile = get_profile(ctx.intelligence);

    if roll(rng, profile.manoeuvre_chance) {
        return match profile.manoeuvre {
            Manoeuvre::FacePlayer => LlamaIntent::Face(face_toward(ctx.position, player)),
            Manoeuvre::Wander => {
                let dir = random_direction(rng);
                if within_leash(ctx.position.step(dir), ctx.anchor, ctx.wander_radius) {
                    LlamaIntent::Step(dir)
                } else {
                    LlamaIntent::Idle
                }
            }
            Manoeuvre::Chase => step_toward(ctx.position, player, ctx.pursuit_radius, rng)
                .map_or(LlamaIntent::Idle, LlamaIntent::Step),
        };
    }

    if roll(rng, profile.shoot_chance) {
        let lined_up =
            !profile.shoot_requires_facing || face_toward(ctx.position, player) == ctx.facing;
        if lined_up && in_shot_range(ctx.position, player, ctx.spit_range) {
            return LlamaIntent::Shoot;
        }
    }

    LlamaIntent::Idle
}

/// The direction from `from` that best points at `to`: the dominant
/// axis wins, vertical on ties.
pub fn face_toward(from: GridPos, to: GridPos) -> Direction {
    let d = from.delta_to(to);
    if d.x.abs() > d.y.abs() {
        if d.x > 0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if d.y > 0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// One step toward `target` along the axis with the larger offset,
/// picking randomly on ties. `None` when the target is out of the
/// pursuit radius or already reached.
pub fn step_toward(
    from: GridPos,
    target: GridPos,
    pursuit_radius: i32,
    rng: &mut impl Rng,
) -> Option<Direction> {
    let d = from.delta_to(target);
    if d.x.abs() >= pursuit_radius || d.y.abs() >= pursuit_radius || d == IVec2::ZERO {
        return None;
    }
    let use_x = match d.x.abs().cmp(&d.y.abs()) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => rng.gen_bool(0.5),
    };
    let unit = if use_x {
        IVec2::new(d.x.signum(), 0)
    } else {
        IVec2::new(0, d.y.signum())
    };
    Direction::from_delta(unit)
}

/// Whether `pos` stays strictly inside the leash box around `anchor`.
pub fn within_leash(pos: GridPos, anchor: GridPos, radius: i32) -> bool {
    let d = anchor.delta_to(pos).abs();
    d.x < radius && d.y < radius
}

/// Whether the player is inside the box a llama opens fire in.
pub fn in_shot_range(from: GridPos, player: GridPos, spit_range: u32) -> bool {
    let reach = spit_range as i32 + SHOT_RANGE_MARGIN;
    let d = from.delta_to(player).abs();
    d.x < reach && d.y < reach
}

/// Rat fidget: with probability `1 / restlessness`, a random direction.
pub fn rat_fidget(restlessness: u32, rng: &mut impl Rng) -> Option<Direction> {
    if rng.gen_ratio(1, restlessness.max(1)) {
        Some(random_direction(rng))
    } else {
        None
    }
}

fn random_direction(rng: &mut impl Rng) -> Direction {
    Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
}
