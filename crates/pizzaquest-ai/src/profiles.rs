//! Tier-specific behavioural profiles.
//!
//! Consolidates per-tier probabilities for the llama brain.

use pizzaquest_core::enums::Intelligence;

/// A "one in N"-style probability, rolled with `Rng::gen_ratio`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chance {
    pub numerator: u32,
    pub denominator: u32,
}

impl Chance {
    pub const fn one_in(denominator: u32) -> Self {
        Self {
            numerator: 1,
            denominator,
        }
    }
}

/// Passive llamas turn toward the player one event in four.
pub const PASSIVE_TURN_CHANCE: Chance = Chance::one_in(4);
/// Passive llamas that did not turn spit one event in three.
pub const PASSIVE_SHOOT_CHANCE: Chance = Chance::one_in(3);
/// Wandering llamas take a random step one event in three.
pub const WANDERING_STEP_CHANCE: Chance = Chance::one_in(3);
pub const WANDERING_SHOOT_CHANCE: Chance = Chance::one_in(3);
/// Aggressive llamas close in one event in three.
pub const AGGRESSIVE_CHASE_CHANCE: Chance = Chance::one_in(3);
/// Aggressive llamas that did not move spit every other event.
pub const AGGRESSIVE_SHOOT_CHANCE: Chance = Chance::one_in(2);

/// What a tier does with its primary roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Manoeuvre {
    /// Turn in place toward the player.
    FacePlayer,
    /// Random step, leashed to the anchor.
    Wander,
    /// Step toward the player when within pursuit radius.
    Chase,
}

/// Behavioural profile for an intelligence tier.
#[derive(Debug, Clone, Copy)]
pub struct TierProfile {
    pub manoeuvre: Manoeuvre,
    /// Probability of attempting the manoeuvre.
    pub manoeuvre_chance: Chance,
    /// Probability of spitting when the manoeuvre roll failed.
    pub shoot_chance: Chance,
    /// Only spit when already facing the player.
    pub shoot_requires_facing: bool,
}

/// Get the behavioural profile for a given tier.
pub fn get_profile(intelligence: Intelligence) -> TierProfile {
    match intelligence {
        Intelligence::Passive => TierProfile {
            manoeuvre: Manoeuvre::FacePlayer,
            manoeuvre_chance: PASSIVE_TURN_CHANCE,
            shoot_chance: PASSIVE_SHOOT_CHANCE,
            shoot_requires_facing: true,
        },
        Intelligence::Wandering => TierProfile {
            manoeuvre: Manoeuvre::Wander,
            manoeuvre_chance: WANDERING_STEP_CHANCE,
            shoot_chance: WANDERING_SHOOT_CHANCE,
            shoot_requires_facing: false,
        },
        Intelligence::Aggressive => TierProfile {
            manoeuvre: Manoeuvre::Chase,
            manoeuvre_chance: AGGRESSIVE_CHASE_CHANCE,
            shoot_chance: AGGRESSIVE_SHOOT_CHANCE,
            shoot_requires_facing: false,
        },
    }
}
