//! Entity blueprints: a value describing an entity before it exists.
//!
//! Construction is two-phase. A `Blueprint` is built off-world with the
//! kind's default stats, then `WorldState::materialize` places it.

use hecs::EntityBuilder;

use pizzaquest_core::components::*;
use pizzaquest_core::constants::*;
use pizzaquest_core::enums::{Direction, Intelligence, Kind};
use pizzaquest_core::types::GridPos;

/// Component bundle for one entity, not yet in the world.
#[derive(Debug, Clone)]
pub struct Blueprint {
    pub kind: Kind,
    pub label: Label,
    pub caps: Capabilities,
    pub facing: Option<Direction>,
    pub health: Option<Health>,
    pub fireball: Option<FireballStats>,
    pub wander: Option<Wander>,
    pub brain: Option<Brain>,
    pub restlessness: Option<Restlessness>,
    pub projectile: Option<ProjectileState>,
    pub inventory: Option<Inventory>,
    /// Ticks between the entity's own events. `None` for inert things.
    pub cadence: Option<Cadence>,
    pub animation: Option<Animation>,
}

impl Blueprint {
    fn thing(kind: Kind, label: Label, caps: Capabilities) -> Self {
        Self {
            kind,
            label,
            caps,
            facing: None,
            health: None,
            fireball: None,
            wander: None,
            brain: None,
            restlessness: None,
            projectile: None,
            inventory: None,
            cadence: None,
            animation: None,
        }
    }

    pub fn door(description: impl Into<String>) -> Self {
        let caps = Capabilities {
            flammable: true,
            ..Capabilities::SOLID
        };
        Self::thing(Kind::Door, Label::new("Door", description), caps)
    }

    /// Opens only when every llama on the level is dead.
    pub fn barricade_door(description: impl Into<String>) -> Self {
        Self::thing(
            Kind::BarricadeDoor,
            Label::new("Barricade Door", description),
            Capabilities::SOLID,
        )
    }

    pub fn pizza(description: impl Into<String>) -> Self {
        Self::thing(
            Kind::Pizza,
            Label::new("Pizza Slice", description),
            Capabilities::SOLID,
        )
    }

    pub fn vortex() -> Self {
        Self {
            cadence: Some(Cadence(VORTEX_CADENCE)),
            animation: Some(Animation {
                frame: 0,
                frames: VORTEX_FRAMES,
            }),
            ..Self::thing(
                Kind::Vortex,
                Label::new("Vortex", "Where does it lead?"),
                Capabilities::SOLID,
            )
        }
    }

    pub fn decoration(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::thing(
            Kind::Decoration,
            Label::new(name, description),
            Capabilities::SOLID,
        )
    }

    pub fn rat(name: impl Into<String>, description: impl Into<String>) -> Self {
        let caps = Capabilities {
            flammable: true,
            takable: true,
            ..Capabilities::SOLID
        };
        Self {
            restlessness: Some(Restlessness(RAT_RESTLESSNESS)),
            cadence: Some(Cadence(RAT_CADENCE)),
            ..Self::thing(Kind::Rat, Label::new(name, description), caps)
        }
    }

    /// A llama leashed to `anchor`, usually its spawn cell.
    pub fn llama(facing: Direction, intelligence: Intelligence, health: i32, anchor: GridPos) -> Self {
        let label = Label::new("Llama", format!("a {} llama", intelligence.adjective()));
        Self {
            facing: Some(facing),
            health: Some(Health::full(health)),
            fireball: Some(FireballStats {
                range: LLAMA_SPIT_RANGE,
                speed: LLAMA_SPIT_SPEED,
                power: LLAMA_SPIT_POWER,
            }),
            wander: Some(Wander {
                anchor,
                radius: LLAMA_WANDER_RADIUS,
            }),
            brain: Some(Brain { intelligence }),
            cadence: Some(Cadence(LLAMA_CADENCE)),
            ..Self::thing(Kind::Llama, label, Capabilities::SOLID)
        }
    }

    /// The player. Driven by input polling rather than its own cadence.
    pub fn player(name: impl Into<String>, facing: Direction, health: i32, fireball: FireballStats) -> Self {
        Self {
            facing: Some(facing),
            health: Some(Health::full(health)),
            fireball: Some(fireball),
            inventory: Some(Inventory::default()),
            ..Self::thing(Kind::Player, Label::new(name, "Yours truly"), Capabilities::SOLID)
        }
    }

    pub fn fireball(facing: Direction, stats: FireballStats) -> Self {
        Self::projectile(Kind::Fireball, "Fireball", facing, stats)
    }

    pub fn spitball(facing: Direction, stats: FireballStats) -> Self {
        Self::projectile(Kind::Spitball, "Spitball", facing, stats)
    }

    fn projectile(kind: Kind, name: &str, facing: Direction, stats: FireballStats) -> Self {
        let caps = Capabilities {
            walkable: true,
            ..Capabilities::SOLID
        };
        Self {
            facing: Some(facing),
            projectile: Some(ProjectileState {
                remaining: stats.range,
                power: stats.power,
            }),
            cadence: Some(Cadence(stats.speed.max(MIN_FIREBALL_SPEED))),
            ..Self::thing(kind, Label::new(name, format!("a flying {}", name.to_lowercase())), caps)
        }
    }

    /// Turn the blueprint into an ECS component bundle.
    pub fn into_builder(self) -> EntityBuilder {
        let mut builder = EntityBuilder::new();
        builder.add(self.kind).add(self.label).add(self.caps);
        if let Some(direction) = self.facing {
            builder.add(Facing(direction));
        }
        if let Some(c) = self.health {
            builder.add(c);
        }
        if let Some(c) = self.fireball {
            builder.add(c);
        }
        if let Some(c) = self.wander {
            builder.add(c);
        }
        if let Some(c) = self.brain {
            builder.add(c);
        }
        if let Some(c) = self.restlessness {
            builder.add(c);
        }
        if let Some(c) = self.projectile {
            builder.add(c);
        }
        if let Some(c) = self.inventory {
            builder.add(c);
        }
        if let Some(c) = self.cadence {
            builder.add(c);
        }
        if let Some(c) = self.animation {
            builder.add(c);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llama_defaults() {
        let bp = Blueprint::llama(Direction::Up, Intelligence::Aggressive, 3, GridPos::new(4, 4));
        assert_eq!(bp.label.description, "a smart llama");
        assert_eq!(bp.fireball.map(|f| f.range), Some(LLAMA_SPIT_RANGE));
        assert_eq!(bp.cadence, Some(Cadence(LLAMA_CADENCE)));
        assert!(!bp.caps.walkable && !bp.caps.flammable);
    }

    #[test]
    fn test_projectiles_are_walkable_and_scheduled_by_speed() {
        let stats = FireballStats {
            range: 3,
            speed: 10,
            power: 1,
        };
        let bp = Blueprint::fireball(Direction::Left, stats);
        assert!(bp.caps.walkable);
        assert_eq!(bp.cadence, Some(Cadence(10)));
        assert_eq!(
            bp.projectile,
            Some(ProjectileState {
                remaining: 3,
                power: 1
            })
        );
    }

    #[test]
    fn test_inert_things_have_no_cadence() {
        for bp in [
            Blueprint::door("a door"),
            Blueprint::barricade_door("a barricade"),
            Blueprint::pizza("a slice"),
            Blueprint::decoration("Felix", "a cat"),
        ] {
            assert_eq!(bp.cadence, None, "{:?}", bp.kind);
        }
        assert!(Blueprint::door("d").caps.flammable);
        assert!(Blueprint::rat("Rat", "r").caps.takable);
    }
}
