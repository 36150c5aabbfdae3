//! Logging render collaborator.
//!
//! Stands in for a sprite renderer: messages and status changes go to
//! the info log, movement and animation noise to debug.

use pizzaquest_core::events::RenderEvent;
use pizzaquest_core::state::SimSnapshot;

/// Counts what it has shown so the driver can summarize a session.
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub events_seen: u64,
    pub messages_shown: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, snapshot: &SimSnapshot) {
        for event in &snapshot.render_events {
            self.events_seen += 1;
            match event {
                RenderEvent::Message { text } => {
                    self.messages_shown += 1;
                    log::info!("{text}");
                }
                RenderEvent::HealthChanged { current, max } => {
                    log::info!("health {current}/{max}");
                }
                RenderEvent::InventoryChanged { items } => {
                    log::info!("inventory: {}", items.join(", "));
                }
                RenderEvent::Burnt { entity } => {
                    log::info!("entity {entity} burnt to ashes");
                }
                other => log::debug!("[t={}] {other:?}", snapshot.time.tick),
            }
        }
    }
}
