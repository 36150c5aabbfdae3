//! Tick-ordered event queue.
//!
//! Entries carry a countdown in ticks and stay sorted ascending by it,
//! ties in insertion order. A tick fires every entry at countdown 0,
//! then decrements the rest. Entries enqueued with delay 0 while a tick
//! is draining fire in that same tick, after the ones already due.
//!
//! There is no cancellation: events name an entity, and handlers check
//! it is still materialized before acting.

use std::collections::VecDeque;

use hecs::Entity;

/// Events the simulation schedules for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    /// Consume at most one queued player command.
    PollInput,
    /// Let an entity take its turn (AI, projectile advance, animation).
    Act(Entity),
}

/// Sorted countdown queue, generic over the event payload.
#[derive(Debug, Clone)]
pub struct EventQueue<T> {
    entries: VecDeque<(u32, T)>,
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert before the first entry with a strictly greater countdown.
    pub fn enqueue(&mut self, delay: u32, event: T) {
        let index = self.entries.partition_point(|(countdown, _)| *countdown <= delay);
        self.entries.insert(index, (delay, event));
    }

    /// Pop the front entry if it is due this tick.
    pub fn pop_ready(&mut self) -> Option<T> {
        match self.entries.front() {
            Some((0, _)) => self.entries.pop_front().map(|(_, event)| event),
            _ => None,
        }
    }

    /// End of tick: every remaining entry moves one tick closer.
    pub fn finish_tick(&mut self) {
        for (countdown, _) in self.entries.iter_mut() {
            *countdown = countdown.saturating_sub(1);
        }
    }

    /// Run one whole tick. The handler gets the queue back so it can
    /// schedule follow-ups.
    pub fn tick(&mut self, mut handler: impl FnMut(&mut Self, T)) {
        while let Some(event) = self.pop_ready() {
            handler(self, event);
        }
        self.finish_tick();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(countdown, event)` pairs in firing order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.entries.iter().map(|(countdown, event)| (*countdown, event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_sorted<T>(queue: &EventQueue<T>) -> bool {
        let countdowns: Vec<u32> = queue.iter().map(|(c, _)| c).collect();
        countdowns.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_shorter_delay_fires_first() {
        let mut queue = EventQueue::new();
        queue.enqueue(3, 'A');
        queue.enqueue(1, 'B');
        assert!(is_sorted(&queue));

        let mut fired = Vec::new();
        for tick in 0..=3 {
            queue.tick(|_, event| fired.push((tick, event)));
        }
        assert_eq!(fired, vec![(1, 'B'), (3, 'A')]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ties_fire_in_insertion_order() {
        let mut queue = EventQueue::new();
        for event in ["first", "second", "third"] {
            queue.enqueue(2, event);
        }
        queue.enqueue(1, "early");

        let mut fired = Vec::new();
        for _ in 0..3 {
            queue.tick(|_, event| fired.push(event));
        }
        assert_eq!(fired, vec!["early", "first", "second", "third"]);
    }

    #[test]
    fn test_zero_delay_during_drain_fires_same_tick() {
        let mut queue = EventQueue::new();
        queue.enqueue(0, 1);
        queue.enqueue(0, 2);
        queue.enqueue(1, 9);

        let mut fired = Vec::new();
        queue.tick(|q, event| {
            fired.push(event);
            if event == 1 {
                q.enqueue(0, 3);
            }
        });
        // 3 runs after the already-due 2, and before anything due later.
        assert_eq!(fired, vec![1, 2, 3]);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_reschedule_from_handler() {
        let mut queue = EventQueue::new();
        queue.enqueue(0, ());
        let mut count = 0;
        for _ in 0..10 {
            queue.tick(|q, ()| {
                count += 1;
                q.enqueue(4, ());
            });
        }
        // A delay of 4 set during tick 0 fires at tick 4: ticks 0, 4, 8.
        assert_eq!(count, 3);
    }

    #[test]
    fn test_countdowns_decrement_each_tick() {
        let mut queue = EventQueue::new();
        queue.enqueue(5, SimEvent::PollInput);
        queue.tick(|_, _| {});
        queue.tick(|_, _| {});
        assert_eq!(queue.iter().next().map(|(c, _)| c), Some(3));
    }

    proptest! {
        #[test]
        fn prop_queue_sorted_and_stable(delays in proptest::collection::vec(0u32..20, 0..40)) {
            let mut queue = EventQueue::new();
            for (i, delay) in delays.iter().enumerate() {
                queue.enqueue(*delay, i);
                prop_assert!(is_sorted(&queue));
            }

            // Equal countdowns keep insertion order.
            let order: Vec<(u32, usize)> = queue.iter().map(|(c, e)| (c, *e)).collect();
            for pair in order.windows(2) {
                if pair[0].0 == pair[1].0 {
                    prop_assert!(pair[0].1 < pair[1].1);
                }
            }

            // Each event fires exactly at its delay.
            let mut fired = Vec::new();
            for tick in 0..20u32 {
                queue.tick(|_, event| fired.push((tick, event)));
            }
            prop_assert_eq!(fired.len(), delays.len());
            for (tick, event) in fired {
                prop_assert_eq!(tick, delays[event]);
            }
        }
    }
}
