//! Staging queue for contact notifications.
//!
//! The host's collision feed pushes events as overlaps are detected;
//! the environment drains the queue exactly once per tick, in arrival
//! order. Zero, one, or several events per tick are all valid.

use forager_core::ContactEvent;
use smallvec::SmallVec;

/// Inline capacity for the per-tick event buffer. A tick almost never
/// carries more than a wall touch plus one entity overlap.
const INLINE_EVENTS: usize = 4;

/// Drained batch of contact events, in arrival order.
pub type ContactBatch = SmallVec<[ContactEvent; INLINE_EVENTS]>;

/// FIFO buffer of contact events awaiting the next tick.
#[derive(Clone, Debug, Default)]
pub struct ContactQueue {
    events: ContactBatch,
}

impl ContactQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, preserving arrival order.
    pub fn push(&mut self, event: ContactEvent) {
        self.events.push(event);
    }

    /// Take all pending events, leaving the queue empty.
    pub fn drain(&mut self) -> ContactBatch {
        std::mem::take(&mut self.events)
    }

    /// Discard all pending events (episode boundary).
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when no events are pending.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forager_core::{ContactTag, TickId};

    fn event(tag: ContactTag, tick: u64) -> ContactEvent {
        ContactEvent {
            tag,
            tick: TickId(tick),
        }
    }

    #[test]
    fn drain_preserves_arrival_order() {
        let mut q = ContactQueue::new();
        q.push(event(ContactTag::Wall, 1));
        q.push(event(ContactTag::Food, 1));
        q.push(event(ContactTag::Poison, 1));

        let batch = q.drain();
        let tags: Vec<_> = batch.iter().map(|e| e.tag).collect();
        assert_eq!(
            tags,
            vec![ContactTag::Wall, ContactTag::Food, ContactTag::Poison]
        );
    }

    #[test]
    fn drain_empties_the_queue() {
        let mut q = ContactQueue::new();
        q.push(event(ContactTag::Food, 3));
        assert_eq!(q.len(), 1);

        let batch = q.drain();
        assert_eq!(batch.len(), 1);
        assert!(q.is_empty());
        assert!(q.drain().is_empty());
    }

    #[test]
    fn clear_discards_pending_events() {
        let mut q = ContactQueue::new();
        q.push(event(ContactTag::Wall, 2));
        q.push(event(ContactTag::Wall, 2));
        q.clear();
        assert!(q.is_empty());
    }
}
