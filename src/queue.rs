//! Bounded FIFO of owned event handles.
//!
//! The platform layer pushes events as they arrive; the frame loop drains
//! them (usually through [`EventBus::dispatch`](crate::eventbus::EventBus::dispatch)).
//! Pushing moves the handle into the queue, popping moves it out, so each
//! event has exactly one owner at any time.
//!
//! When the queue is full the configured [`OverflowPolicy`] decides which
//! event is discarded. Discards are counted and logged at `warn` level.

use crate::config::{OverflowPolicy, QueueConfig, DEFAULT_CAPACITY};
use crate::event::SysEvent;
use std::collections::VecDeque;
use tracing::{trace, warn};

pub struct EventQueue {
    events: VecDeque<SysEvent>,
    capacity: usize,
    overflow: OverflowPolicy,
    dropped: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    /// Queue with [`QueueConfig::default`] settings.
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    /// A zero capacity is raised to one. Storage grows on demand; at most
    /// [`DEFAULT_CAPACITY`] slots are reserved up front.
    pub fn with_config(config: QueueConfig) -> Self {
        let capacity = config.capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
            overflow: config.overflow,
            dropped: 0,
        }
    }

    /// Enqueue an event.
    ///
    /// Returns `false` if the incoming event was discarded (full queue with
    /// [`OverflowPolicy::DropNewest`]).
    pub fn push(&mut self, event: impl Into<SysEvent>) -> bool {
        let event = event.into();

        if self.events.len() >= self.capacity {
            self.dropped += 1;
            match self.overflow {
                OverflowPolicy::DropOldest => {
                    if let Some(old) = self.events.pop_front() {
                        warn!(
                            kind = %old.kind(),
                            capacity = self.capacity,
                            dropped = self.dropped,
                            "event queue overflow, dropping oldest"
                        );
                    }
                }
                OverflowPolicy::DropNewest => {
                    warn!(
                        kind = %event.kind(),
                        capacity = self.capacity,
                        dropped = self.dropped,
                        "event queue overflow, dropping newest"
                    );
                    return false;
                }
            }
        }

        trace!(kind = %event.kind(), "queued");
        self.events.push_back(event);
        true
    }

    /// Dequeue the oldest event.
    pub fn pop(&mut self) -> Option<SysEvent> {
        self.events.pop_front()
    }

    /// Remove and return all pending events, oldest first.
    pub fn drain(&mut self) -> Vec<SysEvent> {
        self.events.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of events discarded by overflow since creation.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Drop all pending events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
