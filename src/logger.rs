use crate::event::SysEvent;
use crate::eventbus::EventListener;
use tracing::debug;

/// A listener that logs every event it receives at `debug` level.
#[derive(Debug, Default)]
pub struct EventLogger;

impl EventLogger {
    pub fn new() -> Self {
        EventLogger
    }
}

impl EventListener for EventLogger {
    fn on_event(&mut self, event: &SysEvent) {
        debug!(kind = %event.kind(), "{event}");
    }
}
