use crate::event::{EventKind, SysEvent};
use crate::queue::EventQueue;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Trait for reacting to events of any kind.
pub trait EventListener: Send {
    fn on_event(&mut self, event: &SysEvent);
}

/// Predicate used by [`EventFilter::Predicate`]; may capture state.
pub type EventPredicate = Box<dyn Fn(&SysEvent) -> bool + Send + Sync>;

/// Determines which events a listener wants to receive.
pub enum EventFilter {
    All,
    /// Keyboard, text, mouse and joystick events.
    InputOnly,
    Kind(EventKind),
    /// Events of `kind` that also satisfy the predicate.
    KindWhere(EventKind, EventPredicate),
    Predicate(EventPredicate),
}

impl EventFilter {
    /// Boxes `f` into [`EventFilter::Predicate`].
    pub fn predicate(f: impl Fn(&SysEvent) -> bool + Send + Sync + 'static) -> Self {
        EventFilter::Predicate(Box::new(f))
    }

    /// Boxes `f` into [`EventFilter::KindWhere`]. `f` only sees events of `kind`.
    pub fn kind_where(
        kind: EventKind,
        f: impl Fn(&SysEvent) -> bool + Send + Sync + 'static,
    ) -> Self {
        EventFilter::KindWhere(kind, Box::new(f))
    }

    pub fn matches(&self, event: &SysEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::InputOnly => event.kind().is_input(),
            EventFilter::Kind(kind) => event.kind() == *kind,
            EventFilter::KindWhere(kind, f) => event.kind() == *kind && f(event),
            EventFilter::Predicate(f) => f(event),
        }
    }
}

impl fmt::Debug for EventFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventFilter::All => f.write_str("All"),
            EventFilter::InputOnly => f.write_str("InputOnly"),
            EventFilter::Kind(kind) => f.debug_tuple("Kind").field(kind).finish(),
            EventFilter::KindWhere(kind, _) => {
                f.debug_tuple("KindWhere").field(kind).field(&"<fn>").finish()
            }
            EventFilter::Predicate(_) => f.debug_tuple("Predicate").field(&"<fn>").finish(),
        }
    }
}

/// Listener with its filter and enabled flag.
struct ListenerEntry {
    listener: Box<dyn EventListener>,
    enabled: bool,
    filter: EventFilter,
}

/// Fans events out to registered listeners.
///
/// Listeners are called in registration order.
pub struct EventBus {
    next_id: u64,
    // Ids only grow, so key order is registration order.
    listeners: BTreeMap<u64, ListenerEntry>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            listeners: BTreeMap::new(),
        }
    }

    /// Registers a listener with a filter. Returns its id.
    pub fn add_listener(&mut self, listener: impl EventListener + 'static, filter: EventFilter) -> u64 {
        let id = self.next_id;
        self.listeners.insert(
            id,
            ListenerEntry {
                listener: Box::new(listener),
                enabled: true,
                filter,
            },
        );
        self.next_id += 1;
        id
    }

    /// Enables a previously registered listener.
    pub fn enable(&mut self, id: u64) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = true;
        }
    }

    /// Disables (mutes) a listener without removing it.
    pub fn disable(&mut self, id: u64) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = false;
        }
    }

    /// Unregisters a listener entirely. Returns `false` for unknown ids.
    pub fn remove_listener(&mut self, id: u64) -> bool {
        self.listeners.remove(&id).is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Emits one event to all active and matching listeners.
    fn emit(&mut self, event: &SysEvent) {
        for entry in self.listeners.values_mut() {
            if entry.enabled && entry.filter.matches(event) {
                entry.listener.on_event(event);
            }
        }
    }

    /// Emits a batch of events to matching listeners.
    pub fn emit_all(&mut self, events: &[SysEvent]) {
        for event in events {
            self.emit(event);
        }
    }

    /// Drains `queue` in order, emitting each event, then drops it.
    ///
    /// Returns the number of events dispatched.
    pub fn dispatch(&mut self, queue: &mut EventQueue) -> usize {
        let mut count = 0;
        while let Some(event) = queue.pop() {
            self.emit(&event);
            count += 1;
        }
        if count > 0 {
            debug!(count, listeners = self.listeners.len(), "dispatched events");
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{
        CharEvent, ConsoleInputEvent, FocusEvent, JoystickEvent, KeyEvent, MouseEvent,
    };
    use crate::key::Key;
    use std::sync::{Arc, Mutex};

    /// Records the kinds it sees into a shared log.
    struct Recorder {
        tag: &'static str,
        seen: Arc<Mutex<Vec<(&'static str, EventKind)>>>,
    }

    impl EventListener for Recorder {
        fn on_event(&mut self, event: &SysEvent) {
            self.seen.lock().unwrap().push((self.tag, event.kind()));
        }
    }

    fn recorder(tag: &'static str, seen: &Arc<Mutex<Vec<(&'static str, EventKind)>>>) -> Recorder {
        Recorder {
            tag,
            seen: Arc::clone(seen),
        }
    }

    fn mixed_events() -> Vec<SysEvent> {
        vec![
            KeyEvent::new(Key::Char('w'), true, 5).into(),
            ConsoleInputEvent::new("status").into(),
            MouseEvent::new(4, -4).into(),
            FocusEvent::new(true).into(),
        ]
    }

    #[test]
    fn filters_select_events() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.add_listener(recorder("all", &seen), EventFilter::All);
        bus.add_listener(recorder("input", &seen), EventFilter::InputOnly);
        bus.add_listener(recorder("focus", &seen), EventFilter::Kind(EventKind::Focus));

        bus.emit_all(&mixed_events());

        let seen = seen.lock().unwrap();
        let of = |tag: &str| -> Vec<EventKind> {
            seen.iter().filter(|(t, _)| *t == tag).map(|(_, k)| *k).collect()
        };
        assert_eq!(
            of("all"),
            vec![EventKind::Key, EventKind::Console, EventKind::Mouse, EventKind::Focus]
        );
        assert_eq!(of("input"), vec![EventKind::Key, EventKind::Mouse]);
        assert_eq!(of("focus"), vec![EventKind::Focus]);
    }

    #[test]
    fn predicate_filter_captures_state() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        let wanted = Key::Char('a');
        bus.add_listener(
            recorder("a-down", &seen),
            EventFilter::predicate(move |event| {
                matches!(event, SysEvent::Key(k) if k.down() && k.key() == wanted)
            }),
        );

        bus.emit_all(&[
            KeyEvent::new(Key::Char('a'), true, 0).into(),
            KeyEvent::new(Key::Char('a'), false, 1).into(),
            KeyEvent::new(Key::Char('b'), true, 2).into(),
            CharEvent::new('a' as u32).into(),
        ]);

        assert_eq!(*seen.lock().unwrap(), vec![("a-down", EventKind::Key)]);
    }

    #[test]
    fn kind_where_checks_kind_before_predicate() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        let deadzone = 8000;
        bus.add_listener(
            recorder("stick", &seen),
            // The kind is checked first, so the cast cannot fail.
            EventFilter::kind_where(EventKind::JoystickAxis, move |event| {
                event.cast::<JoystickEvent>().value().abs() > deadzone
            }),
        );

        bus.emit_all(&[
            JoystickEvent::new(0, 100).into(),
            MouseEvent::new(50_000, 0).into(),
            JoystickEvent::new(1, -20_000).into(),
        ]);

        assert_eq!(*seen.lock().unwrap(), vec![("stick", EventKind::JoystickAxis)]);
    }

    #[test]
    fn filter_debug_hides_closures() {
        assert_eq!(format!("{:?}", EventFilter::Kind(EventKind::Focus)), "Kind(Focus)");
        assert_eq!(
            format!("{:?}", EventFilter::predicate(|_| true)),
            "Predicate(\"<fn>\")"
        );
    }

    #[test]
    fn disabled_and_removed_listeners_are_skipped() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        let a = bus.add_listener(recorder("a", &seen), EventFilter::All);
        let b = bus.add_listener(recorder("b", &seen), EventFilter::All);

        bus.disable(a);
        bus.emit_all(&[FocusEvent::new(true).into()]);
        bus.enable(a);
        assert!(bus.remove_listener(b));
        assert!(!bus.remove_listener(b));
        bus.emit_all(&[FocusEvent::new(false).into()]);

        let seen = seen.lock().unwrap();
        assert_eq!(*seen, vec![("b", EventKind::Focus), ("a", EventKind::Focus)]);
        assert_eq!(bus.listener_count(), 1);
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        for tag in ["first", "second", "third"] {
            bus.add_listener(recorder(tag, &seen), EventFilter::All);
        }
        bus.emit_all(&[MouseEvent::new(0, 1).into()]);

        let tags: Vec<&str> = seen.lock().unwrap().iter().map(|(t, _)| *t).collect();
        assert_eq!(tags, vec!["first", "second", "third"]);
    }

    #[test]
    fn dispatch_drains_queue_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.add_listener(recorder("all", &seen), EventFilter::All);

        let mut queue = EventQueue::new();
        for event in mixed_events() {
            queue.push(event);
        }

        assert_eq!(bus.dispatch(&mut queue), 4);
        assert!(queue.is_empty());
        assert_eq!(bus.dispatch(&mut queue), 0);

        let kinds: Vec<EventKind> = seen.lock().unwrap().iter().map(|(_, k)| *k).collect();
        assert_eq!(
            kinds,
            vec![EventKind::Key, EventKind::Console, EventKind::Mouse, EventKind::Focus]
        );
    }
}
