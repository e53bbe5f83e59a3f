//! Feeds a handful of synthetic events through a queue and a listener bus.
//!
//! Run with `RUST_LOG=debug cargo run --example pump` to see every event.

use std::net::{Ipv4Addr, SocketAddr};

use sysevents::{
    CharEvent, ConsoleInputEvent, EventBus, EventFilter, EventKind, EventListener, EventLogger,
    EventQueue, FocusEvent, Key, KeyEvent, MouseEvent, NetAddr, PacketEvent, QueueConfig,
    SysEvent,
};
use tracing_subscriber::EnvFilter;

/// Routes console lines to a "command interpreter".
struct Console;

impl EventListener for Console {
    fn on_event(&mut self, event: &SysEvent) {
        // Registered with `EventFilter::Kind(Console)`, so the cast cannot fail.
        let line = event.cast::<ConsoleInputEvent>();
        println!("> {}", line.text());
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => QueueConfig::load(&path).unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        }),
        None => QueueConfig::default(),
    };

    let mut queue = EventQueue::with_config(config);
    let mut bus = EventBus::new();
    bus.add_listener(EventLogger::new(), EventFilter::All);
    bus.add_listener(Console, EventFilter::Kind(EventKind::Console));

    let server = NetAddr::from(SocketAddr::from((Ipv4Addr::new(127, 0, 0, 1), 27960)));
    let datagram = [0xffu8, 0xff, 0xff, 0xff, b'p', b'i', b'n', b'g'];

    queue.push(FocusEvent::new(true));
    queue.push(KeyEvent::new(Key::from_scancode(0x1E, false), true, 16));
    queue.push(CharEvent::new('a' as u32));
    queue.push(KeyEvent::new(Key::from_scancode(0x1E, false), false, 48));
    queue.push(MouseEvent::new(12, -3));
    queue.push(ConsoleInputEvent::new("connect localhost"));
    queue.push(PacketEvent::new(server, &datagram));

    let n = bus.dispatch(&mut queue);
    println!("dispatched {n} events, {} dropped", queue.dropped());
}
