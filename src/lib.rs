//! sysevents — typed system and input events for an engine's frame loop.
//!
//! The platform layer builds concrete events ([`KeyEvent`], [`PacketEvent`], …),
//! turns them into the generic [`SysEvent`] handle and pushes them into an
//! [`EventQueue`]. Each frame an [`EventBus`] drains the queue and hands the
//! events to listeners, which match on the variant (or use the checked
//! [`SysEvent::cast`]) to read the payload.
//!
//! ```
//! use sysevents::{CharEvent, EventQueue, SysEvent};
//!
//! let mut queue = EventQueue::new();
//! queue.push(CharEvent::new('x' as u32));
//!
//! while let Some(event) = queue.pop() {
//!     if let SysEvent::Char(c) = &event {
//!         assert_eq!(c.as_char(), Some('x'));
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod eventbus;
pub mod key;
pub mod logger;
pub mod net;
pub mod queue;

pub use config::*;
pub use error::*;
pub use event::*;
pub use eventbus::*;
pub use key::Key;
pub use logger::EventLogger;
pub use net::NetAddr;
pub use queue::EventQueue;
