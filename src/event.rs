//! System and input events.
//!
//! Every event the platform layer produces is one of eight concrete variants
//! ([`KeyEvent`], [`CharEvent`], [`MouseEvent`], [`MousePosEvent`],
//! [`JoystickEvent`], [`ConsoleInputEvent`], [`PacketEvent`], [`FocusEvent`]).
//! They travel through queues and listeners as a single generic handle,
//! [`SysEvent`], whose [`kind`](SysEvent::kind) is the only datum readable
//! without recovering the concrete type.
//!
//! ## Recovering the payload
//! Prefer matching on [`SysEvent`] directly. Code that only holds a handle and
//! knows (by routing) which variant it must be can use:
//! - [`SysEvent::try_cast`]: returns [`EventError::TypeMismatch`] on misrouting
//! - [`SysEvent::cast`]: panics on misrouting
//! - [`SysEvent::into_variant`]: owning recovery, hands the handle back on mismatch
//!
//! The kind of a handle is derived from the variant it wraps, so the two can
//! never disagree.
//!
//! ## Ownership
//! [`SysEvent`] is deliberately not `Clone`: a handle is moved into a queue,
//! borrowed by listeners, and dropped once. Payload fields are private and
//! read through accessors, so an event is immutable after construction.

use crate::error::EventError;
use crate::key::Key;
use crate::net::NetAddr;
use std::fmt;

/// Discriminator: one value per concrete event variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Key,
    Char,
    Mouse,
    MousePos,
    JoystickAxis,
    Console,
    Packet,
    Focus,
}

impl EventKind {
    /// All kinds, in declaration order.
    pub const ALL: [EventKind; 8] = [
        EventKind::Key,
        EventKind::Char,
        EventKind::Mouse,
        EventKind::MousePos,
        EventKind::JoystickAxis,
        EventKind::Console,
        EventKind::Packet,
        EventKind::Focus,
    ];

    /// Stable lowercase name, used in log fields.
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::Key => "key",
            EventKind::Char => "char",
            EventKind::Mouse => "mouse",
            EventKind::MousePos => "mouse_pos",
            EventKind::JoystickAxis => "joystick_axis",
            EventKind::Console => "console",
            EventKind::Packet => "packet",
            EventKind::Focus => "focus",
        }
    }

    /// `true` for kinds produced by local input devices (keyboard, text, mouse, joystick).
    pub const fn is_input(self) -> bool {
        matches!(
            self,
            EventKind::Key
                | EventKind::Char
                | EventKind::Mouse
                | EventKind::MousePos
                | EventKind::JoystickAxis
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Key press or release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    key: Key,
    down: bool,
    time: i32,
}

impl KeyEvent {
    pub fn new(key: Key, down: bool, time: i32) -> Self {
        Self { key, down, time }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    /// `true` on press, `false` on release.
    pub fn down(&self) -> bool {
        self.down
    }

    /// Platform timestamp in milliseconds.
    pub fn time(&self) -> i32 {
        self.time
    }
}

/// Text input: one Unicode code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharEvent {
    ch: u32,
}

impl CharEvent {
    pub fn new(ch: u32) -> Self {
        Self { ch }
    }

    /// Raw code point, exactly as delivered by the platform.
    pub fn ch(&self) -> u32 {
        self.ch
    }

    /// The code point as a `char`, if it is a valid Unicode scalar value.
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.ch)
    }
}

/// Relative mouse movement (raw counts).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseEvent {
    dx: i32,
    dy: i32,
}

impl MouseEvent {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn dx(&self) -> i32 {
        self.dx
    }

    pub fn dy(&self) -> i32 {
        self.dy
    }
}

/// Absolute mouse position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MousePosEvent {
    x: i32,
    y: i32,
}

impl MousePosEvent {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

/// Joystick axis motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JoystickEvent {
    axis: i32,
    value: i32,
}

impl JoystickEvent {
    pub fn new(axis: i32, value: i32) -> Self {
        Self { axis, value }
    }

    /// Device-local axis index.
    pub fn axis(&self) -> i32 {
        self.axis
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

/// A line of text typed into the terminal console.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleInputEvent {
    text: String,
}

impl ConsoleInputEvent {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Inbound network packet.
///
/// The payload is copied out of the caller's buffer at construction; the
/// event never aliases it. Bound the copy by slicing: `PacketEvent::new(adr, &buf[..len])`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PacketEvent {
    adr: NetAddr,
    data: Vec<u8>,
}

impl PacketEvent {
    pub fn new(adr: NetAddr, data: &[u8]) -> Self {
        Self {
            adr,
            data: data.to_vec(),
        }
    }

    /// Sender address.
    pub fn adr(&self) -> NetAddr {
        self.adr
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Window focus change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusEvent {
    focus: bool,
}

impl FocusEvent {
    pub fn new(focus: bool) -> Self {
        Self { focus }
    }

    /// Whether the consuming surface currently has input focus.
    pub fn focus(&self) -> bool {
        self.focus
    }
}

/// Generic event handle.
///
/// Not `Clone`: there is exactly one live handle per event.
#[derive(Debug, PartialEq, Eq)]
pub enum SysEvent {
    Key(KeyEvent),
    Char(CharEvent),
    Mouse(MouseEvent),
    MousePos(MousePosEvent),
    JoystickAxis(JoystickEvent),
    Console(ConsoleInputEvent),
    Packet(PacketEvent),
    Focus(FocusEvent),
}

/// A concrete event type that can be wrapped in, and recovered from, a [`SysEvent`].
///
/// Implemented for the eight variant structs only.
pub trait EventVariant: Sized + sealed::Sealed {
    /// The discriminator of this variant.
    const KIND: EventKind;

    /// Borrow `Self` out of a handle, or `None` if it holds another variant.
    fn from_event(event: &SysEvent) -> Option<&Self>;

    /// Take `Self` out of a handle, or give the handle back.
    fn from_event_owned(event: SysEvent) -> Result<Self, SysEvent>;

    /// Wrap into the generic handle.
    fn into_event(self) -> SysEvent;
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! event_variant {
    ($ty:ident => $kind:ident) => {
        impl sealed::Sealed for $ty {}

        impl EventVariant for $ty {
            const KIND: EventKind = EventKind::$kind;

            #[inline]
            fn from_event(event: &SysEvent) -> Option<&Self> {
                match event {
                    SysEvent::$kind(inner) => Some(inner),
                    _ => None,
                }
            }

            #[inline]
            fn from_event_owned(event: SysEvent) -> Result<Self, SysEvent> {
                match event {
                    SysEvent::$kind(inner) => Ok(inner),
                    other => Err(other),
                }
            }

            #[inline]
            fn into_event(self) -> SysEvent {
                SysEvent::$kind(self)
            }
        }

        impl From<$ty> for SysEvent {
            fn from(event: $ty) -> Self {
                SysEvent::$kind(event)
            }
        }
    };
}

event_variant!(KeyEvent => Key);
event_variant!(CharEvent => Char);
event_variant!(MouseEvent => Mouse);
event_variant!(MousePosEvent => MousePos);
event_variant!(JoystickEvent => JoystickAxis);
event_variant!(ConsoleInputEvent => Console);
event_variant!(PacketEvent => Packet);
event_variant!(FocusEvent => Focus);

impl SysEvent {
    /// The discriminator of the wrapped variant.
    pub fn kind(&self) -> EventKind {
        match self {
            SysEvent::Key(_) => EventKind::Key,
            SysEvent::Char(_) => EventKind::Char,
            SysEvent::Mouse(_) => EventKind::Mouse,
            SysEvent::MousePos(_) => EventKind::MousePos,
            SysEvent::JoystickAxis(_) => EventKind::JoystickAxis,
            SysEvent::Console(_) => EventKind::Console,
            SysEvent::Packet(_) => EventKind::Packet,
            SysEvent::Focus(_) => EventKind::Focus,
        }
    }

    /// `true` if this handle holds a `T`.
    pub fn is<T: EventVariant>(&self) -> bool {
        self.kind() == T::KIND
    }

    /// Checked downcast.
    ///
    /// ### Errors
    /// [`EventError::TypeMismatch`] if the handle holds another variant. This
    /// means the event was routed to the wrong consumer and should be treated
    /// as a bug, not retried.
    pub fn try_cast<T: EventVariant>(&self) -> Result<&T, EventError> {
        T::from_event(self).ok_or(EventError::TypeMismatch {
            expected: T::KIND,
            found: self.kind(),
        })
    }

    /// Checked downcast that treats a mismatch as a fatal programming error.
    ///
    /// # Panics
    /// If the handle does not hold a `T`.
    #[track_caller]
    pub fn cast<T: EventVariant>(&self) -> &T {
        match self.try_cast::<T>() {
            Ok(inner) => inner,
            Err(err) => panic!("{err}"),
        }
    }

    /// Consume the handle and return the concrete variant.
    ///
    /// On mismatch the untouched handle is returned in `Err`.
    pub fn into_variant<T: EventVariant>(self) -> Result<T, SysEvent> {
        T::from_event_owned(self)
    }
}

impl fmt::Display for SysEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SysEvent::Key(e) => write!(
                f,
                "key {} {} t={}",
                e.key,
                if e.down { "down" } else { "up" },
                e.time
            ),
            SysEvent::Char(e) => match e.as_char() {
                Some(c) => write!(f, "char U+{:04X} {c:?}", e.ch),
                None => write!(f, "char U+{:04X} (invalid)", e.ch),
            },
            SysEvent::Mouse(e) => write!(f, "mouse dx={} dy={}", e.dx, e.dy),
            SysEvent::MousePos(e) => write!(f, "mouse_pos x={} y={}", e.x, e.y),
            SysEvent::JoystickAxis(e) => write!(f, "joystick axis={} value={}", e.axis, e.value),
            SysEvent::Console(e) => write!(f, "console {:?}", e.text),
            // Payload bytes are never dumped.
            SysEvent::Packet(e) => write!(f, "packet from {} ({} bytes)", e.adr, e.data.len()),
            SysEvent::Focus(e) => write!(f, "focus {}", if e.focus { "gained" } else { "lost" }),
        }
    }
}
