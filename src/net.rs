//! Sender address carried by [`PacketEvent`](crate::event::PacketEvent).
//!
//! Opaque to the event layer; the network code that produced the packet
//! decides what it means.

use std::fmt;
use std::net::SocketAddr;

/// Network address of a packet source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NetAddr {
    /// In-process bot client; never touches a socket.
    Bot,
    /// In-process loopback between a local client and server.
    Loopback,
    Ip(SocketAddr),
}

impl NetAddr {
    /// The socket address, for IP sources.
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match *self {
            NetAddr::Ip(sa) => Some(sa),
            _ => None,
        }
    }

    /// `true` for in-process loopback and for IP loopback addresses.
    pub fn is_loopback(&self) -> bool {
        match self {
            NetAddr::Loopback => true,
            NetAddr::Ip(sa) => sa.ip().is_loopback(),
            NetAddr::Bot => false,
        }
    }
}

impl From<SocketAddr> for NetAddr {
    fn from(sa: SocketAddr) -> Self {
        NetAddr::Ip(sa)
    }
}

impl fmt::Display for NetAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetAddr::Bot => f.write_str("bot"),
            NetAddr::Loopback => f.write_str("loopback"),
            NetAddr::Ip(sa) => write!(f, "{sa}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn loopback_detection() {
        assert!(NetAddr::Loopback.is_loopback());
        assert!(NetAddr::from(SocketAddr::from((Ipv4Addr::LOCALHOST, 27960))).is_loopback());
        assert!(NetAddr::from(SocketAddr::from((Ipv6Addr::LOCALHOST, 27960))).is_loopback());
        assert!(!NetAddr::from(SocketAddr::from((Ipv4Addr::new(192, 168, 1, 4), 27960))).is_loopback());
        assert!(!NetAddr::Bot.is_loopback());
    }

    #[test]
    fn display_and_socket_addr() {
        let sa = SocketAddr::from((Ipv4Addr::new(10, 1, 2, 3), 27960));
        assert_eq!(NetAddr::Ip(sa).to_string(), "10.1.2.3:27960");
        assert_eq!(NetAddr::Ip(sa).socket_addr(), Some(sa));
        assert_eq!(NetAddr::Bot.socket_addr(), None);
        assert_eq!(NetAddr::Bot.to_string(), "bot");
    }
}
