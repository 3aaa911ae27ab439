//! Peer struct stored in the swarms of the repository.
//!
//! A sample peer:
//!
//! ```rust,no_run
//! use std::net::{IpAddr, Ipv4Addr, SocketAddr};
//!
//! use torrust_tracker_primitives::announce_event::AnnounceEvent;
//! use torrust_tracker_primitives::peer::{self, NumberOfBytes};
//! use torrust_tracker_primitives::DurationSinceAppStart;
//!
//! peer::Peer {
//!     peer_id: peer::Id(*b"-qB00000000000000000"),
//!     peer_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::new(126, 0, 0, 1)), 8080),
//!     updated: DurationSinceAppStart::from_secs(60),
//!     left: Some(NumberOfBytes(0)),
//!     event: AnnounceEvent::Started,
//! };
//! ```
use std::net::SocketAddr;
use std::panic::Location;

use thiserror::Error;

use crate::announce_event::AnnounceEvent;
use crate::{DurationSinceAppStart, IPVersion};

pub const PEER_ID_BYTES_LEN: usize = 20;

/// Number of bytes a peer still has to download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NumberOfBytes(pub u64);

/// Peer record kept by a swarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Peer {
    /// ID used by the downloader peer
    pub peer_id: Id,
    /// The IP and port this peer is listening on
    pub peer_addr: SocketAddr,
    /// The last time the tracker received an announce request from this peer.
    pub updated: DurationSinceAppStart,
    /// The number of bytes this peer still has to download, when the client
    /// reported it.
    pub left: Option<NumberOfBytes>,
    /// The event of the last announce request.
    pub event: AnnounceEvent,
}

impl Peer {
    /// A peer is a seeder only when it reported nothing left to download.
    /// An unknown `left` counts as a leecher.
    #[must_use]
    pub fn is_seeder(&self) -> bool {
        self.left == Some(NumberOfBytes(0))
    }

    /// The IP version used by the peer: IPV4 or IPV6
    #[must_use]
    pub fn ip_version(&self) -> IPVersion {
        if self.peer_addr.is_ipv4() {
            return IPVersion::IPv4;
        }
        IPVersion::IPv6
    }
}

/// Error returned when trying to convert an invalid peer id from another type.
///
/// Usually because the source format does not contain 20 bytes.
#[derive(Error, Debug)]
pub enum IdConversionError {
    #[error("not enough bytes for peer id: {message} {location}")]
    NotEnoughBytes {
        location: &'static Location<'static>,
        message: String,
    },
    #[error("too many bytes for peer id: {message} {location}")]
    TooManyBytes {
        location: &'static Location<'static>,
        message: String,
    },
}

/// Peer ID. Unique within one swarm.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct Id(pub [u8; PEER_ID_BYTES_LEN]);

impl From<[u8; PEER_ID_BYTES_LEN]> for Id {
    fn from(bytes: [u8; PEER_ID_BYTES_LEN]) -> Self {
        Id(bytes)
    }
}

impl From<i32> for Id {
    fn from(number: i32) -> Self {
        let mut bytes = [0u8; PEER_ID_BYTES_LEN];
        bytes[PEER_ID_BYTES_LEN - 4..].copy_from_slice(&number.to_le_bytes());
        Id(bytes)
    }
}

impl TryFrom<Vec<u8>> for Id {
    type Error = IdConversionError;

    #[track_caller]
    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        if bytes.len() < PEER_ID_BYTES_LEN {
            return Err(IdConversionError::NotEnoughBytes {
                location: Location::caller(),
                message: format! {"got {} bytes, expected {}", bytes.len(), PEER_ID_BYTES_LEN},
            });
        }
        if bytes.len() > PEER_ID_BYTES_LEN {
            return Err(IdConversionError::TooManyBytes {
                location: Location::caller(),
                message: format! {"got {} bytes, expected {}", bytes.len(), PEER_ID_BYTES_LEN},
            });
        }

        let mut data = [0u8; PEER_ID_BYTES_LEN];
        data.copy_from_slice(&bytes);
        Ok(Self(data))
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_hex_string() {
            Some(hex) => write!(f, "{hex}"),
            None => write!(f, ""),
        }
    }
}

impl Id {
    /// Converts to hex string.
    ///
    /// For the `PeerId` `-qB00000000000000000` it returns `0x2d71423030303030303030303030303030303030`
    ///
    /// Returns `None` if the hex conversion fails.
    #[must_use]
    pub fn to_hex_string(&self) -> Option<String> {
        let mut tmp = [0u8; PEER_ID_BYTES_LEN * 2];

        let hex = binascii::bin2hex(&self.0, &mut tmp).ok()?;

        std::str::from_utf8(hex).ok().map(|hex| format!("0x{hex}"))
    }

    /// The raw bytes of the identifier.
    #[must_use]
    pub fn bytes(&self) -> &[u8; PEER_ID_BYTES_LEN] {
        &self.0
    }
}

pub mod fixture {
    use std::net::{IpAddr, Ipv4Addr, SocketAddr};

    use super::{Id, NumberOfBytes, Peer};
    use crate::announce_event::AnnounceEvent;
    use crate::DurationSinceAppStart;

    #[derive(PartialEq, Debug, Default)]
    pub struct PeerBuilder {
        peer: Peer,
    }

    impl PeerBuilder {
        #[allow(dead_code)]
        #[must_use]
        pub fn seeder() -> Self {
            let peer = Peer {
                peer_id: Id(*b"-qB00000000000000001"),
                peer_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 8080),
                updated: DurationSinceAppStart::ZERO,
                left: Some(NumberOfBytes(0)),
                event: AnnounceEvent::Completed,
            };

            Self { peer }
        }

        #[allow(dead_code)]
        #[must_use]
        pub fn leecher() -> Self {
            let peer = Peer {
                peer_id: Id(*b"-qB00000000000000002"),
                peer_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 2)), 8080),
                updated: DurationSinceAppStart::ZERO,
                left: Some(NumberOfBytes(10)),
                event: AnnounceEvent::Started,
            };

            Self { peer }
        }

        #[allow(dead_code)]
        #[must_use]
        pub fn with_peer_id(mut self, peer_id: &Id) -> Self {
            self.peer.peer_id = *peer_id;
            self
        }

        #[allow(dead_code)]
        #[must_use]
        pub fn with_peer_addr(mut self, peer_addr: &SocketAddr) -> Self {
            self.peer.peer_addr = *peer_addr;
            self
        }

        #[allow(dead_code)]
        #[must_use]
        pub fn with_bytes_pending_to_download(mut self, left: u64) -> Self {
            self.peer.left = Some(NumberOfBytes(left));
            self
        }

        #[allow(dead_code)]
        #[must_use]
        pub fn with_no_bytes_pending_to_download(mut self) -> Self {
            self.peer.left = Some(NumberOfBytes(0));
            self
        }

        #[allow(dead_code)]
        #[must_use]
        pub fn with_unknown_bytes_pending_to_download(mut self) -> Self {
            self.peer.left = None;
            self
        }

        #[allow(dead_code)]
        #[must_use]
        pub fn with_event(mut self, event: AnnounceEvent) -> Self {
            self.peer.event = event;
            self
        }

        #[allow(dead_code)]
        #[must_use]
        pub fn last_updated_on(mut self, updated: DurationSinceAppStart) -> Self {
            self.peer.updated = updated;
            self
        }

        #[allow(dead_code)]
        #[must_use]
        pub fn build(self) -> Peer {
            self.into()
        }

        #[allow(dead_code)]
        #[must_use]
        pub fn into(self) -> Peer {
            self.peer
        }
    }

    impl Default for Peer {
        fn default() -> Self {
            Self {
                peer_id: Id::default(),
                peer_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 8080),
                updated: DurationSinceAppStart::ZERO,
                left: Some(NumberOfBytes(0)),
                event: AnnounceEvent::Started,
            }
        }
    }

    impl Default for Id {
        fn default() -> Self {
            Self(*b"-qB00000000000000000")
        }
    }
}
