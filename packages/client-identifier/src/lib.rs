//! Identification of the `BitTorrent` client software behind a peer ID.
//!
//! Most clients encode their name and version in the first bytes of the
//! 20-byte peer ID. Two conventions are recognized:
//!
//! - Azureus style: `-XXVVVV-` followed by random bytes, where `XX` is a
//!   two-character client code and `VVVV` a version token. For example
//!   `-WW0091-4ea5886ce160` is `WebTorrent 0.91`.
//! - Mainline style: `M` followed by the dash separated version digits and a
//!   double dash. For example `M7-1-0--` is `BitTorrent 7.1.0`.
//!
//! The client codes and the rule used to read the version token are listed
//! in the [`table`] module.
//!
//! Any other peer ID is classified as [`Family::Unknown`]. Its version is a
//! bucket key made of the first 8 bytes of the peer ID, so unknown clients are
//! still grouped by their common prefix. Printable ASCII bytes are kept and
//! every other byte is escaped (`\xff`, `\n`), so the key is safe to display
//! and two different prefixes never share a bucket.
//!
//! ```rust
//! use torrust_tracker_client_identifier::identify;
//! use torrust_tracker_primitives::peer;
//!
//! let client = identify(&peer::Id(*b"-WW0091-4ea5886ce160"));
//!
//! assert_eq!(client.name, "WebTorrent");
//! assert_eq!(client.version, "0.91");
//! ```
//!
//! Identification never fails and has no side effects.
use derive_more::Display;
use torrust_tracker_primitives::peer;

mod azureus;
mod mainline;
pub mod table;
pub mod version;

/// Name used for every peer ID that could not be identified.
pub const UNKNOWN_CLIENT_NAME: &str = "unknown";

/// Number of leading bytes of the peer ID used as the version bucket of
/// unknown clients.
pub const UNKNOWN_BUCKET_LEN: usize = 8;

/// The convention the client used to encode the peer ID.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
pub enum Family {
    #[display("azureus")]
    Azureus,
    #[display("mainline")]
    Mainline,
    #[display("unknown")]
    Unknown,
}

/// The client software behind a peer ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{name} {version}")]
pub struct Client {
    pub family: Family,
    pub name: &'static str,
    /// The client version, or the bucket key for unknown clients.
    pub version: String,
}

impl Client {
    #[must_use]
    pub fn unknown(peer_id: &peer::Id) -> Self {
        Self {
            family: Family::Unknown,
            name: UNKNOWN_CLIENT_NAME,
            version: unknown_bucket(peer_id),
        }
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        self.family != Family::Unknown
    }

    /// The `(name, version)` pair the statistics are grouped by.
    #[must_use]
    pub fn key(&self) -> (&str, &str) {
        (self.name, &self.version)
    }
}

/// Identifies the client that generated the peer ID.
#[must_use]
pub fn identify(peer_id: &peer::Id) -> Client {
    azureus::parse(peer_id)
        .or_else(|| mainline::parse(peer_id))
        .unwrap_or_else(|| Client::unknown(peer_id))
}

fn unknown_bucket(peer_id: &peer::Id) -> String {
    display_safe(&peer_id.bytes()[..UNKNOWN_BUCKET_LEN])
}

/// Printable ASCII is kept as it is. Any other byte, and the escape
/// characters themselves, are escaped, so the rendering has no control
/// characters and different bytes never render the same.
pub(crate) fn display_safe(bytes: &[u8]) -> String {
    bytes
        .iter()
        .flat_map(|byte| std::ascii::escape_default(*byte))
        .map(char::from)
        .collect()
}
