use derive_more::Display;

/// Announce events. Described on  the
/// [BEP 3. The `BitTorrent` Protocol Specification](https://www.bittorrent.org/beps/bep_0003.html)
///
/// Only [`AnnounceEvent::Stopped`] removes the peer from the swarm. Any other
/// event inserts or refreshes it.
#[derive(Hash, Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum AnnounceEvent {
    /// The peer has started downloading the torrent.
    #[display("started")]
    Started,
    /// The peer has ceased downloading the torrent.
    #[display("stopped")]
    Stopped,
    /// The peer has completed downloading the torrent.
    #[display("completed")]
    Completed,
    /// This is one of the announcements done at regular intervals.
    #[default]
    #[display("")]
    None,
}

impl AnnounceEvent {
    /// Whether the event takes the peer out of the swarm.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        matches!(self, AnnounceEvent::Stopped)
    }
}
