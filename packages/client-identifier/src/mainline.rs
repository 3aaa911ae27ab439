//! Peer IDs like `M4-3-6--............` or `M7-10-1--...........`.
use torrust_tracker_primitives::peer;

use crate::{Client, Family};

const MAINLINE_NAME: &str = "BitTorrent";
const PREFIX: u8 = b'M';
const SEPARATOR: u8 = b'-';

pub(crate) fn parse(peer_id: &peer::Id) -> Option<Client> {
    let bytes = peer_id.bytes();

    if bytes[0] != PREFIX {
        return None;
    }

    let mut parts: Vec<&[u8]> = Vec::with_capacity(3);
    let mut rest = &bytes[1..];

    // major, minor and patch numbers, each one closed by a separator
    for _ in 0..3 {
        let end = rest.iter().position(|byte| *byte == SEPARATOR)?;
        let part = &rest[..end];

        if part.is_empty() || part.len() > 2 || !part.iter().all(u8::is_ascii_digit) {
            return None;
        }

        parts.push(part);
        rest = &rest[end + 1..];
    }

    // the version is closed by a double separator
    if rest.first() != Some(&SEPARATOR) {
        return None;
    }

    let version = parts
        .iter()
        .map(|part| String::from_utf8_lossy(part))
        .collect::<Vec<_>>()
        .join(".");

    Some(Client {
        family: Family::Mainline,
        name: MAINLINE_NAME,
        version,
    })
}
