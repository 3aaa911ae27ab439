//! Peer IDs like `-XXVVVV-............`.
use torrust_tracker_primitives::peer;

use crate::{table, version, Client, Family};

const DELIMITER: u8 = b'-';

pub(crate) fn parse(peer_id: &peer::Id) -> Option<Client> {
    let bytes = peer_id.bytes();

    if bytes[0] != DELIMITER || bytes[7] != DELIMITER {
        return None;
    }

    let entry = table::lookup(&[bytes[1], bytes[2]])?;

    let token = [bytes[3], bytes[4], bytes[5], bytes[6]];

    Some(Client {
        family: Family::Azureus,
        name: entry.name,
        version: version::format(entry.style, &token),
    })
}
