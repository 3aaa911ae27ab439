pub mod repo;
pub mod torrent_peer_builder;
