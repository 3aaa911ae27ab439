use std::sync::Arc;

use torrust_tracker_primitives::info_hash::InfoHash;
use torrust_tracker_primitives::peer;
use torrust_tracker_primitives::peer::fixture::PeerBuilder;
use torrust_tracker_primitives::tracker_stats::TrackerStats;
use torrust_tracker_test_helpers::configuration;

use crate::servers::http::client::Client;
use crate::servers::http::Started;

fn sample_info_hash() -> InfoHash {
    "9c38422213e30bff212b30c360d26f9a02136422".parse::<InfoHash>().unwrap()
}

fn web_torrent_leecher() -> peer::Peer {
    PeerBuilder::leecher()
        .with_peer_id(&peer::Id(*b"-WW0091-4ea5886ce160"))
        .build()
}

/// The statistics after a single leecher announced a single torrent.
fn one_leecher_stats(client: &str, version: &str) -> TrackerStats {
    let mut stats = TrackerStats {
        torrents: 1,
        active_torrents: 1,
        peers_all: 1,
        peers_leecher_only: 1,
        peers_ipv4: 1,
        ..Default::default()
    };
    stats.clients.increment(client, version);
    stats
}

#[tokio::test]
async fn health_check_endpoint_should_return_ok() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(*env.bind_address()).get("health_check").await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.json::<serde_json::Value>().await.unwrap(), serde_json::json!({ "status": "Ok", "torrents": 0 }));

    env.stop().await;
}

#[tokio::test]
async fn every_response_should_have_a_request_id() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(*env.bind_address()).get("stats.json").await;

    assert!(response.headers().get("x-request-id").is_some());

    env.stop().await;
}

mod receiving_a_stats_request {
    use torrust_tracker_primitives::peer::fixture::PeerBuilder;
    use torrust_tracker_primitives::tracker_stats::TrackerStats;
    use torrust_tracker_test_helpers::configuration;

    use super::{one_leecher_stats, sample_info_hash, web_torrent_leecher, Arc};
    use crate::servers::http::asserts::{assert_html_stats, assert_json_stats};
    use crate::servers::http::client::Client;
    use crate::servers::http::Started;

    #[tokio::test]
    async fn it_should_return_empty_stats_as_html_by_default() {
        let env = Started::new(&configuration::ephemeral().into()).await;

        let response = Client::new(*env.bind_address()).get("stats").await;

        assert_html_stats(response, &TrackerStats::default()).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn it_should_return_empty_stats_as_json_when_the_client_accepts_json() {
        let env = Started::new(&configuration::ephemeral().into()).await;

        let response = Client::new(*env.bind_address())
            .get_accepting("stats", "application/json")
            .await;

        assert_json_stats(response, &TrackerStats::default()).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn it_should_return_empty_stats_as_json_on_the_json_path() {
        let env = Started::new(&configuration::ephemeral().into()).await;

        let response = Client::new(*env.bind_address()).get("stats.json").await;

        assert_json_stats(response, &TrackerStats::default()).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn it_should_count_a_web_torrent_leecher() {
        let env = Started::new(&configuration::ephemeral().into()).await;

        env.announce(&sample_info_hash(), &web_torrent_leecher());

        let response = Client::new(*env.bind_address()).get("stats.json").await;

        assert_json_stats(response, &one_leecher_stats("WebTorrent", "0.91")).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn it_should_count_a_leecher_with_an_unknown_peer_id() {
        let env = Started::new(&configuration::ephemeral().into()).await;

        env.announce(
            &sample_info_hash(),
            &PeerBuilder::leecher()
                .with_peer_id(&torrust_tracker_primitives::peer::Id(*b"01234567890123456789"))
                .build(),
        );

        let response = Client::new(*env.bind_address()).get("stats.json").await;

        assert_json_stats(response, &one_leecher_stats("unknown", "01234567")).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn it_should_render_the_counters_of_a_leecher_in_the_html_page() {
        let env = Started::new(&configuration::ephemeral().into()).await;

        env.announce(&sample_info_hash(), &web_torrent_leecher());

        let response = Client::new(*env.bind_address()).get("stats").await;

        assert_html_stats(response, &one_leecher_stats("WebTorrent", "0.91")).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn it_should_count_the_seeder_and_the_leecher_of_a_swarm_together() {
        let env = Started::new(&configuration::ephemeral().into()).await;

        env.announce(&sample_info_hash(), &PeerBuilder::seeder().build());
        env.announce(&sample_info_hash(), &PeerBuilder::leecher().build());

        let response = Client::new(*env.bind_address()).get("stats.json").await;

        let stats: TrackerStats = response.json().await.unwrap();

        assert_eq!(stats.peers_all, 2);
        assert_eq!(stats.peers_seeder_and_leecher, 2);
        assert_eq!(stats.peers_seeder_only, 0);
        assert_eq!(stats.peers_leecher_only, 0);

        env.stop().await;
    }

    #[tokio::test]
    async fn it_should_keep_counting_a_torrent_after_its_last_peer_stops() {
        let env = Started::new(&configuration::ephemeral().into()).await;

        let mut peer = web_torrent_leecher();
        env.announce(&sample_info_hash(), &peer);

        peer.event = torrust_tracker_primitives::announce_event::AnnounceEvent::Stopped;
        env.announce(&sample_info_hash(), &peer);

        let response = Client::new(*env.bind_address()).get("stats.json").await;

        let stats: TrackerStats = response.json().await.unwrap();

        assert_eq!(stats.torrents, 1);
        assert_eq!(stats.active_torrents, 0);
        assert_eq!(stats.peers_all, 0);
        assert!(stats.clients.is_empty());

        env.stop().await;
    }

    #[tokio::test]
    async fn the_tracker_and_the_server_should_share_the_swarms() {
        let env = Started::new(&configuration::ephemeral().into()).await;

        let tracker = Arc::clone(&env.tracker);
        tracker.upsert_peer(&sample_info_hash(), &PeerBuilder::seeder().build());

        let response = Client::new(*env.bind_address()).get("stats.json").await;

        let stats: TrackerStats = response.json().await.unwrap();

        assert_eq!(stats.peers_seeder_only, 1);

        env.stop().await;
    }
}
