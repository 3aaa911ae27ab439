use std::sync::Arc;
use std::time::Duration;

use rstest::{fixture, rstest};
use torrust_tracker_primitives::info_hash::InfoHash;
use torrust_tracker_primitives::peer;
use torrust_tracker_primitives::swarm_metadata::{SwarmKind, SwarmMetadata};
use torrust_tracker_swarm_repository::entry::Entry as _;
use torrust_tracker_swarm_repository::repository::dash_map_mutex_std::XacrimonDashMap;
use torrust_tracker_swarm_repository::repository::skip_map_mutex_std::CrossbeamSkipList;

use crate::common::repo::Repo;
use crate::common::torrent_peer_builder::{a_completed_peer, a_peer_updated_at, a_started_peer, an_ipv6_started_peer};

#[fixture]
fn skip_list_mutex_std() -> Repo {
    Repo::SkipMapMutexStd(CrossbeamSkipList::default())
}

#[fixture]
fn dash_map_std() -> Repo {
    Repo::DashMapMutexStd(XacrimonDashMap::default())
}

fn info_hash(number: u8) -> InfoHash {
    InfoHash([number; 20])
}

#[rstest]
fn it_should_be_empty_before_any_announce(#[values(skip_list_mutex_std(), dash_map_std())] repo: Repo) {
    assert_eq!(repo.len(), 0);
    assert!(repo.get(&info_hash(1)).is_none());
    assert!(repo.snapshot_for_stats().is_empty());
}

#[rstest]
fn it_should_create_the_swarm_on_the_first_announce(#[values(skip_list_mutex_std(), dash_map_std())] repo: Repo) {
    let peer = a_started_peer(1);

    let metadata = repo.upsert_peer(&info_hash(1), &peer);

    assert_eq!(repo.len(), 1);
    assert_eq!(metadata.leechers, 1);
    assert_eq!(repo.get(&info_hash(1)).unwrap().get_peers(None), vec![Arc::new(peer)]);
}

#[rstest]
fn it_should_replace_the_record_of_a_peer_announcing_again(#[values(skip_list_mutex_std(), dash_map_std())] repo: Repo) {
    let mut peer = a_started_peer(1);
    repo.upsert_peer(&info_hash(1), &peer);

    peer.left = Some(peer::NumberOfBytes(0));
    let metadata = repo.upsert_peer(&info_hash(1), &peer);

    assert_eq!(metadata.peers(), 1);
    assert_eq!((metadata.seeders, metadata.leechers), (1, 0));
}

#[rstest]
fn it_should_keep_the_swarms_apart(#[values(skip_list_mutex_std(), dash_map_std())] repo: Repo) {
    repo.upsert_peer(&info_hash(1), &a_started_peer(1));
    repo.upsert_peer(&info_hash(2), &a_started_peer(1));

    assert_eq!(repo.len(), 2);
    assert_eq!(repo.get_swarm_metadata(&info_hash(1)).unwrap().peers(), 1);
    assert_eq!(repo.get_swarm_metadata(&info_hash(2)).unwrap().peers(), 1);
}

#[rstest]
fn it_should_keep_a_swarm_after_its_last_peer_leaves(#[values(skip_list_mutex_std(), dash_map_std())] repo: Repo) {
    let peer = a_started_peer(1);
    repo.upsert_peer(&info_hash(1), &peer);

    let metadata = repo.remove_peer(&info_hash(1), &peer.peer_id);

    assert_eq!(metadata, Some(SwarmMetadata::zeroed()));
    assert_eq!(repo.len(), 1);
}

#[rstest]
fn removing_a_peer_from_an_unknown_swarm_should_not_create_it(#[values(skip_list_mutex_std(), dash_map_std())] repo: Repo) {
    assert_eq!(repo.remove_peer(&info_hash(1), &peer::Id::from(1)), None);
    assert_eq!(repo.len(), 0);
}

#[rstest]
fn it_should_remove_the_inactive_peers_of_every_swarm(#[values(skip_list_mutex_std(), dash_map_std())] repo: Repo) {
    repo.upsert_peer(&info_hash(1), &a_peer_updated_at(1, Duration::from_secs(10)));
    repo.upsert_peer(&info_hash(1), &a_peer_updated_at(2, Duration::from_secs(30)));
    repo.upsert_peer(&info_hash(2), &a_peer_updated_at(3, Duration::from_secs(10)));

    let removed = repo.remove_inactive_peers(Duration::from_secs(20));

    assert_eq!(removed, 2);
    assert_eq!(repo.get_swarm_metadata(&info_hash(1)).unwrap().peers(), 1);
    assert_eq!(repo.get_swarm_metadata(&info_hash(2)).unwrap().peers(), 0);
    assert_eq!(repo.len(), 2);
}

#[rstest]
fn the_snapshot_should_have_the_counters_of_every_swarm(#[values(skip_list_mutex_std(), dash_map_std())] repo: Repo) {
    repo.upsert_peer(&info_hash(1), &a_completed_peer(1));
    repo.upsert_peer(&info_hash(2), &a_started_peer(2));
    repo.upsert_peer(&info_hash(3), &a_completed_peer(3));
    repo.upsert_peer(&info_hash(3), &an_ipv6_started_peer(4));

    let mut kinds: Vec<SwarmKind> = repo.snapshot_for_stats().iter().map(SwarmMetadata::kind).collect();
    kinds.sort_by_key(|kind| format!("{kind:?}"));

    assert_eq!(kinds, vec![SwarmKind::LeechersOnly, SwarmKind::Mixed, SwarmKind::SeedersOnly]);
}

#[rstest]
fn concurrent_announces_should_neither_lose_nor_duplicate_peers(
    #[values(skip_list_mutex_std(), dash_map_std())] repo: Repo,
) {
    const THREADS: i32 = 8;
    const PEERS_PER_THREAD: i32 = 100;

    std::thread::scope(|scope| {
        for thread in 0..THREADS {
            let repo = &repo;
            scope.spawn(move || {
                for number in 0..PEERS_PER_THREAD {
                    let peer = a_started_peer(thread * PEERS_PER_THREAD + number);
                    // every peer is announced twice, into one shared swarm and one swarm per thread
                    repo.upsert_peer(&info_hash(0), &peer);
                    repo.upsert_peer(&info_hash(0), &peer);
                    repo.upsert_peer(&info_hash(u8::try_from(thread + 1).unwrap()), &peer);
                }
            });
        }
    });

    let expected = u64::try_from(THREADS * PEERS_PER_THREAD).unwrap();

    assert_eq!(repo.len(), 1 + usize::try_from(THREADS).unwrap());
    assert_eq!(repo.get_swarm_metadata(&info_hash(0)).unwrap().peers(), expected);
    assert_eq!(
        repo.snapshot_for_stats().iter().map(SwarmMetadata::peers).sum::<u64>(),
        2 * expected
    );
}

fn assert_consistent(snapshot: &[SwarmMetadata]) {
    for swarm in snapshot {
        assert_eq!(swarm.ipv4 + swarm.ipv6, swarm.peers(), "{swarm:?}");
        assert_eq!(swarm.clients.total(), swarm.peers(), "{swarm:?}");
    }
}

#[rstest]
fn every_snapshot_should_be_consistent_while_peers_announce_leave_and_expire(
    #[values(skip_list_mutex_std(), dash_map_std())] repo: Repo,
) {
    const MUTATORS: i32 = 4;
    const ROUNDS: i32 = 200;
    const SNAPSHOTS: usize = 500;

    std::thread::scope(|scope| {
        for thread in 0..MUTATORS {
            let repo = &repo;
            scope.spawn(move || {
                for round in 0..ROUNDS {
                    let id = (thread * ROUNDS + round) * 3;
                    let swarm = info_hash(u8::try_from(round % 8).unwrap());

                    repo.upsert_peer(&swarm, &a_completed_peer(id));
                    repo.upsert_peer(&swarm, &an_ipv6_started_peer(id + 1));
                    repo.upsert_peer(&swarm, &a_peer_updated_at(id + 2, Duration::from_secs(10)));
                    repo.remove_peer(&swarm, &peer::Id::from(id + 1));

                    if round % 10 == 0 {
                        repo.remove_inactive_peers(Duration::from_secs(20));
                    }
                }
            });
        }

        let repo = &repo;
        scope.spawn(move || {
            for _ in 0..SNAPSHOTS {
                assert_consistent(&repo.snapshot_for_stats());
            }
        });
    });

    assert_consistent(&repo.snapshot_for_stats());
    assert_eq!(repo.len(), 8);
}

#[rstest]
fn the_reaper_should_only_remove_the_inactive_peers_while_other_peers_announce(
    #[values(skip_list_mutex_std(), dash_map_std())] repo: Repo,
) {
    const INACTIVE: i32 = 200;
    const ANNOUNCERS: i32 = 4;
    const ANNOUNCES: i32 = 200;

    for id in 0..INACTIVE {
        repo.upsert_peer(&info_hash(u8::try_from(id % 4).unwrap()), &a_peer_updated_at(id, Duration::from_secs(10)));
    }

    let removed = std::thread::scope(|scope| {
        for thread in 0..ANNOUNCERS {
            let repo = &repo;
            scope.spawn(move || {
                for number in 0..ANNOUNCES {
                    let id = INACTIVE + thread * ANNOUNCES + number;
                    repo.upsert_peer(
                        &info_hash(u8::try_from(id % 4).unwrap()),
                        &a_peer_updated_at(id, Duration::from_secs(30)),
                    );
                }
            });
        }

        let repo = &repo;
        let reaper = scope.spawn(move || (0..50).map(|_| repo.remove_inactive_peers(Duration::from_secs(20))).sum::<usize>());

        reaper.join().unwrap()
    });

    // a last pass for the inactive peers the reaper had not reached yet
    let removed = removed + repo.remove_inactive_peers(Duration::from_secs(20));

    assert_eq!(removed, usize::try_from(INACTIVE).unwrap());
    assert_eq!(
        repo.snapshot_for_stats().iter().map(SwarmMetadata::peers).sum::<u64>(),
        u64::try_from(ANNOUNCERS * ANNOUNCES).unwrap()
    );
}

#[rstest]
fn simultaneous_announces_of_the_same_peer_should_keep_one_of_the_records_in_full(
    #[values(skip_list_mutex_std(), dash_map_std())] repo: Repo,
) {
    const ROUNDS: usize = 500;

    let ipv4_seeder = a_completed_peer(1);
    let ipv6_leecher = an_ipv6_started_peer(1);
    let barrier = std::sync::Barrier::new(2);

    std::thread::scope(|scope| {
        for record in [ipv4_seeder, ipv6_leecher] {
            let (repo, barrier) = (&repo, &barrier);
            scope.spawn(move || {
                for _ in 0..ROUNDS {
                    barrier.wait();
                    let metadata = repo.upsert_peer(&info_hash(1), &record);
                    assert_eq!(metadata.peers(), 1);
                }
            });
        }
    });

    let metadata = repo.get_swarm_metadata(&info_hash(1)).unwrap();

    assert_eq!(metadata.peers(), 1);
    assert!(
        (metadata.seeders, metadata.ipv4) == (1, 1) || (metadata.leechers, metadata.ipv6) == (1, 1),
        "{metadata:?}"
    );
    assert_eq!(
        repo.get(&info_hash(1)).unwrap().get_peers(None)[0].as_ref(),
        &if metadata.seeders == 1 { ipv4_seeder } else { ipv6_leecher }
    );
}
