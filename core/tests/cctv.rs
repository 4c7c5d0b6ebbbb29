//! Camera wall tests.

use aquadesk_core::{
    cctv::{list_cameras, online_count, CameraStatus},
    seed,
};

/// The status filter partitions the wall; no filter returns every camera
/// in registry order.
#[test]
fn status_filter_partitions_the_wall() {
    let store = seed::sample_store();

    let all = list_cameras(&store, None);
    assert_eq!(all.len(), 5);
    assert_eq!(all[0].id, "C-01");

    let online = list_cameras(&store, Some(CameraStatus::Online));
    let offline = list_cameras(&store, Some(CameraStatus::Offline));
    assert_eq!(online.len() + offline.len(), all.len());
    assert_eq!(offline.len(), 1);
    assert_eq!(offline[0].id, "C-03");
}

#[test]
fn online_count_matches_the_sample_wall() {
    let store = seed::sample_store();
    assert_eq!(online_count(&store), 4);
}
