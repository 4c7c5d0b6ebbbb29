//! CCTV wall: camera registry and connection-status filtering.
//! Live streams and archives are external services; the desk only tracks
//! which cameras are reachable.

use crate::{store::DeskStore, types::EntityId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraStatus {
    Online,
    Offline,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub id: EntityId,
    pub name: String,
    pub area: String,
    pub status: CameraStatus,
}

/// Cameras in registry order, optionally narrowed to one status.
pub fn list_cameras(store: &DeskStore, filter: Option<CameraStatus>) -> Vec<&Camera> {
    store
        .cameras()
        .iter()
        .filter(|c| filter.map_or(true, |f| c.status == f))
        .collect()
}

pub fn online_count(store: &DeskStore) -> usize {
    store
        .cameras()
        .iter()
        .filter(|c| c.status == CameraStatus::Online)
        .count()
}
