//! Camera registry operations.

use super::DeskStore;
use crate::cctv::Camera;

impl DeskStore {
    pub fn insert_camera(&mut self, camera: Camera) {
        self.cameras.push(camera);
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }
}
