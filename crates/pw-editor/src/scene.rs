//! In-memory presentation layer that keeps the latest state of every marker.

use std::collections::HashMap;

use log::warn;
use pw_core::MarkerId;
use pw_math::Point3;

use crate::markers::{MarkerCommand, MarkerRole, Presentation};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub position: Point3,
    pub role: MarkerRole,
}

#[derive(Debug, Clone, Default)]
pub struct MarkerScene {
    markers: HashMap<MarkerId, Marker>,
}

impl MarkerScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_all(&mut self, commands: &[MarkerCommand]) {
        for command in commands {
            command.dispatch(self);
        }
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(&id)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn count(&self, role: MarkerRole) -> usize {
        self.markers.values().filter(|m| m.role == role).count()
    }
}

impl Presentation for MarkerScene {
    fn marker_create(&mut self, id: MarkerId, position: Point3, role: MarkerRole) {
        if self.markers.insert(id, Marker { position, role }).is_some() {
            warn!("Marker {id} created twice");
        }
    }

    fn marker_update(&mut self, id: MarkerId, position: Point3) {
        match self.markers.get_mut(&id) {
            Some(marker) => marker.position = position,
            None => warn!("Update for unknown marker {id}"),
        }
    }

    fn marker_destroy(&mut self, id: MarkerId) {
        if self.markers.remove(&id).is_none() {
            warn!("Destroy for unknown marker {id}");
        }
    }
}
