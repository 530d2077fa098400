//! Ordered, indexable storage of control points.

use pw_core::error::{PathError, Result};
use pw_core::Tolerance;
use pw_math::Point3;
use serde::{Deserialize, Serialize};

/// Whether a control point lies on the curve or only shapes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlRole {
    /// Segment endpoint; the curve passes through it.
    Anchor,
    /// Tangent handle between two anchors.
    Handle,
}

impl ControlRole {
    /// Role implied by a point's position in the store: every third point,
    /// starting at zero, is an anchor.
    pub fn for_index(index: usize) -> Self {
        if index % 3 == 0 {
            ControlRole::Anchor
        } else {
            ControlRole::Handle
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub position: Point3,
    pub role: ControlRole,
    /// Position in the store; stable until the point is removed.
    pub index: usize,
}

/// Append-only arena of control points with removal from the tail.
///
/// There is no removal from the middle, so indices never shift.
#[derive(Debug, Clone, Default)]
pub struct ControlPointStore {
    points: Vec<ControlPoint>,
    tolerance: Tolerance,
}

impl ControlPointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose [`index_of`](Self::index_of) matches within `tolerance`.
    pub fn with_tolerance(tolerance: Tolerance) -> Self {
        Self {
            points: Vec::new(),
            tolerance,
        }
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    pub fn set_tolerance(&mut self, tolerance: Tolerance) {
        self.tolerance = tolerance;
    }

    /// Append a point and return its index.
    pub fn add(&mut self, position: Point3, role: ControlRole) -> usize {
        let index = self.points.len();
        self.points.push(ControlPoint {
            position,
            role,
            index,
        });
        index
    }

    /// Move the point at `index` to `position`.
    pub fn move_point(&mut self, index: usize, position: Point3) -> Result<()> {
        let len = self.points.len();
        let point = self
            .points
            .get_mut(index)
            .ok_or(PathError::IndexOutOfRange { index, len })?;
        point.position = position;
        Ok(())
    }

    /// Remove and return the most recently added point.
    pub fn remove_last(&mut self) -> Result<ControlPoint> {
        self.points.pop().ok_or(PathError::Empty)
    }

    /// Index of the stored point closest to `position`, if any lies within
    /// the store's linear tolerance.
    pub fn index_of(&self, position: Point3) -> Result<usize> {
        self.points
            .iter()
            .map(|p| (p.index, (p.position - position).length()))
            .filter(|&(_, dist)| dist <= self.tolerance.linear)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
            .ok_or_else(|| PathError::NotFound(format!("No control point at {position}")))
    }

    pub fn get(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get(index)
    }

    pub fn position(&self, index: usize) -> Option<Point3> {
        self.points.get(index).map(|p| p.position)
    }

    pub fn last(&self) -> Option<&ControlPoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ControlPoint> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[ControlPoint] {
        &self.points
    }
}
