//! Marker lifecycle commands sent to the presentation layer.

use pw_core::MarkerId;
use pw_curve::{ControlRole, CurveModel, EditOutcome};
use pw_math::Point3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerRole {
    Anchor,
    Handle,
    /// One sampled point of the curve.
    Sample,
}

impl From<ControlRole> for MarkerRole {
    fn from(role: ControlRole) -> Self {
        match role {
            ControlRole::Anchor => MarkerRole::Anchor,
            ControlRole::Handle => MarkerRole::Handle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MarkerCommand {
    Create {
        id: MarkerId,
        position: Point3,
        role: MarkerRole,
    },
    Update {
        id: MarkerId,
        position: Point3,
    },
    Destroy {
        id: MarkerId,
    },
}

impl MarkerCommand {
    /// Forward this command to `presentation`.
    pub fn dispatch<P: Presentation + ?Sized>(&self, presentation: &mut P) {
        match *self {
            MarkerCommand::Create { id, position, role } => {
                presentation.marker_create(id, position, role)
            }
            MarkerCommand::Update { id, position } => presentation.marker_update(id, position),
            MarkerCommand::Destroy { id } => presentation.marker_destroy(id),
        }
    }
}

/// Receiver of marker commands: whatever draws control points and samples.
pub trait Presentation {
    fn marker_create(&mut self, id: MarkerId, position: Point3, role: MarkerRole);
    fn marker_update(&mut self, id: MarkerId, position: Point3);
    fn marker_destroy(&mut self, id: MarkerId);
}

/// Marker handles parallel to the curve's control points and samples.
#[derive(Debug, Clone, Default)]
pub(crate) struct MarkerBook {
    control: Vec<MarkerId>,
    samples: Vec<MarkerId>,
    issued: u64,
}

impl MarkerBook {
    fn next_id(&mut self) -> MarkerId {
        self.issued += 1;
        MarkerId::from_raw(self.issued)
    }

    pub(crate) fn control(&self) -> &[MarkerId] {
        &self.control
    }

    pub(crate) fn samples(&self) -> &[MarkerId] {
        &self.samples
    }

    /// Emit the commands mirroring `outcome`, already applied to `curve`.
    pub(crate) fn record(
        &mut self,
        outcome: &EditOutcome,
        curve: &CurveModel,
        out: &mut Vec<MarkerCommand>,
    ) {
        let points = curve.control_points();

        for _ in 0..outcome.points_removed {
            if let Some(id) = self.control.pop() {
                out.push(MarkerCommand::Destroy { id });
            }
        }
        if let Some(k) = outcome.segment_removed {
            let keep = curve.sample_range(k).start;
            while self.samples.len() > keep {
                if let Some(id) = self.samples.pop() {
                    out.push(MarkerCommand::Destroy { id });
                }
            }
        }

        for index in outcome.points_added.clone() {
            if let Some(cp) = points.get(index) {
                let id = self.next_id();
                self.control.push(id);
                out.push(MarkerCommand::Create {
                    id,
                    position: cp.position,
                    role: cp.role.into(),
                });
            }
        }
        if let Some(k) = outcome.segment_added {
            for &position in curve.segment_samples(k).unwrap_or_default() {
                let id = self.next_id();
                self.samples.push(id);
                out.push(MarkerCommand::Create {
                    id,
                    position,
                    role: MarkerRole::Sample,
                });
            }
        }

        if let Some(index) = outcome.point_moved {
            if let (Some(&id), Some(position)) = (self.control.get(index), points.position(index))
            {
                out.push(MarkerCommand::Update { id, position });
            }
        }
        for &k in &outcome.resampled {
            let range = curve.sample_range(k);
            let ids = self.samples.get(range.clone()).unwrap_or_default();
            let positions = curve.samples().get(range).unwrap_or_default();
            for (&id, &position) in ids.iter().zip(positions) {
                out.push(MarkerCommand::Update { id, position });
            }
        }
    }
}
