//! Tick-driven editing session: input snapshot in, marker commands and
//! follower pose out.

use log::debug;
use pw_core::error::Result;
use pw_core::{MarkerId, Tolerance};
use pw_curve::{CurveEdit, CurveModel};
use pw_follow::{Easing, Follower, Pose};
use pw_math::Point3;
use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::input::InputSnapshot;
use crate::markers::{MarkerBook, MarkerCommand};

/// What the presentation layer needs after one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickOutput {
    /// Where an anchor would be placed, while edit mode is active.
    pub preview: Option<Point3>,
    /// Control point currently being dragged.
    pub selected: Option<usize>,
    pub commands: Vec<MarkerCommand>,
    /// Follower pose; `None` while it is hidden.
    pub pose: Option<Pose>,
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    curve: CurveModel,
    follower: Follower,
    markers: MarkerBook,
    selected: Option<usize>,
}

impl EditorSession {
    pub fn new(config: &EditorConfig) -> Result<Self> {
        let curve = CurveModel::with_samples_per_segment(config.samples_per_segment)?
            .with_pick_tolerance(Tolerance::pick(config.pick_radius));
        Ok(Self {
            curve,
            follower: Follower::new(config.follower_speed, config.initial_easing),
            markers: MarkerBook::default(),
            selected: None,
        })
    }

    pub fn curve(&self) -> &CurveModel {
        &self.curve
    }

    pub fn follower(&self) -> &Follower {
        &self.follower
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Marker handles of the control points, in store order.
    pub fn control_markers(&self) -> &[MarkerId] {
        self.markers.control()
    }

    /// Marker handles of the curve samples, in buffer order.
    pub fn sample_markers(&self) -> &[MarkerId] {
        self.markers.samples()
    }

    /// Run one tick: preview, place, drag, undo, easing, follower.
    pub fn tick(&mut self, input: &InputSnapshot) -> TickOutput {
        let mut commands = Vec::new();

        let preview = input.hover_position.filter(|_| input.edit_mode);

        let mut placed = false;
        if input.place_pressed {
            if let Some(position) = preview {
                placed = self.edit(CurveEdit::Added(position), &mut commands);
            }
        }

        self.drag(input, &mut commands);

        if input.undo_pressed {
            if placed {
                debug!("Undo ignored: an anchor was placed this tick");
            } else {
                self.edit(CurveEdit::Removed, &mut commands);
                self.selected = None;
            }
        }

        if let Some(easing) = input.easing_key.and_then(Easing::from_key) {
            self.follower.set_easing(easing);
        }

        let pose = self.follower.update(input.move_held, input.dt, &self.curve);

        TickOutput {
            preview,
            selected: self.selected,
            commands,
            pose,
        }
    }

    fn drag(&mut self, input: &InputSnapshot, commands: &mut Vec<MarkerCommand>) {
        if !input.drag_held || input.edit_mode {
            self.selected = None;
            return;
        }

        if self.selected.is_none() {
            self.selected = input
                .picked_point
                .and_then(|p| self.curve.index_of(p).ok());
            if let Some(index) = self.selected {
                debug!("Selected control point {index}");
            }
        }

        let (Some(index), Some(position)) = (self.selected, input.hover_position) else {
            return;
        };
        if self.curve.control_points().position(index) == Some(position) {
            return;
        }
        self.edit(CurveEdit::Moved { index, position }, commands);
    }

    /// Apply `edit`, turning a refusal into a logged no-op.
    fn edit(&mut self, edit: CurveEdit, commands: &mut Vec<MarkerCommand>) -> bool {
        match self.curve.apply(edit) {
            Ok(outcome) => {
                self.markers.record(&outcome, &self.curve, commands);
                true
            }
            Err(err) => {
                debug!("Ignored {edit:?}: {err}");
                false
            }
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self {
            curve: CurveModel::new()
                .with_pick_tolerance(Tolerance::pick(EditorConfig::DEFAULT_PICK_RADIUS)),
            follower: Follower::default(),
            markers: MarkerBook::default(),
            selected: None,
        }
    }
}

/// Pure form of [`EditorSession::tick`]: consumes the state, returns the next.
pub fn tick(mut session: EditorSession, input: &InputSnapshot) -> (EditorSession, TickOutput) {
    let output = session.tick(input);
    (session, output)
}
