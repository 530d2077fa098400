//! Piecewise-cubic curve built from appended anchors, with a dense sample
//! buffer and cumulative arc-length table kept in sync on every edit.
//!
//! Control points are grouped in fours: segment `k` uses control points
//! `3k..=3k+3`, so neighbouring segments share their boundary anchor.

use std::ops::Range;

use log::{debug, trace};
use pw_core::error::{PathError, Result};
use pw_core::Tolerance;
use pw_math::Point3;

use crate::curve::CubicBezier;
use crate::sampling::{cumulative_lengths, sample_into, sample_uniform};
use crate::store::{ControlPointStore, ControlRole};

/// Samples evaluated per segment.
pub const SAMPLES_PER_SEGMENT: usize = 100;

/// A single edit to the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveEdit {
    /// Append an anchor (and, after the first, two straight-line handles).
    Added(Point3),
    /// Remove the trailing anchor together with its two handles.
    Removed,
    /// Move one control point.
    Moved { index: usize, position: Point3 },
}

/// What an edit changed, for callers mirroring the curve elsewhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditOutcome {
    /// Control-point indices created by the edit.
    pub points_added: Range<usize>,
    /// Number of control points removed from the tail.
    pub points_removed: usize,
    /// Control point moved in place.
    pub point_moved: Option<usize>,
    /// Segment appended to the end of the curve.
    pub segment_added: Option<usize>,
    /// Segment truncated from the end of the curve.
    pub segment_removed: Option<usize>,
    /// Existing segments whose samples were overwritten in place.
    pub resampled: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct CurveModel {
    pub(crate) store: ControlPointStore,
    pub(crate) samples: Vec<Point3>,
    pub(crate) cumulative: Vec<f64>,
    pub(crate) samples_per_segment: usize,
    pub(crate) tolerance: Tolerance,
}

impl CurveModel {
    pub fn new() -> Self {
        Self {
            store: ControlPointStore::new(),
            samples: Vec::new(),
            cumulative: Vec::new(),
            samples_per_segment: SAMPLES_PER_SEGMENT,
            tolerance: Tolerance::default(),
        }
    }

    /// Empty curve sampling every segment at `count` points.
    pub fn with_samples_per_segment(count: usize) -> Result<Self> {
        if count < 2 {
            return Err(PathError::InvalidOperation(format!(
                "A segment needs at least 2 samples, got {count}"
            )));
        }
        Ok(Self {
            samples_per_segment: count,
            ..Self::new()
        })
    }

    /// Set the radius used to match positions in [`index_of`](Self::index_of).
    pub fn with_pick_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.store.set_tolerance(tolerance);
        self
    }

    pub fn control_points(&self) -> &ControlPointStore {
        &self.store
    }

    pub fn samples(&self) -> &[Point3] {
        &self.samples
    }

    /// Running arc length at each sample; same length as [`samples`](Self::samples).
    pub fn cumulative_lengths(&self) -> &[f64] {
        &self.cumulative
    }

    pub fn length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    pub fn samples_per_segment(&self) -> usize {
        self.samples_per_segment
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    pub fn anchor_count(&self) -> usize {
        match self.store.len() {
            0 => 0,
            n => (n - 1) / 3 + 1,
        }
    }

    pub fn segment_count(&self) -> usize {
        self.anchor_count().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Control-point index of the given point, matched within the pick tolerance.
    pub fn index_of(&self, position: Point3) -> Result<usize> {
        self.store.index_of(position)
    }

    /// The cubic for segment `k`, built from its current control points.
    pub fn segment(&self, k: usize) -> Option<CubicBezier> {
        let first = 3 * k;
        let p = |i: usize| self.store.position(first + i);
        Some(CubicBezier::new(p(0)?, p(1)?, p(2)?, p(3)?))
    }

    /// Index range of segment `k` within the sample buffer.
    pub fn sample_range(&self, k: usize) -> Range<usize> {
        let n = self.samples_per_segment;
        k * n..(k + 1) * n
    }

    pub fn segment_samples(&self, k: usize) -> Option<&[Point3]> {
        self.samples.get(self.sample_range(k))
    }

    /// Segments whose shape depends on control point `index`.
    ///
    /// A handle belongs to exactly one segment; an interior anchor is shared
    /// by the segments on either side of it; the first and last anchors
    /// belong to one segment each.
    pub fn segments_owning(&self, index: usize) -> Vec<usize> {
        let segments = self.segment_count();
        if segments == 0 || index >= self.store.len() {
            return Vec::new();
        }
        match ControlRole::for_index(index) {
            ControlRole::Handle => vec![index / 3],
            ControlRole::Anchor => {
                let k = index / 3;
                let mut owners = Vec::with_capacity(2);
                if k > 0 {
                    owners.push(k - 1);
                }
                if k < segments {
                    owners.push(k);
                }
                owners
            }
        }
    }

    /// Apply one edit, resampling only the segments it touches.
    pub fn apply(&mut self, edit: CurveEdit) -> Result<EditOutcome> {
        let outcome = match edit {
            CurveEdit::Added(position) => self.append_anchor(position),
            CurveEdit::Removed => self.truncate_anchor()?,
            CurveEdit::Moved { index, position } => self.relocate(index, position)?,
        };
        self.recompute_arc_length();
        Ok(outcome)
    }

    pub fn add_anchor(&mut self, position: Point3) -> Result<EditOutcome> {
        self.apply(CurveEdit::Added(position))
    }

    pub fn move_control_point(&mut self, index: usize, position: Point3) -> Result<EditOutcome> {
        self.apply(CurveEdit::Moved { index, position })
    }

    pub fn remove_trailing_anchor(&mut self) -> Result<EditOutcome> {
        self.apply(CurveEdit::Removed)
    }

    fn append_anchor(&mut self, position: Point3) -> EditOutcome {
        let first_new = self.store.len();
        let previous = self.store.last().map(|p| p.position);

        let Some(previous) = previous else {
            self.store.add(position, ControlRole::Anchor);
            debug!("Placed first anchor at {position}");
            return EditOutcome {
                points_added: first_new..first_new + 1,
                ..Default::default()
            };
        };

        let bezier = CubicBezier::straight(previous, position);
        self.store.add(bezier.p1, ControlRole::Handle);
        self.store.add(bezier.p2, ControlRole::Handle);
        self.store.add(position, ControlRole::Anchor);

        let k = self.segment_count() - 1;
        self.samples
            .extend(sample_uniform(&bezier, self.samples_per_segment));
        debug!("Appended segment {k} ending at {position}");

        EditOutcome {
            points_added: first_new..first_new + 3,
            segment_added: Some(k),
            ..Default::default()
        }
    }

    fn truncate_anchor(&mut self) -> Result<EditOutcome> {
        match self.anchor_count() {
            0 => Err(PathError::InsufficientPoints {
                required: 1,
                found: 0,
            }),
            1 => {
                self.store.remove_last()?;
                debug!("Removed lone anchor");
                Ok(EditOutcome {
                    points_removed: 1,
                    ..Default::default()
                })
            }
            _ => {
                let k = self.segment_count() - 1;
                let keep = self.sample_range(k).start;
                self.samples.truncate(keep);
                for _ in 0..3 {
                    self.store.remove_last()?;
                }
                debug!("Removed trailing segment {k}");
                Ok(EditOutcome {
                    points_removed: 3,
                    segment_removed: Some(k),
                    ..Default::default()
                })
            }
        }
    }

    fn relocate(&mut self, index: usize, position: Point3) -> Result<EditOutcome> {
        self.store.move_point(index, position)?;
        let resampled = self.segments_owning(index);
        for &k in &resampled {
            self.resample_segment(k)?;
        }
        Ok(EditOutcome {
            point_moved: Some(index),
            resampled,
            ..Default::default()
        })
    }

    /// Overwrite the samples of segment `k` from its current control points.
    fn resample_segment(&mut self, k: usize) -> Result<()> {
        let bezier = self.segment(k).ok_or(PathError::IndexOutOfRange {
            index: k,
            len: self.segment_count(),
        })?;
        let range = self.sample_range(k);
        let len = self.samples.len();
        let slice = self
            .samples
            .get_mut(range.clone())
            .ok_or(PathError::IndexOutOfRange {
                index: range.end - 1,
                len,
            })?;
        sample_into(&bezier, slice);
        trace!("Resampled segment {k}");
        Ok(())
    }

    fn recompute_arc_length(&mut self) {
        cumulative_lengths(&self.samples, &mut self.cumulative);
    }
}

impl Default for CurveModel {
    fn default() -> Self {
        Self::new()
    }
}
