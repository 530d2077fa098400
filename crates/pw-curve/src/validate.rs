use pw_core::error::{PathError, Result};
use pw_core::traits::Validate;

use crate::model::CurveModel;
use crate::store::ControlRole;

impl Validate for CurveModel {
    fn validate(&self) -> Result<()> {
        let points = self.store.len();
        let segments = self.segment_count();

        // 1. Control points come in whole segments after the first anchor
        if points > 0 && points != 1 + 3 * segments {
            return Err(PathError::Invariant(format!(
                "{points} control points do not form whole segments"
            )));
        }

        // 2. Stored index and role agree with position in the store
        for (i, cp) in self.store.iter().enumerate() {
            if cp.index != i {
                return Err(PathError::Invariant(format!(
                    "Control point at {i} records index {}",
                    cp.index
                )));
            }
            if cp.role != ControlRole::for_index(i) {
                return Err(PathError::Invariant(format!(
                    "Control point {i} has role {:?}, expected {:?}",
                    cp.role,
                    ControlRole::for_index(i)
                )));
            }
        }

        // 3. One block of samples per segment
        let expected = segments * self.samples_per_segment;
        if self.samples.len() != expected {
            return Err(PathError::Invariant(format!(
                "Expected {expected} samples for {segments} segments, found {}",
                self.samples.len()
            )));
        }

        // 4. Arc-length table covers every sample, starts at zero, never decreases
        if self.cumulative.len() != self.samples.len() {
            return Err(PathError::Invariant(format!(
                "Arc-length table has {} entries for {} samples",
                self.cumulative.len(),
                self.samples.len()
            )));
        }
        if let Some(&first) = self.cumulative.first() {
            if first != 0.0 {
                return Err(PathError::Invariant(format!(
                    "Arc-length table starts at {first}"
                )));
            }
        }
        if let Some(i) = self.cumulative.windows(2).position(|w| w[1] < w[0]) {
            return Err(PathError::Invariant(format!(
                "Arc length decreases between samples {i} and {}",
                i + 1
            )));
        }

        Ok(())
    }
}
