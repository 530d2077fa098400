use serde::{Deserialize, Serialize};

/// Handle of a visual marker owned by the presentation layer.
///
/// Issued by the editing session in increasing order, so handles are unique
/// within one session and never reused after a marker is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerId(u64);

impl MarkerId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
