use super::constants::FACE_COUNT;
use super::cube::CubeFace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// Counted as resolved so one bad asset cannot stall the entrance; the
    /// face stays blank.
    Failed,
}

/// Per-face record of texture resolution.
///
/// Completions may arrive in any order and repeated reports for the same face
/// are ignored, so "all resolved" depends only on which faces have reported.
#[derive(Clone, Debug, Default)]
pub struct LoadTracker {
    faces: [Option<LoadOutcome>; FACE_COUNT],
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a face. Returns `true` only for the report that completes the set.
    pub fn resolve(&mut self, face: CubeFace, outcome: LoadOutcome) -> bool {
        let slot = &mut self.faces[face.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(outcome);
        self.is_complete()
    }

    #[inline]
    pub fn total(&self) -> usize {
        FACE_COUNT
    }

    pub fn resolved(&self) -> usize {
        self.faces.iter().filter(|f| f.is_some()).count()
    }

    pub fn failed(&self) -> usize {
        self.faces
            .iter()
            .filter(|f| matches!(f, Some(LoadOutcome::Failed)))
            .count()
    }

    #[allow(dead_code)]
    pub fn outcome(&self, face: CubeFace) -> Option<LoadOutcome> {
        self.faces[face.index()]
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.resolved() == self.total()
    }

    /// Rounded completion percentage for the loading badge.
    pub fn percent(&self) -> u32 {
        ((self.resolved() as f32 / self.total() as f32) * 100.0).round() as u32
    }
}
