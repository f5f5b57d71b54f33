use glam::{Quat, Vec3};

use super::constants::{FADE_IN_PORTION, FRAME_INTERVAL_MS, SPIN_STEP_RAD};
use super::cube::RotationAxis;
use super::device::DeviceProfile;
use super::motion::{lerp, quadratic_bezier, Ease};

/// Frame-rate cap for a display-synchronized callback.
///
/// A frame is accepted once at least `interval_ms` has passed since the last
/// accepted one. The reference point is re-based onto the interval grid
/// instead of jumping to `now`, so the effective rate does not drift low.
#[derive(Clone, Copy, Debug)]
pub struct FrameGate {
    interval_ms: f64,
    last_ms: f64,
}

impl FrameGate {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: 0.0,
        }
    }

    pub fn accept(&mut self, now_ms: f64) -> bool {
        let elapsed = now_ms - self.last_ms;
        if elapsed < self.interval_ms {
            return false;
        }
        self.last_ms = now_ms - elapsed % self.interval_ms;
        true
    }

    #[allow(dead_code)]
    #[inline]
    pub fn last_accepted_ms(&self) -> f64 {
        self.last_ms
    }
}

impl Default for FrameGate {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL_MS)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// Textures unresolved (or no frame accepted yet): nothing is drawn.
    Waiting,
    Entering { progress: f32 },
    /// Entrance finished; only the spin continues.
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Entered,
    Settled,
}

/// What a single display frame did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Passed the gate; the scene should be drawn.
    pub accepted: bool,
    /// Entrance progress moved this frame.
    pub advanced: bool,
    pub transition: Option<Transition>,
}

/// Cube group transform plus the opacities driven by progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubePose {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
    pub face_opacity: f32,
    pub backdrop_opacity: f32,
}

/// Waiting → Entering → Settled driver for the cube entrance.
///
/// Each phase change is a variant move, so `Transition::Settled` is reported
/// once no matter how many frames arrive afterwards.
#[derive(Clone, Debug)]
pub struct EntranceAnimation {
    profile: DeviceProfile,
    axis: RotationAxis,
    gate: FrameGate,
    phase: Phase,
    pose: CubePose,
    accepted_frames: u64,
}

impl EntranceAnimation {
    pub fn new(profile: DeviceProfile, axis: RotationAxis) -> Self {
        Self {
            profile,
            axis,
            gate: FrameGate::default(),
            phase: Phase::Waiting,
            pose: CubePose {
                position: profile.path[0],
                rotation: Quat::IDENTITY,
                scale: 1.0,
                face_opacity: 0.0,
                backdrop_opacity: 0.0,
            },
            accepted_frames: 0,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn progress(&self) -> f32 {
        match self.phase {
            Phase::Waiting => 0.0,
            Phase::Entering { progress } => progress,
            Phase::Settled => 1.0,
        }
    }

    #[inline]
    pub fn pose(&self) -> &CubePose {
        &self.pose
    }

    #[inline]
    pub fn accepted_frames(&self) -> u64 {
        self.accepted_frames
    }

    /// Feed one display frame.
    ///
    /// Nothing changes until `textures_ready`, and nothing changes on frames
    /// that arrive faster than the gate interval.
    pub fn frame(&mut self, now_ms: f64, textures_ready: bool) -> FrameOutcome {
        if !textures_ready || !self.gate.accept(now_ms) {
            return FrameOutcome::default();
        }
        self.accepted_frames += 1;
        let mut outcome = FrameOutcome {
            accepted: true,
            ..Default::default()
        };

        let current = match self.phase {
            Phase::Waiting => {
                outcome.transition = Some(Transition::Entered);
                Some(0.0)
            }
            Phase::Entering { progress } => Some(progress),
            Phase::Settled => None,
        };
        if let Some(current) = current {
            let progress = (current + self.profile.progress_step).min(1.0);
            self.apply_progress(progress);
            outcome.advanced = true;
            if progress >= 1.0 {
                self.phase = Phase::Settled;
                outcome.transition = Some(Transition::Settled);
            } else {
                self.phase = Phase::Entering { progress };
            }
        }

        self.pose.rotation = self.axis.spin(self.pose.rotation, SPIN_STEP_RAD);
        outcome
    }

    fn apply_progress(&mut self, progress: f32) {
        self.pose.face_opacity = Ease::InOutSine.apply(progress / FADE_IN_PORTION);
        let eased = Ease::InOutSine.apply(progress);
        self.pose.backdrop_opacity = eased;
        let size = lerp(self.profile.face_size, self.profile.end_size, eased);
        self.pose.scale = size / self.profile.face_size;
        self.pose.position = quadratic_bezier(&self.profile.path, eased);
    }
}
