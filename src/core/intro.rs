use std::collections::VecDeque;

use super::constants::*;
use super::motion::Ease;

/// One entry of a timed script.
#[derive(Clone, Debug, PartialEq)]
pub enum Step<C> {
    /// Idle for the given number of milliseconds.
    Wait(f64),
    /// Instantaneous cue.
    Fire(C),
    /// Repeated cue: every tick adds `step` to a linear progress value (capped
    /// at 1) and hands the eased value to the stage. Ends on the tick that
    /// reaches 1.
    Tween { cue: C, step: f32, ease: Ease },
}

/// Receiver for the cues a [`Sequencer`] emits.
pub trait Stage<C> {
    fn fire(&mut self, cue: &C);
    fn tween(&mut self, cue: &C, eased: f32);
}

/// Runs a list of [`Step`]s against a virtual millisecond clock.
///
/// `advance_to` replays every tick that fell due since the previous call, in
/// order, so the outcome depends only on elapsed time and not on how often
/// the caller polls.
#[derive(Clone, Debug)]
pub struct Sequencer<C> {
    steps: VecDeque<Step<C>>,
    tick_ms: f64,
    origin_ms: f64,
    cursor_ms: f64,
    tween_progress: f32,
    cancelled: bool,
}

impl<C> Sequencer<C> {
    pub fn new(steps: Vec<Step<C>>, tick_ms: f64, origin_ms: f64) -> Self {
        Self {
            steps: steps.into(),
            tick_ms,
            origin_ms,
            cursor_ms: 0.0,
            tween_progress: 0.0,
            cancelled: false,
        }
    }

    pub fn advance_to<S: Stage<C>>(&mut self, now_ms: f64, stage: &mut S) {
        if self.cancelled {
            return;
        }
        let elapsed = now_ms - self.origin_ms;
        while let Some(step) = self.steps.front() {
            let done = match step {
                Step::Fire(cue) => {
                    stage.fire(cue);
                    true
                }
                Step::Wait(ms) => {
                    let due = self.cursor_ms + *ms;
                    if due > elapsed {
                        false
                    } else {
                        self.cursor_ms = due;
                        true
                    }
                }
                Step::Tween { cue, step, ease } => {
                    while self.tween_progress < 1.0 {
                        let due = self.cursor_ms + self.tick_ms;
                        if due > elapsed {
                            break;
                        }
                        self.cursor_ms = due;
                        self.tween_progress = (self.tween_progress + *step).min(1.0);
                        stage.tween(cue, ease.apply(self.tween_progress));
                    }
                    self.tween_progress >= 1.0
                }
            };
            if !done {
                return;
            }
            self.tween_progress = 0.0;
            self.steps.pop_front();
        }
    }

    /// Apply every pending step at once, ignoring waits.
    ///
    /// Fires each remaining cue and drives each remaining tween straight to
    /// its final value, so the stage ends where a full run would leave it.
    pub fn fast_forward<S: Stage<C>>(&mut self, stage: &mut S) {
        if self.cancelled {
            return;
        }
        while let Some(step) = self.steps.pop_front() {
            match step {
                Step::Wait(ms) => self.cursor_ms += ms,
                Step::Fire(cue) => stage.fire(&cue),
                Step::Tween { cue, ease, .. } => stage.tween(&cue, ease.apply(1.0)),
            }
        }
        self.tween_progress = 0.0;
    }

    /// Drop every pending step; later `advance_to` calls are no-ops.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.steps.clear();
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.steps.is_empty()
    }

    /// Virtual time consumed so far, relative to the origin.
    #[allow(dead_code)]
    #[inline]
    pub fn cursor_ms(&self) -> f64 {
        self.cursor_ms
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Headline {
    First,
    Second,
}

/// Cues of the post-entrance text reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroCue {
    /// Make the headline visible but fully clipped.
    ShowHeadline(Headline),
    /// Tween: clip boundary moves from 100% hidden to 0%.
    WipeHeadline(Headline),
    /// Measure span `i`, clip its text and attach its band.
    PrepareSpan(usize),
    /// Tween: band grows from the span's left edge to its full width.
    GrowBand(usize),
    /// Tween: band shrinks from the left while the text unclips 1:1.
    ShrinkBand(usize),
    /// Remove the band and clear the clip.
    FinishSpan(usize),
    RevealHeader,
    RevealButton,
    RevealScroll,
}

/// The whole reveal, starting at the moment the entrance settles.
///
/// Timeline: settle delay, headline 1, gap, headline 2, pause, then each read
/// span (prepare, grow, pause, shrink, finish, gap), then header, button and
/// scroll indicator staggered from the header start.
pub fn intro_script(span_count: usize) -> Vec<Step<IntroCue>> {
    let mut steps = vec![Step::Wait(SETTLE_TO_INTRO_DELAY_MS)];
    for (i, line) in [Headline::First, Headline::Second].into_iter().enumerate() {
        if i > 0 {
            steps.push(Step::Wait(HEADLINE_GAP_MS));
        }
        steps.push(Step::Fire(IntroCue::ShowHeadline(line)));
        steps.push(Step::Tween {
            cue: IntroCue::WipeHeadline(line),
            step: HEADLINE_STEP,
            ease: Ease::OutQuad,
        });
    }
    steps.push(Step::Wait(HEADLINES_TO_READ_MS));

    for i in 0..span_count {
        steps.push(Step::Fire(IntroCue::PrepareSpan(i)));
        steps.push(Step::Tween {
            cue: IntroCue::GrowBand(i),
            step: BAND_STEP,
            ease: Ease::OutQuad,
        });
        steps.push(Step::Wait(BAND_PHASE_GAP_MS));
        steps.push(Step::Tween {
            cue: IntroCue::ShrinkBand(i),
            step: BAND_STEP,
            ease: Ease::OutQuad,
        });
        steps.push(Step::Fire(IntroCue::FinishSpan(i)));
        steps.push(Step::Wait(SPAN_GAP_MS));
    }

    steps.push(Step::Fire(IntroCue::RevealHeader));
    steps.push(Step::Wait(BUTTON_DELAY_MS));
    steps.push(Step::Fire(IntroCue::RevealButton));
    steps.push(Step::Wait(SCROLL_DELAY_MS - BUTTON_DELAY_MS));
    steps.push(Step::Fire(IntroCue::RevealScroll));
    steps
}

/// Percentage of a line still clipped from the right.
#[inline]
pub fn hidden_percent(eased: f32) -> f32 {
    (1.0 - eased) * 100.0
}

/// Horizontal extent of a reveal band, in px relative to the span's parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub left: f32,
    pub width: f32,
}

/// Growing band: left edge pinned, width follows progress.
pub fn grow_band(start_left: f32, span_width: f32, eased: f32) -> Band {
    Band {
        left: start_left,
        width: span_width * eased,
    }
}

/// Shrinking band plus the text clip that follows it.
///
/// The band's left edge travels right as it narrows; the returned percentage
/// is how much of the text is still clipped from the right.
pub fn shrink_band(start_left: f32, span_width: f32, eased: f32) -> (Band, f32) {
    let band = Band {
        left: start_left + span_width * eased,
        width: span_width * (1.0 - eased),
    };
    (band, 100.0 - eased * 100.0)
}
