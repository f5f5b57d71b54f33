// Host-side tests for the intro sequencer, its script and the band geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod motion {
    include!("../src/core/motion.rs");
}
mod intro {
    include!("../src/core/intro.rs");
}

use intro::*;
use motion::Ease;

const TICK: f64 = 16.0;

/// Records every cue with the virtual time it fired at.
#[derive(Default)]
struct Recorder {
    now_ms: f64,
    fired: Vec<(f64, IntroCue)>,
    tweens: Vec<(IntroCue, f32)>,
}

impl Stage<IntroCue> for Recorder {
    fn fire(&mut self, cue: &IntroCue) {
        self.fired.push((self.now_ms, *cue));
    }
    fn tween(&mut self, cue: &IntroCue, eased: f32) {
        self.tweens.push((*cue, eased));
    }
}

/// Poll at a fixed rate until the sequencer finishes, noting when each cue fired.
fn run_script(span_count: usize, poll_ms: f64) -> Recorder {
    let mut seq = Sequencer::new(intro_script(span_count), TICK, 0.0);
    let mut rec = Recorder::default();
    let mut now = 0.0;
    while !seq.is_finished() {
        now += poll_ms;
        rec.now_ms = now;
        seq.advance_to(now, &mut rec);
        assert!(now < 60_000.0, "script never finished");
    }
    rec
}

fn fire_time(rec: &Recorder, cue: IntroCue) -> f64 {
    rec.fired
        .iter()
        .find(|(_, c)| *c == cue)
        .map(|(t, _)| *t)
        .unwrap_or_else(|| panic!("{:?} never fired", cue))
}

#[test]
fn script_fires_in_order() {
    let rec = run_script(2, 1.0);
    let cues: Vec<_> = rec.fired.iter().map(|(_, c)| *c).collect();
    assert_eq!(
        cues,
        vec![
            IntroCue::ShowHeadline(Headline::First),
            IntroCue::ShowHeadline(Headline::Second),
            IntroCue::PrepareSpan(0),
            IntroCue::FinishSpan(0),
            IntroCue::PrepareSpan(1),
            IntroCue::FinishSpan(1),
            IntroCue::RevealHeader,
            IntroCue::RevealButton,
            IntroCue::RevealScroll,
        ]
    );
}

#[test]
fn final_reveal_is_staggered_from_header() {
    let rec = run_script(1, 1.0);
    let header = fire_time(&rec, IntroCue::RevealHeader);
    assert_eq!(fire_time(&rec, IntroCue::RevealButton) - header, 600.0);
    assert_eq!(fire_time(&rec, IntroCue::RevealScroll) - header, 1200.0);
}

#[test]
fn final_reveal_runs_without_read_spans() {
    let rec = run_script(0, 1.0);
    assert!(rec.fired.iter().any(|(_, c)| *c == IntroCue::RevealScroll));
    assert!(!rec
        .fired
        .iter()
        .any(|(_, c)| matches!(c, IntroCue::PrepareSpan(_))));
}

#[test]
fn second_headline_waits_for_first_wipe() {
    let rec = run_script(0, 1.0);
    let first = fire_time(&rec, IntroCue::ShowHeadline(Headline::First));
    let second = fire_time(&rec, IntroCue::ShowHeadline(Headline::Second));
    // 0.03 per tick reaches 1 on tick 34
    assert_eq!(first, 150.0);
    assert_eq!(second - first, 34.0 * TICK + 100.0);
}

#[test]
fn polling_rate_does_not_change_timeline() {
    let fine = run_script(1, 1.0);
    let coarse = run_script(1, 250.0);
    let fine_cues: Vec<_> = fine.fired.iter().map(|(_, c)| *c).collect();
    let coarse_cues: Vec<_> = coarse.fired.iter().map(|(_, c)| *c).collect();
    assert_eq!(fine_cues, coarse_cues);
    assert_eq!(fine.tweens, coarse.tweens);
}

#[test]
fn tweens_end_exactly_at_full_progress() {
    let rec = run_script(1, 5.0);
    for cue in [
        IntroCue::WipeHeadline(Headline::First),
        IntroCue::WipeHeadline(Headline::Second),
        IntroCue::GrowBand(0),
        IntroCue::ShrinkBand(0),
    ] {
        let values: Vec<f32> = rec
            .tweens
            .iter()
            .filter(|(c, _)| *c == cue)
            .map(|(_, v)| *v)
            .collect();
        assert!(!values.is_empty(), "{:?}", cue);
        assert_eq!(*values.last().unwrap(), 1.0, "{:?}", cue);
        assert!(values.windows(2).all(|w| w[1] >= w[0]), "{:?}", cue);
    }
}

#[test]
fn band_tweens_take_23_ticks() {
    let rec = run_script(1, 1.0);
    let grow = rec
        .tweens
        .iter()
        .filter(|(c, _)| *c == IntroCue::GrowBand(0))
        .count();
    assert_eq!(grow, 23);
}

#[test]
fn cancel_stops_everything() {
    let mut seq = Sequencer::new(intro_script(3), TICK, 1000.0);
    let mut rec = Recorder::default();
    seq.advance_to(1200.0, &mut rec);
    let fired = rec.fired.len();
    let tweens = rec.tweens.len();
    assert!(fired > 0);

    seq.cancel();
    assert!(seq.is_cancelled());
    assert!(seq.is_finished());
    seq.advance_to(100_000.0, &mut rec);
    assert_eq!(rec.fired.len(), fired);
    assert_eq!(rec.tweens.len(), tweens);
}

#[test]
fn fast_forward_mid_run_leaves_final_reveal() {
    let mut seq = Sequencer::new(intro_script(2), TICK, 0.0);
    let mut rec = Recorder::default();
    seq.advance_to(1200.0, &mut rec);
    assert!(!seq.is_finished());

    seq.fast_forward(&mut rec);
    assert!(seq.is_finished());
    for cue in [
        IntroCue::FinishSpan(0),
        IntroCue::FinishSpan(1),
        IntroCue::RevealHeader,
        IntroCue::RevealButton,
        IntroCue::RevealScroll,
    ] {
        assert!(rec.fired.iter().any(|(_, c)| *c == cue), "{:?} missing", cue);
    }
    for cue in [
        IntroCue::WipeHeadline(Headline::Second),
        IntroCue::GrowBand(1),
        IntroCue::ShrinkBand(0),
        IntroCue::ShrinkBand(1),
    ] {
        let last = rec.tweens.iter().rev().find(|(c, _)| *c == cue).map(|(_, v)| *v);
        assert_eq!(last, Some(1.0), "{:?} not driven to the end", cue);
    }
}

#[test]
fn fast_forward_fires_same_cues_as_full_run() {
    let full = run_script(3, TICK);
    let mut seq = Sequencer::new(intro_script(3), TICK, 0.0);
    let mut rec = Recorder::default();
    seq.fast_forward(&mut rec);
    let order = |r: &Recorder| r.fired.iter().map(|(_, c)| *c).collect::<Vec<_>>();
    assert_eq!(order(&rec), order(&full));
}

#[test]
fn fast_forward_after_cancel_is_silent() {
    let mut seq = Sequencer::new(intro_script(1), TICK, 0.0);
    let mut rec = Recorder::default();
    seq.cancel();
    seq.fast_forward(&mut rec);
    assert!(rec.fired.is_empty());
    assert!(rec.tweens.is_empty());
}

#[test]
fn nothing_fires_before_origin() {
    let mut seq = Sequencer::new(intro_script(1), TICK, 5000.0);
    let mut rec = Recorder::default();
    seq.advance_to(4000.0, &mut rec);
    seq.advance_to(5149.0, &mut rec);
    assert!(rec.fired.is_empty());
    assert_eq!(seq.cursor_ms(), 0.0);
}

#[test]
fn generic_sequencer_handles_plain_cues() {
    struct Log(Vec<&'static str>);
    impl Stage<&'static str> for Log {
        fn fire(&mut self, cue: &&'static str) {
            self.0.push(*cue);
        }
        fn tween(&mut self, _cue: &&'static str, _eased: f32) {
            self.0.push("tick");
        }
    }
    let steps = vec![
        Step::Fire("a"),
        Step::Tween {
            cue: "t",
            step: 0.5,
            ease: Ease::Linear,
        },
        Step::Wait(10.0),
        Step::Fire("b"),
    ];
    let mut seq = Sequencer::new(steps, 4.0, 0.0);
    let mut log = Log(Vec::new());
    seq.advance_to(7.0, &mut log);
    assert_eq!(log.0, ["a", "tick"]);
    seq.advance_to(17.0, &mut log);
    assert_eq!(log.0, ["a", "tick", "tick"]);
    assert_eq!(seq.remaining(), 2);
    seq.advance_to(18.0, &mut log);
    assert_eq!(log.0, ["a", "tick", "tick", "b"]);
    assert!(seq.is_finished());
}

#[test]
fn headline_clip_follows_eased_progress() {
    assert_eq!(hidden_percent(0.0), 100.0);
    assert_eq!(hidden_percent(1.0), 0.0);
    assert!((hidden_percent(Ease::OutQuad.apply(0.5)) - 25.0).abs() < 1e-4);
}

#[test]
fn band_grows_then_shrinks_from_left() {
    let grown = grow_band(12.0, 200.0, 0.5);
    assert_eq!(grown, Band { left: 12.0, width: 100.0 });
    assert_eq!(grow_band(12.0, 200.0, 1.0).width, 200.0);

    let (band, hidden) = shrink_band(12.0, 200.0, 0.25);
    assert_eq!(band, Band { left: 62.0, width: 150.0 });
    assert_eq!(hidden, 75.0);

    let (gone, clear) = shrink_band(12.0, 200.0, 1.0);
    assert_eq!(gone.width, 0.0);
    assert_eq!(gone.left + gone.width, 212.0);
    assert_eq!(clear, 0.0);
}
