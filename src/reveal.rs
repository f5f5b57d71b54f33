use crate::constants::*;
use crate::core::{
    grow_band, hidden_percent, intro_script, shrink_band, Band, Headline, IntroCue, Sequencer,
    Stage,
};
use crate::core::constants::INTRO_TICK_MS;
use crate::dom;
use web_sys as web;

#[inline]
fn clip_right(el: &web::HtmlElement, hidden_pct: f32) {
    dom::set_style(el, "clip-path", &format!("inset(0 {hidden_pct}% 0 0)"));
}

/// Band overlay currently covering one read span.
struct LiveBand {
    span: usize,
    el: web::HtmlElement,
    start_left: f32,
    width: f32,
}

impl LiveBand {
    fn place(&self, band: Band) {
        dom::set_style(&self.el, "left", &format!("{}px", band.left));
        dom::set_style(&self.el, "width", &format!("{}px", band.width));
    }
}

/// DOM side of the intro: applies sequencer cues to the page.
///
/// Elements are looked up once when the stage is built; any that are missing
/// simply make their cues no-ops.
pub struct DomStage {
    document: web::Document,
    headlines: [Option<web::HtmlElement>; 2],
    spans: Vec<web::HtmlElement>,
    header: Option<web::HtmlElement>,
    button: Option<web::HtmlElement>,
    scroll: Option<web::HtmlElement>,
    band: Option<LiveBand>,
}

impl DomStage {
    pub fn new(document: &web::Document) -> Self {
        Self {
            document: document.clone(),
            headlines: HEADLINE_SELECTORS.map(|sel| dom::query(document, sel)),
            spans: dom::query_all(document, READ_SPAN_SELECTOR),
            header: dom::query(document, HEADER_SELECTOR),
            button: dom::query(document, BUTTON_SELECTOR),
            scroll: dom::query(document, SCROLL_SELECTOR),
            band: None,
        }
    }

    #[inline]
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    fn headline(&self, line: Headline) -> Option<&web::HtmlElement> {
        let i = match line {
            Headline::First => 0,
            Headline::Second => 1,
        };
        self.headlines[i].as_ref()
    }

    fn prepare_span(&mut self, i: usize) {
        self.drop_band();
        let Some(span) = self.spans.get(i) else {
            return;
        };
        dom::set_style(span, "position", "relative");
        dom::set_style(span, "display", "inline-block");
        dom::set_style(span, "opacity", "1");
        let width = span.offset_width() as f32;
        let height = span.offset_height() as f32;
        log::debug!("[intro] span {i} {width}x{height}");
        clip_right(span, 100.0);

        let Some(parent) = span.parent_element() else {
            return;
        };
        let Some(el) = dom::create_div(&self.document) else {
            return;
        };
        let span_rect = span.get_bounding_client_rect();
        let parent_rect = parent.get_bounding_client_rect();
        let start_left = (span_rect.left() - parent_rect.left()) as f32;
        let top = (span_rect.top() - parent_rect.top()) as f32;
        dom::set_style(&el, "position", "absolute");
        dom::set_style(&el, "top", &format!("{top}px"));
        dom::set_style(&el, "left", &format!("{start_left}px"));
        dom::set_style(&el, "width", "0");
        dom::set_style(&el, "height", &format!("{height}px"));
        dom::set_style(&el, "background-image", BAND_GRADIENT);
        dom::set_style(&el, "pointer-events", "none");
        dom::set_style(&el, "z-index", BAND_Z_INDEX);
        if parent.append_child(&el).is_err() {
            return;
        }
        self.band = Some(LiveBand {
            span: i,
            el,
            start_left,
            width,
        });
    }

    fn live_band(&self, span: usize) -> Option<&LiveBand> {
        self.band.as_ref().filter(|b| b.span == span)
    }

    fn finish_span(&mut self, i: usize) {
        if self.live_band(i).is_some() {
            self.drop_band();
        }
        if let Some(span) = self.spans.get(i) {
            dom::set_style(span, "clip-path", "none");
        }
    }

    /// Detach the band overlay, if any. Safe to call repeatedly.
    pub fn drop_band(&mut self) {
        if let Some(band) = self.band.take() {
            band.el.remove();
        }
    }
}

impl Stage<IntroCue> for DomStage {
    fn fire(&mut self, cue: &IntroCue) {
        match *cue {
            IntroCue::ShowHeadline(line) => {
                if let Some(el) = self.headline(line) {
                    clip_right(el, 100.0);
                    dom::set_style(el, "opacity", "1");
                }
            }
            IntroCue::PrepareSpan(i) => self.prepare_span(i),
            IntroCue::FinishSpan(i) => self.finish_span(i),
            IntroCue::RevealHeader => {
                if let Some(el) = &self.header {
                    dom::set_style(el, "transition", SLIDE_TRANSITION);
                    dom::set_style(el, "transform", "translateY(0)");
                }
            }
            IntroCue::RevealButton => {
                if let Some(el) = &self.button {
                    dom::set_style(el, "transition", SLIDE_TRANSITION);
                    dom::set_style(el, "transform", "translateX(0)");
                }
            }
            IntroCue::RevealScroll => {
                if let Some(el) = &self.scroll {
                    dom::set_style(el, "transition", FADE_TRANSITION);
                    dom::set_style(el, "opacity", "1");
                }
            }
            IntroCue::WipeHeadline(_) | IntroCue::GrowBand(_) | IntroCue::ShrinkBand(_) => {}
        }
    }

    fn tween(&mut self, cue: &IntroCue, eased: f32) {
        match *cue {
            IntroCue::WipeHeadline(line) => {
                if let Some(el) = self.headline(line) {
                    clip_right(el, hidden_percent(eased));
                }
            }
            IntroCue::GrowBand(i) => {
                if let Some(band) = self.live_band(i) {
                    band.place(grow_band(band.start_left, band.width, eased));
                }
            }
            IntroCue::ShrinkBand(i) => {
                let Some(band) = self.live_band(i) else {
                    return;
                };
                let (rect, text_hidden) = shrink_band(band.start_left, band.width, eased);
                band.place(rect);
                if let Some(span) = self.spans.get(i) {
                    clip_right(span, text_hidden);
                }
            }
            _ => {}
        }
    }
}

/// The running text reveal: script, clock and the DOM it drives.
pub struct IntroRun {
    sequencer: Sequencer<IntroCue>,
    stage: DomStage,
}

impl IntroRun {
    /// Build the reveal anchored at `now_ms` (the moment the entrance settled).
    pub fn begin(document: &web::Document, now_ms: f64) -> Self {
        let stage = DomStage::new(document);
        let steps = intro_script(stage.span_count());
        log::info!(
            "[intro] scheduled: {} read spans, {} steps",
            stage.span_count(),
            steps.len()
        );
        Self {
            sequencer: Sequencer::new(steps, INTRO_TICK_MS, now_ms),
            stage,
        }
    }

    pub fn advance(&mut self, now_ms: f64) {
        self.sequencer.advance_to(now_ms, &mut self.stage);
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.sequencer.is_finished()
    }

    /// Jump to the end state: every pending cue applied and no band left
    /// behind. Later `advance` calls do nothing.
    pub fn finish_now(&mut self) {
        if self.sequencer.is_cancelled() {
            return;
        }
        log::info!("[intro] skipping {} pending steps", self.sequencer.remaining());
        self.sequencer.fast_forward(&mut self.stage);
        self.sequencer.cancel();
        self.stage.drop_band();
    }
}
