use crate::constants::ANIMATING_CLASS;
use crate::core::{
    Camera, CanvasSize, DeviceClass, EntranceAnimation, LoadOutcome, LoadTracker, Transition,
};
use crate::dom::{self, LoadingBadge};
use crate::render;
use crate::reveal::IntroRun;
use crate::textures::TextureInbox;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub document: web::Document,
    pub container: web::Element,
    pub backdrop: Option<web::HtmlElement>,
    pub badge: LoadingBadge,
    pub canvas: web::HtmlCanvasElement,

    pub camera: Camera,
    pub initial_class: DeviceClass,
    pub animation: EntranceAnimation,

    pub tracker: LoadTracker,
    pub inbox: TextureInbox,
    pub load_started: Instant,

    pub gpu: Option<render::GpuState>,
    pub intro: Option<IntroRun>,
}

impl FrameContext {
    pub fn frame(&mut self, now_ms: f64) {
        self.collect_textures();

        let outcome = self.animation.frame(now_ms, self.tracker.is_complete());
        match outcome.transition {
            Some(Transition::Entered) => {
                log::info!("[entrance] started");
                _ = self.container.class_list().add_1(ANIMATING_CLASS);
            }
            Some(Transition::Settled) => {
                log::info!(
                    "[entrance] settled after {} frames",
                    self.animation.accepted_frames()
                );
                _ = self.container.class_list().remove_1(ANIMATING_CLASS);
                if self.intro.is_none() {
                    self.intro = Some(IntroRun::begin(&self.document, now_ms));
                }
            }
            None => {}
        }

        if outcome.advanced {
            log::debug!("[entrance] progress {:.3}", self.animation.progress());
            if let Some(bg) = &self.backdrop {
                let opacity = self.animation.pose().backdrop_opacity;
                dom::set_style(bg, "opacity", &opacity.to_string());
            }
        }

        if outcome.accepted {
            if let Some(g) = &mut self.gpu {
                g.resize_if_needed(self.canvas.width(), self.canvas.height());
                if let Err(e) = g.render(&self.camera, self.animation.pose()) {
                    log::error!("render error: {:?}", e);
                }
            }
        }

        if let Some(intro) = &mut self.intro {
            intro.advance(now_ms);
            if intro.is_finished() {
                log::info!("[intro] done");
                self.intro = None;
            }
        }
    }

    /// Move finished face loads onto the GPU and into the tracker.
    fn collect_textures(&mut self) {
        if self.tracker.is_complete() {
            return;
        }
        let arrived: Vec<_> = self.inbox.borrow_mut().drain(..).collect();
        if arrived.is_empty() {
            return;
        }
        for (face, result) in arrived {
            let outcome = match result {
                Ok(image) => {
                    if let Some(g) = &mut self.gpu {
                        g.set_face_image(face, &image);
                    }
                    LoadOutcome::Loaded
                }
                Err(e) => {
                    log::error!("[textures] {} face: {}", face.name(), e);
                    LoadOutcome::Failed
                }
            };
            if self.tracker.resolve(face, outcome) {
                log::info!(
                    "[textures] {} resolved ({} failed) in {:.0}ms",
                    self.tracker.total(),
                    self.tracker.failed(),
                    self.load_started.elapsed().as_secs_f64() * 1000.0
                );
                self.badge.remove();
            }
        }
        if !self.tracker.is_complete() {
            self.badge.set_percent(self.tracker.percent());
        }
    }

    /// Re-fit canvas and camera to the window. The camera placement stays put.
    pub fn resize(&mut self) {
        let Some(viewport) = dom::viewport() else {
            return;
        };
        let size = CanvasSize::after_resize(viewport, self.initial_class);
        self.camera.set_aspect(size.aspect());
        let (w, h) = dom::size_canvas(&self.canvas, size, dom::device_pixel_ratio());
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
        }
        log::debug!("[resize] {}x{} css, {}x{} px", size.width, size.height, w, h);
    }

    /// Settle any running text reveal immediately so the page is left usable.
    pub fn finish_intro(&mut self) {
        if let Some(mut intro) = self.intro.take() {
            intro.finish_now();
        }
    }

    /// Leave the page as the frame loop last drew it, minus transient overlays.
    pub fn dispose(&mut self) {
        self.finish_intro();
        self.badge.remove();
        log::info!("[entrance] stopped in {:?}", self.animation.phase());
    }
}

/// Drive `frame_ctx` from requestAnimationFrame while `epoch` still holds
/// the value it had at the call. Bumping the epoch stops this loop, and a
/// callback already queued from a stopped loop cannot revive it.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, epoch: Rc<Cell<u64>>) {
    let own_epoch = epoch.get();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        if epoch.get() != own_epoch {
            return;
        }
        frame_ctx.borrow_mut().frame(now_ms);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
