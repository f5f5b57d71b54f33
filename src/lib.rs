#![cfg(target_arch = "wasm32")]
use crate::constants::{BACKDROP_SELECTOR, CONTAINER_ID};
use crate::core::{
    layout_faces, Camera, CanvasSize, EntranceAnimation, LoadTracker, RotationAxis,
};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;
mod reveal;
mod textures;

/// The hero section: canvas, cube entrance and text reveal.
///
/// Built by [`HeroController::mount`], animated by [`HeroController::start`],
/// paused by [`HeroController::suspend`] and stopped for good by
/// [`HeroController::dispose`].
pub struct HeroController {
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    // Bumped on every stop; a frame loop only runs while it matches
    loop_epoch: Rc<Cell<u64>>,
    running: bool,
    resize: Option<events::WindowListener>,
    disposed: bool,
}

impl HeroController {
    /// Build the scene inside `#canvas-container`. `Ok(None)` when the page has no container.
    pub async fn mount(document: &web::Document) -> anyhow::Result<Option<Self>> {
        let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
            log::info!("no #{CONTAINER_ID}; hero cube not mounted");
            return Ok(None);
        };
        let viewport = dom::viewport().ok_or_else(|| anyhow::anyhow!("no viewport size"))?;
        let initial_class = viewport.class();
        let profile = initial_class.profile();
        let size = CanvasSize::initial(viewport);
        let camera = Camera::for_profile(&profile, size.aspect());
        log::info!(
            "[mount] {:?} {}x{} eye={:?} target={:?}",
            initial_class,
            viewport.width,
            viewport.height,
            camera.eye(),
            camera.target()
        );

        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        dom::size_canvas(&canvas, size, dom::device_pixel_ratio());
        container
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let badge = dom::LoadingBadge::attach(document, &container);

        let axis = RotationAxis::tilted();
        let gizmo = axis.gizmo();
        log::debug!(
            "[axis] dir={:?} gizmo rot={:?} ends={:?}",
            axis.direction(),
            gizmo.rotation,
            gizmo.ends
        );
        let layouts = layout_faces(&profile);

        let inbox: textures::TextureInbox = Rc::new(RefCell::new(Vec::new()));
        let load_started = Instant::now();
        textures::spawn_face_loads(&inbox);

        let gpu = match render::GpuState::new(&canvas, &layouts).await {
            Ok(g) => Some(g),
            Err(e) => {
                log::error!("WebGPU init error, cube will not be drawn: {:?}", e);
                None
            }
        };

        let frame_ctx = frame::FrameContext {
            document: document.clone(),
            backdrop: dom::query(document, BACKDROP_SELECTOR),
            container,
            badge,
            canvas,
            camera,
            initial_class,
            animation: EntranceAnimation::new(profile, axis),
            tracker: LoadTracker::new(),
            inbox,
            load_started,
            gpu,
            intro: None,
        };
        Ok(Some(Self {
            frame_ctx: Rc::new(RefCell::new(frame_ctx)),
            loop_epoch: Rc::new(Cell::new(0)),
            running: false,
            resize: None,
            disposed: false,
        }))
    }

    /// Begin (or resume) the frame loop and follow window resizes.
    /// No-op while running or once disposed.
    pub fn start(&mut self) {
        if self.disposed || self.running {
            return;
        }
        self.running = true;
        if self.resize.is_none() {
            self.resize = events::wire_resize(&self.frame_ctx);
        }
        if let Ok(mut ctx) = self.frame_ctx.try_borrow_mut() {
            // The window may have changed while the page was hidden
            ctx.resize();
        }
        frame::start_loop(self.frame_ctx.clone(), self.loop_epoch.clone());
    }

    /// Stop drawing and settle the text reveal, keeping the scene for a later `start`.
    pub fn suspend(&mut self) {
        if !self.running {
            return;
        }
        self.stop_loop();
        if let Ok(mut ctx) = self.frame_ctx.try_borrow_mut() {
            ctx.finish_intro();
        }
        log::info!("hero cube suspended");
    }

    fn stop_loop(&mut self) {
        self.running = false;
        self.loop_epoch.set(self.loop_epoch.get().wrapping_add(1));
    }

    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.stop_loop();
        if let Some(mut listener) = self.resize.take() {
            listener.detach();
        }
        if let Ok(mut ctx) = self.frame_ctx.try_borrow_mut() {
            ctx.dispose();
        }
        log::info!("hero cube disposed");
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-cube starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(mut controller) = HeroController::mount(&document).await? else {
        return Ok(());
    };
    controller.start();

    // A page entering the back/forward cache may come back; anything else is gone
    let controller = Rc::new(RefCell::new(controller));
    let on_hide = controller.clone();
    events::wire_page_lifecycle(
        move |persisted| {
            let mut c = on_hide.borrow_mut();
            if persisted {
                c.suspend();
            } else {
                c.dispose();
            }
        },
        move |persisted| {
            if persisted {
                controller.borrow_mut().start();
            }
        },
    );
    Ok(())
}
