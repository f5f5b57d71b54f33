use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A window event listener that stays registered until `detach` (or drop).
pub struct WindowListener {
    event: &'static str,
    closure: Option<Closure<dyn FnMut(web::Event)>>,
}

impl WindowListener {
    fn attach(event: &'static str, handler: impl FnMut(web::Event) + 'static) -> Option<Self> {
        let window = web::window()?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::error!("could not listen for {event}: {e:?}");
            return None;
        }
        Some(Self {
            event,
            closure: Some(closure),
        })
    }

    pub fn detach(&mut self) {
        let Some(closure) = self.closure.take() else {
            return;
        };
        if let Some(window) = web::window() {
            _ = window
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        self.detach();
    }
}

pub fn wire_resize(frame_ctx: &Rc<RefCell<FrameContext>>) -> Option<WindowListener> {
    let frame_ctx = frame_ctx.clone();
    WindowListener::attach("resize", move |_ev: web::Event| {
        // A frame may hold the context; skip this event rather than panic
        if let Ok(mut ctx) = frame_ctx.try_borrow_mut() {
            ctx.resize();
        }
    })
}

/// Route `pagehide` and `pageshow` to the callbacks with the event's
/// `persisted` flag (true when the page is in the back/forward cache).
///
/// Lives as long as the page does.
pub fn wire_page_lifecycle(
    on_hide: impl FnMut(bool) + 'static,
    on_show: impl FnMut(bool) + 'static,
) {
    forget_window_listener("pagehide", on_hide);
    forget_window_listener("pageshow", on_show);
}

fn forget_window_listener(event: &str, mut handler: impl FnMut(bool) + 'static) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .map(|e| e.persisted())
            .unwrap_or(false);
        handler(persisted);
    }) as Box<dyn FnMut(web::Event)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
