use crate::constants::{LOADING_STYLE, LOADING_TEXT};
use crate::core::{CanvasSize, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current inner window size; `None` outside a browser window.
pub fn viewport() -> Option<Viewport> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width as f32, height as f32))
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|dpr| *dpr > 0.0)
        .unwrap_or(1.0)
}

/// First element matching `selector`, as an `HtmlElement`.
pub fn query(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::debug!("style {property}={value} rejected: {e:?}");
    }
}

pub fn create_div(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Apply a CSS size to the canvas and match its backing store to the DPR.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, size: CanvasSize, dpr: f64) -> (u32, u32) {
    set_style(canvas, "width", &format!("{}px", size.width));
    set_style(canvas, "height", &format!("{}px", size.height));
    let (w_px, h_px) = size.backing_size(dpr);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}

/// "Loading..." text centered in the container until every face resolves.
pub struct LoadingBadge {
    el: Option<web::HtmlElement>,
}

impl LoadingBadge {
    pub fn attach(document: &web::Document, container: &web::Element) -> Self {
        let el = create_div(document);
        if let Some(el) = &el {
            _ = el.set_attribute("style", LOADING_STYLE);
            el.set_text_content(Some(LOADING_TEXT));
            if container.append_child(el).is_err() {
                log::debug!("loading badge could not be attached");
            }
        }
        Self { el }
    }

    pub fn set_percent(&self, percent: u32) {
        if let Some(el) = &self.el {
            el.set_text_content(Some(&format!("{LOADING_TEXT} {percent}%")));
        }
    }

    pub fn remove(&mut self) {
        if let Some(el) = self.el.take() {
            el.remove();
        }
    }
}
