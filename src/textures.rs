use crate::constants::FACE_IMAGE_URLS;
use crate::core::{decode_image, AssetError, CubeFace, DecodedImage};
use js_sys::Uint8Array;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub type FaceImageResult = (CubeFace, Result<DecodedImage, AssetError>);

/// Completed face loads waiting for the next frame to pick them up.
pub type TextureInbox = Rc<RefCell<Vec<FaceImageResult>>>;

/// Start one fetch per face. Results land in `inbox` in completion order.
pub fn spawn_face_loads(inbox: &TextureInbox) {
    for face in CubeFace::ALL {
        let url = FACE_IMAGE_URLS[face.index()];
        let inbox = inbox.clone();
        spawn_local(async move {
            let result = load_face_image(url).await;
            inbox.borrow_mut().push((face, result));
        });
    }
}

async fn load_face_image(url: &str) -> Result<DecodedImage, AssetError> {
    let bytes = fetch_bytes(url).await?;
    decode_image(url, &bytes)
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, AssetError> {
    let fetch_err = |e: wasm_bindgen::JsValue| AssetError::Fetch {
        url: url.to_string(),
        reason: format!("{:?}", e),
    };
    let window = web::window().ok_or_else(|| AssetError::Fetch {
        url: url.to_string(),
        reason: "no window".to_string(),
    })?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(fetch_err)?;
    let resp: web::Response = resp_value.dyn_into().map_err(fetch_err)?;
    if !resp.ok() {
        return Err(AssetError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?;
    Ok(Uint8Array::new(&buf).to_vec())
}
