// Host-side tests for face image decoding.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod asset {
    include!("../src/core/asset.rs");
}

use asset::*;
use image::{ImageFormat, Rgba, RgbaImage};
use std::error::Error;
use std::io::Cursor;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([x as u8 * 10, y as u8 * 10, 200, if x == 0 { 0 } else { 255 }])
    });
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .expect("encode test png");
    out.into_inner()
}

#[test]
fn decodes_png_to_straight_rgba() {
    let decoded = decode_image("/img/test.png", &png_bytes(3, 2)).expect("decode");
    assert_eq!((decoded.width, decoded.height), (3, 2));
    assert_eq!(decoded.rgba.len(), 3 * 2 * 4);
    assert_eq!(decoded.bytes_per_row(), 12);
    // pixel (1, 1), row-major from the top
    let px = &decoded.rgba[(3 + 1) * 4..(3 + 1) * 4 + 4];
    assert_eq!(px, &[10, 10, 200, 255]);
    // transparent column keeps its color channels untouched
    assert_eq!(&decoded.rgba[4 * 3..4 * 3 + 4], &[0, 10, 200, 0]);
}

#[test]
fn garbage_bytes_report_decode_error() {
    let err = decode_image("/img/broken.png", b"not an image").unwrap_err();
    assert!(matches!(err, AssetError::Decode { .. }));
    assert!(err.to_string().contains("/img/broken.png"));
    assert!(err.source().is_some());
}

#[test]
fn error_messages_name_the_url() {
    let status = AssetError::Status {
        url: "/a.png".into(),
        status: 404,
    };
    assert_eq!(status.to_string(), "/a.png answered with HTTP 404");
    let fetch = AssetError::Fetch {
        url: "/b.png".into(),
        reason: "offline".into(),
    };
    assert_eq!(fetch.to_string(), "request for /b.png failed: offline");
}

#[test]
fn placeholder_is_one_transparent_pixel() {
    let p = DecodedImage::transparent_pixel();
    assert_eq!((p.width, p.height), (1, 1));
    assert_eq!(p.rgba, vec![0, 0, 0, 0]);
    assert_eq!(p.bytes_per_row(), 4);
}
