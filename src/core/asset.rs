use thiserror::Error;

/// Why a face image did not make it to the GPU.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("request for {url} failed: {reason}")]
    Fetch { url: String, reason: String },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode {url}")]
    Decode {
        url: String,
        #[source]
        source: image::ImageError,
    },
}

/// Straight-alpha RGBA8 pixels, rows top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    /// Stand-in for faces whose image has not arrived or failed.
    pub fn transparent_pixel() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![0, 0, 0, 0],
        }
    }

    #[inline]
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}

pub fn decode_image(url: &str, bytes: &[u8]) -> Result<DecodedImage, AssetError> {
    let img = image::load_from_memory(bytes).map_err(|source| AssetError::Decode {
        url: url.to_string(),
        source,
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(DecodedImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}
