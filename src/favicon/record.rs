//! Downloaded favicon records and their pixel resolution.

use std::fmt;
use std::io::Cursor;

use image::ImageReader;
use tracing::trace;

/// Decoded pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Resolution recorded for images that could not be decoded.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a resolution.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixel area, the ranking key.
    #[must_use]
    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(u32, u32)> for Resolution {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// A favicon candidate that answered with `200 OK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaviconRecord {
    url: String,
    bytes: Vec<u8>,
    resolution: Resolution,
}

impl FaviconRecord {
    /// Creates a record, reading the resolution from `bytes`.
    #[must_use]
    pub fn from_download(url: impl Into<String>, bytes: Vec<u8>) -> Self {
        let resolution = image_resolution(&bytes);
        Self::new(url, bytes, resolution)
    }

    /// Creates a record with a known resolution.
    #[must_use]
    pub fn new(url: impl Into<String>, bytes: Vec<u8>, resolution: Resolution) -> Self {
        Self {
            url: url.into(),
            bytes,
            resolution,
        }
    }

    /// Source URL of the image.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Raw response body.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Decoded resolution, or [`Resolution::ZERO`] if decoding failed.
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }
}

/// Reads pixel dimensions from encoded image bytes.
///
/// The format is guessed from content, not from the URL. Any failure
/// (unknown format, truncated header, HTML error page served as 200) yields
/// [`Resolution::ZERO`] instead of an error.
#[must_use]
pub fn image_resolution(bytes: &[u8]) -> Resolution {
    let dimensions = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)
        .and_then(ImageReader::into_dimensions);
    match dimensions {
        Ok(dimensions) => Resolution::from(dimensions),
        Err(error) => {
            trace!(%error, "image could not be decoded");
            Resolution::ZERO
        }
    }
}
