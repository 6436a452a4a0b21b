//! Shared helpers for integration tests: in-memory test images.

#![allow(dead_code)]

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

/// Encodes a blank RGBA image of the given size.
pub fn encode_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    RgbaImage::new(width, height)
        .write_to(&mut buffer, format)
        .expect("encoding a blank test image should succeed");
    buffer.into_inner()
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encode_image(width, height, ImageFormat::Png)
}

pub fn ico_bytes(width: u32, height: u32) -> Vec<u8> {
    encode_image(width, height, ImageFormat::Ico)
}

/// Lists file names in `dir`, sorted.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("directory should exist")
        .map(|entry| {
            entry
                .expect("readable entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

/// Host directory name the pipeline uses for a mock server (`127.0.0.1:PORT`).
pub fn mock_domain(server_uri: &str) -> String {
    server_uri
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .to_string()
}
