//! Logo raster encoding
//!
//! Turns a store logo into a GS v 0 raster block. The receipt text block
//! is printed right after it, so the receipt can suppress the store name.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, GenericImageView};
use tracing::{info, instrument, warn};

use crate::commands::{ALIGN_CENTER, ALIGN_LEFT, GS, LF};
use crate::error::PrintResult;

/// Printable width in dots, safe for both 58mm and 80mm heads
pub const MAX_LOGO_WIDTH: u32 = 384;

/// Tallest raster the two-byte GS v 0 height field can describe
const MAX_LOGO_HEIGHT: u32 = u16::MAX as u32;

/// Decode a base64 logo (a `data:image/...;base64,` prefix is accepted)
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn logo_from_base64(data: &str) -> PrintResult<Vec<u8>> {
    let payload = match data.split_once(";base64,") {
        Some((_, rest)) => rest,
        None => data,
    };
    let bytes = STANDARD.decode(payload.trim()).inspect_err(|e| {
        warn!(error = %e, "logo base64 decode failed");
    })?;
    logo_from_bytes(&bytes)
}

/// Decode an encoded image (PNG, JPEG, ...) and rasterize it
#[instrument(skip(bytes), fields(bytes_len = bytes.len()))]
pub fn logo_from_bytes(bytes: &[u8]) -> PrintResult<Vec<u8>> {
    let img = image::load_from_memory(bytes).inspect_err(|e| {
        warn!(error = %e, "logo image decode failed");
    })?;
    info!(dimensions = ?img.dimensions(), "logo image decoded");
    Ok(raster_image(&img))
}

/// Encode an image as a centered GS v 0 raster block
///
/// The image is:
/// - Resized to fit max width (384 dots)
/// - Converted to 1-bit monochrome (transparent pixels print white)
pub fn raster_image(img: &DynamicImage) -> Vec<u8> {
    let (w, h) = img.dimensions();

    let (new_w, new_h) = if w > MAX_LOGO_WIDTH {
        let ratio = MAX_LOGO_WIDTH as f64 / w as f64;
        (MAX_LOGO_WIDTH, ((h as f64 * ratio) as u32).max(1))
    } else {
        (w, h)
    };
    // GS v 0 height is a two-byte field
    let new_h = new_h.min(MAX_LOGO_HEIGHT);

    let resized = img.resize_exact(new_w, new_h, image::imageops::FilterType::Nearest);
    let rgba = resized.to_rgba8();

    let x_bytes = new_w.div_ceil(8);
    let mut data = Vec::with_capacity((x_bytes * new_h) as usize + 16);

    data.extend_from_slice(&ALIGN_CENTER);

    // GS v 0 m xL xH yL yH
    data.extend_from_slice(&[GS, 0x76, 0x30, 0x00]);
    data.extend_from_slice(&(x_bytes as u16).to_le_bytes());
    data.extend_from_slice(&(new_h as u16).to_le_bytes());

    for y in 0..new_h {
        for x_byte in 0..x_bytes {
            let mut byte = 0u8;
            for bit in 0..8 {
                let x = x_byte * 8 + bit;
                if x >= new_w {
                    continue;
                }
                let pixel = rgba.get_pixel(x, y);
                if pixel[3] < 128 {
                    continue;
                }
                let luma = 0.299 * pixel[0] as f32
                    + 0.587 * pixel[1] as f32
                    + 0.114 * pixel[2] as f32;
                if luma < 128.0 {
                    byte |= 1 << (7 - bit);
                }
            }
            data.push(byte);
        }
    }

    data.push(LF);
    data.extend_from_slice(&ALIGN_LEFT);
    data
}
