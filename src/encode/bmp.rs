//! 24-bit uncompressed grayscale BMP writer.
//!
//! Layout: 14-byte `BITMAPFILEHEADER`, 40-byte `BITMAPINFOHEADER`, then bottom-up rows of
//! B, G, R triplets padded to a 4-byte boundary. Every triplet carries the same luma value.

use crate::foundation::error::{QuoteError, QuoteResult};
use crate::render::surface::Frame;

const FILE_HEADER_LEN: usize = 14;
const INFO_HEADER_LEN: usize = 40;
const PIXEL_OFFSET: usize = FILE_HEADER_LEN + INFO_HEADER_LEN;
/// 2835 pixels per meter, roughly 72 DPI.
const PIXELS_PER_METER: i32 = 2835;

/// An encoded BMP file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BmpImage {
    /// Complete file contents.
    pub bytes: Vec<u8>,
}

impl BmpImage {
    /// Default download file name.
    pub const FILE_NAME: &'static str = "quote-screen.bmp";
    /// MIME type of the encoded bytes.
    pub const MIME_TYPE: &'static str = "image/bmp";

    /// Consume the image and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Bytes per stored row: three per pixel, rounded up to a multiple of four.
pub fn bmp_row_size(width: u32) -> usize {
    (width as usize * 3).div_ceil(4) * 4
}

/// ITU-R BT.601 luma of an RGB triplet.
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b))
        .round()
        .clamp(0.0, 255.0) as u8
}

/// Encode `frame` as a grayscale 24-bit BMP of `width x height`.
///
/// Fails when the dimensions are zero, exceed `i32`, or disagree with the frame.
pub fn encode_bmp(frame: &Frame, width: u32, height: u32) -> QuoteResult<BmpImage> {
    if width == 0 || height == 0 {
        return Err(QuoteError::encoding("BMP width and height must be > 0"));
    }
    let width_i32 = i32::try_from(width)
        .map_err(|_| QuoteError::encoding("BMP width exceeds i32"))?;
    let height_i32 = i32::try_from(height)
        .map_err(|_| QuoteError::encoding("BMP height exceeds i32"))?;
    if frame.width != width || frame.height != height {
        return Err(QuoteError::encoding(format!(
            "frame is {}x{} but {width}x{height} was requested",
            frame.width, frame.height
        )));
    }
    let w = width as usize;
    let h = height as usize;
    if frame.data.len() != w * h * 4 {
        return Err(QuoteError::encoding(
            "frame buffer length does not match width*height*4",
        ));
    }

    let row_size = bmp_row_size(width);
    let pixel_data_len = row_size
        .checked_mul(h)
        .ok_or_else(|| QuoteError::encoding("BMP pixel data size overflow"))?;
    let file_len = PIXEL_OFFSET + pixel_data_len;
    let file_len_u32 = u32::try_from(file_len)
        .map_err(|_| QuoteError::encoding("BMP file size exceeds u32"))?;

    let mut out = Vec::with_capacity(file_len);

    // BITMAPFILEHEADER
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_len_u32.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&(PIXEL_OFFSET as u32).to_le_bytes());

    // BITMAPINFOHEADER
    out.extend_from_slice(&(INFO_HEADER_LEN as u32).to_le_bytes());
    out.extend_from_slice(&width_i32.to_le_bytes());
    out.extend_from_slice(&height_i32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&(pixel_data_len as u32).to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    debug_assert_eq!(out.len(), PIXEL_OFFSET);

    let padding = row_size - w * 3;
    for row in frame.data.chunks_exact(w * 4).rev() {
        for px in row.chunks_exact(4) {
            let y = luma(px[0], px[1], px[2]);
            out.extend_from_slice(&[y, y, y]);
        }
        out.resize(out.len() + padding, 0);
    }

    tracing::debug!(width, height, bytes = out.len(), "encoded bmp");
    Ok(BmpImage { bytes: out })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/bmp.rs"]
mod tests;
