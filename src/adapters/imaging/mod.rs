//! Image preparation adapter
//!
//! JPEG encoding for request payloads and centre-cropping to the aspect
//! ratio of a capture area, built on the `image` crate.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageResult};

/// JPEG quality used for every upload
pub const JPEG_QUALITY: u8 = 50;

/// A crop rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width
    pub width: u32,
    /// Height
    pub height: u32,
}

/// Encode an image as JPEG at [`JPEG_QUALITY`]
///
/// Alpha is dropped; JPEG has no transparency.
pub fn encode_jpeg(image: &DynamicImage) -> ImageResult<Vec<u8>> {
    let rgb = image.to_rgb8();
    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY).encode(
        rgb.as_raw(),
        rgb.width(),
        rgb.height(),
        ColorType::Rgb8,
    )?;
    Ok(buffer.into_inner())
}

/// Largest centred rectangle of an image with the aspect ratio of `bounds`
///
/// The image keeps its full height when it is relatively wider than the
/// bounds, and its full width otherwise. Degenerate bounds yield the
/// whole image.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn aspect_crop_rect(width: u32, height: u32, bounds_width: u32, bounds_height: u32) -> CropRect {
    let full = CropRect {
        x: 0,
        y: 0,
        width,
        height,
    };
    if width == 0 || height == 0 || bounds_width == 0 || bounds_height == 0 {
        return full;
    }

    let aspect_x = f64::from(width) / f64::from(bounds_width);
    let aspect_y = f64::from(height) / f64::from(bounds_height);

    if aspect_x > aspect_y {
        let target = (f64::from(bounds_width) / f64::from(bounds_height) * f64::from(height))
            .round()
            .clamp(1.0, f64::from(width)) as u32;
        CropRect {
            x: (width - target) / 2,
            y: 0,
            width: target,
            height,
        }
    } else {
        let target = (f64::from(bounds_height) / f64::from(bounds_width) * f64::from(width))
            .round()
            .clamp(1.0, f64::from(height)) as u32;
        CropRect {
            x: 0,
            y: (height - target) / 2,
            width,
            height: target,
        }
    }
}

/// Centre-crop `image` to the aspect ratio of `bounds_width` x `bounds_height`
#[must_use]
pub fn crop_to_aspect(image: &DynamicImage, bounds_width: u32, bounds_height: u32) -> DynamicImage {
    let rect = aspect_crop_rect(image.width(), image.height(), bounds_width, bounds_height);
    image.crop_imm(rect.x, rect.y, rect.width, rect.height)
}
