use std::io::Cursor;

use bytes::Bytes;
use image::{imageops::FilterType, DynamicImage, ImageOutputFormat};

use crate::tryon::{errors::TryOnApiError, models::normalized_image::NormalizedImage};

pub static MAX_DIMENSION: u32 = 1024;
pub static JPEG_QUALITY: u8 = 85;

/// Fits the image inside `MAX_DIMENSION` x `MAX_DIMENSION` without enlarging
/// it and re-encodes it as JPEG.
pub fn normalize_image(bytes: &[u8]) -> Result<NormalizedImage, TryOnApiError> {
    let image = image::load_from_memory(bytes).map_err(|e| {
        tracing::warn!("normalize_image failed to decode: {}", e);
        TryOnApiError::ImageProcessingError
    })?;

    let (width, height) = fit_inside(image.width(), image.height(), MAX_DIMENSION);
    let image = if (width, height) == (image.width(), image.height()) {
        image
    } else {
        tracing::debug!(
            "resizing {}x{} to {}x{}",
            image.width(),
            image.height(),
            width,
            height
        );
        image.resize_exact(width, height, FilterType::Lanczos3)
    };

    // jpeg has no alpha channel
    let image = DynamicImage::ImageRgb8(image.to_rgb8());

    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, ImageOutputFormat::Jpeg(JPEG_QUALITY))
        .map_err(|e| {
            tracing::error!("normalize_image failed to encode: {}", e);
            TryOnApiError::ImageProcessingError
        })?;

    Ok(NormalizedImage {
        data: cursor.into_inner(),
        width,
        height,
    })
}

/// Runs `normalize_image` on the blocking pool.
pub async fn normalize_image_blocking(bytes: Bytes) -> Result<NormalizedImage, TryOnApiError> {
    match tokio::task::spawn_blocking(move || normalize_image(&bytes)).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("normalize_image_blocking: {:?}", e);
            Err(TryOnApiError::ImageProcessingError)
        }
    }
}

/// Largest size with the same aspect ratio whose longer side is at most
/// `max_dimension`. Sizes already inside the bound are returned unchanged.
pub fn fit_inside(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= max_dimension {
        return (width, height);
    }

    let scale = max_dimension as f64 / longest as f64;
    let fit = |side: u32| ((side as f64 * scale).round() as u32).clamp(1, max_dimension);

    (fit(width), fit(height))
}
