use std::path::Path;

use ita_core::error::ConvertError;
use ita_core::frame::FrameBuffer;

/// Decode an image file into an RGBA pixel buffer.
///
/// Supported formats follow the `image` crate features enabled in the
/// workspace (PNG, JPEG, BMP, GIF — first frame). The buffer is acquired
/// once and held by the caller for every render derived from it.
///
/// # Errors
/// `ImageNotFound` if the path cannot be opened or decoded;
/// `InvalidDimension` if the decoded image has zero width or height.
///
/// # Example
/// ```no_run
/// use ita_source::image::load_image;
/// use std::path::Path;
/// let frame = load_image(Path::new("photo.jpg")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<FrameBuffer, ConvertError> {
    let img = image::open(path).map_err(|e| {
        log::debug!("decode failed for {}: {e}", path.display());
        ConvertError::ImageNotFound {
            path: path.display().to_string(),
        }
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(ConvertError::InvalidDimension {
            reason: format!("source image is {width}×{height}"),
        });
    }
    log::info!("loaded {} ({width}×{height})", path.display());
    Ok(FrameBuffer {
        data: rgba.into_raw(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_image_not_found() {
        let err = load_image(Path::new("/nonexistent/no-such.png")).unwrap_err();
        assert!(matches!(err, ConvertError::ImageNotFound { .. }));
    }

    #[test]
    fn garbage_bytes_are_image_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-an-image.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, ConvertError::ImageNotFound { .. }));
    }

    #[test]
    fn png_round_trips_through_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        let mut img = image::RgbaImage::new(3, 2);
        img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        img.save(&path).unwrap();
        let frame = load_image(&path).unwrap();
        assert_eq!((frame.width, frame.height), (3, 2));
        assert_eq!(frame.rgb(0, 0), (255, 0, 0));
    }
}
