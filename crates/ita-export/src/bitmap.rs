use std::path::Path;

use ita_core::error::ConvertError;
use ita_core::frame::FrameBuffer;

/// Persist a rasterized frame as a standard raster image (format from the
/// file extension; PNG in the default CLI flow).
///
/// The whole buffer exists before the write begins, so a failure leaves no
/// partially rendered artifact.
///
/// # Errors
/// `WriteFailure` if the destination cannot be written or encoded.
pub fn save_bitmap(fb: &FrameBuffer, path: &Path) -> Result<(), ConvertError> {
    let img = image::RgbaImage::from_raw(fb.width, fb.height, fb.data.clone()).ok_or_else(
        || ConvertError::WriteFailure {
            path: path.display().to_string(),
            reason: "pixel buffer does not match its dimensions".into(),
        },
    )?;
    img.save(path).map_err(|e| ConvertError::WriteFailure {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    log::info!("wrote bitmap {} ({}×{})", path.display(), fb.width, fb.height);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitmap_round_trips_through_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let mut fb = FrameBuffer::new(4, 2);
        for px in fb.data.chunks_exact_mut(4) {
            px[0] = 7;
            px[3] = 255;
        }
        save_bitmap(&fb, &path).unwrap();
        let back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(back.dimensions(), (4, 2));
        assert_eq!(back.get_pixel(0, 0).0, [7, 0, 0, 255]);
    }

    #[test]
    fn unwritable_destination_is_write_failure() {
        let fb = FrameBuffer::new(1, 1);
        let err = save_bitmap(&fb, Path::new("/nonexistent/dir/out.png")).unwrap_err();
        assert!(matches!(err, ConvertError::WriteFailure { .. }));
    }
}
