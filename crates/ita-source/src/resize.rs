use fast_image_resize::images::Image;
use fast_image_resize::{PixelType, ResizeAlg, ResizeOptions, Resizer};
use ita_core::error::ConvertError;
use ita_core::frame::{FrameBuffer, GLYPH_ASPECT};

/// Policy clamping the requested column count.
#[derive(Clone, Copy, Debug)]
pub enum WidthLimit {
    /// Interactive output: clamp to the current display width (columns).
    Display(u16),
    /// File/bitmap output: never upscale past the source's native width.
    Native,
}

/// Compute the sampled grid dimensions for a requested column count.
///
/// The sampled width is `cols / GLYPH_ASPECT` since every pixel becomes
/// `GLYPH_ASPECT` character columns. With `WidthLimit::Display(d)` a request
/// wider than the display clamps to `d / GLYPH_ASPECT`; with
/// `WidthLimit::Native` a request wider than the source clamps the sampled
/// width to the native pixel width. Height always derives from the
/// pre-resize aspect ratio: `round(native_h / native_w × sampled_w)`.
///
/// # Errors
/// `InvalidDimension` when `cols` is zero or the source has zero area.
///
/// # Example
/// ```
/// use ita_source::resize::{grid_dimensions, WidthLimit};
/// let dims = grid_dimensions(800, 400, 120, WidthLimit::Native).unwrap();
/// assert_eq!(dims, (60, 30));
/// ```
pub fn grid_dimensions(
    native_w: u32,
    native_h: u32,
    cols: u32,
    limit: WidthLimit,
) -> Result<(u32, u32), ConvertError> {
    if cols == 0 {
        return Err(ConvertError::InvalidDimension {
            reason: "requested columns must be positive".into(),
        });
    }
    if native_w == 0 || native_h == 0 {
        return Err(ConvertError::InvalidDimension {
            reason: format!("source image is {native_w}×{native_h}"),
        });
    }
    let aspect = GLYPH_ASPECT as u32;
    let sampled_w = match limit {
        WidthLimit::Display(d) if cols > u32::from(d) => u32::from(d) / aspect,
        WidthLimit::Native if cols > native_w => native_w,
        _ => cols / aspect,
    }
    .max(1);
    let sampled_h = ((f64::from(native_h) / f64::from(native_w)) * f64::from(sampled_w)).round()
        as u32;
    Ok((sampled_w, sampled_h.max(1)))
}

/// Nearest-neighbor downsample to exactly `width × height`.
///
/// Nearest keeps luminance boundaries crisp for the glyph ramp where an
/// interpolating filter would blur them. Identity dimensions short-circuit
/// to a copy.
///
/// # Errors
/// `InvalidDimension` if the resize backend rejects the buffers.
pub fn resize_nearest(
    src: &FrameBuffer,
    width: u32,
    height: u32,
) -> Result<FrameBuffer, ConvertError> {
    if src.width == width && src.height == height {
        return Ok(src.clone());
    }

    // fast_image_resize requires &mut on the source slice.
    let mut src_buf = src.data.clone();
    let src_image = Image::from_slice_u8(src.width, src.height, &mut src_buf, PixelType::U8x4)
        .map_err(|e| ConvertError::InvalidDimension {
            reason: format!("invalid source buffer: {e}"),
        })?;

    let mut dst = FrameBuffer::new(width, height);
    let mut dst_image = Image::from_slice_u8(width, height, &mut dst.data, PixelType::U8x4)
        .map_err(|e| ConvertError::InvalidDimension {
            reason: format!("invalid target buffer: {e}"),
        })?;

    let options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Nearest)
        .use_alpha(false);
    Resizer::new()
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| ConvertError::InvalidDimension {
            reason: format!("resize failed: {e}"),
        })?;

    log::debug!(
        "resampled {}×{} → {width}×{height} (nearest)",
        src.width,
        src.height
    );
    Ok(dst)
}
