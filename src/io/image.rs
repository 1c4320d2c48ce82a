use crate::core::color::Color;
use crate::error::SceneError;
use image::{ImageBuffer, Rgb};
use std::path::Path;

/// Lays out one `swatch_size` square per color, `columns` per row.
///
/// Returns `None` when the sheet would not fit in `u32` pixel dimensions.
pub fn swatch_sheet(
    colors: &[Color],
    swatch_size: u32,
    columns: u32,
) -> Option<ImageBuffer<Rgb<u8>, Vec<u8>>> {
    let count = u32::try_from(colors.len()).ok()?;
    let swatch_size = swatch_size.max(1);
    let columns = columns.max(1).min(count.max(1));
    let rows = count.div_ceil(columns).max(1);

    let width = columns.checked_mul(swatch_size)?;
    let height = rows.checked_mul(swatch_size)?;
    let mut img_buf = ImageBuffer::new(width, height);

    for (x, y, pixel) in img_buf.enumerate_pixels_mut() {
        let row = (y / swatch_size) as usize;
        let col = (x / swatch_size) as usize;
        // Unused cells in the last row stay black.
        let rgb = colors
            .get(row * columns as usize + col)
            .map(Color::to_rgb8)
            .unwrap_or([0, 0, 0]);
        *pixel = Rgb(rgb);
    }

    Some(img_buf)
}

/// Saves a swatch sheet of per-face colors to a PNG file.
pub fn save_swatches(
    colors: &[Color],
    swatch_size: u32,
    columns: u32,
    path: &str,
) -> Result<(), SceneError> {
    let image_error = |message: String| SceneError::Image {
        path: path.to_string(),
        message,
    };

    let sheet = swatch_sheet(colors, swatch_size, columns).ok_or_else(|| {
        image_error(format!(
            "{} swatches of {}px in {} columns overflow the image size",
            colors.len(),
            swatch_size,
            columns
        ))
    })?;

    sheet
        .save(Path::new(path))
        .map_err(|e| image_error(e.to_string()))
}
