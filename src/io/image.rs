//! Rendering sprites to images, nearest-neighbour scaling and PNG export

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{ImageBuffer, RgbaImage};

use crate::algorithm::executor::Sprite;
use crate::io::configuration::MAX_IMAGE_DIMENSION;
use crate::io::error::{Result, SpriteError, invalid_parameter};

/// Copy a sprite's pixel buffer into an image of its effective size
///
/// # Errors
///
/// Returns an error if the buffer length does not match the sprite dimensions
pub fn render_sprite(sprite: &Sprite) -> Result<RgbaImage> {
    let width = sprite.width() as u32;
    let height = sprite.height() as u32;
    ImageBuffer::from_raw(width, height, sprite.pixels().to_vec()).ok_or_else(|| {
        invalid_parameter(
            "pixels",
            &sprite.pixels().len(),
            &format!("buffer does not hold {width}x{height} RGBA pixels"),
        )
    })
}

/// Nearest-neighbour resample by `factor`
///
/// Output is `round(width * factor)` by `round(height * factor)`, at least one
/// pixel per side for non-empty input.
///
/// # Errors
///
/// Returns an error if `factor` is not a positive finite number or a scaled
/// side would exceed `MAX_IMAGE_DIMENSION`
pub fn scale_nearest(image: &RgbaImage, factor: f64) -> Result<RgbaImage> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(invalid_parameter(
            "scale",
            &factor,
            &"must be a positive finite number",
        ));
    }

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Ok(image.clone());
    }

    let scaled_width = (f64::from(width) * factor).round().max(1.0);
    let scaled_height = (f64::from(height) * factor).round().max(1.0);
    if scaled_width > f64::from(MAX_IMAGE_DIMENSION) || scaled_height > f64::from(MAX_IMAGE_DIMENSION)
    {
        return Err(invalid_parameter(
            "scale",
            &factor,
            &format!(
                "{width}x{height} scaled to {scaled_width}x{scaled_height} exceeds {MAX_IMAGE_DIMENSION} pixels per side"
            ),
        ));
    }
    let scaled_width = scaled_width as u32;
    let scaled_height = scaled_height as u32;

    Ok(imageops::resize(
        image,
        scaled_width,
        scaled_height,
        FilterType::Nearest,
    ))
}

/// Render, scale and save a single sprite as PNG
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_sprite_png(sprite: &Sprite, scale: u32, output_path: &Path) -> Result<()> {
    let rendered = render_sprite(sprite)?;
    let scaled = scale_nearest(&rendered, f64::from(scale))?;
    save_image(&scaled, output_path)
}

/// Lay sprites out row-major on a transparent sheet and save it as PNG
///
/// Cells are sized to the largest sprite; `padding` transparent pixels
/// separate cells and surround the sheet before scaling.
///
/// # Errors
///
/// Returns an error if:
/// - `sprites` is empty
/// - `columns` or `scale` is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_sprite_sheet(
    sprites: &[Sprite],
    columns: usize,
    scale: u32,
    padding: u32,
    output_path: &Path,
) -> Result<()> {
    let sheet = compose_sprite_sheet(sprites, columns, padding)?;
    let scaled = scale_nearest(&sheet, f64::from(scale))?;
    save_image(&scaled, output_path)
}

/// Build an unscaled sprite sheet
///
/// # Errors
///
/// Returns an error if `sprites` is empty, `columns` is zero or the sheet
/// would exceed `MAX_IMAGE_DIMENSION` on either side
pub fn compose_sprite_sheet(sprites: &[Sprite], columns: usize, padding: u32) -> Result<RgbaImage> {
    if sprites.is_empty() {
        return Err(SpriteError::EmptyBatch);
    }
    if columns == 0 {
        return Err(invalid_parameter("columns", &columns, &"must be at least 1"));
    }

    let cell_width = sprites.iter().map(Sprite::width).max().unwrap_or(0) as u32;
    let cell_height = sprites.iter().map(Sprite::height).max().unwrap_or(0) as u32;
    let sheet_columns = columns.min(sprites.len()) as u32;
    let sheet_rows = sprites.len().div_ceil(columns) as u32;

    let (Some(sheet_width), Some(sheet_height)) = (
        sheet_extent(sheet_columns, cell_width, padding),
        sheet_extent(sheet_rows, cell_height, padding),
    ) else {
        return Err(invalid_parameter("padding", &padding, &"sheet size overflows"));
    };
    if sheet_width > MAX_IMAGE_DIMENSION || sheet_height > MAX_IMAGE_DIMENSION {
        return Err(invalid_parameter(
            "sheet",
            &format!("{sheet_width}x{sheet_height}"),
            &format!("exceeds {MAX_IMAGE_DIMENSION} pixels per side"),
        ));
    }
    let mut sheet = RgbaImage::new(sheet_width, sheet_height);

    for (index, sprite) in sprites.iter().enumerate() {
        let column = (index % columns) as u32;
        let row = (index / columns) as u32;
        let x = padding + column * (cell_width + padding);
        let y = padding + row * (cell_height + padding);
        let rendered = render_sprite(sprite)?;
        imageops::replace(&mut sheet, &rendered, i64::from(x), i64::from(y));
    }

    Ok(sheet)
}

/// `cells * (cell + padding) + padding`, or `None` on overflow
fn sheet_extent(cells: u32, cell: u32, padding: u32) -> Option<u32> {
    cell.checked_add(padding)?
        .checked_mul(cells)?
        .checked_add(padding)
}

fn save_image(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| SpriteError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    image
        .save(output_path)
        .map_err(|e| SpriteError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
