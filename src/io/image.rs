//! PNG export of a cover drawn over its source occupancy

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{CoverError, Result, file_system, invalid_parameter};
use crate::spatial::grid::OccupancySource;
use crate::spatial::rect::CellRect;

const OCCUPIED_COLOR: Rgba<u8> = Rgba([96, 96, 96, 255]);
const EMPTY_COLOR: Rgba<u8> = Rgba([0, 0, 0, 0]);
const OUTLINE_COLOR: Rgba<u8> = Rgba([16, 16, 16, 255]);

/// Render occupied cells in grey and each rectangle in its own color
///
/// Colors come from a seeded generator so repeated runs produce identical
/// images. Rectangles are painted in discovery order, so under overlap later
/// rectangles hide earlier ones. Grid row 0 is drawn at the bottom.
///
/// # Errors
///
/// Returns an error if `cell_size` is zero or the image would exceed `u32`
/// pixels along either axis
pub fn render_cover<S>(
    source: &S,
    rectangles: &[CellRect],
    cell_size: u32,
    seed: u64,
) -> Result<RgbaImage>
where
    S: OccupancySource + ?Sized,
{
    if cell_size == 0 {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"cells must be at least one pixel wide",
        ));
    }

    let width = pixel_extent("width", source.width(), cell_size)?;
    let height = pixel_extent("height", source.height(), cell_size)?;
    let mut img: RgbaImage = ImageBuffer::from_pixel(width.1, height.1, EMPTY_COLOR);
    let (width, height) = (width.0, height.0);

    for x in 0..width {
        for y in 0..height {
            if source.is_occupied(x as usize, y as usize) {
                let cell = [x, y];
                fill_cells(&mut img, height, cell_size, cell, [1, 1], OCCUPIED_COLOR, None);
            }
        }
    }

    let mut rng = StdRng::seed_from_u64(seed);
    for rect in rectangles {
        let color = Rgba([
            rng.random_range(64..=255),
            rng.random_range(64..=255),
            rng.random_range(64..=255),
            255,
        ]);
        fill_cells(
            &mut img,
            height,
            cell_size,
            [to_u32(rect.x), to_u32(rect.y)],
            [to_u32(rect.width), to_u32(rect.height)],
            color,
            Some(OUTLINE_COLOR),
        );
    }

    Ok(img)
}

// Cell count and pixel length of one image axis
fn pixel_extent(axis: &str, cells: usize, cell_size: u32) -> Result<(u32, u32)> {
    u32::try_from(cells)
        .ok()
        .and_then(|count| Some((count, count.checked_mul(cell_size)?)))
        .ok_or_else(|| {
            invalid_parameter(
                "cell_size",
                &cell_size,
                &format!("{cells} cells of this size overflow the image {axis}"),
            )
        })
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

// Paints a block of cells, optionally with a one-pixel outline
fn fill_cells(
    img: &mut RgbaImage,
    grid_height: u32,
    cell_size: u32,
    origin: [u32; 2],
    size: [u32; 2],
    fill: Rgba<u8>,
    outline: Option<Rgba<u8>>,
) {
    // Rectangles reaching past the grid are clipped to the image
    let left = origin[0].saturating_mul(cell_size);
    let right = origin[0]
        .saturating_add(size[0])
        .saturating_mul(cell_size)
        .min(img.width());
    // Grid y grows upwards, image rows grow downwards
    let top = grid_height
        .saturating_sub(origin[1].saturating_add(size[1]))
        .saturating_mul(cell_size);
    let bottom = grid_height
        .saturating_sub(origin[1])
        .saturating_mul(cell_size)
        .min(img.height());

    for px in left..right {
        for py in top..bottom {
            let on_edge = px == left || px + 1 == right || py == top || py + 1 == bottom;
            let color = match outline {
                Some(edge) if on_edge => edge,
                _ => fill,
            };
            if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                *pixel = color;
            }
        }
    }
}

/// Render a cover and save it as PNG
///
/// # Errors
///
/// Returns an error if rendering fails, the parent directory cannot be
/// created, or the image cannot be saved
pub fn export_cover_png<S>(
    source: &S,
    rectangles: &[CellRect],
    cell_size: u32,
    seed: u64,
    output_path: &Path,
) -> Result<()>
where
    S: OccupancySource + ?Sized,
{
    let img = render_cover(source, rectangles, cell_size, seed)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(file_system(parent, "create directory"))?;
    }

    img.save(output_path)
        .map_err(|e| CoverError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
