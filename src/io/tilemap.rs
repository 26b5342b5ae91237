//! Tilemap loading from PNG images and ASCII text maps
//!
//! Both formats are read top row first but stored with `y` growing upwards,
//! so the bottom line of a file becomes grid row 0.

use std::path::Path;

use crate::io::configuration::{TEXT_EMPTY, TEXT_OCCUPIED};
use crate::io::error::{CoverError, Result, file_system, invalid_parameter, invalid_source};
use crate::spatial::grid::{FlatOccupancy, check_dimensions};

/// Supported tilemap file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilemapFormat {
    /// PNG image, occupied where alpha exceeds a threshold
    Png,
    /// Text map using `#`/`X` for occupied and `.`/space for empty cells
    Text,
}

impl TilemapFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => Some(Self::Png),
            Some(ext) if ext.eq_ignore_ascii_case("txt") => Some(Self::Text),
            _ => None,
        }
    }
}

/// Load a tilemap, choosing the parser from the file extension
///
/// # Errors
///
/// Returns an error if the extension is not supported or the file cannot be
/// read or parsed
pub fn load_tilemap(path: &Path, alpha_threshold: u8) -> Result<FlatOccupancy> {
    match TilemapFormat::from_path(path) {
        Some(TilemapFormat::Png) => load_png(path, alpha_threshold),
        Some(TilemapFormat::Text) => load_text(path),
        None => Err(invalid_parameter(
            "target",
            &path.display(),
            &"tilemaps must be .png or .txt files",
        )),
    }
}

/// Load a PNG where every pixel with alpha above `alpha_threshold` is occupied
///
/// # Errors
///
/// Returns an error if the image cannot be decoded or is too large
pub fn load_png(path: &Path, alpha_threshold: u8) -> Result<FlatOccupancy> {
    let img = image::open(path).map_err(|e| CoverError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();
    let (width, height) = (width as usize, height as usize);
    check_dimensions(width, height)?;

    let mut cells = vec![false; width * height];
    for (px, py, pixel) in rgba_img.enumerate_pixels() {
        // Image rows run top-down, grid rows bottom-up
        let y = height - 1 - py as usize;
        if let Some(cell) = cells.get_mut(px as usize + y * width) {
            *cell = pixel[3] > alpha_threshold;
        }
    }

    FlatOccupancy::new(width, height, cells)
}

/// Load a text tilemap from disk
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains unknown characters
pub fn load_text(path: &Path) -> Result<FlatOccupancy> {
    let text = std::fs::read_to_string(path).map_err(file_system(path, "read tilemap"))?;
    parse_text(&text)
}

/// Parse a text tilemap
///
/// The width is the longest line; shorter lines are padded with empty cells.
/// Trailing blank lines are ignored.
///
/// # Errors
///
/// Returns an error on characters that are neither occupied nor empty markers
pub fn parse_text(text: &str) -> Result<FlatOccupancy> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let height = lines.len();
    let width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    check_dimensions(width, height)?;

    let mut cells = vec![false; width * height];
    for (line_index, line) in lines.iter().enumerate() {
        let y = height - 1 - line_index;
        for (x, ch) in line.chars().enumerate() {
            let occupied = if TEXT_OCCUPIED.contains(&ch) {
                true
            } else if TEXT_EMPTY.contains(&ch) {
                false
            } else {
                return Err(invalid_source(&format!(
                    "unexpected character {ch:?} at line {}, column {}",
                    line_index + 1,
                    x + 1
                )));
            };
            if let Some(cell) = cells.get_mut(x + y * width) {
                *cell = occupied;
            }
        }
    }

    FlatOccupancy::new(width, height, cells)
}
