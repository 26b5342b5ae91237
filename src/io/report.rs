//! Plain-text collider listings

use std::fmt::Write as _;
use std::path::Path;

use crate::algorithm::cover::OverlapPolicy;
use crate::host::generator::GenerationSummary;
use crate::io::error::{Result, file_system};

/// Render one line per collider after a short header
///
/// Each line holds the grid-local rectangle (`x y width height`) followed by
/// the world-space center, in discovery order.
pub fn render_report(summary: &GenerationSummary, policy: OverlapPolicy) -> String {
    let region = &summary.region;
    let policy_name = match policy {
        OverlapPolicy::Allowed => "allowed",
        OverlapPolicy::NotAllowed => "not-allowed",
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "# region origin=({}, {}) size={}x{}",
        region.x, region.y, region.width, region.height
    );
    let _ = writeln!(
        out,
        "# colliders={} overlap={policy_name}",
        summary.rectangles.len()
    );
    let _ = writeln!(out, "# x y width height center_x center_y");

    for (rect, shape) in summary.rectangles.iter().zip(&summary.shapes) {
        let _ = writeln!(
            out,
            "{} {} {} {} {} {}",
            rect.x, rect.y, rect.width, rect.height, shape.center[0], shape.center[1]
        );
    }

    out
}

/// Write a rendered report, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(file_system(parent, "create directory"))?;
    }
    std::fs::write(path, report).map_err(file_system(path, "write report"))
}
