//! Command-line interface for batch collider generation from tilemap files

use crate::algorithm::cover::OverlapPolicy;
use crate::algorithm::verify::verify_cover;
use crate::host::generator::{ColliderGenerator, ContainerTarget, GeneratorConfig};
use crate::host::memory::MemoryHost;
use crate::io::configuration::{
    DEFAULT_ALPHA_THRESHOLD, DEFAULT_SEED, OUTPUT_SUFFIX, VISUALIZATION_CELL_SIZE,
};
use crate::io::error::{CoverError, Result, file_system, invalid_parameter};
use crate::io::image::export_cover_png;
use crate::io::progress::ProgressManager;
use crate::io::report::{render_report, write_report};
use crate::io::tilemap::{TilemapFormat, load_tilemap};
use crate::spatial::grid::GridBuilder;
use clap::Parser;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "tilerects")]
#[command(
    author,
    version,
    about = "Cover tilemaps with a small set of box colliders"
)]
/// Command-line arguments for the collider generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input tilemap (.png or .txt) or directory of tilemaps to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Allow colliders to overlap, which may reduce their number
    #[arg(short, long)]
    pub overlap: bool,

    /// Attach colliders to a child container instead of the host object
    #[arg(short, long)]
    pub child: bool,

    /// World x coordinate of the tilemap's minimum corner
    #[arg(short = 'x', long, default_value_t = 0, allow_negative_numbers = true)]
    pub origin_x: i32,

    /// World y coordinate of the tilemap's minimum corner
    #[arg(short = 'y', long, default_value_t = 0, allow_negative_numbers = true)]
    pub origin_y: i32,

    /// Pixels with alpha above this value count as tiles
    #[arg(short, long, default_value_t = DEFAULT_ALPHA_THRESHOLD)]
    pub threshold: u8,

    /// Check every cover against its tilemap and fail on violations
    #[arg(long)]
    pub verify: bool,

    /// Also write a PNG showing each collider in its own color
    #[arg(short, long)]
    pub visualize: bool,

    /// Seed for visualization colors
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Overlap policy selected on the command line
    pub const fn overlap_policy(&self) -> OverlapPolicy {
        if self.overlap {
            OverlapPolicy::Allowed
        } else {
            OverlapPolicy::NotAllowed
        }
    }

    /// Generator settings selected on the command line
    pub const fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            target: if self.child {
                ContainerTarget::CreateChildContainer
            } else {
                ContainerTarget::UseHostObject
            },
            overlap: self.overlap_policy(),
        }
    }
}

/// Orchestrates batch processing of tilemap files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    generator: ColliderGenerator,
    host: MemoryHost,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let generator = ColliderGenerator::new(cli.generator_config());

        Self {
            cli,
            generator,
            host: MemoryHost::new(),
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            info!("nothing to process in {}", self.cli.target.display());
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        self.generator.remove_all(&mut self.host);
        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if TilemapFormat::from_path(&self.cli.target).is_some() {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a .png or .txt tilemap",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            let entries = std::fs::read_dir(&self.cli.target)
                .map_err(file_system(&self.cli.target, "read directory"))?;
            for entry in entries {
                let path = entry?.path();
                if path.is_file()
                    && TilemapFormat::from_path(&path).is_some()
                    && !Self::is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a tilemap file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            info!("skipping {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let tilemap = load_tilemap(input_path, self.cli.threshold)?
            .with_origin([self.cli.origin_x, self.cli.origin_y]);
        debug!(
            "{}: {} occupied cells",
            input_path.display(),
            tilemap.occupied_count()
        );

        let summary = self.generator.generate(&mut self.host, &tilemap);
        let policy = self.generator.config().overlap;

        if self.cli.verify {
            let original = GridBuilder::build(&tilemap);
            let report = verify_cover(&original, &summary.rectangles, policy);
            if !report.is_valid() {
                return Err(CoverError::InvalidCover {
                    path: input_path.to_path_buf(),
                    uncovered: report.uncovered.len(),
                    spurious: report.spurious.len(),
                    overlapping: report.overlapping.len(),
                });
            }
            debug!(
                "{}: verified {} rectangles over {} cells",
                input_path.display(),
                report.rectangles,
                report.covered_cells
            );
        }

        let report = render_report(&summary, policy);
        write_report(&Self::get_output_path(input_path), &report)?;

        if self.cli.visualize {
            export_cover_png(
                &tilemap,
                &summary.rectangles,
                VISUALIZATION_CELL_SIZE,
                self.cli.seed,
                &Self::get_visualization_path(input_path),
            )?;
        }

        info!(
            "{}: {} colliders in {:.2?}",
            input_path.display(),
            summary.rectangles.len(),
            start_time.elapsed()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, summary.rectangles.len());
        }

        Ok(())
    }

    // Outputs live next to their inputs and must not be picked up as tilemaps
    fn is_generated_output(path: &Path) -> bool {
        path.file_stem()
            .is_some_and(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX))
    }

    /// Path of the collider listing written for `input_path`
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, "txt")
    }

    /// Path of the visualization written for `input_path`
    pub fn get_visualization_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, "png")
    }

    fn sibling_path(input_path: &Path, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
