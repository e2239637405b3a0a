//! Command-line interface for batch scattering over PNG reference images

use crate::algorithm::executor::{ScatterConfig, WalkEngine};
use crate::io::configuration::{
    DEFAULT_BALANCE_WINDOW, DEFAULT_ELEVATION, DEFAULT_FLOW_AMOUNT, DEFAULT_MARKER_COUNT,
    DEFAULT_RANDOMNESS, DEFAULT_SEED, DEFAULT_STEP_SIZE, GIF_FRAME_DELAY_MS, OUTPUT_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image::{export_preview, load_reference_image, render_preview};
use crate::io::progress::ProgressManager;
use crate::io::visualization::{PlacementAnimation, draw_path};
use clap::Parser;
use glam::Vec3;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "imagescatter")]
#[command(
    author,
    version,
    about = "Scatter balanced, non-overlapping markers along an image-guided walk"
)]
/// Command-line arguments for the scatter tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of walk steps (one marker slot per step)
    #[arg(short = 'n', long, default_value_t = DEFAULT_MARKER_COUNT)]
    pub markers: usize,

    /// Distance in pixels between the current cell and its candidates
    #[arg(long, default_value_t = DEFAULT_STEP_SIZE)]
    pub step_size: u32,

    /// Weight of directional continuity against color similarity (0 to 0.005)
    #[arg(short, long, default_value_t = DEFAULT_FLOW_AMOUNT)]
    pub flow: f32,

    /// Upper bound of the non-negative candidate jitter in pixels
    #[arg(short, long, default_value_t = DEFAULT_RANDOMNESS)]
    pub randomness: f32,

    /// Number of recent markers each new marker's scale is balanced against
    #[arg(short = 'k', long, default_value_t = DEFAULT_BALANCE_WINDOW)]
    pub balance_window: usize,

    /// Cycle through fixed scales instead of balancing
    #[arg(short, long)]
    pub cycle_scale: bool,

    /// World x coordinate of the starting position (0 is the image center)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub start_x: f32,

    /// World z coordinate of the starting position (0 is the image center)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub start_z: f32,

    /// Elevation of the placed markers in world space
    #[arg(long, default_value_t = DEFAULT_ELEVATION, allow_hyphen_values = true)]
    pub elevation: f32,

    /// Draw the debug path between consecutive markers on the preview
    #[arg(short, long)]
    pub path: bool,

    /// Also export the placement order as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(long)]
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

    /// Walk configuration described by the arguments
    pub const fn scatter_config(&self) -> ScatterConfig {
        ScatterConfig {
            starting_position: Vec3::new(self.start_x, self.elevation, self.start_z),
            marker_count: self.markers,
            step_size: self.step_size,
            flow_amount: self.flow,
            randomness: self.randomness,
            balance_window: self.balance_window,
            cycle_scale: self.cycle_scale,
            seed: self.seed,
            elevation: self.elevation,
        }
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, configuration validation or
    /// file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Files the target resolves to, sorted, with already processed ones removed
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a PNG file nor a readable directory
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_png(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(crate::io::error::io_error(
                    &self.cli.target,
                    "Target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if is_png(&path) && !is_generated(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                &self.cli.target,
                "Target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let reference = load_reference_image(input_path)?;
        let (width, height) = (reference.width() as u32, reference.height() as u32);
        tracing::info!("Loaded {} ({width}x{height})", input_path.display());

        let mut engine = WalkEngine::new(reference, self.cli.scatter_config())?;
        engine.run();
        let records = engine.records();

        let mut preview = render_preview(records, engine.transform(), width, height);
        if self.cli.path {
            draw_path(&mut preview, records, engine.transform());
        }

        let output_path = Self::get_output_path(input_path);
        export_preview(&preview, &output_path)?;
        tracing::info!("Preview written to {}", output_path.display());

        if self.cli.visualize {
            let viz_path = Self::get_visualization_path(input_path);
            PlacementAnimation::from_records(records, *engine.transform(), width, height)
                .export_gif(&viz_path, GIF_FRAME_DELAY_MS)?;
            tracing::info!("Animation written to {}", viz_path.display());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    /// Preview path written for `input_path`
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        Self::sibling_with_suffix(input_path, OUTPUT_SUFFIX, "png")
    }

    /// Animation path written for `input_path`
    pub fn get_visualization_path(input_path: &Path) -> PathBuf {
        Self::sibling_with_suffix(input_path, OUTPUT_SUFFIX, "gif")
    }

    fn sibling_with_suffix(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}

fn is_png(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("png")
}

// Previews from earlier batches are not reference images
fn is_generated(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
