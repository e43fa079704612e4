//! Command-line interface for batch plate generation from PNG masks

use crate::algorithm::PlateGenerator;
use crate::io::configuration::{
    DEFAULT_BOX_SIZE, DEFAULT_MAX_CIRCLE_RADIUS, DEFAULT_MIN_CIRCLE_RADIUS, DEFAULT_PLATE_SIZE,
    DEFAULT_SEED, DEFAULT_TARGET_FILL_RATIO, OUTPUT_SUFFIX, PlacementStrategy, PlateConfig,
    parse_palette,
};
use crate::io::error::{Result, path_error};
use crate::io::image::{export_canvas_as_png, load_mask_canvas};
use crate::io::progress::ProgressManager;
use crate::spatial::{Canvas, PixelClass};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

// Phases reported per file: seeds, figure pack, ground pack, crevices
const PHASE_COUNT: u64 = 4;

#[derive(Parser)]
#[command(name = "gbipg")]
#[command(
    author,
    version,
    about = "Generate Ishihara-style plates by graph-based circle packing"
)]
/// Command-line arguments for the plate generation tool
pub struct Cli {
    /// Input PNG mask file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Square plate size in pixels
    #[arg(long, default_value_t = DEFAULT_PLATE_SIZE)]
    pub size: usize,

    /// Wall radius in pixels (default: 45% of the plate size)
    #[arg(long)]
    pub wall_radius: Option<f64>,

    /// Minimum committed circle radius
    #[arg(long, default_value_t = DEFAULT_MIN_CIRCLE_RADIUS)]
    pub min_radius: f64,

    /// Maximum committed circle radius
    #[arg(long, default_value_t = DEFAULT_MAX_CIRCLE_RADIUS)]
    pub max_radius: f64,

    /// Seed-grid cell size for jittered placement
    #[arg(long, default_value_t = DEFAULT_BOX_SIZE)]
    pub box_size: usize,

    /// Target fraction of the wall area to fill
    #[arg(long, default_value_t = DEFAULT_TARGET_FILL_RATIO)]
    pub fill_ratio: f64,

    /// Comma-separated hex colors for figure circles
    #[arg(long)]
    pub figure_colors: Option<String>,

    /// Comma-separated hex colors for ground circles
    #[arg(long)]
    pub ground_colors: Option<String>,

    /// Use uniform rejection sampling instead of grid-jittered placement
    #[arg(long)]
    pub rejection: bool,

    /// Benchmark mode: repeat generation this many times and report timings
    #[arg(short, long)]
    pub benchmark: Option<usize>,

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

    /// Assemble the plate configuration from the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if a palette specification fails to parse. Numeric
    /// invariants are checked later, when the generator validates the
    /// assembled config.
    pub fn build_config(&self) -> Result<PlateConfig> {
        let mut config = PlateConfig::with_size(self.size)?;
        if let Some(wall_radius) = self.wall_radius {
            config.wall_radius = wall_radius;
        }
        config.min_circle_radius = self.min_radius;
        config.max_circle_radius = self.max_radius;
        config.box_size = self.box_size;
        config.target_fill_ratio = self.fill_ratio;
        if self.rejection {
            config.placement = PlacementStrategy::RejectionSampling;
        }
        if let Some(colors) = &self.figure_colors {
            config.figure_palette = parse_comma_palette("figure_colors", colors)?;
        }
        if let Some(colors) = &self.ground_colors {
            config.ground_palette = parse_comma_palette("ground_colors", colors)?;
        }
        Ok(config)
    }
}

fn parse_comma_palette(parameter: &'static str, colors: &str) -> Result<Vec<[u8; 4]>> {
    let specs: Vec<&str> = colors.split(',').map(str::trim).collect();
    parse_palette(parameter, &specs)
}

/// Orchestrates batch processing of PNG masks with progress tracking
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

    /// Process masks according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, configuration assembly, or
    /// plate generation fails.
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
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

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(path_error("Target file must be a PNG mask"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(path_error("Target must be a PNG mask or directory"))
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

    // Allow print for user feedback for run summaries
    #[allow(clippy::print_stderr)]
    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let config = self.cli.build_config()?;
        let canvas = load_mask_canvas(input_path, config.width)?;

        if let Some(iterations) = self.cli.benchmark {
            return self.run_benchmark(&canvas, &config, iterations);
        }

        let start_time = Instant::now();
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, PHASE_COUNT);
        }

        let mut generator = PlateGenerator::new(canvas, config, self.cli.seed)?;

        if let Some(ref pm) = self.progress_manager {
            pm.update_phase(index, "seeds");
        }
        let seeds = generator.place_seeds();

        if let Some(ref pm) = self.progress_manager {
            pm.update_phase(index, "figure");
        }
        let figure_count = generator.pack_class(PixelClass::Figure, &seeds.figure);

        if let Some(ref pm) = self.progress_manager {
            pm.update_phase(index, "ground");
        }
        let ground_count = generator.pack_class(PixelClass::Ground, &seeds.ground);

        if let Some(ref pm) = self.progress_manager {
            pm.update_phase(index, "crevices");
        }
        generator.fill_crevices();

        let stats = generator.stats(figure_count, ground_count);
        let output_path = Self::get_output_path(input_path);
        export_canvas_as_png(generator.canvas(), &output_path)?;

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        if !self.cli.quiet {
            eprintln!(
                "{}: {} figure + {} ground + {} crevice circles, {:.1}% coverage",
                output_path.display(),
                stats.figure_count,
                stats.ground_count,
                stats.crevice_count,
                stats.coverage * 100.0
            );
            if !stats.reached_target {
                eprintln!(
                    "Coverage target not reached within {} crevice attempts",
                    stats.crevice_attempts
                );
            }
        }

        Ok(())
    }

    // Repeats the full generation on the same mask and reports wall-clock
    // durations per iteration plus the average, without exporting.
    #[allow(clippy::print_stderr)]
    fn run_benchmark(&self, canvas: &Canvas, config: &PlateConfig, iterations: usize) -> Result<()> {
        let mut total = 0.0;

        for iteration in 1..=iterations {
            let start_time = Instant::now();
            let mut generator = PlateGenerator::new(canvas.clone(), config.clone(), self.cli.seed)?;
            generator.run();
            let duration = start_time.elapsed().as_secs_f64();
            total += duration;
            eprintln!("Iteration {iteration} of {iterations}: {duration:.3} seconds");
        }

        if iterations > 0 {
            eprintln!("Average runtime: {:.3} seconds", total / iterations as f64);
        }
        Ok(())
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
