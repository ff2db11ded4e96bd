//! Command-line interface for batch pattern generation

use crate::color::emotion::Emotion;
use crate::io::configuration::{
    DEFAULT_EMOTION_KEY, DEFAULT_HEIGHT, DEFAULT_WIDTH, PNG_EXTENSION, SVG_EXTENSION,
    URI_EXTENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::raster::export_pattern_as_png;
use crate::io::svg::{export_pattern_as_data_uri, export_pattern_as_svg};
use crate::pattern::engine::PatternEngine;
use crate::pattern::seed::Seed;
use clap::Parser;
use rand::Rng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "polymood")]
#[command(
    author,
    version,
    about = "Generate deterministic low-poly patterns from seeded emotion palettes"
)]
/// Command-line arguments for the pattern generation tool
pub struct Cli {
    /// Output SVG file; a variation index is appended when --count > 1
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Seed as a number in [0,1) or an arbitrary string; random when omitted
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Emotion palette key (passion, calm, joy, mystery, nature, serenity);
    /// unrecognized keys fall back to calm
    #[arg(short, long, default_value = DEFAULT_EMOTION_KEY)]
    pub emotion: String,

    /// Canvas width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: f64,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: f64,

    /// Number of variations to generate; with an explicit seed, each
    /// variation appends its index to the seed text
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Also export a PNG rasterization next to each SVG
    #[arg(short, long)]
    pub raster: bool,

    /// Also write the base64 data URI form next to each SVG
    #[arg(long)]
    pub encode: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Regenerate files even if output exists
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
}

/// Orchestrates batch generation with progress tracking
pub struct PatternProcessor {
    cli: Cli,
    engine: PatternEngine,
    progress_manager: Option<ProgressManager>,
}

impl PatternProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            engine: PatternEngine::default(),
            progress_manager,
        }
    }

    /// Generate all requested variations
    ///
    /// # Errors
    ///
    /// Returns an error if the count is zero, a dimension fails validation,
    /// or an output file cannot be written
    pub fn process(&mut self) -> Result<()> {
        if self.cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &"must be at least 1",
            ));
        }

        let emotion = Emotion::from_key_or_default(&self.cli.emotion);
        let jobs = self.collect_jobs();

        if jobs.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(jobs.len());
        }

        for (path, seed) in &jobs {
            if let Some(ref pm) = self.progress_manager {
                let display_name = path
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string();
                pm.start_item(&format!("{} {display_name}", emotion.glyph()));
            }

            let pattern = self
                .engine
                .generate(self.cli.width, self.cli.height, seed, emotion)?;

            export_pattern_as_svg(&pattern, path)?;
            if self.cli.raster {
                export_pattern_as_png(&pattern, &path.with_extension(PNG_EXTENSION))?;
            }
            if self.cli.encode {
                export_pattern_as_data_uri(&pattern, &path.with_extension(URI_EXTENSION))?;
            }

            if let Some(ref pm) = self.progress_manager {
                pm.complete_item();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    // Allow print for user feedback when outputs are skipped
    #[allow(clippy::print_stderr)]
    fn collect_jobs(&self) -> Vec<(PathBuf, Seed)> {
        let mut rng = rand::rng();
        let mut jobs = Vec::with_capacity(self.cli.count);

        for index in 0..self.cli.count {
            let path = self.variation_path(index);
            if self.cli.skip_existing() && path.exists() {
                if !self.cli.quiet {
                    eprintln!("Skipping: {} (output exists)", path.display());
                }
                continue;
            }
            let seed = self.variation_seed(index, &mut rng);
            jobs.push((path, seed));
        }

        jobs
    }

    fn variation_seed(&self, index: usize, rng: &mut impl Rng) -> Seed {
        match &self.cli.seed {
            Some(text) if self.cli.count > 1 => Seed::Text(format!("{text}-{index}")),
            Some(text) => Seed::parse(text),
            None => Seed::Value(rng.random()),
        }
    }

    fn variation_path(&self, index: usize) -> PathBuf {
        if self.cli.count == 1 {
            return self.cli.output.clone();
        }

        let stem = self.cli.output.file_stem().unwrap_or_default();
        let name = format!("{}_{index}.{SVG_EXTENSION}", stem.to_string_lossy());

        if let Some(parent) = self.cli.output.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}
