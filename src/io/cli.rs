//! Command-line interface for turning one image into an animated sprite mosaic

use crate::io::configuration::{
    DEFAULT_OUTPUT_PATH, DEFAULT_OUTPUT_WIDTH_CELLS, DEFAULT_SPRITE_DIR,
};
use crate::io::error::Result;
use crate::io::export::export_gif;
use crate::io::progress::ProgressManager;
use crate::mosaic::generator::{FrameGenerator, FrameSequence, load_input};
use crate::mosaic::resample::ResampleFilter;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "crewtile")]
#[command(
    author,
    version,
    about = "Turn an image into a looping GIF mosaic of recolored sprites"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Input image to animate
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Mosaic width in sprite cells
    #[arg(short, long, default_value_t = DEFAULT_OUTPUT_WIDTH_CELLS)]
    pub width: u32,

    /// Filter used to shrink the input to one color per cell
    #[arg(short, long, value_enum, default_value_t = ResampleFilter::Nearest)]
    pub filter: ResampleFilter,

    /// Path of the generated GIF
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Directory holding sprite frames `0.png` through `5.png`
    #[arg(short, long, default_value = DEFAULT_SPRITE_DIR)]
    pub sprites: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Most verbose tracing level the binary should print
    pub const fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}

/// Runs one input through generation and export with progress reporting
pub struct MosaicProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MosaicProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Arguments this processor was created with
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Generate every frame and write the animation
    ///
    /// # Errors
    ///
    /// Returns an error if sprite or input loading, layout validation or GIF
    /// export fails; nothing is retried
    pub fn process(&self) -> Result<()> {
        let start_time = Instant::now();

        let generator = FrameGenerator::from_sprite_dir(&self.cli.sprites)?;
        let input = load_input(&self.cli.input)?;
        let grid = generator.prepare(&input, self.cli.width, self.cli.filter)?;

        if let Some(ref pm) = self.progress_manager {
            pm.start(&self.cli.input, generator.frame_count());
        }

        let mut frames = FrameSequence::new(*grid.layout());
        for step in 0..generator.frame_count() {
            frames.push(generator.render_frame(&grid, step));
            if let Some(ref pm) = self.progress_manager {
                pm.frame_rendered(step);
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.exporting(&self.cli.output);
        }

        export_gif(&frames, &self.cli.output)?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish(start_time.elapsed());
        }

        Ok(())
    }
}
