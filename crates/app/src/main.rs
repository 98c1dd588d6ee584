mod layout;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tablepen_layout::{LayoutSettings, Point};
use tracing::debug;
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Diagram to lay out, in RON
    diagram: PathBuf,

    /// Layout settings, in RON
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    origin_x: i32,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    origin_y: i32,

    /// Number of animation frames, overrides the settings file
    #[arg(long)]
    frames: Option<u32>,

    /// Move the tables at once instead of animating them
    #[arg(long)]
    no_animation: bool,
}

impl Args {
    fn settings(&self) -> Result<LayoutSettings> {
        let mut settings = match &self.config {
            Some(path) => layout::load_settings(path)?,
            None => LayoutSettings::default(),
        };

        if let Some(frames) = self.frames {
            settings.num_frames_in_anim = frames;
        }
        if self.no_animation {
            settings.animation_enabled = false;
        }

        Ok(settings)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let settings = args.settings()?;
    debug!("Settings: {settings:?}");

    let mut diagram = layout::load_diagram(&args.diagram)?;
    let origin = Point::new(args.origin_x, args.origin_y);
    let placements = layout::lay_out(&mut diagram, &settings, origin)?;

    let output = ron::ser::to_string_pretty(&placements, ron::ser::PrettyConfig::default())
        .context("Failed to serialize placements")?;
    println!("{output}");

    Ok(())
}
