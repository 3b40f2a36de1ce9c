//! Time Cycle - Entry Point
//!
//! Opens the day/night screen in the terminal, or with `--headless` prints the
//! scene for a single moment and exits.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use time_cycle::core::config::ScreenConfig;
use time_cycle::core::error::{CycleError, Result};
use time_cycle::render::celestial::BodyKind;
use time_cycle::render::colors::Color;
use time_cycle::render::Scene;
use time_cycle::ui::app;
use time_cycle::ui::state::{AppState, Timings};

/// Day/night cycle visualizer driven by a 24-hour time slider
#[derive(Parser, Debug)]
#[command(name = "time-cycle")]
#[command(about = "Drag through the day and watch the sky follow")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial time, "7:30 AM" or "19:30"
    #[arg(long)]
    at: Option<String>,

    /// Star field seed for a reproducible sky
    #[arg(long)]
    seed: Option<u64>,

    /// Print the scene for the initial time instead of opening the screen
    #[arg(long)]
    headless: bool,

    /// Headless output format: json or text
    #[arg(long, default_value = "json")]
    format: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ScreenConfig::load(path)?,
        None => ScreenConfig::default(),
    };
    if let Some(at) = &args.at {
        config.initial_time = at.clone();
    }
    if let Some(seed) = args.seed {
        config.star_seed = Some(seed);
    }
    config.validate()?;

    init_logging(&config, args.headless)?;
    if let Some(path) = &args.config {
        tracing::info!(path = %path.display(), "using config file");
    }

    let initial = config.initial_clock()?;
    if args.headless {
        let state = AppState::settled(initial, Timings::from(&config));
        let scene = Scene::build(&state);
        tracing::debug!(phase = %scene.phase, progress = scene.progress, "headless snapshot");
        match args.format.as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(&scene)?),
            "text" => print_scene(&scene),
            other => {
                return Err(CycleError::InvalidConfig(format!(
                    "unknown format {other:?} (expected json or text)"
                )))
            }
        }
        return Ok(());
    }

    let state = app::run(&config, initial)?;
    println!("{} {}", state.selection, state.phase.phase.display_name());
    Ok(())
}

/// Logs go to stderr when headless. The screen owns stdout, so interactive
/// runs log only to the configured file.
fn init_logging(config: &ScreenConfig, headless: bool) -> Result<()> {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
    };

    if headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .init();
    } else if let Some(path) = &config.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }
    Ok(())
}

fn hex(color: Color) -> String {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02X}{:02X}{:02X}",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}

fn print_scene(scene: &Scene) {
    println!("=== {} {} ===", scene.clock, scene.meridiem);
    println!(
        "Phase: {} ({:.0}% through)",
        scene.label,
        scene.progress * 100.0
    );
    println!("Accent: {}", hex(scene.accent));
    println!(
        "Sky: {} / {} / {}",
        hex(scene.palette.top),
        hex(scene.palette.mid),
        hex(scene.palette.bottom)
    );
    for body in &scene.bodies {
        let name = match body.kind {
            BodyKind::Sun { .. } => "Sun",
            BodyKind::Moon { .. } => "Moon",
        };
        println!(
            "{}: {:.0}% down the sky, opacity {:.2}",
            name,
            body.vertical_fraction() * 100.0,
            body.opacity
        );
    }
    println!("Stars: {:.2}", scene.star_opacity);
    match scene.cloud_opacity {
        Some(opacity) => println!("Clouds: {:.2}", opacity),
        None => println!("Clouds: hidden"),
    }
}
