//! Effects preview - runs the popup and guide headlessly and reports what
//! they drew.
//!
//! Useful for tuning `[effects]` values without launching the game.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glamour::effects::{Timestep, MAX_PARTICLES};
use glamour::ui::{InputState, Rect, UIRenderer};
use glamour::{telemetry, Achievement, AchievementPopup, FeatureGuide, FeaturesBanner, GlamourConfig};

/// Headless particle effects preview
#[derive(Parser)]
#[command(name = "effects_preview")]
#[command(about = "Step the plugin's particle effects and report draw totals", long_about = None)]
struct Cli {
    /// Plugin config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "glamour.toml")]
    config: PathBuf,

    /// Frames to simulate
    #[arg(short, long, default_value_t = 300)]
    frames: u32,

    /// Fix the random seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Step by measured frame time instead of a fixed 1/60 s
    #[arg(long)]
    measured: bool,

    /// Achievement title to celebrate
    #[arg(short, long, default_value = "Glamour unlocked")]
    achievement: String,
}

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 720.0);
const GUIDE_AREA: Rect = Rect::new(40.0, 160.0, 520.0, 480.0);
const FRAME_DT: f32 = 1.0 / 60.0;
const CIRCLE_SEGMENTS: usize = 16;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GlamourConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    telemetry::init_tracing(&config.log.filter).context("installing tracing subscriber")?;

    if cli.seed.is_some() {
        config.effects.seed = cli.seed;
    }
    if cli.measured {
        config.effects.timestep = Timestep::measured();
    }
    let seed = config.effects.resolved_seed();
    tracing::info!(seed, frames = cli.frames, timestep = ?config.effects.timestep, "starting preview");

    let mut popup = AchievementPopup::with_seed(&config, seed);
    let mut guide = FeatureGuide::with_banner(&config, FeaturesBanner::with_seed(&config, seed.wrapping_add(1)));
    popup.enqueue(Achievement::new(cli.achievement, "Opened the effects preview").with_icon(1));
    guide.open();

    let mut renderer = UIRenderer::new();
    let mut input = InputState::new();
    let mut total_commands = 0usize;
    let mut total_vertices = 0usize;
    let mut peak_particles = 0usize;

    for frame in 0..cli.frames {
        input.begin_frame();
        renderer.begin_frame();

        let open = popup.draw(VIEWPORT, &input, FRAME_DT, &mut renderer);
        guide.draw(GUIDE_AREA, &input, FRAME_DT, &mut renderer);

        let live = popup.particles().len() + guide.banner().particles().len();
        peak_particles = peak_particles.max(live);
        total_commands += renderer.command_count();
        total_vertices += renderer.tessellate(CIRCLE_SEGMENTS).len();

        if frame % 60 == 0 {
            let burst = popup.particles().stats();
            let ambient = guide.banner().particles().stats();
            tracing::info!(
                frame,
                popup_open = open,
                burst_alive = burst.alive,
                burst_expired = burst.expired,
                ambient_alive = ambient.alive,
                ambient_escaped = ambient.escaped,
                commands = renderer.command_count(),
                "frame stats"
            );
        }
    }

    println!("frames:          {}", cli.frames);
    println!("draw commands:   {total_commands}");
    println!("vertices:        {total_vertices}");
    println!("peak particles:  {peak_particles} (cap {MAX_PARTICLES} per field)");

    Ok(())
}
