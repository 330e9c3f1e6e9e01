use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scrollstage", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dump the built-in venue scene catalog as JSON.
    Catalog(CatalogArgs),
    /// Validate a scene set and print its resolved page layout.
    Validate(ValidateArgs),
    /// Drive a scripted wheel session and emit one frame JSON per line.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct CatalogArgs {
    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input scene set JSON (array of scene configs).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Viewport height in pixels to lay the page out against.
    #[arg(long, default_value_t = 900.0)]
    viewport_height: f64,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input scene set JSON; the built-in catalog when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 900.0)]
    viewport_height: f64,

    /// Simulated frame rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Total simulated duration in seconds.
    #[arg(long, default_value_t = 6.0)]
    seconds: f64,

    /// Wheel delta fed per frame while input is active.
    #[arg(long, default_value_t = 40.0)]
    wheel_delta: f64,

    /// Stop feeding input after this many seconds so the settle and snap
    /// behavior is visible.
    #[arg(long, default_value_t = 2.0)]
    coast_after: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Catalog(args) => cmd_catalog(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_scene_set(path: &Path) -> anyhow::Result<Vec<scrollstage::SceneConfig>> {
    let f = File::open(path).with_context(|| format!("open scene set '{}'", path.display()))?;
    let r = BufReader::new(f);
    let scenes: Vec<scrollstage::SceneConfig> =
        serde_json::from_reader(r).with_context(|| "parse scene set JSON")?;
    Ok(scenes)
}

fn build_stage(
    scenes: Vec<scrollstage::SceneConfig>,
    viewport_height: f64,
) -> anyhow::Result<scrollstage::Stage> {
    let viewport = scrollstage::Viewport::new(viewport_height)?;
    let mut stage = scrollstage::Stage::new(viewport, scrollstage::StageConfig::default())?;
    for scene in scenes {
        stage.register_scene(scene)?;
    }
    Ok(stage)
}

fn cmd_catalog(args: CatalogArgs) -> anyhow::Result<()> {
    let scenes = scrollstage::scenes::venue_catalog()?;
    let json = serde_json::to_string_pretty(&scenes)?;
    match args.out {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("write catalog '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let scenes = read_scene_set(&args.in_path)?;
    let stage = build_stage(scenes, args.viewport_height)?;

    for id in stage_scene_ids(&stage) {
        let range = stage.scene_range(&id).expect("registered scene has a range");
        println!("{id}: [{:.0}, {:.0}]", range.start, range.end);
    }
    println!("max_scroll: {:.0}", stage.max_scroll());
    eprintln!("ok");
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let scenes = match &args.in_path {
        Some(path) => read_scene_set(path)?,
        None => scrollstage::scenes::venue_catalog()?,
    };
    let mut stage = build_stage(scenes, args.viewport_height)?;

    let dt = 1.0 / f64::from(args.fps.max(1));
    let frames = (args.seconds / dt).ceil() as u64;
    for frame in 0..frames {
        let t = frame as f64 * dt;
        if t < args.coast_after {
            stage.push_input(args.wheel_delta, scrollstage::InputSource::Wheel);
        }
        let out = stage.tick(dt);
        println!("{}", serde_json::to_string(&out)?);
    }
    eprintln!(
        "simulated {frames} frames, final offset {:.1}",
        stage.current_offset()
    );
    Ok(())
}

fn stage_scene_ids(stage: &scrollstage::Stage) -> Vec<String> {
    stage.scene_ids().map(str::to_string).collect()
}
