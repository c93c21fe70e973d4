use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use fog_projector::{
    CpuSink, Engine, FixedStepClock, InputScript, InputSource, Preset, ProjectorConfig, ShapeKind,
    StaticInput,
};

#[derive(Parser, Debug)]
#[command(name = "fog-projector", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate up to a frame index and write that frame as a PNG.
    Frame(FrameArgs),
    /// Render a frame range as a numbered PNG sequence.
    Render(RenderArgs),
    /// List preset names and their keys.
    Presets,
    /// List shape archetypes in cycling order.
    Shapes,
}

#[derive(Args, Debug)]
struct SessionArgs {
    /// Projector configuration JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scripted input JSON.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Preset loaded before the first frame.
    #[arg(long)]
    preset: Option<String>,

    /// Override the configured random seed.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    session: SessionArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    session: SessionArgs,

    /// First frame written (earlier frames are still simulated).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Number of frames written.
    #[arg(long)]
    frames: u64,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Presets => {
            for (i, preset) in Preset::ALL.iter().enumerate() {
                println!("{} {}", i + 1, preset.name());
            }
            Ok(())
        }
        Command::Shapes => {
            for shape in ShapeKind::ALL {
                println!("{}", shape.name());
            }
            Ok(())
        }
    }
}

struct Session {
    engine: Engine,
    input: Box<dyn InputSource>,
    clock: FixedStepClock,
    sink: CpuSink,
}

fn open_session(args: &SessionArgs) -> anyhow::Result<Session> {
    let mut config = match &args.config {
        Some(path) => ProjectorConfig::from_json_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => ProjectorConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let input: Box<dyn InputSource> = match &args.script {
        Some(path) => Box::new(
            InputScript::from_json_path(path)
                .with_context(|| format!("load input script '{}'", path.display()))?,
        ),
        None => Box::new(StaticInput::default()),
    };

    let clock = FixedStepClock::new(config.fps);
    let sink = CpuSink::new(config.canvas)?;
    let mut engine = Engine::new(config)?;
    if let Some(name) = &args.preset
        && !engine.load_preset(name)
    {
        anyhow::bail!("unknown preset '{name}'");
    }

    Ok(Session {
        engine,
        input,
        clock,
        sink,
    })
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let Session {
        mut engine,
        mut input,
        mut clock,
        mut sink,
    } = open_session(&args.session)?;

    let wanted = args.frame + 1;
    let presented = engine.run(input.as_mut(), &mut clock, &mut sink, Some(wanted))?;
    if presented < wanted {
        anyhow::bail!(
            "input script quit after {presented} frames, before frame {}",
            args.frame
        );
    }

    ensure_parent(&args.out)?;
    sink.snapshot().write_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let Session {
        mut engine,
        mut input,
        mut clock,
        mut sink,
    } = open_session(&args.session)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    if args.start > 0 {
        engine.run(input.as_mut(), &mut clock, &mut sink, Some(args.start))?;
    }
    let mut sink = sink.with_output_dir(&args.out_dir);
    let written = engine.run(input.as_mut(), &mut clock, &mut sink, Some(args.frames))?;

    eprintln!("wrote {written} frames to {}", args.out_dir.display());
    Ok(())
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
