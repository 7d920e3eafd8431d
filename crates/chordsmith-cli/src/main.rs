//! chordsmith: batch renderer for single-hit audio assets

mod config;

use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chordsmith_core::AssetClass;
use chordsmith_render::{build_tasks, run_parallel, run_sequential, ClassJob, Renderer};

#[derive(Parser)]
#[command(
    name = "chordsmith",
    about = "Render libraries of isolated chords, notes, and drum hits through fluidsynth"
)]
struct Args {
    /// TOML config mapping asset classes to soundfonts
    #[arg(long, default_value = "chordsmith.toml")]
    config: PathBuf,

    /// Root directory for per-class output directories
    #[arg(long)]
    output_root: Option<PathBuf>,

    /// Renderer executable
    #[arg(long)]
    renderer: Option<String>,

    /// Worker count. 1 keeps the legacy sequential fail-fast mode;
    /// higher values render concurrently and report failures per cell
    #[arg(long, default_value_t = 1)]
    jobs: usize,

    /// Asset classes to render: guitar, piano, bass, sax, drums
    /// (default: all)
    classes: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("chordsmith=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();
    let cfg = config::load_config(&args.config)?;

    let classes: Vec<AssetClass> = if args.classes.is_empty() {
        AssetClass::ALL.to_vec()
    } else {
        args.classes
            .iter()
            .map(|name| {
                AssetClass::from_name(name)
                    .ok_or_else(|| anyhow::anyhow!("Unknown asset class '{name}'"))
            })
            .collect::<anyhow::Result<_>>()?
    };

    let output_root = args
        .output_root
        .or(cfg.output_root)
        .unwrap_or_else(|| PathBuf::from("."));
    let renderer = match args.renderer.or(cfg.renderer) {
        Some(exe) => Renderer::with_executable(exe),
        None => Renderer::new(),
    };

    let jobs: Vec<ClassJob> = classes
        .iter()
        .map(|&class| {
            let overrides = cfg.classes.get(class.name()).cloned().unwrap_or_default();
            let soundfont = overrides
                .soundfont
                .unwrap_or_else(|| PathBuf::from(class.default_soundfont()));
            let mut job = ClassJob::new(class, soundfont, &output_root);
            if let Some(gain) = overrides.gain {
                job.gain = gain;
            }
            if let Some(dir) = overrides.output_dir {
                job.output_dir = dir;
            }
            job
        })
        .collect();

    tracing::info!(
        renderer = renderer.executable(),
        classes = classes.len(),
        jobs = args.jobs,
        "Starting chordsmith"
    );

    let (tasks, skipped) = build_tasks(&jobs)?;
    let total = tasks.len();
    let report = if args.jobs > 1 {
        run_parallel(tasks, &renderer, args.jobs, skipped)
    } else {
        run_sequential(tasks, &renderer, skipped)?
    };

    for failure in &report.skipped {
        tracing::warn!(cell = %failure.cell, reason = %failure.reason, "Cell skipped");
    }
    for failure in &report.failed {
        tracing::error!(cell = %failure.cell, reason = %failure.reason, "Cell failed");
    }
    tracing::info!(rendered = report.rendered, total, "Batch finished");

    if !report.failed.is_empty() {
        bail!("{} of {} cells failed to render", report.failed.len(), total);
    }
    Ok(())
}
