//! Grid enumeration and batch orchestration

use std::path::{Path, PathBuf};

use crossbeam_channel::bounded;
use thiserror::Error;
use tracing::{debug, info, warn};

use chordsmith_core::{
    canonical_key, melodic_hit, percussion_hit, pitch_name, AssetClass, AssetKind, ChordQuality,
    DrumPiece, EncodeError, SequenceFile, Voicing,
};

use crate::renderer::{RenderError, Renderer};

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Soundfont not found: {0}")]
    SoundfontMissing(PathBuf),
    #[error("Failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Rendering {cell} failed: {source}")]
    Render {
        cell: String,
        #[source]
        source: RenderError,
    },
}

/// One asset class scheduled for rendering
#[derive(Debug, Clone)]
pub struct ClassJob {
    pub class: AssetClass,
    pub soundfont: PathBuf,
    pub output_dir: PathBuf,
    pub gain: f32,
}

impl ClassJob {
    /// Job with the class's legacy defaults, output under `root`
    pub fn new(class: AssetClass, soundfont: impl Into<PathBuf>, root: &Path) -> Self {
        Self {
            class,
            soundfont: soundfont.into(),
            output_dir: root.join(class.default_output_dir()),
            gain: class.gain(),
        }
    }
}

/// A fully encoded cell, ready to hand to the renderer
#[derive(Debug, Clone)]
pub struct RenderTask {
    /// `class/stem`, used in progress logs and failure reports
    pub cell: String,
    pub bytes: Vec<u8>,
    pub soundfont: PathBuf,
    pub output: PathBuf,
    pub gain: f32,
}

/// A cell that could not be rendered (or encoded)
#[derive(Debug, Clone)]
pub struct CellFailure {
    pub cell: String,
    pub reason: String,
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    pub rendered: usize,
    /// Cells dropped before rendering (encoding errors)
    pub skipped: Vec<CellFailure>,
    /// Render failures collected in parallel mode
    pub failed: Vec<CellFailure>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty()
    }
}

/// Enumerate a class's grid as `(filename stem, encoded bytes)` pairs.
///
/// Chord grids name cells by canonical key, so colliding interval
/// patterns share a filename and the later cell overwrites the
/// earlier wav.
fn class_cells(class: AssetClass) -> Vec<(String, Result<Vec<u8>, EncodeError>)> {
    let base = class.base_pitch() as i32;
    let encode = |voicing: Result<Voicing, EncodeError>| {
        let voicing = voicing?;
        let program = class.program().unwrap_or(0);
        let events = melodic_hit(&voicing, program, class.hold_ticks(), class.velocity());
        SequenceFile::new(events).to_bytes()
    };

    match class.kind() {
        AssetKind::Chords => {
            let mut cells = Vec::with_capacity(12 * ChordQuality::ALL.len());
            for root_pc in 0u8..12 {
                for quality in ChordQuality::ALL {
                    let stem = canonical_key(root_pc, quality.intervals());
                    debug!(
                        root = pitch_name(root_pc),
                        quality = quality.name(),
                        cell = %stem,
                        "Encoding chord cell"
                    );
                    let bytes = encode(Voicing::chord(base + root_pc as i32, quality));
                    cells.push((stem, bytes));
                }
            }
            cells
        }
        AssetKind::NoteRun(len) => (0..len)
            .map(|i| {
                let bytes = encode(Voicing::single(base + i as i32));
                (i.to_string(), bytes)
            })
            .collect(),
        AssetKind::Percussion => DrumPiece::ALL
            .iter()
            .map(|piece| {
                let events =
                    percussion_hit(piece.key(), class.hold_ticks(), class.velocity());
                let bytes = SequenceFile::new(events).to_bytes();
                (piece.name().to_string(), bytes)
            })
            .collect(),
    }
}

/// Validate each job's inputs and encode its grid.
///
/// Missing soundfonts and uncreatable output directories fail the
/// whole batch before any render; an encoding error drops only its
/// own cell, reported in the returned skip list.
pub fn build_tasks(jobs: &[ClassJob]) -> Result<(Vec<RenderTask>, Vec<CellFailure>), BatchError> {
    let mut tasks = Vec::new();
    let mut skipped = Vec::new();

    for job in jobs {
        if !job.soundfont.exists() {
            return Err(BatchError::SoundfontMissing(job.soundfont.clone()));
        }
        std::fs::create_dir_all(&job.output_dir).map_err(|source| BatchError::OutputDir {
            path: job.output_dir.clone(),
            source,
        })?;

        for (stem, bytes) in class_cells(job.class) {
            let cell = format!("{}/{}", job.class.name(), stem);
            match bytes {
                Ok(bytes) => tasks.push(RenderTask {
                    cell,
                    bytes,
                    soundfont: job.soundfont.clone(),
                    output: job.output_dir.join(format!("{stem}.wav")),
                    gain: job.gain,
                }),
                Err(err) => {
                    warn!(cell = %cell, error = %err, "Skipping cell that failed to encode");
                    skipped.push(CellFailure { cell, reason: err.to_string() });
                }
            }
        }
    }
    Ok((tasks, skipped))
}

/// Legacy execution: strictly ordered, fail-fast.
///
/// The first render failure aborts the run; no later cell is
/// attempted and the error names the failing cell.
pub fn run_sequential(
    tasks: Vec<RenderTask>,
    renderer: &Renderer,
    skipped: Vec<CellFailure>,
) -> Result<BatchReport, BatchError> {
    let total = tasks.len();
    let mut report = BatchReport { skipped, ..Default::default() };

    for (i, task) in tasks.into_iter().enumerate() {
        info!(cell = %task.cell, n = i + 1, total, "Rendering");
        renderer
            .render(&task.bytes, &task.soundfont, task.gain, &task.output)
            .map_err(|source| BatchError::Render { cell: task.cell.clone(), source })?;
        report.rendered += 1;
    }
    Ok(report)
}

/// Hardened execution: a bounded worker pool renders independent
/// cells concurrently, failures are collected per cell, and the rest
/// of the batch still runs.
pub fn run_parallel(
    tasks: Vec<RenderTask>,
    renderer: &Renderer,
    workers: usize,
    skipped: Vec<CellFailure>,
) -> BatchReport {
    let workers = workers.max(1);
    let total = tasks.len();
    let (task_tx, task_rx) = bounded::<RenderTask>(workers);
    let (result_tx, result_rx) = bounded::<(String, Result<(), RenderError>)>(workers);

    let mut report = BatchReport { skipped, ..Default::default() };

    std::thread::scope(|scope| {
        for _ in 0..workers {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                for task in task_rx {
                    info!(cell = %task.cell, total, "Rendering");
                    let outcome =
                        renderer.render(&task.bytes, &task.soundfont, task.gain, &task.output);
                    if result_tx.send((task.cell, outcome)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(task_rx);
        drop(result_tx);

        scope.spawn(move || {
            for task in tasks {
                if task_tx.send(task).is_err() {
                    break;
                }
            }
        });

        for (cell, outcome) in result_rx {
            match outcome {
                Ok(()) => report.rendered += 1,
                Err(err) => {
                    warn!(cell = %cell, error = %err, "Render failed");
                    report.failed.push(CellFailure { cell, reason: err.to_string() });
                }
            }
        }
    });
    report
}
