//! chordsmith-render: External synthesizer driving and batch orchestration

pub mod batch;
pub mod renderer;

pub use batch::{
    build_tasks, run_parallel, run_sequential, BatchError, BatchReport, CellFailure, ClassJob,
    RenderTask,
};
pub use renderer::{Renderer, RenderError};
