//! External synthesizer invocation

use std::io::Write;
use std::path::Path;
use std::process::Command;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to stage sequence file: {0}")]
    TempFile(#[source] std::io::Error),
    #[error("Failed to launch renderer '{exe}': {source}")]
    Spawn {
        exe: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Renderer '{exe}' exited with {status}: {stderr}")]
    Failed {
        exe: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Wrapper around the command-line wavetable synthesizer.
///
/// The renderer is invoked non-interactively per asset and only its
/// exit status decides success; stderr is captured for diagnostics.
#[derive(Debug, Clone)]
pub struct Renderer {
    exe: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::with_executable("fluidsynth")
    }

    pub fn with_executable(exe: impl Into<String>) -> Self {
        Self { exe: exe.into() }
    }

    pub fn executable(&self) -> &str {
        &self.exe
    }

    /// Render `sequence` through `soundfont` into a wav at `output`,
    /// blocking until the external process exits.
    ///
    /// The sequence bytes go to a uniquely named temporary file that
    /// is removed on every exit path, including failure.
    pub fn render(
        &self,
        sequence: &[u8],
        soundfont: &Path,
        gain: f32,
        output: &Path,
    ) -> Result<(), RenderError> {
        let mut staged = tempfile::Builder::new()
            .prefix("chordsmith-")
            .suffix(".mid")
            .tempfile()
            .map_err(RenderError::TempFile)?;
        staged.write_all(sequence).map_err(RenderError::TempFile)?;
        staged.flush().map_err(RenderError::TempFile)?;

        debug!(
            exe = %self.exe,
            input = %staged.path().display(),
            output = %output.display(),
            gain,
            "Invoking renderer"
        );

        let result = Command::new(&self.exe)
            .arg("-ni")
            .arg("-g")
            .arg(gain.to_string())
            .arg(soundfont)
            .arg(staged.path())
            .arg("-F")
            .arg(output)
            .arg("-T")
            .arg("wav")
            .output()
            .map_err(|source| RenderError::Spawn { exe: self.exe.clone(), source })?;

        if !result.status.success() {
            return Err(RenderError::Failed {
                exe: self.exe.clone(),
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_render_success_with_stub() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = Renderer::with_executable("true");
        renderer
            .render(b"MThd", &dir.path().join("missing.sf2"), 2.0, &dir.path().join("out.wav"))
            .unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_render_nonzero_exit_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = Renderer::with_executable("false");
        let err = renderer
            .render(b"MThd", &dir.path().join("missing.sf2"), 2.0, &dir.path().join("out.wav"))
            .unwrap_err();
        assert!(matches!(err, RenderError::Failed { .. }));
    }

    #[test]
    fn test_render_missing_executable_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = Renderer::with_executable("chordsmith-no-such-renderer");
        let err = renderer
            .render(b"MThd", &dir.path().join("missing.sf2"), 2.0, &dir.path().join("out.wav"))
            .unwrap_err();
        assert!(matches!(err, RenderError::Spawn { .. }));
    }
}
