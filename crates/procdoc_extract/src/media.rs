//! ffmpeg-backed media toolkit.

use async_trait::async_trait;
use procdoc_error::{ExtractionError, ExtractionErrorKind, ProcdocResult};
use procdoc_interface::{AudioClip, MediaToolkit, SampledImage};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, instrument};

const AUDIO_FILE: &str = "audio.mp3";
const FRAME_PREFIX: &str = "frame_";

/// Media toolkit that shells out to an `ffmpeg` binary.
#[derive(Debug, Clone)]
pub struct FfmpegToolkit {
    binary: PathBuf,
}

impl Default for FfmpegToolkit {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl FfmpegToolkit {
    /// Use the given ffmpeg binary (a bare name is looked up on `PATH`).
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Check that the binary runs.
    ///
    /// # Errors
    ///
    /// Returns a media tool error if ffmpeg is missing or exits unsuccessfully.
    pub async fn probe(&self) -> ProcdocResult<()> {
        self.run(["-version"]).await
    }

    async fn run<I, S>(&self, args: I) -> ProcdocResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = Command::new(&self.binary)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                ExtractionError::new(ExtractionErrorKind::MediaTool(format!(
                    "Failed to run {}: {}",
                    self.binary.display(),
                    e
                )))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractionError::new(ExtractionErrorKind::MediaTool(format!(
                "{} exited with {}: {}",
                self.binary.display(),
                output.status,
                stderr.trim()
            )))
            .into());
        }
        Ok(())
    }
}

async fn read_file(path: &Path) -> Result<Vec<u8>, ExtractionError> {
    tokio::fs::read(path).await.map_err(|e| {
        ExtractionError::new(ExtractionErrorKind::MediaTool(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        )))
    })
}

#[async_trait]
impl MediaToolkit for FfmpegToolkit {
    #[instrument(skip(self), fields(video = %video.display()))]
    async fn extract_audio(&self, video: &Path, workdir: &Path) -> ProcdocResult<AudioClip> {
        let output = workdir.join(AUDIO_FILE);
        self.run([
            OsStr::new("-hide_banner"),
            OsStr::new("-loglevel"),
            OsStr::new("error"),
            OsStr::new("-y"),
            OsStr::new("-i"),
            video.as_os_str(),
            OsStr::new("-vn"),
            OsStr::new("-ac"),
            OsStr::new("1"),
            OsStr::new("-ar"),
            OsStr::new("16000"),
            OsStr::new("-b:a"),
            OsStr::new("64k"),
            output.as_os_str(),
        ])
        .await?;

        let bytes = read_file(&output).await?;
        debug!(bytes = bytes.len(), "Extracted audio track");
        Ok(AudioClip::new(bytes, AUDIO_FILE, "audio/mpeg"))
    }

    #[instrument(skip(self), fields(video = %video.display(), interval_secs = interval.as_secs_f64()))]
    async fn sample_frames(
        &self,
        video: &Path,
        interval: Duration,
        workdir: &Path,
    ) -> ProcdocResult<Vec<SampledImage>> {
        let filter = format!(
            "fps=1/{},scale='min(1280,iw)':-2",
            interval.as_secs_f64()
        );
        let pattern = workdir.join(format!("{FRAME_PREFIX}%05d.jpg"));
        self.run([
            OsStr::new("-hide_banner"),
            OsStr::new("-loglevel"),
            OsStr::new("error"),
            OsStr::new("-y"),
            OsStr::new("-i"),
            video.as_os_str(),
            OsStr::new("-vf"),
            OsStr::new(&filter),
            OsStr::new("-q:v"),
            OsStr::new("3"),
            pattern.as_os_str(),
        ])
        .await?;

        let mut paths = Vec::new();
        let mut entries = tokio::fs::read_dir(workdir).await.map_err(|e| {
            ExtractionError::new(ExtractionErrorKind::MediaTool(format!(
                "Failed to list frames: {}",
                e
            )))
        })?;
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            ExtractionError::new(ExtractionErrorKind::MediaTool(format!(
                "Failed to list frames: {}",
                e
            )))
        })? {
            let path = entry.path();
            let is_frame = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(FRAME_PREFIX) && name.ends_with(".jpg"));
            if is_frame {
                paths.push(path);
            }
        }
        // zero-padded names sort in capture order
        paths.sort();

        let mut frames = Vec::with_capacity(paths.len());
        for (position, path) in paths.iter().enumerate() {
            let bytes = read_file(path).await?;
            frames.push(SampledImage::new(position + 1, bytes, "image/jpeg"));
        }
        debug!(frames = frames.len(), "Sampled frames");
        Ok(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_binary_is_media_tool_error() {
        let toolkit = FfmpegToolkit::new("/nonexistent/ffmpeg-procdoc");
        let err = toolkit.probe().await.unwrap_err();
        assert!(err.to_string().contains("Media tool failed"));
    }
}
