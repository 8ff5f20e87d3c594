use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use uuid::Uuid;

use crate::error::AppError;

const AUDIO_URL_PREFIX: &str = "/audio";

/// Write-once store for generated audio under the public audio directory.
pub struct AudioStore {
    dir: PathBuf,
}

impl AudioStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Saves `audio` under a fresh random name and returns its public URL.
    pub async fn save(&self, audio: &[u8]) -> Result<String, AppError> {
        fs::create_dir_all(&self.dir).await?;

        let file_name = format!("{}.mp3", Uuid::new_v4());
        let path = self.dir.join(&file_name);

        // create_new: an existing asset is never overwritten
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;
        write_or_remove(file, &path, audio).await?;

        let url = format!("{}/{}", AUDIO_URL_PREFIX, file_name);
        tracing::info!("Audio saved to: {}", url);
        Ok(url)
    }
}

/// Writes and flushes `audio`, closing `writer` on every path. On failure the
/// partial file at `path` is removed so no unreferenced asset is left behind.
async fn write_or_remove<W>(mut writer: W, path: &Path, audio: &[u8]) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin,
{
    let result = async {
        writer.write_all(audio).await?;
        writer.flush().await
    }
    .await;
    drop(writer);

    if let Err(e) = result {
        tracing::error!("Failed to write audio to {}: {}", path.display(), e);
        if let Err(remove_err) = fs::remove_file(path).await {
            tracing::warn!("Failed to remove partial audio {}: {}", path.display(), remove_err);
        }
        return Err(e.into());
    }
    Ok(())
}
