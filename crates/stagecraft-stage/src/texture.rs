//! Texture handles and asynchronous texture loaders

use futures::channel::oneshot;
use futures::future::{self, FutureExt, LocalBoxFuture};
use serde::Serialize;
use stagecraft_core::{Result, StageError, TextureId};
use std::cell::Cell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::thread;

/// An opaque, cheaply clonable reference to a loaded texture
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextureHandle {
    pub id: TextureId,
    pub path: String,
    pub width: f32,
    pub height: f32,
}

impl TextureHandle {
    pub fn new(id: TextureId, path: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            id,
            path: path.into(),
            width,
            height,
        }
    }
}

/// Loads textures asynchronously.
///
/// Futures are `!Send` and are driven on the same cooperative loop that
/// delivers ticks. Failures resolve to `Err`; there is no retry or timeout.
pub trait TextureLoader {
    fn load(&self, path: &str) -> LocalBoxFuture<'static, Result<TextureHandle>>;
}

/// Serves textures from an in-memory catalog of known sizes.
#[derive(Default)]
pub struct StaticTextureLoader {
    entries: HashMap<String, TextureHandle>,
}

impl StaticTextureLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture of the given pixel size under `path`
    pub fn insert(&mut self, path: &str, width: f32, height: f32) {
        let id = TextureId(self.entries.len() as u32 + 1);
        self.entries
            .insert(path.to_string(), TextureHandle::new(id, path, width, height));
    }

    pub fn with_texture(mut self, path: &str, width: f32, height: f32) -> Self {
        self.insert(path, width, height);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TextureLoader for StaticTextureLoader {
    fn load(&self, path: &str) -> LocalBoxFuture<'static, Result<TextureHandle>> {
        let result = self
            .entries
            .get(path)
            .cloned()
            .ok_or_else(|| StageError::TextureNotFound(path.to_string()));
        future::ready(result).boxed_local()
    }
}

/// Reads image headers from a directory to learn texture sizes.
///
/// Each header is read on its own short-lived thread, so a slow disk never
/// stalls the tick loop; the result is picked up by a later pump.
pub struct FileTextureLoader {
    root: PathBuf,
    next_id: Cell<u32>,
}

impl FileTextureLoader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            next_id: Cell::new(1),
        }
    }
}

impl TextureLoader for FileTextureLoader {
    fn load(&self, path: &str) -> LocalBoxFuture<'static, Result<TextureHandle>> {
        let id = TextureId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let full_path = self.root.join(path);
        let path = path.to_string();

        async move {
            let (tx, rx) = oneshot::channel();
            thread::spawn(move || {
                let _ = tx.send(image::image_dimensions(&full_path));
            });
            let dimensions = rx
                .await
                .map_err(|_| StageError::LoadCancelled(path.clone()))?;
            let (width, height) = dimensions.map_err(|err| match err {
                image::ImageError::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
                    StageError::TextureNotFound(path.clone())
                }
                other => StageError::TextureDecode {
                    path: path.clone(),
                    reason: other.to_string(),
                },
            })?;
            Ok(TextureHandle::new(id, path, width as f32, height as f32))
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn static_loader_resolves_known_paths() {
        let loader = StaticTextureLoader::new()
            .with_texture("card.png", 100.0, 140.0)
            .with_texture("spark.png", 16.0, 16.0);
        assert_eq!(loader.len(), 2);

        let card = block_on(loader.load("card.png")).unwrap();
        assert_eq!(card.path, "card.png");
        assert_eq!(card.width, 100.0);
        assert_eq!(card.height, 140.0);

        let spark = block_on(loader.load("spark.png")).unwrap();
        assert_ne!(card.id, spark.id);
    }

    #[test]
    fn static_loader_rejects_unknown_paths() {
        let loader = StaticTextureLoader::new();
        let err = block_on(loader.load("missing.png")).unwrap_err();
        assert_eq!(err, StageError::TextureNotFound("missing.png".into()));
    }

    #[test]
    fn file_loader_reports_missing_files() {
        let loader = FileTextureLoader::new(std::env::temp_dir().join("stagecraft-no-such-dir"));
        let err = block_on(loader.load("nope.png")).unwrap_err();
        assert_eq!(err, StageError::TextureNotFound("nope.png".into()));
    }

    #[test]
    fn file_loader_reads_dimensions() {
        let dir = std::env::temp_dir().join(format!("stagecraft-tex-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let img = image::RgbaImage::new(12, 7);
        img.save(dir.join("tiny.png")).unwrap();

        let loader = FileTextureLoader::new(&dir);
        let tex = block_on(loader.load("tiny.png")).unwrap();
        assert_eq!((tex.width, tex.height), (12.0, 7.0));

        std::fs::remove_dir_all(&dir).ok();
    }
}
