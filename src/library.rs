//! Discovering the images that make up a deck.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use tracing::{debug, info};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("failed to read directory {path}: {source}")]
    ReadDir { path: PathBuf, source: io::Error },
    #[error("no image files found in directory: {0}")]
    Empty(PathBuf),
}

/// One image on disk and the caption it is searched and shared by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSource {
    pub path: PathBuf,
    pub caption: String,
}

impl SlideSource {
    pub fn new(path: PathBuf) -> Self {
        let caption = path
            .file_stem()
            .map(|s| s.to_string_lossy().replace(['_', '-'], " "))
            .unwrap_or_default();
        Self { path, caption }
    }
}

pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Image files directly inside `dir`, sorted by file name.
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>, LibraryError> {
    let read_err = |source| LibraryError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        } else {
            debug!(path = %path.display(), "skipping non-image entry");
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        return Err(LibraryError::Empty(dir.to_path_buf()));
    }
    Ok(paths)
}

pub fn load_slides(dir: &Path, shuffle: bool) -> Result<Vec<SlideSource>, LibraryError> {
    let mut paths = load_sorted_image_paths(dir)?;
    if shuffle {
        paths.shuffle(&mut rand::rng());
    }
    info!(dir = %dir.display(), count = paths.len(), shuffle, "slides discovered");
    Ok(paths.into_iter().map(SlideSource::new).collect())
}
