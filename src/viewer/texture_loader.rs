use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode image {path}: {message}")]
    Decode { path: PathBuf, message: String },
    #[error("failed to create texture for {path}: {message}")]
    Texture { path: PathBuf, message: String },
}

// Only JPEG carries a reliable orientation tag. 1 = normal.
fn exif_orientation(path: &Path, extension: &str, bytes: &[u8]) -> u16 {
    if extension != "jpg" && extension != "jpeg" {
        return 1;
    }
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read EXIF data");
            1
        }
    }
}

/// Decode an image, apply its EXIF orientation and upload it as a texture.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    let orientation = exif_orientation(path, &extension, &bytes);

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &bytes).map_err(|e| {
        LoadError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    // 3 = 180, 6 = 90 cw, 8 = 90 ccw. Mirrored variants are left as-is.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    debug!(path = %path.display(), orientation, "image decoded");

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| LoadError::Texture {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
