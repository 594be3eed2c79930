//! Image asset loading.
//!
//! Every asset is read once, when the deck is built.  A failure never
//! escapes this module as an error: it becomes [`Visual::Missing`] carrying
//! the message that the page shows in place of the picture.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::codecs::gif::GifDecoder;
use image::imageops::{self, FilterType};
use image::{AnimationDecoder, ImageError, RgbaImage};
use thiserror::Error;

use super::animation::FrameCycle;

/// Nominal size of the full-width result images.
pub const WIDE_STILL: (u32, u32) = (700, 500);
/// Nominal size of the side-by-side prompt images.
pub const COLUMN_STILL: (u32, u32) = (500, 350);
/// Nominal size of the menu animation frames.
pub const BANNER_ANIMATION: (u32, u32) = (800, 400);

/// Errors raised while reading an image asset.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The file could not be opened.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a decodable image.
    #[error("{}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    /// An animation decoded to zero frames.
    #[error("{}: animation has no frames", .path.display())]
    NoFrames { path: PathBuf },
}

/// Filenames of every image the slideshow shows, resolved against one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub user_engagement: PathBuf,
    pub prompt_graph: PathBuf,
    pub prompt_kmeans: PathBuf,
    pub style_kmeans: PathBuf,
    pub menu_animation: PathBuf,
}

impl AssetPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            user_engagement: dir.join("ubc.png"),
            prompt_graph: dir.join("pbs2.png"),
            prompt_kmeans: dir.join("kmeans1.png"),
            style_kmeans: dir.join("kmeans2.png"),
            menu_animation: dir.join("bunny.gif"),
        }
    }
}

/// What an image slot on a page displays.
#[derive(Debug, Clone)]
pub enum Visual {
    Still(Arc<RgbaImage>),
    Animated(FrameCycle),
    /// Load failed; holds the inline message.
    Missing(String),
}

impl Visual {
    /// Load a still image, or record why it could not be loaded.
    pub fn still(path: &Path, size: (u32, u32)) -> Self {
        match load_still(path, size) {
            Ok(img) => Visual::Still(Arc::new(img)),
            Err(e) => Self::missing(e),
        }
    }

    /// Load an animated GIF, or record why it could not be loaded.
    pub fn animated(path: &Path, size: (u32, u32)) -> Self {
        match load_frames(path, size) {
            Ok(cycle) => Visual::Animated(cycle),
            Err(e) => Self::missing(e),
        }
    }

    fn missing(e: AssetError) -> Self {
        tracing::warn!(error = %e, "image asset unavailable");
        Visual::Missing(format!("Error loading image: {e}"))
    }

    /// The frame to draw right now, if any.
    pub fn frame(&self) -> Option<&RgbaImage> {
        match self {
            Visual::Still(img) => Some(img.as_ref()),
            Visual::Animated(cycle) => Some(cycle.current()),
            Visual::Missing(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Visual::Missing(msg) => Some(msg.as_str()),
            _ => None,
        }
    }
}

/// Decode `path` and stretch it to exactly `size` pixels.
pub fn load_still(path: &Path, (w, h): (u32, u32)) -> Result<RgbaImage, AssetError> {
    let img = image::open(path).map_err(|source| match source {
        ImageError::IoError(source) => AssetError::Io { path: path.to_path_buf(), source },
        source => AssetError::Decode { path: path.to_path_buf(), source },
    })?;
    Ok(img.resize_exact(w, h, FilterType::Triangle).to_rgba8())
}

/// Decode every frame of a GIF, each stretched to `size` pixels.
pub fn load_frames(path: &Path, (w, h): (u32, u32)) -> Result<FrameCycle, AssetError> {
    let file = File::open(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decode_err = |source| AssetError::Decode { path: path.to_path_buf(), source };

    let decoder = GifDecoder::new(BufReader::new(file)).map_err(decode_err)?;
    let frames = decoder.into_frames().collect_frames().map_err(decode_err)?;

    let resized: Vec<RgbaImage> = frames
        .into_iter()
        .map(|f| imageops::resize(f.buffer(), w, h, FilterType::Triangle))
        .collect();

    let cycle = FrameCycle::new(resized).ok_or_else(|| AssetError::NoFrames { path: path.to_path_buf() })?;
    tracing::debug!(path = %path.display(), frames = cycle.len(), "decoded animation");
    Ok(cycle)
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn still_is_stretched_to_nominal_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.png");
        write_png(&path);

        let img = load_still(&path, COLUMN_STILL).unwrap();
        assert_eq!(img.dimensions(), COLUMN_STILL);
    }

    #[test]
    fn gif_frames_are_all_decoded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.gif");
        write_gif(&path, 4);

        let cycle = load_frames(&path, (16, 8)).unwrap();
        assert_eq!(cycle.len(), 4);
        assert_eq!(cycle.current().dimensions(), (16, 8));
    }

    #[test]
    fn missing_file_becomes_inline_message() {
        let dir = tempfile::tempdir().unwrap();
        let visual = Visual::still(&dir.path().join("nope.png"), WIDE_STILL);

        let msg = visual.error_message().unwrap();
        assert!(msg.starts_with("Error loading image: "));
        assert!(msg.contains("nope.png"));
        assert!(visual.frame().is_none());
    }

    #[test]
    fn garbage_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(load_still(&path, WIDE_STILL).is_err());
        assert!(Visual::animated(&path, BANNER_ANIMATION).error_message().is_some());
    }
}
