//! Featured-image library.
//!
//! A directory of pre-compressed images is consumed one per day: the day's
//! image is `day-{n}.{ext}` if it already exists, otherwise the first
//! unclaimed image (lexicographic order) is renamed to that name. Renaming
//! makes a re-run of the same day idempotent.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::QueueError;

/// Recognized image file extensions.
const IMAGE_EXTENSIONS: [&str; 4] = ["webp", "jpg", "jpeg", "png"];

/// Directory of featured images consumed one per day.
#[derive(Clone, Debug)]
pub struct MediaLibrary {
    dir: PathBuf,
}

impl MediaLibrary {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Claim the image for a day.
    ///
    /// Returns `None` when the library directory is missing or empty —
    /// image absence is never fatal, the post just publishes without one.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the directory or a candidate file cannot
    /// be read or renamed.
    pub fn claim(&self, day: u32) -> Result<Option<PathBuf>, QueueError> {
        // A previous run may have claimed this day already.
        for ext in IMAGE_EXTENSIONS {
            let existing = self.dir.join(format!("day-{day}.{ext}"));
            if existing.exists() {
                return Ok(Some(existing));
            }
        }

        if !self.dir.is_dir() {
            return Ok(None);
        }

        let mut candidates: Vec<PathBuf> = std::fs::read_dir(&self.dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_unclaimed_image(path))
            .collect();
        candidates.sort();

        let Some(source) = candidates.into_iter().next() else {
            return Ok(None);
        };

        let ext = detect_extension_of(&source)?;
        let target = self.dir.join(format!("day-{day}.{ext}"));
        std::fs::rename(&source, &target)?;
        info!(
            "claimed image {} as {}",
            source.display(),
            target.display()
        );
        Ok(Some(target))
    }

    /// Public URL for a claimed image under a configured base URL.
    #[must_use]
    pub fn public_url(base_url: &str, image_path: &Path) -> Option<String> {
        let name = image_path.file_name()?.to_str()?;
        Some(format!("{}/{name}", base_url.trim_end_matches('/')))
    }
}

/// An image file not yet assigned to a day.
fn is_unclaimed_image(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    if name.starts_with("day-") {
        return false;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Extension from magic bytes: JPEG and PNG are recognized, everything else
/// in the library is assumed to be pre-compressed WebP.
fn detect_extension_of(path: &Path) -> Result<&'static str, QueueError> {
    let mut header = [0u8; 8];
    let mut file = std::fs::File::open(path)?;
    let read = file.read(&mut header)?;
    Ok(detect_extension(&header[..read]))
}

fn detect_extension(data: &[u8]) -> &'static str {
    if data.starts_with(&[0xFF, 0xD8]) {
        "jpg"
    } else if data.starts_with(b"\x89PNG") {
        "png"
    } else {
        "webp"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_detect_extension() {
        assert_eq!(detect_extension(&[0xFF, 0xD8, 0xFF, 0xE0]), "jpg");
        assert_eq!(detect_extension(b"\x89PNG\r\n\x1a\n"), "png");
        assert_eq!(detect_extension(b"RIFF....WEBP"), "webp");
        assert_eq!(detect_extension(&[]), "webp");
    }

    #[test]
    fn test_claim_prefers_existing_day_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("day-3.webp"), b"RIFF").unwrap();
        std::fs::write(dir.path().join("aaa.webp"), b"RIFF").unwrap();
        let library = MediaLibrary::new(dir.path());
        let claimed = library.claim(3).unwrap().unwrap();
        assert_eq!(claimed.file_name().unwrap(), "day-3.webp");
        // The unclaimed candidate was left untouched.
        assert!(dir.path().join("aaa.webp").exists());
    }

    #[test]
    fn test_claim_renames_first_candidate() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bbb.webp"), b"RIFF").unwrap();
        std::fs::write(dir.path().join("aaa.webp"), b"RIFF").unwrap();
        let library = MediaLibrary::new(dir.path());
        let claimed = library.claim(1).unwrap().unwrap();
        assert_eq!(claimed.file_name().unwrap(), "day-1.webp");
        assert!(!dir.path().join("aaa.webp").exists());
        assert!(dir.path().join("bbb.webp").exists());
    }

    #[test]
    fn test_claim_detects_jpeg_magic() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("photo.webp"), [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
        let library = MediaLibrary::new(dir.path());
        let claimed = library.claim(2).unwrap().unwrap();
        assert_eq!(claimed.file_name().unwrap(), "day-2.jpg");
    }

    #[test]
    fn test_claim_empty_or_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let library = MediaLibrary::new(dir.path());
        assert!(library.claim(1).unwrap().is_none());

        let missing = MediaLibrary::new(dir.path().join("nope"));
        assert!(missing.claim(1).unwrap().is_none());
    }

    #[test]
    fn test_non_image_files_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"hello").unwrap();
        let library = MediaLibrary::new(dir.path());
        assert!(library.claim(1).unwrap().is_none());
    }

    #[test]
    fn test_public_url() {
        let url = MediaLibrary::public_url(
            "https://raw.example.com/repo/images/",
            Path::new("images/day-4.webp"),
        );
        assert_eq!(
            url.as_deref(),
            Some("https://raw.example.com/repo/images/day-4.webp")
        );
    }
}
