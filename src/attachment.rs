use std::fs;
use std::path::Path;

use crate::errors::{CognivoError, CognivoResult};
use crate::utils::detect_media_type;

/// A file chosen for the next submission. Only one attachment is carried at
/// a time; picking another file replaces it.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Loads a file from disk, guessing its media type from the extension.
    pub fn from_path(path: &str) -> CognivoResult<Self> {
        let bytes = fs::read(path).map_err(|e| {
            CognivoError::attachment_error(format!("could not read {}: {}", path, e))
        })?;

        let name = Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("attachment")
            .to_string();

        Ok(Attachment {
            name,
            media_type: detect_media_type(path),
            bytes,
        })
    }

    /// Like [`Attachment::from_path`] but restricted to images, mirroring a
    /// camera-style picker.
    pub fn image_from_path(path: &str) -> CognivoResult<Self> {
        let attachment = Self::from_path(path)?;
        if !attachment.media_type.starts_with("image/") {
            return Err(CognivoError::attachment_error(format!(
                "{} is not an image",
                attachment.name
            )));
        }
        Ok(attachment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, contents: &[u8]) -> String {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_from_path_reads_bytes_and_media_type() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "cat.png", b"not really a png");

        let attachment = Attachment::from_path(&path).unwrap();
        assert_eq!(attachment.name, "cat.png");
        assert_eq!(attachment.media_type, "image/png");
        assert_eq!(attachment.bytes, b"not really a png");
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        assert!(Attachment::from_path(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_image_from_path_rejects_non_image() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "notes.txt", b"plain text");
        assert!(Attachment::image_from_path(&path).is_err());
    }

    #[test]
    fn test_image_from_path_accepts_image() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "shot.jpg", b"jpegish");
        let attachment = Attachment::image_from_path(&path).unwrap();
        assert_eq!(attachment.media_type, "image/jpeg");
    }
}
