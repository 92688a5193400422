//! Completed registrations and where their photos end up

use std::path::{Path, PathBuf};

use teloxide::types::ChatId;

/// Extension used when the platform path carries none
pub const DEFAULT_EXTENSION: &str = "jpg";

/// A finished registration, handed over to the caller by value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub chat_id: ChatId,
    pub display_name: String,
    /// Platform file id of the saved photo variant
    pub media_reference: String,
    /// Local path the photo was written to
    pub media_path: PathBuf,
}

/// Extracts a safe, lower-case extension from a remote file path
///
/// ```
/// use contest_bot::conversation::file_extension;
///
/// assert_eq!(file_extension("photos/file_12.JPG"), "jpg");
/// assert_eq!(file_extension("photos/file_12"), "jpg");
/// ```
pub fn file_extension(remote_path: &str) -> String {
    let file_name = remote_path.rsplit('/').next().unwrap_or(remote_path);
    let ext = match file_name.rsplit_once('.') {
        Some((_, ext)) => sanitize_extension(ext),
        None => String::new(),
    };
    if ext.is_empty() {
        DEFAULT_EXTENSION.to_string()
    } else {
        ext
    }
}

fn sanitize_extension(ext: &str) -> String {
    ext.chars()
        .filter(char::is_ascii_alphanumeric)
        .take(8)
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Builds `<dir>/<name>.<ext>`
pub fn photo_path(photos_dir: &Path, name: &str, extension: &str) -> PathBuf {
    let ext = sanitize_extension(extension);
    let ext = if ext.is_empty() { DEFAULT_EXTENSION } else { ext.as_str() };
    photos_dir.join(format!("{}.{}", name, ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("photos/file_3.jpg"), "jpg");
        assert_eq!(file_extension("photos/file_3.PNG"), "png");
        assert_eq!(file_extension("file.tar.gz"), "gz");
        assert_eq!(file_extension("dir.with.dots/file"), "jpg");
        assert_eq!(file_extension(""), "jpg");
        assert_eq!(file_extension("photos/file./"), "jpg");
    }

    #[test]
    fn test_photo_path() {
        let path = photo_path(Path::new("photos"), "Anna_Maria", "jpg");
        assert_eq!(path, PathBuf::from("photos/Anna_Maria.jpg"));
    }

    #[test]
    fn test_photo_path_sanitizes_extension() {
        let path = photo_path(Path::new("photos"), "Anna", "../x");
        assert_eq!(path, PathBuf::from("photos/Anna.x"));

        let path = photo_path(Path::new("photos"), "Anna", "");
        assert_eq!(path, PathBuf::from("photos/Anna.jpg"));
    }
}
