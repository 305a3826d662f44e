//! Email attachments

use std::{collections::BTreeMap, fs, io, path::Path};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// One attachment entry, mapping file names to base64-encoded content
///
/// The provider accepts several files per entry, e.g.
/// `{"report.pdf": "<base64>", "invoice.pdf": "<base64>"}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attachment(BTreeMap<String, String>);

impl Attachment {
    /// Create an attachment holding a single file, encoding `content` as base64.
    pub fn from_bytes(filename: impl Into<String>, content: impl AsRef<[u8]>) -> Self {
        Self::default().with_bytes(filename, content)
    }

    /// Create an attachment holding a single file whose content is already base64-encoded.
    pub fn from_base64(filename: impl Into<String>, encoded: impl Into<String>) -> Self {
        Self::default().with_base64(filename, encoded)
    }

    /// Read a file from disk into an attachment named after the file.
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();

        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} has no usable file name", path.display()),
                )
            })?
            .to_string();

        Ok(Self::from_bytes(filename, fs::read(path)?))
    }

    /// Add another file to this entry, encoding `content` as base64.
    pub fn with_bytes(self, filename: impl Into<String>, content: impl AsRef<[u8]>) -> Self {
        self.with_base64(filename, STANDARD.encode(content))
    }

    /// Add another already-encoded file to this entry.
    pub fn with_base64(mut self, filename: impl Into<String>, encoded: impl Into<String>) -> Self {
        self.0.insert(filename.into(), encoded.into());
        self
    }

    /// Iterate over `(filename, base64 content)` pairs in file name order.
    pub fn files(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, content)| (name.as_str(), content.as_str()))
    }

    /// Returns `true` if the entry holds no files.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_from_bytes_encodes_base64() {
        let attachment = Attachment::from_bytes("file.txt", "This is a test");

        assert_eq!(
            attachment.files().collect::<Vec<_>>(),
            vec![("file.txt", "VGhpcyBpcyBhIHRlc3Q=")]
        );
    }

    #[test]
    fn test_multiple_files_serialize_as_one_object() -> TestResult {
        let attachment = Attachment::from_base64("file2.pdf", "VGhpcyBpcyBhIHRlc3Q=")
            .with_bytes("file.pdf", "This is a test");

        assert_eq!(
            serde_json::to_string(&attachment)?,
            r#"{"file.pdf":"VGhpcyBpcyBhIHRlc3Q=","file2.pdf":"VGhpcyBpcyBhIHRlc3Q="}"#
        );

        Ok(())
    }

    #[test]
    fn test_from_path_uses_file_name() -> TestResult {
        let dir = std::env::temp_dir().join(format!("rusender-{}", uuid::Uuid::now_v7()));
        fs::create_dir_all(&dir)?;
        let path = dir.join("note.txt");
        fs::write(&path, "This is a test")?;

        let attachment = Attachment::from_path(&path)?;

        assert_eq!(
            attachment,
            Attachment::from_base64("note.txt", "VGhpcyBpcyBhIHRlc3Q=")
        );

        fs::remove_dir_all(&dir)?;

        Ok(())
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = Attachment::from_path("/definitely/not/here.txt");

        assert!(matches!(result, Err(e) if e.kind() == io::ErrorKind::NotFound));
    }

    #[test]
    fn test_default_attachment_is_empty() {
        assert!(Attachment::default().is_empty());
        assert!(!Attachment::from_bytes("a", "b").is_empty());
    }
}
