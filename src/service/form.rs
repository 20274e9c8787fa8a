//! Multipart payload sent to the upload collaborator

use crate::error::{Error, Result};
use crate::types::MediaReference;
use std::path::Path;
use uuid::Uuid;

/// One file of an upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// File name reported to the storage provider
    pub file_name: String,
    /// MIME type of `bytes`
    pub mime_type: String,
    /// File content
    pub bytes: Vec<u8>,
    /// Correlation token, assigned by [`UploadForm::attach`]
    pub token: Option<String>,
}

impl UploadFile {
    /// Create a file from memory
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
            token: None,
        }
    }

    /// Read a file from disk, guessing its MIME type from the extension
    pub async fn from_path(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                Error::InvalidArgument(format!("not a file path: {}", path.display()))
            })?
            .to_string();
        let mime_type = guess_mime_type(path);

        Ok(Self::new(file_name, mime_type, bytes))
    }
}

fn guess_mime_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        Some("txt" | "md") => "text/plain",
        Some("mp3") => "audio/mpeg",
        Some("mp4") => "video/mp4",
        _ => "application/octet-stream",
    }
}

/// Form data for phase 1 of a submission: text fields plus files, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    /// Submitting user
    pub user_id: String,
    /// Text fields, in insertion order
    pub fields: Vec<(String, String)>,
    /// Files, in upload order
    pub files: Vec<UploadFile>,
}

impl UploadForm {
    /// Create an empty form for `user_id`
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    /// Add a text field
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Append `file` and tie it to `target` with a fresh correlation token
    ///
    /// Files must be attached in the order main submission, then additional
    /// references: servers that do not echo tokens are reconciled by position.
    pub fn attach(&mut self, mut file: UploadFile, target: &mut MediaReference) {
        let token = Uuid::new_v4().to_string();
        file.token = Some(token.clone());
        target.upload_token = Some(token);
        self.files.push(file);
    }
}
