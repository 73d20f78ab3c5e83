use async_trait::async_trait;

use crate::{domain::models::file::UploadedFile, services::StorageError};

/// Storage backend the binder moves files through. Paths are web-relative.
#[async_trait]
pub trait FileOperations: Send + Sync {
    async fn save(&self, file: &UploadedFile, dest_path: &str) -> Result<(), StorageError>;

    /// Copies `src_path` to `dest_path` and returns the path (or URL) the copy
    /// is reachable under. The backend decides where `dest_path` lands.
    async fn copy(&self, src_path: &str, dest_path: &str) -> Result<String, StorageError>;

    async fn delete(&self, path: &str) -> Result<(), StorageError>;

    async fn exists(&self, path: &str) -> bool;

    fn is_remote_url(&self, path: &str) -> bool {
        is_remote_url(path)
    }
}

/// Lookup of the files submitted with the current request.
pub trait UploadSource {
    fn uploaded_file(&self, form_name: &str, attribute: &str) -> Option<&UploadedFile>;
}

/// True for `http://`, `https://` and protocol-relative `//` references.
pub fn is_remote_url(path: &str) -> bool {
    let lower = path.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("//")
}

/// Input name a framework form submits `attribute` under.
pub fn input_name(form_name: &str, attribute: &str) -> String {
    if form_name.is_empty() {
        attribute.to_string()
    } else {
        format!("{}[{}]", form_name, attribute)
    }
}
