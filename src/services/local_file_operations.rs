use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};

use crate::{
    application::services::FileOperations,
    domain::{config::upload::UploadConfig, models::file::UploadedFile},
    services::error::StorageError,
};

/// Files stored below the web root on the local disk.
pub struct LocalFileOperations {
    config: UploadConfig,
}

impl LocalFileOperations {
    pub fn new(config: UploadConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl FileOperations for LocalFileOperations {
    async fn save(&self, file: &UploadedFile, dest_path: &str) -> Result<(), StorageError> {
        // The destination directory must already exist.
        let full_path = self.config.resolve(dest_path);
        fs::write(&full_path, &file.content)
            .await
            .map_err(|e| StorageError::from_io(dest_path, e))?;

        info!("Saved {} ({} bytes) to {}", file.name, file.size(), dest_path);
        Ok(())
    }

    async fn copy(&self, src_path: &str, dest_path: &str) -> Result<String, StorageError> {
        if self.is_remote_url(src_path) {
            return Err(StorageError::Unsupported(format!(
                "Cannot copy remote file {}",
                src_path
            )));
        }

        let target = self.config.upload_path(dest_path);
        let source_file = self.config.resolve(src_path);
        let target_file = self.config.resolve(&target);

        // Copying a file onto itself truncates it before reading.
        if let (Ok(source), Ok(dest)) = (
            fs::canonicalize(&source_file).await,
            fs::canonicalize(&target_file).await,
        ) {
            if source == dest {
                debug!("{} already is {}, nothing to copy", src_path, target);
                return Ok(target);
            }
        }

        fs::copy(&source_file, &target_file)
            .await
            .map_err(|e| StorageError::from_io(&format!("{} -> {}", src_path, target), e))?;

        info!("Copied {} to {}", src_path, target);
        Ok(target)
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        if self.is_remote_url(path) {
            debug!("Skipping delete of remote file {}", path);
            return Ok(());
        }

        if !self.exists(path).await {
            return Err(StorageError::NotFound(path.to_string()));
        }

        fs::remove_file(self.config.resolve(path))
            .await
            .map_err(|e| StorageError::from_io(path, e))?;

        info!("Deleted {}", path);
        Ok(())
    }

    async fn exists(&self, path: &str) -> bool {
        fs::metadata(self.config.resolve(path))
            .await
            .map(|metadata| metadata.is_file())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn upload(name: &str, content: &[u8]) -> UploadedFile {
        UploadedFile::new(content.to_vec(), name.to_string(), "image/png".to_string())
    }

    #[tokio::test]
    async fn save_writes_below_web_root() {
        let dir = tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("uploads")).expect("mkdir");
        let ops = LocalFileOperations::new(UploadConfig::new("uploads", dir.path()));

        ops.save(&upload("pic.png", b"png"), "uploads/avatar.png")
            .await
            .expect("save");

        let written = std::fs::read(dir.path().join("uploads/avatar.png")).expect("read");
        assert_eq!(written, b"png");
        assert!(ops.exists("uploads/avatar.png").await);
    }

    #[tokio::test]
    async fn save_into_missing_directory_fails() {
        let dir = tempdir().expect("tempdir");
        let ops = LocalFileOperations::new(UploadConfig::new("uploads", dir.path()));

        let err = ops
            .save(&upload("pic.png", b"png"), "uploads/missing/avatar.png")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[tokio::test]
    async fn copy_lands_inside_upload_directory() {
        let dir = tempdir().expect("tempdir");
        std::fs::create_dir_all(dir.path().join("uploads/t")).expect("mkdir");
        std::fs::write(dir.path().join("uploads/photo.jpg"), b"jpg").expect("write");
        let ops = LocalFileOperations::new(UploadConfig::new("uploads", dir.path()));

        let copied = ops
            .copy("uploads/photo.jpg", "t/thumb.jpg")
            .await
            .expect("copy");

        assert_eq!(copied, "uploads/t/thumb.jpg");
        assert_eq!(
            std::fs::read(dir.path().join("uploads/t/thumb.jpg")).expect("read"),
            b"jpg"
        );
        assert!(ops.exists("uploads/photo.jpg").await);
    }

    #[tokio::test]
    async fn copy_onto_itself_keeps_content() {
        let dir = tempdir().expect("tempdir");
        std::fs::create_dir_all(dir.path().join("uploads/t")).expect("mkdir");
        std::fs::write(dir.path().join("uploads/t/thumb.jpg"), b"jpgdata").expect("write");
        let ops = LocalFileOperations::new(UploadConfig::new("uploads", dir.path()));

        let copied = ops
            .copy("uploads/t/thumb.jpg", "t/thumb.jpg")
            .await
            .expect("copy");

        assert_eq!(copied, "uploads/t/thumb.jpg");
        assert_eq!(
            std::fs::read(dir.path().join("uploads/t/thumb.jpg")).expect("read"),
            b"jpgdata"
        );
    }

    #[tokio::test]
    async fn copy_of_remote_file_is_unsupported() {
        let dir = tempdir().expect("tempdir");
        let ops = LocalFileOperations::new(UploadConfig::new("uploads", dir.path()));

        let err = ops
            .copy("https://cdn.example.com/a.jpg", "b.jpg")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Unsupported(_)));
    }

    #[tokio::test]
    async fn delete_missing_file_reports_not_found() {
        let dir = tempdir().expect("tempdir");
        let ops = LocalFileOperations::new(UploadConfig::new("uploads", dir.path()));

        let err = ops.delete("uploads/nothing.png").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(ref p) if p == "uploads/nothing.png"));
    }

    #[tokio::test]
    async fn delete_remote_url_is_noop() {
        let dir = tempdir().expect("tempdir");
        let ops = LocalFileOperations::new(UploadConfig::new("uploads", dir.path()));

        ops.delete("http://cdn.example.com/a.png")
            .await
            .expect("remote delete");
    }

    #[tokio::test]
    async fn directories_are_not_files() {
        let dir = tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("uploads")).expect("mkdir");
        let ops = LocalFileOperations::new(UploadConfig::new("uploads", dir.path()));

        assert!(!ops.exists("uploads").await);
        assert!(ops.delete("uploads").await.is_err());
    }
}
