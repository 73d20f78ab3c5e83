use std::sync::Arc;

use tokio::fs;
use tracing::{debug, info, warn};

use crate::{
    application::{
        error::ApplicationError,
        services::{FileOperations, UploadSource},
    },
    domain::{
        config::upload::UploadConfig,
        models::{file::extension_of, model::Model},
    },
    services::StorageError,
};

/// Result of [`FileAttributeBinder::upload_and_set_file`].
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// A new file was written and its path assigned.
    Stored { path: String, previous: PreviousFile },
    /// Nothing uploaded; the attribute kept its path.
    Retained(String),
    /// Nothing uploaded and nothing stored before; the attribute is null.
    Cleared,
}

/// What happened to the file an upload replaced.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviousFile {
    None,
    /// The new file was written over the old one.
    Overwritten,
    Removed(String),
    RemoveFailed { path: String, reason: String },
}

/// Moves files in and out of storage on behalf of model attributes that hold
/// their paths.
#[derive(Clone)]
pub struct FileAttributeBinder {
    config: UploadConfig,
    file_ops: Arc<dyn FileOperations>,
}

impl FileAttributeBinder {
    pub fn new(config: UploadConfig, file_ops: Arc<dyn FileOperations>) -> Self {
        Self { config, file_ops }
    }

    /// Stores the file uploaded for `from_attribute` as
    /// `<upload path>/<sub_dir><file_name>.<ext>` and writes that path to
    /// `to_attribute`. `sub_dir` must exist and end with a separator.
    ///
    /// Without an upload the attribute keeps its current path, or becomes null
    /// when it had none. A failed save leaves both the model and the
    /// previously stored file untouched.
    pub async fn upload_and_set_file<M, U>(
        &self,
        model: &mut M,
        uploads: &U,
        from_attribute: &str,
        to_attribute: &str,
        file_name: &str,
        sub_dir: Option<&str>,
    ) -> Result<UploadOutcome, ApplicationError>
    where
        M: Model + ?Sized,
        U: UploadSource + ?Sized,
    {
        let current = model.non_empty_attribute(to_attribute);

        let Some(file) = uploads.uploaded_file(model.form_name(), from_attribute) else {
            return Ok(match current {
                Some(path) => {
                    debug!("No upload for {}, keeping {}", from_attribute, path);
                    model.set_attribute(to_attribute, Some(path.clone()));
                    UploadOutcome::Retained(path)
                }
                None => {
                    model.set_attribute(to_attribute, None);
                    UploadOutcome::Cleared
                }
            });
        };

        let file_path = self.get_upload_path(&format!(
            "{}{}.{}",
            sub_dir.unwrap_or(""),
            file_name,
            file.extension()
        ));

        self.file_ops.save(file, &file_path).await.map_err(|e| {
            warn!("Failed to save upload {} to {}: {}", file.name, file_path, e);
            ApplicationError::from(e)
        })?;

        let previous = match current {
            None => PreviousFile::None,
            Some(old_path) if old_path == file_path => PreviousFile::Overwritten,
            Some(old_path) => match self.file_ops.delete(&old_path).await {
                Ok(()) => PreviousFile::Removed(old_path),
                Err(e) => {
                    warn!("Failed to remove replaced file {}: {}", old_path, e);
                    PreviousFile::RemoveFailed {
                        path: old_path,
                        reason: e.to_string(),
                    }
                }
            },
        };

        info!("Stored {} for attribute {}", file_path, to_attribute);
        model.set_attribute(to_attribute, Some(file_path.clone()));

        Ok(UploadOutcome::Stored {
            path: file_path,
            previous,
        })
    }

    /// Copies the file whose path `from_attribute` holds to
    /// `<sub_dir><file_name>.<ext>` and writes the path the backend returns to
    /// `to_attribute_url`. On failure `to_attribute_url` is set to null.
    pub async fn copy_and_set_file<M>(
        &self,
        model: &mut M,
        from_attribute: &str,
        to_attribute_url: &str,
        file_name: &str,
        sub_dir: Option<&str>,
    ) -> Result<String, ApplicationError>
    where
        M: Model + ?Sized,
    {
        let Some(source) = model.non_empty_attribute(from_attribute) else {
            model.set_attribute(to_attribute_url, None);
            return Err(ApplicationError::EmptyAttribute(from_attribute.to_string()));
        };

        let dest_path = format!(
            "{}{}.{}",
            sub_dir.unwrap_or(""),
            file_name,
            extension_of(&source)
        );

        match self.file_ops.copy(&source, &dest_path).await {
            Ok(copied) => {
                info!("Copied {} to {} for {}", source, copied, to_attribute_url);
                model.set_attribute(to_attribute_url, Some(copied.clone()));
                Ok(copied)
            }
            Err(e) => {
                warn!("Failed to copy {} to {}: {}", source, dest_path, e);
                model.set_attribute(to_attribute_url, None);
                Err(e.into())
            }
        }
    }

    /// Deletes a web-relative file from the local disk. Remote URLs count as
    /// deleted; a missing file yields `false`.
    pub async fn delete_image(&self, file_path: &str) -> Result<bool, ApplicationError> {
        if self.file_ops.is_remote_url(file_path) {
            debug!("{} is remote, nothing to delete", file_path);
            return Ok(true);
        }

        let full_path = self.config.resolve(file_path);
        match fs::metadata(&full_path).await {
            Ok(metadata) if metadata.is_file() => {}
            _ => {
                debug!("{} does not exist", full_path.display());
                return Ok(false);
            }
        }

        fs::remove_file(&full_path)
            .await
            .map_err(|e| StorageError::from_io(file_path, e))?;

        info!("Deleted image {}", file_path);
        Ok(true)
    }

    /// Deletes the file `attribute` points to and nulls the attribute, whatever
    /// the outcome of the delete. Returns whether a file was removed.
    pub async fn remove_uploaded_image<M>(
        &self,
        model: &mut M,
        attribute: &str,
    ) -> Result<bool, ApplicationError>
    where
        M: Model + ?Sized,
    {
        let result = match model.non_empty_attribute(attribute) {
            None => Ok(false),
            Some(path) => match self.file_ops.delete(&path).await {
                Ok(()) => Ok(true),
                Err(StorageError::NotFound(_)) => {
                    debug!("{} was already gone", path);
                    Ok(false)
                }
                Err(e) => {
                    warn!("Failed to remove {}: {}", path, e);
                    Err(e.into())
                }
            },
        };

        model.set_attribute(attribute, None);
        result
    }

    pub fn get_upload_path(&self, rel_path: &str) -> String {
        self.config.upload_path(rel_path)
    }
}
