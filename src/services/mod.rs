mod error;
mod local_file_operations;

pub use error::StorageError;
pub use local_file_operations::LocalFileOperations;

use std::sync::Arc;

use crate::{application::services::FileOperations, domain::config::upload::UploadConfig};

pub fn create_file_operations(config: &UploadConfig) -> Arc<dyn FileOperations> {
    Arc::new(LocalFileOperations::new(config.clone()))
}
