mod file_binder;
mod file_operations;

pub use file_binder::{FileAttributeBinder, PreviousFile, UploadOutcome};
pub use file_operations::{input_name, is_remote_url, FileOperations, UploadSource};
