pub mod adapters;
pub mod application;
pub mod domain;
pub mod services;

pub use application::{
    error::ApplicationError,
    services::{FileAttributeBinder, FileOperations, PreviousFile, UploadOutcome, UploadSource},
};
pub use domain::{
    config::upload::UploadConfig,
    models::{file::UploadedFile, model::Model},
};
pub use services::{LocalFileOperations, StorageError};
