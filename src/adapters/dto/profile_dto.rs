use serde::Serialize;

use crate::application::services::{PreviousFile, UploadOutcome};

#[derive(Debug, Serialize, PartialEq)]
pub struct UploadResponse {
    pub status: &'static str,
    pub path: Option<String>,
    #[serde(rename = "previousPath", skip_serializing_if = "Option::is_none")]
    pub previous_path: Option<String>,
    #[serde(rename = "previousRemoved", skip_serializing_if = "Option::is_none")]
    pub previous_removed: Option<bool>,
}

impl From<UploadOutcome> for UploadResponse {
    fn from(outcome: UploadOutcome) -> Self {
        match outcome {
            UploadOutcome::Stored { path, previous } => {
                let (previous_path, previous_removed) = match previous {
                    PreviousFile::None => (None, None),
                    PreviousFile::Overwritten => (Some(path.clone()), None),
                    PreviousFile::Removed(old) => (Some(old), Some(true)),
                    PreviousFile::RemoveFailed { path: old, .. } => (Some(old), Some(false)),
                };
                Self {
                    status: "stored",
                    path: Some(path),
                    previous_path,
                    previous_removed,
                }
            }
            UploadOutcome::Retained(path) => Self {
                status: "retained",
                path: Some(path),
                previous_path: None,
                previous_removed: None,
            },
            UploadOutcome::Cleared => Self {
                status: "cleared",
                path: None,
                previous_path: None,
                previous_removed: None,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ThumbnailResponse {
    pub thumbnail: String,
}

#[derive(Debug, Serialize)]
pub struct RemoveAvatarResponse {
    #[serde(rename = "avatarRemoved")]
    pub avatar_removed: bool,
    #[serde(rename = "thumbnailRemoved")]
    pub thumbnail_removed: bool,
}
