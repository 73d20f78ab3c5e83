use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_UPLOAD_PATH: &str = "uploads";
pub const PATH_SEPARATOR: char = '/';

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UploadConfig {
    /// Directory, relative to the web root, every stored path starts with.
    #[serde(rename = "uploadPath", default = "default_upload_path")]
    pub base_upload_path: String,
    /// On-disk directory web-relative paths are resolved against.
    #[serde(rename = "webRoot", default = "default_web_root")]
    pub web_root: PathBuf,
}

fn default_upload_path() -> String {
    DEFAULT_UPLOAD_PATH.to_string()
}

fn default_web_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            base_upload_path: default_upload_path(),
            web_root: default_web_root(),
        }
    }
}

impl UploadConfig {
    pub fn new(base_upload_path: impl Into<String>, web_root: impl Into<PathBuf>) -> Self {
        Self {
            base_upload_path: base_upload_path.into(),
            web_root: web_root.into(),
        }
    }

    /// Reads `UPLOAD_PATH` and `WEB_ROOT`, falling back to the defaults.
    pub fn from_env() -> Self {
        let base_upload_path =
            std::env::var("UPLOAD_PATH").unwrap_or_else(|_| default_upload_path());
        let web_root = std::env::var("WEB_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_web_root());

        Self {
            base_upload_path,
            web_root,
        }
    }

    /// `rel_path` placed inside the upload directory.
    pub fn upload_path(&self, rel_path: &str) -> String {
        format!("{}{}{}", self.base_upload_path, PATH_SEPARATOR, rel_path)
    }

    /// On-disk location of a web-relative path.
    pub fn resolve(&self, web_path: &str) -> PathBuf {
        self.web_root.join(web_path.trim_start_matches(PATH_SEPARATOR))
    }
}
