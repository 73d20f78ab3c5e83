use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::sync::Mutex;

use crate::application::services::FileAttributeBinder;

#[derive(Clone)]
pub struct AppState {
    pub binder: FileAttributeBinder,
    /// The single profile record the demo endpoints operate on.
    pub profile: Arc<Mutex<Map<String, Value>>>,
}

impl AppState {
    pub fn new(binder: FileAttributeBinder) -> Self {
        Self {
            binder,
            profile: Arc::new(Mutex::new(Map::new())),
        }
    }
}
