use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::adapters::{controllers::profile_controller::ProfileController, state::AppState};

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/profile",
            get(ProfileController::get_profile).post(ProfileController::update_profile),
        )
        .route(
            "/api/v1/profile/thumbnail",
            post(ProfileController::create_thumbnail),
        )
        .route(
            "/api/v1/profile/avatar",
            delete(ProfileController::remove_avatar),
        )
        .with_state(app_state)
}
