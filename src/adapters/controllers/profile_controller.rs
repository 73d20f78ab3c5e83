use axum::{
    extract::{Multipart, State},
    Json,
};
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    adapters::{
        dto::profile_dto::{RemoveAvatarResponse, ThumbnailResponse, UploadResponse},
        multipart::UploadForm,
        state::AppState,
    },
    application::error::ApplicationError,
    domain::models::model::Model,
};

pub const AVATAR_INPUT: &str = "avatar_file";
pub const AVATAR_ATTRIBUTE: &str = "avatar";
pub const THUMBNAIL_ATTRIBUTE: &str = "thumbnail";
pub const AVATAR_DIR: &str = "avatars/";
pub const THUMBNAIL_DIR: &str = "thumbs/";

pub struct ProfileController;

impl ProfileController {
    /// GET /api/v1/profile
    pub async fn get_profile(State(app_state): State<AppState>) -> Json<Value> {
        let profile = app_state.profile.lock().await;
        Json(Value::Object(profile.clone()))
    }

    /// POST /api/v1/profile
    /// Multipart: `avatar_file` (optional file), `display_name` (optional text)
    pub async fn update_profile(
        State(app_state): State<AppState>,
        multipart: Multipart,
    ) -> Result<Json<UploadResponse>, ApplicationError> {
        let form = UploadForm::from_multipart(multipart).await?;
        let mut profile = app_state.profile.lock().await;

        let outcome = app_state
            .binder
            .upload_and_set_file(
                &mut *profile,
                &form,
                AVATAR_INPUT,
                AVATAR_ATTRIBUTE,
                "avatar",
                Some(AVATAR_DIR),
            )
            .await?;

        if let Some(display_name) = form.fields.get("display_name") {
            profile.set_attribute("display_name", Some(display_name.clone()));
        }

        info!("Profile avatar updated: {:?}", outcome);
        Ok(Json(UploadResponse::from(outcome)))
    }

    /// POST /api/v1/profile/thumbnail
    pub async fn create_thumbnail(
        State(app_state): State<AppState>,
    ) -> Result<Json<ThumbnailResponse>, ApplicationError> {
        let mut profile = app_state.profile.lock().await;

        let thumbnail = app_state
            .binder
            .copy_and_set_file(
                &mut *profile,
                AVATAR_ATTRIBUTE,
                THUMBNAIL_ATTRIBUTE,
                "avatar_thumb",
                Some(THUMBNAIL_DIR),
            )
            .await?;

        Ok(Json(ThumbnailResponse { thumbnail }))
    }

    /// DELETE /api/v1/profile/avatar
    pub async fn remove_avatar(
        State(app_state): State<AppState>,
    ) -> Result<Json<RemoveAvatarResponse>, ApplicationError> {
        let mut profile = app_state.profile.lock().await;

        // Thumbnails may live on a CDN, so they go through the web-root delete.
        let thumbnail_removed = match profile.non_empty_attribute(THUMBNAIL_ATTRIBUTE) {
            Some(thumbnail) => {
                let removed = app_state.binder.delete_image(&thumbnail).await?;
                if !removed {
                    warn!("Thumbnail {} was not on disk", thumbnail);
                }
                profile.set_attribute(THUMBNAIL_ATTRIBUTE, None);
                removed
            }
            None => false,
        };

        let avatar_removed = app_state
            .binder
            .remove_uploaded_image(&mut *profile, AVATAR_ATTRIBUTE)
            .await?;

        Ok(Json(RemoveAvatarResponse {
            avatar_removed,
            thumbnail_removed,
        }))
    }
}
