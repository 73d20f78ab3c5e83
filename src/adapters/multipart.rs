use std::collections::HashMap;

use axum::extract::Multipart;
use tracing::{debug, warn};

use crate::{
    application::{
        error::ApplicationError,
        services::{input_name, UploadSource},
    },
    domain::models::file::UploadedFile,
};

/// Files and text fields of a `multipart/form-data` request, keyed by input
/// name.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl UploadForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApplicationError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            warn!("Invalid multipart data: {}", e);
            ApplicationError::BadRequest("Invalid request format".to_string())
        })? {
            let name = field.name().unwrap_or("").to_string();
            let file_name = field.file_name().map(str::to_string);

            match file_name {
                Some(file_name) => {
                    let mime_type = field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_string();
                    let content = field.bytes().await.map_err(|e| {
                        warn!("Cannot read bytes of {}: {}", name, e);
                        ApplicationError::BadRequest("Invalid file data".to_string())
                    })?;

                    // Browsers submit untouched file inputs with an empty filename.
                    if file_name.is_empty() {
                        debug!("No file submitted for {}", name);
                        continue;
                    }

                    form.files
                        .insert(name, UploadedFile::new(content.to_vec(), file_name, mime_type));
                }
                None => {
                    let value = field.text().await.map_err(|e| {
                        warn!("Invalid {} field: {}", name, e);
                        ApplicationError::BadRequest("Invalid request data".to_string())
                    })?;
                    form.fields.insert(name, value);
                }
            }
        }

        debug!(
            "Parsed upload form with {} files and {} fields",
            form.files.len(),
            form.fields.len()
        );
        Ok(form)
    }
}

impl UploadSource for UploadForm {
    fn uploaded_file(&self, form_name: &str, attribute: &str) -> Option<&UploadedFile> {
        self.files.get(&input_name(form_name, attribute))
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        extract::FromRequest,
        http::{header, Request},
    };

    use super::*;

    const BOUNDARY: &str = "XBOUNDARYX";

    async fn multipart(body: &str) -> Multipart {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body.to_string()))
            .unwrap();

        Multipart::from_request(request, &()).await.unwrap()
    }

    #[tokio::test]
    async fn collects_files_and_fields() {
        let body = format!(
            "--{b}\r\n\
             Content-Disposition: form-data; name=\"Profile[avatar_file]\"; filename=\"pic.PNG\"\r\n\
             Content-Type: image/png\r\n\r\n\
             PNGDATA\r\n\
             --{b}\r\n\
             Content-Disposition: form-data; name=\"display_name\"\r\n\r\n\
             Ada\r\n\
             --{b}--\r\n",
            b = BOUNDARY
        );

        let form = UploadForm::from_multipart(multipart(&body).await)
            .await
            .unwrap();

        let file = form
            .uploaded_file("Profile", "avatar_file")
            .expect("uploaded file");
        assert_eq!(file.name, "pic.PNG");
        assert_eq!(file.mime_type, "image/png");
        assert_eq!(file.content, b"PNGDATA");
        assert_eq!(form.fields.get("display_name").map(String::as_str), Some("Ada"));
        assert!(form.uploaded_file("", "avatar_file").is_none());
    }

    #[tokio::test]
    async fn empty_file_input_counts_as_no_upload() {
        let body = format!(
            "--{b}\r\n\
             Content-Disposition: form-data; name=\"avatar_file\"; filename=\"\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n\
             \r\n\
             --{b}--\r\n",
            b = BOUNDARY
        );

        let form = UploadForm::from_multipart(multipart(&body).await)
            .await
            .unwrap();

        assert!(form.uploaded_file("", "avatar_file").is_none());
        assert!(form.fields.is_empty());
    }
}
