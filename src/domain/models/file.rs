/// A file submitted with a request. Lives only for the duration of one
/// upload-handling call.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub content: Vec<u8>,
    pub name: String,
    pub mime_type: String,
}

impl UploadedFile {
    pub fn new(content: Vec<u8>, name: String, mime_type: String) -> Self {
        Self {
            content,
            name,
            mime_type,
        }
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    pub fn extension(&self) -> &str {
        extension_of(&self.name)
    }
}

/// Everything after the last `.` of `path`. A name without any `.` yields the
/// whole name.
pub fn extension_of(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_keeps_original_case() {
        assert_eq!(extension_of("pic.PNG"), "PNG");
        assert_eq!(extension_of("archive.tar.gz"), "gz");
    }

    #[test]
    fn extension_without_dot_is_whole_name() {
        assert_eq!(extension_of("README"), "README");
        assert_eq!(extension_of("trailing."), "");
    }

    #[test]
    fn uploaded_file_reports_size_and_extension() {
        let file = UploadedFile::new(b"abc".to_vec(), "a/b/photo.jpg".into(), "image/jpeg".into());
        assert_eq!(file.size(), 3);
        assert_eq!(file.extension(), "jpg");
    }
}
