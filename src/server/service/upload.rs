//! Image uploads for product pictures.
//!
//! Accepted files are PNG, JPEG, WebP and GIF. The declared content type, the file name
//! extension and the leading magic bytes must all name the same format. Files are stored
//! under a random name in the upload directory and served from `/uploads`.

use rand::Rng;
use std::path::{Path, PathBuf};
use url::Url;

use crate::server::error::{internal::InternalError, AppError};

const STORED_NAME_LENGTH: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Webp,
    Gif,
}

impl ImageKind {
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let mime = content_type.split(';').next().unwrap_or_default().trim();
        match mime.to_ascii_lowercase().as_str() {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/webp" => Some(Self::Webp),
            "image/gif" => Some(Self::Gif),
            _ => None,
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "webp" => Some(Self::Webp),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }

    /// Extension used for stored files.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Webp => "webp",
            Self::Gif => "gif",
        }
    }

    /// Whether `bytes` starts with this format's signature.
    pub fn matches_signature(&self, bytes: &[u8]) -> bool {
        match self {
            Self::Png => bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
            Self::Jpeg => bytes.starts_with(&[0xFF, 0xD8, 0xFF]),
            Self::Gif => bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a"),
            Self::Webp => bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP",
        }
    }
}

pub struct UploadService<'a> {
    upload_dir: &'a str,
    app_url: &'a str,
    max_bytes: usize,
}

impl<'a> UploadService<'a> {
    pub fn new(upload_dir: &'a str, app_url: &'a str, max_bytes: usize) -> Self {
        Self {
            upload_dir,
            app_url,
            max_bytes,
        }
    }

    /// Checks size, declared type, extension and content of an uploaded file.
    ///
    /// # Returns
    /// - `Ok(ImageKind)` - The agreed image format
    /// - `Err(AppError::PayloadTooLarge)` - File exceeds the configured maximum
    /// - `Err(AppError::Validation)` - Empty file, unsupported type or mismatching parts
    pub fn check(
        &self,
        file_name: Option<&str>,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<ImageKind, AppError> {
        if bytes.is_empty() {
            return Err(AppError::validation("file", "File is empty"));
        }
        if bytes.len() > self.max_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "File exceeds the maximum size of {} bytes",
                self.max_bytes
            )));
        }

        let Some(kind) = content_type.and_then(ImageKind::from_content_type) else {
            return Err(AppError::validation(
                "file",
                "Only PNG, JPEG, WebP and GIF images are allowed",
            ));
        };

        let extension_kind = file_name
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .and_then(ImageKind::from_extension);
        if extension_kind != Some(kind) {
            return Err(AppError::validation(
                "file",
                "File extension does not match its content type",
            ));
        }

        if !kind.matches_signature(bytes) {
            return Err(AppError::validation(
                "file",
                "File content is not a valid image",
            ));
        }

        Ok(kind)
    }

    /// Validates and stores an upload, returning its public URL.
    pub async fn store(
        &self,
        file_name: Option<&str>,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<String, AppError> {
        let kind = self.check(file_name, content_type, bytes)?;

        let stored_name = format!("{}.{}", random_name(), kind.extension());

        tokio::fs::create_dir_all(self.upload_dir).await?;
        tokio::fs::write(self.path_for(&stored_name), bytes).await?;

        self.public_url(&stored_name)
    }

    fn path_for(&self, stored_name: &str) -> PathBuf {
        Path::new(self.upload_dir).join(stored_name)
    }

    /// `APP_URL/uploads/<name>`, keeping any path prefix of the base URL.
    pub fn public_url(&self, stored_name: &str) -> Result<String, AppError> {
        let base = format!("{}/", self.app_url.trim_end_matches('/'));
        let url = Url::parse(&base)
            .and_then(|base| base.join(&format!("uploads/{}", stored_name)))
            .map_err(|source| InternalError::InvalidUrl {
                value: base.clone(),
                source,
            })?;

        Ok(url.to_string())
    }
}

/// Random lowercase alphanumeric file stem.
fn random_name() -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

    let mut rng = rand::rng();

    (0..STORED_NAME_LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    fn service(max_bytes: usize) -> UploadService<'static> {
        UploadService::new("uploads", "https://folio.example.com", max_bytes)
    }

    fn invalid_field(result: Result<ImageKind, AppError>) -> String {
        match result {
            Err(AppError::Validation { field, .. }) => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_matching_png() {
        let kind = service(1024)
            .check(Some("shot.PNG"), Some("image/png"), PNG)
            .unwrap();
        assert_eq!(kind, ImageKind::Png);
    }

    #[test]
    fn rejects_non_image_types() {
        let result = service(1024).check(Some("notes.txt"), Some("text/plain"), b"hello");
        assert_eq!(invalid_field(result), "file");
    }

    #[test]
    fn rejects_extension_mismatch() {
        let result = service(1024).check(Some("shot.gif"), Some("image/png"), PNG);
        assert_eq!(invalid_field(result), "file");

        let result = service(1024).check(None, Some("image/png"), PNG);
        assert_eq!(invalid_field(result), "file");
    }

    #[test]
    fn rejects_content_that_is_not_the_declared_image() {
        let result = service(1024).check(Some("fake.png"), Some("image/png"), b"<svg></svg>");
        assert_eq!(invalid_field(result), "file");
    }

    #[test]
    fn rejects_oversize_payload() {
        let result = service(4).check(Some("shot.png"), Some("image/png"), PNG);
        assert!(matches!(result, Err(AppError::PayloadTooLarge(_))));
    }

    #[test]
    fn recognizes_each_signature() {
        assert!(ImageKind::Jpeg.matches_signature(&[0xFF, 0xD8, 0xFF, 0xE0]));
        assert!(ImageKind::Gif.matches_signature(b"GIF89a...."));
        assert!(ImageKind::Webp.matches_signature(b"RIFF\0\0\0\0WEBPVP8 "));
        assert!(!ImageKind::Webp.matches_signature(b"RIFF\0\0\0\0WAVE"));
    }

    #[test]
    fn builds_public_url() {
        let url = service(1).public_url("abc.png").unwrap();
        assert_eq!(url, "https://folio.example.com/uploads/abc.png");

        let nested = UploadService::new("uploads", "https://example.com/folio/", 1);
        assert_eq!(
            nested.public_url("abc.png").unwrap(),
            "https://example.com/folio/uploads/abc.png"
        );
    }

    #[tokio::test]
    async fn stores_file_under_random_name() {
        let dir = std::env::temp_dir().join(format!("folio-upload-{}", random_name()));
        let dir_str = dir.to_string_lossy().to_string();
        let service = UploadService::new(&dir_str, "http://localhost:8080", 1024);

        let url = service
            .store(Some("shot.png"), Some("image/png"), PNG)
            .await
            .unwrap();

        let stored_name = url.rsplit('/').next().unwrap().to_string();
        assert_eq!(stored_name.len(), STORED_NAME_LENGTH + ".png".len());
        assert_eq!(std::fs::read(dir.join(&stored_name)).unwrap(), PNG);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
