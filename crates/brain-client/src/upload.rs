//! Document upload followed by a full resynchronisation

use std::path::Path;
use std::sync::Arc;

use brain_types::UploadResponse;
use tracing::{info, instrument, warn};

use crate::backend::Backend;
use crate::error::Result;
use crate::orchestrator::{FetchOrchestrator, RefreshOutcome};
use crate::store::{NoticeLevel, ResourceStore};

/// Extensions the upload view advertises. Not enforced client-side.
pub const ACCEPTED_EXTENSIONS: [&str; 6] = [".pdf", ".jpg", ".jpeg", ".png", ".doc", ".docx"];

/// Size guidance shown next to the accepted types
pub const SIZE_HINT: &str = "max 10MB";

/// Shown when the upload never reached the backend
pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed. Make sure the backend is running.";

/// A file ready to be sent as the `file` part of an upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    filename: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl UploadFile {
    /// Wrap in-memory content; the content type is guessed from the extension
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        let filename = filename.into();
        let content_type = content_type_for(&filename).to_string();
        Self {
            filename,
            content_type,
            bytes,
        }
    }

    /// Read a file from disk
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(filename, bytes))
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// MIME type for the extensions the dashboard advertises
fn content_type_for(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => "application/pdf",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

/// Result of [`UploadCoordinator::upload_file`]
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// The backend answered; its message was surfaced and a refresh ran
    Delivered {
        response: UploadResponse,
        refresh: RefreshOutcome,
    },
    /// Nothing usable came back; no refresh was attempted
    Failed { message: String },
}

impl UploadOutcome {
    /// The text the user was shown
    pub fn message(&self) -> &str {
        match self {
            UploadOutcome::Delivered { response, .. } => &response.message,
            UploadOutcome::Failed { message } => message,
        }
    }
}

/// Sends uploads and resynchronises the store afterwards
pub struct UploadCoordinator<B> {
    backend: Arc<B>,
    orchestrator: FetchOrchestrator<B>,
}

impl<B> Clone for UploadCoordinator<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            orchestrator: self.orchestrator.clone(),
        }
    }
}

impl<B: Backend> UploadCoordinator<B> {
    pub fn new(backend: Arc<B>, orchestrator: FetchOrchestrator<B>) -> Self {
        Self {
            backend,
            orchestrator,
        }
    }

    /// Upload `file` for `property_id`.
    ///
    /// Any response with a message triggers exactly one refresh, since the
    /// backend may have kept the file even when it reports a problem.
    #[instrument(skip(self, store, file), fields(filename = file.filename(), size = file.len()))]
    pub async fn upload_file(
        &self,
        store: &mut ResourceStore,
        file: &UploadFile,
        property_id: &str,
    ) -> UploadOutcome {
        store.set_uploading(true);
        let response = self.backend.upload(file, property_id).await;
        store.set_uploading(false);

        match response {
            Ok(response) => {
                info!(document_id = ?response.document_id, "upload answered: {}", response.message);
                let level = match response.status.as_deref() {
                    None | Some("success") => NoticeLevel::Info,
                    Some(_) => NoticeLevel::Error,
                };
                store.push_notice(level, response.message.clone());

                let refresh = self.orchestrator.refresh_all(store).await;
                UploadOutcome::Delivered { response, refresh }
            }
            Err(e) => {
                warn!("Upload error: {}", e);
                store.push_notice(NoticeLevel::Error, UPLOAD_FAILED_MESSAGE);
                UploadOutcome::Failed {
                    message: UPLOAD_FAILED_MESSAGE.to_string(),
                }
            }
        }
    }
}
