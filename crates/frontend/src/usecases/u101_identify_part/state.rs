use contracts::usecases::u101_identify_part::IdentificationResult;

/// Where the identify flow currently is. One linear pass:
/// Idle -> Preview -> Analyzing -> Done | Failed, with Reset back to Idle
/// from anywhere. A second request only starts after a reset.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Preview,
    Analyzing,
    Done(IdentificationResult),
    Failed(String),
}

/// Explicit state of the upload session, replacing the original page's
/// ambient globals. The `web_sys::File` handle itself lives in the
/// component (it is not `Send`); this struct carries everything else.
#[derive(Debug, Clone, Default)]
pub struct UploadSession {
    pub phase: UploadPhase,
    pub file_name: Option<String>,
    pub file_size: u64,
    pub preview_url: Option<String>,
    /// Validation message for a rejected (non-image) file.
    pub rejection: Option<String>,
}

/// Only images are accepted for identification.
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Human-readable file size for the preview caption.
pub fn format_file_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}

impl UploadSession {
    /// A file was chosen (input or drop). Rejects non-image files without
    /// leaving Idle.
    pub fn select_file(&mut self, name: String, size: u64, mime: &str, preview_url: String) {
        if !is_image_mime(mime) {
            self.rejection = Some("Please upload an image file.".to_string());
            return;
        }
        self.phase = UploadPhase::Preview;
        self.file_name = Some(name);
        self.file_size = size;
        self.preview_url = Some(preview_url);
        self.rejection = None;
    }

    pub fn can_analyze(&self) -> bool {
        self.phase == UploadPhase::Preview
    }

    pub fn begin_analyze(&mut self) {
        if self.can_analyze() {
            self.phase = UploadPhase::Analyzing;
        }
    }

    pub fn finish(&mut self, result: IdentificationResult) {
        self.phase = UploadPhase::Done(result);
    }

    pub fn fail(&mut self, message: String) {
        self.phase = UploadPhase::Failed(message);
    }

    /// Back to the empty drop zone. Returns the preview URL so the caller
    /// can revoke the object URL.
    pub fn reset(&mut self) -> Option<String> {
        let url = self.preview_url.take();
        *self = UploadSession::default();
        url
    }
}
