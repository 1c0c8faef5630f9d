use thiserror::Error;

/// Shown inline when a failure carries no usable message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate report. Please try again.";

/// Used when the server rejects the upload without an `error` field.
pub const SERVER_FAILURE_FALLBACK: &str = "Failed to generate report";

/// Everything that can end a report cycle early.
///
/// The `Display` output is the text the user sees: an alert for the
/// pre-flight variants, an inline message in the output panel for the rest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("Please select a file first")]
    NoFileSelected,
    #[error("Please upload a CSV file")]
    InvalidFileType,
    #[error("File is too large (max {} MB)", .limit / (1024 * 1024))]
    FileTooLarge { size: u64, limit: u64 },
    #[error("{0}")]
    ReportGenerationFailed(String),
    #[error("{0}")]
    RenderingFailed(String),
}

impl ReportError {
    /// Pre-flight errors are raised before any network traffic and are
    /// reported with a blocking alert instead of the output panel.
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            ReportError::NoFileSelected
                | ReportError::InvalidFileType
                | ReportError::FileTooLarge { .. }
        )
    }

    /// Builds a server failure from the optional `error` field of the body.
    pub fn generation_failed(message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| SERVER_FAILURE_FALLBACK.to_string());
        ReportError::ReportGenerationFailed(message)
    }

    pub fn rendering(message: impl Into<String>) -> Self {
        ReportError::RenderingFailed(message.into())
    }

    /// Text for the output panel, never empty.
    pub fn inline_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}
