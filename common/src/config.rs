//! Runtime configuration for the report viewer.
//!
//! Every field has a default matching the stock deployment, so the host page
//! only needs to provide the values it wants to change. The frontend reads an
//! optional JSON override from the page; missing keys keep their defaults.

use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "/generate_report";
pub const DEFAULT_FILE_FIELD: &str = "file";
pub const DEFAULT_SCALE: f64 = 1.5;
pub const DEFAULT_WORKER_SRC: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/pdf.js/2.11.338/pdf.worker.min.js";
/// Mirrors the server's request body limit.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;
pub const DEFAULT_PAGE_GAP_PX: u32 = 20;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Path the CSV is posted to.
    pub endpoint: String,
    /// Multipart field name carrying the file.
    pub file_field: String,
    /// Viewport scale applied to every page.
    pub scale: f64,
    /// Location of the PDF.js worker script.
    pub worker_src: String,
    /// Uploads above this size are rejected before any request is made.
    pub max_upload_bytes: u64,
    /// Bottom margin between rendered pages, in CSS pixels.
    pub page_gap_px: u32,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            file_field: DEFAULT_FILE_FIELD.to_string(),
            scale: DEFAULT_SCALE,
            worker_src: DEFAULT_WORKER_SRC.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            page_gap_px: DEFAULT_PAGE_GAP_PX,
            log_level: "info".to_string(),
        }
    }
}

impl ReportConfig {
    /// Parses a JSON override. Unknown keys are ignored.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Log level filter, `Info` when the configured value is not recognised.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
