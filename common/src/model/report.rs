use crate::config::ReportConfig;
use crate::error::ReportError;

/// A file picked in the form, before any validation.
///
/// `handle` is whatever the host uses to reach the bytes (a browser `File`
/// in the frontend, a plain buffer in tests).
#[derive(Debug, Clone)]
pub struct SelectedFile<F> {
    pub name: String,
    pub size: u64,
    pub handle: F,
}

impl<F> SelectedFile<F> {
    pub fn new(name: impl Into<String>, size: u64, handle: F) -> Self {
        Self {
            name: name.into(),
            size,
            handle,
        }
    }
}

/// A selection that passed pre-flight validation and may be posted.
///
/// The only way to build one is [`UploadRequest::from_selection`], so holding
/// an `UploadRequest` means the filename ends in `.csv`.
#[derive(Debug, Clone)]
pub struct UploadRequest<F> {
    file: SelectedFile<F>,
}

impl<F> UploadRequest<F> {
    /// Checks, in order: a file is present, its name ends with `.csv`
    /// (case-insensitive), and it fits within `max_upload_bytes`.
    pub fn from_selection(
        selection: Option<SelectedFile<F>>,
        config: &ReportConfig,
    ) -> Result<Self, ReportError> {
        let file = selection.ok_or(ReportError::NoFileSelected)?;
        if !is_csv_filename(&file.name) {
            return Err(ReportError::InvalidFileType);
        }
        if file.size > config.max_upload_bytes {
            return Err(ReportError::FileTooLarge {
                size: file.size,
                limit: config.max_upload_bytes,
            });
        }
        Ok(Self { file })
    }

    pub fn filename(&self) -> &str {
        &self.file.name
    }

    pub fn size(&self) -> u64 {
        self.file.size
    }

    pub fn handle(&self) -> &F {
        &self.file.handle
    }
}

pub fn is_csv_filename(name: &str) -> bool {
    name.to_lowercase().ends_with(".csv")
}

/// Raw bytes of the paginated report returned by the server.
///
/// Lives for a single render cycle and is handed to the document renderer
/// by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    bytes: Vec<u8>,
}

impl ReportDocument {
    pub const MIME_TYPE: &'static str = "application/pdf";

    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
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

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
