use serde::Deserialize;

use crate::error::ReportError;
use crate::model::report::ReportDocument;

#[derive(Deserialize, Debug, Default)]
/// JSON body the server sends alongside a non-2xx status.
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Status and body of the `/generate_report` response, as read off the wire.
#[derive(Debug, Clone)]
pub struct ReportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ReportResponse {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// A 2xx body is the report itself; anything else is decoded as
    /// [`ErrorBody`]. A body that is not valid JSON yields the fallback message.
    pub fn into_document(self) -> Result<ReportDocument, ReportError> {
        if self.is_success() {
            return Ok(ReportDocument::new(self.body));
        }
        match serde_json::from_slice::<ErrorBody>(&self.body) {
            Ok(body) => Err(ReportError::generation_failed(body.error)),
            Err(err) => {
                log::warn!(
                    "error response (status {}) is not valid JSON: {}",
                    self.status,
                    err
                );
                Err(ReportError::generation_failed(None))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SERVER_FAILURE_FALLBACK;

    #[test]
    fn success_body_becomes_document() {
        let doc = ReportResponse::new(200, b"%PDF-1.4".to_vec())
            .into_document()
            .expect("2xx is a document");
        assert_eq!(doc.bytes(), b"%PDF-1.4");
    }

    #[test]
    fn server_error_field_is_surfaced() {
        let err = ReportResponse::new(400, br#"{"error":"bad rows"}"#.to_vec())
            .into_document()
            .unwrap_err();
        assert_eq!(err, ReportError::ReportGenerationFailed("bad rows".into()));
    }

    #[test]
    fn missing_or_null_error_field_uses_fallback() {
        let bodies: [&[u8]; 3] = [br#"{}"#, br#"{"error":null}"#, br#"{"detail":"x"}"#];
        for body in bodies {
            let err = ReportResponse::new(500, body.to_vec())
                .into_document()
                .unwrap_err();
            assert_eq!(err.to_string(), SERVER_FAILURE_FALLBACK);
        }
    }

    #[test]
    fn non_json_error_body_uses_fallback() {
        let err = ReportResponse::new(502, b"<html>Bad Gateway</html>".to_vec())
            .into_document()
            .unwrap_err();
        assert_eq!(err.to_string(), SERVER_FAILURE_FALLBACK);
    }
}
