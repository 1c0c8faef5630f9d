//! HTTP transport for the report endpoint.

use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::{File, FormData};

use common::controller::ReportService;
use common::error::ReportError;
use common::model::report::UploadRequest;
use common::requests::ReportResponse;

use crate::pdfjs::js_error_message;

/// Posts the CSV as `multipart/form-data`. The browser fills in the boundary,
/// so no content type is set here.
#[derive(Default)]
pub struct HttpReportService;

#[async_trait(?Send)]
impl ReportService for HttpReportService {
    type File = File;

    async fn post_report(
        &self,
        endpoint: &str,
        field: &str,
        upload: &UploadRequest<File>,
    ) -> Result<ReportResponse, ReportError> {
        let form = FormData::new()
            .map_err(|err| ReportError::ReportGenerationFailed(js_error_message(&err)))?;
        form.append_with_blob_and_filename(field, upload.handle(), upload.filename())
            .map_err(|err| ReportError::ReportGenerationFailed(js_error_message(&err)))?;

        let response = Request::post(endpoint)
            .body(form)
            .map_err(|err| ReportError::ReportGenerationFailed(err.to_string()))?
            .send()
            .await
            .map_err(|err| ReportError::ReportGenerationFailed(err.to_string()))?;

        let status = response.status();
        // The success body is the report; failing to read it counts as a
        // rendering failure, like any other blob handling.
        let body = response.binary().await.map_err(|err| {
            if response.ok() {
                ReportError::rendering(err.to_string())
            } else {
                ReportError::generation_failed(None)
            }
        })?;
        Ok(ReportResponse::new(status, body))
    }
}
