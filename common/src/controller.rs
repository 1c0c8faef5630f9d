//! Request/response/render cycle for a single report submission.
//!
//! The controller owns no browser types. It drives three seams:
//!
//! - [`ReportService`] posts the validated CSV and returns the raw response.
//! - [`DocumentRenderer`] loads the returned report and draws pages one by one.
//! - [`ReportView`] receives every visible side effect (alerts, the submit
//!   control, the output panel, appended pages).
//!
//! Pages are rendered strictly in order: page `n + 1` is not requested until
//! page `n` has been drawn and appended. There is no timeout, retry or
//! cancellation; a hung request leaves the submit control disabled.

use std::cell::Cell;

use async_trait::async_trait;
use log::{debug, error, info, warn};

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::model::page::RenderedPage;
use crate::model::report::{ReportDocument, SelectedFile, UploadRequest};
use crate::model::state::{RequestEvent, RequestState};
use crate::requests::ReportResponse;

/// Transport for the report endpoint.
#[async_trait(?Send)]
pub trait ReportService {
    type File;

    /// Posts `upload` as multipart form data under `field`. Only transport
    /// failures are errors; HTTP error statuses come back as a response.
    async fn post_report(
        &self,
        endpoint: &str,
        field: &str,
        upload: &UploadRequest<Self::File>,
    ) -> Result<ReportResponse, ReportError>;
}

/// Paginated document engine.
#[async_trait(?Send)]
pub trait DocumentRenderer {
    type Document;
    type Surface;

    async fn load(&self, report: ReportDocument) -> Result<Self::Document, ReportError>;

    fn page_count(&self, document: &Self::Document) -> u32;

    /// Draws the 1-based `page_number` at `scale` onto a fresh surface.
    async fn render_page(
        &self,
        document: &Self::Document,
        page_number: u32,
        scale: f64,
    ) -> Result<RenderedPage<Self::Surface>, ReportError>;
}

/// Visible side effects of a cycle.
pub trait ReportView {
    type Surface;

    /// Blocking user-facing alert, used for pre-flight rejections.
    fn alert(&self, message: &str);

    fn state_changed(&self, state: RequestState);

    /// Disables the submit control and shows its loading label when `busy`,
    /// restores the original label otherwise.
    fn set_submit_busy(&self, busy: bool);

    /// Empties the output panel and shows the loading indicator.
    fn show_loading(&self);

    /// Empties the output panel.
    fn clear_output(&self);

    fn append_page(&self, page: RenderedPage<Self::Surface>);

    /// Replaces the output panel content with an inline error message.
    fn show_error(&self, message: &str);
}

/// How a submission ended. Only used for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Validation failed; nothing was sent.
    Rejected(ReportError),
    Failed(ReportError),
    Rendered { pages: u32 },
}

pub struct ReportRequestController<S, R, V> {
    config: ReportConfig,
    service: S,
    renderer: R,
    view: V,
    state: Cell<RequestState>,
}

impl<S, R, V> ReportRequestController<S, R, V>
where
    S: ReportService,
    R: DocumentRenderer,
    V: ReportView<Surface = R::Surface>,
{
    pub fn new(config: ReportConfig, service: S, renderer: R, view: V) -> Self {
        Self {
            config,
            service,
            renderer,
            view,
            state: Cell::new(RequestState::Idle),
        }
    }

    /// Starts from the state a previous cycle left the UI in.
    pub fn with_state(self, state: RequestState) -> Self {
        self.state.set(state);
        self
    }

    pub fn state(&self) -> RequestState {
        self.state.get()
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Entry point for a form submission.
    ///
    /// Validation failures are alerted and return before any other side
    /// effect. Past validation, the submit control is re-enabled on every exit
    /// path, including the future being dropped mid-flight.
    pub async fn handle_submit(&self, selection: Option<SelectedFile<S::File>>) -> CycleOutcome {
        let upload = match UploadRequest::from_selection(selection, &self.config) {
            Ok(upload) => upload,
            Err(err) => {
                warn!("submission rejected: {}", err);
                self.view.alert(&err.to_string());
                return CycleOutcome::Rejected(err);
            }
        };

        self.begin_cycle();
        let _submit = SubmitControlGuard::engage(&self.view);
        self.view.show_loading();
        info!(
            "generating report from {} ({} bytes)",
            upload.filename(),
            upload.size()
        );

        match self.generate(&upload).await {
            Ok(pages) => {
                self.advance(RequestEvent::LastPageRendered);
                info!("report rendered: {} page(s)", pages);
                CycleOutcome::Rendered { pages }
            }
            Err(err) => {
                error!("Error: {}", err);
                self.advance(RequestEvent::Failed);
                self.view.show_error(&err.inline_message());
                CycleOutcome::Failed(err)
            }
        }
    }

    async fn generate(&self, upload: &UploadRequest<S::File>) -> Result<u32, ReportError> {
        let response = self
            .service
            .post_report(&self.config.endpoint, &self.config.file_field, upload)
            .await?;
        let report = response.into_document()?;
        self.advance(RequestEvent::ResponseReceived);
        debug!("received report of {} bytes", report.len());

        let document = self.renderer.load(report).await?;
        self.view.clear_output();

        let pages = self.renderer.page_count(&document);
        for page_number in 1..=pages {
            let page = self
                .renderer
                .render_page(&document, page_number, self.config.scale)
                .await?;
            debug!(
                "rendered page {}/{} at {}x{}",
                page_number, pages, page.viewport.width, page.viewport.height
            );
            self.view.append_page(page);
        }
        Ok(pages)
    }

    /// Moves a finished cycle back to `Idle` and submits. A cycle that is
    /// still in flight is not waited for; the disabled submit control is the
    /// only thing preventing that in practice.
    fn begin_cycle(&self) {
        let current = self.state.get();
        if current.is_finished() {
            self.advance(RequestEvent::Reset);
        } else if current.is_busy() {
            warn!("new submission while previous cycle is {:?}", current);
            self.state.set(RequestState::Idle);
        }
        self.advance(RequestEvent::Submit);
    }

    fn advance(&self, event: RequestEvent) {
        let current = self.state.get();
        match current.next(event) {
            Some(next) => {
                self.state.set(next);
                self.view.state_changed(next);
            }
            None => error!("ignoring {:?} while {:?}", event, current),
        }
    }
}

/// Re-enables the submit control when dropped.
struct SubmitControlGuard<'a, V: ReportView> {
    view: &'a V,
}

impl<'a, V: ReportView> SubmitControlGuard<'a, V> {
    fn engage(view: &'a V) -> Self {
        view.set_submit_busy(true);
        Self { view }
    }
}

impl<V: ReportView> Drop for SubmitControlGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_submit_busy(false);
    }
}
