use async_trait::async_trait;
use gloo_file::{Blob, ObjectUrl};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use common::controller::DocumentRenderer;
use common::error::ReportError;
use common::model::page::{RenderedPage, Viewport};
use common::model::report::ReportDocument;

use super::{js_error_message, load_document, PdfDocumentProxy};

/// A loaded report. Keeps the object URL alive (and revokes it on drop) for
/// as long as PDF.js may still read from it.
pub struct PdfJsDocument {
    proxy: PdfDocumentProxy,
    _url: ObjectUrl,
}

/// Draws each page onto its own `<canvas>`.
pub struct PdfJsRenderer {
    page_gap_px: u32,
}

impl PdfJsRenderer {
    pub fn new(page_gap_px: u32) -> Self {
        Self { page_gap_px }
    }

    fn create_canvas(&self, viewport: Viewport) -> Result<HtmlCanvasElement, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        let (width, height) = viewport.canvas_size();
        canvas.set_width(width);
        canvas.set_height(height);
        canvas
            .style()
            .set_property("margin-bottom", &format!("{}px", self.page_gap_px))?;
        Ok(canvas)
    }
}

fn rendering_failed(err: JsValue) -> ReportError {
    ReportError::rendering(js_error_message(&err))
}

#[async_trait(?Send)]
impl DocumentRenderer for PdfJsRenderer {
    type Document = PdfJsDocument;
    type Surface = HtmlCanvasElement;

    async fn load(&self, report: ReportDocument) -> Result<PdfJsDocument, ReportError> {
        let blob = Blob::new_with_options(report.bytes(), Some(ReportDocument::MIME_TYPE));
        let url = ObjectUrl::from(blob);
        let proxy = load_document(&url).await.map_err(rendering_failed)?;
        Ok(PdfJsDocument { proxy, _url: url })
    }

    fn page_count(&self, document: &PdfJsDocument) -> u32 {
        document.proxy.num_pages()
    }

    async fn render_page(
        &self,
        document: &PdfJsDocument,
        page_number: u32,
        scale: f64,
    ) -> Result<RenderedPage<HtmlCanvasElement>, ReportError> {
        let page = document
            .proxy
            .page(page_number)
            .await
            .map_err(rendering_failed)?;
        let js_viewport = page.viewport(scale).map_err(rendering_failed)?;
        let viewport = Viewport::new(js_viewport.width(), js_viewport.height());

        let canvas = self.create_canvas(viewport).map_err(rendering_failed)?;
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(rendering_failed)?
            .ok_or_else(|| ReportError::rendering("2d canvas context unavailable"))?
            .dyn_into()
            .map_err(|_| ReportError::rendering("2d canvas context unavailable"))?;

        page.render_into(&context, &js_viewport)
            .await
            .map_err(rendering_failed)?;

        Ok(RenderedPage {
            page_number,
            viewport,
            surface: canvas,
        })
    }
}
