//! Bindings to the PDF.js `pdfjsLib` global.
//!
//! Only the handful of calls needed to draw a report page by page are bound:
//! `getDocument`, `numPages`, `getPage`, `getViewport` and `render`. The
//! library itself is loaded by the host page with a regular `<script>` tag.

use js_sys::{Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::CanvasRenderingContext2d;

mod renderer;

pub use renderer::{PdfJsDocument, PdfJsRenderer};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = pdfjsLib, js_name = getDocument)]
    fn get_document(src: &str) -> Result<PdfLoadingTask, JsValue>;

    pub type PdfLoadingTask;

    #[wasm_bindgen(method, getter)]
    fn promise(this: &PdfLoadingTask) -> Promise;

    pub type PdfDocumentProxy;

    #[wasm_bindgen(method, getter, js_name = numPages)]
    pub fn num_pages(this: &PdfDocumentProxy) -> u32;

    #[wasm_bindgen(catch, method, js_name = getPage)]
    fn get_page(this: &PdfDocumentProxy, page_number: u32) -> Result<Promise, JsValue>;

    pub type PdfPageProxy;

    #[wasm_bindgen(catch, method, js_name = getViewport)]
    fn get_viewport(this: &PdfPageProxy, params: &JsValue) -> Result<PageViewport, JsValue>;

    #[wasm_bindgen(catch, method)]
    fn render(this: &PdfPageProxy, params: &JsValue) -> Result<RenderTask, JsValue>;

    pub type PageViewport;

    #[wasm_bindgen(method, getter)]
    pub fn width(this: &PageViewport) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn height(this: &PageViewport) -> f64;

    pub type RenderTask;

    #[wasm_bindgen(method, getter)]
    fn promise(this: &RenderTask) -> Promise;
}

/// Points PDF.js at its worker script. Must run before the first document
/// is loaded.
pub fn set_worker_src(src: &str) -> Result<(), JsValue> {
    let lib = Reflect::get(&js_sys::global(), &JsValue::from_str("pdfjsLib"))?;
    if lib.is_undefined() {
        return Err(JsValue::from_str("pdfjsLib is not loaded"));
    }
    let options = Reflect::get(&lib, &JsValue::from_str("GlobalWorkerOptions"))?;
    Reflect::set(&options, &JsValue::from_str("workerSrc"), &JsValue::from_str(src))?;
    Ok(())
}

/// Loads a document from `url` (an object URL in practice).
pub async fn load_document(url: &str) -> Result<PdfDocumentProxy, JsValue> {
    let task = get_document(url)?;
    let document = JsFuture::from(task.promise()).await?;
    Ok(document.unchecked_into())
}

impl PdfDocumentProxy {
    /// Fetches the 1-based `page_number`.
    pub async fn page(&self, page_number: u32) -> Result<PdfPageProxy, JsValue> {
        let page = JsFuture::from(self.get_page(page_number)?).await?;
        Ok(page.unchecked_into())
    }
}

impl PdfPageProxy {
    pub fn viewport(&self, scale: f64) -> Result<PageViewport, JsValue> {
        let params = Object::new();
        Reflect::set(&params, &JsValue::from_str("scale"), &JsValue::from_f64(scale))?;
        self.get_viewport(&params)
    }

    /// Draws the page and resolves once PDF.js reports the render complete.
    pub async fn render_into(
        &self,
        context: &CanvasRenderingContext2d,
        viewport: &PageViewport,
    ) -> Result<(), JsValue> {
        let params = Object::new();
        Reflect::set(&params, &JsValue::from_str("canvasContext"), context)?;
        Reflect::set(&params, &JsValue::from_str("viewport"), viewport)?;
        let task = self.render(&params)?;
        JsFuture::from(task.promise()).await?;
        Ok(())
    }
}

/// Best-effort message out of a thrown JS value.
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_default()
}
