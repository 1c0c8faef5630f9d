use web_sys::{Element, HtmlCanvasElement};
use yew::html::Scope;
use yew::NodeRef;

use common::controller::ReportView;
use common::model::page::RenderedPage;
use common::model::state::RequestState;

use super::helpers::{clear_children, show_alert};
use super::messages::Msg;
use super::state::ReportFormComponent;

/// Browser side of a report cycle.
///
/// Canvases are appended to the pages container synchronously, as they come
/// out of the renderer. Everything else goes through the component's message
/// queue, which preserves order.
pub struct DomReportView {
    link: Scope<ReportFormComponent>,
    pages_ref: NodeRef,
}

impl DomReportView {
    pub fn new(link: Scope<ReportFormComponent>, pages_ref: NodeRef) -> Self {
        Self { link, pages_ref }
    }
}

impl ReportView for DomReportView {
    type Surface = HtmlCanvasElement;

    fn alert(&self, message: &str) {
        show_alert(message);
    }

    fn state_changed(&self, state: RequestState) {
        self.link.send_message(Msg::StateChanged(state));
    }

    fn set_submit_busy(&self, busy: bool) {
        self.link.send_message(Msg::SubmitBusy(busy));
    }

    fn show_loading(&self) {
        clear_children(&self.pages_ref);
        self.link.send_message(Msg::ShowLoading);
    }

    fn clear_output(&self) {
        clear_children(&self.pages_ref);
        self.link.send_message(Msg::ClearOutput);
    }

    fn append_page(&self, page: RenderedPage<HtmlCanvasElement>) {
        let Some(container) = self.pages_ref.cast::<Element>() else {
            log::error!("pages container missing, dropping page {}", page.page_number);
            return;
        };
        if let Err(err) = container.append_child(&page.surface) {
            log::error!("could not append page {}: {:?}", page.page_number, err);
        }
    }

    fn show_error(&self, message: &str) {
        clear_children(&self.pages_ref);
        self.link.send_message(Msg::ShowError(message.to_string()));
    }
}
