//! Update function for the report form.
//!
//! `Msg::Submit` starts a cycle on the local executor; every other message is
//! the cycle reporting a visible change back to the component.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::controller::ReportRequestController;

use crate::pdfjs::PdfJsRenderer;
use crate::services::report::HttpReportService;

use super::dom_view::DomReportView;
use super::messages::Msg;
use super::state::{OutputPanel, ReportFormComponent};

pub fn update(
    component: &mut ReportFormComponent,
    ctx: &Context<ReportFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Submit => {
            let selection = component.selected_file();
            let config = ctx.props().config.clone();
            let previous = component.request_state;
            let view = DomReportView::new(ctx.link().clone(), component.pages_ref.clone());

            spawn_local(async move {
                let renderer = PdfJsRenderer::new(config.page_gap_px);
                let controller =
                    ReportRequestController::new(config, HttpReportService, renderer, view)
                        .with_state(previous);
                let outcome = controller.handle_submit(selection).await;
                log::debug!("report cycle finished: {:?}", outcome);
            });
            false
        }
        Msg::StateChanged(state) => {
            component.request_state = state;
            false
        }
        Msg::SubmitBusy(busy) => {
            let changed = component.submitting != busy;
            component.submitting = busy;
            changed
        }
        Msg::ShowLoading => {
            component.panel = OutputPanel::Loading;
            true
        }
        Msg::ClearOutput => {
            component.panel = OutputPanel::Empty;
            true
        }
        Msg::ShowError(message) => {
            component.panel = OutputPanel::Error(message);
            true
        }
    }
}
