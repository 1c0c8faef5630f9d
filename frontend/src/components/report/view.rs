//! View rendering for the report form.
//!
//! Element ids (`reportForm`, `dataFile`, `pdfViewer`) and class names follow
//! the host page's Bootstrap stylesheet.

use yew::prelude::*;

use super::messages::Msg;
use super::state::{OutputPanel, ReportFormComponent};

pub const SUBMIT_LABEL: &str = "Generate Report";
pub const SUBMIT_BUSY_LABEL: &str = "Generating...";

pub fn view(component: &ReportFormComponent, ctx: &Context<ReportFormComponent>) -> Html {
    let onsubmit = ctx.link().callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="report-root">
            <form id="reportForm" {onsubmit}>
                <div class="mb-3">
                    <label for="dataFile" class="form-label">{"Upload CSV data"}</label>
                    <input
                        type="file"
                        id="dataFile"
                        class="form-control"
                        accept=".csv"
                        ref={component.file_input_ref.clone()}
                    />
                </div>
                { build_submit_button(component.submitting) }
            </form>
            <div id="pdfViewer" class="pdf-viewer">
                <div class="pdf-status">{ build_output_panel(&component.panel) }</div>
                // Canvases are appended here by `DomReportView`.
                <div class="pdf-pages" ref={component.pages_ref.clone()}></div>
            </div>
        </div>
    }
}

fn build_submit_button(submitting: bool) -> Html {
    html! {
        <button type="submit" class="btn btn-primary" disabled={submitting}>
            {
                if submitting {
                    html! {
                        <>
                            <span class="spinner-border spinner-border-sm" role="status" aria-hidden="true"></span>
                            { " " }{ SUBMIT_BUSY_LABEL }
                        </>
                    }
                } else {
                    html! { <>{ SUBMIT_LABEL }</> }
                }
            }
        </button>
    }
}

fn build_output_panel(panel: &OutputPanel) -> Html {
    match panel {
        OutputPanel::Empty => html! {},
        OutputPanel::Loading => html! {
            <div class="loading">
                <div class="spinner-border text-primary loading-spinner" role="status">
                    <span class="visually-hidden">{"Loading..."}</span>
                </div>
                <div class="mt-3">{"Generating Report..."}</div>
            </div>
        },
        OutputPanel::Error(message) => html! {
            <div class="alert alert-danger" role="alert">{ message.clone() }</div>
        },
    }
}
