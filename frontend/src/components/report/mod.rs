//! Report upload form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering and the DOM side of
//! the report cycle.
//!
//! Responsibilities
//! - Re-export `Msg`, `ReportFormProps` and `ReportFormComponent`.
//! - Delegate to `update::update` and `view::view`.
//! - `dom_view::DomReportView` bridges the shared controller to this component:
//!   panel and button changes become messages, rendered canvases are appended
//!   straight into the pages container.

use yew::prelude::*;

mod dom_view;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ReportFormProps;
pub use state::ReportFormComponent;

impl Component for ReportFormComponent {
    type Message = Msg;
    type Properties = ReportFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ReportFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
