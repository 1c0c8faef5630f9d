use crate::components::report::ReportFormComponent;
use common::config::ReportConfig;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: ReportConfig,
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                <ReportFormComponent config={ctx.props().config.clone()} />
            </div>
        }
    }
}
