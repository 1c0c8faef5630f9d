use crate::app::{App, AppProps};

mod app;
mod components;
mod config;
mod logging;
mod pdfjs;
mod services;

fn main() {
    let config = config::load_config();
    logging::init(config.level_filter());

    if let Err(err) = pdfjs::set_worker_src(&config.worker_src) {
        log::warn!(
            "could not configure the PDF.js worker: {}",
            pdfjs::js_error_message(&err)
        );
    }

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
