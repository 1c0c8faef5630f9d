//! Component state for the report upload form.

use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use common::model::report::SelectedFile;
use common::model::state::RequestState;

/// What the status area above the rendered pages shows.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum OutputPanel {
    #[default]
    Empty,
    Loading,
    Error(String),
}

pub struct ReportFormComponent {
    /// Reference to the `<input type="file">`.
    pub file_input_ref: NodeRef,

    /// Container the rendered canvases are appended to. Its children are
    /// managed outside the virtual DOM.
    pub pages_ref: NodeRef,

    /// State of the latest cycle; seeds the controller of the next one.
    pub request_state: RequestState,

    /// Submit control disabled with its loading label.
    pub submitting: bool,

    pub panel: OutputPanel,
}

impl ReportFormComponent {
    pub fn new() -> Self {
        Self {
            file_input_ref: NodeRef::default(),
            pages_ref: NodeRef::default(),
            request_state: RequestState::Idle,
            submitting: false,
            panel: OutputPanel::Empty,
        }
    }

    /// The first file of the input, if any.
    pub fn selected_file(&self) -> Option<SelectedFile<File>> {
        let input = self.file_input_ref.cast::<HtmlInputElement>()?;
        let file = input.files()?.get(0)?;
        Some(SelectedFile::new(file.name(), file.size() as u64, file))
    }
}
