/// Where a report cycle currently stands, as reflected by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    /// Nothing in flight; the form is ready.
    #[default]
    Idle,
    /// The CSV has been posted and the response is awaited.
    Submitting,
    /// A report arrived and its pages are being drawn.
    Rendering,
    /// The cycle ended with a message in the output panel.
    Error,
    /// Every page of the report has been drawn.
    Done,
}

/// Inputs that move a cycle between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestEvent {
    /// A new submission clears a finished cycle.
    Reset,
    Submit,
    ResponseReceived,
    Failed,
    LastPageRendered,
}

impl RequestState {
    /// Pure transition function. `None` means the event is not valid in the
    /// current state.
    pub fn next(self, event: RequestEvent) -> Option<RequestState> {
        use RequestEvent::*;
        use RequestState::*;

        match (self, event) {
            (Error | Done, Reset) => Some(Idle),
            (Idle, Submit) => Some(Submitting),
            (Submitting, ResponseReceived) => Some(Rendering),
            (Submitting | Rendering, Failed) => Some(Error),
            (Rendering, LastPageRendered) => Some(Done),
            _ => None,
        }
    }

    /// A cycle is in flight: the submit control stays disabled.
    pub fn is_busy(self) -> bool {
        matches!(self, RequestState::Submitting | RequestState::Rendering)
    }

    pub fn is_finished(self) -> bool {
        matches!(self, RequestState::Error | RequestState::Done)
    }
}
