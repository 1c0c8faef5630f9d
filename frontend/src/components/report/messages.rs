use common::model::state::RequestState;

#[derive(Clone, Debug)]
pub enum Msg {
    Submit,
    StateChanged(RequestState),
    SubmitBusy(bool),
    ShowLoading,
    ClearOutput,
    ShowError(String),
}
