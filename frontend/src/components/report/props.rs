//! Properties for the `ReportFormComponent`.

use common::config::ReportConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ReportFormProps {
    /// Endpoint, multipart field, render scale and upload limit used for every
    /// submission. Read once per submission, so a new value applies to the
    /// next cycle.
    #[prop_or_default]
    pub config: ReportConfig,
}
