use common::config::ReportConfig;

/// Id of the optional `<script type="application/json">` element carrying
/// configuration overrides.
pub const CONFIG_ELEMENT_ID: &str = "report-config";

/// Reads the page's JSON override, or the defaults when there is none.
///
/// Runs before the logger is installed, so problems go straight to the console.
pub fn load_config() -> ReportConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => match ReportConfig::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                gloo_console::warn!(format!(
                    "ignoring invalid #{} configuration: {}",
                    CONFIG_ELEMENT_ID, err
                ));
                ReportConfig::default()
            }
        },
        _ => ReportConfig::default(),
    }
}
