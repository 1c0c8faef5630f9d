//! DOM utilities for the report form.

use yew::NodeRef;

/// Blocking browser alert.
pub fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", err);
        }
    }
}

/// Removes every child of the element behind `node_ref`.
pub fn clear_children(node_ref: &NodeRef) {
    if let Some(element) = node_ref.cast::<web_sys::Element>() {
        element.set_inner_html("");
    }
}
