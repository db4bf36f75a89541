/// Active-tab query via the extension's JS bridge
use serde::Deserialize;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn queryActiveTab() -> Result<JsValue, JsValue>;
}

/// Descriptor of the active tab as returned by the bridge
#[derive(Debug, Clone, Deserialize)]
struct TabDescriptor {
    url: Option<String>,
}

/// Return the URL of the active tab in the current window, or None when
/// the tabs capability is unavailable or the tab has no URL. Failures are
/// logged but never propagated; callers degrade to the disabled state.
pub async fn active_tab_url() -> Option<String> {
    let tab_js = match queryActiveTab().await {
        Ok(value) => value,
        Err(e) => {
            log::warn!("could not query tabs, not running as an extension? {e:?}");
            return None;
        }
    };

    if tab_js.is_null() || tab_js.is_undefined() {
        log::warn!("tab query returned no active tab");
        return None;
    }

    match serde_wasm_bindgen::from_value::<TabDescriptor>(tab_js) {
        Ok(tab) => tab.url,
        Err(e) => {
            log::warn!("could not parse tab descriptor: {e:?}");
            None
        }
    }
}
