use wasm_bindgen_futures::JsFuture;

/// Opens `url` in a new browsing context. Popup blocking has no feedback
/// path; a refusal is only logged.
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => {}
        Ok(None) => {
            web_sys::console::warn_1(&format!("[Files] window.open blocked for {}", url).into());
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[Files] window.open failed: {:?}", e).into());
        }
    }
}

pub async fn copy_to_clipboard(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await.is_ok()
}
