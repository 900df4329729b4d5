use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::encode_uri_component;

use crate::config;

pub fn share_url(path: &str) -> String {
    config::absolute_url(path)
}

fn encode(value: &str) -> String {
    String::from(encode_uri_component(value))
}

pub fn twitter_share_url(title: &str, url: &str) -> String {
    format!(
        "https://twitter.com/intent/tweet?text={}&url={}",
        encode(title),
        encode(url)
    )
}

pub fn linkedin_share_url(url: &str) -> String {
    format!(
        "https://www.linkedin.com/sharing/share-offsite/?url={}",
        encode(url)
    )
}

/// Fire and forget: `on_done` runs with whether the write went through.
pub fn copy_to_clipboard(text: String, on_done: impl FnOnce(bool) + 'static) {
    let Some(window) = web_sys::window() else {
        on_done(false);
        return;
    };
    let clipboard = window.navigator().clipboard();
    spawn_local(async move {
        let result = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await;
        if let Err(e) = &result {
            gloo_console::log!("Clipboard write failed:", e.clone());
        }
        on_done(result.is_ok());
    });
}
