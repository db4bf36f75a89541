/// Tube Chat - Chrome extension popup for asking questions about the
/// YouTube video open in the active tab
/// Built with Rust + WASM + Yew

mod backend;
mod chat_data;
mod tabs;
mod video;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export video-id extraction for JavaScript access
#[wasm_bindgen]
pub fn extract_video_id(tab_url: &str) -> Option<String> {
    video::extract_video_id(tab_url)
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
