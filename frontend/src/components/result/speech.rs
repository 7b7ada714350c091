//! Text-to-speech through the browser's `speechSynthesis`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::SpeechSynthesisUtterance;
use yew::Callback;

/// Voice used for playback.
const SPEECH_LANG: &str = "hi-IN";

/// Mirrors `'speechSynthesis' in window`.
pub fn is_supported() -> bool {
    web_sys::window()
        .map(|window| js_sys::Reflect::has(&window, &JsValue::from_str("speechSynthesis")).unwrap_or(false))
        .unwrap_or(false)
}

/// Starts reading `text` aloud. `on_end` fires once playback finishes.
pub fn speak(text: &str, on_end: Callback<()>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let synthesis = window.speech_synthesis()?;

    let utterance = SpeechSynthesisUtterance::new_with_text(text)?;
    utterance.set_lang(SPEECH_LANG);
    let on_end = Closure::once_into_js(move || on_end.emit(()));
    utterance.set_onend(Some(on_end.unchecked_ref()));

    synthesis.speak(&utterance);
    Ok(())
}
