//! Speech Recognition Bindings
//!
//! Thin wrapper over the browser's `webkitSpeechRecognition`:
//! one non-continuous capture per session, final results only.

use ingredient_lists_core::VoiceLanguage;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = webkitSpeechRecognition)]
    type SpeechRecognition;

    #[wasm_bindgen(constructor, js_class = "webkitSpeechRecognition", catch)]
    fn new() -> Result<SpeechRecognition, JsValue>;

    #[wasm_bindgen(method, setter = lang)]
    fn set_lang(this: &SpeechRecognition, lang: &str);

    #[wasm_bindgen(method, setter = continuous)]
    fn set_continuous(this: &SpeechRecognition, value: bool);

    #[wasm_bindgen(method, setter = interimResults)]
    fn set_interim_results(this: &SpeechRecognition, value: bool);

    #[wasm_bindgen(method, setter = onstart)]
    fn set_onstart(this: &SpeechRecognition, handler: Option<&js_sys::Function>);

    #[wasm_bindgen(method, setter = onresult)]
    fn set_onresult(this: &SpeechRecognition, handler: Option<&js_sys::Function>);

    #[wasm_bindgen(method, setter = onerror)]
    fn set_onerror(this: &SpeechRecognition, handler: Option<&js_sys::Function>);

    #[wasm_bindgen(method, setter = onend)]
    fn set_onend(this: &SpeechRecognition, handler: Option<&js_sys::Function>);

    #[wasm_bindgen(method, catch)]
    fn start(this: &SpeechRecognition) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    fn stop(this: &SpeechRecognition);

    #[wasm_bindgen(method)]
    fn abort(this: &SpeechRecognition);
}

/// Progress reported by a capture session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    Started,
    Transcript(String),
    /// User-facing error message
    Failed(String),
    Ended,
}

/// Whether the browser exposes `webkitSpeechRecognition`
pub fn is_supported() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("webkitSpeechRecognition")).unwrap_or(false))
        .unwrap_or(false)
}

/// Message shown for a recognizer error code
pub fn recognition_error_message(code: &str) -> String {
    match code {
        "no-speech" => "No speech was detected. Please try again.".to_string(),
        "audio-capture" => "No microphone was found. Please check your microphone.".to_string(),
        "not-allowed" => {
            "Microphone access was denied. Please allow microphone access.".to_string()
        }
        "network" => "Network error occurred. Please check your connection.".to_string(),
        "" => "Speech recognition error occurred.".to_string(),
        other => format!("Error: {}", other),
    }
}

/// One running capture; dropping it aborts recognition
pub struct SpeechCapture {
    recognition: SpeechRecognition,
    _handlers: Vec<Closure<dyn FnMut(JsValue)>>,
}

impl SpeechCapture {
    pub fn start(
        language: VoiceLanguage,
        on_event: impl Fn(SpeechEvent) + Clone + 'static,
    ) -> Result<Self, String> {
        if !is_supported() {
            return Err("Speech recognition is not supported in this browser.".to_string());
        }
        let recognition = SpeechRecognition::new()
            .map_err(|e| format!("Failed to create speech recognizer: {:?}", e))?;
        recognition.set_continuous(false);
        recognition.set_interim_results(false);
        recognition.set_lang(language.tag());

        let started = {
            let on_event = on_event.clone();
            Closure::<dyn FnMut(JsValue)>::new(move |_| on_event(SpeechEvent::Started))
        };
        let result = {
            let on_event = on_event.clone();
            Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                if let Some(text) = transcript_of(&event) {
                    on_event(SpeechEvent::Transcript(text));
                }
            })
        };
        let failed = {
            let on_event = on_event.clone();
            Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                let code = js_sys::Reflect::get(&event, &JsValue::from_str("error"))
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_default();
                log::warn!("[VOICE] Recognition error: {}", code);
                on_event(SpeechEvent::Failed(recognition_error_message(&code)));
            })
        };
        let ended = Closure::<dyn FnMut(JsValue)>::new(move |_| on_event(SpeechEvent::Ended));

        recognition.set_onstart(Some(started.as_ref().unchecked_ref()));
        recognition.set_onresult(Some(result.as_ref().unchecked_ref()));
        recognition.set_onerror(Some(failed.as_ref().unchecked_ref()));
        recognition.set_onend(Some(ended.as_ref().unchecked_ref()));

        recognition
            .start()
            .map_err(|e| format!("Failed to start speech recognition: {:?}", e))?;
        log::debug!("[VOICE] Listening in {}", language.tag());

        Ok(Self {
            recognition,
            _handlers: vec![started, result, failed, ended],
        })
    }

    /// Stop listening and deliver whatever was heard
    pub fn stop(&self) {
        self.recognition.stop();
    }
}

impl Drop for SpeechCapture {
    fn drop(&mut self) {
        self.recognition.set_onstart(None);
        self.recognition.set_onresult(None);
        self.recognition.set_onerror(None);
        self.recognition.set_onend(None);
        self.recognition.abort();
    }
}

/// `event.results[0][0].transcript`
fn transcript_of(event: &JsValue) -> Option<String> {
    let results = js_sys::Reflect::get(event, &JsValue::from_str("results")).ok()?;
    let first = js_sys::Reflect::get_u32(&results, 0).ok()?;
    let alternative = js_sys::Reflect::get_u32(&first, 0).ok()?;
    js_sys::Reflect::get(&alternative, &JsValue::from_str("transcript"))
        .ok()?
        .as_string()
}
