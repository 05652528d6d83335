//! Voice Input Modal Component
//!
//! Captures one utterance in the chosen language, with a typed fallback.
//! The result is handed back as a `VoiceResult`; what it creates depends
//! on the target.

use ingredient_lists_core::{
    clean_transcript, VoiceField, VoiceLanguage, VoiceResult, VoiceTarget,
};
use leptos::prelude::*;

use super::Modal;
use crate::context::use_app_context;
use crate::speech::{self, SpeechCapture, SpeechEvent};

/// Texts shown for a capture target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoicePrompt {
    pub title: &'static str,
    pub instruction: &'static str,
    pub placeholder: &'static str,
    pub submit_label: &'static str,
}

impl VoicePrompt {
    pub fn for_target(target: &VoiceTarget) -> Self {
        match target {
            VoiceTarget::NewList => VoicePrompt {
                title: "Create List by Voice",
                instruction: "Speak the name of your ingredient list (e.g., \"Birthday Party\", \"Wedding Menu\")",
                placeholder: "Enter list name manually...",
                submit_label: "Create List",
            },
            VoiceTarget::Category { .. } => VoicePrompt {
                title: "Add Category by Voice",
                instruction: "Speak the category name (e.g., \"Vegetables\", \"Spices\", \"Dairy\")",
                placeholder: "Enter category name manually...",
                submit_label: "Add Category",
            },
            VoiceTarget::SubIngredient { .. } => VoicePrompt {
                title: "Add Sub-ingredient by Voice",
                instruction: "Speak the ingredient details (e.g., \"2 kg potatoes\", \"500 g tomatoes\")",
                placeholder: "Enter ingredient details manually...",
                submit_label: "Add Ingredient",
            },
            VoiceTarget::SubIngredientField { field: VoiceField::Name, .. } => VoicePrompt {
                title: "Dictate Ingredient Name",
                instruction: "Speak the ingredient name (e.g., \"Basmati rice\")",
                placeholder: "Enter name manually...",
                submit_label: "Use Name",
            },
            VoiceTarget::SubIngredientField { field: VoiceField::Quantity, .. } => VoicePrompt {
                title: "Dictate Quantity",
                instruction: "Speak the quantity per person (e.g., \"2\", \"0.5\", \"1/4\")",
                placeholder: "Enter quantity manually...",
                submit_label: "Use Quantity",
            },
        }
    }
}

#[component]
pub fn VoiceInputModal(
    target: VoiceTarget,
    #[prop(into)] on_result: Callback<VoiceResult>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let prompt = VoicePrompt::for_target(&target);
    let languages = ctx.config.with_value(|c| c.voice_languages.clone());

    let (language, set_language) =
        signal(languages.first().copied().unwrap_or(VoiceLanguage::English));
    let (listening, set_listening) = signal(false);
    let (transcript, set_transcript) = signal(String::new());
    let (manual, set_manual) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let capture = StoredValue::new_local(None::<SpeechCapture>);

    if !speech::is_supported() {
        set_error.set(Some(
            "Speech recognition is not supported in this browser. Type instead.".to_string(),
        ));
    }

    let start = move |lang: VoiceLanguage| {
        set_language.set(lang);
        // Drop any previous session first
        capture.set_value(None);
        let on_event = move |event: SpeechEvent| match event {
            SpeechEvent::Started => {
                set_listening.set(true);
                set_error.set(None);
                set_transcript.set(String::new());
            }
            SpeechEvent::Transcript(text) => set_transcript.set(clean_transcript(&text)),
            SpeechEvent::Failed(message) => {
                set_listening.set(false);
                set_error.set(Some(message));
            }
            SpeechEvent::Ended => set_listening.set(false),
        };
        match SpeechCapture::start(lang, on_event) {
            Ok(session) => capture.set_value(Some(session)),
            Err(message) => set_error.set(Some(message)),
        }
    };

    let stop = move |_: web_sys::MouseEvent| {
        capture.with_value(|session| {
            if let Some(session) = session {
                session.stop();
            }
        })
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let heard = transcript.get_untracked();
        let text = if heard.trim().is_empty() { manual.get_untracked() } else { heard };
        let result = VoiceResult::new(text, language.get_untracked());
        if result.candidate().is_none() {
            set_error.set(Some("Nothing recognized yet. Speak or type first.".to_string()));
            return;
        }
        capture.set_value(None);
        on_result.run(result);
    };

    let close = Callback::new(move |_: ()| {
        capture.set_value(None);
        on_cancel.run(());
    });

    view! {
        <Modal title=prompt.title on_close=close>
            <form class="voice-form" on:submit=submit>
                <p class="voice-instruction">{prompt.instruction}</p>

                {move || error.get().map(|message| view! { <p class="voice-error" role="alert">{message}</p> })}

                <div class="language-buttons">
                    {languages
                        .into_iter()
                        .map(|lang| {
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if language.get() == lang { "language-btn active" } else { "language-btn" }
                                    }
                                    disabled=move || listening.get()
                                    on:click=move |_| start(lang)
                                >
                                    "🎤 " {lang.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <Show when=move || listening.get()>
                    <div class="listening">
                        <span class="pulse">"Listening..."</span>
                        <button type="button" class="secondary-btn" on:click=stop>"Stop"</button>
                    </div>
                </Show>

                <Show when=move || !transcript.with(|t| t.is_empty())>
                    <p class="transcript">
                        <span class="transcript-label">"Heard: "</span>
                        {move || transcript.get()}
                    </p>
                </Show>

                <input
                    type="text"
                    placeholder=prompt.placeholder
                    prop:value=move || manual.get()
                    on:input=move |ev| set_manual.set(event_target_value(&ev))
                />

                <div class="modal-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="primary-btn">{prompt.submit_label}</button>
                </div>
            </form>
        </Modal>
    }
}
