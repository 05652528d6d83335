//! Log Panel Component
//!
//! Collapsible footer showing the most recent buffered log lines,
//! newest first. The snapshot is taken when the panel opens or refreshes.

use leptos::prelude::*;
use rolling_logger::{recent_entries, LogEntry};

fn newest_first(entries: Vec<LogEntry>) -> Vec<String> {
    entries.iter().rev().map(LogEntry::format_line).collect()
}

#[component]
pub fn LogPanel() -> impl IntoView {
    let open = RwSignal::new(false);
    let lines = RwSignal::new(Vec::<String>::new());

    let refresh = move || lines.set(newest_first(recent_entries()));
    let toggle = move |_: web_sys::MouseEvent| {
        if !open.get_untracked() {
            refresh();
        }
        open.update(|o| *o = !*o);
    };

    view! {
        <footer class="log-panel">
            <button class="log-toggle" aria-expanded=move || open.get().to_string() on:click=toggle>
                {move || if open.get() { "Hide activity log" } else { "Show activity log" }}
            </button>
            <Show when=move || open.get()>
                <button class="log-refresh" on:click=move |_| refresh()>"Refresh"</button>
                <Show
                    when=move || lines.with(|l| !l.is_empty())
                    fallback=|| view! { <p class="empty-hint">"No log entries yet."</p> }
                >
                    <ol class="log-lines">
                        {move || lines.get().into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                    </ol>
                </Show>
            </Show>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use log::Level;

    #[test]
    fn test_newest_entry_is_listed_first() {
        let entry = |message: &str| LogEntry {
            timestamp: Utc::now(),
            level: Level::Info,
            target: "app".to_string(),
            message: message.to_string(),
        };
        let lines = newest_first(vec![entry("first"), entry("second")]);
        assert!(lines[0].ends_with("second"));
        assert!(lines[1].ends_with("first"));
    }
}
