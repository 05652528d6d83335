//! Unit Select Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Picker over the configured unit vocabulary
///
/// A current value outside the vocabulary (older data) stays selectable.
#[component]
pub fn UnitSelect(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let mut units = ctx.config.with_value(|c| c.units.clone());
    let current = value.get_untracked();
    if !current.is_empty() && !units.iter().any(|u| u == &current) {
        units.insert(0, current);
    }

    view! {
        <select class="unit-select" on:change=move |ev| on_change.run(event_target_value(&ev))>
            {units
                .into_iter()
                .map(|unit| {
                    let option_unit = unit.clone();
                    let value_unit = unit.clone();
                    view! {
                        <option value=value_unit selected=move || value.get() == option_unit>
                            {unit}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
