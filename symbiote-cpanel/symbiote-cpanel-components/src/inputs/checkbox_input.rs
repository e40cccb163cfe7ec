use leptos::prelude::*;

use super::FieldHelp;

#[component]
pub fn CheckboxInput(
    #[prop(into)] label: Signal<String>,
    checked: RwSignal<bool>,
    #[prop(into, optional)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <div class="control">
                <label class="checkbox">
                    <input
                        type="checkbox"
                        class="mr-2"
                        prop:checked=move || checked.get()
                        on:change=move |ev| checked.set(event_target_checked(&ev))
                    />
                    { label }
                </label>
            </div>
            <FieldHelp error />
        </div>
    }
}
