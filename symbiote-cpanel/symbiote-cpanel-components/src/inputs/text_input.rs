use leptos::prelude::*;

use super::FieldHelp;

#[component]
pub fn TextInput(
    #[prop(into)] label: Signal<String>,
    value: RwSignal<String>,
    #[prop(into, optional)] placeholder: Signal<String>,
    #[prop(into, optional)] error: Signal<Option<String>>,
    #[prop(optional)] readonly: bool,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {

    let aria_label = label;

    view! {
        <div class="field">
            <label class="label">{ label }</label>
            <div class="control">
                <input
                    class="input"
                    class:is-danger=move || error.with(Option::is_some)
                    type=input_type
                    readonly=readonly
                    aria-label=move || aria_label.get()
                    placeholder=move || placeholder.get()
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
            <FieldHelp error />
        </div>
    }
}
