use leptos::prelude::*;

use super::FieldHelp;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectOption {
    pub display_name: String,
    pub value: String,
}

#[component]
pub fn SelectInput(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    value: RwSignal<String>,
    #[prop(into, optional)] placeholder: Signal<String>,
    #[prop(into, optional)] error: Signal<Option<String>>,
) -> impl IntoView {

    let aria_label = label;

    view! {
        <div class="field">
            <label class="label">{ label }</label>
            <div class="control">
                <div class="select is-fullwidth" class:is-danger=move || error.with(Option::is_some)>
                    <select
                        aria-label=move || aria_label.get()
                        prop:value=move || value.get()
                        on:change=move |ev| value.set(event_target_value(&ev))
                    >
                        <option value="">{ placeholder }</option>
                        <For
                            each=move || options.get()
                            key=|option| option.value.to_owned()
                            children=move |option| {
                                let selected_value = option.value.clone();
                                view! {
                                    <option
                                        value=option.value
                                        selected=move || value.with(|value| *value == selected_value)
                                    >
                                        { option.display_name }
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>
            </div>
            <FieldHelp error />
        </div>
    }
}
