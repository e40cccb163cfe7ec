use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use super::FieldHelp;

/// File picker. `on_select` receives the chosen file, or `None` when the selection was cleared.
#[component]
pub fn FileInput<S>(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] file_name: Signal<Option<String>>,
    #[prop(into, optional)] accept: String,
    #[prop(into, optional)] error: Signal<Option<String>>,
    on_select: S,
) -> impl IntoView
where S: Fn(Option<File>) + 'static {

    view! {
        <div class="field">
            <label class="label">{ label }</label>
            <div class="file has-name is-fullwidth" class:is-danger=move || error.with(Option::is_some)>
                <label class="file-label">
                    <input
                        class="file-input"
                        type="file"
                        accept=accept
                        on:change=move |ev| {
                            let file = ev.target()
                                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
                                .and_then(|input| input.files())
                                .and_then(|files| files.get(0));
                            on_select(file);
                        }
                    />
                    <span class="file-cta">
                        <span class="file-icon"><i class="fa-solid fa-upload" /></span>
                        <span class="file-label">"Choose a file…"</span>
                    </span>
                    <span class="file-name">
                        { move || file_name.get().unwrap_or_else(|| String::from("No file selected")) }
                    </span>
                </label>
            </div>
            <FieldHelp error />
        </div>
    }
}
