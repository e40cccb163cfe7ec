use leptos::prelude::*;

#[component]
pub fn UploadProgress(
    #[prop(into)] percent: Signal<Option<u8>>,
) -> impl IntoView {
    view! {
        <Show when=move || percent.get().is_some()>
            <div class="field">
                <progress class="progress is-info" max="100" value=move || percent.get().unwrap_or_default().to_string()>
                    { move || format!("{}%", percent.get().unwrap_or_default()) }
                </progress>
                <p class="help has-text-centered">{ move || format!("{}%", percent.get().unwrap_or_default()) }</p>
            </div>
        </Show>
    }
}
