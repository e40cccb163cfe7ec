pub mod checkbox_input;
pub mod file_input;
pub mod select_input;
pub mod text_input;

use leptos::prelude::*;

use crate::NON_BREAKING_SPACE;

/// Help line below an input. Keeps its height when there is no error, so the form does not jump.
#[component]
fn FieldHelp(error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <p class="help has-text-danger">
            { move || error.get().unwrap_or_else(|| String::from(NON_BREAKING_SPACE)) }
        </p>
    }
}
