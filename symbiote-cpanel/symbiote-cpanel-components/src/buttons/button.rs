use leptos::prelude::*;
use crate::{ButtonColor, ButtonState, FontAwesomeIcon};

/// Text button. Bulma's `is-loading` replaces the text with a spinner while a request is outstanding.
#[component]
pub fn SimpleButton<A>(
    #[prop(into)] text: Signal<String>,
    #[prop(into)] color: Signal<ButtonColor>,
    #[prop(into)] state: Signal<ButtonState>,
    #[prop(optional)] icon: Option<FontAwesomeIcon>,
    on_action: A,
) -> impl IntoView
where A: Fn() + 'static {

    view! {
        <button
            class=move || format!("button {}", color.with(ButtonColor::as_class))
            class:is-loading=move || state.get() == ButtonState::Loading
            class:is-hidden=move || state.get() == ButtonState::Hidden
            disabled=move || state.get().is_disabled()
            on:click=move |_| on_action()
        >
            {
                icon.map(|icon| view! {
                    <span class="icon"><i class=icon.as_class() /></span>
                })
            }
            <span>{ text }</span>
        </button>
    }
}
