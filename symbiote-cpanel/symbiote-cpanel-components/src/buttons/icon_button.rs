use leptos::prelude::*;

use crate::{ButtonColor, ButtonSize, ButtonState, FontAwesomeIcon};

#[component]
pub fn IconButton<A>(
    #[prop(into)] icon: Signal<FontAwesomeIcon>,
    #[prop(into)] color: Signal<ButtonColor>,
    #[prop(into)] size: Signal<ButtonSize>,
    #[prop(into)] state: Signal<ButtonState>,
    #[prop(into)] label: Signal<String>,
    #[prop(into, default = Signal::from(false))] show_label: Signal<bool>,
    on_action: A,
) -> impl IntoView
where A: Fn() + 'static {

    view! {
        <button
            class=move || format!("button {} {}", color.with(ButtonColor::as_class), size.with(ButtonSize::as_class))
            class:is-loading=move || state.get() == ButtonState::Loading
            class:is-hidden=move || state.get() == ButtonState::Hidden
            disabled=move || state.get().is_disabled()
            title=move || label.get()
            aria-label=move || label.get()
            on:click=move |event| {
                // buttons sit inside clickable card headers
                event.stop_propagation();
                on_action();
            }
        >
            <span class="icon">
                <i class=move || icon.with(FontAwesomeIcon::as_class) />
            </span>
            <Show when=move || show_label.get()>
                <span>{ move || label.get() }</span>
            </Show>
        </button>
    }
}
