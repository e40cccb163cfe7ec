use leptos::prelude::*;

use crate::FontAwesomeIcon;

#[component]
pub fn LoadingSpinner(
    #[prop(into, optional)] text: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="has-text-centered has-text-grey py-4">
            <span class="icon">
                <i class=format!("{} fa-spin", FontAwesomeIcon::CircleNotch.as_class()) />
            </span>
            <span>{ text }</span>
        </div>
    }
}
