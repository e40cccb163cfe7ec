use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn as_class(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "is-success",
            NotificationLevel::Warning => "is-warning",
            NotificationLevel::Error => "is-danger",
        }
    }
}

#[component]
pub fn Notification<D>(
    level: NotificationLevel,
    #[prop(into)] heading: String,
    #[prop(into)] message: String,
    on_dismiss: D,
) -> impl IntoView
where D: Fn() + 'static {

    view! {
        <div class=format!("notification {} is-light", level.as_class()) role="alert">
            <button
                class="delete"
                aria-label="dismiss"
                on:click=move |event| {
                    event.stop_propagation();
                    on_dismiss()
                }
            ></button>
            <strong>{ heading }</strong>
            <p>{ message }</p>
        </div>
    }
}
