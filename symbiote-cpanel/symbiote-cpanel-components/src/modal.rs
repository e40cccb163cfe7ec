use leptos::prelude::*;

/// Bulma modal card. The body is only mounted while visible, so form inputs remount empty on every opening.
#[component]
pub fn Modal<C, F>(
    #[prop(into)] id: Signal<String>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] visible: Signal<bool>,
    on_close: C,
    footer: F,
    children: ChildrenFn,
) -> impl IntoView
where
    C: Fn() + Clone + 'static,
    F: IntoView + 'static,
{
    let on_background_click = on_close.clone();

    view! {
        <div
            id=move || id.get()
            class="modal"
            class:is-active=move || visible.get()
        >
            <div class="modal-background" on:click=move |_| on_background_click()></div>
            <div class="modal-card">
                <header class="modal-card-head">
                    <p class="modal-card-title">{ title }</p>
                    <button class="delete" aria-label="close" on:click=move |_| on_close()></button>
                </header>
                <section class="modal-card-body">
                    <Show when=move || visible.get()>
                        { children() }
                    </Show>
                </section>
                <footer class="modal-card-foot">
                    { footer }
                </footer>
            </div>
        </div>
    }
}
