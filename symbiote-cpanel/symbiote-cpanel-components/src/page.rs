use leptos::prelude::*;

/// One view of the control panel: a heading with view-wide actions on the right and the panel list below.
#[component]
pub fn BasePageContainer<C>(
    #[prop(into)] title: Signal<String>,
    #[prop(into, optional)] description: Signal<String>,
    actions: C,
    children: Children
) -> impl IntoView
where C: IntoView + 'static {

    view! {
        <section class="section cpanel-view">
            <div class="level mb-4">
                <div class="level-left">
                    <div class="level-item">
                        <div>
                            <h2 class="title is-4 mb-1">{ title }</h2>
                            <Show when=move || !description.read().is_empty()>
                                <p class="subtitle is-6">{ description }</p>
                            </Show>
                        </div>
                    </div>
                </div>
                <div class="level-right">
                    <div class="level-item">{ actions }</div>
                </div>
            </div>
            { children() }
        </section>
    }
}
