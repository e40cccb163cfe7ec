use leptos::prelude::*;

use crate::FontAwesomeIcon;

/// Two-state expansion of a panel card.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Collapse {
    #[default]
    Collapsed,
    Expanded,
}

impl Collapse {

    pub fn toggled(self) -> Self {
        match self {
            Collapse::Collapsed => Collapse::Expanded,
            Collapse::Expanded => Collapse::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Collapse::Expanded
    }

    pub fn icon(self) -> FontAwesomeIcon {
        match self {
            Collapse::Collapsed => FontAwesomeIcon::Plus,
            Collapse::Expanded => FontAwesomeIcon::Minus,
        }
    }
}

/// Card whose body is only mounted while expanded. Clicking the header toggles it.
#[component]
pub fn CollapsiblePanel<H>(
    #[prop(into)] title: Signal<String>,
    header_actions: H,
    children: ChildrenFn,
) -> impl IntoView
where H: IntoView + 'static {

    let collapse = RwSignal::new(Collapse::default());

    view! {
        <div class="card mb-3 cpanel-panel">
            <header class="card-header is-clickable" on:click=move |_| collapse.update(|state| *state = state.toggled())>
                <p class="card-header-title">{ title }</p>
                <div class="card-header-icon">
                    { header_actions }
                    <span class="icon ml-2">
                        <i class=move || collapse.get().icon().as_class() />
                    </span>
                </div>
            </header>
            <Show when=move || collapse.get().is_expanded()>
                <div class="card-content">
                    { children() }
                </div>
            </Show>
        </div>
    }
}
