use leptos::prelude::*;
use leptos::task::spawn_local;

use symbiote_cpanel_components::{ButtonColor, ButtonSize, ButtonState, ButtonStateSignalProvider, CollapsiblePanel, FontAwesomeIcon, IconButton, LoadingSpinner, Modal, Notification, SimpleButton};
use symbiote_types::resource::{ModalId, ResourceKind};

use crate::synchronizer::state::Banner;
use crate::synchronizer::templates::{Panel, Section, SectionContent};
use crate::views::{use_synchronizer, use_view_state};

/// Renders the kind specific part of an expanded panel.
pub type PanelExtras = fn(&Panel) -> AnyView;

pub fn no_extras(_: &Panel) -> AnyView {
    ().into_any()
}

#[component]
pub fn BannerList(
    kind: ResourceKind,
    #[prop(into)] banners: Signal<Vec<Banner>>,
) -> impl IntoView {
    let synchronizer = use_synchronizer();

    view! {
        <div class="cpanel-banners">
            <For
                each=move || banners.get()
                key=|banner| banner.id
                children=move |banner| {
                    let synchronizer = synchronizer.clone();
                    let id = banner.id;
                    view! {
                        <Notification
                            level=banner.level
                            heading=banner.heading
                            message=banner.message
                            on_dismiss=move || synchronizer.dismiss_banner(kind, id)
                        />
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn PanelList(
    kind: ResourceKind,
    extras: PanelExtras,
) -> impl IntoView {
    let state = use_view_state();

    let banners = Signal::derive(move || state.with(|state| state.list(kind).banners.clone()));
    let loading = Signal::derive(move || state.with(|state| state.list(kind).loading));
    let panels = Memo::new(move |_| {
        state.with(|state| {
            let list = state.list(kind);
            (list.applied_generation(), list.panels.clone())
        })
    });
    let is_empty = move || panels.with(|(_, panels)| panels.is_empty());

    view! {
        <BannerList kind banners />
        <Show when=move || loading.get()>
            <LoadingSpinner text=format!("Loading {}s", kind.display_name().to_lowercase()) />
        </Show>
        <div class="cpanel-panel-list">
            <For
                each=move || {
                    let (generation, panels) = panels.get();
                    panels.into_iter()
                        .map(|panel| (generation, panel))
                        .collect::<Vec<_>>()
                }
                key=|(generation, panel)| (*generation, panel.id.clone())
                children=move |(_, panel)| view! { <PanelCard panel extras /> }
            />
        </div>
        <Show when=move || is_empty() && !loading.get()>
            <p class="has-text-grey has-text-centered">
                { format!("No {}s yet.", kind.display_name().to_lowercase()) }
            </p>
        </Show>
        <DeleteConfirmation kind />
    }
}

#[component]
fn PanelCard(
    panel: Panel,
    extras: PanelExtras,
) -> impl IntoView {
    let synchronizer = use_synchronizer();
    let target = panel.delete_target.clone();
    let label = format!("Delete {}", panel.title);

    view! {
        <CollapsiblePanel
            title=panel.title.clone()
            header_actions=view! {
                <IconButton
                    icon=FontAwesomeIcon::TrashCan
                    color=ButtonColor::TextDanger
                    size=ButtonSize::Small
                    state=ButtonState::Enabled
                    label
                    on_action=move || synchronizer.request_deletion(target.clone())
                />
            }
        >
            <SectionList sections=panel.sections.clone() />
            { extras(&panel) }
        </CollapsiblePanel>
    }
}

#[component]
fn SectionList(sections: Vec<Section>) -> impl IntoView {
    sections.into_iter()
        .map(|section| {
            view! {
                <div class="field">
                    <label class="label is-small">{ section.label }</label>
                    { section_content(section.content) }
                </div>
            }
        })
        .collect_view()
}

fn section_content(content: SectionContent) -> AnyView {
    match content {
        SectionContent::Text(text) => view! { <p>{ text }</p> }.into_any(),
        SectionContent::Rows(rows) if rows.is_empty() => view! { <p class="has-text-grey">"None"</p> }.into_any(),
        SectionContent::Rows(rows) => view! {
            <ul>
                { rows.into_iter().map(|row| view! { <li>{ row }</li> }).collect_view() }
            </ul>
        }.into_any(),
        SectionContent::Services(services) if services.is_empty() => view! { <p class="has-text-grey">"None"</p> }.into_any(),
        SectionContent::Services(services) => view! {
            <table class="table is-narrow is-fullwidth">
                <thead>
                    <tr><th>"URL"</th><th>"Information Model"</th></tr>
                </thead>
                <tbody>
                    {
                        services.into_iter()
                            .map(|service| view! {
                                <tr><td>{ service.url }</td><td>{ service.information_model_id }</td></tr>
                            })
                            .collect_view()
                    }
                </tbody>
            </table>
        }.into_any(),
        SectionContent::Flag(flag) => view! {
            <span class="tag" class:is-success=flag>{ if flag { "Yes" } else { "No" } }</span>
        }.into_any(),
    }
}

/// Confirmation modal of the deletion of one record of `kind`.
#[component]
pub fn DeleteConfirmation(kind: ResourceKind) -> impl IntoView {
    let synchronizer = use_synchronizer();
    let state = use_view_state();
    let deleting = RwSignal::new(false);

    let target = Memo::new(move |_| {
        state.with(|state| state.confirmation.clone().filter(|target| target.kind == kind))
    });
    let visible = Signal::derive(move || target.with(Option::is_some));
    let modal_id = Signal::derive(move || {
        target.with(|target| {
            target.as_ref()
                .and_then(|target| ModalId::delete_confirmation(target.kind, &target.id).ok())
                .map(|modal_id| modal_id.to_string())
                .unwrap_or_default()
        })
    });
    let text = Signal::derive(move || {
        state.with(|state| {
            let target = state.confirmation.as_ref()?;
            let text = state.list(kind).panels.iter()
                .find(|panel| panel.delete_target == *target)
                .map(|panel| panel.confirmation_text.clone())
                .unwrap_or_else(|| format!("Are you sure you want to delete the {} '{}'?", kind.display_name().to_lowercase(), target.id));
            Some(text)
        }).unwrap_or_default()
    });

    let cancel = {
        let synchronizer = synchronizer.clone();
        move || synchronizer.cancel_deletion()
    };
    let close = cancel.clone();

    let confirm = move || {
        if let Some(target) = target.get_untracked() {
            let synchronizer = synchronizer.clone();
            deleting.set(true);
            spawn_local(async move {
                synchronizer.delete_resource(target).await;
                deleting.set(false);
            });
        }
    };
    let delete_state = Signal::derive(move || deleting.get()).derive_loading();

    view! {
        <Modal
            id=modal_id
            title=format!("Delete {}", kind.display_name())
            visible
            on_close=close
            footer=view! {
                <div class="buttons">
                    <SimpleButton text="Delete" color=ButtonColor::Danger state=delete_state icon=FontAwesomeIcon::TrashCan on_action=confirm />
                    <SimpleButton text="Cancel" color=ButtonColor::Light state=ButtonState::Enabled on_action=cancel />
                </div>
            }
        >
            <p>{ move || text.get() }</p>
        </Modal>
    }
}
