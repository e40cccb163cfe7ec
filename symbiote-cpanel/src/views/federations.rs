use leptos::prelude::*;
use leptos::task::spawn_local;

use symbiote_cpanel_components::{BasePageContainer, ButtonColor, ButtonState, ButtonStateSignalProvider, FontAwesomeIcon, Modal, SimpleButton, TextInput};
use symbiote_types::error::{FieldErrors, FieldKey};
use symbiote_types::resource::ResourceKind;
use symbiote_types::role::Role;

use crate::synchronizer::forms::{FederationForm, RegistrationForm};
use crate::views::panels::{no_extras, BannerList, PanelList};
use crate::views::{use_synchronizer, use_view_state};

const KIND: ResourceKind = ResourceKind::Federation;

#[component]
pub fn FederationsView() -> impl IntoView {
    let synchronizer = use_synchronizer();
    let create_state = if synchronizer.role() == Role::Admin { ButtonState::Enabled } else { ButtonState::Hidden };

    view! {
        <BasePageContainer
            title="Federations"
            actions=view! {
                <SimpleButton
                    text="Create Federation"
                    color=ButtonColor::Primary
                    state=create_state
                    icon=FontAwesomeIcon::Plus
                    on_action=move || synchronizer.open_registration(KIND)
                />
            }
        >
            <PanelList kind=KIND extras=no_extras />
            <FederationCreationModal />
        </BasePageContainer>
    }
}

#[component]
fn FederationCreationModal() -> impl IntoView {
    let synchronizer = use_synchronizer();
    let state = use_view_state();

    let visible = Signal::derive(move || state.with(|state| state.registration(KIND).visible));
    let banners = Signal::derive(move || state.with(|state| state.registration(KIND).banners.clone()));
    let errors = Signal::derive(move || state.with(|state| state.registration(KIND).field_errors.clone()));
    let submitting = Signal::derive(move || state.with(|state| state.registration(KIND).submitting));

    let on_close = {
        let synchronizer = synchronizer.clone();
        move || synchronizer.close_registration(KIND)
    };
    let on_cancel = on_close.clone();

    view! {
        <Modal
            id="federation-registration-modal"
            title="Create Federation"
            visible
            on_close
            footer=view! {
                <SimpleButton text="Cancel" color=ButtonColor::Light state=ButtonState::Enabled on_action=on_cancel />
            }
        >
            <BannerList kind=KIND banners />
            <FederationCreationForm errors submitting />
        </Modal>
    }
}

#[component]
fn FederationCreationForm(
    errors: Signal<FieldErrors>,
    submitting: Signal<bool>,
) -> impl IntoView {
    let synchronizer = use_synchronizer();

    let id = RwSignal::new(String::new());
    let platform1_id = RwSignal::new(String::new());
    let platform2_id = RwSignal::new(String::new());

    let field_error = move |key: FieldKey| Signal::derive(move || errors.with(|errors| errors.get(key).map(String::from)));

    let create = move || {
        let synchronizer = synchronizer.clone();
        let form = RegistrationForm::Federation(FederationForm {
            id: id.get_untracked(),
            platform1_id: platform1_id.get_untracked(),
            platform2_id: platform2_id.get_untracked(),
        });
        spawn_local(async move {
            synchronizer.register_resource(form).await;
        });
    };

    view! {
        <TextInput label="Federation Id" value=id error=field_error(FieldKey::Id) />
        <TextInput label="First Platform Id" value=platform1_id error=field_error(FieldKey::Platform1Id) />
        <TextInput label="Second Platform Id" value=platform2_id error=field_error(FieldKey::Platform2Id) />
        <SimpleButton
            text="Create"
            color=ButtonColor::Primary
            state=submitting.derive_loading()
            icon=FontAwesomeIcon::Check
            on_action=create
        />
    }
}
