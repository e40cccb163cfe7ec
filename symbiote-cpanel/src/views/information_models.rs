use js_sys::Uint8Array;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{debug, error};
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use symbiote_cpanel_components::{BasePageContainer, ButtonColor, ButtonState, ButtonStateSignalProvider, FileInput, FontAwesomeIcon, Modal, SimpleButton, TextInput, UploadProgress};
use symbiote_types::error::{FieldErrors, FieldKey};
use symbiote_types::resource::ResourceKind;

use crate::synchronizer::forms::{InformationModelForm, RegistrationForm, SelectedFile};
use crate::views::panels::{no_extras, BannerList, PanelList};
use crate::views::{use_synchronizer, use_view_state};

const KIND: ResourceKind = ResourceKind::InformationModel;

#[component]
pub fn InformationModelsView() -> impl IntoView {
    let synchronizer = use_synchronizer();

    view! {
        <BasePageContainer
            title="Information Models"
            description="Information models you registered."
            actions=view! {
                <SimpleButton
                    text="Register Information Model"
                    color=ButtonColor::Primary
                    state=ButtonState::Enabled
                    icon=FontAwesomeIcon::Plus
                    on_action=move || synchronizer.open_registration(KIND)
                />
            }
        >
            <PanelList kind=KIND extras=no_extras />
            <InformationModelRegistrationModal />
        </BasePageContainer>
    }
}

#[component]
fn InformationModelRegistrationModal() -> impl IntoView {
    let synchronizer = use_synchronizer();
    let state = use_view_state();

    let visible = Signal::derive(move || state.with(|state| state.registration(KIND).visible));
    let banners = Signal::derive(move || state.with(|state| state.registration(KIND).banners.clone()));
    let errors = Signal::derive(move || state.with(|state| state.registration(KIND).field_errors.clone()));
    let submitting = Signal::derive(move || state.with(|state| state.registration(KIND).submitting));
    let progress = Signal::derive(move || state.with(|state| state.registration(KIND).progress));

    let on_close = {
        let synchronizer = synchronizer.clone();
        move || synchronizer.close_registration(KIND)
    };
    let on_cancel = on_close.clone();

    view! {
        <Modal
            id="info-model-registration-modal"
            title="Register Information Model"
            visible
            on_close
            footer=view! {
                <SimpleButton text="Cancel" color=ButtonColor::Light state=ButtonState::Enabled on_action=on_cancel />
            }
        >
            <BannerList kind=KIND banners />
            <InformationModelRegistrationForm errors submitting />
            <UploadProgress percent=progress />
        </Modal>
    }
}

#[component]
fn InformationModelRegistrationForm(
    errors: Signal<FieldErrors>,
    submitting: Signal<bool>,
) -> impl IntoView {
    let synchronizer = use_synchronizer();

    let name = RwSignal::new(String::new());
    let uri = RwSignal::new(String::new());
    let rdf = RwSignal::new(None::<SelectedFile>);
    let reading_error = RwSignal::new(None::<String>);

    let field_error = move |key: FieldKey| Signal::derive(move || errors.with(|errors| errors.get(key).map(String::from)));
    let rdf_error = Signal::derive(move || {
        reading_error.get()
            .or_else(|| errors.with(|errors| errors.get(FieldKey::Rdf).map(String::from)))
    });
    let file_name = Signal::derive(move || rdf.with(|rdf| rdf.as_ref().map(|file| file.name.clone())));

    let on_select = move |file: Option<File>| {
        rdf.set(None);
        reading_error.set(None);
        if let Some(file) = file {
            spawn_local(async move {
                match read_file(&file).await {
                    Ok(selected) => {
                        debug!("Read RDF file '{}' with {} bytes.", selected.name, selected.bytes.len());
                        rdf.set(Some(selected));
                    }
                    Err(cause) => {
                        error!("{cause}");
                        reading_error.set(Some(cause));
                    }
                }
            });
        }
    };

    let register = move || {
        let synchronizer = synchronizer.clone();
        let form = RegistrationForm::InformationModel(InformationModelForm {
            name: name.get_untracked(),
            uri: uri.get_untracked(),
            rdf: rdf.get_untracked(),
        });
        spawn_local(async move {
            synchronizer.register_resource(form).await;
        });
    };

    view! {
        <TextInput label="Name" value=name error=field_error(FieldKey::Name) />
        <TextInput label="URI" value=uri placeholder="http://www.example.org/model" error=field_error(FieldKey::Uri) />
        <FileInput label="RDF" file_name accept=".ttl,.owl,.rdf,.nt,.jsonld" error=rdf_error on_select />
        <SimpleButton
            text="Register"
            color=ButtonColor::Primary
            state=submitting.derive_loading()
            icon=FontAwesomeIcon::Check
            on_action=register
        />
    }
}

async fn read_file(file: &File) -> Result<SelectedFile, String> {
    let name = file.name();
    let buffer = JsFuture::from(file.array_buffer()).await
        .map_err(|cause| format!("The file '{name}' could not be read: {cause:?}"))?;
    Ok(SelectedFile {
        bytes: Uint8Array::new(&buffer).to_vec(),
        name,
    })
}
