use leptos::prelude::*;
use leptos::task::spawn_local;

use symbiote_cpanel_components::{BasePageContainer, ButtonColor, ButtonSize, ButtonState, ButtonStateSignalProvider, CheckboxInput, FontAwesomeIcon, IconButton, Modal, SelectInput, SelectOption, SimpleButton, TextInput};
use symbiote_types::error::{FieldErrors, FieldKey};
use symbiote_types::platform::{DeploymentType, Level, PlatformConfigurationMessage, PlatformDetails};
use symbiote_types::resource::{ResourceId, ResourceKind};

use crate::synchronizer::forms::{PlatformForm, RegistrationForm};
use crate::synchronizer::templates::{Panel, ResourceRecord};
use crate::views::panels::{BannerList, PanelList};
use crate::views::{use_synchronizer, use_view_state};

const KIND: ResourceKind = ResourceKind::Platform;

#[component]
pub fn PlatformsView() -> impl IntoView {
    let synchronizer = use_synchronizer();

    view! {
        <BasePageContainer
            title="Platforms"
            description="Platforms you own. Expand a platform to edit it or to download its configuration."
            actions=view! {
                <SimpleButton
                    text="Register Platform"
                    color=ButtonColor::Primary
                    state=ButtonState::Enabled
                    icon=FontAwesomeIcon::Plus
                    on_action=move || synchronizer.open_registration(KIND)
                />
            }
        >
            <PanelList kind=KIND extras=platform_extras />
            <PlatformRegistrationModal />
            <PlatformConfigurationModal />
        </BasePageContainer>
    }
}

fn platform_extras(panel: &Panel) -> AnyView {
    match &panel.record {
        ResourceRecord::Platform(platform) => view! {
            <PlatformActions id=panel.id.clone() platform=platform.clone() />
        }.into_any(),
        _ => ().into_any(),
    }
}

/// Input signals of a platform form. Row inputs get a signal each, so rows can be added and removed.
#[derive(Clone, Copy)]
struct PlatformFormSignals {
    id: RwSignal<String>,
    name: RwSignal<String>,
    labels: RwSignal<Vec<RwSignal<String>>>,
    comments: RwSignal<Vec<RwSignal<String>>>,
    services: RwSignal<Vec<ServiceRow>>,
    is_enabler: RwSignal<bool>,
}

#[derive(Clone, Copy)]
struct ServiceRow {
    url: RwSignal<String>,
    model: RwSignal<String>,
}

impl PlatformFormSignals {

    fn new(form: PlatformForm) -> Self {
        let rows = |values: Vec<String>| values.into_iter().map(RwSignal::new).collect::<Vec<_>>();
        let services = form.service_urls.into_iter()
            .zip(form.service_models)
            .map(|(url, model)| ServiceRow { url: RwSignal::new(url), model: RwSignal::new(model) })
            .collect::<Vec<_>>();

        Self {
            id: RwSignal::new(form.id),
            name: RwSignal::new(form.name),
            labels: RwSignal::new(rows(form.labels)),
            comments: RwSignal::new(rows(form.comments)),
            services: RwSignal::new(services),
            is_enabler: RwSignal::new(form.is_enabler),
        }
    }

    fn collect(&self) -> PlatformForm {
        let rows = |rows: RwSignal<Vec<RwSignal<String>>>| {
            rows.get_untracked().iter()
                .map(|row| row.get_untracked())
                .collect::<Vec<_>>()
        };
        let services = self.services.get_untracked();

        PlatformForm {
            id: self.id.get_untracked(),
            name: self.name.get_untracked(),
            labels: rows(self.labels),
            comments: rows(self.comments),
            service_urls: services.iter().map(|service| service.url.get_untracked()).collect(),
            service_models: services.iter().map(|service| service.model.get_untracked()).collect(),
            is_enabler: self.is_enabler.get_untracked(),
        }
    }
}

fn field_error(errors: Signal<FieldErrors>, key: FieldKey) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|errors| errors.get(key).map(String::from)))
}

fn row_error(errors: Signal<FieldErrors>, key: FieldKey, index: usize) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|errors| errors.at(key, index).map(String::from)))
}

#[component]
fn PlatformFormFields(
    form: PlatformFormSignals,
    errors: Signal<FieldErrors>,
    id_readonly: bool,
) -> impl IntoView {
    let state = use_view_state();
    let model_options = Signal::derive(move || {
        state.with(|state| {
            state.information_model_choices.iter()
                .map(|model| SelectOption {
                    display_name: format!("{} ({})", model.name, model.id),
                    value: model.id.clone(),
                })
                .collect::<Vec<_>>()
        })
    });

    view! {
        <TextInput label="Platform Id" value=form.id readonly=id_readonly error=field_error(errors, FieldKey::Id) />
        <TextInput label="Name" value=form.name error=field_error(errors, FieldKey::Name) />
        <RowInputs label="Label" rows=form.labels errors key=FieldKey::Label />
        <RowInputs label="Comment" rows=form.comments errors key=FieldKey::Comment />

        <div class="field">
            <label class="label">"Interworking Services"</label>
            <For
                each={move || form.services.get().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(index, _)| *index
                children=move |(index, service)| view! {
                    <div class="columns">
                        <div class="column">
                            <TextInput
                                label=format!("URL {}", index + 1)
                                value=service.url
                                placeholder="https://platform.example.com"
                                error=row_error(errors, FieldKey::ServiceUrl, index)
                            />
                        </div>
                        <div class="column">
                            <SelectInput
                                label=format!("Information Model {}", index + 1)
                                options=model_options
                                value=service.model
                                placeholder="Select an information model"
                                error=row_error(errors, FieldKey::ServiceModel, index)
                            />
                        </div>
                    </div>
                }
            />
            <RowButtons
                label="Interworking Service"
                on_add=move || form.services.update(|services| services.push(ServiceRow {
                    url: RwSignal::new(String::new()),
                    model: RwSignal::new(String::new()),
                }))
                on_remove=move || form.services.update(|services| { services.pop(); })
            />
        </div>

        <CheckboxInput label="This platform is an enabler" checked=form.is_enabler error=field_error(errors, FieldKey::IsEnabler) />
    }
}

#[component]
fn RowInputs(
    #[prop(into)] label: String,
    rows: RwSignal<Vec<RwSignal<String>>>,
    errors: Signal<FieldErrors>,
    key: FieldKey,
) -> impl IntoView {
    let row_label = label.clone();

    view! {
        <div class="field">
            <label class="label">{ format!("{label}s") }</label>
            <For
                each={move || rows.get().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(index, _)| *index
                children=move |(index, row)| view! {
                    <TextInput label=format!("{row_label} {}", index + 1) value=row error=row_error(errors, key, index) />
                }
            />
            <RowButtons
                label
                on_add=move || rows.update(|rows| rows.push(RwSignal::new(String::new())))
                on_remove=move || rows.update(|rows| { rows.pop(); })
            />
        </div>
    }
}

#[component]
fn RowButtons<A, R>(
    #[prop(into)] label: String,
    on_add: A,
    on_remove: R,
) -> impl IntoView
where
    A: Fn() + 'static,
    R: Fn() + 'static,
{
    view! {
        <div class="buttons">
            <IconButton
                icon=FontAwesomeIcon::Plus
                color=ButtonColor::Light
                size=ButtonSize::Small
                state=ButtonState::Enabled
                label=format!("Add {label}")
                on_action=on_add
            />
            <IconButton
                icon=FontAwesomeIcon::Minus
                color=ButtonColor::Light
                size=ButtonSize::Small
                state=ButtonState::Enabled
                label=format!("Remove {label}")
                on_action=on_remove
            />
        </div>
    }
}

#[component]
fn PlatformRegistrationModal() -> impl IntoView {
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
            id="platform-registration-modal"
            title="Register Platform"
            visible
            on_close
            footer=view! {
                <SimpleButton text="Cancel" color=ButtonColor::Light state=ButtonState::Enabled on_action=on_cancel />
            }
        >
            <BannerList kind=KIND banners />
            <PlatformRegistrationForm errors submitting />
        </Modal>
    }
}

#[component]
fn PlatformRegistrationForm(
    errors: Signal<FieldErrors>,
    submitting: Signal<bool>,
) -> impl IntoView {
    let synchronizer = use_synchronizer();
    let form = PlatformFormSignals::new(PlatformForm::default());

    let register = move || {
        let synchronizer = synchronizer.clone();
        let form = RegistrationForm::Platform(form.collect());
        spawn_local(async move {
            synchronizer.register_resource(form).await;
        });
    };

    view! {
        <PlatformFormFields form errors id_readonly=false />
        <SimpleButton
            text="Register"
            color=ButtonColor::Primary
            state=submitting.derive_loading()
            icon=FontAwesomeIcon::Check
            on_action=register
        />
    }
}

#[component]
fn PlatformActions(
    id: ResourceId,
    platform: PlatformDetails,
) -> impl IntoView {
    let synchronizer = use_synchronizer();
    let state = use_view_state();

    let update_id = id.clone();
    let errors = Signal::derive(move || {
        state.with(|state| {
            state.platform_update(&update_id)
                .map(|update| update.field_errors.clone())
                .unwrap_or_default()
        })
    });
    let submitting_id = id.clone();
    let submitting = Signal::derive(move || {
        state.with(|state| state.platform_update(&submitting_id).is_some_and(|update| update.submitting))
    });

    let form = PlatformFormSignals::new(PlatformForm::from(&platform));

    let save = {
        let synchronizer = synchronizer.clone();
        move || {
            let synchronizer = synchronizer.clone();
            let form = form.collect();
            spawn_local(async move {
                synchronizer.update_platform(form).await;
            });
        }
    };
    let configure = move || synchronizer.open_configuration(id.clone());

    view! {
        <hr />
        <h4 class="title is-6">"Edit Platform"</h4>
        <PlatformFormFields form errors id_readonly=true />
        <div class="buttons">
            <SimpleButton
                text="Save"
                color=ButtonColor::Primary
                state=submitting.derive_loading()
                icon=FontAwesomeIcon::Save
                on_action=save
            />
            <SimpleButton
                text="Get Configuration"
                color=ButtonColor::Info
                state=ButtonState::Enabled
                icon=FontAwesomeIcon::Download
                on_action=configure
            />
        </div>
    }
}

#[component]
fn PlatformConfigurationModal() -> impl IntoView {
    let synchronizer = use_synchronizer();
    let state = use_view_state();

    let target = Memo::new(move |_| state.with(|state| state.configuration.target.clone()));
    let visible = Signal::derive(move || target.with(Option::is_some));
    let submitting = Signal::derive(move || state.with(|state| state.configuration.submitting));
    let title = Signal::derive(move || {
        target.with(|target| match target {
            Some(id) => format!("Configuration of Platform '{id}'"),
            None => String::from("Platform Configuration"),
        })
    });

    let on_close = {
        let synchronizer = synchronizer.clone();
        move || synchronizer.close_configuration()
    };
    let on_cancel = on_close.clone();

    view! {
        <Modal
            id="platform-configuration-modal"
            title
            visible
            on_close
            footer=view! {
                <SimpleButton text="Cancel" color=ButtonColor::Light state=ButtonState::Enabled on_action=on_cancel />
            }
        >
            <PlatformConfigurationForm target submitting />
        </Modal>
    }
}

#[component]
fn PlatformConfigurationForm(
    target: Memo<Option<ResourceId>>,
    submitting: Signal<bool>,
) -> impl IntoView {
    let synchronizer = use_synchronizer();

    let owner_username = RwSignal::new(String::new());
    let owner_password = RwSignal::new(String::new());
    let components_keystore_password = RwSignal::new(String::new());
    let aam_keystore_name = RwSignal::new(String::new());
    let aam_keystore_password = RwSignal::new(String::new());
    let aam_private_key_password = RwSignal::new(String::new());
    let token_validity = RwSignal::new(String::from("600000"));
    let use_built_in_rap_plugin = RwSignal::new(true);
    let level = RwSignal::new(String::from(Level::default().as_str()));
    let deployment_type = RwSignal::new(String::from(DeploymentType::default().as_str()));
    let token_validity_error = RwSignal::new(None::<String>);

    let level_options = Level::ALL.into_iter()
        .map(|level| SelectOption { display_name: level.to_string(), value: level.to_string() })
        .collect::<Vec<_>>();
    let deployment_options = DeploymentType::ALL.into_iter()
        .map(|deployment| SelectOption { display_name: deployment.to_string(), value: deployment.to_string() })
        .collect::<Vec<_>>();

    let download = move || {
        let Some(platform) = target.get_untracked() else {
            return;
        };
        let token_validity = match token_validity.get_untracked().trim().parse::<u64>() {
            Ok(token_validity) => {
                token_validity_error.set(None);
                token_validity
            }
            Err(_) => {
                token_validity_error.set(Some(String::from("Please enter the token validity in milliseconds.")));
                return;
            }
        };
        let (Ok(level), Ok(deployment_type)) = (
            Level::try_from(level.get_untracked().as_str()),
            DeploymentType::try_from(deployment_type.get_untracked().as_str()),
        ) else {
            return;
        };

        let message = PlatformConfigurationMessage {
            platform_id: platform.to_string(),
            platform_owner_username: owner_username.get_untracked(),
            platform_owner_password: owner_password.get_untracked(),
            components_keystore_password: components_keystore_password.get_untracked(),
            aam_keystore_name: aam_keystore_name.get_untracked(),
            aam_keystore_password: aam_keystore_password.get_untracked(),
            aam_private_key_password: aam_private_key_password.get_untracked(),
            token_validity,
            use_built_in_rap_plugin: use_built_in_rap_plugin.get_untracked(),
            level,
            deployment_type,
        };

        let synchronizer = synchronizer.clone();
        spawn_local(async move {
            synchronizer.download_platform_config(message).await;
        });
    };

    view! {
        <TextInput label="Platform Owner Username" value=owner_username />
        <TextInput label="Platform Owner Password" value=owner_password input_type="password" />
        <TextInput label="Components Keystore Password" value=components_keystore_password input_type="password" />
        <TextInput label="AAM Keystore Name" value=aam_keystore_name />
        <TextInput label="AAM Keystore Password" value=aam_keystore_password input_type="password" />
        <TextInput label="AAM Private Key Password" value=aam_private_key_password input_type="password" />
        <TextInput label="Token Validity (ms)" value=token_validity input_type="number" error=token_validity_error />
        <CheckboxInput label="Use the built-in RAP plugin" checked=use_built_in_rap_plugin />
        <SelectInput label="Level" options=level_options value=level placeholder="Select a level" />
        <SelectInput label="Deployment Type" options=deployment_options value=deployment_type placeholder="Select a deployment type" />
        <SimpleButton
            text="Download"
            color=ButtonColor::Primary
            state=submitting.derive_loading()
            icon=FontAwesomeIcon::Download
            on_action=download
        />
    }
}
