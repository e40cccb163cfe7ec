//! Keeps the panel lists of a view in sync with the backend.
//!
//! Every operation sends one request and then applies the answer to the
//! [`ViewState`] of the view. Successful mutations are followed by a refresh of the
//! affected list, so the list always shows what the backend returned last.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use symbiote_types::download::content_disposition_filename;
use symbiote_types::endpoint::Endpoint;
use symbiote_types::error::FieldErrorPrefix;
use symbiote_types::federation::parse_federation_list;
use symbiote_types::information_model::InformationModel;
use symbiote_types::platform::{DeletePlatformResources, ListUserPlatformsResponse, PlatformConfigurationMessage};
use symbiote_types::resource::{DeleteTarget, ResourceId, ResourceKind};
use symbiote_types::role::Role;

use crate::api::{CpanelRequest, CpanelResponse, DownloadedFile, RequestBody, Transport, STATUS_PARTIAL_CONTENT};
use crate::synchronizer::forms::{PlatformForm, RegistrationForm};
use crate::synchronizer::outcome::Outcome;
use crate::synchronizer::state::{BannerId, ConfigurationModal, ViewState, ViewStore};
use crate::synchronizer::templates::{render_panel, BannerCategory, Operation, RenderError, ResourceRecord};

pub mod forms;
pub mod outcome;
pub mod state;
pub mod templates;

#[cfg(test)]
#[allow(non_snake_case)]
mod tests;

pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "configuration.zip";

pub struct Synchronizer<T, S> {
    transport: Arc<T>,
    store: S,
    role: Role,
    base_path: String,
}

impl<T, S: Clone> Clone for Synchronizer<T, S> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            store: self.store.clone(),
            role: self.role,
            base_path: self.base_path.clone(),
        }
    }
}

impl<T, S> Synchronizer<T, S>
where
    T: Transport + 'static,
    S: ViewStore,
{
    pub fn new(transport: T, store: S, role: Role, base_path: impl Into<String>) -> Self {
        Self {
            transport: Arc::new(transport),
            store,
            role,
            base_path: base_path.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Captures the panel and banner templates of every kind. Later calls leave the cache untouched.
    pub fn capture_templates(&self) {
        self.store.write(|state| state.templates.capture(&ResourceKind::ALL));
    }

    fn request(&self, endpoint: Endpoint, body: RequestBody) -> CpanelRequest {
        CpanelRequest::new(self.role.endpoint_path(&self.base_path, endpoint), body)
    }

    async fn exchange(&self, request: CpanelRequest, progress: Option<Box<dyn Fn(u8)>>) -> Outcome {
        let path = request.path.clone();
        let outcome = Outcome::from(self.transport.send(request, progress).await);

        match &outcome {
            Outcome::Unauthorized => {
                let login_path = self.role.login_path(&self.base_path);
                info!("Request to '{path}' was not allowed. Redirecting to '{login_path}'.");
                self.store.write(|state| state.redirect = Some(login_path));
            }
            Outcome::Rejected { status, .. } => {
                warn!("Request to '{path}' was rejected with status {status}.");
            }
            Outcome::Unreachable(cause) => {
                error!("{cause}");
            }
            Outcome::Success(_) => {}
        }
        outcome
    }

    /// Replaces the panels of `kind` with the records the backend currently lists.
    pub async fn refresh_panels(&self, kind: ResourceKind) {
        self.capture_templates();

        let Some(generation) = self.store.write(|state| state.list_mut(kind).issue_generation()) else {
            return;
        };
        debug!("Refreshing {kind} panels, generation {generation}.");

        let outcome = self.exchange(self.request(kind.list_endpoint(), RequestBody::Empty), None).await;

        let rendered = self.store.write(|state| {
            if !state.list(kind).is_latest(generation) {
                debug!("Discarding {kind} list of generation {generation}, a newer request was issued.");
                return false;
            }
            match outcome {
                Outcome::Success(response) => apply_list(state, kind, generation, &response),
                Outcome::Unauthorized => {
                    state.list_mut(kind).mark_applied(generation);
                    false
                }
                failure => {
                    state.list_mut(kind).mark_applied(generation);
                    let message = failure.failure_message(&format!("The {}s could not be loaded.", kind.display_name().to_lowercase()));
                    state.show_list_banner(kind, BannerCategory::ListFailed, message);
                    false
                }
            }
        }).unwrap_or(false);

        if rendered && kind == ResourceKind::Platform {
            self.refresh_information_model_choices().await;
        }
    }

    /// Loads the information models offered in the interworking service pickers.
    pub async fn refresh_information_model_choices(&self) {
        let outcome = self.exchange(self.request(Endpoint::ListAllInformationModels, RequestBody::Empty), None).await;

        match outcome {
            Outcome::Success(response) => {
                match serde_json::from_slice::<Vec<InformationModel>>(&response.body) {
                    Ok(models) => {
                        debug!("Loaded {} information model choices.", models.len());
                        self.store.write(|state| state.information_model_choices = models);
                    }
                    Err(cause) => warn!("Could not parse the information model choices:\n  {cause}"),
                }
            }
            Outcome::Unauthorized => {}
            failure => warn!("Could not load the information model choices: {}", failure.failure_message("no details")),
        }
    }

    pub fn open_registration(&self, kind: ResourceKind) {
        self.capture_templates();
        self.store.write(|state| state.registration_mut(kind).open());
    }

    pub fn close_registration(&self, kind: ResourceKind) {
        self.store.write(|state| state.registration_mut(kind).close());
    }

    pub async fn register_resource(&self, form: RegistrationForm) {
        self.capture_templates();
        let kind = form.kind();

        let accepted = self.store.write(|state| state.registration_mut(kind).begin_submission()).unwrap_or(false);
        if !accepted {
            debug!("A {kind} registration is already outstanding. Ignoring the submission.");
            return;
        }

        let body = match form.into_body() {
            Ok(body) => body,
            Err(cause) => {
                info!("{kind} registration form is incomplete: {cause}");
                self.store.write(|state| {
                    state.registration_mut(kind).end_submission();
                    state.show_registration_banner(kind, BannerCategory::RegistrationFailed, cause.to_string());
                });
                return;
            }
        };

        let progress = matches!(body, RequestBody::Multipart(_))
            .then(|| self.upload_progress_reporter(kind));
        let outcome = self.exchange(self.request(kind.create_endpoint(), body), progress).await;

        let registered = self.store.write(|state| {
            state.registration_mut(kind).end_submission();
            match outcome {
                Outcome::Success(_) => {
                    state.registration_mut(kind).close();
                    let message = format!("The {} was registered successfully.", kind.display_name().to_lowercase());
                    state.show_list_banner(kind, BannerCategory::RegistrationSucceeded, message);
                    true
                }
                Outcome::Unauthorized => false,
                failure => {
                    if let Outcome::Rejected { body, .. } = &failure {
                        state.registration_mut(kind).field_errors = body.field_errors(kind, FieldErrorPrefix::Registration);
                    }
                    let message = failure.failure_message(&format!("The {} could not be registered.", kind.display_name().to_lowercase()));
                    state.show_registration_banner(kind, BannerCategory::RegistrationFailed, message);
                    false
                }
            }
        }).unwrap_or(false);

        if registered {
            info!("{kind} registered.");
            self.refresh_panels(kind).await;
        }
    }

    fn upload_progress_reporter(&self, kind: ResourceKind) -> Box<dyn Fn(u8)> {
        let store = self.store.clone();
        Box::new(move |percent| {
            store.write(|state| state.registration_mut(kind).progress = Some(percent));
        })
    }

    /// Sends the edited platform. Field errors are shown in the edit form of that platform's panel.
    pub async fn update_platform(&self, form: PlatformForm) {
        self.capture_templates();
        let kind = ResourceKind::Platform;

        let id = match ResourceId::from_record(&form.id) {
            Ok(id) => id,
            Err(cause) => {
                self.store.write(|state| state.show_list_banner(kind, BannerCategory::UpdateFailed, cause.to_string()));
                return;
            }
        };

        let accepted = self.store.write(|state| {
            let update = state.platform_updates.entry(id.clone()).or_default();
            if update.submitting {
                false
            } else {
                update.submitting = true;
                true
            }
        }).unwrap_or(false);
        if !accepted {
            debug!("An update of platform <{id}> is already outstanding. Ignoring the submission.");
            return;
        }

        let body = match form.into_details().map_err(|cause| cause.to_string())
            .and_then(|details| RequestBody::json(&details).map_err(|cause| cause.to_string())) {
            Ok(body) => body,
            Err(message) => {
                self.store.write(|state| {
                    state.platform_updates.entry(id.clone()).or_default().submitting = false;
                    state.show_list_banner(kind, BannerCategory::UpdateFailed, message);
                });
                return;
            }
        };

        let outcome = self.exchange(self.request(Endpoint::UpdatePlatform, body), None).await;

        let updated = self.store.write(|state| {
            let update = state.platform_updates.entry(id.clone()).or_default();
            update.submitting = false;
            match outcome {
                Outcome::Success(_) => {
                    update.field_errors = Default::default();
                    state.show_list_banner(kind, BannerCategory::UpdateSucceeded, format!("Platform '{id}' was updated."));
                    true
                }
                Outcome::Unauthorized => false,
                failure => {
                    if let Outcome::Rejected { body, .. } = &failure {
                        update.field_errors = body.field_errors(kind, FieldErrorPrefix::Update);
                    }
                    let message = failure.failure_message(&format!("Platform '{id}' could not be updated."));
                    state.show_list_banner(kind, BannerCategory::UpdateFailed, message);
                    false
                }
            }
        }).unwrap_or(false);

        if updated {
            self.refresh_panels(kind).await;
        }
    }

    /// Opens the confirmation modal for `target`.
    pub fn request_deletion(&self, target: DeleteTarget) {
        self.store.write(|state| state.confirmation = Some(target));
    }

    pub fn cancel_deletion(&self) {
        self.store.write(|state| state.confirmation = None);
    }

    pub async fn delete_resource(&self, target: DeleteTarget) {
        self.capture_templates();
        let DeleteTarget { kind, id } = target.clone();

        let request = self.request(kind.delete_endpoint(), RequestBody::Form(target.form_fields()));
        let outcome = self.exchange(request, None).await;

        let deleted = self.store.write(|state| {
            state.confirmation = None;
            match outcome {
                Outcome::Success(_) => {
                    state.show_list_banner(kind, BannerCategory::DeletionSucceeded, format!("{kind} '{id}' was deleted."));
                    true
                }
                Outcome::Unauthorized => false,
                failure => {
                    let message = failure.failure_message(&format!("{kind} '{id}' could not be deleted."));
                    state.show_list_banner(kind, BannerCategory::DeletionFailed, message);
                    false
                }
            }
        }).unwrap_or(false);

        if deleted {
            info!("{kind} <{id}> deleted.");
            if self.role.resource_kinds().contains(&kind) {
                self.refresh_panels(kind).await;
            }
        }
    }

    /// Asks the backend to drop everything it keeps for a platform. At most one request is outstanding.
    pub async fn delete_platform_resources(&self, request: DeletePlatformResources) {
        self.capture_templates();
        let kind = ResourceKind::Platform;

        let accepted = self.store.write(|state| {
            if state.clearing_platform_resources {
                false
            } else {
                state.clearing_platform_resources = true;
                true
            }
        }).unwrap_or(false);
        if !accepted {
            debug!("A deletion of platform resources is already outstanding. Ignoring the submission.");
            return;
        }

        let id = request.platform_id.clone();
        let body = RequestBody::Form(request.form_fields());
        let outcome = self.exchange(self.request(Endpoint::DeletePlatformResources, body), None).await;

        self.store.write(|state| {
            state.clearing_platform_resources = false;
            match outcome {
                Outcome::Success(_) => {
                    info!("Resources of platform <{id}> deleted.");
                    state.show_list_banner(kind, BannerCategory::ResourceCleanupSucceeded, format!("The resources of platform '{id}' were deleted."));
                }
                Outcome::Unauthorized => {}
                failure => {
                    let message = failure.failure_message(&format!("The resources of platform '{id}' could not be deleted."));
                    state.show_list_banner(kind, BannerCategory::ResourceCleanupFailed, message);
                }
            }
        });
    }

    pub fn open_configuration(&self, platform: ResourceId) {
        self.store.write(|state| state.configuration.target = Some(platform));
    }

    pub fn close_configuration(&self) {
        self.store.write(|state| {
            if !state.configuration.submitting {
                state.configuration = ConfigurationModal::default();
            }
        });
    }

    /// Requests the configuration bundle of a platform and hands it to the user as a file.
    pub async fn download_platform_config(&self, message: PlatformConfigurationMessage) {
        self.capture_templates();
        let kind = ResourceKind::Platform;

        let accepted = self.store.write(|state| {
            if state.configuration.submitting {
                false
            } else {
                state.configuration.submitting = true;
                true
            }
        }).unwrap_or(false);
        if !accepted {
            debug!("A configuration download is already outstanding. Ignoring the submission.");
            return;
        }

        let body = match RequestBody::json(&message) {
            Ok(body) => body,
            Err(cause) => {
                self.store.write(|state| {
                    state.configuration = ConfigurationModal::default();
                    state.show_list_banner(kind, BannerCategory::ConfigurationFailed, cause.to_string());
                });
                return;
            }
        };

        let outcome = self.exchange(self.request(Endpoint::GetPlatformConfig, body), None).await;

        let file = self.store.write(|state| {
            state.configuration = ConfigurationModal::default();
            match outcome {
                Outcome::Success(response) => {
                    state.clear_list_failures(kind, Operation::Configuration);
                    Some(downloaded_file(response))
                }
                Outcome::Unauthorized => None,
                failure => {
                    let message = failure.failure_message(&format!("The configuration of platform '{}' could not be created.", message.platform_id));
                    state.show_list_banner(kind, BannerCategory::ConfigurationFailed, message);
                    None
                }
            }
        }).flatten();

        if let Some(file) = file {
            match self.transport.save_file(&file) {
                Ok(()) => info!("Saved configuration of platform <{}> as '{}'.", message.platform_id, file.file_name),
                Err(cause) => {
                    error!("{cause}");
                    self.store.write(|state| state.show_list_banner(kind, BannerCategory::ConfigurationFailed, cause.to_string()));
                }
            }
        }
    }

    pub fn dismiss_banner(&self, kind: ResourceKind, banner: BannerId) {
        self.store.write(|state| state.dismiss_banner(kind, banner));
    }
}

fn downloaded_file(response: CpanelResponse) -> DownloadedFile {
    let file_name = response.content_disposition.as_deref()
        .and_then(content_disposition_filename)
        .unwrap_or_else(|| String::from(DEFAULT_CONFIGURATION_FILE_NAME));
    DownloadedFile { file_name, bytes: response.body }
}

struct ListedRecords {
    records: Vec<ResourceRecord>,
    message: Option<String>,
}

fn parse_records(kind: ResourceKind, body: &[u8]) -> Result<ListedRecords, serde_json::Error> {
    let listed = match kind {
        ResourceKind::Platform => {
            let response = serde_json::from_slice::<ListUserPlatformsResponse>(body)?;
            ListedRecords {
                records: response.available_platforms.into_iter().map(ResourceRecord::Platform).collect(),
                message: response.message,
            }
        }
        ResourceKind::InformationModel => ListedRecords {
            records: serde_json::from_slice::<Vec<InformationModel>>(body)?
                .into_iter().map(ResourceRecord::InformationModel).collect(),
            message: None,
        },
        ResourceKind::Federation => ListedRecords {
            records: parse_federation_list(body)?
                .into_iter().map(ResourceRecord::Federation).collect(),
            message: None,
        },
    };
    Ok(listed)
}

/// Returns whether the panels were replaced.
fn apply_list(state: &mut ViewState, kind: ResourceKind, generation: u64, response: &CpanelResponse) -> bool {
    let listed = match parse_records(kind, &response.body) {
        Ok(listed) => listed,
        Err(cause) => {
            error!("Could not parse the {kind} list:\n  {cause}");
            state.list_mut(kind).mark_applied(generation);
            state.show_list_banner(kind, BannerCategory::ListFailed, format!("The response could not be read: {cause}"));
            return false;
        }
    };

    state.clear_list_failures(kind, Operation::List);

    let template = state.templates.panel(kind).cloned();
    let mut panels = Vec::with_capacity(listed.records.len());
    for record in &listed.records {
        let panel = template.as_ref()
            .ok_or(RenderError::MissingTemplate { kind })
            .and_then(|template| render_panel(template, record));
        match panel {
            Ok(panel) => panels.push(panel),
            Err(cause) => {
                warn!("Could not render {kind} <{}>: {cause}", record.raw_id());
                state.show_list_banner(kind, BannerCategory::ListFailed, cause.to_string());
            }
        }
    }
    debug!("Rendering {} {kind} panels of generation {generation}.", panels.len());
    state.list_mut(kind).replace_panels(generation, panels);
    if kind == ResourceKind::Platform {
        state.retain_listed_platform_updates();
    }

    if response.status == STATUS_PARTIAL_CONTENT {
        let message = listed.message
            .unwrap_or_else(|| format!("Not all of your {}s could be loaded.", kind.display_name().to_lowercase()));
        state.show_list_banner(kind, BannerCategory::ListIncomplete, message);
    }
    true
}
