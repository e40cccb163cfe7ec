use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::{block_on, LocalPool};
use futures::task::LocalSpawnExt;
use googletest::prelude::*;

use symbiote_cpanel_components::NotificationLevel;
use symbiote_types::error::FieldKey;
use symbiote_types::platform::{DeletePlatformResources, DeploymentType, Level, PlatformConfigurationMessage};
use symbiote_types::resource::{DeleteTarget, ResourceId, ResourceKind};
use symbiote_types::role::Role;

use crate::api::{ApiError, CpanelRequest, CpanelResponse, DownloadedFile, RequestBody, Transport};
use crate::synchronizer::forms::{FederationForm, InformationModelForm, PlatformForm, RegistrationForm, SelectedFile};
use crate::synchronizer::state::ViewState;
use crate::synchronizer::templates::BannerCategory;
use crate::synchronizer::Synchronizer;

enum Reply {
    Ready(std::result::Result<CpanelResponse, ApiError>),
    Pending(oneshot::Receiver<CpanelResponse>),
}

/// Answers requests in the scripted order and records what was sent.
#[derive(Default)]
struct FakeTransport {
    replies: RefCell<VecDeque<Reply>>,
    requests: RefCell<Vec<CpanelRequest>>,
    saved_files: RefCell<Vec<DownloadedFile>>,
}

impl FakeTransport {

    fn reply(&self, status: u16, body: &str) {
        self.replies.borrow_mut().push_back(Reply::Ready(Ok(response(status, body))));
    }

    fn reply_later(&self) -> oneshot::Sender<CpanelResponse> {
        let (sender, receiver) = oneshot::channel();
        self.replies.borrow_mut().push_back(Reply::Pending(receiver));
        sender
    }

    fn fail(&self, cause: &str) {
        self.replies.borrow_mut().push_back(Reply::Ready(Err(ApiError::Request {
            path: String::from("any"),
            cause: cause.to_owned(),
        })));
    }

    fn paths(&self) -> Vec<String> {
        self.requests.borrow().iter()
            .map(|request| request.path.clone())
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {

    async fn send(&self, request: CpanelRequest, progress: Option<Box<dyn Fn(u8)>>) -> std::result::Result<CpanelResponse, ApiError> {
        let path = request.path.clone();
        self.requests.borrow_mut().push(request);

        if let Some(progress) = progress {
            progress(40);
            progress(100);
        }

        let reply = self.replies.borrow_mut().pop_front();
        match reply {
            Some(Reply::Ready(result)) => result,
            Some(Reply::Pending(receiver)) => receiver.await
                .map_err(|_| ApiError::Response { path, cause: String::from("Reply was dropped.") }),
            None => panic!("No reply scripted for request to '{path}'."),
        }
    }

    fn save_file(&self, file: &DownloadedFile) -> std::result::Result<(), ApiError> {
        self.saved_files.borrow_mut().push(file.clone());
        Ok(())
    }
}

type TestSynchronizer = Synchronizer<FakeTransport, Rc<RefCell<ViewState>>>;

fn response(status: u16, body: &str) -> CpanelResponse {
    CpanelResponse { status, content_disposition: None, body: body.as_bytes().to_vec() }
}

fn synchronizer(role: Role) -> TestSynchronizer {
    Synchronizer::new(FakeTransport::default(), Rc::new(RefCell::new(ViewState::default())), role, "/administration")
}

fn panel_titles(synchronizer: &TestSynchronizer, kind: ResourceKind) -> Vec<String> {
    synchronizer.store().borrow().list(kind).panels.iter()
        .map(|panel| panel.title.clone())
        .collect()
}

fn banners(synchronizer: &TestSynchronizer, kind: ResourceKind) -> Vec<(BannerCategory, String)> {
    synchronizer.store().borrow().list(kind).banners.iter()
        .map(|banner| (banner.category, banner.message.clone()))
        .collect()
}

fn federation_target(id: &str) -> DeleteTarget {
    DeleteTarget::new(ResourceKind::Federation, ResourceId::try_from(id).expect("Failed to create resource id"))
}

fn platform_form() -> PlatformForm {
    PlatformForm {
        id: String::from("p1"),
        name: String::from("Plat1"),
        labels: vec![String::from("l1")],
        ..Default::default()
    }
}

#[test]
fn A_platform_list_should_render_one_panel_per_record_without_banners() -> Result<()> {
    let synchronizer = synchronizer(Role::User);
    synchronizer.transport().reply(200, r#"{"availablePlatforms":[{"id":"p1","name":"Plat1"}],"message":null}"#);
    synchronizer.transport().reply(200, r#"[{"id":"im1","name":"Model","uri":"http://model.org"}]"#);

    block_on(synchronizer.refresh_panels(ResourceKind::Platform));

    assert_that!(panel_titles(&synchronizer, ResourceKind::Platform), eq(vec![String::from("Plat1")]));
    assert_that!(banners(&synchronizer, ResourceKind::Platform), empty());
    assert_that!(synchronizer.transport().paths(), eq(vec![
        String::from("/administration/user/cpanel/list_user_platforms"),
        String::from("/administration/user/cpanel/list_all_info_models"),
    ]));
    assert_that!(synchronizer.store().borrow().information_model_choices, len(eq(1)));
    Ok(())
}

#[test]
fn Rendered_panels_should_follow_the_order_of_the_response() -> Result<()> {
    let synchronizer = synchronizer(Role::Admin);
    synchronizer.transport().reply(200, r#"{"fed2":{"id":"fed2","platformIds":[]},"fed1":{"id":"fed1","platformIds":["p1"]}}"#);

    block_on(synchronizer.refresh_panels(ResourceKind::Federation));

    assert_that!(panel_titles(&synchronizer, ResourceKind::Federation), eq(vec![String::from("fed2"), String::from("fed1")]));
    Ok(())
}

#[test]
fn A_partial_platform_list_should_add_a_warning_banner() -> Result<()> {
    let synchronizer = synchronizer(Role::User);
    synchronizer.transport().reply(206, r#"{"availablePlatforms":[{"id":"p1","name":"Plat1"}],"message":"Could not load platform p2"}"#);
    synchronizer.transport().reply(200, "[]");

    block_on(synchronizer.refresh_panels(ResourceKind::Platform));

    let state = synchronizer.store().borrow();
    assert_that!(state.list(ResourceKind::Platform).panels, len(eq(1)));
    assert_that!(state.list(ResourceKind::Platform).banners, len(eq(1)));
    assert_that!(state.list(ResourceKind::Platform).banners[0].level, eq(NotificationLevel::Warning));
    assert_that!(state.list(ResourceKind::Platform).banners[0].message, eq("Could not load platform p2"));
    Ok(())
}

#[test]
fn A_failed_list_should_keep_the_panels_and_show_the_server_message() -> Result<()> {
    let synchronizer = synchronizer(Role::User);
    synchronizer.transport().reply(200, r#"[{"fedarationId":"x"}]"#);
    synchronizer.transport().reply(200, r#"[{"id":"fed1","platformIds":[]}]"#);
    synchronizer.transport().reply(500, r#"{"error":"Registry unavailable"}"#);

    block_on(synchronizer.refresh_panels(ResourceKind::Federation));
    assert_that!(banners(&synchronizer, ResourceKind::Federation), len(eq(1)));

    block_on(synchronizer.refresh_panels(ResourceKind::Federation));
    assert_that!(banners(&synchronizer, ResourceKind::Federation), empty());

    block_on(synchronizer.refresh_panels(ResourceKind::Federation));
    assert_that!(panel_titles(&synchronizer, ResourceKind::Federation), eq(vec![String::from("fed1")]));
    assert_that!(banners(&synchronizer, ResourceKind::Federation), eq(vec![
        (BannerCategory::ListFailed, String::from("Registry unavailable")),
    ]));
    Ok(())
}

#[test]
fn A_stale_list_response_should_be_discarded() -> Result<()> {
    let synchronizer = synchronizer(Role::Admin);
    let first_reply = synchronizer.transport().reply_later();
    synchronizer.transport().reply(200, r#"[{"id":"fresh","platformIds":[]}]"#);

    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let first = synchronizer.clone();
    spawner.spawn_local(async move { first.refresh_panels(ResourceKind::Federation).await })
        .expect("Failed to spawn first refresh");
    pool.run_until_stalled();

    let second = synchronizer.clone();
    spawner.spawn_local(async move { second.refresh_panels(ResourceKind::Federation).await })
        .expect("Failed to spawn second refresh");
    pool.run_until_stalled();

    first_reply.send(response(200, r#"[{"id":"stale","platformIds":[]}]"#))
        .expect("Failed to send stale reply");
    pool.run();

    assert_that!(panel_titles(&synchronizer, ResourceKind::Federation), eq(vec![String::from("fresh")]));
    assert_that!(synchronizer.store().borrow().list(ResourceKind::Federation).applied_generation(), eq(2));
    Ok(())
}

#[test]
fn Status_405_should_redirect_to_the_login_of_the_role_without_banners() -> Result<()> {
    let synchronizer = synchronizer(Role::Admin);
    synchronizer.transport().reply(405, "");
    synchronizer.transport().reply(405, "");
    synchronizer.transport().reply(405, "");

    block_on(synchronizer.refresh_panels(ResourceKind::Federation));
    block_on(synchronizer.delete_resource(federation_target("fed1")));
    block_on(synchronizer.register_resource(RegistrationForm::Federation(FederationForm::default())));

    let state = synchronizer.store().borrow();
    assert_that!(state.redirect, some(eq("/administration/admin/login")));
    assert_that!(state.list(ResourceKind::Federation).banners, empty());
    assert_that!(state.registration(ResourceKind::Federation).banners, empty());
    Ok(())
}

#[test]
fn A_successful_registration_should_close_the_modal_and_refresh_the_list() -> Result<()> {
    let synchronizer = synchronizer(Role::Admin);
    synchronizer.transport().reply(200, "");
    synchronizer.transport().reply(200, r#"[{"id":"fed1","platformIds":["p1","p2"]}]"#);
    synchronizer.open_registration(ResourceKind::Federation);

    block_on(synchronizer.register_resource(RegistrationForm::Federation(FederationForm {
        id: String::from("fed1"),
        platform1_id: String::from("p1"),
        platform2_id: String::from("p2"),
    })));

    let state = synchronizer.store().borrow();
    assert_that!(state.registration(ResourceKind::Federation).visible, eq(false));
    assert_that!(state.registration(ResourceKind::Federation).submitting, eq(false));
    assert_that!(state.list(ResourceKind::Federation).banners, len(eq(1)));
    assert_that!(state.list(ResourceKind::Federation).banners[0].category, eq(BannerCategory::RegistrationSucceeded));
    assert_that!(state.list(ResourceKind::Federation).panels, len(eq(1)));
    assert_that!(synchronizer.transport().requests.borrow()[0].body, eq(RequestBody::Json(
        String::from(r#"{"id":"fed1","platform1Id":"p1","platform2Id":"p2"}"#)
    )));
    Ok(())
}

#[test]
fn A_rejected_registration_should_only_populate_the_reported_field() -> Result<()> {
    let synchronizer = synchronizer(Role::User);
    synchronizer.transport().reply(400, r#"{"pl_reg_error_name":"required"}"#);
    synchronizer.open_registration(ResourceKind::Platform);

    block_on(synchronizer.register_resource(RegistrationForm::Platform(platform_form())));

    let state = synchronizer.store().borrow();
    let modal = state.registration(ResourceKind::Platform);
    assert_that!(modal.visible, eq(true));
    assert_that!(modal.field_errors.get(FieldKey::Name), some(eq("required")));
    assert_that!(modal.field_errors.populated(), eq(vec![(FieldKey::Name, None)]));
    assert_that!(modal.banners, len(eq(1)));
    assert_that!(state.list(ResourceKind::Platform).banners, empty());
    Ok(())
}

#[test]
fn A_registration_summary_should_come_from_the_kind_specific_key() -> Result<()> {
    let synchronizer = synchronizer(Role::User);
    synchronizer.transport().reply(400, r#"{"platformRegistrationError":"Platform id is taken"}"#);

    block_on(synchronizer.register_resource(RegistrationForm::Platform(platform_form())));

    let state = synchronizer.store().borrow();
    assert_that!(state.registration(ResourceKind::Platform).banners[0].message, eq("Platform id is taken"));
    Ok(())
}

#[test]
fn A_second_registration_while_one_is_pending_should_send_no_request() -> Result<()> {
    let synchronizer = synchronizer(Role::User);
    let reply = synchronizer.transport().reply_later();
    synchronizer.transport().reply(200, r#"{"availablePlatforms":[]}"#);
    synchronizer.transport().reply(200, "[]");

    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let first = synchronizer.clone();
    spawner.spawn_local(async move { first.register_resource(RegistrationForm::Platform(platform_form())).await })
        .expect("Failed to spawn registration");
    pool.run_until_stalled();
    assert_that!(synchronizer.store().borrow().registration(ResourceKind::Platform).submitting, eq(true));

    let second = synchronizer.clone();
    spawner.spawn_local(async move { second.register_resource(RegistrationForm::Platform(platform_form())).await })
        .expect("Failed to spawn registration");
    pool.run_until_stalled();
    assert_that!(synchronizer.transport().requests.borrow().len(), eq(1));

    reply.send(response(200, "")).expect("Failed to send reply");
    pool.run();

    assert_that!(synchronizer.transport().paths(), eq(vec![
        String::from("/administration/user/cpanel/register_platform"),
        String::from("/administration/user/cpanel/list_user_platforms"),
        String::from("/administration/user/cpanel/list_all_info_models"),
    ]));
    assert_that!(synchronizer.store().borrow().registration(ResourceKind::Platform).submitting, eq(false));
    Ok(())
}

#[test]
fn Mismatched_service_rows_should_be_reported_in_the_modal_without_a_request() -> Result<()> {
    let synchronizer = synchronizer(Role::User);
    let form = PlatformForm {
        service_urls: vec![String::from("https://p1.example.com")],
        ..platform_form()
    };

    block_on(synchronizer.register_resource(RegistrationForm::Platform(form)));

    let state = synchronizer.store().borrow();
    assert_that!(synchronizer.transport().requests.borrow().len(), eq(0));
    assert_that!(state.registration(ResourceKind::Platform).banners, len(eq(1)));
    assert_that!(state.registration(ResourceKind::Platform).submitting, eq(false));
    Ok(())
}

#[test]
fn An_upload_should_report_its_progress() -> Result<()> {
    let synchronizer = synchronizer(Role::User);
    let reply = synchronizer.transport().reply_later();
    let form = InformationModelForm {
        name: String::from("Model"),
        uri: String::from("http://model.org"),
        rdf: Some(SelectedFile { name: String::from("model.ttl"), bytes: b"@prefix".to_vec() }),
    };

    let mut pool = LocalPool::new();
    let task = synchronizer.clone();
    pool.spawner().spawn_local(async move { task.register_resource(RegistrationForm::InformationModel(form)).await })
        .expect("Failed to spawn upload");
    pool.run_until_stalled();

    assert_that!(synchronizer.store().borrow().registration(ResourceKind::InformationModel).progress, some(eq(100)));

    reply.send(response(400, r#"{"error":"Invalid","info_model_reg_error_rdf":"Not a valid RDF document"}"#))
        .expect("Failed to send reply");
    pool.run();

    let state = synchronizer.store().borrow();
    let modal = state.registration(ResourceKind::InformationModel);
    assert_that!(modal.progress, none());
    assert_that!(modal.field_errors.get(FieldKey::Rdf), some(eq("Not a valid RDF document")));
    Ok(())
}

#[test]
fn A_successful_deletion_should_close_the_modal_and_show_one_success_banner() -> Result<()> {
    let synchronizer = synchronizer(Role::Admin);
    synchronizer.transport().reply(400, "Federation is busy");
    synchronizer.transport().reply(200, "");
    synchronizer.transport().reply(200, "[]");

    block_on(synchronizer.delete_resource(federation_target("fed1")));
    synchronizer.request_deletion(federation_target("fed1"));
    block_on(synchronizer.delete_resource(federation_target("fed1")));

    let state = synchronizer.store().borrow();
    assert_that!(state.confirmation, none());
    assert_that!(banners(&synchronizer, ResourceKind::Federation), eq(vec![
        (BannerCategory::DeletionSucceeded, String::from("Federation 'fed1' was deleted.")),
    ]));
    assert_that!(synchronizer.transport().requests.borrow()[1].body, eq(RequestBody::Form(vec![
        (String::from("federationIdToDelete"), String::from("fed1")),
    ])));
    assert_that!(synchronizer.transport().paths().last().cloned(), some(eq("/administration/admin/cpanel/list_federations")));
    Ok(())
}

#[test]
fn A_failed_deletion_should_close_the_modal_and_show_one_error_banner() -> Result<()> {
    let synchronizer = synchronizer(Role::Admin);
    synchronizer.transport().reply(400, r#"{"error":"Federation fed1 not found"}"#);
    synchronizer.request_deletion(federation_target("fed1"));

    block_on(synchronizer.delete_resource(federation_target("fed1")));

    let state = synchronizer.store().borrow();
    assert_that!(state.confirmation, none());
    assert_that!(banners(&synchronizer, ResourceKind::Federation), eq(vec![
        (BannerCategory::DeletionFailed, String::from("Federation fed1 not found")),
    ]));
    assert_that!(synchronizer.transport().requests.borrow().len(), eq(1));
    Ok(())
}

#[test]
fn An_administrator_should_delete_information_models_without_a_list_refresh() -> Result<()> {
    let synchronizer = synchronizer(Role::Admin);
    synchronizer.transport().reply(200, "");

    block_on(synchronizer.delete_resource(DeleteTarget::new(
        ResourceKind::InformationModel,
        ResourceId::try_from("im1").expect("Failed to create resource id"),
    )));

    assert_that!(synchronizer.transport().paths(), eq(vec![String::from("/administration/admin/cpanel/delete_information_model")]));
    assert_that!(banners(&synchronizer, ResourceKind::InformationModel), len(eq(1)));
    Ok(())
}

#[test]
fn A_transport_failure_should_be_shown_as_a_banner() -> Result<()> {
    let synchronizer = synchronizer(Role::User);
    synchronizer.transport().fail("Network unreachable");

    block_on(synchronizer.refresh_panels(ResourceKind::InformationModel));

    let banners = banners(&synchronizer, ResourceKind::InformationModel);
    assert_that!(banners, len(eq(1)));
    assert_that!(banners[0].1, contains_substring("Network unreachable"));
    Ok(())
}

#[test]
fn A_rejected_update_should_show_field_errors_in_the_panel() -> Result<()> {
    let synchronizer = synchronizer(Role::User);
    synchronizer.transport().reply(400, r#"{"error":"Invalid Arguments","error_name":"size must be between 3 and 30","pl_reg_error_id":"ignored"}"#);

    block_on(synchronizer.update_platform(platform_form()));

    let state = synchronizer.store().borrow();
    let id = ResourceId::try_from("p1").expect("Failed to create resource id");
    let update = state.platform_update(&id).expect("Update state should exist");
    assert_that!(update.submitting, eq(false));
    assert_that!(update.field_errors.populated(), eq(vec![(FieldKey::Name, None)]));
    assert_that!(banners(&synchronizer, ResourceKind::Platform), eq(vec![
        (BannerCategory::UpdateFailed, String::from("Invalid Arguments")),
    ]));
    assert_that!(synchronizer.transport().paths(), eq(vec![String::from("/administration/user/cpanel/update_platform")]));
    Ok(())
}

#[test]
fn A_successful_update_should_refresh_the_platforms() -> Result<()> {
    let synchronizer = synchronizer(Role::User);
    synchronizer.transport().reply(200, "");
    synchronizer.transport().reply(200, r#"{"availablePlatforms":[{"id":"p1","name":"Renamed"}]}"#);
    synchronizer.transport().reply(200, "[]");

    block_on(synchronizer.update_platform(platform_form()));

    assert_that!(panel_titles(&synchronizer, ResourceKind::Platform), eq(vec![String::from("Renamed")]));
    assert_that!(banners(&synchronizer, ResourceKind::Platform)[0].0, eq(BannerCategory::UpdateSucceeded));
    Ok(())
}

fn configuration_message() -> PlatformConfigurationMessage {
    PlatformConfigurationMessage {
        platform_id: String::from("p1"),
        platform_owner_username: String::from("owner"),
        platform_owner_password: String::from("secret"),
        components_keystore_password: String::from("comp"),
        aam_keystore_name: String::from("keystore"),
        aam_keystore_password: String::from("aam"),
        aam_private_key_password: String::from("key"),
        token_validity: 100_000,
        use_built_in_rap_plugin: true,
        level: Level::L1,
        deployment_type: DeploymentType::Docker,
    }
}

#[test]
fn A_configuration_bundle_should_be_saved_under_the_announced_name() -> Result<()> {
    let synchronizer = synchronizer(Role::User);
    synchronizer.transport().replies.borrow_mut().push_back(Reply::Ready(Ok(CpanelResponse {
        status: 200,
        content_disposition: Some(String::from("attachment; filename=\"p1-configuration.zip\"")),
        body: vec![0x50, 0x4b],
    })));
    synchronizer.transport().reply(200, "zip");
    synchronizer.open_configuration(ResourceId::try_from("p1").expect("Failed to create resource id"));

    block_on(synchronizer.download_platform_config(configuration_message()));
    block_on(synchronizer.download_platform_config(configuration_message()));

    let names = synchronizer.transport().saved_files.borrow().iter()
        .map(|file| file.file_name.clone())
        .collect::<Vec<_>>();
    assert_that!(names, eq(vec![String::from("p1-configuration.zip"), String::from("configuration.zip")]));
    assert_that!(synchronizer.store().borrow().configuration.target, none());
    Ok(())
}

#[test]
fn A_failed_configuration_download_should_show_the_server_text() -> Result<()> {
    let synchronizer = synchronizer(Role::User);
    synchronizer.transport().reply(500, "Keystore could not be created");

    block_on(synchronizer.download_platform_config(configuration_message()));

    assert_that!(synchronizer.transport().saved_files.borrow().len(), eq(0));
    assert_that!(banners(&synchronizer, ResourceKind::Platform), eq(vec![
        (BannerCategory::ConfigurationFailed, String::from("Keystore could not be created")),
    ]));
    Ok(())
}

#[test]
fn Capturing_templates_repeatedly_should_not_change_the_cache() -> Result<()> {
    let synchronizer = synchronizer(Role::User);

    synchronizer.capture_templates();
    let first = synchronizer.store().borrow().templates.clone();
    synchronizer.capture_templates();

    assert_that!(synchronizer.store().borrow().templates.panel_count(), eq(3));
    assert_that!(synchronizer.store().borrow().templates, eq(first));
    Ok(())
}

#[test]
fn A_dismissed_banner_should_disappear() -> Result<()> {
    let synchronizer = synchronizer(Role::Admin);
    synchronizer.transport().reply(400, "Federation is busy");
    block_on(synchronizer.delete_resource(federation_target("fed1")));
    let id = synchronizer.store().borrow().list(ResourceKind::Federation).banners[0].id;

    synchronizer.dismiss_banner(ResourceKind::Federation, id);

    assert_that!(banners(&synchronizer, ResourceKind::Federation), empty());
    Ok(())
}

#[test]
fn A_platform_update_error_should_be_shown_as_the_banner_message() -> Result<()> {
    let synchronizer = synchronizer(Role::User);
    synchronizer.transport().reply(500, r#"{"platformUpdateError":"AAM unreachable!"}"#);

    block_on(synchronizer.update_platform(platform_form()));

    assert_that!(banners(&synchronizer, ResourceKind::Platform), eq(vec![
        (BannerCategory::UpdateFailed, String::from("AAM unreachable!")),
    ]));
    Ok(())
}

#[test]
fn A_repeated_registration_failure_should_show_only_the_latest_message_in_the_modal() -> Result<()> {
    let synchronizer = synchronizer(Role::Admin);
    synchronizer.transport().reply(400, r#"{"error":"Federation fed1 exists"}"#);
    synchronizer.transport().reply(400, r#"{"error":"Platform p3 is unknown"}"#);
    synchronizer.open_registration(ResourceKind::Federation);

    let form = FederationForm {
        id: String::from("fed1"),
        platform1_id: String::from("p1"),
        platform2_id: String::from("p3"),
    };
    block_on(synchronizer.register_resource(RegistrationForm::Federation(form.clone())));
    block_on(synchronizer.register_resource(RegistrationForm::Federation(form)));

    let state = synchronizer.store().borrow();
    let messages = state.registration(ResourceKind::Federation).banners.iter()
        .map(|banner| banner.message.clone())
        .collect::<Vec<_>>();
    assert_that!(messages, eq(vec![String::from("Platform p3 is unknown")]));
    Ok(())
}

#[test]
fn A_listed_id_with_surrounding_whitespace_should_be_deleted_verbatim() -> Result<()> {
    let synchronizer = synchronizer(Role::User);
    synchronizer.transport().reply(200, r#"[{"id":" im1","name":"Model","uri":"http://model.org"}]"#);
    synchronizer.transport().reply(200, "");
    synchronizer.transport().reply(200, "[]");

    block_on(synchronizer.refresh_panels(ResourceKind::InformationModel));
    let target = synchronizer.store().borrow().list(ResourceKind::InformationModel).panels[0].delete_target.clone();
    block_on(synchronizer.delete_resource(target));

    assert_that!(synchronizer.transport().requests.borrow()[1].body, eq(RequestBody::Form(vec![
        (String::from("infoModelIdToDelete"), String::from(" im1")),
    ])));
    assert_that!(panel_titles(&synchronizer, ResourceKind::InformationModel), empty());
    Ok(())
}

#[test]
fn Pending_edits_of_platforms_that_are_no_longer_listed_should_be_dropped() -> Result<()> {
    let synchronizer = synchronizer(Role::User);
    synchronizer.transport().reply(400, r#"{"error":"Invalid Arguments","error_name":"too short"}"#);
    synchronizer.transport().reply(200, r#"{"availablePlatforms":[]}"#);
    synchronizer.transport().reply(200, "[]");

    block_on(synchronizer.update_platform(platform_form()));
    let id = ResourceId::try_from("p1").expect("Failed to create resource id");
    assert_that!(synchronizer.store().borrow().platform_update(&id).is_some(), eq(true));

    block_on(synchronizer.refresh_panels(ResourceKind::Platform));

    assert_that!(synchronizer.store().borrow().platform_update(&id).is_none(), eq(true));
    Ok(())
}

fn platform_resources(id: &str) -> DeletePlatformResources {
    DeletePlatformResources {
        platform_id: ResourceId::try_from(id).expect("Failed to create resource id"),
    }
}

#[test]
fn Deleting_platform_resources_should_post_the_platform_id_and_show_a_success_banner() -> Result<()> {
    let synchronizer = synchronizer(Role::Admin);
    synchronizer.transport().reply(200, "");

    block_on(synchronizer.delete_platform_resources(platform_resources("p1")));

    assert_that!(synchronizer.transport().paths(), eq(vec![String::from("/administration/admin/cpanel/delete_platform_resources")]));
    assert_that!(synchronizer.transport().requests.borrow()[0].body, eq(RequestBody::Form(vec![
        (String::from("platformId"), String::from("p1")),
    ])));
    assert_that!(banners(&synchronizer, ResourceKind::Platform), eq(vec![
        (BannerCategory::ResourceCleanupSucceeded, String::from("The resources of platform 'p1' were deleted.")),
    ]));
    assert_that!(synchronizer.store().borrow().clearing_platform_resources, eq(false));
    Ok(())
}

#[test]
fn A_failed_platform_resource_deletion_should_show_the_server_text() -> Result<()> {
    let synchronizer = synchronizer(Role::Admin);
    synchronizer.transport().reply(500, "Registry unreachable!");

    block_on(synchronizer.delete_platform_resources(platform_resources("p1")));

    assert_that!(banners(&synchronizer, ResourceKind::Platform), eq(vec![
        (BannerCategory::ResourceCleanupFailed, String::from("Registry unreachable!")),
    ]));
    Ok(())
}

#[test]
fn A_platform_resource_deletion_answered_with_405_should_redirect_to_the_login() -> Result<()> {
    let synchronizer = synchronizer(Role::Admin);
    synchronizer.transport().reply(405, "");

    block_on(synchronizer.delete_platform_resources(platform_resources("p1")));

    let state = synchronizer.store().borrow();
    assert_that!(state.redirect, some(eq("/administration/admin/login")));
    assert_that!(state.list(ResourceKind::Platform).banners, empty());
    Ok(())
}

#[test]
fn A_second_platform_resource_deletion_while_one_is_pending_should_send_no_request() -> Result<()> {
    let synchronizer = synchronizer(Role::Admin);
    let reply = synchronizer.transport().reply_later();

    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let first = synchronizer.clone();
    spawner.spawn_local(async move { first.delete_platform_resources(platform_resources("p1")).await })
        .expect("Failed to spawn first deletion");
    pool.run_until_stalled();

    block_on(synchronizer.delete_platform_resources(platform_resources("p2")));
    assert_that!(synchronizer.transport().paths(), len(eq(1)));

    reply.send(response(200, "")).expect("Failed to send reply");
    pool.run();

    assert_that!(synchronizer.store().borrow().clearing_platform_resources, eq(false));
    assert_that!(banners(&synchronizer, ResourceKind::Platform), len(eq(1)));
    Ok(())
}
