use leptos::prelude::*;
use leptos::task::spawn_local;

use symbiote_cpanel_components::{BasePageContainer, ButtonColor, ButtonState, FontAwesomeIcon, SimpleButton, TextInput};
use symbiote_types::platform::DeletePlatformResources;
use symbiote_types::resource::{DeleteTarget, ResourceId, ResourceKind};

use crate::views::panels::{BannerList, DeleteConfirmation};
use crate::views::{use_synchronizer, use_view_state};

const KIND: ResourceKind = ResourceKind::InformationModel;

/// Administrative removal of information models and platform resources, which are not listed anywhere in the admin panel.
#[component]
pub fn MaintenanceView() -> impl IntoView {
    let synchronizer = use_synchronizer();
    let state = use_view_state();

    let banners = Signal::derive(move || state.with(|state| state.list(KIND).banners.clone()));
    let model_id = RwSignal::new(String::new());
    let id_error = RwSignal::new(None::<String>);

    let request_deletion = move || {
        match ResourceId::try_from(model_id.get_untracked()) {
            Ok(id) => {
                id_error.set(None);
                synchronizer.request_deletion(DeleteTarget::new(KIND, id));
            }
            Err(cause) => id_error.set(Some(cause.to_string())),
        }
    };

    view! {
        <BasePageContainer
            title="Maintenance"
            description="Delete an information model or the resources of a platform by id."
            actions=()
        >
            <BannerList kind=KIND banners />
            <div class="box">
                <TextInput label="Information Model Id" value=model_id error=id_error />
                <SimpleButton
                    text="Delete Information Model"
                    color=ButtonColor::Danger
                    state=ButtonState::Enabled
                    icon=FontAwesomeIcon::TrashCan
                    on_action=request_deletion
                />
            </div>
            <PlatformResourceCleanup />
            <DeleteConfirmation kind=KIND />
        </BasePageContainer>
    }
}

#[component]
fn PlatformResourceCleanup() -> impl IntoView {
    let synchronizer = use_synchronizer();
    let state = use_view_state();

    let banners = Signal::derive(move || state.with(|state| state.list(ResourceKind::Platform).banners.clone()));
    let platform_id = RwSignal::new(String::new());
    let button_state = Signal::derive(move || {
        let clearing = state.with(|state| state.clearing_platform_resources);
        platform_id.with(|platform_id| cleanup_button_state(clearing, platform_id))
    });

    let delete_resources = move || {
        let Ok(id) = ResourceId::try_from(platform_id.get_untracked()) else {
            return;
        };
        let synchronizer = synchronizer.clone();
        spawn_local(async move {
            synchronizer.delete_platform_resources(DeletePlatformResources { platform_id: id }).await;
        });
    };

    view! {
        <BannerList kind=ResourceKind::Platform banners />
        <div class="box">
            <TextInput label="Platform Id" value=platform_id />
            <SimpleButton
                text="Delete Platform Resources"
                color=ButtonColor::Danger
                state=button_state
                icon=FontAwesomeIcon::TrashCan
                on_action=delete_resources
            />
        </div>
    }
}

fn cleanup_button_state(clearing: bool, platform_id: &str) -> ButtonState {
    if clearing {
        ButtonState::Loading
    } else if ResourceId::try_from(platform_id).is_err() {
        ButtonState::Disabled
    } else {
        ButtonState::Enabled
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(false, "", ButtonState::Disabled)]
    #[case(false, "  ", ButtonState::Disabled)]
    #[case(false, "p1", ButtonState::Enabled)]
    #[case(true, "p1", ButtonState::Loading)]
    fn The_platform_resource_button_should_need_an_id_and_no_outstanding_request(
        #[case] clearing: bool,
        #[case] platform_id: &str,
        #[case] expected: ButtonState,
    ) {
        assert_that!(cleanup_button_state(clearing, platform_id), eq(expected));
    }
}
