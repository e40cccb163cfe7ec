use leptos::prelude::*;

use symbiote_types::resource::ResourceKind;
use symbiote_types::role::Role;

use crate::api::BrowserTransport;
use crate::synchronizer::state::ViewState;
use crate::synchronizer::Synchronizer;

pub use federations::FederationsView;
pub use information_models::InformationModelsView;
pub use maintenance::MaintenanceView;
pub use platforms::PlatformsView;

mod federations;
mod information_models;
mod maintenance;
mod panels;
mod platforms;

pub type AppSynchronizer = Synchronizer<BrowserTransport, RwSignal<ViewState>>;

pub fn use_synchronizer() -> AppSynchronizer {
    use_context::<AppSynchronizer>()
        .expect("The synchronizer should be provided in the context.")
}

pub fn use_view_state() -> RwSignal<ViewState> {
    *use_synchronizer().store()
}

/// The views of the control panel, selected by the URL fragment.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CpanelView {
    Platforms,
    InformationModels,
    Federations,
    Maintenance,
}

impl CpanelView {

    pub fn for_role(role: Role) -> &'static [CpanelView] {
        match role {
            Role::User => &[CpanelView::Platforms, CpanelView::InformationModels, CpanelView::Federations],
            Role::Admin => &[CpanelView::Federations, CpanelView::Maintenance],
        }
    }

    pub fn anchor(&self) -> &'static str {
        match self {
            CpanelView::Platforms => "platforms",
            CpanelView::InformationModels => "information-models",
            CpanelView::Federations => "federations",
            CpanelView::Maintenance => "maintenance",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CpanelView::Platforms => "Platforms",
            CpanelView::InformationModels => "Information Models",
            CpanelView::Federations => "Federations",
            CpanelView::Maintenance => "Maintenance",
        }
    }

    /// Kind whose list is refreshed when the view is shown.
    pub fn resource_kind(&self) -> Option<ResourceKind> {
        match self {
            CpanelView::Platforms => Some(ResourceKind::Platform),
            CpanelView::InformationModels => Some(ResourceKind::InformationModel),
            CpanelView::Federations => Some(ResourceKind::Federation),
            CpanelView::Maintenance => None,
        }
    }

    /// Unknown fragments and views of another role fall back to the first view of the role.
    pub fn from_hash(role: Role, hash: &str) -> CpanelView {
        let anchor = hash.trim_start_matches('#');
        let views = CpanelView::for_role(role);
        views.iter()
            .find(|view| view.anchor() == anchor)
            .copied()
            .unwrap_or(views[0])
    }
}
