use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_use::use_event_listener;
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use tracing::{error, info};

use symbiote_types::role::Role;

use crate::api::{BrowserTransport, CsrfToken};
use crate::synchronizer::state::ViewState;
use crate::synchronizer::Synchronizer;
use crate::views::{AppSynchronizer, CpanelView, FederationsView, InformationModelsView, MaintenanceView, PlatformsView};

pub const CONFIG_META: &str = "cpanel-config";
pub const CSRF_META: &str = "_csrf";
pub const CSRF_HEADER_META: &str = "_csrf_header";
pub const DEFAULT_BASE_PATH: &str = "/administration";

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAppConfig {
    role: Role,
    #[serde(default)]
    base_path: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub role: Role,
    /// Without trailing slash. Empty if the panel is served from the root.
    pub base_path: String,
}

impl<'de> Deserialize<'de> for AppConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        let raw_app_config: RawAppConfig = Deserialize::deserialize(deserializer)?;

        let base_path = raw_app_config.base_path.as_deref()
            .map(str::trim)
            .filter(|base_path| !base_path.is_empty())
            .unwrap_or(DEFAULT_BASE_PATH);

        if !base_path.starts_with('/') {
            return Err(Error::custom(format!("base path '{base_path}' must start with '/'")));
        }

        Ok(AppConfig {
            role: raw_app_config.role,
            base_path: base_path.trim_end_matches('/').to_owned(),
        })
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum AppConfigError {
    #[error("The page does not contain the control panel configuration <meta name=\"{CONFIG_META}\">.")]
    Missing,
    #[error("The control panel configuration could not be parsed:\n  {cause}")]
    Invalid { cause: String },
}

impl AppConfig {

    pub fn from_json(json: &str) -> Result<Self, AppConfigError> {
        serde_json::from_str(json)
            .map_err(|cause| AppConfigError::Invalid { cause: cause.to_string() })
    }

    pub fn load() -> Result<Self, AppConfigError> {
        let json = meta_content(CONFIG_META).ok_or(AppConfigError::Missing)?;
        Self::from_json(&json)
    }
}

fn meta_content(name: &str) -> Option<String> {
    document()
        .query_selector(&format!("meta[name='{name}']"))
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
}

/// Reads the anti-forgery header pair issued with the page.
pub fn load_csrf_token() -> Option<CsrfToken> {
    let header_name = meta_content(CSRF_HEADER_META).filter(|name| !name.trim().is_empty())?;
    let value = meta_content(CSRF_META)?;
    Some(CsrfToken { header_name, value })
}

fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    match AppConfig::load() {
        Ok(config) => {
            info!("Configuration: {config:?}");
            view! { <ControlPanel config /> }.into_any()
        }
        Err(cause) => {
            error!("{cause}");
            view! {
                <div class="container mt-5">
                    <div class="notification is-danger">
                        <strong>"The control panel could not be started."</strong>
                        <p>{ cause.to_string() }</p>
                    </div>
                </div>
            }.into_any()
        }
    }
}

#[component]
fn ControlPanel(config: AppConfig) -> impl IntoView {
    let AppConfig { role, base_path } = config;

    let state = RwSignal::new(ViewState::default());
    let synchronizer: AppSynchronizer = Synchronizer::new(BrowserTransport::new(load_csrf_token()), state, role, base_path);
    synchronizer.capture_templates();
    provide_context(synchronizer.clone());

    Effect::new(move |_| {
        if let Some(path) = state.with(|state| state.redirect.clone()) {
            info!("Navigating to '{path}'.");
            if let Err(cause) = window().location().set_href(&path) {
                error!("Could not navigate to '{path}': {cause:?}");
            }
        }
    });

    let current_view = RwSignal::new(CpanelView::from_hash(role, &current_hash()));
    let _ = use_event_listener(window(), leptos::ev::hashchange, move |_| {
        current_view.set(CpanelView::from_hash(role, &current_hash()));
    });

    Effect::new(move |_| {
        if let Some(kind) = current_view.get().resource_kind() {
            let synchronizer = synchronizer.clone();
            spawn_local(async move {
                synchronizer.refresh_panels(kind).await;
            });
        }
    });

    view! {
        <nav class="navbar is-dark mb-4">
            <div class="navbar-brand">
                <span class="navbar-item has-text-weight-bold">
                    { format!("symbIoTe Control Panel ({role})") }
                </span>
            </div>
        </nav>
        <div class="container">
            <div class="tabs is-boxed">
                <ul>
                    {
                        CpanelView::for_role(role).iter()
                            .map(|view| {
                                let view = *view;
                                view! {
                                    <li class:is-active=move || current_view.get() == view>
                                        <a href=format!("#{}", view.anchor())>{ view.title() }</a>
                                    </li>
                                }
                            })
                            .collect_view()
                    }
                </ul>
            </div>
            {
                move || match current_view.get() {
                    CpanelView::Platforms => view! { <PlatformsView /> }.into_any(),
                    CpanelView::InformationModels => view! { <InformationModelsView /> }.into_any(),
                    CpanelView::Federations => view! { <FederationsView /> }.into_any(),
                    CpanelView::Maintenance => view! { <MaintenanceView /> }.into_any(),
                }
            }
        </div>
    }
}
