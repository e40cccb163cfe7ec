use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use leptos::prelude::*;
use symbiote_cpanel_components::NotificationLevel;
use symbiote_types::error::FieldErrors;
use symbiote_types::information_model::InformationModel;
use symbiote_types::resource::{DeleteTarget, ResourceId, ResourceKind};

use crate::synchronizer::templates::{BannerCategory, BannerTemplate, Operation, Panel, TemplateCache};

pub type BannerId = u64;

#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub id: BannerId,
    pub category: BannerCategory,
    pub level: NotificationLevel,
    pub heading: String,
    pub message: String,
}

/// The rendered panels of one kind plus the banners shown above them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelList {
    pub panels: Vec<Panel>,
    pub banners: Vec<Banner>,
    pub loading: bool,
    issued_generation: u64,
    applied_generation: u64,
}

impl PanelList {

    pub fn issue_generation(&mut self) -> u64 {
        self.issued_generation += 1;
        self.loading = true;
        self.issued_generation
    }

    /// Only the response of the latest issued request may replace the panels.
    pub fn is_latest(&self, generation: u64) -> bool {
        generation == self.issued_generation
    }

    pub fn applied_generation(&self) -> u64 {
        self.applied_generation
    }

    pub fn replace_panels(&mut self, generation: u64, panels: Vec<Panel>) {
        self.panels = panels;
        self.mark_applied(generation);
    }

    pub fn mark_applied(&mut self, generation: u64) {
        self.applied_generation = generation;
        self.loading = false;
    }
}

/// State of the registration modal of one kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationModal {
    pub visible: bool,
    pub submitting: bool,
    pub progress: Option<u8>,
    pub banners: Vec<Banner>,
    pub field_errors: FieldErrors,
}

impl RegistrationModal {

    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Closing keeps an outstanding submission, so it cannot be sent a second time.
    pub fn close(&mut self) {
        self.visible = false;
        self.progress = None;
        self.banners.clear();
        self.field_errors = FieldErrors::default();
    }

    /// Returns `false` if a submission is already outstanding.
    pub fn begin_submission(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.progress = None;
        true
    }

    pub fn end_submission(&mut self) {
        self.submitting = false;
        self.progress = None;
    }
}

/// In-place edit form inside a platform panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlatformUpdate {
    pub submitting: bool,
    pub field_errors: FieldErrors,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigurationModal {
    pub target: Option<ResourceId>,
    pub submitting: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerKind<T> {
    platform: T,
    information_model: T,
    federation: T,
}

impl<T> PerKind<T> {

    pub fn get(&self, kind: ResourceKind) -> &T {
        match kind {
            ResourceKind::Platform => &self.platform,
            ResourceKind::InformationModel => &self.information_model,
            ResourceKind::Federation => &self.federation,
        }
    }

    pub fn get_mut(&mut self, kind: ResourceKind) -> &mut T {
        match kind {
            ResourceKind::Platform => &mut self.platform,
            ResourceKind::InformationModel => &mut self.information_model,
            ResourceKind::Federation => &mut self.federation,
        }
    }
}

/// Everything one control panel view shows. Lives as long as the view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub templates: TemplateCache,
    pub lists: PerKind<PanelList>,
    pub registrations: PerKind<RegistrationModal>,
    pub confirmation: Option<DeleteTarget>,
    pub information_model_choices: Vec<InformationModel>,
    pub platform_updates: BTreeMap<ResourceId, PlatformUpdate>,
    pub configuration: ConfigurationModal,
    pub clearing_platform_resources: bool,
    pub redirect: Option<String>,
    next_banner_id: BannerId,
}

impl ViewState {

    pub fn list(&self, kind: ResourceKind) -> &PanelList {
        self.lists.get(kind)
    }

    pub fn list_mut(&mut self, kind: ResourceKind) -> &mut PanelList {
        self.lists.get_mut(kind)
    }

    pub fn registration(&self, kind: ResourceKind) -> &RegistrationModal {
        self.registrations.get(kind)
    }

    pub fn registration_mut(&mut self, kind: ResourceKind) -> &mut RegistrationModal {
        self.registrations.get_mut(kind)
    }

    pub fn platform_update(&self, id: &ResourceId) -> Option<&PlatformUpdate> {
        self.platform_updates.get(id)
    }

    fn create_banner(&mut self, kind: ResourceKind, category: BannerCategory, message: String) -> Banner {
        let BannerTemplate { heading, level } = self.templates.banner(kind, category)
            .cloned()
            .unwrap_or_else(|| category.template(kind));

        self.next_banner_id += 1;
        Banner {
            id: self.next_banner_id,
            category,
            level,
            heading,
            message,
        }
    }

    /// Prepends a banner above the panel list. A success first clears the banners of its operation.
    pub fn show_list_banner(&mut self, kind: ResourceKind, category: BannerCategory, message: impl Into<String>) {
        let banner = self.create_banner(kind, category, message.into());
        let banners = &mut self.list_mut(kind).banners;
        if banner.level == NotificationLevel::Success {
            clear_operation(banners, category.operation());
        }
        banners.insert(0, banner);
    }

    pub fn show_registration_banner(&mut self, kind: ResourceKind, category: BannerCategory, message: impl Into<String>) {
        let banner = self.create_banner(kind, category, message.into());
        let banners = &mut self.registration_mut(kind).banners;
        banners.retain(|banner| banner.level == NotificationLevel::Success);
        banners.insert(0, banner);
    }

    /// Drops pending edits of platforms which are no longer listed.
    pub fn retain_listed_platform_updates(&mut self) {
        let listed = self.list(ResourceKind::Platform).panels.iter()
            .map(|panel| panel.id.clone())
            .collect::<BTreeSet<_>>();
        self.platform_updates.retain(|id, _| listed.contains(id));
    }

    pub fn clear_list_failures(&mut self, kind: ResourceKind, operation: Operation) {
        self.list_mut(kind).banners
            .retain(|banner| banner.category.operation() != operation || banner.level == NotificationLevel::Success);
    }

    pub fn dismiss_banner(&mut self, kind: ResourceKind, id: BannerId) {
        self.list_mut(kind).banners.retain(|banner| banner.id != id);
        self.registration_mut(kind).banners.retain(|banner| banner.id != id);
    }
}

fn clear_operation(banners: &mut Vec<Banner>, operation: Operation) {
    banners.retain(|banner| banner.category.operation() != operation);
}

/// Access to the view state, so that the synchronizer does not depend on the reactive runtime.
/// `None` means the view is gone and the result of an operation is dropped.
pub trait ViewStore: Clone + 'static {
    fn read<R>(&self, reader: impl FnOnce(&ViewState) -> R) -> Option<R>;
    fn write<R>(&self, writer: impl FnOnce(&mut ViewState) -> R) -> Option<R>;
}

impl ViewStore for RwSignal<ViewState> {

    fn read<R>(&self, reader: impl FnOnce(&ViewState) -> R) -> Option<R> {
        self.try_with_untracked(reader)
    }

    fn write<R>(&self, writer: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        self.try_update(writer)
    }
}

impl ViewStore for Rc<RefCell<ViewState>> {

    fn read<R>(&self, reader: impl FnOnce(&ViewState) -> R) -> Option<R> {
        Some(reader(&self.borrow()))
    }

    fn write<R>(&self, writer: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        Some(writer(&mut self.borrow_mut()))
    }
}
