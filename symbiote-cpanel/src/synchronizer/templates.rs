use std::collections::BTreeMap;

use symbiote_cpanel_components::NotificationLevel;
use symbiote_types::federation::Federation;
use symbiote_types::information_model::InformationModel;
use symbiote_types::platform::{InterworkingService, PlatformDetails};
use symbiote_types::resource::{DeleteTarget, IllegalModalId, IllegalResourceId, ModalId, ResourceId, ResourceKind};

/// Where a section of a panel takes its content from.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SlotSource {
    Id,
    Name,
    Uri,
    Owner,
    RdfFormat,
    Labels,
    Comments,
    InterworkingServices,
    Enabler,
    FederatedPlatforms,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SectionSlot {
    pub label: &'static str,
    pub source: SlotSource,
    pub editable: bool,
}

impl SectionSlot {

    fn readonly(label: &'static str, source: SlotSource) -> Self {
        Self { label, source, editable: false }
    }

    fn editable(label: &'static str, source: SlotSource) -> Self {
        Self { label, source, editable: true }
    }
}

/// Describes how the records of one kind are laid out in their panel.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PanelTemplate {
    pub kind: ResourceKind,
    pub slots: Vec<SectionSlot>,
}

impl PanelTemplate {

    pub fn capture(kind: ResourceKind) -> Self {
        let slots = match kind {
            ResourceKind::Platform => vec![
                SectionSlot::readonly("Platform Id", SlotSource::Id),
                SectionSlot::editable("Name", SlotSource::Name),
                SectionSlot::editable("Labels", SlotSource::Labels),
                SectionSlot::editable("Comments", SlotSource::Comments),
                SectionSlot::editable("Interworking Services", SlotSource::InterworkingServices),
                SectionSlot::editable("Enabler", SlotSource::Enabler),
            ],
            ResourceKind::InformationModel => vec![
                SectionSlot::readonly("Information Model Id", SlotSource::Id),
                SectionSlot::readonly("Name", SlotSource::Name),
                SectionSlot::readonly("URI", SlotSource::Uri),
                SectionSlot::readonly("Owner", SlotSource::Owner),
                SectionSlot::readonly("RDF Format", SlotSource::RdfFormat),
            ],
            ResourceKind::Federation => vec![
                SectionSlot::readonly("Federation Id", SlotSource::Id),
                SectionSlot::readonly("Federated Platforms", SlotSource::FederatedPlatforms),
            ],
        };
        Self { kind, slots }
    }
}

/// Heading and severity of the banners of one category.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BannerTemplate {
    pub heading: String,
    pub level: NotificationLevel,
}

/// The operation a banner reports on. A success clears the earlier banners of its operation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Operation {
    List,
    Registration,
    Update,
    Deletion,
    Configuration,
    ResourceCleanup,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum BannerCategory {
    ListFailed,
    ListIncomplete,
    RegistrationSucceeded,
    RegistrationFailed,
    UpdateSucceeded,
    UpdateFailed,
    DeletionSucceeded,
    DeletionFailed,
    ConfigurationFailed,
    ResourceCleanupSucceeded,
    ResourceCleanupFailed,
}

impl BannerCategory {

    pub const ALL: [BannerCategory; 11] = [
        BannerCategory::ListFailed,
        BannerCategory::ListIncomplete,
        BannerCategory::RegistrationSucceeded,
        BannerCategory::RegistrationFailed,
        BannerCategory::UpdateSucceeded,
        BannerCategory::UpdateFailed,
        BannerCategory::DeletionSucceeded,
        BannerCategory::DeletionFailed,
        BannerCategory::ConfigurationFailed,
        BannerCategory::ResourceCleanupSucceeded,
        BannerCategory::ResourceCleanupFailed,
    ];

    pub fn operation(&self) -> Operation {
        match self {
            BannerCategory::ListFailed | BannerCategory::ListIncomplete => Operation::List,
            BannerCategory::RegistrationSucceeded | BannerCategory::RegistrationFailed => Operation::Registration,
            BannerCategory::UpdateSucceeded | BannerCategory::UpdateFailed => Operation::Update,
            BannerCategory::DeletionSucceeded | BannerCategory::DeletionFailed => Operation::Deletion,
            BannerCategory::ConfigurationFailed => Operation::Configuration,
            BannerCategory::ResourceCleanupSucceeded | BannerCategory::ResourceCleanupFailed => Operation::ResourceCleanup,
        }
    }

    pub fn template(&self, kind: ResourceKind) -> BannerTemplate {
        let name = kind.display_name();
        let (heading, level) = match self {
            BannerCategory::ListFailed => (format!("Could not load {name}s"), NotificationLevel::Error),
            BannerCategory::ListIncomplete => (format!("Some {name}s could not be loaded"), NotificationLevel::Warning),
            BannerCategory::RegistrationSucceeded => (format!("{name} registered"), NotificationLevel::Success),
            BannerCategory::RegistrationFailed => (format!("{name} registration failed"), NotificationLevel::Error),
            BannerCategory::UpdateSucceeded => (format!("{name} updated"), NotificationLevel::Success),
            BannerCategory::UpdateFailed => (format!("{name} update failed"), NotificationLevel::Error),
            BannerCategory::DeletionSucceeded => (format!("{name} deleted"), NotificationLevel::Success),
            BannerCategory::DeletionFailed => (format!("{name} deletion failed"), NotificationLevel::Error),
            BannerCategory::ConfigurationFailed => (String::from("Configuration download failed"), NotificationLevel::Error),
            BannerCategory::ResourceCleanupSucceeded => (format!("{name} resources deleted"), NotificationLevel::Success),
            BannerCategory::ResourceCleanupFailed => (format!("{name} resources could not be deleted"), NotificationLevel::Error),
        };
        BannerTemplate { heading, level }
    }
}

/// Templates captured on first use of a view. Once set, an entry is never replaced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TemplateCache {
    panels: BTreeMap<ResourceKind, PanelTemplate>,
    banners: BTreeMap<(ResourceKind, BannerCategory), BannerTemplate>,
}

impl TemplateCache {

    pub fn capture(&mut self, kinds: &[ResourceKind]) {
        for kind in kinds {
            self.panels.entry(*kind)
                .or_insert_with(|| PanelTemplate::capture(*kind));

            for category in BannerCategory::ALL {
                self.banners.entry((*kind, category))
                    .or_insert_with(|| category.template(*kind));
            }
        }
    }

    pub fn panel(&self, kind: ResourceKind) -> Option<&PanelTemplate> {
        self.panels.get(&kind)
    }

    pub fn banner(&self, kind: ResourceKind, category: BannerCategory) -> Option<&BannerTemplate> {
        self.banners.get(&(kind, category))
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }
}

/// A record as returned by one of the list endpoints.
#[derive(Clone, Debug, PartialEq)]
pub enum ResourceRecord {
    Platform(PlatformDetails),
    InformationModel(InformationModel),
    Federation(Federation),
}

impl ResourceRecord {

    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceRecord::Platform(_) => ResourceKind::Platform,
            ResourceRecord::InformationModel(_) => ResourceKind::InformationModel,
            ResourceRecord::Federation(_) => ResourceKind::Federation,
        }
    }

    pub fn raw_id(&self) -> &str {
        match self {
            ResourceRecord::Platform(platform) => &platform.id,
            ResourceRecord::InformationModel(model) => &model.id,
            ResourceRecord::Federation(federation) => &federation.federation_id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ResourceRecord::Platform(platform) => &platform.name,
            ResourceRecord::InformationModel(model) => &model.name,
            ResourceRecord::Federation(federation) => &federation.federation_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SectionContent {
    Text(String),
    Rows(Vec<String>),
    Services(Vec<InterworkingService>),
    Flag(bool),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub label: &'static str,
    pub editable: bool,
    pub content: SectionContent,
}

/// A record ready to be shown in the panel list.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub id: ResourceId,
    pub title: String,
    pub modal_id: ModalId,
    pub delete_target: DeleteTarget,
    pub confirmation_text: String,
    pub sections: Vec<Section>,
    pub record: ResourceRecord,
}

impl Panel {
    pub fn kind(&self) -> ResourceKind {
        self.delete_target.kind
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum RenderError {
    #[error("A {record} cannot be rendered with the template of a {template}.")]
    KindMismatch { template: ResourceKind, record: ResourceKind },
    #[error("No panel template was captured for {kind}s.")]
    MissingTemplate { kind: ResourceKind },
    #[error("A {kind} has no content for the section '{label}'.")]
    UnsupportedSlot { kind: ResourceKind, label: &'static str },
    #[error("A {kind} record without id was received.")]
    IllegalId { kind: ResourceKind, #[source] source: IllegalResourceId },
    #[error(transparent)]
    IllegalModalId(#[from] IllegalModalId),
}

pub fn render_panel(template: &PanelTemplate, record: &ResourceRecord) -> Result<Panel, RenderError> {
    let kind = record.kind();
    if template.kind != kind {
        return Err(RenderError::KindMismatch { template: template.kind, record: kind });
    }

    let id = ResourceId::from_record(record.raw_id())
        .map_err(|source| RenderError::IllegalId { kind, source })?;
    let modal_id = ModalId::delete_confirmation(kind, &id)?;
    let title = record.title().to_owned();

    let sections = template.slots.iter()
        .map(|slot| {
            let content = section_content(slot.source, record)
                .ok_or(RenderError::UnsupportedSlot { kind, label: slot.label })?;
            Ok(Section { label: slot.label, editable: slot.editable, content })
        })
        .collect::<Result<Vec<_>, RenderError>>()?;

    Ok(Panel {
        confirmation_text: format!("Are you sure you want to delete the {} '{title}'?", kind.display_name().to_lowercase()),
        delete_target: DeleteTarget::new(kind, id.clone()),
        id,
        title,
        modal_id,
        sections,
        record: record.clone(),
    })
}

fn section_content(source: SlotSource, record: &ResourceRecord) -> Option<SectionContent> {
    let content = match (source, record) {
        (SlotSource::Id, record) => SectionContent::Text(record.raw_id().to_owned()),
        (SlotSource::Name, ResourceRecord::Platform(platform)) => SectionContent::Text(platform.name.clone()),
        (SlotSource::Name, ResourceRecord::InformationModel(model)) => SectionContent::Text(model.name.clone()),
        (SlotSource::Uri, ResourceRecord::InformationModel(model)) => SectionContent::Text(model.uri.clone()),
        (SlotSource::Owner, ResourceRecord::InformationModel(model)) => SectionContent::Text(model.owner.clone().unwrap_or_default()),
        (SlotSource::RdfFormat, ResourceRecord::InformationModel(model)) => SectionContent::Text(model.rdf_format.clone().unwrap_or_default()),
        (SlotSource::Labels, ResourceRecord::Platform(platform)) => {
            SectionContent::Rows(platform.labels.iter().map(|label| label.label.clone()).collect())
        }
        (SlotSource::Comments, ResourceRecord::Platform(platform)) => {
            SectionContent::Rows(platform.comments.iter().map(|comment| comment.comment.clone()).collect())
        }
        (SlotSource::InterworkingServices, ResourceRecord::Platform(platform)) => {
            SectionContent::Services(platform.interworking_services.clone())
        }
        (SlotSource::Enabler, ResourceRecord::Platform(platform)) => SectionContent::Flag(platform.is_enabler),
        (SlotSource::FederatedPlatforms, ResourceRecord::Federation(federation)) => {
            SectionContent::Rows(federation.platform_ids.clone())
        }
        _ => return None,
    };
    Some(content)
}
