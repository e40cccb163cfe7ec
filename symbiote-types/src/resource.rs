use std::fmt;

use serde::{Deserialize, Serialize};

use crate::endpoint::Endpoint;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum ResourceKind {
    Platform,
    InformationModel,
    Federation,
}

impl ResourceKind {

    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Platform,
        ResourceKind::InformationModel,
        ResourceKind::Federation,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceKind::Platform => "Platform",
            ResourceKind::InformationModel => "Information Model",
            ResourceKind::Federation => "Federation",
        }
    }

    /// Short lowercase name used in element ids and view anchors.
    pub fn slug(&self) -> &'static str {
        match self {
            ResourceKind::Platform => "platform",
            ResourceKind::InformationModel => "info-model",
            ResourceKind::Federation => "federation",
        }
    }

    pub fn list_endpoint(&self) -> Endpoint {
        match self {
            ResourceKind::Platform => Endpoint::ListUserPlatforms,
            ResourceKind::InformationModel => Endpoint::ListUserInformationModels,
            ResourceKind::Federation => Endpoint::ListFederations,
        }
    }

    pub fn create_endpoint(&self) -> Endpoint {
        match self {
            ResourceKind::Platform => Endpoint::RegisterPlatform,
            ResourceKind::InformationModel => Endpoint::RegisterInformationModel,
            ResourceKind::Federation => Endpoint::CreateFederation,
        }
    }

    pub fn delete_endpoint(&self) -> Endpoint {
        match self {
            ResourceKind::Platform => Endpoint::DeletePlatform,
            ResourceKind::InformationModel => Endpoint::DeleteInformationModel,
            ResourceKind::Federation => Endpoint::DeleteFederation,
        }
    }

    /// Name of the form parameter carrying the id in a delete request.
    pub fn delete_parameter(&self) -> &'static str {
        match self {
            ResourceKind::Platform => "platformIdToDelete",
            ResourceKind::InformationModel => "infoModelIdToDelete",
            ResourceKind::Federation => "federationIdToDelete",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {

    /// Id of a record the backend listed. Kept as sent, only blank ids are rejected.
    pub fn from_record(value: &str) -> Result<Self, IllegalResourceId> {
        if value.trim().is_empty() {
            Err(IllegalResourceId { value: value.to_owned() })
        }
        else {
            Ok(Self(value.to_owned()))
        }
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
#[error("Illegal resource id: '{value}'")]
pub struct IllegalResourceId {
    pub value: String,
}

impl TryFrom<String> for ResourceId {

    type Error = IllegalResourceId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Err(IllegalResourceId { value })
        }
        else {
            Ok(Self(trimmed.to_owned()))
        }
    }
}

impl TryFrom<&str> for ResourceId {

    type Error = IllegalResourceId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ResourceId::try_from(value.to_owned())
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The record a delete confirmation refers to.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DeleteTarget {
    pub kind: ResourceKind,
    pub id: ResourceId,
}

impl DeleteTarget {

    pub fn new(kind: ResourceKind, id: ResourceId) -> Self {
        Self { kind, id }
    }

    pub fn form_fields(&self) -> Vec<(String, String)> {
        vec![(String::from(self.kind.delete_parameter()), self.id.to_string())]
    }
}

/// Element id of a per-record delete confirmation modal, e.g. `del-federation-modal-fed1`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ModalId(String);

#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
pub enum IllegalModalId {
    #[error("Id '{id}' cannot be part of a modal id, because it contains the prefix '{prefix}'.")]
    ContainsPrefix { id: String, prefix: String },
    #[error("Id '{id}' cannot be part of a modal id, because it contains whitespace.")]
    ContainsWhitespace { id: String },
}

impl ModalId {

    pub fn delete_confirmation_prefix(kind: ResourceKind) -> String {
        format!("del-{}-modal-", kind.slug())
    }

    /// Surrounding whitespace of a listed id is left out of the element id.
    pub fn delete_confirmation(kind: ResourceKind, id: &ResourceId) -> Result<Self, IllegalModalId> {
        let prefix = Self::delete_confirmation_prefix(kind);
        let id = id.value().trim();

        if id.contains(&prefix) {
            return Err(IllegalModalId::ContainsPrefix { id: id.to_owned(), prefix });
        }
        if id.chars().any(char::is_whitespace) {
            return Err(IllegalModalId::ContainsWhitespace { id: id.to_owned() });
        }

        Ok(Self(format!("{prefix}{id}")))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
