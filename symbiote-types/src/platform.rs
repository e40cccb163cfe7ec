use std::fmt;

use serde::{Deserialize, Serialize};

use crate::resource::ResourceId;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformDetails {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub interworking_services: Vec<InterworkingService>,
    #[serde(default)]
    pub is_enabler: bool,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub label: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub comment: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterworkingService {
    pub url: String,
    pub information_model_id: String,
}

/// Body of a successful `list_user_platforms` call. A `message` accompanies a partial result.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUserPlatformsResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub available_platforms: Vec<PlatformDetails>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConfigurationMessage {
    pub platform_id: String,
    pub platform_owner_username: String,
    pub platform_owner_password: String,
    pub components_keystore_password: String,
    pub aam_keystore_name: String,
    pub aam_keystore_password: String,
    pub aam_private_key_password: String,
    pub token_validity: u64,
    pub use_built_in_rap_plugin: bool,
    pub level: Level,
    pub deployment_type: DeploymentType,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Level {
    #[default]
    #[serde(rename = "L1")]
    L1,
    #[serde(rename = "L2")]
    L2,
    #[serde(rename = "L3_4")]
    L34,
    #[serde(rename = "ENABLER")]
    Enabler,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeploymentType {
    #[default]
    Docker,
    Manual,
}

/// Administrative removal of every resource a platform registered. The platform itself stays.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeletePlatformResources {
    pub platform_id: ResourceId,
}

impl DeletePlatformResources {
    pub fn form_fields(&self) -> Vec<(String, String)> {
        vec![(String::from("platformId"), self.platform_id.to_string())]
    }
}

#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
#[error("Unknown {what}: '{value}'")]
pub struct UnknownOption {
    pub what: &'static str,
    pub value: String,
}

impl Level {

    pub const ALL: [Level; 4] = [Level::L1, Level::L2, Level::L34, Level::Enabler];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::L1 => "L1",
            Level::L2 => "L2",
            Level::L34 => "L3_4",
            Level::Enabler => "ENABLER",
        }
    }
}

impl TryFrom<&str> for Level {

    type Error = UnknownOption;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Level::ALL.into_iter()
            .find(|level| level.as_str() == value)
            .ok_or_else(|| UnknownOption { what: "level", value: value.to_owned() })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl DeploymentType {

    pub const ALL: [DeploymentType; 2] = [DeploymentType::Docker, DeploymentType::Manual];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentType::Docker => "DOCKER",
            DeploymentType::Manual => "MANUAL",
        }
    }
}

impl TryFrom<&str> for DeploymentType {

    type Error = UnknownOption;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        DeploymentType::ALL.into_iter()
            .find(|deployment_type| deployment_type.as_str() == value)
            .ok_or_else(|| UnknownOption { what: "deployment type", value: value.to_owned() })
    }
}

impl fmt::Display for DeploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
