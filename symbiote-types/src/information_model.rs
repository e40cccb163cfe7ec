use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InformationModel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub rdf_format: Option<String>,
}

/// Multipart payload of an information model registration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InformationModelUpload {
    pub name: String,
    pub uri: String,
    pub rdf_file_name: String,
    pub rdf: Vec<u8>,
}

impl InformationModelUpload {
    pub const NAME_FIELD: &'static str = "info-model-name";
    pub const URI_FIELD: &'static str = "info-model-uri";
    pub const RDF_FIELD: &'static str = "info-model-rdf";
}
