use symbiote_types::federation::CreateFederationRequest;
use symbiote_types::information_model::InformationModelUpload;
use symbiote_types::platform::{Comment, InterworkingService, Label, PlatformDetails};
use symbiote_types::resource::ResourceKind;

use crate::api::{MultipartField, MultipartValue, RequestBody};

/// Values of the platform registration and update forms. Rows are kept in input order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PlatformForm {
    pub id: String,
    pub name: String,
    pub labels: Vec<String>,
    pub comments: Vec<String>,
    pub service_urls: Vec<String>,
    pub service_models: Vec<String>,
    pub is_enabler: bool,
}

impl PlatformForm {

    pub fn into_details(self) -> Result<PlatformDetails, FormError> {
        if self.service_urls.len() != self.service_models.len() {
            return Err(FormError::MismatchedServiceRows {
                urls: self.service_urls.len(),
                models: self.service_models.len(),
            });
        }

        let interworking_services = self.service_urls.into_iter()
            .zip(self.service_models)
            .map(|(url, information_model_id)| InterworkingService { url, information_model_id })
            .collect();

        Ok(PlatformDetails {
            id: self.id,
            name: self.name,
            labels: self.labels.into_iter().map(|label| Label { label }).collect(),
            comments: self.comments.into_iter().map(|comment| Comment { comment }).collect(),
            interworking_services,
            is_enabler: self.is_enabler,
        })
    }
}

impl From<&PlatformDetails> for PlatformForm {
    fn from(platform: &PlatformDetails) -> Self {
        let (service_urls, service_models) = platform.interworking_services.iter()
            .map(|service| (service.url.clone(), service.information_model_id.clone()))
            .unzip();

        Self {
            id: platform.id.clone(),
            name: platform.name.clone(),
            labels: platform.labels.iter().map(|label| label.label.clone()).collect(),
            comments: platform.comments.iter().map(|comment| comment.comment.clone()).collect(),
            service_urls,
            service_models,
            is_enabler: platform.is_enabler,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InformationModelForm {
    pub name: String,
    pub uri: String,
    pub rdf: Option<SelectedFile>,
}

impl InformationModelForm {

    pub fn into_upload(self) -> Result<InformationModelUpload, FormError> {
        let rdf = self.rdf.ok_or(FormError::MissingFile)?;
        Ok(InformationModelUpload {
            name: self.name,
            uri: self.uri,
            rdf_file_name: rdf.name,
            rdf: rdf.bytes,
        })
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FederationForm {
    pub id: String,
    pub platform1_id: String,
    pub platform2_id: String,
}

impl From<FederationForm> for CreateFederationRequest {
    fn from(form: FederationForm) -> Self {
        Self {
            id: form.id,
            platform1_id: form.platform1_id,
            platform2_id: form.platform2_id,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistrationForm {
    Platform(PlatformForm),
    InformationModel(InformationModelForm),
    Federation(FederationForm),
}

impl RegistrationForm {

    pub fn kind(&self) -> ResourceKind {
        match self {
            RegistrationForm::Platform(_) => ResourceKind::Platform,
            RegistrationForm::InformationModel(_) => ResourceKind::InformationModel,
            RegistrationForm::Federation(_) => ResourceKind::Federation,
        }
    }

    pub fn into_body(self) -> Result<RequestBody, FormError> {
        match self {
            RegistrationForm::Platform(form) => {
                let details = form.into_details()?;
                Ok(RequestBody::json(&details)?)
            }
            RegistrationForm::InformationModel(form) => {
                let upload = form.into_upload()?;
                Ok(RequestBody::Multipart(vec![
                    MultipartField {
                        name: String::from(InformationModelUpload::NAME_FIELD),
                        value: MultipartValue::Text(upload.name),
                    },
                    MultipartField {
                        name: String::from(InformationModelUpload::URI_FIELD),
                        value: MultipartValue::Text(upload.uri),
                    },
                    MultipartField {
                        name: String::from(InformationModelUpload::RDF_FIELD),
                        value: MultipartValue::File { file_name: upload.rdf_file_name, bytes: upload.rdf },
                    },
                ]))
            }
            RegistrationForm::Federation(form) => {
                let request = CreateFederationRequest::from(form);
                Ok(RequestBody::json(&request)?)
            }
        }
    }
}

/// A form which cannot be turned into a request. Nothing is sent in that case.
#[derive(thiserror::Error, Debug)]
pub enum FormError {
    #[error("Every interworking service needs a URL and an information model, but {urls} URLs and {models} information models were given.")]
    MismatchedServiceRows { urls: usize, models: usize },
    #[error("Please select an RDF file.")]
    MissingFile,
    #[error("The form could not be serialized:\n  {0}")]
    Serialization(#[from] serde_json::Error),
}
