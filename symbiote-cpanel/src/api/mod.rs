use async_trait::async_trait;

pub use browser::BrowserTransport;

mod browser;

pub const STATUS_PARTIAL_CONTENT: u16 = 206;
pub const STATUS_METHOD_NOT_ALLOWED: u16 = 405;

/// Sends requests to the control panel backend.
///
/// Every request is a `POST` carrying the anti-forgery header of the session.
/// The transport does not interpret status codes; a response with a non-2xx
/// status is still an `Ok`. Only failures to reach the backend are errors.
#[async_trait(?Send)]
pub trait Transport {

    /// `progress` receives the upload progress in percent, if the transport can report it.
    async fn send(&self, request: CpanelRequest, progress: Option<Box<dyn Fn(u8)>>) -> Result<CpanelResponse, ApiError>;

    /// Hands a downloaded file to the user.
    fn save_file(&self, file: &DownloadedFile) -> Result<(), ApiError>;
}

/// Anti-forgery header issued with the page.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CsrfToken {
    pub header_name: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CpanelRequest {
    pub path: String,
    pub body: RequestBody,
}

impl CpanelRequest {
    pub fn new(path: impl Into<String>, body: RequestBody) -> Self {
        Self { path: path.into(), body }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(String),
    Form(Vec<(String, String)>),
    Multipart(Vec<MultipartField>),
}

impl RequestBody {

    pub fn json<T: serde::Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_string(value).map(RequestBody::Json)
    }

    pub fn form_encoded(fields: &[(String, String)]) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MultipartField {
    pub name: String,
    pub value: MultipartValue,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MultipartValue {
    Text(String),
    File { file_name: String, bytes: Vec<u8> },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CpanelResponse {
    pub status: u16,
    pub content_disposition: Option<String>,
    pub body: Vec<u8>,
}

impl CpanelResponse {

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DownloadedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum ApiError {
    #[error("Request to '{path}' could not be sent:\n  {cause}")]
    Request { path: String, cause: String },
    #[error("Response of '{path}' could not be read:\n  {cause}")]
    Response { path: String, cause: String },
    #[error("File '{file_name}' could not be saved:\n  {cause}")]
    SaveFile { file_name: String, cause: String },
}
