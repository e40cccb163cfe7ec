use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use gloo_net::http::Request;
use js_sys::{Array, Uint8Array};
use leptos::prelude::document;
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, FormData, HtmlAnchorElement, ProgressEvent, XmlHttpRequest, XmlHttpRequestResponseType};

use crate::api::{ApiError, CpanelRequest, CpanelResponse, CsrfToken, DownloadedFile, MultipartField, MultipartValue, RequestBody, Transport};

const CONTENT_DISPOSITION: &str = "Content-Disposition";

/// Transport used in the browser. The session cookie is attached by the browser itself.
#[derive(Clone, Debug)]
pub struct BrowserTransport {
    csrf: Option<CsrfToken>,
}

impl BrowserTransport {

    pub fn new(csrf: Option<CsrfToken>) -> Self {
        if csrf.is_none() {
            warn!("No anti-forgery token found in the page. Requests will be sent without it.");
        }
        Self { csrf }
    }

    async fn send_multipart(
        &self,
        path: String,
        fields: Vec<MultipartField>,
        progress: Option<Box<dyn Fn(u8)>>,
    ) -> Result<CpanelResponse, ApiError> {
        let request_error = |cause: JsValue| ApiError::Request { path: path.clone(), cause: format!("{cause:?}") };

        let form = FormData::new().map_err(request_error)?;
        for field in fields {
            match field.value {
                MultipartValue::Text(text) => form.append_with_str(&field.name, &text),
                MultipartValue::File { file_name, bytes } => {
                    let blob = bytes_to_blob(&bytes).map_err(request_error)?;
                    form.append_with_blob_and_filename(&field.name, &blob, &file_name)
                }
            }.map_err(request_error)?;
        }

        let xhr = XmlHttpRequest::new().map_err(request_error)?;
        xhr.open("POST", &path).map_err(request_error)?;
        xhr.set_response_type(XmlHttpRequestResponseType::Arraybuffer);
        if let Some(csrf) = &self.csrf {
            xhr.set_request_header(&csrf.header_name, &csrf.value).map_err(request_error)?;
        }

        let (finished, on_finished) = oneshot::channel::<()>();
        let finished = Rc::new(RefCell::new(Some(finished)));
        let on_loadend = Closure::<dyn FnMut()>::new(move || {
            if let Some(finished) = finished.borrow_mut().take() {
                let _ = finished.send(());
            }
        });
        xhr.set_onloadend(Some(on_loadend.as_ref().unchecked_ref()));

        let on_progress = progress.map(|progress| {
            Closure::<dyn FnMut(ProgressEvent)>::new(move |event: ProgressEvent| {
                if event.length_computable() && event.total() > 0.0 {
                    let percent = (event.loaded() / event.total() * 100.0).round().clamp(0.0, 100.0);
                    progress(percent as u8);
                }
            })
        });
        if let Some(on_progress) = &on_progress {
            xhr.upload().map_err(request_error)?
                .set_onprogress(Some(on_progress.as_ref().unchecked_ref()));
        }

        xhr.send_with_opt_form_data(Some(&form)).map_err(request_error)?;

        on_finished.await
            .map_err(|_| ApiError::Response { path: path.clone(), cause: String::from("Upload was cancelled.") })?;
        drop(on_loadend);
        drop(on_progress);

        let response_error = |cause: JsValue| ApiError::Response { path: path.clone(), cause: format!("{cause:?}") };
        let status = xhr.status().map_err(response_error)?;
        if status == 0 {
            return Err(ApiError::Request { path: path.clone(), cause: String::from("The backend could not be reached.") });
        }
        let content_disposition = xhr.get_response_header(CONTENT_DISPOSITION).ok().flatten();
        let body = xhr.response()
            .map(|buffer| Uint8Array::new(&buffer).to_vec())
            .map_err(response_error)?;

        Ok(CpanelResponse { status, content_disposition, body })
    }
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {

    async fn send(&self, request: CpanelRequest, progress: Option<Box<dyn Fn(u8)>>) -> Result<CpanelResponse, ApiError> {
        let CpanelRequest { path, body } = request;
        debug!("Sending request to '{path}'.");

        let builder = Request::post(&path);
        let builder = match &self.csrf {
            Some(csrf) => builder.header(&csrf.header_name, &csrf.value),
            None => builder,
        };

        let request = match body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(json) => builder
                .header("Content-Type", "application/json")
                .body(json),
            RequestBody::Form(fields) => builder
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(RequestBody::form_encoded(&fields)),
            RequestBody::Multipart(fields) => return self.send_multipart(path, fields, progress).await,
        }.map_err(|cause| ApiError::Request { path: path.clone(), cause: cause.to_string() })?;

        let response = request.send().await
            .map_err(|cause| ApiError::Request { path: path.clone(), cause: cause.to_string() })?;

        let status = response.status();
        let content_disposition = response.headers().get(CONTENT_DISPOSITION);
        let body = response.binary().await
            .map_err(|cause| ApiError::Response { path: path.clone(), cause: cause.to_string() })?;

        debug!("Received status {status} from '{path}'.");
        Ok(CpanelResponse { status, content_disposition, body })
    }

    fn save_file(&self, file: &DownloadedFile) -> Result<(), ApiError> {
        let error = |cause: JsValue| ApiError::SaveFile { file_name: file.file_name.clone(), cause: format!("{cause:?}") };

        let blob = bytes_to_blob(&file.bytes).map_err(error)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(error)?;

        let anchor = document().create_element("a").map_err(error)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|element| error(element.into()))?;
        anchor.set_href(&url);
        anchor.set_download(&file.file_name);
        anchor.click();

        web_sys::Url::revoke_object_url(&url).map_err(error)
    }
}

fn bytes_to_blob(bytes: &[u8]) -> Result<Blob, JsValue> {
    let parts = Array::of1(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type("application/octet-stream");
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}
