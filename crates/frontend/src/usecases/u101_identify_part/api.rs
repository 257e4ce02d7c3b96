//! Fetch adapter for the identification endpoint: one multipart POST with a
//! single `file` field, no retry.

use contracts::usecases::u101_identify_part::IdentificationResult;
use gloo_net::http::Request;

use crate::shared::api::{decode, FetchError};
use crate::shared::api_utils::api_url;

pub async fn identify_part(
    file: Option<web_sys::File>,
) -> Result<IdentificationResult, FetchError> {
    let file = file.ok_or(FetchError::NoFileSelected)?;

    let form = web_sys::FormData::new().map_err(|e| FetchError::Network(format!("{e:?}")))?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| FetchError::Network(format!("{e:?}")))?;

    // No explicit Content-Type: the browser sets the multipart boundary.
    let response = Request::post(&api_url("/api/identify-part"))
        .body(form)
        .map_err(|e| FetchError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let ok = response.ok();
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    decode::decode_identification(ok, status, &body)
}
