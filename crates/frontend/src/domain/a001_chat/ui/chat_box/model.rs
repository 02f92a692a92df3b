//! Chat Box - Model (API functions)

use crate::shared::api_utils::api_url;
use contracts::domain::a001_chat::aggregate::form_fields;
use contracts::domain::a001_chat::ChatReply;
use contracts::shared::error::ApiError;
use gloo_net::http::Request;
use web_sys::{File, FormData};

fn build_form(user_id: &str, query: &str, files: &[File]) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::request(format!("{e:?}")))?;
    form.append_with_str(form_fields::USER_ID, user_id)
        .map_err(|e| ApiError::request(format!("{e:?}")))?;
    form.append_with_str(form_fields::QUERY, query)
        .map_err(|e| ApiError::request(format!("{e:?}")))?;
    for file in files {
        form.append_with_blob_and_filename(form_fields::FILES, file, &file.name())
            .map_err(|e| ApiError::request(format!("{e:?}")))?;
    }
    Ok(form)
}

/// Отправить запрос ассистенту (multipart: user_id, query, files)
pub async fn post_chat(user_id: &str, query: &str, files: &[File]) -> Result<ChatReply, ApiError> {
    let form = build_form(user_id, query, files)?;

    let response = Request::post(&api_url("/chat"))
        .body(form)
        .map_err(ApiError::request)?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    let text = response.text().await.map_err(ApiError::network)?;
    serde_json::from_str::<ChatReply>(&text).map_err(ApiError::decode)
}
