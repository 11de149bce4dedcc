use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::config::CatalogConfig;
use crate::core::error::{CatalogError, CatalogResult};

const APPLICATION_JSON: &str = "application/json";

pub fn build_http_client(config: &CatalogConfig) -> Result<Client, reqwest::Error> {
    Client::builder().user_agent(config.user_agent.as_str()).build()
}

/// GET that asks for JSON back.
pub(crate) fn json_get(client: &Client, url: &str) -> RequestBuilder {
    client.get(url).header(ACCEPT, APPLICATION_JSON)
}

/// POST with a JSON body.
pub(crate) fn json_post<B: Serialize + ?Sized>(
    client: &Client,
    url: &str,
    body: &B,
) -> CatalogResult<RequestBuilder> {
    let bytes = serde_json::to_vec(body).map_err(|e| CatalogError::decode("request body", e))?;
    Ok(client
        .post(url)
        .header(ACCEPT, APPLICATION_JSON)
        .header(CONTENT_TYPE, APPLICATION_JSON)
        .body(bytes))
}

/// Decode a response body. An empty body decodes to `None`.
///
/// The catalog occasionally answers with nothing at all; that is not a decode
/// failure, callers decide whether a missing value is usable.
pub(crate) fn decode_body<T>(context: &'static str, body: &[u8]) -> CatalogResult<Option<T>>
where
    T: DeserializeOwned,
{
    if is_blank(body) {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|e| CatalogError::decode(context, e))
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

/// Send a prepared request and decode its JSON body.
///
/// Any non-success status is an `HttpStatus` error, whatever the body holds.
pub(crate) async fn send_json<T>(
    context: &'static str,
    request: RequestBuilder,
) -> CatalogResult<Option<T>>
where
    T: DeserializeOwned,
{
    send_json_or_error_payload(context, request, |_: &T| false).await
}

/// Like [`send_json`], but a non-success response whose body decodes to a
/// document `is_error_payload` accepts is handed back for the caller to report.
pub(crate) async fn send_json_or_error_payload<T, F>(
    context: &'static str,
    request: RequestBuilder,
    is_error_payload: F,
) -> CatalogResult<Option<T>>
where
    T: DeserializeOwned,
    F: Fn(&T) -> bool,
{
    let response = request.send().await?;
    let status = response.status();
    let url = response.url().to_string();
    let body = response.bytes().await?;

    settle(status, url, decode_body(context, &body), is_error_payload)
}

fn settle<T>(
    status: StatusCode,
    url: String,
    decoded: CatalogResult<Option<T>>,
    is_error_payload: impl Fn(&T) -> bool,
) -> CatalogResult<Option<T>> {
    if status.is_success() {
        return decoded;
    }
    match decoded {
        Ok(Some(value)) if is_error_payload(&value) => Ok(Some(value)),
        _ => Err(CatalogError::HttpStatus {
            url,
            status: status.as_u16(),
        }),
    }
}
