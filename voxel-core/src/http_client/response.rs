use crate::error::{Error, Result};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use super::builder::ApiClient;
use super::error_message::ErrorResponse;
use super::request::ApiMethod;
use super::transport::RawResponse;

const BODY_PREVIEW_SIZE: usize = 200;

impl ApiClient {
    #[instrument(
        name = "api_process_response",
        skip(response),
        fields(status = response.status.as_u16(), url = %url)
    )]
    pub(crate) fn process_response(
        method: ApiMethod,
        response: RawResponse,
        url: &str,
    ) -> Result<Value> {
        let status = response.status;

        debug!(
            status = %status,
            body_length = response.body.len(),
            "HTTP response received"
        );

        if !status.is_success() {
            let (message, source) =
                ErrorResponse::new(status.as_u16(), &response.status_text, &response.body)
                    .resolve();
            let body_preview = preview(&response.body);

            if status.is_server_error() {
                error!(
                    status = status.as_u16(),
                    message = %message,
                    source = ?source,
                    body_preview = %body_preview,
                    "API error response"
                );
            } else {
                warn!(
                    status = status.as_u16(),
                    message = %message,
                    source = ?source,
                    "API error response"
                );
            }
            return Err(Error::api(status.as_u16(), message));
        }

        if status == StatusCode::NO_CONTENT && method.allows_no_content() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            error!(
                error = %e,
                body_preview = %preview(&response.body),
                "Failed to parse successful response body"
            );
            Error::from(e)
        })
    }
}

fn preview(body: &[u8]) -> String {
    let end = body.len().min(BODY_PREVIEW_SIZE);
    String::from_utf8_lossy(&body[..end]).into_owned()
}
